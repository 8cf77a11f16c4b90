fn main() {
    allowance_cli::main();
}

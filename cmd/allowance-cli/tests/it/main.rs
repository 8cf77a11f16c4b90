mod policy;
mod tx;
mod util;
mod version;
mod wallet;

pub mod data;
pub mod slot;

pub mod address;
pub mod interface;
pub mod probe;

pub mod network;
pub mod resolver;

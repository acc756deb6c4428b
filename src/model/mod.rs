pub mod network;
pub mod program;

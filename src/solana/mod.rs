pub mod commitment;
pub mod loader;

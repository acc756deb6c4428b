pub mod private;
pub mod public;

pub mod client;
pub mod config;
pub mod environment;
pub mod internal;

#[cfg(test)]
pub(crate) mod scripted;

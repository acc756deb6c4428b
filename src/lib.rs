//! Helpers for deploying and inspecting programs on the Analos network.

pub mod client;
pub mod deploy;
pub mod error;
pub mod explorer;
pub mod key;
pub mod model;
pub mod solana;
pub mod utils;

pub use {
    client::{
        client::Client,
        config::ClientConfig,
        environment::{Environment, DEFAULT_NETWORK},
    },
    deploy::{
        command::{get_deployment_command, get_upgrade_command},
        cost::estimate_deployment_cost,
        DeploymentConfig,
    },
    error::Error,
    explorer::{get_explorer_url, get_transaction_explorer_url, Explorer},
    key::{private::load_keypair, public::PublicKey},
    model::{
        network::{Health, NetworkStatus},
        program::ProgramVerification,
    },
    solana::commitment::Commitment,
};

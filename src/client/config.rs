use {
    crate::{
        client::environment::{Environment, DEFAULT_NETWORK},
        error::Error,
        solana::commitment::Commitment,
    },
    std::{env, time::Duration},
};

/// Overrides the RPC endpoint.
pub const RPC_URL_VAR: &str = "ANALOS_RPC_URL";

/// Selects a well-known network when no endpoint is given.
pub const NETWORK_VAR: &str = "ANALOS_NETWORK";

/// Overrides the commitment level.
pub const COMMITMENT_VAR: &str = "ANALOS_COMMITMENT";

/// Connection settings for a [`Client`](crate::client::client::Client).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub commitment: Commitment,

    /// Timeout for a single RPC request.
    pub timeout: Duration,

    /// How long to wait for a submitted transaction to show up before giving up.
    pub confirm_transaction_initial_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            rpc_url: DEFAULT_NETWORK.to_string(),
            commitment: Commitment::default(),
            timeout: Duration::from_secs(30),
            confirm_transaction_initial_timeout: Duration::from_secs(60),
        }
    }
}

impl ClientConfig {
    /// Returns a config pointing at `rpc_url`.
    pub fn new(rpc_url: impl Into<String>, commitment: Commitment) -> ClientConfig {
        ClientConfig {
            rpc_url: rpc_url.into(),
            commitment,
            ..ClientConfig::default()
        }
    }

    /// Returns a config pointing at a well-known network.
    pub fn for_environment(env: Environment, commitment: Commitment) -> ClientConfig {
        ClientConfig::new(env.rpc_url(), commitment)
    }

    /// Builds a config from `ANALOS_RPC_URL`, `ANALOS_NETWORK` and
    /// `ANALOS_COMMITMENT`, falling back to the defaults for unset variables.
    ///
    /// `ANALOS_RPC_URL` wins over `ANALOS_NETWORK` when both are set.
    pub fn from_env() -> Result<ClientConfig, Error> {
        ClientConfig::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<ClientConfig, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(network) = lookup(NETWORK_VAR) {
            config.rpc_url = network.parse::<Environment>()?.rpc_url().to_string();
        }
        if let Some(url) = lookup(RPC_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.rpc_url = url;
        }
        if let Some(commitment) = lookup(COMMITMENT_VAR) {
            config.commitment = commitment.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::collections::HashMap};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.rpc_url, "https://rpc.analos.io");
        assert_eq!(config.commitment, Commitment::Confirmed);
        assert_eq!(config.confirm_transaction_initial_timeout, Duration::from_secs(60));
    }

    #[test]
    fn network_and_commitment() {
        let config = ClientConfig::from_lookup(lookup(&[
            (NETWORK_VAR, "devnet"),
            (COMMITMENT_VAR, "finalized"),
        ]))
        .unwrap();

        assert_eq!(config.rpc_url, Environment::Devnet.rpc_url());
        assert_eq!(config.commitment, Commitment::Finalized);
    }

    #[test]
    fn rpc_url_overrides_network() {
        let config = ClientConfig::from_lookup(lookup(&[
            (NETWORK_VAR, "devnet"),
            (RPC_URL_VAR, "http://10.0.0.5:8899"),
        ]))
        .unwrap();

        assert_eq!(config.rpc_url, "http://10.0.0.5:8899");
    }

    #[test]
    fn bad_values() {
        assert!(ClientConfig::from_lookup(lookup(&[(NETWORK_VAR, "moon")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[(COMMITMENT_VAR, "max")])).is_err());
    }
}

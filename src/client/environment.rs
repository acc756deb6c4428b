use {
    crate::error::Error,
    num_derive::FromPrimitive,
    num_traits::FromPrimitive,
    std::{fmt, str::FromStr},
};

pub mod endpoint {
    pub const MAINNET_RPC: &str = "https://rpc.analos.io";
    pub const MAINNET_WS: &str = "wss://rpc.analos.io";
    pub const DEVNET_RPC: &str = "https://devnet-rpc.analos.io";
    pub const DEVNET_WS: &str = "wss://devnet-rpc.analos.io";
    pub const LOCALNET_RPC: &str = "http://localhost:8899";
    pub const LOCALNET_WS: &str = "ws://localhost:8900";
}

/// The RPC endpoint used when none is configured.
pub const DEFAULT_NETWORK: &str = endpoint::MAINNET_RPC;

/// An Analos network.
#[derive(Debug, PartialEq, Eq, FromPrimitive, Copy, Clone)]
pub enum Environment {
    /// Analos production network.
    Mainnet = 1,

    /// Analos development network, where airdrops are available.
    Devnet = 2,

    /// A validator running on this machine.
    Localnet = 3,
}

impl Environment {
    /// Converts u32 to Environment. Defaults to Environment::Mainnet.
    pub fn from_u32(value: u32) -> Environment {
        if let Some(environment) = FromPrimitive::from_u32(value) {
            environment
        } else {
            Environment::Mainnet
        }
    }

    /// JSON RPC endpoint of the network.
    pub fn rpc_url(self) -> &'static str {
        match self {
            Environment::Mainnet => endpoint::MAINNET_RPC,
            Environment::Devnet => endpoint::DEVNET_RPC,
            Environment::Localnet => endpoint::LOCALNET_RPC,
        }
    }

    /// PubSub websocket endpoint of the network.
    pub fn ws_url(self) -> &'static str {
        match self {
            Environment::Mainnet => endpoint::MAINNET_WS,
            Environment::Devnet => endpoint::DEVNET_WS,
            Environment::Localnet => endpoint::LOCALNET_WS,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Mainnet
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Mainnet => write!(f, "mainnet"),
            Environment::Devnet => write!(f, "devnet"),
            Environment::Localnet => write!(f, "localnet"),
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Environment::Mainnet),
            "devnet" => Ok(Environment::Devnet),
            "localnet" | "localhost" => Ok(Environment::Localnet),
            _ => Err(Error::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(Environment::default().rpc_url(), DEFAULT_NETWORK);
        assert_eq!(Environment::Mainnet.ws_url(), "wss://rpc.analos.io");
        assert_eq!(Environment::Devnet.rpc_url(), "https://devnet-rpc.analos.io");
        assert_eq!(Environment::Localnet.rpc_url(), "http://localhost:8899");
        assert_eq!(Environment::Localnet.ws_url(), "ws://localhost:8900");
    }

    #[test]
    fn from_u32_defaults_to_mainnet() {
        assert_eq!(Environment::from_u32(2), Environment::Devnet);
        assert_eq!(Environment::from_u32(0), Environment::Mainnet);
    }

    #[test]
    fn parse() {
        assert_eq!("Devnet".parse::<Environment>().unwrap(), Environment::Devnet);
        assert_eq!("localhost".parse::<Environment>().unwrap(), Environment::Localnet);
        assert!(matches!(
            "testnet".parse::<Environment>(),
            Err(Error::UnknownNetwork(_))
        ));
    }
}

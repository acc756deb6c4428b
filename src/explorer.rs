use std::fmt;

pub mod endpoint {
    pub const ANALOS: &str = "https://explorer.analos.io";
    pub const SOLANA: &str = "https://explorer.solana.com";
}

/// A block explorer that can display Analos addresses and transactions.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Explorer {
    Analos,
    Solana,
}

impl Explorer {
    pub fn base_url(self) -> &'static str {
        match self {
            Explorer::Analos => endpoint::ANALOS,
            Explorer::Solana => endpoint::SOLANA,
        }
    }

    /// Link to an account or program page.
    pub fn address_url(self, address: impl fmt::Display) -> String {
        format!("{}/address/{}", self.base_url(), address)
    }

    /// Link to a transaction page.
    pub fn transaction_url(self, signature: impl fmt::Display) -> String {
        format!("{}/tx/{}", self.base_url(), signature)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Explorer::Analos
    }
}

/// Returns the explorer URL for `address`, on the Solana explorer if `use_solana_explorer` is set.
pub fn get_explorer_url(address: impl fmt::Display, use_solana_explorer: bool) -> String {
    select(use_solana_explorer).address_url(address)
}

/// Returns the explorer URL for a transaction signature.
pub fn get_transaction_explorer_url(signature: impl fmt::Display, use_solana_explorer: bool) -> String {
    select(use_solana_explorer).transaction_url(signature)
}

fn select(use_solana_explorer: bool) -> Explorer {
    if use_solana_explorer {
        Explorer::Solana
    } else {
        Explorer::Analos
    }
}

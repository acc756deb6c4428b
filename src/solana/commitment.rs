use {
    crate::error::Error,
    num_derive::FromPrimitive,
    num_traits::FromPrimitive,
    solana_sdk::commitment_config::CommitmentConfig,
    std::{fmt, str::FromStr},
};

/// Commitment is used to indicate to nodes which bank state to query.
///
/// See: https://docs.solana.com/api/http#configuring-state-commitment
#[derive(Debug, PartialEq, Eq, FromPrimitive, Copy, Clone)]
pub enum Commitment {
    /// The node will query its most recent block.
    Processed = 0,

    /// The node will query the most recent block that has been voted on by supermajority of the cluster.
    Confirmed = 1,

    /// The node will query the most recent block confirmed by supermajority of the cluster as having reached maximum lockout.
    Finalized = 2,
}

impl Commitment {
    /// Converts i32 to Commitment. Defaults to Commitment::Confirmed.
    pub fn from_i32(value: i32) -> Commitment {
        if let Some(commitment) = FromPrimitive::from_i32(value) {
            commitment
        } else {
            Commitment::Confirmed
        }
    }

    /// Returns the name used by the JSON RPC API and the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }

    /// Returns the commitment as an RPC client commitment config.
    pub fn to_config(self) -> CommitmentConfig {
        match self {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl Default for Commitment {
    fn default() -> Self {
        Commitment::Confirmed
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Commitment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "processed" => Ok(Commitment::Processed),
            "confirmed" => Ok(Commitment::Confirmed),
            "finalized" => Ok(Commitment::Finalized),
            _ => Err(Error::UnknownCommitment(s.to_string())),
        }
    }
}

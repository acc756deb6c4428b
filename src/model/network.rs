use serde::Serialize;

/// Health of the RPC node as reported by `getHealth`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Ok,

    /// The node answered but is behind the cluster.
    Degraded,

    /// The node could not be queried.
    Error,
}

/// A snapshot of the network as seen by one RPC node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub version: String,
    pub slot: u64,
    pub block_height: u64,
    pub health: Health,
}

impl NetworkStatus {
    pub const UNKNOWN_VERSION: &'static str = "unknown";

    /// The status reported when the node cannot be reached.
    pub fn unreachable() -> NetworkStatus {
        NetworkStatus {
            version: NetworkStatus::UNKNOWN_VERSION.to_string(),
            slot: 0,
            block_height: 0,
            health: Health::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_serializes_as_error() {
        let json = serde_json::to_value(NetworkStatus::unreachable()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "version": "unknown",
                "slot": 0,
                "blockHeight": 0,
                "health": "error",
            })
        );
    }
}

use {
    crate::utils::lamports_to_sol,
    rust_decimal::Decimal,
    serde::{Serialize, Serializer},
    solana_sdk::pubkey::Pubkey,
};

/// What the chain knows about a program account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramVerification {
    pub is_deployed: bool,
    pub is_executable: bool,

    /// Balance of the program account in lamports.
    pub lamports: u64,

    /// Set for programs owned by the upgradeable loader.
    #[serde(serialize_with = "serialize_address")]
    pub program_data_address: Option<Pubkey>,

    /// Set when the program data account could be read and the program is still upgradeable.
    #[serde(serialize_with = "serialize_address")]
    pub authority: Option<Pubkey>,

    /// Current slot of the node at the time of the check.
    pub slot: Option<u64>,

    /// Slot the program was last deployed or upgraded at.
    pub last_deploy_slot: Option<u64>,
}

impl ProgramVerification {
    /// Result for a program id with no account behind it.
    pub fn not_deployed() -> ProgramVerification {
        ProgramVerification::default()
    }

    /// Balance of the program account in SOL.
    pub fn balance(&self) -> Decimal {
        lamports_to_sol(self.lamports)
    }

    /// True if the program can still be upgraded.
    pub fn is_upgradeable(&self) -> bool {
        self.authority.is_some()
    }
}

/// Addresses are written base58-encoded, as the RPC API and explorers show them.
fn serialize_address<S>(address: &Option<Pubkey>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match address {
        Some(address) => serializer.serialize_some(&address.to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_deployed_is_empty() {
        let verification = ProgramVerification::not_deployed();

        assert!(!verification.is_deployed);
        assert!(!verification.is_executable);
        assert_eq!(verification.balance(), Decimal::ZERO);
        assert_eq!(verification.program_data_address, None);
        assert_eq!(verification.slot, None);
        assert!(!verification.is_upgradeable());
    }

    #[test]
    fn balance_in_sol() {
        let verification = ProgramVerification {
            is_deployed: true,
            lamports: 1_141_440,
            ..ProgramVerification::default()
        };

        assert_eq!(verification.balance().to_string(), "0.00114144");
    }

    #[test]
    fn serializes_addresses_as_base58() {
        let program_data_address = solana_sdk::bpf_loader_upgradeable::id();
        let verification = ProgramVerification {
            is_deployed: true,
            is_executable: true,
            lamports: 1_141_440,
            program_data_address: Some(program_data_address),
            authority: None,
            slot: Some(250_000_000),
            last_deploy_slot: Some(249_999_000),
        };

        assert_eq!(
            serde_json::to_value(&verification).unwrap(),
            serde_json::json!({
                "isDeployed": true,
                "isExecutable": true,
                "lamports": 1_141_440,
                "programDataAddress": "BPFLoaderUpgradeab1e11111111111111111111111",
                "authority": null,
                "slot": 250_000_000,
                "lastDeploySlot": 249_999_000,
            })
        );
    }
}

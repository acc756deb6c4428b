use solana_sdk::{
    bpf_loader_upgradeable::{self, UpgradeableLoaderState},
    pubkey::Pubkey as SolanaPublicKey,
};

/// State of an upgradeable program's data account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramData {
    /// Slot the program was last deployed or upgraded at.
    pub slot: u64,

    /// Authority allowed to upgrade the program, `None` once the program is immutable.
    pub upgrade_authority: Option<SolanaPublicKey>,
}

/// The upgradeable BPF loader that owns deployable programs.
pub fn id() -> SolanaPublicKey {
    bpf_loader_upgradeable::id()
}

/// Returns true if the account owner is the upgradeable loader.
pub fn is_upgradeable(owner: &SolanaPublicKey) -> bool {
    owner.eq(&id())
}

/// Derives the program data address for a program owned by the upgradeable loader.
pub fn program_data_address(program_id: &SolanaPublicKey) -> SolanaPublicKey {
    SolanaPublicKey::find_program_address(&[program_id.as_ref()], &id()).0
}

/// Reads the program data address out of a program account.
///
/// Returns None if the data is not a `Program` loader state.
pub fn decode_program(data: &[u8]) -> Option<SolanaPublicKey> {
    match bincode::deserialize::<UpgradeableLoaderState>(data).ok()? {
        UpgradeableLoaderState::Program {
            programdata_address,
        } => Some(programdata_address),
        _ => None,
    }
}

/// Decodes the metadata header of a program data account.
///
/// Returns None if the data is not a `ProgramData` loader state.
pub fn decode_program_data(data: &[u8]) -> Option<ProgramData> {
    let header = data.get(..UpgradeableLoaderState::size_of_programdata_metadata())?;

    match bincode::deserialize::<UpgradeableLoaderState>(header).ok()? {
        UpgradeableLoaderState::ProgramData {
            slot,
            upgrade_authority_address,
        } => Some(ProgramData {
            slot,
            upgrade_authority: upgrade_authority_address,
        }),
        _ => None,
    }
}

/// Account sizes needed to host a program binary of `program_len` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramAccountSizes {
    pub program: usize,
    pub program_data: usize,
}

impl ProgramAccountSizes {
    pub fn for_program_len(program_len: usize) -> ProgramAccountSizes {
        ProgramAccountSizes {
            program: UpgradeableLoaderState::size_of_program(),
            program_data: UpgradeableLoaderState::size_of_programdata(program_len),
        }
    }
}

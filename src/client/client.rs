use {
    crate::{
        client::{config::ClientConfig, environment::Environment, internal::InternalClient},
        deploy::{command::get_deployment_command, DeploymentConfig},
        error::Error,
        key::public::PublicKey,
        model::{network::NetworkStatus, program::ProgramVerification},
        solana::{
            commitment::Commitment,
            loader::{self, ProgramAccountSizes},
        },
        utils::lamports_to_sol,
    },
    rust_decimal::Decimal,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_sdk::{pubkey::Pubkey as SolanaPublicKey, signature::Signature},
    std::sync::Arc,
    tracing::{debug, warn},
};

type Result<T> = std::result::Result<T, Error>;

/// An interface for querying and preparing deployments on an Analos network.
pub struct Client {
    pub internal: InternalClient,
    pub config: ClientConfig,
    rpc: Arc<RpcClient>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Client {
        let rpc = RpcClient::new_with_timeouts_and_commitment(
            config.rpc_url.clone(),
            config.timeout,
            config.commitment.to_config(),
            config.confirm_transaction_initial_timeout,
        );

        Client::with_rpc_client(config, rpc)
    }

    /// Wraps an already built RPC client.
    ///
    /// Only `config.commitment` is applied to queries; the client's own
    /// endpoint and timeouts are kept.
    pub fn with_rpc_client(config: ClientConfig, rpc: RpcClient) -> Client {
        let rpc = Arc::new(rpc);

        Client {
            internal: InternalClient::new(rpc.clone()),
            config,
            rpc,
        }
    }

    /// Connects to a well-known network. Commitment defaults to `confirmed`.
    pub fn from_environment(env: Environment, commitment: Option<Commitment>) -> Client {
        Client::new(ClientConfig::for_environment(
            env,
            commitment.unwrap_or_default(),
        ))
    }

    /// The underlying RPC client, for calls this crate does not wrap.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub fn commitment(&self) -> Commitment {
        self.config.commitment
    }

    /// Checks whether a program is deployed and, for upgradeable programs,
    /// who may upgrade it.
    ///
    /// A missing program data account or one that cannot be decoded leaves
    /// the authority unset rather than failing the check.
    pub async fn verify_program(&self, program_id: &PublicKey) -> Result<ProgramVerification> {
        let program_id = program_id.to_solana_key();
        let commitment = self.commitment();

        let account = match self
            .internal
            .account
            .get_account(&program_id, commitment)
            .await?
        {
            Some(account) => account,
            None => {
                debug!(program = %program_id, "program account not found");
                return Ok(ProgramVerification::not_deployed());
            }
        };

        let mut verification = ProgramVerification {
            is_deployed: true,
            is_executable: account.executable,
            lamports: account.lamports,
            ..ProgramVerification::default()
        };

        if loader::is_upgradeable(&account.owner) {
            let program_data_address = loader::decode_program(&account.data)
                .unwrap_or_else(|| loader::program_data_address(&program_id));
            verification.program_data_address = Some(program_data_address);

            self.read_program_data(&program_data_address, &mut verification)
                .await;
        }

        verification.slot = Some(self.internal.network.get_slot(commitment).await?);

        Ok(verification)
    }

    async fn read_program_data(
        &self,
        program_data_address: &SolanaPublicKey,
        verification: &mut ProgramVerification,
    ) {
        let account = self
            .internal
            .account
            .get_account(program_data_address, self.commitment())
            .await;

        match account {
            Ok(Some(account)) => match loader::decode_program_data(&account.data) {
                Some(program_data) => {
                    verification.authority = program_data.upgrade_authority;
                    verification.last_deploy_slot = Some(program_data.slot);
                }
                None => warn!(address = %program_data_address, "undecodable program data account"),
            },
            Ok(None) => warn!(address = %program_data_address, "program data account not found"),
            Err(err) => warn!(address = %program_data_address, %err, "failed to read program data"),
        }
    }

    /// Returns the command that upgrades `program_id`.
    ///
    /// The program must already be deployed and executable.
    pub async fn get_upgrade_command(
        &self,
        config: &DeploymentConfig,
        program_id: &PublicKey,
    ) -> Result<String> {
        let verification = self.verify_program(program_id).await?;

        if !verification.is_deployed {
            return Err(Error::ProgramNotDeployed);
        }
        if !verification.is_executable {
            return Err(Error::ProgramNotExecutable);
        }

        get_deployment_command(config)
    }

    /// Reports version, slot, block height and health of the node.
    ///
    /// Never fails: if any query errors, an `unreachable` status is returned.
    pub async fn get_network_status(&self) -> NetworkStatus {
        match self.try_network_status().await {
            Ok(status) => status,
            Err(err) => {
                warn!(url = %self.config.rpc_url, %err, "network status unavailable");
                NetworkStatus::unreachable()
            }
        }
    }

    async fn try_network_status(&self) -> Result<NetworkStatus> {
        let network = &self.internal.network;
        let commitment = self.commitment();

        let version = network.get_version().await?;
        let slot = network.get_slot(commitment).await?;
        let block_height = network.get_block_height(commitment).await?;
        let health = network.get_health().await?;

        Ok(NetworkStatus {
            version: if version.is_empty() {
                NetworkStatus::UNKNOWN_VERSION.to_string()
            } else {
                version
            },
            slot,
            block_height,
            health,
        })
    }

    /// Retrieves the balance for an account, in lamports.
    pub async fn get_balance(&self, account: &PublicKey) -> Result<u64> {
        let lamports = self
            .internal
            .account
            .get_balance(&account.to_solana_key(), self.commitment())
            .await?;

        Ok(lamports)
    }

    /// Retrieves the balance for an account, in SOL.
    pub async fn get_balance_sol(&self, account: &PublicKey) -> Result<Decimal> {
        Ok(lamports_to_sol(self.get_balance(account).await?))
    }

    /// Requests an airdrop and waits for it to be confirmed.
    /// Only available on networks with a faucet.
    pub async fn request_airdrop(&self, account: &PublicKey, lamports: u64) -> Result<Signature> {
        let signature = self
            .internal
            .airdrop
            .request_airdrop(&account.to_solana_key(), lamports, Commitment::Confirmed)
            .await?;

        Ok(signature)
    }

    /// Lamports needed to make the program and program data accounts
    /// rent exempt for a binary of `program_len` bytes.
    pub async fn estimate_rent_exempt_cost(&self, program_len: usize) -> Result<u64> {
        let sizes = ProgramAccountSizes::for_program_len(program_len);
        let account = &self.internal.account;

        let program = account
            .get_minimum_balance_for_rent_exemption(sizes.program)
            .await?;
        let program_data = account
            .get_minimum_balance_for_rent_exemption(sizes.program_data)
            .await?;

        Ok(program.saturating_add(program_data))
    }
}

use {
    crate::{
        client::client::Client, deploy::DeploymentConfig, error::Error, key::public::PublicKey,
    },
    std::path::Path,
};

/// Separator between CLI arguments, so the command pastes as a multi-line shell command.
const LINE_BREAK: &str = " \\\n  ";

/// Returns the `solana program deploy` invocation for `config`.
///
/// Both the program binary and the program keypair must exist on disk.
/// The same command upgrades an already deployed program.
pub fn get_deployment_command(config: &DeploymentConfig) -> Result<String, Error> {
    if !config.program_path.exists() {
        return Err(Error::ProgramNotFound(config.program_path.clone()));
    }
    if !config.program_keypair_path.exists() {
        return Err(Error::KeypairNotFound(config.program_keypair_path.clone()));
    }

    let mut args = vec![
        "solana program deploy".to_string(),
        quote(&config.program_path),
        format!("--url {}", config.rpc_url()),
        format!("--keypair {}", quote(&config.deployer_keypair_path)),
        format!("--program-id {}", quote(&config.program_keypair_path)),
    ];

    if let Some(commitment) = config.commitment {
        args.push(format!("--commitment {}", commitment));
    }
    if let Some(max_retries) = config.max_retries {
        args.push(format!("--max-sign-attempts {}", max_retries));
    }
    if config.use_rpc {
        args.push("--use-rpc".to_string());
    }

    Ok(args.join(LINE_BREAK))
}

/// Returns the command that upgrades `program_id`, after checking on chain
/// that the program exists and is executable.
pub async fn get_upgrade_command(
    config: &DeploymentConfig,
    program_id: &PublicKey,
) -> Result<String, Error> {
    Client::new(config.client_config())
        .get_upgrade_command(config, program_id)
        .await
}

fn quote(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

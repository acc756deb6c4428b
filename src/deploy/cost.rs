use {
    crate::error::Error,
    rust_decimal::Decimal,
    std::{fs, path::Path},
};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Rough SOL cost per megabyte of program binary.
const COST_PER_MB: u64 = 2;

/// Returns the fixed part of the estimate, 0.5 SOL.
fn base_cost() -> Decimal {
    Decimal::new(5, 1)
}

/// Estimates the SOL needed to deploy the program binary at `program_path`.
///
/// This is a heuristic of 2 SOL per MB plus 0.5 SOL. Use
/// [`Client::estimate_rent_exempt_cost`](crate::client::client::Client::estimate_rent_exempt_cost)
/// for a figure based on the cluster's rent parameters.
pub fn estimate_deployment_cost<P: AsRef<Path>>(program_path: P) -> Result<Decimal, Error> {
    let program_path = program_path.as_ref();
    if !program_path.exists() {
        return Err(Error::ProgramNotFound(program_path.to_path_buf()));
    }

    let program_len = fs::metadata(program_path)?.len();

    Ok(estimate_cost_for_len(program_len))
}

/// Same heuristic as [`estimate_deployment_cost`] for a binary of `program_len` bytes.
pub fn estimate_cost_for_len(program_len: u64) -> Decimal {
    let size_in_mb = Decimal::from(program_len) / Decimal::from(BYTES_PER_MB);

    (size_in_mb * Decimal::from(COST_PER_MB) + base_cost()).normalize()
}

use {
    crate::error::Error,
    rust_decimal::{prelude::*, RoundingStrategy::ToZero},
    std::time::Duration,
};

/// The number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimal places carried by a SOL amount.
const SOL_DECIMALS: u32 = 9;

/// Converts a string SOL amount to lamports.
///
/// If the provided SOL amount contains more than 9 decimal
/// places (i.e. an inexact number of lamports), additional
/// decimal places will be ignored.
///
/// For example, passing in a value of "0.0000000009" will result
/// in a value of 0 lamports being returned.
pub fn sol_to_lamports(amount: &str) -> Result<u64, Error> {
    let sol = Decimal::from_str(amount.trim())
        .map_err(|e| Error::InvalidAmount(format!("{}: {}", amount, e)))?;
    if sol.is_sign_negative() {
        return Err(Error::InvalidAmount(amount.to_string()));
    }

    let lamports = sol
        .round_dp_with_strategy(SOL_DECIMALS, ToZero)
        .checked_mul(lamports_in_one_sol())
        .ok_or_else(|| Error::InvalidAmount(amount.to_string()))?;

    lamports
        .normalize()
        .to_u64()
        .ok_or_else(|| Error::InvalidAmount(amount.to_string()))
}

/// Converts an integer lamport amount into a SOL amount.
pub fn lamports_to_sol(amount: u64) -> Decimal {
    (Decimal::from(amount) / lamports_in_one_sol()).normalize()
}

/// Waits for the given duration without blocking the runtime.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await
}

/// Returns the number of lamports in one SOL.
fn lamports_in_one_sol() -> Decimal {
    Decimal::from(LAMPORTS_PER_SOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sol_to_lamports() {
        assert_eq!(sol_to_lamports("0.0000000009").unwrap(), 0);
        assert_eq!(sol_to_lamports("0.000000015").unwrap(), 15);
        assert_eq!(sol_to_lamports("1").unwrap(), LAMPORTS_PER_SOL);
        assert_eq!(sol_to_lamports("2.5").unwrap(), 2_500_000_000);
        assert_eq!(sol_to_lamports("1.1234567899").unwrap(), 1_123_456_789);
    }

    #[test]
    fn test_sol_to_lamports_rejects_garbage() {
        assert!(matches!(
            sol_to_lamports("lots"),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(sol_to_lamports("-1"), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_sol_to_lamports_out_of_range() {
        // Decimal::MAX, which overflows once scaled to lamports.
        assert!(matches!(
            sol_to_lamports("79228162514264337593543950335"),
            Err(Error::InvalidAmount(_))
        ));
        // Fits in a Decimal but not in u64 lamports.
        assert!(matches!(
            sol_to_lamports("18446744074"),
            Err(Error::InvalidAmount(_))
        ));
        assert_eq!(
            sol_to_lamports("18446744073.709551615").unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(15).to_string(), "0.000000015");
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL).to_string(), "1");
        assert_eq!(lamports_to_sol(2_500_000_000).to_string(), "2.5");
        assert_eq!(lamports_to_sol(0).to_string(), "0");
    }

    #[tokio::test]
    async fn test_sleep() {
        let start = std::time::Instant::now();
        sleep(Duration::from_millis(10)).await;
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}

//! Formatting of on-chain integer amounts (wei) as decimal strings.

use alloy_primitives::U256;

/// Decimals of every EVM native currency the explorer shows.
pub const NATIVE_DECIMALS: u8 = 18;
/// Decimals of gwei relative to wei.
pub const GWEI_DECIMALS: u8 = 9;

/// Formats `value` scaled down by `decimals`, keeping at most `max_fraction`
/// fractional digits and dropping trailing zeros.
pub fn format_units(value: U256, decimals: u8, max_fraction: usize) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = value / divisor;
    let remainder = value % divisor;

    if remainder.is_zero() || max_fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{:0>width$}", remainder, width = decimals as usize);
    let fraction = &fraction[..fraction.len().min(max_fraction)];
    let trimmed = fraction.trim_end_matches('0');
    if trimmed.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{trimmed}")
    }
}

/// Full-precision native amount, e.g. "0.000021".
pub fn format_native(wei: U256) -> String {
    format_units(wei, NATIVE_DECIMALS, NATIVE_DECIMALS as usize)
}

/// Native amount rounded down to 6 fractional digits, as shown for balances.
pub fn format_balance(wei: U256) -> String {
    format_units(wei, NATIVE_DECIMALS, 6)
}

pub fn format_gwei(wei: U256) -> String {
    format_units(wei, GWEI_DECIMALS, GWEI_DECIMALS as usize)
}

/// Native amount as a float, for fiat estimates. `None` when the value does
/// not fit in 128 bits.
pub fn native_as_f64(wei: U256) -> Option<f64> {
    u128::try_from(wei)
        .ok()
        .map(|w| w as f64 / 10_f64.powi(NATIVE_DECIMALS as i32))
}

use crate::core::InputError;
use ethers::types::{Address, U256};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Format a smallest-unit amount as a decimal string with exactly `precision`
/// fractional digits, rounding half up.
pub fn format_units(amount: U256, decimals: u8, precision: usize) -> String {
    let decimals = decimals as usize;
    let scaled = if decimals <= precision {
        amount.saturating_mul(U256::exp10(precision - decimals))
    } else {
        let divisor = U256::exp10(decimals - precision);
        let half = divisor / 2;
        amount.saturating_add(half) / divisor
    };

    if precision == 0 {
        return scaled.to_string();
    }

    let unit = U256::exp10(precision);
    let whole = scaled / unit;
    let fraction = scaled % unit;
    format!("{}.{:0>width$}", whole, fraction.to_string(), width = precision)
}

/// Parse a human-readable decimal amount into the token's smallest unit.
/// Fractional digits beyond `decimals` are truncated.
pub fn parse_units(input: &str, decimals: u8) -> Result<U256, InputError> {
    let trimmed = input.trim();
    let value = Decimal::from_str(trimmed)
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if value.is_sign_negative() {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }

    let mantissa = U256::from(value.mantissa().unsigned_abs());
    let scale = value.scale() as usize;
    let decimals = decimals as usize;

    let amount = if decimals >= scale {
        mantissa
            .checked_mul(U256::exp10(decimals - scale))
            .ok_or_else(|| InputError::NotANumber(trimmed.to_string()))?
    } else {
        mantissa / U256::exp10(scale - decimals)
    };

    Ok(amount)
}

/// Shorten an address for display: `0x1234…abcd`.
pub fn short_address(address: &Address) -> String {
    let full = format!("{:?}", address);
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

//! Conversion between whole token amounts and their smallest denomination

use alloy::primitives::{
    utils::{format_units, parse_units, ParseUnits},
    U256,
};

use crate::errors::ScriptError;

/// Scale a decimal token amount (e.g. `"500000"` or `"0.5"`) to the smallest denomination
pub fn parse_token_amount(amount: &str, decimals: u8) -> Result<U256, ScriptError> {
    match parse_units(amount.trim(), decimals)
        .map_err(|e| ScriptError::InvalidParameters(format!("amount `{amount}`: {e}")))?
    {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => Err(ScriptError::InvalidParameters(format!(
            "amount `{amount}` is negative"
        ))),
    }
}

/// Format an amount expressed in the smallest denomination back to whole tokens.
///
/// Trailing zeros are trimmed but at least one fractional digit is kept, so
/// `500000 * 10^18` renders as `500000.0`.
pub fn format_token_amount(value: U256, decimals: u8) -> Result<String, ScriptError> {
    let formatted = format_units(value, decimals)
        .map_err(|e| ScriptError::InvalidParameters(e.to_string()))?;

    let Some((whole, fraction)) = formatted.split_once('.') else {
        return Ok(format!("{formatted}.0"));
    };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        Ok(format!("{whole}.0"))
    } else {
        Ok(format!("{whole}.{fraction}"))
    }
}

/// Scale a whole-token count by `10^decimals`
pub fn scale_whole_tokens(amount: U256, decimals: u8) -> U256 {
    amount * U256::from(10u64).pow(U256::from(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ether() -> U256 {
        U256::from(10u64).pow(U256::from(18u64))
    }

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(
            parse_token_amount("500000", 18).unwrap(),
            U256::from(500_000u64) * ether()
        );
        assert_eq!(
            parse_token_amount("0.5", 18).unwrap(),
            ether() / U256::from(2u64)
        );
        assert_eq!(parse_token_amount("42", 0).unwrap(), U256::from(42u64));
    }

    #[test]
    fn rejects_garbage_and_negative_amounts() {
        assert!(matches!(
            parse_token_amount("lots", 18),
            Err(ScriptError::InvalidParameters(_))
        ));
        assert!(matches!(
            parse_token_amount("-1", 18),
            Err(ScriptError::InvalidParameters(_))
        ));
    }

    #[test]
    fn formats_like_format_ether() {
        let half_supply = U256::from(500_000u64) * ether();
        assert_eq!(format_token_amount(half_supply, 18).unwrap(), "500000.0");
        assert_eq!(
            format_token_amount(ether() / U256::from(4u64), 18).unwrap(),
            "0.25"
        );
        assert_eq!(format_token_amount(U256::ZERO, 18).unwrap(), "0.0");
    }

    #[test]
    fn scales_whole_tokens() {
        assert_eq!(
            scale_whole_tokens(U256::from(1_000_000u64), 18),
            U256::from(1_000_000u64) * ether()
        );
        assert_eq!(scale_whole_tokens(U256::from(7u64), 0), U256::from(7u64));
    }
}

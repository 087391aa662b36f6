// Operand parsing and product formatting

use crate::error::{MulError, MulResult};

/// Render a 128-bit value as `0x` followed by 32 lowercase hex digits
pub fn format_hex(value: u128) -> String {
    format!("0x{}", hex::encode(value.to_be_bytes()))
}

/// Parse a u64 operand given in decimal or 0x-prefixed hex
///
/// Surrounding whitespace and `_` digit separators are ignored.
pub fn parse_operand(text: &str) -> MulResult<u64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();

    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => cleaned.parse::<u64>(),
    };

    parsed.map_err(|_| MulError::InvalidOperand(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(0), "0x00000000000000000000000000000000");
        assert_eq!(format_hex(1u128 << 64), "0x00000000000000010000000000000000");
        assert_eq!(
            format_hex(0xFFFF_FFFF_FFFF_FFFE_0000_0000_0000_0001),
            "0xfffffffffffffffe0000000000000001"
        );
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("42"), Ok(42));
        assert_eq!(parse_operand(" 18446744073709551615 "), Ok(u64::MAX));
        assert_eq!(parse_operand("0xFFFF_FFFF_FFFF_FFFF"), Ok(u64::MAX));
        assert_eq!(parse_operand("0X100000000"), Ok(1 << 32));
        assert_eq!(parse_operand("1_000_000"), Ok(1_000_000));
    }

    #[test]
    fn test_parse_operand_rejects_out_of_range() {
        assert_eq!(
            parse_operand("18446744073709551616"),
            Err(MulError::InvalidOperand("18446744073709551616".to_string()))
        );
        assert!(parse_operand("0x1_0000_0000_0000_0000").is_err());
        assert!(parse_operand("-1").is_err());
        assert!(parse_operand("0x").is_err());
        assert!(parse_operand("").is_err());
        assert!(parse_operand("twelve").is_err());
    }
}

// Split-limb widening multiply
// Builds the 128-bit product from four 32x32->64 partial products using only u64 arithmetic

const LOW_MASK: u64 = 0xFFFF_FFFF;

/// Multiply two u64 numbers without any 128-bit arithmetic
/// Returns (high, low) parts of the 128-bit result
pub fn mul_u64(a: u64, b: u64) -> (u64, u64) {
    let a_lo = a & LOW_MASK;
    let a_hi = a >> 32;
    let b_lo = b & LOW_MASK;
    let b_hi = b >> 32;

    // Partial products, each < 2^64
    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    // Column at bit 32: at most 3 * (2^32 - 1), so it cannot overflow
    let mid = (lo_lo >> 32) + (lo_hi & LOW_MASK) + (hi_lo & LOW_MASK);

    let low = (mid << 32) | (lo_lo & LOW_MASK);
    let high = hi_hi + (lo_hi >> 32) + (hi_lo >> 32) + (mid >> 32);

    (high, low)
}

/// Exact product of two u64 values, assembled from limbs
pub fn mul_wide(x: u64, y: u64) -> u128 {
    let (high, low) = mul_u64(x, y);
    super::join_u128(high, low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limb_max_operands() {
        // Every partial product and every carry is at its largest here
        assert_eq!(mul_u64(u64::MAX, u64::MAX), (0xFFFF_FFFF_FFFF_FFFE, 1));
    }

    #[test]
    fn test_limb_carry_across_midpoint() {
        // 2^32 * 2^32 = 2^64: the whole product moves into the high limb
        assert_eq!(mul_u64(1 << 32, 1 << 32), (1, 0));
        // (2^32 - 1) * (2^32 + 1) = 2^64 - 1 stays entirely in the low limb
        assert_eq!(mul_u64(0xFFFF_FFFF, 0x1_0000_0001), (0, u64::MAX));
    }

    #[test]
    fn test_limb_mid_column_carry() {
        // Both cross terms saturate their low halves, forcing a carry out of `mid`
        let a = 0xFFFF_FFFF_0000_0001u64;
        let b = 0x0000_0001_FFFF_FFFFu64;
        let expected = a as u128 * b as u128;
        assert_eq!(mul_wide(a, b), expected);
    }

    #[test]
    fn test_limb_small_values() {
        assert_eq!(mul_u64(3, 5), (0, 15));
        assert_eq!(mul_u64(0, u64::MAX), (0, 0));
        assert_eq!(mul_u64(1, u64::MAX), (0, u64::MAX));
    }
}

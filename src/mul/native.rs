// Native widening multiply
// Widen one operand to u128 first so the multiply itself runs at 128 bits

/// Exact product of two u64 values
#[inline]
pub fn mul_wide(x: u64, y: u64) -> u128 {
    x as u128 * y as u128
}

/// Multiply two u64 numbers
/// Returns (high, low) parts of the 128-bit result
#[inline]
pub fn mul_u64(a: u64, b: u64) -> (u64, u64) {
    let result = mul_wide(a, b);
    ((result >> 64) as u64, result as u64)
}

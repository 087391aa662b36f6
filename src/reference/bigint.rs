// Arbitrary-precision reference
// Wrapper around num-bigint used as the oracle for widening-multiply checks

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Reference big integer type alias
pub type RefBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RefBigInt {
    RefBigInt::from(n)
}

/// Create a big integer from a 128-bit value
pub fn to_biguint(n: u128) -> RefBigInt {
    RefBigInt::from(n)
}

/// Narrow a big integer back to u128, if it fits
pub fn to_u128(n: &RefBigInt) -> Option<u128> {
    n.to_u128()
}

/// Exact product of two u64 values at arbitrary precision
pub fn reference_product(x: u64, y: u64) -> RefBigInt {
    from_u64(x) * from_u64(y)
}

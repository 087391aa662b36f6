// Verification against the arbitrary-precision reference
// Boundary sweeps and random sampling for any multiply strategy

use rand::{thread_rng, Rng};

use super::bigint::{reference_product, to_biguint};
use crate::error::{MulError, MulResult};
use crate::mul::Strategy;

/// Operands that exercise every limb and carry edge
pub fn boundary_operands() -> Vec<u64> {
    vec![
        0,
        1,
        2,
        1 << 31,
        (1 << 32) - 1,
        1 << 32,
        (1 << 32) + 1,
        1 << 63,
        u64::MAX - 1,
        u64::MAX,
    ]
}

/// Compare one product from `multiply` against the reference
pub fn check_fn<F>(name: &'static str, multiply: F, x: u64, y: u64) -> MulResult<u128>
where
    F: Fn(u64, u64) -> u128,
{
    let actual = multiply(x, y);
    let expected = reference_product(x, y);

    if to_biguint(actual) != expected {
        tracing::warn!(strategy = name, x, y, %expected, actual, "product mismatch");
        return Err(MulError::Mismatch {
            strategy: name,
            x,
            y,
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(actual)
}

/// Compute `x * y` with `strategy` and check it against the reference
pub fn check_product(strategy: Strategy, x: u64, y: u64) -> MulResult<u128> {
    check_fn(strategy.name(), |a, b| strategy.multiply(a, b), x, y)
}

/// Check every ordered pair of boundary operands
/// Returns the number of pairs checked
pub fn verify_boundaries(strategy: Strategy) -> MulResult<usize> {
    let operands = boundary_operands();
    let mut checked = 0;

    for &x in &operands {
        for &y in &operands {
            check_product(strategy, x, y)?;
            checked += 1;
        }
    }

    tracing::debug!(strategy = strategy.name(), checked, "boundary sweep passed");
    Ok(checked)
}

/// Check `samples` random operand pairs drawn from the thread RNG
pub fn verify_random(strategy: Strategy, samples: usize) -> MulResult<usize> {
    let mut rng = thread_rng();
    verify_random_with(&mut rng, strategy, samples)
}

/// Check `samples` random operand pairs drawn from `rng`
pub fn verify_random_with<R: Rng + ?Sized>(
    rng: &mut R,
    strategy: Strategy,
    samples: usize,
) -> MulResult<usize> {
    for _ in 0..samples {
        let x: u64 = rng.gen();
        let y: u64 = rng.gen();
        check_product(strategy, x, y)?;
    }

    tracing::debug!(strategy = strategy.name(), samples, "random sweep passed");
    Ok(samples)
}

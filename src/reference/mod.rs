// Reference Module
// Arbitrary-precision oracle and verification sweeps

pub mod bigint;
pub mod verify;

pub use bigint::{reference_product, to_biguint, RefBigInt};
pub use verify::{
    boundary_operands, check_fn, check_product, verify_boundaries, verify_random,
    verify_random_with,
};

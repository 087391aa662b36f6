// uprod: exact 64 x 64 -> 128-bit unsigned multiplication

pub mod assembly;
pub mod error;
pub mod mul;
pub mod reference;
pub mod util;

pub use error::{MulError, MulResult};
pub use mul::{join_u128, mul_u64, split_u128, store_uprod, uprod, Strategy, WideProduct};

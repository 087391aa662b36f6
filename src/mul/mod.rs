// Widening Multiply Module
// Exact u64 x u64 -> u128 products behind one signature, whichever strategy runs

pub mod limb;
pub mod native;

use std::fmt;
use std::str::FromStr;

use crate::assembly;
use crate::error::MulError;
use crate::util::format::format_hex;

/// Implementation used to compute a product
///
/// All strategies return bit-identical results for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Widen to u128, then multiply
    Native,
    /// Four 32x32->64 partial products with carry propagation
    SplitLimb,
    /// Single x86-64 `MUL` instruction (falls back to `Native` elsewhere)
    Asm,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Native, Strategy::SplitLimb, Strategy::Asm];

    /// Pick the fastest strategy available in this process
    pub fn detect() -> Self {
        if assembly::asm_available() {
            Strategy::Asm
        } else {
            Strategy::Native
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Native => "native",
            Strategy::SplitLimb => "limb",
            Strategy::Asm => "asm",
        }
    }

    /// Exact product of `x` and `y`
    #[inline]
    pub fn multiply(self, x: u64, y: u64) -> u128 {
        match self {
            Strategy::Native => native::mul_wide(x, y),
            Strategy::SplitLimb => limb::mul_wide(x, y),
            Strategy::Asm => {
                let (high, low) = assembly::mul_u64(x, y);
                join_u128(high, low)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = MulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(Strategy::Native),
            "limb" | "split-limb" => Ok(Strategy::SplitLimb),
            "asm" => Ok(Strategy::Asm),
            _ => Err(MulError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Compute the exact 128-bit product of two u64 values
#[inline]
pub fn uprod(x: u64, y: u64) -> u128 {
    Strategy::detect().multiply(x, y)
}

/// Store the exact 128-bit product of `x` and `y` into `dest`
///
/// Writes `dest` exactly once and has no other effect.
#[inline]
pub fn store_uprod(dest: &mut u128, x: u64, y: u64) {
    *dest = uprod(x, y);
}

/// Multiply two u64 numbers
/// Returns (high, low) parts of the 128-bit result
#[inline]
pub fn mul_u64(x: u64, y: u64) -> (u64, u64) {
    split_u128(uprod(x, y))
}

/// Split a u128 into (high, low) 64-bit halves
#[inline]
pub fn split_u128(value: u128) -> (u64, u64) {
    ((value >> 64) as u64, value as u64)
}

/// Rebuild a u128 from (high, low) 64-bit halves
#[inline]
pub fn join_u128(high: u64, low: u64) -> u128 {
    ((high as u128) << 64) | low as u128
}

/// A 128-bit product held as two 64-bit limbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WideProduct {
    pub high: u64,
    pub low: u64,
}

impl WideProduct {
    /// Product of `x` and `y` using `strategy`
    pub fn compute(strategy: Strategy, x: u64, y: u64) -> Self {
        strategy.multiply(x, y).into()
    }

    pub fn to_u128(self) -> u128 {
        join_u128(self.high, self.low)
    }

    /// Big-endian bytes, high limb first
    pub fn to_be_bytes(self) -> [u8; 16] {
        self.to_u128().to_be_bytes()
    }
}

impl From<u128> for WideProduct {
    fn from(value: u128) -> Self {
        let (high, low) = split_u128(value);
        Self { high, low }
    }
}

impl From<WideProduct> for u128 {
    fn from(product: WideProduct) -> Self {
        product.to_u128()
    }
}

impl fmt::Display for WideProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex(self.to_u128()))
    }
}

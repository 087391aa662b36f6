// Assembly Acceleration Module
// x86-64 MUL fast path for the widening multiply

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag indicating if assembly is available
static ASM_AVAILABLE: AtomicBool = AtomicBool::new(false);

/// True when this build carries the inline-assembly multiply
pub const ASM_COMPILED: bool = cfg!(all(feature = "asm-accel", target_arch = "x86_64"));

/// Check if assembly acceleration is available
pub fn asm_available() -> bool {
    ASM_AVAILABLE.load(Ordering::Relaxed)
}

/// Initialize assembly support
/// Returns whether the assembly path is now in use
pub fn init_asm() -> bool {
    ASM_AVAILABLE.store(ASM_COMPILED, Ordering::Relaxed);
    if ASM_COMPILED {
        tracing::debug!("x86-64 MUL path enabled");
    } else {
        tracing::debug!("assembly path not compiled in, using native u128 multiply");
    }
    ASM_COMPILED
}

/// Multiply two u64 numbers with a single MUL instruction
/// Returns (high, low) parts of the 128-bit result
#[cfg(all(feature = "asm-accel", target_arch = "x86_64"))]
#[inline]
pub fn mul_u64(a: u64, b: u64) -> (u64, u64) {
    let high: u64;
    let low: u64;
    // mul r64: RDX:RAX = RAX * r64
    unsafe {
        core::arch::asm!(
            "mul {b}",
            b = in(reg) b,
            inout("rax") a => low,
            out("rdx") high,
            options(pure, nomem, nostack),
        );
    }
    (high, low)
}

/// Multiply two u64 numbers
/// Returns (high, low) parts of the 128-bit result
#[cfg(not(all(feature = "asm-accel", target_arch = "x86_64")))]
#[inline]
pub fn mul_u64(a: u64, b: u64) -> (u64, u64) {
    crate::mul::native::mul_u64(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_reports_compiled_path() {
        assert_eq!(init_asm(), ASM_COMPILED);
        assert_eq!(asm_available(), ASM_COMPILED);
    }

    #[test]
    fn test_mul_u64_matches_native() {
        let cases = [
            (0u64, 0u64),
            (1, u64::MAX),
            (u64::MAX, u64::MAX),
            (1 << 32, 1 << 32),
            (0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210),
        ];
        for (a, b) in cases {
            assert_eq!(mul_u64(a, b), crate::mul::native::mul_u64(a, b));
        }
    }
}

// Assembly Acceleration Module
// Provides an assembly-backed widening multiply where the target supports it

pub mod mul_asm;

pub use mul_asm::asm_available;
pub use mul_asm::init_asm;
pub use mul_asm::mul_u64;
pub use mul_asm::ASM_COMPILED;

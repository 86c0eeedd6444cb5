use thiserror::Error;

/// Errors raised by `Memory` word accesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// Word accesses must be 4-byte aligned
    #[error("unaligned word access at 0x{0:08x}")]
    Unaligned(u32),
}

/// The reason an instruction could not be executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// The word does not encode a supported opcode/function combination
    #[error("unsupported instruction")]
    UnsupportedInstruction,
    #[error(transparent)]
    Memory(#[from] MemoryError),
    /// `div` with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
}

/// A fault together with the instruction that raised it. Any execution error
/// halts the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{fault} (instruction 0x{word:08x} at 0x{address:08x})")]
pub struct ExecutionError {
    /// Address of the faulting instruction
    pub address: u32,
    /// The faulting instruction word
    pub word: u32,
    pub fault: Fault,
}

/// Errors from parsing a textual program
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("invalid instruction word `{token}` (entry {index})")]
    InvalidWord { index: usize, token: String },
}

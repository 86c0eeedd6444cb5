use mips_types::constants::{REGISTER_COUNT, REGISTER_NAMES};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Holds the processor's registers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    registers: [u32; REGISTER_COUNT],
    pub lo_register: u32,
    pub hi_register: u32,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            registers: [0; REGISTER_COUNT],
            lo_register: 0,
            hi_register: 0,
        }
    }

    /// Get the value of a register. `$zero` always reads as zero.
    ///
    /// # Panics
    /// If `register` is not below 32. Decoded register fields are 5 bits wide.
    pub fn get(&self, register: u8) -> u32 {
        debug_assert!((register as usize) < REGISTER_COUNT, "no register ${}", register);

        if register == 0 {
            return 0;
        }

        self.registers[register as usize]
    }

    /// Set the value of a register. Writes to `$zero` are discarded.
    ///
    /// # Panics
    /// If `register` is not below 32.
    pub fn set(&mut self, register: u8, value: u32) {
        debug_assert!((register as usize) < REGISTER_COUNT, "no register ${}", register);

        if register == 0 {
            return;
        }

        self.registers[register as usize] = value
    }

    /// The general purpose registers, indexed by register number
    pub fn general(&self) -> &[u32; REGISTER_COUNT] {
        &self.registers
    }
}

impl Display for Registers {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, name) in REGISTER_NAMES.iter().enumerate() {
            writeln!(f, "{:>5} (${:02}): 0x{:08x}", name, i, self.get(i as u8))?;
        }
        writeln!(f, "{:>5}      : 0x{:08x}", "hi", self.hi_register)?;
        write!(f, "{:>5}      : 0x{:08x}", "lo", self.lo_register)
    }
}

use crate::error::Fault;
use crate::Processor;

impl Processor {
    /// Add (wraps on overflow)
    pub(crate) fn op_add(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.registers.get(rs);
        let b = self.registers.get(rt);
        self.registers.set(rd, a.wrapping_add(b));
        self.advance_program_counter();
    }

    /// Subtract (wraps on overflow)
    pub(crate) fn op_sub(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.registers.get(rs);
        let b = self.registers.get(rt);
        self.registers.set(rd, a.wrapping_sub(b));
        self.advance_program_counter();
    }

    /// Bitwise And
    pub(crate) fn op_and(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.registers.get(rs);
        let b = self.registers.get(rt);
        self.registers.set(rd, a & b);
        self.advance_program_counter();
    }

    /// Bitwise Or
    pub(crate) fn op_or(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.registers.get(rs);
        let b = self.registers.get(rt);
        self.registers.set(rd, a | b);
        self.advance_program_counter();
    }

    /// Bitwise Xor
    pub(crate) fn op_xor(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.registers.get(rs);
        let b = self.registers.get(rt);
        self.registers.set(rd, a ^ b);
        self.advance_program_counter();
    }

    /// Bitwise Nor
    pub(crate) fn op_nor(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.registers.get(rs);
        let b = self.registers.get(rt);
        self.registers.set(rd, !(a | b));
        self.advance_program_counter();
    }

    /// Set on less than (signed)
    pub(crate) fn op_slt(&mut self, rs: u8, rt: u8, rd: u8) {
        let a = self.registers.get(rs) as i32;
        let b = self.registers.get(rt) as i32;
        self.registers.set(rd, (a < b) as u32);
        self.advance_program_counter();
    }

    /// Shift left logical. The all-zero word is the canonical nop.
    pub(crate) fn op_sll(&mut self, rt: u8, rd: u8, shamt: u8) {
        let value = self.registers.get(rt) << shamt;
        self.registers.set(rd, value);
        self.advance_program_counter();
    }

    /// Jump register
    pub(crate) fn op_jr(&mut self, rs: u8) {
        let address = self.registers.get(rs);
        self.jump_to(address);
    }

    /// Multiply (signed). The 64-bit product is split across hi and lo.
    pub(crate) fn op_mult(&mut self, rs: u8, rt: u8) {
        let a = self.registers.get(rs) as i32 as i64;
        let b = self.registers.get(rt) as i32 as i64;
        let product = a * b;
        self.registers.hi_register = (product >> 32) as u32;
        self.registers.lo_register = product as u32;
        self.advance_program_counter();
    }

    /// Divide (signed). The quotient goes to lo and the remainder to hi.
    pub(crate) fn op_div(&mut self, rs: u8, rt: u8) -> Result<(), Fault> {
        let a = self.registers.get(rs) as i32;
        let b = self.registers.get(rt) as i32;

        if b == 0 {
            return Err(Fault::DivisionByZero);
        }

        self.registers.lo_register = a.wrapping_div(b) as u32;
        self.registers.hi_register = a.wrapping_rem(b) as u32;
        self.advance_program_counter();
        Ok(())
    }

    /// Move from hi
    pub(crate) fn op_mfhi(&mut self, rd: u8) {
        self.registers.set(rd, self.registers.hi_register);
        self.advance_program_counter();
    }

    /// Move from lo
    pub(crate) fn op_mflo(&mut self, rd: u8) {
        self.registers.set(rd, self.registers.lo_register);
        self.advance_program_counter();
    }
}

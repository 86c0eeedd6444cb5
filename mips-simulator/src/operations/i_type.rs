use crate::error::Fault;
use crate::instruction::branch_target;
use crate::Processor;

impl Processor {
    /// The effective address of a load or store
    fn memory_address(&self, rs: u8, immediate: i16) -> u32 {
        self.registers
            .get(rs)
            .wrapping_add(immediate as i32 as u32)
    }

    /// Add immediate (wraps on overflow)
    pub(crate) fn op_addi(&mut self, rs: u8, rt: u8, immediate: i16) {
        let value = self
            .registers
            .get(rs)
            .wrapping_add(immediate as i32 as u32);
        self.registers.set(rt, value);
        self.advance_program_counter()
    }

    /// Load word
    pub(crate) fn op_lw(&mut self, rs: u8, rt: u8, immediate: i16) -> Result<(), Fault> {
        let address = self.memory_address(rs, immediate);
        let value = self.memory.get_word(address)?;
        self.registers.set(rt, value);
        self.advance_program_counter();
        Ok(())
    }

    /// Store word
    pub(crate) fn op_sw(&mut self, rs: u8, rt: u8, immediate: i16) -> Result<(), Fault> {
        let address = self.memory_address(rs, immediate);
        let value = self.registers.get(rt);
        self.memory.set_word(address, value)?;
        self.advance_program_counter();
        Ok(())
    }

    /// Branch on equal
    pub(crate) fn op_beq(&mut self, rs: u8, rt: u8, immediate: i16) {
        let taken = self.registers.get(rs) == self.registers.get(rt);
        self.branch(taken, immediate);
    }

    /// Branch on not equal
    pub(crate) fn op_bne(&mut self, rs: u8, rt: u8, immediate: i16) {
        let taken = self.registers.get(rs) != self.registers.get(rt);
        self.branch(taken, immediate);
    }

    fn branch(&mut self, taken: bool, immediate: i16) {
        if taken {
            self.jump_to(branch_target(self.program_counter, immediate));
        } else {
            self.advance_program_counter();
        }
    }
}

//! Instruction encoders and a processor harness shared by the integration
//! tests.

#![allow(dead_code)]

use mips_simulator::config::Config;
use mips_simulator::Processor;
use mips_types::constants::*;

/// Encode an R-type instruction
pub fn r_type(function: u8, rs: u8, rt: u8, rd: u8, shamt: u8) -> u32 {
    (rs as u32) << 21
        | (rt as u32) << 16
        | (rd as u32) << 11
        | (shamt as u32) << 6
        | function as u32
}

/// Encode an I-type instruction
pub fn i_type(op_code: u8, rs: u8, rt: u8, immediate: i16) -> u32 {
    (op_code as u32) << 26 | (rs as u32) << 21 | (rt as u32) << 16 | immediate as u16 as u32
}

/// Encode a J-type instruction jumping to an absolute address
pub fn j_type(op_code: u8, address: u32) -> u32 {
    (op_code as u32) << 26 | ((address >> 2) & 0x03FFFFFF)
}

pub fn addi(rt: u8, rs: u8, immediate: i16) -> u32 {
    i_type(OP_ADDI, rs, rt, immediate)
}

pub fn lw(rt: u8, immediate: i16, rs: u8) -> u32 {
    i_type(OP_LW, rs, rt, immediate)
}

pub fn sw(rt: u8, immediate: i16, rs: u8) -> u32 {
    i_type(OP_SW, rs, rt, immediate)
}

/// Build a processor with the program loaded
pub fn processor_with(program: &[u32]) -> Processor {
    let mut processor = Processor::new(Config::default());
    processor.load_program(program);
    processor
}

/// Build a processor with `$sp` initialized and the program loaded
pub fn processor_with_stack(program: &[u32]) -> Processor {
    let mut processor = Processor::new(Config {
        init_stack_pointer: true,
    });
    processor.load_program(program);
    processor
}

/// Register used by `with_constants` to address the constant pool
pub const POOL_REGISTER: u8 = 25;

/// Build a program which first loads each `(register, value)` constant from a
/// pool stored after `body`, then runs `body`. Returns the program and the
/// number of cycles needed to run everything before the pool.
pub fn with_constants(constants: &[(u8, u32)], body: &[u32]) -> (Vec<u32>, u64) {
    let executed = 2 + constants.len() + body.len();
    let mut program = vec![
        addi(POOL_REGISTER, 0, (TEXT_OFFSET >> 16) as i16),
        r_type(FUNCTION_SLL, 0, POOL_REGISTER, POOL_REGISTER, 16),
    ];

    for (i, (register, _)) in constants.iter().enumerate() {
        let offset = 4 * (executed + i) as i16;
        program.push(lw(*register, offset, POOL_REGISTER));
    }
    program.extend_from_slice(body);
    program.extend(constants.iter().map(|(_, value)| *value));

    (program, executed as u64)
}

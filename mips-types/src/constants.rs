// Operation codes
pub const OP_R_TYPE: u8 = 0;
pub const OP_J: u8 = 0x02;
pub const OP_JAL: u8 = 0x03;
pub const OP_BEQ: u8 = 0x04;
pub const OP_BNE: u8 = 0x05;
pub const OP_ADDI: u8 = 0x08;
pub const OP_LW: u8 = 0x23;
pub const OP_SW: u8 = 0x2B;

// R-type function codes
pub const FUNCTION_SLL: u8 = 0x00;
pub const FUNCTION_JR: u8 = 0x08;
pub const FUNCTION_MFHI: u8 = 0x10;
pub const FUNCTION_MFLO: u8 = 0x12;
pub const FUNCTION_MULT: u8 = 0x18;
pub const FUNCTION_DIV: u8 = 0x1A;
pub const FUNCTION_ADD: u8 = 0x20;
pub const FUNCTION_SUB: u8 = 0x22;
pub const FUNCTION_AND: u8 = 0x24;
pub const FUNCTION_OR: u8 = 0x25;
pub const FUNCTION_XOR: u8 = 0x26;
pub const FUNCTION_NOR: u8 = 0x27;
pub const FUNCTION_SLT: u8 = 0x2A;

// Register numbers
pub const REG_ZERO: u8 = 0;
pub const REG_V0: u8 = 2;
pub const REG_T0: u8 = 8;
pub const REG_T1: u8 = 9;
/// The stack pointer register
pub const REG_SP: u8 = 29;
/// The return address register, written by `jal`
pub const REG_RA: u8 = 31;

pub const REGISTER_COUNT: usize = 32;

pub static REGISTER_NAMES: [&str; REGISTER_COUNT] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3",
    "$t4", "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7",
    "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

// Memory offsets
pub const TEXT_OFFSET: u32 = 0x400000;
pub const DATA_OFFSET: u32 = 0x10000000;
/// The top of the stack. The stack grows towards lower addresses.
pub const STACK_START: u32 = 0x7ffffffc;

use mips_types::constants::*;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A raw MIPS instruction word, with accessors for each encoded field
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InstructionWord(pub u32);

impl InstructionWord {
    /// Get the operation code
    pub fn op_code(&self) -> u8 {
        ((self.0 & 0xFC000000) >> 26) as u8
    }

    /// Get the s register (for R and I type instructions)
    pub fn s_register(&self) -> u8 {
        ((self.0 & 0x03E00000) >> 21) as u8
    }

    /// Get the t register (for R and I type instructions)
    pub fn t_register(&self) -> u8 {
        ((self.0 & 0x001F0000) >> 16) as u8
    }

    /// Get the d register (For R type instructions)
    pub fn d_register(&self) -> u8 {
        ((self.0 & 0x0000F800) >> 11) as u8
    }

    /// Get the shift amount (for R type instructions)
    pub fn shift_amount(&self) -> u8 {
        ((self.0 & 0x000007C0) >> 6) as u8
    }

    /// Get the ALU function (for R type instructions)
    pub fn function(&self) -> u8 {
        (self.0 & 0x0000003F) as u8
    }

    /// Get the immediate value (for I type instructions)
    pub fn immediate(&self) -> i16 {
        (self.0 & 0x0000FFFF) as i16
    }

    /// Get the pseudo address (for J type instructions)
    pub fn pseudo_address(&self) -> u32 {
        self.0 & 0x03FFFFFF
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RTypeOp {
    Add,
    And,
    Div,
    Jr,
    Mfhi,
    Mflo,
    Mult,
    Nor,
    Or,
    Sll,
    Slt,
    Sub,
    Xor,
}

impl RTypeOp {
    /// Look up the operation encoded by an R-type function code
    pub fn from_function(function: u8) -> Option<Self> {
        let op = match function {
            FUNCTION_SLL => RTypeOp::Sll,
            FUNCTION_JR => RTypeOp::Jr,
            FUNCTION_MFHI => RTypeOp::Mfhi,
            FUNCTION_MFLO => RTypeOp::Mflo,
            FUNCTION_MULT => RTypeOp::Mult,
            FUNCTION_DIV => RTypeOp::Div,
            FUNCTION_ADD => RTypeOp::Add,
            FUNCTION_SUB => RTypeOp::Sub,
            FUNCTION_AND => RTypeOp::And,
            FUNCTION_OR => RTypeOp::Or,
            FUNCTION_XOR => RTypeOp::Xor,
            FUNCTION_NOR => RTypeOp::Nor,
            FUNCTION_SLT => RTypeOp::Slt,
            _ => return None,
        };

        Some(op)
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            RTypeOp::Add => "add",
            RTypeOp::And => "and",
            RTypeOp::Div => "div",
            RTypeOp::Jr => "jr",
            RTypeOp::Mfhi => "mfhi",
            RTypeOp::Mflo => "mflo",
            RTypeOp::Mult => "mult",
            RTypeOp::Nor => "nor",
            RTypeOp::Or => "or",
            RTypeOp::Sll => "sll",
            RTypeOp::Slt => "slt",
            RTypeOp::Sub => "sub",
            RTypeOp::Xor => "xor",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ITypeOp {
    Addi,
    Beq,
    Bne,
    Lw,
    Sw,
}

impl ITypeOp {
    /// Look up the I-type operation encoded by an operation code
    pub fn from_op_code(op_code: u8) -> Option<Self> {
        let op = match op_code {
            OP_BEQ => ITypeOp::Beq,
            OP_BNE => ITypeOp::Bne,
            OP_ADDI => ITypeOp::Addi,
            OP_LW => ITypeOp::Lw,
            OP_SW => ITypeOp::Sw,
            _ => return None,
        };

        Some(op)
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            ITypeOp::Addi => "addi",
            ITypeOp::Beq => "beq",
            ITypeOp::Bne => "bne",
            ITypeOp::Lw => "lw",
            ITypeOp::Sw => "sw",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JTypeOp {
    J,
    Jal,
}

impl JTypeOp {
    /// Look up the J-type operation encoded by an operation code
    pub fn from_op_code(op_code: u8) -> Option<Self> {
        match op_code {
            OP_J => Some(JTypeOp::J),
            OP_JAL => Some(JTypeOp::Jal),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            JTypeOp::J => "j",
            JTypeOp::Jal => "jal",
        }
    }
}

/// A decoded MIPS instruction
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    RType {
        op: RTypeOp,
        rs: u8,
        rt: u8,
        rd: u8,
        shamt: u8,
    },
    IType {
        op: ITypeOp,
        rs: u8,
        rt: u8,
        /// Sign-extended when used
        immediate: i16,
    },
    JType {
        op: JTypeOp,
        pseudo_address: u32,
    },
    /// A word with no supported opcode/function combination
    Unsupported(u32),
}

/// Decode an instruction word. Every word decodes to some instruction.
pub fn decode(word: u32) -> Instruction {
    let raw = InstructionWord(word);

    if raw.op_code() == OP_R_TYPE {
        return match RTypeOp::from_function(raw.function()) {
            Some(op) => Instruction::RType {
                op,
                rs: raw.s_register(),
                rt: raw.t_register(),
                rd: raw.d_register(),
                shamt: raw.shift_amount(),
            },
            None => Instruction::Unsupported(word),
        };
    }

    if let Some(op) = JTypeOp::from_op_code(raw.op_code()) {
        return Instruction::JType {
            op,
            pseudo_address: raw.pseudo_address(),
        };
    }

    match ITypeOp::from_op_code(raw.op_code()) {
        Some(op) => Instruction::IType {
            op,
            rs: raw.s_register(),
            rt: raw.t_register(),
            immediate: raw.immediate(),
        },
        None => Instruction::Unsupported(word),
    }
}

/// Convert a pseudo address to a full address.
/// The first four bits are taken from the address of the following
/// instruction, and the lower two bits are zeros.
pub fn jump_target(program_counter: u32, pseudo_address: u32) -> u32 {
    (0xF0000000 & program_counter.wrapping_add(4)) | (pseudo_address << 2)
}

/// Compute the target of a taken branch. The offset is in words and is
/// relative to the following instruction.
pub fn branch_target(program_counter: u32, immediate: i16) -> u32 {
    let offset = (immediate as i32) << 2;
    program_counter.wrapping_add(4).wrapping_add(offset as u32)
}

impl Instruction {
    /// Format the instruction as assembly. The program counter is needed to
    /// resolve jump and branch targets.
    pub fn stringify(&self, program_counter: u32) -> String {
        match *self {
            Instruction::RType {
                op,
                rs,
                rt,
                rd,
                shamt,
            } => {
                let name = op.mnemonic();
                match op {
                    RTypeOp::Sll if rt == 0 && rd == 0 && shamt == 0 => "nop".to_string(),
                    RTypeOp::Sll => {
                        format!("{} {}, {}, {}", name, Register(rd), Register(rt), shamt)
                    }
                    RTypeOp::Jr => format!("{} {}", name, Register(rs)),
                    RTypeOp::Mfhi | RTypeOp::Mflo => format!("{} {}", name, Register(rd)),
                    RTypeOp::Mult | RTypeOp::Div => {
                        format!("{} {}, {}", name, Register(rs), Register(rt))
                    }
                    _ => format!(
                        "{} {}, {}, {}",
                        name,
                        Register(rd),
                        Register(rs),
                        Register(rt)
                    ),
                }
            }
            Instruction::IType {
                op,
                rs,
                rt,
                immediate,
            } => {
                let name = op.mnemonic();
                match op {
                    ITypeOp::Addi => {
                        format!("{} {}, {}, {}", name, Register(rt), Register(rs), immediate)
                    }
                    ITypeOp::Lw | ITypeOp::Sw => {
                        format!("{} {}, {}({})", name, Register(rt), immediate, Register(rs))
                    }
                    ITypeOp::Beq | ITypeOp::Bne => format!(
                        "{} {}, {}, 0x{:x}",
                        name,
                        Register(rs),
                        Register(rt),
                        branch_target(program_counter, immediate)
                    ),
                }
            }
            Instruction::JType { op, pseudo_address } => format!(
                "{} 0x{:x}",
                op.mnemonic(),
                jump_target(program_counter, pseudo_address)
            ),
            Instruction::Unsupported(word) => format!(".word 0x{:08x}", word),
        }
    }
}

/// Pretty-print the register using its name
struct Register(u8);

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match REGISTER_NAMES.get(self.0 as usize) {
            Some(name) => f.write_str(name),
            None => write!(f, "${}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_r_type_fields() {
        // add $t1, $t0, $t0
        let raw = InstructionWord(0x01084820);
        assert_eq!(raw.op_code(), OP_R_TYPE);
        assert_eq!(raw.s_register(), 8);
        assert_eq!(raw.t_register(), 8);
        assert_eq!(raw.d_register(), 9);
        assert_eq!(raw.shift_amount(), 0);
        assert_eq!(raw.function(), FUNCTION_ADD);
    }

    #[test]
    fn sign_extends_immediates() {
        // addi $t0, $t0, -1
        assert_eq!(
            decode(0x2108FFFF),
            Instruction::IType {
                op: ITypeOp::Addi,
                rs: 8,
                rt: 8,
                immediate: -1,
            }
        );
    }

    #[test]
    fn decodes_factorial_program() {
        assert_eq!(
            decode(0x01280018),
            Instruction::RType {
                op: RTypeOp::Mult,
                rs: 9,
                rt: 8,
                rd: 0,
                shamt: 0,
            }
        );
        assert_eq!(
            decode(0x00004812),
            Instruction::RType {
                op: RTypeOp::Mflo,
                rs: 0,
                rt: 0,
                rd: 9,
                shamt: 0,
            }
        );
        assert_eq!(
            decode(0x08100002),
            Instruction::JType {
                op: JTypeOp::J,
                pseudo_address: 0x100002,
            }
        );
    }

    #[test]
    fn unknown_encodings_are_unsupported() {
        assert_eq!(decode(0xFFFFFFFF), Instruction::Unsupported(0xFFFFFFFF));
        // R-type with function 0x3F
        assert_eq!(decode(0x0000003F), Instruction::Unsupported(0x0000003F));
        // ori is not part of the instruction set
        assert_eq!(decode(0x34080001), Instruction::Unsupported(0x34080001));
    }

    #[test]
    fn computes_jump_targets_from_the_following_instruction() {
        assert_eq!(jump_target(0x00400018, 0x100002), 0x00400008);
        assert_eq!(jump_target(0x1ffffffc, 0x10), 0x20000040);
    }

    #[test]
    fn computes_branch_targets() {
        assert_eq!(branch_target(0x00400008, 4), 0x0040001C);
        assert_eq!(branch_target(0x00400008, -3), 0x00400000);
    }

    #[test]
    fn stringifies_instructions() {
        let pc = TEXT_OFFSET;
        assert_eq!(decode(0x01084820).stringify(pc), "add $t1, $t0, $t0");
        assert_eq!(decode(0x20080005).stringify(pc), "addi $t0, $zero, 5");
        assert_eq!(decode(0x8D0A0000).stringify(pc), "lw $t2, 0($t0)");
        assert_eq!(decode(0x03E00008).stringify(pc), "jr $ra");
        assert_eq!(decode(0x00004812).stringify(pc), "mflo $t1");
        assert_eq!(decode(0x01280018).stringify(pc), "mult $t1, $t0");
        assert_eq!(decode(0x00000000).stringify(pc), "nop");
        assert_eq!(decode(0x08100002).stringify(0x00400018), "j 0x400008");
        assert_eq!(
            decode(0x11000004).stringify(0x00400008),
            "beq $t0, $zero, 0x40001c"
        );
        assert_eq!(decode(0xFFFFFFFF).stringify(pc), ".word 0xffffffff");
    }
}

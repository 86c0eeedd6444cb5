use crate::config::Config;
use crate::error::{ExecutionError, Fault};
use crate::instruction::{decode, ITypeOp, Instruction, JTypeOp, RTypeOp};
use crate::memory::Memory;
use crate::registers::Registers;
use mips_types::constants::{REG_SP, STACK_START, TEXT_OFFSET};

/// The run status of a processor
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    /// Execution ran off the loaded program or faulted. Only a new program
    /// load leaves this state.
    Halted,
}

/// The outcome of a `Processor::run` request
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed by this request
    pub cycles: u64,
    pub state: State,
}

/// A MIPS processor
#[derive(Debug)]
pub struct Processor {
    config: Config,
    pub(crate) registers: Registers,
    pub(crate) program_counter: u32,
    pub(crate) memory: Memory,
    /// First address past the loaded program
    text_end: u32,
    state: State,
    cycle_count: u64,
    fault: Option<ExecutionError>,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Processor {
            config,
            registers: Registers::new(),
            program_counter: TEXT_OFFSET,
            memory: Memory::new(),
            text_end: TEXT_OFFSET,
            state: State::Running,
            cycle_count: 0,
            fault: None,
        }
    }

    /// Reset the processor and load the program into the text segment
    pub fn load_program(&mut self, words: &[u32]) {
        let bytes: Vec<u8> = words.iter().flat_map(|word| word.to_be_bytes()).collect();

        self.registers = Registers::new();
        self.memory = Memory::new();
        self.memory.load_into_memory(&bytes, TEXT_OFFSET);
        self.program_counter = TEXT_OFFSET;
        self.text_end = TEXT_OFFSET.saturating_add(bytes.len() as u32);
        self.state = State::Running;
        self.cycle_count = 0;
        self.fault = None;

        if self.config.init_stack_pointer {
            self.registers.set(REG_SP, STACK_START);
        }

        info!(
            "Loaded {} instructions at 0x{:08x}",
            words.len(),
            TEXT_OFFSET
        );
    }

    /// Execute up to `cycles` instructions, stopping early if the processor
    /// halts. An error halts the processor and ends the request; the cycles
    /// executed before it are still counted in `cycle_count`.
    pub fn run(&mut self, cycles: u64) -> Result<RunSummary, ExecutionError> {
        let start = self.cycle_count;

        for _ in 0..cycles {
            if self.step()? == State::Halted {
                break;
            }
        }

        Ok(RunSummary {
            cycles: self.cycle_count - start,
            state: self.state,
        })
    }

    /// Execute one instruction. Fetching from outside the loaded program
    /// halts the processor without executing anything.
    pub fn step(&mut self) -> Result<State, ExecutionError> {
        if self.state == State::Halted {
            return Ok(State::Halted);
        }

        let address = self.program_counter;
        if !self.is_loaded(address) {
            self.halt();
            return Ok(State::Halted);
        }

        let word = self
            .memory
            .get_word(address)
            .map_err(|error| self.fail(address, 0, error.into()))?;
        let instruction = decode(word);
        trace!("0x{:08x}: {}", address, instruction.stringify(address));

        if let Err(fault) = self.execute(instruction) {
            return Err(self.fail(address, word, fault));
        }

        self.cycle_count += 1;
        Ok(self.state)
    }

    /// Decode the instruction at the program counter without executing it
    pub fn next_instruction(&self) -> Option<Instruction> {
        if self.state == State::Halted || !self.is_loaded(self.program_counter) {
            return None;
        }

        self.memory.get_word(self.program_counter).ok().map(decode)
    }

    /// Snapshot the register file
    pub fn dump_registers(&self) -> Registers {
        self.registers.clone()
    }

    /// Snapshot `length` bytes of memory starting at `address`
    pub fn dump_memory(&self, address: u32, length: u32) -> Vec<u8> {
        self.memory.get_range(address, length)
    }

    pub fn program_counter(&self) -> u32 {
        self.program_counter
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Instructions executed since the program was loaded
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// The error which halted the processor, if any
    pub fn fault(&self) -> Option<&ExecutionError> {
        self.fault.as_ref()
    }

    fn is_loaded(&self, address: u32) -> bool {
        (TEXT_OFFSET..self.text_end).contains(&address)
    }

    fn halt(&mut self) {
        info!(
            "Halted at 0x{:08x} after {} cycles",
            self.program_counter, self.cycle_count
        );
        self.state = State::Halted;
    }

    fn fail(&mut self, address: u32, word: u32, fault: Fault) -> ExecutionError {
        let error = ExecutionError {
            address,
            word,
            fault,
        };
        warn!("{}", error);
        self.state = State::Halted;
        self.fault = Some(error);
        error
    }

    /// Execute a decoded instruction. On error no state has been modified.
    pub(crate) fn execute(&mut self, instruction: Instruction) -> Result<(), Fault> {
        match instruction {
            Instruction::RType {
                op,
                rs,
                rt,
                rd,
                shamt,
            } => match op {
                RTypeOp::Add => self.op_add(rs, rt, rd),
                RTypeOp::Sub => self.op_sub(rs, rt, rd),
                RTypeOp::And => self.op_and(rs, rt, rd),
                RTypeOp::Or => self.op_or(rs, rt, rd),
                RTypeOp::Xor => self.op_xor(rs, rt, rd),
                RTypeOp::Nor => self.op_nor(rs, rt, rd),
                RTypeOp::Slt => self.op_slt(rs, rt, rd),
                RTypeOp::Sll => self.op_sll(rt, rd, shamt),
                RTypeOp::Jr => self.op_jr(rs),
                RTypeOp::Mult => self.op_mult(rs, rt),
                RTypeOp::Div => self.op_div(rs, rt)?,
                RTypeOp::Mfhi => self.op_mfhi(rd),
                RTypeOp::Mflo => self.op_mflo(rd),
            },
            Instruction::IType {
                op,
                rs,
                rt,
                immediate,
            } => match op {
                ITypeOp::Addi => self.op_addi(rs, rt, immediate),
                ITypeOp::Lw => self.op_lw(rs, rt, immediate)?,
                ITypeOp::Sw => self.op_sw(rs, rt, immediate)?,
                ITypeOp::Beq => self.op_beq(rs, rt, immediate),
                ITypeOp::Bne => self.op_bne(rs, rt, immediate),
            },
            Instruction::JType { op, pseudo_address } => match op {
                JTypeOp::J => self.op_j(pseudo_address),
                JTypeOp::Jal => self.op_jal(pseudo_address),
            },
            Instruction::Unsupported(_) => return Err(Fault::UnsupportedInstruction),
        }

        Ok(())
    }

    pub(crate) fn advance_program_counter(&mut self) {
        self.program_counter = self.program_counter.wrapping_add(4);
    }

    pub(crate) fn jump_to(&mut self, address: u32) {
        self.program_counter = address;
    }
}

use mips_simulator::program::{parse_program, parse_word};
use mips_simulator::{Processor, State};
use std::io;
use std::io::{BufRead, Write};

/// Largest memory range the `mem` command shows
const MAX_MEMORY_DUMP: u32 = 4096;

const HELP: &str = "\
Commands:
  load <words...>     Reset the processor and load hex instruction words,
                      e.g. load 0x20080005 0x20090001
  run <n>             Execute up to n cycles
  step | s            Execute one cycle
  regs                Show all registers
  mem <address> <n>   Show n bytes (at most 4096) of memory starting at a
                      hex address
  trace on|off        Print each instruction before it executes
  help                Show this message
  exit                Quit

Programs are loaded at 0x00400000 and halt when execution leaves the loaded
instructions. Factorial of 5 (result in $t1):
  load 0x20080005 0x20090001 0x11000004 0x01280018 0x00004812 0x2108FFFF 0x08100002";

pub struct Debugger {
    pub processor: Processor,
    pub trace: bool,
}

impl Debugger {
    pub fn new(processor: Processor) -> Self {
        Debugger {
            processor,
            trace: false,
        }
    }

    /// Read and run commands from stdin until exit or end of input
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            eprint!("> ");
            io::stderr().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };

            if !self.run_command(&line) {
                return Ok(());
            }
        }
    }

    /// Run a command. Returns true if execution should continue, else false.
    pub fn run_command(&mut self, command: &str) -> bool {
        let command: Vec<_> = command.split_whitespace().collect();

        match command.as_slice() {
            [] => {}
            ["load", words @ ..] => match parse_program(&words.join(" ")) {
                Ok(program) => {
                    self.processor.load_program(&program);
                    eprintln!("Loaded {} instructions", program.len());
                }
                Err(error) => eprintln!("{}", error),
            },
            ["run", cycles] | ["r", cycles] => match cycles.parse() {
                Ok(cycles) => self.execute(cycles),
                Err(_) => eprintln!("Invalid cycle count"),
            },
            ["step"] | ["s"] => self.execute(1),
            ["regs"] => {
                println!("{}", self.processor.dump_registers());
                println!("   pc      : 0x{:08x}", self.processor.program_counter());
            }
            ["mem", address, length] => match (parse_word(address), length.parse()) {
                (Some(address), Ok(length)) => self.print_memory(address, length),
                _ => eprintln!("Usage: mem <address> <length>"),
            },
            ["trace", enabled] => match *enabled {
                "on" => {
                    self.trace = true;
                    eprintln!("Instruction tracing is ON");
                }
                "off" => {
                    self.trace = false;
                    eprintln!("Instruction tracing is OFF");
                }
                _ => eprintln!("Unknown input"),
            },
            ["help"] => println!("{}", HELP),
            ["exit"] => return false,
            _ => eprintln!("Unknown input"),
        }

        true
    }

    /// Run up to `cycles` cycles, tracing each instruction if enabled
    fn execute(&mut self, cycles: u64) {
        let start = self.processor.cycle_count();

        for _ in 0..cycles {
            if self.trace {
                if let Some(instruction) = self.processor.next_instruction() {
                    let address = self.processor.program_counter();
                    eprintln!("0x{:08x}: {}", address, instruction.stringify(address));
                }
            }

            match self.processor.step() {
                Ok(State::Running) => {}
                Ok(State::Halted) => break,
                Err(error) => {
                    eprintln!("Error: {}", error);
                    break;
                }
            }
        }

        eprintln!(
            "Executed {} cycles, processor is {:?}",
            self.processor.cycle_count() - start,
            self.processor.state()
        );
    }

    fn print_memory(&self, address: u32, length: u32) {
        if length > MAX_MEMORY_DUMP {
            eprintln!("Showing the first {} bytes", MAX_MEMORY_DUMP);
        }

        for line in self.format_memory(address, length) {
            println!("{}", line);
        }
    }

    /// Format memory as rows of 16 hex bytes, at most `MAX_MEMORY_DUMP` bytes
    fn format_memory(&self, address: u32, length: u32) -> Vec<String> {
        let bytes = self
            .processor
            .dump_memory(address, length.min(MAX_MEMORY_DUMP));

        bytes
            .chunks(16)
            .enumerate()
            .map(|(i, row)| {
                let row_address = address.wrapping_add(16 * i as u32);
                let hex: Vec<_> = row.iter().map(|byte| format!("{:02x}", byte)).collect();
                format!("0x{:08x}: {}", row_address, hex.join(" "))
            })
            .collect()
    }
}

use crate::debugger::Debugger;
use mips_simulator::config::Config;
use mips_simulator::program::parse_program;
use mips_simulator::Processor;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod debugger;

#[derive(StructOpt)]
struct CliArgs {
    /// Point $sp at the top of the stack whenever a program is loaded
    #[structopt(long)]
    init_stack_pointer: bool,

    /// A file of hex instruction words to load on startup
    #[structopt(parse(from_os_str))]
    file_path: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Setup logging and parse CLI args
    env_logger::init();
    let args = CliArgs::from_args();

    // Setup the processor and debugger
    let mut processor = Processor::new(Config {
        init_stack_pointer: args.init_stack_pointer,
    });

    if let Some(file_path) = &args.file_path {
        let program = parse_program(&fs::read_to_string(file_path)?)?;
        processor.load_program(&program);
        info!("Loaded {}", file_path.display());
    }

    let mut debugger = Debugger::new(processor);
    debugger.run()?;

    Ok(())
}

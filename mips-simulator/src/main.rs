use env_logger::Env;
use mips_simulator::config::Config;
use mips_simulator::program::parse_program;
use mips_simulator::Processor;
use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;

#[macro_use]
extern crate log;

#[derive(StructOpt)]
struct CliArgs {
    /// Point $sp at the top of the stack before running
    #[structopt(long)]
    init_stack_pointer: bool,

    /// Maximum number of cycles to execute
    #[structopt(long, default_value = "1000")]
    cycles: u64,

    /// A file of hex instruction words
    #[structopt(parse(from_os_str))]
    file_path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Setup logging and parse CLI args
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
    let args = CliArgs::from_args();

    // Load the program
    let text = fs::read_to_string(&args.file_path)?;
    let program = parse_program(&text)?;
    let mut processor = Processor::new(Config {
        init_stack_pointer: args.init_stack_pointer,
    });
    processor.load_program(&program);

    let result = processor.run(args.cycles);
    println!("{}", processor.dump_registers());
    println!("   pc      : 0x{:08x}", processor.program_counter());

    let summary = result?;
    info!(
        "Executed {} cycles, processor is {:?}",
        summary.cycles, summary.state
    );

    Ok(())
}

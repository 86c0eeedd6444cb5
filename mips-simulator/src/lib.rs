#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod instruction;
pub mod memory;
mod processor;
pub mod program;
pub mod registers;

mod operations {
    mod i_type;
    mod j_type;
    mod r_type;
}

pub use processor::{Processor, RunSummary, State};

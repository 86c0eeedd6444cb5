/// The config for `Processor`
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Point `$sp` at the top of the stack when a program is loaded
    pub init_stack_pointer: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            init_stack_pointer: false,
        }
    }
}

mod controller;
mod simulate;

pub use controller::{CallFrame, ScriptController};
pub use simulate::{
    apply_assignment, enter_procedure, exit_procedure, parse_proc_line, parse_set_line, run_demo,
};

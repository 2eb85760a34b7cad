/// Execution mode of the script cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Paused,
    StepInto,
    StepOver,
    Continue,
}

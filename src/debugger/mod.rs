mod breakpoints;
mod console;
mod stepping;

pub use breakpoints::{Breakpoint, Breakpoints};
pub use console::Console;
pub use stepping::RunMode;

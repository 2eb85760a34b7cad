mod format;
mod memory;
mod report;

pub mod colors;

pub use format::{center, pad_left, pad_right, separator, sub_header};
pub use memory::{
    breakpoint_address, element_address, estimated_size, frame_address, hex_dump,
    variable_address,
};
pub use report::{
    print_breakpoints, print_call_stack, print_context, print_memory_analysis,
    print_monitor_line, print_variables, print_watch_change, print_watch_hit,
};

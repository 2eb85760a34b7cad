use std::fs;
use std::io::{self, Write};

use tcl_debugger::debugger::Console;

fn main() -> io::Result<()> {
    // Best-effort session log; a missing file is not fatal
    let mut log = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("tcldbg.log")
        .ok();

    if let Some(ref mut f) = log {
        writeln!(
            f,
            "=== TCL DEBUGGER STARTED at {:?} ===",
            std::time::SystemTime::now()
        )
        .ok();
    }

    let args: Vec<String> = std::env::args().collect();

    let mut console = Console::new();

    // A script path on the command line is loaded before the loop starts
    if let Some(script) = args.get(1) {
        eprintln!("Loading script: {}", script);
        if let Some(ref mut f) = log {
            writeln!(f, "Startup script: {}", script).ok();
        }
        // Not routed through command parsing: paths with spaces would
        // be split into tokens there
        console.load_script(script);
    }

    console.run()?;

    if let Some(ref mut f) = log {
        writeln!(f, "=== TCL DEBUGGER EXITING ===").ok();
    }

    Ok(())
}

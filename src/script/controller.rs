use crate::debugger::RunMode;
use std::fs;
use std::io;

/// One entry on the simulated procedure call stack.
#[derive(Debug, Clone)]
pub struct CallFrame {
    pub function: String,
    pub line: usize,
}

/// Holds the loaded script, the 1-based current-line cursor, the run
/// mode, and the call stack. Does not parse Tcl; the line text is only
/// handed to the simulation layer.
#[derive(Debug)]
pub struct ScriptController {
    path: String,
    lines: Vec<String>,
    current_line: usize,
    running: bool,
    mode: RunMode,
    call_stack: Vec<CallFrame>,
}

impl Default for ScriptController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptController {
    pub fn new() -> Self {
        Self {
            path: String::new(),
            lines: Vec::new(),
            current_line: 1,
            running: false,
            mode: RunMode::Paused,
            call_stack: Vec::new(),
        }
    }

    /// Load a script file, resetting the cursor and call stack.
    /// Returns the number of lines loaded.
    pub fn load(&mut self, path: &str) -> io::Result<usize> {
        let contents = fs::read_to_string(path)?;
        self.lines = contents.lines().map(|l| l.to_string()).collect();
        self.path = path.to_string();
        self.current_line = 1;
        self.running = false;
        self.call_stack.clear();
        Ok(self.lines.len())
    }

    pub fn is_loaded(&self) -> bool {
        !self.lines.is_empty()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn set_current_line(&mut self, line: usize) {
        self.current_line = line;
    }

    /// Text of the current line, None once the cursor passed the end.
    pub fn current_line_text(&self) -> Option<&str> {
        if self.current_line >= 1 && self.current_line <= self.lines.len() {
            Some(&self.lines[self.current_line - 1])
        } else {
            None
        }
    }

    /// Advance the cursor; false once the last line is reached.
    pub fn advance(&mut self) -> bool {
        if self.current_line < self.lines.len() {
            self.current_line += 1;
            true
        } else {
            false
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RunMode) {
        self.mode = mode;
        self.running = mode == RunMode::Continue;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Lines within `radius` of the cursor, as (1-based line, text).
    pub fn context(&self, radius: usize) -> Vec<(usize, &str)> {
        if self.lines.is_empty() {
            return Vec::new();
        }
        let start = self.current_line.saturating_sub(radius).max(1);
        let end = (self.current_line + radius).min(self.lines.len());
        (start..=end)
            .map(|n| (n, self.lines[n - 1].as_str()))
            .collect()
    }

    pub fn enter_function(&mut self, function: &str, line: usize) {
        self.call_stack.push(CallFrame {
            function: function.to_string(),
            line,
        });
    }

    /// Pop the innermost frame; None when the stack is already empty.
    pub fn exit_function(&mut self) -> Option<CallFrame> {
        self.call_stack.pop()
    }

    pub fn call_stack(&self) -> &[CallFrame] {
        &self.call_stack
    }
}

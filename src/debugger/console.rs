use super::{Breakpoints, RunMode};
use crate::export::SessionSnapshot;
use crate::render::{self, colors, pad_right};
use crate::script::{
    apply_assignment, enter_procedure, parse_proc_line, parse_set_line, run_demo,
    ScriptController,
};
use crate::tracker::VariableStore;
use crate::watch::WatchRegistry;
use std::fs;
use std::io::{self, BufRead, Write};

/// Interactive command loop tying the store, watch registry,
/// breakpoints, and script controller together for one session.
pub struct Console {
    store: VariableStore,
    registry: WatchRegistry,
    breakpoints: Breakpoints,
    controller: ScriptController,
    monitoring: bool,
    running: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            store: VariableStore::new(),
            registry: WatchRegistry::new(),
            breakpoints: Breakpoints::new(),
            controller: ScriptController::new(),
            monitoring: true,
            running: true,
        }
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub fn registry(&self) -> &WatchRegistry {
        &self.registry
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn controller(&self) -> &ScriptController {
        &self.controller
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read commands from stdin until quit or EOF.
    pub fn run(&mut self) -> io::Result<()> {
        self.show_welcome();
        self.show_help();

        let stdin = io::stdin();
        let mut input = String::new();

        while self.running {
            print!("{}(tcldbg) {}", colors::CYAN, colors::RESET);
            io::stdout().flush()?;

            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                println!();
                println!(
                    "{}[GOODBYE]{} Input stream ended. Exiting...",
                    colors::CYAN,
                    colors::RESET
                );
                break;
            }

            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.handle_command(trimmed);
        }

        Ok(())
    }

    /// Dispatch one command line. Public so tests can drive the
    /// console without a terminal.
    pub fn handle_command(&mut self, input: &str) {
        let tokens = match shlex::split(input) {
            Some(tokens) if !tokens.is_empty() => tokens,
            _ => {
                self.error("Could not parse command (unbalanced quotes?)");
                return;
            }
        };
        let args: Vec<&str> = tokens.iter().skip(1).map(|t| t.as_str()).collect();

        match tokens[0].as_str() {
            "load" => match args.first() {
                Some(path) => self.load_script(path),
                None => self.error("Usage: load <filename>"),
            },
            "run" => self.run_simulation(),
            "step" => {
                self.controller.set_mode(RunMode::StepInto);
                println!(
                    "{}[STEP]{} Into line {}",
                    colors::BLUE,
                    colors::RESET,
                    self.controller.current_line()
                );
                self.execute_step();
            }
            "next" => {
                self.controller.set_mode(RunMode::StepOver);
                println!(
                    "{}[STEP]{} Over line {}",
                    colors::BLUE,
                    colors::RESET,
                    self.controller.current_line()
                );
                self.execute_step();
            }
            "continue" => self.continue_execution(),
            "pause" => {
                self.controller.set_mode(RunMode::Paused);
                println!(
                    "{}[PAUSED]{} At line {}",
                    colors::YELLOW,
                    colors::RESET,
                    self.controller.current_line()
                );
            }
            "break" => match args.first().and_then(|a| a.parse::<usize>().ok()) {
                Some(line) if line > 0 => self.set_breakpoint(line),
                _ => self.error("Usage: break <line_number>"),
            },
            "breakvar" => match args.first() {
                Some(name) => {
                    let condition = args.get(1).copied().unwrap_or("");
                    self.set_variable_trigger(name, condition);
                }
                None => self.error("Usage: breakvar <variable_name> [condition]"),
            },
            "unbreak" => match args.first().and_then(|a| a.parse::<usize>().ok()) {
                Some(line) if line > 0 => {
                    if self.breakpoints.remove(line) {
                        println!(
                            "{}[BREAKPOINT]{} Removed from line {}{}{}",
                            colors::RED,
                            colors::RESET,
                            colors::YELLOW,
                            line,
                            colors::RESET
                        );
                    } else {
                        self.error(&format!("No breakpoint found at line {}", line));
                    }
                }
                _ => self.error("Usage: unbreak <line_number>"),
            },
            "breaks" => render::print_breakpoints(&self.breakpoints),
            "vars" => render::print_variables(&self.store, &self.registry),
            "watch" => match args.first() {
                Some(name) => {
                    self.registry.add_watch(name);
                    println!(
                        "{}[WATCH]{} Added '{}{}{}' to watch list",
                        colors::YELLOW,
                        colors::RESET,
                        colors::GREEN,
                        name,
                        colors::RESET
                    );
                }
                None => self.error("Usage: watch <variable_name>"),
            },
            "unwatch" => match args.first() {
                Some(name) => {
                    if self.registry.remove_watch(name) {
                        println!(
                            "{}[WATCH]{} Removed '{}{}{}' from watch list",
                            colors::YELLOW,
                            colors::RESET,
                            colors::GREEN,
                            name,
                            colors::RESET
                        );
                    } else {
                        println!(
                            "{}[INFO]{} '{}' was not on the watch list",
                            colors::GRAY,
                            colors::RESET,
                            name
                        );
                    }
                }
                None => self.error("Usage: unwatch <variable_name>"),
            },
            "examine" | "memory" => match args.first() {
                Some(name) => match self.store.resolve(name) {
                    Some(record) => render::print_memory_analysis(record),
                    None => self.error(&format!("Variable '{}' not found!", name)),
                },
                None => self.error("Usage: examine <variable_name>"),
            },
            "monitor" => match args.first() {
                Some(&"on") => self.set_monitoring(true),
                Some(&"off") => self.set_monitoring(false),
                _ => self.error("Usage: monitor [on|off]"),
            },
            "context" => {
                let radius = args
                    .first()
                    .and_then(|a| a.parse::<usize>().ok())
                    .filter(|&n| n > 0)
                    .unwrap_or(5);
                render::print_context(&self.controller, radius);
            }
            "stack" => render::print_call_stack(&self.controller),
            "export" => self.export_snapshot(args.first().copied()),
            "clear" => print!("\x1b[2J\x1b[H"),
            "help" => self.show_help(),
            "quit" | "exit" => {
                println!(
                    "{}[GOODBYE]{} Tcl debugger exiting...",
                    colors::CYAN,
                    colors::RESET
                );
                self.running = false;
            }
            other => {
                self.error(&format!("Unknown command: {}", other));
                println!("Type 'help' for available commands.");
            }
        }
    }

    fn error(&self, message: &str) {
        println!("{}[ERROR]{} {}", colors::RED, colors::RESET, message);
    }

    /// Load a script directly, without going through command parsing.
    /// The startup path from the command line arrives here untokenized,
    /// so paths with spaces survive.
    pub fn load_script(&mut self, path: &str) {
        match self.controller.load(path) {
            Ok(count) => {
                println!(
                    "{}[LOADED]{} {}{}{} ({} lines)",
                    colors::GREEN,
                    colors::RESET,
                    colors::CYAN,
                    path,
                    colors::RESET,
                    count
                );
            }
            Err(e) => self.error(&format!("Cannot open file {}: {}", path, e)),
        }
    }

    fn run_simulation(&mut self) {
        println!(
            "{}[SIMULATE]{} Executing script...",
            colors::BLUE,
            colors::RESET
        );
        let fired = run_demo(
            &mut self.store,
            &mut self.registry,
            &mut self.controller,
            self.monitoring,
        );
        if fired > 0 {
            println!(
                "{}[SIMULATE]{} {} write(s) fired a conditional trigger",
                colors::BLUE,
                colors::RESET,
                fired
            );
        }
    }

    fn set_breakpoint(&mut self, line: usize) {
        self.breakpoints.add(line);
        println!(
            "{}[BREAKPOINT]{} Set at line {}{}{} @{}{:x}{}",
            colors::RED,
            colors::RESET,
            colors::YELLOW,
            line,
            colors::RESET,
            colors::GRAY,
            render::breakpoint_address(line),
            colors::RESET
        );
    }

    fn set_variable_trigger(&mut self, name: &str, condition: &str) {
        self.registry.add_trigger(name, condition);
        print!(
            "{}[WATCH BP]{} Variable '{}{}{}'",
            colors::YELLOW,
            colors::RESET,
            colors::GREEN,
            name,
            colors::RESET
        );
        if !condition.is_empty() {
            print!(
                " (when: {}{}{})",
                colors::MAGENTA,
                condition,
                colors::RESET
            );
        }
        println!();
    }

    fn set_monitoring(&mut self, enabled: bool) {
        self.monitoring = enabled;
        println!(
            "{}[MONITOR]{} Real-time monitoring {}",
            colors::CYAN,
            colors::RESET,
            if enabled {
                format!("{}ENABLED{}", colors::GREEN, colors::RESET)
            } else {
                format!("{}DISABLED{}", colors::RED, colors::RESET)
            }
        );
    }

    /// Execute the current line through the simulator and advance.
    /// Returns false when execution paused or the script ran out.
    fn execute_step(&mut self) -> bool {
        let Some(text) = self.controller.current_line_text().map(|t| t.to_string()) else {
            println!(
                "{}[INFO]{} End of script reached.",
                colors::GRAY,
                colors::RESET
            );
            self.controller.set_mode(RunMode::Paused);
            return false;
        };
        let line = self.controller.current_line();

        println!(
            "{}[EXECUTE]{} Line {}: {}{}{}",
            colors::BLUE,
            colors::RESET,
            line,
            colors::WHITE,
            text,
            colors::RESET
        );

        let mut paused = false;

        if let Some((name, value)) = parse_set_line(&text) {
            let scope = if self.controller.call_stack().is_empty() {
                "global"
            } else {
                "local"
            };
            if apply_assignment(
                &mut self.store,
                &mut self.registry,
                &name,
                &value,
                scope,
                line,
                self.monitoring,
            ) {
                paused = true;
            }
        } else if let Some(function) = parse_proc_line(&text) {
            enter_procedure(&mut self.controller, &mut self.store, &function, line);
        }

        if self.breakpoints.should_stop(line) {
            self.breakpoints.hit(line);
            println!(
                "{}[BREAKPOINT]{} Hit at line {}",
                colors::RED,
                colors::RESET,
                line
            );
            render::print_context(&self.controller, 3);
            paused = true;
        }

        let advanced = self.controller.advance();
        if paused || !advanced {
            self.controller.set_mode(RunMode::Paused);
        }
        advanced && !paused
    }

    fn continue_execution(&mut self) {
        self.controller.set_mode(RunMode::Continue);
        println!(
            "{}[CONTINUE]{} Execution resumed",
            colors::GREEN,
            colors::RESET
        );
        while self.controller.mode() == RunMode::Continue {
            if !self.execute_step() {
                break;
            }
        }
    }

    fn export_snapshot(&self, path: Option<&str>) {
        let snapshot = SessionSnapshot::capture(&self.store, &self.registry, &self.breakpoints);
        let json = match snapshot.to_json() {
            Ok(json) => json,
            Err(e) => {
                self.error(&format!("Snapshot serialization failed: {}", e));
                return;
            }
        };
        match path {
            Some(path) => match fs::write(path, &json) {
                Ok(()) => println!(
                    "{}[EXPORT]{} Session snapshot written to {}{}{}",
                    colors::GREEN,
                    colors::RESET,
                    colors::CYAN,
                    path,
                    colors::RESET
                ),
                Err(e) => self.error(&format!("Cannot write {}: {}", path, e)),
            },
            None => println!("{}", json),
        }
    }

    fn show_welcome(&self) {
        render::separator('=', 60);
        println!(
            "{}{}{}{}",
            colors::BOLD,
            colors::CYAN,
            render::center("TCL SCRIPT DEBUGGER", 60),
            colors::RESET
        );
        println!(
            "{}",
            render::center("Memory-level variable tracking with watch conditions", 60)
        );
        render::separator('=', 60);
        println!();
    }

    fn show_help(&self) {
        render::sub_header("AVAILABLE COMMANDS");

        let commands: &[(&str, &str, &str)] = &[
            ("load", "<file>", "Load a Tcl script for debugging"),
            ("run", "", "Run the canned demo session"),
            ("step", "", "Step into the current line"),
            ("next", "", "Step over the current line"),
            ("continue", "", "Continue until breakpoint or trigger"),
            ("pause", "", "Pause execution"),
            ("", "", ""),
            ("break", "<line>", "Set breakpoint at line number"),
            ("breakvar", "<var> [cond]", "Break when variable changes"),
            ("unbreak", "<line>", "Remove breakpoint"),
            ("breaks", "", "List all breakpoints"),
            ("", "", ""),
            ("vars", "", "List all variables with details"),
            ("watch", "<var>", "Add variable to watch list"),
            ("unwatch", "<var>", "Remove from watch list"),
            ("examine", "<var>", "Detailed variable analysis"),
            ("monitor", "[on|off]", "Toggle real-time monitoring"),
            ("", "", ""),
            ("context", "[lines]", "Show source code context"),
            ("stack", "", "Show call stack"),
            ("export", "[file]", "Dump session state as JSON"),
            ("", "", ""),
            ("clear", "", "Clear screen"),
            ("help", "", "Show this help"),
            ("quit", "", "Exit debugger"),
        ];

        println!(
            "{}{}{}DESCRIPTION{}",
            colors::BOLD,
            pad_right("COMMAND", 12),
            pad_right("ARGS", 15),
            colors::RESET
        );
        println!("{}", "-".repeat(70));
        for (cmd, args, description) in commands {
            if cmd.is_empty() {
                println!();
                continue;
            }
            println!(
                "{}{}{}{}{}{}{}",
                colors::GREEN,
                pad_right(cmd, 12),
                colors::RESET,
                colors::YELLOW,
                pad_right(args, 15),
                colors::RESET,
                description
            );
        }
        println!();
    }
}

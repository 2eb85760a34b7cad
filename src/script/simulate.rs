//! Canned stand-in for a real Tcl interpreter hook. Only `set` and
//! `proc` lines are recognized; everything else is ignored.

use super::ScriptController;
use crate::render::{self, colors};
use crate::tracker::VariableStore;
use crate::watch::WatchRegistry;

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Strip one matching pair of quotes or braces around a value.
fn strip_value_wrapper(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('{') && value.ends_with('}')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Recognize `set <name> <value>`; the value keeps interior spaces.
pub fn parse_set_line(line: &str) -> Option<(String, String)> {
    let rest = line.trim().strip_prefix("set ")?.trim_start();
    let name = rest.split_whitespace().next()?;
    if !is_identifier(name) {
        return None;
    }
    let value = rest[name.len()..].trim();
    if value.is_empty() {
        return None;
    }
    Some((name.to_string(), strip_value_wrapper(value).to_string()))
}

/// Recognize `proc <name> ...`, yielding the procedure name.
pub fn parse_proc_line(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix("proc ")?.trim_start();
    let name = rest.split_whitespace().next()?;
    if !is_identifier(name) {
        return None;
    }
    Some(name.to_string())
}

/// Route one assignment through the store and the watch registry,
/// printing the monitor and watch lines. Returns true when a
/// conditional trigger fired.
pub fn apply_assignment(
    store: &mut VariableStore,
    registry: &mut WatchRegistry,
    name: &str,
    value: &str,
    scope: &str,
    line: usize,
    monitoring: bool,
) -> bool {
    let Some(event) = store.write(name, value, scope, line) else {
        // Local write with no frame to hold it: dropped.
        return false;
    };

    if monitoring {
        if let Some(record) = store.resolve(name) {
            render::print_monitor_line(&event, record);
        }
    }

    if registry.is_watched(name) && !event.created && event.old_value != event.new_value {
        render::print_watch_change(&event);
    }

    let fired = registry.on_variable_changed(&event);
    if fired {
        render::print_watch_hit(&event);
    }
    fired
}

/// Simulate entering a procedure: a call frame plus a fresh local scope.
pub fn enter_procedure(
    controller: &mut ScriptController,
    store: &mut VariableStore,
    function: &str,
    line: usize,
) {
    controller.enter_function(function, line);
    store.push_scope();
    println!(
        "{}[ENTER]{} Function: {}{}{} at line {} @{}{:x}{}",
        colors::MAGENTA,
        colors::RESET,
        colors::CYAN,
        function,
        colors::RESET,
        line,
        colors::GRAY,
        render::frame_address(function),
        colors::RESET,
    );
}

/// Simulate leaving the innermost procedure.
pub fn exit_procedure(controller: &mut ScriptController, store: &mut VariableStore) {
    store.pop_scope();
    if let Some(frame) = controller.exit_function() {
        println!(
            "{}[EXIT]{} Function: {}{}{} @{}{:x}{}",
            colors::MAGENTA,
            colors::RESET,
            colors::CYAN,
            frame.function,
            colors::RESET,
            colors::GRAY,
            render::frame_address(&frame.function),
            colors::RESET,
        );
    }
}

/// Replay the fixed demonstration session: a handful of global
/// assignments, two updates to the same counter, and a nested pair of
/// procedure calls with local variables. Returns how many writes fired
/// a conditional trigger.
pub fn run_demo(
    store: &mut VariableStore,
    registry: &mut WatchRegistry,
    controller: &mut ScriptController,
    monitoring: bool,
) -> u32 {
    let mut fired = 0u32;
    let mut assign = |store: &mut VariableStore,
                      registry: &mut WatchRegistry,
                      name: &str,
                      value: &str,
                      scope: &str,
                      line: usize| {
        if apply_assignment(store, registry, name, value, scope, line, monitoring) {
            fired += 1;
        }
    };

    assign(store, registry, "counter", "42", "global", 10);
    assign(store, registry, "name", "HelloWorld", "global", 11);
    assign(store, registry, "pi", "3.14159", "global", 12);
    assign(store, registry, "items", "{apple banana cherry}", "global", 13);
    assign(store, registry, "config", "{host localhost port 8080}", "global", 14);
    assign(store, registry, "enabled", "true", "global", 15);

    assign(store, registry, "counter", "43", "global", 20);
    assign(store, registry, "counter", "44", "global", 25);

    enter_procedure(controller, store, "calculateArea", 30);
    assign(store, registry, "width", "10", "local", 31);
    assign(store, registry, "height", "20", "local", 32);
    assign(store, registry, "area", "200", "local", 33);

    enter_procedure(controller, store, "validateInput", 35);
    assign(store, registry, "input", "valid", "local", 36);

    exit_procedure(controller, store);
    exit_procedure(controller, store);

    fired
}

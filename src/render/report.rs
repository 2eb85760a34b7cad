use super::colors;
use super::format::{pad_left, pad_right, sub_header};
use super::memory::{
    breakpoint_address, element_address, estimated_size, frame_address, hex_dump,
    variable_address,
};
use crate::classifier::Kind;
use crate::debugger::Breakpoints;
use crate::script::ScriptController;
use crate::tracker::{ChangeEvent, VariableRecord, VariableStore};
use crate::watch::WatchRegistry;

/// One [CREATE]/[UPDATE] monitor line per stored write.
pub fn print_monitor_line(event: &ChangeEvent, record: &VariableRecord) {
    let tag = if event.created {
        format!("{}[CREATE]{}", colors::GREEN, colors::RESET)
    } else {
        format!("{}[UPDATE]{}", colors::BLUE, colors::RESET)
    };

    print!(
        "{} {}{}{} = '{}{}{}' {}{}{} @{}{:x}{} (line {})",
        tag,
        colors::CYAN,
        pad_right(&event.name, 15),
        colors::RESET,
        colors::WHITE,
        event.new_value,
        colors::RESET,
        colors::GRAY,
        record.kind.icon(),
        colors::RESET,
        colors::GRAY,
        variable_address(&event.name),
        colors::RESET,
        event.line,
    );
    if !event.created && !event.old_value.is_empty() && event.old_value != event.new_value {
        print!(
            " [was: '{}{}{}']",
            colors::YELLOW,
            event.old_value,
            colors::RESET
        );
    }
    println!();

    print_brief_composite(record);
}

/// Short element/pair preview after a composite value is stored.
fn print_brief_composite(record: &VariableRecord) {
    match &record.kind {
        Kind::List(elements) if !elements.is_empty() => {
            let shown: Vec<&str> = elements.iter().take(3).map(|e| e.as_str()).collect();
            print!(
                "         {}[LIST] {} elements: {}",
                colors::GRAY,
                elements.len(),
                shown.join(", ")
            );
            if elements.len() > 3 {
                print!(" ... (+{} more)", elements.len() - 3);
            }
            println!("{}", colors::RESET);
        }
        Kind::Dict(pairs) if !pairs.is_empty() => {
            let shown: Vec<String> = pairs
                .iter()
                .take(2)
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            print!(
                "         {}[DICT] {} pairs: {}",
                colors::GRAY,
                pairs.len(),
                shown.join(", ")
            );
            if pairs.len() > 2 {
                print!(" ... (+{} more)", pairs.len() - 2);
            }
            println!("{}", colors::RESET);
        }
        _ => {}
    }
}

/// Passive change notice for a watched variable.
pub fn print_watch_change(event: &ChangeEvent) {
    println!(
        "{}[WATCH]{} Variable '{}{}{}' changed: '{}{}{}' -> '{}{}{}'",
        colors::YELLOW,
        colors::RESET,
        colors::GREEN,
        event.name,
        colors::RESET,
        colors::GRAY,
        event.old_value,
        colors::RESET,
        colors::WHITE,
        event.new_value,
        colors::RESET,
    );
}

/// A conditional trigger fired; execution will pause.
pub fn print_watch_hit(event: &ChangeEvent) {
    println!(
        "{}[TRIGGER]{} Condition met on '{}{}{}' (value '{}') - pausing",
        colors::RED,
        colors::RESET,
        colors::GREEN,
        event.name,
        colors::RESET,
        event.new_value,
    );
}

fn variable_row(record: &VariableRecord, indent_local: bool) {
    let name = if indent_local {
        format!("  {}", record.name)
    } else {
        record.name.clone()
    };
    let mut value = format!("'{}'", record.value);
    if value.chars().count() > 25 {
        // Cut on a char boundary; a byte-index truncate can split a
        // multibyte value and panic.
        value = value.chars().take(22).collect();
        value.push_str("...");
    }

    print!("{}", pad_right(&name, 18));
    print!(
        "{}{}{}",
        colors::GRAY,
        pad_right(record.kind.icon(), 8),
        colors::RESET
    );
    print!("{}", pad_right(&value, 25));
    print!(
        "{}{}{}",
        colors::GRAY,
        pad_right(&format!("{:X}", variable_address(&record.name)), 12),
        colors::RESET
    );
    print!(
        "{}B, {}x",
        estimated_size(&record.value),
        record.mutation_count
    );
    if record.last_modified_line > 0 {
        print!(", L{}", record.last_modified_line);
    }
    println!();
}

/// Full variable overview: locals, globals, watch list, statistics.
pub fn print_variables(store: &VariableStore, registry: &WatchRegistry) {
    sub_header("VARIABLE OVERVIEW");

    if store.is_empty() && registry.watches().is_empty() {
        println!("{}[INFO]{} No variables defined.", colors::GRAY, colors::RESET);
        return;
    }

    println!(
        "{}{}{}{}{}INFO{}",
        colors::BOLD,
        pad_right("NAME", 18),
        pad_right("TYPE", 8),
        pad_right("VALUE", 25),
        pad_right("ADDRESS", 12),
        colors::RESET
    );
    println!("{}", "-".repeat(80));

    let (locals, globals) = store.list_all();

    if !locals.is_empty() {
        println!("{}LOCAL SCOPE:{}", colors::YELLOW, colors::RESET);
        for record in &locals {
            variable_row(record, true);
        }
        println!();
    }

    if !globals.is_empty() {
        println!("{}GLOBAL SCOPE:{}", colors::CYAN, colors::RESET);
        for record in &globals {
            variable_row(record, false);
        }
        println!();
    }

    if !registry.watches().is_empty() {
        println!("{}WATCHED VARIABLES:{}", colors::GREEN, colors::RESET);
        for name in registry.watches() {
            match store.resolve(name) {
                Some(record) => {
                    print!("{}[WATCH] {}", colors::GREEN, colors::RESET);
                    variable_row(record, false);
                }
                None => {
                    println!(
                        "{}[WATCH] {}{}{}UNDEFINED{}",
                        colors::RED,
                        colors::RESET,
                        pad_right(name, 18),
                        colors::RED,
                        colors::RESET
                    );
                }
            }
        }
        println!();
    }

    print_statistics(store);
}

fn print_statistics(store: &VariableStore) {
    let mut counts = [0usize; 6];
    let mut total_memory = 0usize;
    for record in store.iter_all() {
        let slot = match record.kind {
            Kind::Integer(_) => 0,
            Kind::Float(_) => 1,
            Kind::Str(_) => 2,
            Kind::List(_) => 3,
            Kind::Dict(_) => 4,
            Kind::Empty => 5,
        };
        counts[slot] += 1;
        total_memory += estimated_size(&record.value);
    }

    println!("{}STATISTICS:{}", colors::BOLD, colors::RESET);
    print!("  Types: ");
    let labels = ["int", "float", "str", "list", "dict", "empty"];
    for (count, label) in counts.iter().zip(labels) {
        if *count > 0 {
            print!("{} {} ", count, label);
        }
    }
    println!();
    println!("  Memory: {} bytes total", total_memory);
}

/// Detailed per-variable report: properties, history, hex dump, and
/// element tables for composites.
pub fn print_memory_analysis(record: &VariableRecord) {
    sub_header(&format!("MEMORY ANALYSIS: {}", record.name));

    println!("{}{}VALUE{}", colors::BOLD, pad_right("PROPERTY", 15), colors::RESET);
    println!("{}", "-".repeat(40));

    println!(
        "{}{}{:x}{}",
        pad_right("Address:", 15),
        colors::GRAY,
        variable_address(&record.name),
        colors::RESET
    );
    println!(
        "{}{} bytes",
        pad_right("Size:", 15),
        estimated_size(&record.value)
    );
    println!(
        "{}{}{}{}",
        pad_right("Type:", 15),
        colors::CYAN,
        record.kind.detailed(),
        colors::RESET
    );
    println!("{}{}", pad_right("Mutations:", 15), record.mutation_count);
    println!("{}{}", pad_right("Scope:", 15), record.scope);
    println!(
        "{}line {}",
        pad_right("Last Modified:", 15),
        record.last_modified_line
    );
    println!(
        "{}'{}{}{}'",
        pad_right("Value:", 15),
        colors::WHITE,
        record.value,
        colors::RESET
    );

    if !record.previous_value.is_empty() && record.previous_value != record.value {
        println!(
            "{}'{}{}{}'",
            pad_right("Previous:", 15),
            colors::YELLOW,
            record.previous_value,
            colors::RESET
        );
    }

    if !record.history.is_empty() {
        print!("{}", pad_right("History:", 15));
        let recent: Vec<&String> = record.history.iter().rev().take(3).collect();
        for (i, value) in recent.iter().enumerate() {
            if i > 0 {
                print!(" -> ");
            }
            print!("'{}'", value);
        }
        if record.history.len() > 3 {
            print!(" ... (+{} more)", record.history.len() - 3);
        }
        println!();
    }

    println!();
    println!("{}Hex Dump:{}", colors::GRAY, colors::RESET);
    println!("{}", hex_dump(&record.value));
    println!();

    print_composite_analysis(record);
}

fn print_composite_analysis(record: &VariableRecord) {
    match &record.kind {
        Kind::List(elements) if !elements.is_empty() => {
            println!("{}LIST ANALYSIS:{}", colors::BLUE, colors::RESET);
            println!("  Length: {} elements", elements.len());
            println!(
                "{}  {}{}ADDRESS{}",
                colors::BOLD,
                pad_right("INDEX", 8),
                pad_right("VALUE", 20),
                colors::RESET
            );
            for (i, element) in elements.iter().take(5).enumerate() {
                println!(
                    "  {}{}{}{:x}{}",
                    pad_right(&format!("[{}]", i), 8),
                    pad_right(&format!("'{}'", element), 20),
                    colors::GRAY,
                    element_address(0x3000_0000, i),
                    colors::RESET
                );
            }
            if elements.len() > 5 {
                println!("  ... (+{} more elements)", elements.len() - 5);
            }
            println!();
        }
        Kind::Dict(pairs) if !pairs.is_empty() => {
            println!("{}DICTIONARY ANALYSIS:{}", colors::MAGENTA, colors::RESET);
            println!("  Size: {} key-value pairs", pairs.len());
            println!(
                "{}  {}{}ADDRESS{}",
                colors::BOLD,
                pad_right("KEY", 15),
                pad_right("VALUE", 20),
                colors::RESET
            );
            for (i, (key, value)) in pairs.iter().take(5).enumerate() {
                println!(
                    "  {}{}{}{:x}{}",
                    pad_right(&format!("'{}'", key), 15),
                    pad_right(&format!("'{}'", value), 20),
                    colors::GRAY,
                    element_address(0x4000_0000, i),
                    colors::RESET
                );
            }
            if pairs.len() > 5 {
                println!("  ... (+{} more pairs)", pairs.len() - 5);
            }
            println!();
        }
        _ => {}
    }
}

/// Breakpoint listing table.
pub fn print_breakpoints(breakpoints: &Breakpoints) {
    if breakpoints.is_empty() {
        println!("{}[INFO]{} No breakpoints set.", colors::GRAY, colors::RESET);
        return;
    }

    sub_header(&format!("BREAKPOINTS ({})", breakpoints.len()));
    println!(
        "{}{}{}{}ADDRESS{}",
        colors::BOLD,
        pad_right("LINE", 6),
        pad_right("STATUS", 10),
        pad_right("HITS", 6),
        colors::RESET
    );

    for bp in breakpoints.iter() {
        print!("{}", pad_right(&bp.line.to_string(), 6));
        if bp.enabled {
            print!("{}{}{}", colors::GREEN, pad_right("ENABLED", 10), colors::RESET);
        } else {
            print!("{}{}{}", colors::RED, pad_right("DISABLED", 10), colors::RESET);
        }
        print!("{}", pad_right(&bp.hit_count.to_string(), 6));
        println!(
            "{}{:X}{}",
            colors::GRAY,
            breakpoint_address(bp.line),
            colors::RESET
        );
    }
}

/// Call-stack table, innermost frame first.
pub fn print_call_stack(controller: &ScriptController) {
    let frames = controller.call_stack();
    if frames.is_empty() {
        println!("{}[INFO]{} Call stack is empty.", colors::GRAY, colors::RESET);
        return;
    }

    sub_header(&format!("CALL STACK ({} frames)", frames.len()));
    println!(
        "{}{}{}{}ADDRESS{}",
        colors::BOLD,
        pad_right("LEVEL", 7),
        pad_right("FUNCTION", 20),
        pad_right("LINE", 6),
        colors::RESET
    );

    for (level, frame) in frames.iter().rev().enumerate() {
        print!("{}", pad_right(&level.to_string(), 7));
        print!(
            "{}{}{}",
            colors::CYAN,
            pad_right(&frame.function, 20),
            colors::RESET
        );
        print!("{}", pad_right(&frame.line.to_string(), 6));
        println!(
            "{}{:X}{}",
            colors::GRAY,
            frame_address(&frame.function),
            colors::RESET
        );
    }
}

/// Source window around the cursor, current line marked with `>>>`.
pub fn print_context(controller: &ScriptController, radius: usize) {
    sub_header("SOURCE CONTEXT");

    if !controller.is_loaded() {
        println!("{}[INFO]{} No script loaded.", colors::GRAY, colors::RESET);
        return;
    }

    println!("File: {}{}{}", colors::CYAN, controller.path(), colors::RESET);
    println!(
        "Current Line: {}{}{}",
        colors::YELLOW,
        controller.current_line(),
        colors::RESET
    );
    println!();

    for (number, text) in controller.context(radius) {
        let padded = pad_left(&number.to_string(), 3);
        if number == controller.current_line() {
            println!(
                "{}>>>{}: {}{}{}",
                colors::YELLOW,
                padded,
                colors::WHITE,
                text,
                colors::RESET
            );
        } else {
            println!("   {}: {}{}{}", padded, colors::GRAY, text, colors::RESET);
        }
    }
    println!();
}

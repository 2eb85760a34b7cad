use crate::tracker::ChangeEvent;
use serde::Serialize;

/// Parsed form of a trigger's textual condition.
///
/// Unrecognized text is kept but never fires; the original debugger
/// treated such conditions as silently inert and that behavior is
/// preserved rather than extended into a richer grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TriggerCondition {
    /// Empty condition or the literal "changed".
    AnyChange,
    /// "=<expected>": fires when the new value equals `expected`.
    Equals(String),
    Inert(String),
}

impl TriggerCondition {
    pub fn parse(text: &str) -> Self {
        if text.is_empty() || text == "changed" {
            TriggerCondition::AnyChange
        } else if let Some(expected) = text.strip_prefix('=') {
            TriggerCondition::Equals(expected.to_string())
        } else {
            TriggerCondition::Inert(text.to_string())
        }
    }
}

/// A variable-keyed breakpoint condition.
#[derive(Debug, Clone, Serialize)]
pub struct Trigger {
    pub name: String,
    pub condition: TriggerCondition,
    /// Incremented every time the trigger is evaluated, fired or not.
    pub hit_count: u64,
}

impl Trigger {
    fn evaluate(&mut self, old_value: &str, new_value: &str) -> bool {
        self.hit_count += 1;
        match &self.condition {
            TriggerCondition::AnyChange => old_value != new_value,
            TriggerCondition::Equals(expected) => new_value == expected,
            TriggerCondition::Inert(_) => false,
        }
    }
}

/// Watched names plus variable-keyed conditional triggers.
///
/// Holds no variable state of its own; it is consulted with the
/// ChangeEvent produced by each VariableStore write.
#[derive(Debug, Default)]
pub struct WatchRegistry {
    watches: Vec<String>,
    triggers: Vec<Trigger>,
}

impl WatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicates are allowed; the list is display-ordered, not a set.
    pub fn add_watch(&mut self, name: &str) {
        self.watches.push(name.to_string());
    }

    /// Remove the first occurrence. Returns false when absent (no-op).
    pub fn remove_watch(&mut self, name: &str) -> bool {
        if let Some(pos) = self.watches.iter().position(|w| w == name) {
            self.watches.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn is_watched(&self, name: &str) -> bool {
        self.watches.iter().any(|w| w == name)
    }

    pub fn watches(&self) -> &[String] {
        &self.watches
    }

    /// Register a trigger. Multiple triggers may share a name; all of
    /// them are evaluated independently on each change.
    pub fn add_trigger(&mut self, name: &str, condition: &str) {
        self.triggers.push(Trigger {
            name: name.to_string(),
            condition: TriggerCondition::parse(condition),
            hit_count: 0,
        });
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    /// Evaluate every trigger matching the event's name; true when any
    /// fired, so the caller can pause.
    pub fn on_variable_changed(&mut self, event: &ChangeEvent) -> bool {
        let mut fired = false;
        for trigger in self.triggers.iter_mut() {
            if trigger.name == event.name {
                fired |= trigger.evaluate(&event.old_value, &event.new_value);
            }
        }
        fired
    }
}

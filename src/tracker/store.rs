use super::{ChangeEvent, VariableRecord};
use std::collections::BTreeMap;

type ScopeMap = BTreeMap<String, VariableRecord>;

/// Owns the global variable mapping and the LIFO scope stack.
///
/// Lookups resolve local-first: the top frame shadows the global map,
/// deeper frames are not searched. One store per debugging session,
/// explicitly constructed and passed by the owner.
#[derive(Debug, Default)]
pub struct VariableStore {
    globals: ScopeMap,
    frames: Vec<ScopeMap>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observed assignment.
    ///
    /// A local-scoped write always targets the top frame, creating a
    /// shadow there even when a global of the same name exists; with
    /// no frame to hold it, the write is dropped and no event is
    /// produced. A global-scoped write updates whatever the name
    /// resolves to (local shadow first) or creates in the global map.
    /// Stored writes always yield an event, even when the value is
    /// unchanged.
    pub fn write(&mut self, name: &str, value: &str, scope: &str, line: usize) -> Option<ChangeEvent> {
        if scope == "global" {
            if let Some(record) = self.resolve_mut(name) {
                let old_value = record.value.clone();
                record.update(value, line);
                return Some(ChangeEvent {
                    name: name.to_string(),
                    old_value,
                    new_value: value.to_string(),
                    created: false,
                    line,
                });
            }
            self.globals
                .insert(name.to_string(), VariableRecord::new(name, value, scope, line));
            return Some(ChangeEvent {
                name: name.to_string(),
                old_value: String::new(),
                new_value: value.to_string(),
                created: true,
                line,
            });
        }

        let frame = self.frames.last_mut()?;
        if let Some(record) = frame.get_mut(name) {
            let old_value = record.value.clone();
            record.update(value, line);
            return Some(ChangeEvent {
                name: name.to_string(),
                old_value,
                new_value: value.to_string(),
                created: false,
                line,
            });
        }
        frame.insert(name.to_string(), VariableRecord::new(name, value, scope, line));
        Some(ChangeEvent {
            name: name.to_string(),
            old_value: String::new(),
            new_value: value.to_string(),
            created: true,
            line,
        })
    }

    /// Look a name up, top frame first, then globals.
    pub fn resolve(&self, name: &str) -> Option<&VariableRecord> {
        if let Some(record) = self.frames.last().and_then(|f| f.get(name)) {
            return Some(record);
        }
        self.globals.get(name)
    }

    fn resolve_mut(&mut self, name: &str) -> Option<&mut VariableRecord> {
        let shadowed = self.frames.last().is_some_and(|f| f.contains_key(name));
        if shadowed {
            return self.frames.last_mut().and_then(|f| f.get_mut(name));
        }
        self.globals.get_mut(name)
    }

    pub fn push_scope(&mut self) {
        self.frames.push(ScopeMap::new());
    }

    /// Pop the top frame, discarding its records. Empty stack is a no-op.
    pub fn pop_scope(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Read-only snapshot: (top-frame locals, globals), both sorted by name.
    pub fn list_all(&self) -> (Vec<&VariableRecord>, Vec<&VariableRecord>) {
        let locals = self
            .frames
            .last()
            .map(|f| f.values().collect())
            .unwrap_or_default();
        let globals = self.globals.values().collect();
        (locals, globals)
    }

    /// Every record in every scope, globals first, for the statistics footer.
    pub fn iter_all(&self) -> impl Iterator<Item = &VariableRecord> {
        self.globals
            .values()
            .chain(self.frames.iter().flat_map(|f| f.values()))
    }

    pub fn is_empty(&self) -> bool {
        self.iter_all().next().is_none()
    }
}

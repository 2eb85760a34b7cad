use crate::debugger::{Breakpoint, Breakpoints};
use crate::tracker::{VariableRecord, VariableStore};
use crate::watch::{Trigger, WatchRegistry};
use serde::Serialize;

/// One-shot JSON view of the session for the `export` command. A
/// report, not reload-able state.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub globals: Vec<&'a VariableRecord>,
    pub locals: Vec<&'a VariableRecord>,
    pub watches: &'a [String],
    pub triggers: &'a [Trigger],
    pub breakpoints: Vec<&'a Breakpoint>,
}

impl<'a> SessionSnapshot<'a> {
    pub fn capture(
        store: &'a VariableStore,
        registry: &'a WatchRegistry,
        breakpoints: &'a Breakpoints,
    ) -> Self {
        let (locals, globals) = store.list_all();
        Self {
            globals,
            locals,
            watches: registry.watches(),
            triggers: registry.triggers(),
            breakpoints: breakpoints.iter().collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

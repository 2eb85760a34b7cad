use crate::classifier::{classify, Kind};
use serde::Serialize;
use std::collections::VecDeque;

/// Prior values retained per variable, oldest evicted first.
pub const HISTORY_CAPACITY: usize = 10;

/// One tracked variable: current and previous text, the inferred kind,
/// and a bounded mutation history.
#[derive(Debug, Clone, Serialize)]
pub struct VariableRecord {
    pub name: String,
    pub value: String,
    pub previous_value: String,
    pub kind: Kind,
    pub history: VecDeque<String>,
    /// "global" or the label of the owning frame; fixed at creation.
    pub scope: String,
    pub last_modified_line: usize,
    pub mutation_count: u64,
}

impl VariableRecord {
    pub fn new(name: &str, value: &str, scope: &str, line: usize) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            previous_value: String::new(),
            kind: classify(value),
            history: VecDeque::new(),
            scope: scope.to_string(),
            last_modified_line: line,
            mutation_count: 1,
        }
    }

    /// Apply a new value: extend history (once tracking has begun, even
    /// for a no-op rewrite), shift current into previous, reclassify.
    pub fn update(&mut self, new_value: &str, line: usize) {
        if !self.history.is_empty() || self.value != new_value {
            self.history.push_back(self.value.clone());
            if self.history.len() > HISTORY_CAPACITY {
                self.history.pop_front();
            }
        }

        self.previous_value = std::mem::replace(&mut self.value, new_value.to_string());
        self.kind = classify(&self.value);
        self.last_modified_line = line;
        self.mutation_count += 1;
    }
}

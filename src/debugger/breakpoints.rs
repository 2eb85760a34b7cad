use serde::Serialize;
use std::collections::BTreeMap;

/// A line-keyed breakpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Breakpoint {
    pub line: usize,
    pub enabled: bool,
    pub hit_count: u64,
}

/// Line breakpoints for the loaded script, keyed by line number.
/// Variable-keyed pausing lives in the watch registry instead.
#[derive(Debug, Default)]
pub struct Breakpoints {
    points: BTreeMap<usize, Breakpoint>,
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or reset) a breakpoint at a line.
    pub fn add(&mut self, line: usize) {
        self.points.insert(
            line,
            Breakpoint {
                line,
                enabled: true,
                hit_count: 0,
            },
        );
    }

    /// Returns false when no breakpoint existed at the line.
    pub fn remove(&mut self, line: usize) -> bool {
        self.points.remove(&line).is_some()
    }

    /// Flip enabled state; None when no breakpoint exists at the line.
    pub fn toggle(&mut self, line: usize) -> Option<bool> {
        let bp = self.points.get_mut(&line)?;
        bp.enabled = !bp.enabled;
        Some(bp.enabled)
    }

    /// True when an enabled breakpoint sits on the line.
    pub fn should_stop(&self, line: usize) -> bool {
        self.points.get(&line).is_some_and(|bp| bp.enabled)
    }

    pub fn hit(&mut self, line: usize) {
        if let Some(bp) = self.points.get_mut(&line) {
            bp.hit_count += 1;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.points.values()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

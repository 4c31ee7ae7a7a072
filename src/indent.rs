//! Indentation context consulted by the sink when wrapping lines.
//!
//! The sink never owns or mutates indentation; it is handed a provider at
//! construction and queries it once per wrap. [`IndentContext`] is the
//! shared implementation: application code raises the nesting depth with a
//! scope guard and every line the sink emits while the guard lives is
//! prefixed accordingly.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Supplies the indent prefix applied to every wrapped output line.
pub trait IndentProvider {
    /// Returns the current indent string.
    fn current_indent(&self) -> String;
}

/// Provider that never indents.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndent;

impl IndentProvider for NoIndent {
    fn current_indent(&self) -> String {
        String::new()
    }
}

/// Shared indentation depth with scope-guard control.
///
/// Clones share one depth counter, so the application can hold one handle
/// and the sink another.
#[derive(Debug, Clone)]
pub struct IndentContext {
    depth: Arc<AtomicUsize>,
    unit: String,
}

impl IndentContext {
    /// Creates a context whose indent is `unit` repeated once per level.
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            depth: Arc::new(AtomicUsize::new(0)),
            unit: unit.into(),
        }
    }

    /// Raises the nesting depth until the returned guard is dropped.
    #[must_use = "the depth drops back as soon as the guard is dropped"]
    pub fn indent(&self) -> IndentGuard {
        self.depth.fetch_add(1, Ordering::Relaxed);
        IndentGuard {
            depth: Arc::clone(&self.depth),
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Relaxed)
    }
}

impl Default for IndentContext {
    /// Four spaces per nesting level.
    fn default() -> Self {
        Self::new("    ")
    }
}

impl IndentProvider for IndentContext {
    fn current_indent(&self) -> String {
        self.unit.repeat(self.depth.load(Ordering::Relaxed))
    }
}

/// Restores the previous nesting depth when dropped.
#[derive(Debug)]
pub struct IndentGuard {
    depth: Arc<AtomicUsize>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        self.depth.fetch_sub(1, Ordering::Relaxed);
    }
}

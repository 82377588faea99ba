use std::sync::Arc;

use crate::diff::differ::RawChange;
use crate::foundation::ids::{IdentitySource, Key, KeyStream};

/// One identified span of a step's code.
///
/// Exactly one of `added` / `unchanged` is set; `removed` is always `false` once a change is
/// part of a [`Diff`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    /// Identifier, unique within the step's change list.
    pub key: Key,
    /// Literal text of the span.
    pub value: String,
    /// New in this step.
    pub added: bool,
    /// Always `false`; deletions never reach a frame.
    pub removed: bool,
    /// Carried over from the previous step.
    pub unchanged: bool,
}

impl Change {
    fn from_raw(raw: RawChange, key: Key) -> Self {
        Self {
            key,
            unchanged: raw.is_unchanged(),
            value: raw.value,
            added: raw.added,
            removed: raw.removed,
        }
    }
}

/// Ordered change list plus its concatenated text.
///
/// The text is always derived from the changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diff {
    value: String,
    changes: Vec<Arc<Change>>,
}

impl Diff {
    pub(crate) fn from_changes(changes: Vec<Arc<Change>>) -> Self {
        let value = changes.iter().map(|c| c.value.as_str()).collect();
        Self { value, changes }
    }

    /// Concatenation of every change's value, in order.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Changes in display order.
    pub fn changes(&self) -> &[Arc<Change>] {
        &self.changes
    }

    /// Values of the changes, in order.
    pub fn tokens(&self) -> Vec<&str> {
        self.changes.iter().map(|c| c.value.as_str()).collect()
    }
}

/// Before/after views of one step.
///
/// `initial` holds what the step keeps from the previous one; `animate` holds everything the
/// step shows. Unchanged changes are the same records in both views, so a renderer can move an
/// element continuously by matching keys. Changes only in `animate` are entering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// On-screen state before the transition plays.
    pub initial: Diff,
    /// On-screen state after the transition completes.
    pub animate: Diff,
}

impl Transition {
    /// Changes present in `animate` only.
    pub fn entering(&self) -> impl Iterator<Item = &Arc<Change>> {
        self.animate.changes.iter().filter(|c| c.added)
    }
}

/// Attach fresh keys to `changes` and derive the two views.
///
/// Every surviving change gets its own key; keys are never carried over from an earlier step.
pub fn build_transition(changes: Vec<RawChange>, keys: &dyn IdentitySource) -> Transition {
    let animate: Vec<Arc<Change>> = changes
        .into_iter()
        .filter(|c| !c.removed)
        .zip(KeyStream::new(keys))
        .map(|(raw, key)| Arc::new(Change::from_raw(raw, key)))
        .collect();

    let initial: Vec<Arc<Change>> = animate.iter().filter(|c| c.unchanged).cloned().collect();

    Transition {
        initial: Diff::from_changes(initial),
        animate: Diff::from_changes(animate),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/transition.rs"]
mod tests;

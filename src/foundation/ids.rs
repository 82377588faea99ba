use std::borrow::Borrow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier minted for frames, changes and sequences.
///
/// Consumers compare keys purely by string equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    /// Wrap an already-minted identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unbounded generator of unique identifiers.
///
/// One instance may be shared by every compilation in a process; implementations serialize
/// access to whatever state they keep so `next_key` can be called from several threads.
pub trait IdentitySource: Send + Sync {
    /// Mint a fresh identifier. Never returns a value it returned before.
    fn next_key(&self) -> Key;
}

/// Random 128-bit (UUID v4) identifiers. The default source.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomKeys;

impl IdentitySource for RandomKeys {
    fn next_key(&self) -> Key {
        Key(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `prefix` + running counter identifiers, for tests and reproducible dumps.
#[derive(Debug)]
pub struct SequentialKeys {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialKeys {
    /// Start counting from zero under `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Number of identifiers minted so far.
    pub fn minted(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl IdentitySource for SequentialKeys {
    fn next_key(&self) -> Key {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        Key(format!("{}{n}", self.prefix))
    }
}

/// Pull-based, never-ending stream of keys drawn from a source.
pub struct KeyStream<'a> {
    source: &'a dyn IdentitySource,
}

impl<'a> KeyStream<'a> {
    /// Stream keys from `source`, one per `next()` call.
    pub fn new(source: &'a dyn IdentitySource) -> Self {
        Self { source }
    }
}

impl Iterator for KeyStream<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        Some(self.source.next_key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ids.rs"]
mod tests;

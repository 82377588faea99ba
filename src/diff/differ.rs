use similar::{Algorithm, DiffTag, capture_diff_slices};

/// One span of a word-level diff, before identifiers are attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawChange {
    /// Literal text of the span.
    pub value: String,
    /// Present in the current text only.
    pub added: bool,
    /// Present in the previous text only.
    pub removed: bool,
}

impl RawChange {
    fn added(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: true,
            removed: false,
        }
    }

    /// Neither added nor removed.
    pub fn is_unchanged(&self) -> bool {
        !self.added && !self.removed
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into maximal runs of word characters and single non-word characters.
///
/// Concatenating the tokens gives back `text` exactly.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            tokens.push(&text[start..i]);
        }
        tokens.push(&text[i..i + c.len_utf8()]);
    }
    if let Some(start) = word_start {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Word-level diff of `previous` against `current`, removed spans included.
///
/// Adjacent tokens with the same status are merged into one span. A replacement is reported as
/// the removed span followed by the added span.
pub fn diff_words(previous: &str, current: &str) -> Vec<RawChange> {
    let old = tokenize(previous);
    let new = tokenize(current);
    let ops = capture_diff_slices(Algorithm::Myers, &old, &new);

    let mut out: Vec<RawChange> = Vec::with_capacity(ops.len());
    for op in &ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push_span(&mut out, new[new_range].concat(), false, false),
            DiffTag::Insert => push_span(&mut out, new[new_range].concat(), true, false),
            DiffTag::Delete => push_span(&mut out, old[old_range].concat(), false, true),
            DiffTag::Replace => {
                push_span(&mut out, old[old_range].concat(), false, true);
                push_span(&mut out, new[new_range].concat(), true, false);
            }
        }
    }
    out
}

fn push_span(out: &mut Vec<RawChange>, value: String, added: bool, removed: bool) {
    if value.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if last.added == added && last.removed == removed => {
            last.value.push_str(&value);
        }
        _ => out.push(RawChange {
            value,
            added,
            removed,
        }),
    }
}

/// Changes that turn `previous` into `current`, with removed spans already dropped.
///
/// Without a previous step the whole of `current` is one added span, even when it is empty.
/// Concatenating the returned values always reproduces `current`.
pub fn diff_content(previous: Option<&str>, current: &str) -> Vec<RawChange> {
    let Some(previous) = previous else {
        return vec![RawChange::added(current)];
    };

    let mut changes = diff_words(previous, current);
    // Deletions have no visual representation; they simply vanish.
    changes.retain(|c| !c.removed);
    changes
}

#[cfg(test)]
#[path = "../../tests/unit/diff/differ.rs"]
mod tests;

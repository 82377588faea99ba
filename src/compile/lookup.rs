use std::collections::HashMap;

use crate::compile::sequence::{Frame, Sequence};
use crate::foundation::error::{CodewalkError, CodewalkResult};
use crate::foundation::ids::Key;

/// Key→frame resolution table over one [`Sequence`].
///
/// Frames only name their neighbours; this is where a consumer turns those names back into
/// frames.
#[derive(Debug)]
pub struct FrameLookup<'a> {
    frames: &'a [Frame],
    by_key: HashMap<&'a str, usize>,
}

impl<'a> FrameLookup<'a> {
    /// Index every frame of `sequence` by key.
    pub fn new(sequence: &'a Sequence) -> Self {
        let frames = sequence.frames();
        let by_key = frames
            .iter()
            .enumerate()
            .map(|(i, f)| (f.key().as_str(), i))
            .collect();
        Self { frames, by_key }
    }

    /// Frame with `key`, if it belongs to this sequence.
    pub fn get(&self, key: &str) -> Option<&'a Frame> {
        self.by_key.get(key).and_then(|&i| self.frames.get(i))
    }

    /// Frame with `key`, or [`CodewalkError::MissingLinkedFrame`].
    pub fn resolve(&self, key: &Key) -> CodewalkResult<&'a Frame> {
        self.get(key.as_str()).ok_or_else(|| {
            CodewalkError::missing_linked_frame(format!(
                "key '{key}' is not part of this sequence"
            ))
        })
    }

    /// Entry frame of the sequence.
    pub fn first(&self) -> Option<&'a Frame> {
        self.frames.first()
    }

    /// Previous frame of `frame`; `Ok(None)` at the start.
    pub fn prev(&self, frame: &Frame) -> CodewalkResult<Option<&'a Frame>> {
        frame.prev().map(|k| self.resolve(k)).transpose()
    }

    /// Next frame of `frame`; `Ok(None)` at the end.
    pub fn next(&self, frame: &Frame) -> CodewalkResult<Option<&'a Frame>> {
        frame.next().map(|k| self.resolve(k)).transpose()
    }
}

pub(crate) fn verify_links(sequence: &Sequence) -> CodewalkResult<()> {
    let lookup = FrameLookup::new(sequence);
    let frames = sequence.frames();

    if lookup.by_key.len() != frames.len() {
        return Err(CodewalkError::missing_linked_frame(
            "frame keys are not unique within the sequence",
        ));
    }

    for (i, frame) in frames.iter().enumerate() {
        if frame.index() != i {
            return Err(CodewalkError::missing_linked_frame(format!(
                "frame at position {i} reports index {}",
                frame.index()
            )));
        }

        match lookup.prev(frame)? {
            None if i == 0 => {}
            Some(p) if i > 0 && p.index() == i - 1 && p.next() == Some(frame.key()) => {}
            _ => {
                return Err(CodewalkError::missing_linked_frame(format!(
                    "frame {i} has a broken prev link"
                )));
            }
        }

        match lookup.next(frame)? {
            None if i + 1 == frames.len() => {}
            Some(n) if n.index() == i + 1 && n.prev() == Some(frame.key()) => {}
            _ => {
                return Err(CodewalkError::missing_linked_frame(format!(
                    "frame {i} has a broken next link"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compile/lookup.rs"]
mod tests;

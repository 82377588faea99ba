use std::fmt;
use std::sync::Arc;

use crate::compile::lookup::{FrameLookup, verify_links};
use crate::compile::transition::{Transition, build_transition};
use crate::diff::differ::diff_content;
use crate::foundation::error::{CodewalkError, CodewalkResult};
use crate::foundation::ids::{IdentitySource, Key, KeyStream, RandomKeys};
use crate::script::model::{Motion, Scene, Script, Step};

/// Compiled, linked, diff-annotated counterpart of one step.
///
/// Neighbours are referenced by key only; resolve them with a [`FrameLookup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub(crate) key: Key,
    pub(crate) index: usize,
    pub(crate) line: String,
    pub(crate) prev: Option<Key>,
    pub(crate) next: Option<Key>,
    pub(crate) transition: Transition,
    pub(crate) motion: Option<Motion>,
}

impl Frame {
    /// Frame identifier.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Zero-based position in the sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Narration line of the step.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Key of the previous frame; `None` for the first frame.
    pub fn prev(&self) -> Option<&Key> {
        self.prev.as_ref()
    }

    /// Key of the next frame; `None` for the last frame.
    pub fn next(&self) -> Option<&Key> {
        self.next.as_ref()
    }

    /// Before/after views of the step's code.
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Step-wide motion hint, copied from the step.
    pub fn motion(&self) -> Option<Motion> {
        self.motion
    }
}

/// Compiled scene: a top-level key plus one frame per step, index-aligned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    pub(crate) key: Key,
    pub(crate) frames: Vec<Frame>,
}

impl Sequence {
    /// Sequence identifier.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Frames in step order. Never empty.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`: an empty scene does not compile.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Build a key→frame table over this sequence.
    pub fn lookup(&self) -> FrameLookup<'_> {
        FrameLookup::new(self)
    }

    /// Check that every `prev`/`next` resolves and points back.
    pub fn verify_links(&self) -> CodewalkResult<()> {
        verify_links(self)
    }
}

fn linked(keys: &[Key], index: usize) -> CodewalkResult<Key> {
    keys.get(index).cloned().ok_or_else(|| {
        CodewalkError::missing_linked_frame(format!("no key minted for frame {index}"))
    })
}

/// Compile `scene` into a linked frame sequence, drawing every key from `keys`.
///
/// Frame keys are minted first, then one key per surviving change (step by step), then the
/// sequence key. Fails with [`CodewalkError::EmptyScene`] when the scene has no steps.
#[tracing::instrument(skip_all, fields(steps = scene.len()))]
pub fn compile_scene(scene: &Scene, keys: &dyn IdentitySource) -> CodewalkResult<Sequence> {
    if scene.is_empty() {
        return Err(CodewalkError::EmptyScene);
    }
    let steps = scene.steps();

    let frame_keys: Vec<Key> = KeyStream::new(keys).take(steps.len()).collect();

    let contents: Vec<String> = steps.iter().map(Step::content_value).collect();
    let transitions: Vec<Transition> = contents
        .iter()
        .enumerate()
        .map(|(i, current)| {
            let previous = i.checked_sub(1).map(|p| contents[p].as_str());
            build_transition(diff_content(previous, current), keys)
        })
        .collect();

    let key = keys.next_key();

    let last = steps.len() - 1;
    let frames = steps
        .iter()
        .zip(transitions)
        .enumerate()
        .map(|(index, (step, transition))| -> CodewalkResult<Frame> {
            let prev = match index {
                0 => None,
                i => Some(linked(&frame_keys, i - 1)?),
            };
            let next = if index < last {
                Some(linked(&frame_keys, index + 1)?)
            } else {
                None
            };

            tracing::debug!(
                index,
                initial = transition.initial.changes().len(),
                animate = transition.animate.changes().len(),
                "compiled frame"
            );

            Ok(Frame {
                key: linked(&frame_keys, index)?,
                index,
                line: step.line.clone(),
                prev,
                next,
                transition,
                motion: step.motion,
            })
        })
        .collect::<CodewalkResult<Vec<_>>>()?;

    let sequence = Sequence { key, frames };
    if cfg!(debug_assertions) {
        sequence.verify_links()?;
    }
    Ok(sequence)
}

/// Compiler session sharing one identity source across every compilation.
///
/// Sequences compiled by the same session never share a key.
#[derive(Clone)]
pub struct SceneCompiler {
    keys: Arc<dyn IdentitySource>,
}

impl Default for SceneCompiler {
    fn default() -> Self {
        Self::new(Arc::new(RandomKeys))
    }
}

impl fmt::Debug for SceneCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneCompiler").finish_non_exhaustive()
    }
}

impl SceneCompiler {
    /// Session drawing keys from `keys`.
    pub fn new(keys: Arc<dyn IdentitySource>) -> Self {
        Self { keys }
    }

    /// The shared identity source.
    pub fn keys(&self) -> &Arc<dyn IdentitySource> {
        &self.keys
    }

    /// Compile one scene.
    pub fn compile(&self, scene: &Scene) -> CodewalkResult<Sequence> {
        compile_scene(scene, self.keys.as_ref())
    }

    /// Compile every scene of `script`, in order, stopping at the first failure.
    #[tracing::instrument(skip_all, fields(scenes = script.len()))]
    pub fn compile_script(&self, script: &Script) -> CodewalkResult<Vec<Sequence>> {
        script
            .scenes()
            .iter()
            .enumerate()
            .map(|(i, scene)| {
                self.compile(scene).inspect_err(|e| {
                    tracing::warn!(scene = i, error = %e, "scene failed to compile");
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/sequence.rs"]
mod tests;

/// How a renderer should bring new code on screen.
///
/// The compiler only carries this hint through to frames; it never interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    /// Show the new code at once.
    Instant,
    /// Type the new code in character by character.
    Typewriter,
}

/// One block of code shown during a step.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Block {
    /// Bare code text.
    Plain(String),
    /// Code text with a per-block motion hint.
    Rich {
        /// Code text.
        content: String,
        /// Optional motion override for this block.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        motion: Option<Motion>,
    },
}

impl Block {
    /// Code text of the block, whichever form it was written in.
    pub fn content(&self) -> &str {
        match self {
            Block::Plain(s) => s,
            Block::Rich { content, .. } => content,
        }
    }

    /// Per-block motion hint, if any.
    pub fn motion(&self) -> Option<Motion> {
        match self {
            Block::Plain(_) => None,
            Block::Rich { motion, .. } => *motion,
        }
    }
}

impl From<&str> for Block {
    fn from(s: &str) -> Self {
        Block::Plain(s.to_string())
    }
}

impl From<String> for Block {
    fn from(s: String) -> Self {
        Block::Plain(s)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One narrated beat: a line of narration plus the code shown while it plays.
pub struct Step {
    /// Narration text.
    pub line: String,
    /// Code blocks, joined with `\n` to form the step's content.
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Optional step-wide motion hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<Motion>,
}

impl Step {
    /// Build a step from a narration line and its blocks.
    pub fn new<B: Into<Block>>(
        line: impl Into<String>,
        blocks: impl IntoIterator<Item = B>,
    ) -> Self {
        Self {
            line: line.into(),
            blocks: blocks.into_iter().map(Into::into).collect(),
            motion: None,
        }
    }

    /// Attach a step-wide motion hint.
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    /// The step's content value: every block joined by `\n`, verbatim.
    ///
    /// Empty blocks are kept, so `["", "a", ""]` yields `"\na\n"`; no blocks yields `""`.
    pub fn content_value(&self) -> String {
        self.blocks
            .iter()
            .map(Block::content)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Ordered steps forming one presentation unit. Order is never changed after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Scene {
    steps: Vec<Step>,
}

impl Scene {
    /// Wrap an ordered list of steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Steps in presentation order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` when the scene has no steps (and therefore cannot be compiled).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl From<Vec<Step>> for Scene {
    fn from(steps: Vec<Step>) -> Self {
        Self::new(steps)
    }
}

impl FromIterator<Step> for Scene {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A whole presentation: an ordered list of scenes.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Script {
    scenes: Vec<Scene>,
}

impl Script {
    /// Wrap an ordered list of scenes.
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }

    /// Scenes in presentation order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// `true` when the script has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl From<Vec<Scene>> for Script {
    fn from(scenes: Vec<Scene>) -> Self {
        Self::new(scenes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/model.rs"]
mod tests;

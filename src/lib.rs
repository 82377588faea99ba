//! codewalk compiles narrated code walkthroughs into animation-ready frames.
//!
//! A [`Scene`] is an ordered list of [`Step`]s, each pairing a narration line with the code shown
//! while it plays. The compiler turns a scene into a [`Sequence`] of [`Frame`]s, one per step,
//! each carrying a word-level [`Transition`] from the previous step's code to its own.
//!
//! # Pipeline overview
//!
//! 1. **Mint**: one key per step is drawn from an [`IdentitySource`] up front.
//! 2. **Diff**: each step's content is diffed word by word against the previous step; removed
//!    spans are dropped.
//! 3. **Transition**: surviving spans get fresh keys; `initial` is the unchanged subset of the
//!    very same records that make up `animate`.
//! 4. **Link**: frames reference their neighbours by key; [`FrameLookup`] resolves them.
//!
//! Compilation is pure apart from key minting: no IO, no timing, no rendering. Loading scripts
//! from JSON ([`Script::from_path`]) is a separate boundary layer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compile;
mod diff;
mod foundation;
mod script;

pub use compile::lookup::FrameLookup;
pub use compile::sequence::{Frame, SceneCompiler, Sequence, compile_scene};
pub use compile::transition::{Change, Diff, Transition, build_transition};
pub use diff::differ::{RawChange, diff_content, diff_words, tokenize};
pub use foundation::error::{CodewalkError, CodewalkResult};
pub use foundation::ids::{IdentitySource, Key, KeyStream, RandomKeys, SequentialKeys};
pub use script::model::{Block, Motion, Scene, Script, Step};

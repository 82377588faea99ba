use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{CodewalkError, CodewalkResult};
use crate::script::model::{Scene, Script};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

pub(crate) fn validate_script(script: &Script) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();

    if script.is_empty() {
        errors.push(SchemaError::at(&[], "script must contain at least one scene"));
    }
    for (i, scene) in script.scenes().iter().enumerate() {
        validate_scene_at(scene, &[SchemaPathElem::Index(i)], &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

pub(crate) fn validate_scene(scene: &Scene) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();
    validate_scene_at(scene, &[], &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

fn validate_scene_at(scene: &Scene, path: &[SchemaPathElem], errors: &mut Vec<SchemaError>) {
    if scene.is_empty() {
        errors.push(SchemaError::at(path, "scene must contain at least one step"));
    }
    for (i, step) in scene.steps().iter().enumerate() {
        if step.blocks.is_empty() {
            let mut p = path.to_vec();
            p.push(SchemaPathElem::Index(i));
            p.push(SchemaPathElem::Field("blocks"));
            errors.push(SchemaError::at(&p, "step must contain at least one block"));
        }
    }
}

fn open(path: &Path, what: &str) -> CodewalkResult<BufReader<File>> {
    let f = File::open(path).map_err(|e| {
        CodewalkError::validation(format!("open {what} JSON '{}': {e}", path.display()))
    })?;
    Ok(BufReader::new(f))
}

impl Script {
    /// Parse a script from a JSON reader. The result is not validated yet.
    pub fn from_reader<R: std::io::Read>(r: R) -> CodewalkResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CodewalkError::serde(format!("parse script JSON: {e}")))
    }

    /// Parse a script from a JSON string.
    pub fn from_json_str(s: &str) -> CodewalkResult<Self> {
        serde_json::from_str(s).map_err(|e| CodewalkError::serde(format!("parse script JSON: {e}")))
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CodewalkResult<Self> {
        Self::from_reader(open(path.as_ref(), "script")?)
    }

    /// Check the script shape, reporting every problem with its location.
    pub fn validate(&self) -> CodewalkResult<()> {
        validate_script(self)
            .map_err(|e| CodewalkError::validation(format!("script validation failed: {e}")))
    }
}

impl Scene {
    /// Parse a single scene (a JSON array of steps) from a string.
    pub fn from_json_str(s: &str) -> CodewalkResult<Self> {
        serde_json::from_str(s).map_err(|e| CodewalkError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a single scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CodewalkResult<Self> {
        serde_json::from_reader(open(path.as_ref(), "scene")?)
            .map_err(|e| CodewalkError::serde(format!("parse scene JSON: {e}")))
    }

    /// Check the scene shape, reporting every problem with its location.
    pub fn validate(&self) -> CodewalkResult<()> {
        validate_scene(self)
            .map_err(|e| CodewalkError::validation(format!("scene validation failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/load.rs"]
mod tests;

//! Scripted input sessions.
//!
//! A script is a TOML list of pointer, keyboard, and shape events replayed
//! against a [`HostController`], standing in for a live UI.
//!
//! ```toml
//! [[event]]
//! type = "pointer-down"
//! x = 10.0
//! y = 10.0
//!
//! [[event]]
//! type = "pointer-move"
//! x = 50.0
//! y = 50.0
//!
//! [[event]]
//! type = "pointer-up"
//!
//! [[event]]
//! type = "add-shape"
//! kind = "square"
//! ```

use crate::host::HostController;
use crate::input::Key;
use crate::shapes::ShapeKind;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One input event. Pointer coordinates are in canvas viewport space.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave,
    AddShape { kind: ShapeKind },
    SelectAt { x: f64, y: f64 },
    /// DOM-style key name such as `"ArrowLeft"`
    Key { key: String },
    RemoveShape,
}

/// An ordered list of events.
#[derive(Debug, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

/// What happened while replaying a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptReport {
    /// Events processed
    pub events: usize,
    /// Snapshots emitted by finished strokes
    pub snapshots: usize,
    /// Shape events dropped because no image had been uploaded
    pub skipped: usize,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse event script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Invalid script {}", path.display()))
    }

    /// Replays every event in order against `host`.
    pub fn run(&self, host: &mut HostController) -> ScriptReport {
        let mut report = ScriptReport::default();

        for event in &self.events {
            report.events += 1;
            log::trace!("Replaying {:?}", event);

            match event {
                ScriptEvent::PointerDown { x, y } => host.on_pointer_down(*x, *y),
                ScriptEvent::PointerMove { x, y } => host.on_pointer_move(*x, *y),
                ScriptEvent::PointerUp => {
                    if host.on_pointer_up().is_some() {
                        report.snapshots += 1;
                    }
                }
                ScriptEvent::PointerLeave => {
                    if host.on_pointer_leave().is_some() {
                        report.snapshots += 1;
                    }
                }
                ScriptEvent::AddShape { .. }
                | ScriptEvent::SelectAt { .. }
                | ScriptEvent::Key { .. }
                | ScriptEvent::RemoveShape => {
                    let Some(editor) = host.shapes_mut() else {
                        log::debug!("No image uploaded; skipping {:?}", event);
                        report.skipped += 1;
                        continue;
                    };
                    match event {
                        ScriptEvent::AddShape { kind } => {
                            editor.add(*kind);
                        }
                        ScriptEvent::SelectAt { x, y } => {
                            editor.select_at(*x, *y);
                        }
                        ScriptEvent::Key { key } => {
                            editor.on_key(Key::from_name(key));
                        }
                        _ => {
                            editor.remove();
                        }
                    }
                }
            }
        }

        report
    }
}

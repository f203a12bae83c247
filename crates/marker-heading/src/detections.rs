//! Recorded detector output.
//!
//! A detection file is JSON holding either a single marker map
//! (`{"0": [[x, y], [x, y], [x, y], [x, y]], ...}`) or an array of them, one
//! per frame.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::MarkerMap;

#[derive(thiserror::Error, Debug)]
pub enum DetectionIoError {
    #[error("failed to read detections: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid detections JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Marker maps of consecutive frames.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DetectionLog {
    frames: Vec<MarkerMap>,
}

impl DetectionLog {
    pub fn new(frames: Vec<MarkerMap>) -> Self {
        Self { frames }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DetectionIoError> {
        // integer map keys do not survive `#[serde(untagged)]` buffering
        let frames = if raw.trim_start().starts_with('[') {
            serde_json::from_str(raw)?
        } else {
            vec![serde_json::from_str::<MarkerMap>(raw)?]
        };
        Ok(Self { frames })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DetectionIoError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let log = Self::from_json_str(&raw)?;
        log::debug!(
            "loaded {} frame(s) from {}",
            log.frames.len(),
            path.display()
        );
        Ok(log)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DetectionIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn frames(&self) -> &[MarkerMap] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn into_frames(self) -> Vec<MarkerMap> {
        self.frames
    }
}

use std::fs;
use std::path::Path;

use egui::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{TourError, TourResult};

/// One stop in the tour: a screen region and the text explaining it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub target_rect: Rect,
    pub text: String,
}

impl PointOfInterest {
    pub fn new(target_rect: Rect, text: impl Into<String>) -> Self {
        Self {
            target_rect,
            text: text.into(),
        }
    }

    fn check(&self, index: usize) -> TourResult<()> {
        let rect = self.target_rect;
        if !(rect.min.x.is_finite() && rect.min.y.is_finite() && rect.max.x.is_finite() && rect.max.y.is_finite()) {
            return Err(TourError::InvalidNode {
                index,
                reason: format!("target rect {:?} is not finite", rect),
            });
        }
        if rect.width() < 0.0 || rect.height() < 0.0 {
            return Err(TourError::InvalidNode {
                index,
                reason: format!("target rect {:?} has a negative size", rect),
            });
        }
        Ok(())
    }
}

/// An ordered list of points of interest, as stored in a tour file.
///
/// ```json
/// { "nodes": [
///     { "target_rect": { "min": { "x": 10, "y": 10 }, "max": { "x": 90, "y": 40 } },
///       "text": "Open a document" }
/// ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TourDefinition {
    pub nodes: Vec<PointOfInterest>,
}

impl TourDefinition {
    pub fn new(nodes: Vec<PointOfInterest>) -> Self {
        Self { nodes }
    }

    /// Rejects empty tours and nodes whose rect cannot be highlighted
    pub fn validate(&self) -> TourResult<()> {
        if self.nodes.is_empty() {
            return Err(TourError::EmptySequence);
        }
        self.nodes
            .iter()
            .enumerate()
            .try_for_each(|(index, node)| node.check(index))
    }

    pub fn from_json_str(json: &str) -> TourResult<Self> {
        let definition: Self = serde_json::from_str(json)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn load(path: impl AsRef<Path>) -> TourResult<Self> {
        let path = path.as_ref();
        log::info!("Loading tour definition from {}", path.display());
        let json = fs::read_to_string(path)?;
        let definition = Self::from_json_str(&json)?;
        log::debug!("Loaded {} points of interest", definition.nodes.len());
        Ok(definition)
    }

    pub fn into_nodes(self) -> Vec<PointOfInterest> {
        self.nodes
    }
}

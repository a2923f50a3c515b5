//! Panel placement: keeps the explanatory panel clear of the highlight.

use egui::{Rect, pos2};
use serde::{Deserialize, Serialize};

/// Which screen edge the explanatory panel is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelPlacement {
    Top,
    #[default]
    Bottom,
}

impl PanelPlacement {
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Flips `current` when the new highlight would cover the panel.
///
/// Must be called with the rect the highlight is moving to, before the
/// panel is laid out again, so both can animate together.
pub fn resolve_placement(new_highlight: Rect, panel: Rect, current: PanelPlacement) -> PanelPlacement {
    if new_highlight.intersects(panel) {
        current.opposite()
    } else {
        current
    }
}

/// Computes the panel frame for each placement inside the host screen.
///
/// The panel spans the screen width minus the margin and keeps a fixed
/// height; a screen shorter than the panel clamps the panel to the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub screen: Rect,
    pub height: f32,
    pub margin: f32,
}

impl PanelLayout {
    pub fn new(screen: Rect, height: f32, margin: f32) -> Self {
        Self { screen, height, margin }
    }

    pub fn frame(&self, placement: PanelPlacement) -> Rect {
        let inner = self.screen.shrink(self.margin);
        let height = self.height.min(inner.height().max(0.0));
        match placement {
            PanelPlacement::Top => Rect::from_min_max(inner.min, pos2(inner.max.x, inner.min.y + height)),
            PanelPlacement::Bottom => Rect::from_min_max(pos2(inner.min.x, inner.max.y - height), inner.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn screen() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    #[test]
    fn test_overlap_flips_bottom_to_top() {
        let panel = PanelLayout::new(screen(), 100.0, 10.0).frame(PanelPlacement::Bottom);
        let highlight = Rect::from_min_size(pos2(100.0, 520.0), vec2(50.0, 50.0));
        assert_eq!(resolve_placement(highlight, panel, PanelPlacement::Bottom), PanelPlacement::Top);
    }

    #[test]
    fn test_disjoint_keeps_placement() {
        let panel = PanelLayout::new(screen(), 100.0, 10.0).frame(PanelPlacement::Bottom);
        let highlight = Rect::from_min_size(pos2(100.0, 100.0), vec2(50.0, 50.0));
        assert_eq!(resolve_placement(highlight, panel, PanelPlacement::Bottom), PanelPlacement::Bottom);
        assert_eq!(resolve_placement(highlight, panel, PanelPlacement::Top), PanelPlacement::Top);
    }

    #[test]
    fn test_overlap_flips_top_to_bottom() {
        let panel = PanelLayout::new(screen(), 100.0, 10.0).frame(PanelPlacement::Top);
        let highlight = Rect::from_min_size(pos2(0.0, 0.0), vec2(40.0, 40.0));
        assert_eq!(resolve_placement(highlight, panel, PanelPlacement::Top), PanelPlacement::Bottom);
    }

    #[test]
    fn test_touching_edge_counts_as_overlap() {
        let panel = Rect::from_min_max(pos2(10.0, 0.0), pos2(100.0, 50.0));
        let highlight = Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 50.0));
        assert_eq!(resolve_placement(highlight, panel, PanelPlacement::Bottom), PanelPlacement::Top);
    }

    #[test]
    fn test_panel_frames() {
        let layout = PanelLayout::new(screen(), 100.0, 10.0);
        assert_eq!(
            layout.frame(PanelPlacement::Top),
            Rect::from_min_max(pos2(10.0, 10.0), pos2(790.0, 110.0))
        );
        assert_eq!(
            layout.frame(PanelPlacement::Bottom),
            Rect::from_min_max(pos2(10.0, 490.0), pos2(790.0, 590.0))
        );
    }

    #[test]
    fn test_panel_clamped_to_short_screen() {
        let short = Rect::from_min_size(pos2(0.0, 0.0), vec2(300.0, 60.0));
        let frame = PanelLayout::new(short, 100.0, 10.0).frame(PanelPlacement::Top);
        assert_eq!(frame.height(), 40.0);
    }
}

use egui::{Color32, Painter, Rect, Stroke, Vec2};

use crate::surface::HighlightSurface;

const DIM_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 170);
const OUTLINE_COLOR: Color32 = Color32::from_rgb(255, 214, 102);
const OUTLINE_WIDTH: f32 = 2.0;
const CORNER_RADIUS: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpotlightState {
    Hidden,
    Visible,
    Disappearing,
}

/// egui highlight: dims the whole screen except an animated cut-out.
///
/// The host sets the clock with [`AnimatedSpotlight::set_clock`] each frame
/// before driving the tour, so commands know when their animation starts.
#[derive(Debug, Clone)]
pub struct AnimatedSpotlight {
    padding: f32,
    duration: f64,
    now: f64,
    from: Rect,
    to: Rect,
    started_at: f64,
    state: SpotlightState,
}

impl AnimatedSpotlight {
    pub fn new(padding: f32, duration: f64) -> Self {
        Self {
            padding,
            duration,
            now: 0.0,
            from: Rect::NOTHING,
            to: Rect::NOTHING,
            started_at: 0.0,
            state: SpotlightState::Hidden,
        }
    }

    pub fn set_clock(&mut self, now: f64) {
        self.now = now;
    }

    /// True while there is anything to paint
    pub fn is_visible(&self, now: f64) -> bool {
        match self.state {
            SpotlightState::Hidden => false,
            SpotlightState::Visible => true,
            SpotlightState::Disappearing => self.progress(now) < 1.0,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.state != SpotlightState::Hidden && self.progress(now) < 1.0
    }

    /// The cut-out rect at time `now`
    pub fn current_rect(&self, now: f64) -> Rect {
        let t = ease(self.progress(now));
        Rect::from_min_max(
            self.from.min + (self.to.min - self.from.min) * t,
            self.from.max + (self.to.max - self.from.max) * t,
        )
    }

    /// Paint the dimmed overlay with the cut-out into `screen`
    pub fn paint(&self, painter: &Painter, screen: Rect, now: f64) {
        if !self.is_visible(now) {
            return;
        }

        let fade = match self.state {
            SpotlightState::Disappearing => 1.0 - ease(self.progress(now)),
            _ => 1.0,
        };
        let dim = DIM_COLOR.gamma_multiply(fade);
        let hole = self.current_rect(now).intersect(screen);

        // Four bands around the hole
        let bands = [
            Rect::from_min_max(screen.min, egui::pos2(screen.max.x, hole.min.y)),
            Rect::from_min_max(egui::pos2(screen.min.x, hole.max.y), screen.max),
            Rect::from_min_max(egui::pos2(screen.min.x, hole.min.y), egui::pos2(hole.min.x, hole.max.y)),
            Rect::from_min_max(egui::pos2(hole.max.x, hole.min.y), egui::pos2(screen.max.x, hole.max.y)),
        ];
        for band in bands {
            if band.is_positive() {
                painter.rect_filled(band, 0.0, dim);
            }
        }

        if hole.is_positive() {
            painter.rect_stroke(
                hole,
                CORNER_RADIUS,
                Stroke::new(OUTLINE_WIDTH, OUTLINE_COLOR.gamma_multiply(fade)),
            );
        }
    }

    fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32
    }

    fn animate(&mut self, from: Rect, to: Rect, state: SpotlightState) {
        self.from = from;
        self.to = to;
        self.started_at = self.now;
        self.state = state;
    }

    fn occupied(&self, target: Rect) -> Rect {
        target.expand(self.padding)
    }
}

impl HighlightSurface for AnimatedSpotlight {
    fn appear_at(&mut self, target: Rect) -> Rect {
        let occupied = self.occupied(target);
        // grow out of the target's center
        let seed = Rect::from_center_size(occupied.center(), Vec2::ZERO);
        self.animate(seed, occupied, SpotlightState::Visible);
        occupied
    }

    fn move_to(&mut self, target: Rect) -> Rect {
        let occupied = self.occupied(target);
        let from = match self.state {
            SpotlightState::Hidden => occupied,
            _ => self.current_rect(self.now),
        };
        self.animate(from, occupied, SpotlightState::Visible);
        occupied
    }

    fn disappear_from(&mut self, target: Rect) -> Rect {
        let occupied = self.occupied(target);
        let from = match self.state {
            SpotlightState::Hidden => occupied,
            _ => self.current_rect(self.now),
        };
        let collapsed = Rect::from_center_size(occupied.center(), Vec2::ZERO);
        self.animate(from, collapsed, SpotlightState::Disappearing);
        occupied
    }

    fn hide(&mut self) {
        self.state = SpotlightState::Hidden;
    }
}

/// Smoothstep
fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

use std::sync::Arc;
use std::time::Duration;

use egui::{Rect, pos2};
use parking_lot::Mutex;

use crate::action::Affordance;
use crate::config::TourConfig;
use crate::error::TourResult;
use crate::node::TourDefinition;
use crate::observer::{ObserverHandle, ProgressEvent, ProgressLog};
use crate::panels::{InfoPanelView, host_screen, info_panel};
use crate::sequencer::TourSequencer;
use crate::spotlight::AnimatedSpotlight;

/// Demo host: a mock application screen with a guided tour on top.
pub struct SpotlightApp {
    tour: TourSequencer<AnimatedSpotlight>,
    progress: Arc<Mutex<ProgressLog>>,
    // Loaded from disk; replaces the widget-derived tour when present
    definition: Option<TourDefinition>,
    pending_start: bool,
}

impl std::fmt::Debug for SpotlightApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotlightApp")
            .field("phase", &self.tour.phase())
            .field("pending_start", &self.pending_start)
            .finish()
    }
}

impl SpotlightApp {
    /// Called once before the first frame.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: TourConfig,
        definition: Option<TourDefinition>,
    ) -> TourResult<Self> {
        let spotlight = AnimatedSpotlight::new(config.spotlight_padding, config.transition_animation_duration);
        let screen = cc.egui_ctx.screen_rect();
        let mut tour = TourSequencer::new(spotlight, config, screen)?;

        let progress = Arc::new(Mutex::new(ProgressLog::new()));
        tour.set_observer(ObserverHandle::new(&progress));

        Ok(Self {
            tour,
            progress,
            definition,
            pending_start: true,
        })
    }

    fn status_text(&self) -> String {
        match self.progress.lock().last() {
            Some(ProgressEvent::Advanced { position, total }) => format!("Tour: step {} of {}", position, total),
            Some(ProgressEvent::Dismissed) => "Tour finished".to_owned(),
            None => "Tour not started".to_owned(),
        }
    }

    fn restart(&mut self) {
        self.progress.lock().clear();
        self.pending_start = true;
    }
}

impl eframe::App for SpotlightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|input| input.time);
        self.tour.surface_mut().set_clock(now);
        self.tour.set_screen(ctx.screen_rect());
        self.tour.tick(now);

        let controls = egui::TopBottomPanel::bottom("tour_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_text());
                if self.tour.is_timer_active() {
                    ui.label(egui::RichText::new("(auto)").weak());
                }
                if ui.button("Restart tour").clicked() {
                    self.restart();
                }
            });
        });

        let targets = host_screen(ctx);

        if self.pending_start {
            self.pending_start = false;
            let nodes = match &self.definition {
                Some(definition) => definition.nodes.clone(),
                None => targets,
            };
            if let Err(err) = self.tour.on_become_visible(nodes, now) {
                log::error!("Could not start tour: {}", err);
            }
        }

        let screen = ctx.screen_rect();
        let mut pressed = None;

        if self.tour.surface().is_visible(now) {
            let overlay = egui::Area::new(egui::Id::new("spotlight_overlay"))
                .order(egui::Order::Foreground)
                .fixed_pos(screen.min)
                .show(ctx, |ui| {
                    let region = tap_region(screen, controls.response.rect);
                    let response = ui.allocate_rect(region, egui::Sense::click());
                    self.tour.surface().paint(ui.painter(), screen, now);
                    response
                });

            if let Some(node) = self.tour.current_node() {
                let view = InfoPanelView {
                    frame: self.tour.panel_frame(),
                    text: &node.text,
                    position: self.tour.current_index().map_or(0, |index| index + 1),
                    total: self.tour.node_count(),
                    animation_duration: self.tour.config().transition_animation_duration as f32,
                };
                pressed = info_panel(ctx, &view);
            }

            // The panel sits on a higher layer, so a click that reaches the
            // overlay was not on the panel.
            if pressed.is_none() && overlay.inner.clicked() && !self.tour.is_dismissed() {
                pressed = Some(Affordance::Tap);
            }
        }

        if let Some(affordance) = pressed {
            log::debug!("Panel input: {:?}", affordance);
            self.tour.handle_action(affordance.into());
        }

        if self.tour.surface().is_animating(now) {
            ctx.request_repaint();
        } else if let Some(remaining) = self.tour.time_until_next_tick(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(remaining));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.tour.on_will_hide();
    }
}

/// Part of the screen where a click on the dimmed overlay counts as a tap.
///
/// Stops at the top of the controls strip so its buttons stay reachable
/// while the overlay is up.
fn tap_region(screen: Rect, controls: Rect) -> Rect {
    let bottom = controls.min.y.clamp(screen.min.y, screen.max.y);
    Rect::from_min_max(screen.min, pos2(screen.max.x, bottom))
}

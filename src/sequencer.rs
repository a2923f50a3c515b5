//! Drives a tour from one point of interest to the next.
//!
//! The `TourSequencer` owns the tour state for one run at a time: the
//! ordered nodes, the current position, the auto-advance timer and the
//! panel placement. It issues one highlight command per step and tells the
//! progress observer about every step and about the end of the tour.
//!
//! # State machine
//!
//! - `NotStarted` → `Showing(0)` via `start`
//! - `Showing(i)` → `Showing(i + 1)` via `advance` while `i < count - 1`
//! - `Showing(i)` → `Showing(i - 1)` via `retreat` while `i > 0`
//! - `Showing(count - 1)` → `Dismissed` via `advance`
//! - `Showing(0)` → `Dismissed` via `retreat`
//! - `Showing(i)` → `Dismissed` via `dismiss`
//!
//! `Dismissed` is terminal for the run. Operations arriving afterwards
//! (a late timer tick, a queued click) are silently ignored.
//!
//! # Example
//!
//! ```rust,no_run
//! use spotlight_tour::{PointOfInterest, TourAction, TourConfig, TourSequencer};
//! # fn demo(surface: impl spotlight_tour::HighlightSurface, screen: egui::Rect, nodes: Vec<PointOfInterest>) -> spotlight_tour::TourResult<()> {
//! let mut tour = TourSequencer::new(surface, TourConfig::default(), screen)?;
//! tour.start(nodes, 0.0)?;
//!
//! // every frame
//! tour.tick(1.0);
//!
//! // on a click on "Next"
//! tour.handle_action(TourAction::Advance);
//! # Ok(())
//! # }
//! ```
use egui::Rect;
use log::{debug, info, trace};
use uuid::Uuid;

use crate::action::TourAction;
use crate::config::TourConfig;
use crate::error::TourResult;
use crate::geometry::{PanelLayout, PanelPlacement, resolve_placement};
use crate::node::{PointOfInterest, TourDefinition};
use crate::observer::ObserverHandle;
use crate::surface::{HighlightSurface, TransitionKind};
use crate::timer::AutoAdvanceTimer;

/// Where the sequencer is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourPhase {
    #[default]
    NotStarted,
    Showing(usize),
    Dismissed,
}

#[derive(Debug)]
pub struct TourSequencer<S> {
    surface: S,
    config: TourConfig,
    layout: PanelLayout,
    placement: PanelPlacement,
    nodes: Vec<PointOfInterest>,
    phase: TourPhase,
    timer: Option<AutoAdvanceTimer>,
    observer: ObserverHandle,
    highlight: Option<Rect>,
    last_transition: Option<TransitionKind>,
    run_id: Option<Uuid>,
}

impl<S: HighlightSurface> TourSequencer<S> {
    /// Creates an idle sequencer. Fails if `config` does not validate.
    pub fn new(surface: S, config: TourConfig, screen: Rect) -> TourResult<Self> {
        config.validate()?;
        let layout = PanelLayout::new(screen, config.panel_height, config.panel_margin);
        Ok(Self {
            surface,
            config,
            layout,
            placement: PanelPlacement::default(),
            nodes: Vec::new(),
            phase: TourPhase::NotStarted,
            timer: None,
            observer: ObserverHandle::detached(),
            highlight: None,
            last_transition: None,
            run_id: None,
        })
    }

    pub fn set_observer(&mut self, observer: ObserverHandle) {
        self.observer = observer;
    }

    /// Updates the host screen the panel is laid out in.
    ///
    /// The placement itself is only reconsidered on the next step.
    pub fn set_screen(&mut self, screen: Rect) {
        self.layout.screen = screen;
    }

    /// Begins a fresh run over `nodes` and shows the first one.
    ///
    /// The auto-advance timer is armed right after the first step. Starting
    /// while another run is showing replaces it without a dismissal
    /// notification.
    ///
    /// # Errors
    ///
    /// `EmptySequence` if `nodes` is empty, `InvalidNode` if a target rect
    /// cannot be highlighted. The sequencer is left untouched on error.
    pub fn start(&mut self, nodes: Vec<PointOfInterest>, now: f64) -> TourResult<()> {
        let definition = TourDefinition::new(nodes);
        definition.validate()?;

        if let TourPhase::Showing(index) = self.phase {
            debug!("Replacing run {:?} at node {}", self.run_id, index);
        }

        let run_id = Uuid::new_v4();
        info!("Starting tour run {} with {} points of interest", run_id, definition.nodes.len());

        self.cancel_timer();
        self.run_id = Some(run_id);
        self.nodes = definition.into_nodes();
        self.phase = TourPhase::NotStarted;
        self.placement = PanelPlacement::default();
        self.highlight = None;
        self.last_transition = None;

        self.advance();

        let mut timer = AutoAdvanceTimer::new(self.config.auto_advance_delay);
        timer.start(now);
        self.timer = Some(timer);
        Ok(())
    }

    /// Steps to the next node, or dismisses the tour from the last one.
    pub fn advance(&mut self) {
        match self.phase {
            TourPhase::Dismissed => trace!("advance ignored: tour already dismissed"),
            TourPhase::NotStarted if self.nodes.is_empty() => trace!("advance ignored: no tour started"),
            TourPhase::NotStarted => self.show(0),
            TourPhase::Showing(index) if index + 1 == self.nodes.len() => self.dismiss(),
            TourPhase::Showing(index) => self.show(index + 1),
        }
    }

    /// Steps back to the previous node, or dismisses the tour from the first one.
    pub fn retreat(&mut self) {
        match self.phase {
            TourPhase::Dismissed => trace!("retreat ignored: tour already dismissed"),
            TourPhase::NotStarted => trace!("retreat ignored: no tour started"),
            TourPhase::Showing(0) => self.dismiss(),
            TourPhase::Showing(index) => self.show(index - 1),
        }
    }

    /// Ends the tour: stops the timer, plays the exit transition away from
    /// the current node and notifies the observer. Idempotent.
    ///
    /// The exit transition goes through the same panel placement step as
    /// every other transition.
    pub fn dismiss(&mut self) {
        let index = match self.phase {
            TourPhase::Showing(index) => index,
            TourPhase::NotStarted => {
                trace!("dismiss ignored: no tour started");
                return;
            }
            TourPhase::Dismissed => {
                trace!("dismiss ignored: tour already dismissed");
                return;
            }
        };

        self.cancel_timer();
        let target = self.nodes[index].target_rect;
        let occupied = TransitionKind::Exit.apply(&mut self.surface, target);
        self.place_panel(occupied);
        self.highlight = Some(occupied);
        self.last_transition = Some(TransitionKind::Exit);
        self.phase = TourPhase::Dismissed;

        info!("Tour run {:?} dismissed at node {} of {}", self.run_id, index + 1, self.nodes.len());
        self.observer.notify(|observer| observer.on_dismiss());
    }

    /// Entry point for anything the user did.
    ///
    /// Any user action stops auto-advance for the rest of the run before
    /// the action itself is carried out.
    pub fn handle_action(&mut self, action: TourAction) {
        debug!("User action {:?}", action);
        self.cancel_timer();
        match action {
            TourAction::Advance => self.advance(),
            TourAction::Retreat => self.retreat(),
            TourAction::Dismiss => self.dismiss(),
        }
    }

    /// Feeds the host clock to the auto-advance timer; advances on expiry.
    pub fn tick(&mut self, now: f64) {
        let fired = self.timer.as_mut().is_some_and(|timer| timer.poll(now));
        if fired {
            debug!("Auto-advance timer fired at {:.3}", now);
            self.advance();
        }
    }

    /// Host lifecycle: the screen became visible.
    pub fn on_become_visible(&mut self, nodes: Vec<PointOfInterest>, now: f64) -> TourResult<()> {
        self.start(nodes, now)
    }

    /// Host lifecycle: the screen is about to go away.
    ///
    /// Stops the timer and hides the highlight. The run ends without an
    /// `on_dismiss` notification.
    pub fn on_will_hide(&mut self) {
        self.cancel_timer();
        self.surface.hide();
        if self.phase != TourPhase::Dismissed {
            info!("Tour run {:?} hidden by host", self.run_id);
            self.phase = TourPhase::Dismissed;
        }
    }

    fn show(&mut self, index: usize) {
        let count = self.nodes.len();
        let target = self.nodes[index].target_rect;
        let kind = TransitionKind::for_index(index, count);
        let occupied = kind.apply(&mut self.surface, target);

        self.place_panel(occupied);

        self.phase = TourPhase::Showing(index);
        self.highlight = Some(occupied);
        self.last_transition = Some(kind);
        debug!("{:?} to node {} of {}", kind, index + 1, count);

        self.observer.notify(|observer| observer.on_advance(index + 1, count));
    }

    fn place_panel(&mut self, occupied: Rect) {
        let panel = self.layout.frame(self.placement);
        let placement = resolve_placement(occupied, panel, self.placement);
        if placement != self.placement {
            debug!("Highlight {:?} overlaps panel {:?}, moving panel to {:?}", occupied, panel, placement);
        }
        self.placement = placement;
    }

    fn cancel_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl<S> TourSequencer<S> {
    pub fn phase(&self) -> TourPhase {
        self.phase
    }

    pub fn is_dismissed(&self) -> bool {
        self.phase == TourPhase::Dismissed
    }

    /// Index of the node on screen, if any
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            TourPhase::Showing(index) => Some(index),
            _ => None,
        }
    }

    pub fn current_node(&self) -> Option<&PointOfInterest> {
        self.current_index().and_then(|index| self.nodes.get(index))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn placement(&self) -> PanelPlacement {
        self.placement
    }

    /// Where the panel sits for the current placement
    pub fn panel_frame(&self) -> Rect {
        self.layout.frame(self.placement)
    }

    /// Rect the highlight occupied after the last command
    pub fn highlight_rect(&self) -> Option<Rect> {
        self.highlight
    }

    pub fn last_transition(&self) -> Option<TransitionKind> {
        self.last_transition
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer.as_ref().is_some_and(AutoAdvanceTimer::is_active)
    }

    /// Seconds until auto-advance fires, if it is still running
    pub fn time_until_next_tick(&self, now: f64) -> Option<f64> {
        self.timer.as_ref().and_then(|timer| timer.remaining(now))
    }

    pub fn run_id(&self) -> Option<Uuid> {
        self.run_id
    }

    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod node;
pub mod observer;
pub mod panels;
pub mod sequencer;
pub mod spotlight;
pub mod surface;
pub mod timer;

pub use action::{Affordance, TourAction};
pub use app::SpotlightApp;
pub use config::TourConfig;
pub use error::{TourError, TourResult};
pub use geometry::{PanelLayout, PanelPlacement, resolve_placement};
pub use node::{PointOfInterest, TourDefinition};
pub use observer::{ObserverHandle, ProgressEvent, ProgressLog, ProgressObserver};
pub use sequencer::{TourPhase, TourSequencer};
pub use spotlight::AnimatedSpotlight;
pub use surface::{HighlightSurface, TransitionKind};
pub use timer::AutoAdvanceTimer;

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Receives tour progress from the sequencer
pub trait ProgressObserver {
    /// A node became current. `position` is 1-based.
    fn on_advance(&mut self, position: usize, total: usize);

    /// The tour ended. Called at most once per run.
    fn on_dismiss(&mut self);
}

/// Non-owning reference to an observer.
///
/// The host owns the observer; once it drops its `Arc` the sequencer's
/// notifications go nowhere.
#[derive(Clone, Default)]
pub struct ObserverHandle {
    inner: Option<Weak<Mutex<dyn ProgressObserver>>>,
}

impl std::fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl ObserverHandle {
    /// A handle with no observer behind it
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn new<O: ProgressObserver + 'static>(observer: &Arc<Mutex<O>>) -> Self {
        let weak = Arc::downgrade(observer);
        let weak: Weak<Mutex<dyn ProgressObserver>> = weak;
        Self { inner: Some(weak) }
    }

    /// True while the observer is still alive
    pub fn is_attached(&self) -> bool {
        self.inner.as_ref().is_some_and(|weak| weak.strong_count() > 0)
    }

    pub(crate) fn notify(&self, f: impl FnOnce(&mut dyn ProgressObserver)) {
        if let Some(observer) = self.inner.as_ref().and_then(Weak::upgrade) {
            f(&mut *observer.lock());
        }
    }
}

/// A progress notification as recorded by [`ProgressLog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Advanced { position: usize, total: usize },
    Dismissed,
}

/// Observer that keeps every notification it receives
#[derive(Debug, Default)]
pub struct ProgressLog {
    events: Vec<ProgressEvent>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<ProgressEvent> {
        self.events.last().copied()
    }

    pub fn dismiss_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ProgressEvent::Dismissed))
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ProgressObserver for ProgressLog {
    fn on_advance(&mut self, position: usize, total: usize) {
        self.events.push(ProgressEvent::Advanced { position, total });
    }

    fn on_dismiss(&mut self) {
        self.events.push(ProgressEvent::Dismissed);
    }
}

/// The three things a user can ask the tour to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourAction {
    Advance,
    Retreat,
    Dismiss,
}

/// The UI element an action came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    NextButton,
    BackButton,
    CloseButton,
    /// A tap anywhere on the host outside the panel controls
    Tap,
}

impl Affordance {
    pub fn action(self) -> TourAction {
        match self {
            Self::NextButton | Self::Tap => TourAction::Advance,
            Self::BackButton => TourAction::Retreat,
            Self::CloseButton => TourAction::Dismiss,
        }
    }
}

impl From<Affordance> for TourAction {
    fn from(affordance: Affordance) -> Self {
        affordance.action()
    }
}

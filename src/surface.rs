use egui::Rect;

/// The visual element that highlights a target region.
///
/// Each command returns the rect the highlight occupies once the command
/// has been applied (the target plus any padding the surface adds). The
/// sequencer only needs that rect for the panel placement decision; any
/// animation the surface runs is cosmetic and never awaited.
pub trait HighlightSurface {
    /// First appearance of the highlight
    fn appear_at(&mut self, target: Rect) -> Rect;

    /// Move an already visible highlight to a new target
    fn move_to(&mut self, target: Rect) -> Rect;

    /// Closing animation away from the last shown target
    fn disappear_from(&mut self, target: Rect) -> Rect;

    /// Hide immediately without animating, e.g. when the host goes away
    fn hide(&mut self) {
        // default: nothing to hide
    }
}

/// Which surface command a step issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Enter,
    Move,
    Exit,
}

impl TransitionKind {
    /// Classifies the step that lands on `index` in a tour of `count` nodes.
    ///
    /// Index 0 enters, one past the last node exits, everything else moves.
    pub fn for_index(index: usize, count: usize) -> Self {
        match index {
            0 => Self::Enter,
            i if i == count => Self::Exit,
            _ => Self::Move,
        }
    }

    /// Issue the matching command on `surface`
    pub fn apply<S: HighlightSurface + ?Sized>(self, surface: &mut S, target: Rect) -> Rect {
        match self {
            Self::Enter => surface.appear_at(target),
            Self::Move => surface.move_to(target),
            Self::Exit => surface.disappear_from(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, Rect)>,
    }

    impl HighlightSurface for Recorder {
        fn appear_at(&mut self, target: Rect) -> Rect {
            self.calls.push(("appear", target));
            target
        }

        fn move_to(&mut self, target: Rect) -> Rect {
            self.calls.push(("move", target));
            target.expand(2.0)
        }

        fn disappear_from(&mut self, target: Rect) -> Rect {
            self.calls.push(("disappear", target));
            target
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(TransitionKind::for_index(0, 3), TransitionKind::Enter);
        assert_eq!(TransitionKind::for_index(1, 3), TransitionKind::Move);
        assert_eq!(TransitionKind::for_index(2, 3), TransitionKind::Move);
        assert_eq!(TransitionKind::for_index(3, 3), TransitionKind::Exit);
    }

    #[test]
    fn test_single_node_tour_enters() {
        assert_eq!(TransitionKind::for_index(0, 1), TransitionKind::Enter);
        assert_eq!(TransitionKind::for_index(1, 1), TransitionKind::Exit);
    }

    #[test]
    fn test_apply_dispatches_and_returns_occupied_rect() {
        let mut surface = Recorder::default();
        let target = Rect::from_min_size(pos2(10.0, 10.0), vec2(20.0, 20.0));

        let occupied = TransitionKind::Move.apply(&mut surface, target);
        assert_eq!(occupied, target.expand(2.0));

        TransitionKind::Enter.apply(&mut surface, target);
        TransitionKind::Exit.apply(&mut surface, target);
        let names: Vec<_> = surface.calls.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["move", "appear", "disappear"]);
    }
}

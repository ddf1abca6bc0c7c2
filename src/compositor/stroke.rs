//! Stroke session state machine.

/// Current freehand stroke state.
///
/// Exists only between a pointer press and the matching release or leave.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeState {
    /// Not drawing - waiting for a pointer press
    Idle,
    /// Pointer held down; ink follows it
    Drawing {
        /// Last surface-local point the path was extended to
        last: (f64, f64),
        /// Number of segments rendered so far
        segments: usize,
    },
}

impl StrokeState {
    pub(super) fn begin(start: (f64, f64)) -> Self {
        StrokeState::Drawing {
            last: start,
            segments: 0,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, StrokeState::Drawing { .. })
    }

    /// Moves the path end to `point`, returning the previous end when drawing.
    pub(super) fn extend(&mut self, point: (f64, f64)) -> Option<(f64, f64)> {
        match self {
            StrokeState::Drawing { last, segments } => {
                let from = std::mem::replace(last, point);
                *segments += 1;
                Some(from)
            }
            StrokeState::Idle => None,
        }
    }

    /// Returns to idle, yielding the segment count if a stroke was active.
    pub(super) fn finish(&mut self) -> Option<usize> {
        match std::mem::replace(self, StrokeState::Idle) {
            StrokeState::Drawing { segments, .. } => Some(segments),
            StrokeState::Idle => None,
        }
    }
}

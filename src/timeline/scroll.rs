//! Auto-scroll command generation.
//!
//! The engine does not own a scroll position; the host does. Each frame the
//! host reports whether the user is dragging and where the focused line sits,
//! and [`AutoScroller`] answers with at most one scroll command. Commands are
//! deduplicated per focus target so a host animating a scroll is not
//! restarted every frame.

use serde::Serialize;

/// Duration of a host-side scroll animation, in milliseconds.
pub const SCROLL_ANIM_MS: u64 = 600;

/// Host-side viewport the scroller steers.
pub trait ViewportHost {
    /// Current offset of line `index` from the viewport's resting position,
    /// in pixels, or `None` while the line has no layout yet.
    fn visible_row_offset(&self, index: usize) -> Option<f64>;

    /// True while the user is actively scrolling by hand.
    fn is_manual_scroll_in_progress(&self) -> bool;
}

/// One scroll instruction for the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollCommand {
    /// Offset to animate to, in pixels.
    pub offset_px: f64,
    /// Animation duration in milliseconds.
    pub duration_ms: u64,
}

/// Per-frame auto-scroll state machine.
///
/// Manual scrolling suppresses commands for exactly as long as it lasts and
/// clears the last commanded target, so the first frame after the user lets
/// go re-issues a command even if focus never moved, snapping the view back
/// to the song.
#[derive(Clone, Debug, Default)]
pub struct AutoScroller {
    last_commanded: Option<usize>,
}

impl AutoScroller {
    /// Creates an idle scroller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples the scroller for one frame.
    ///
    /// Returns a command when the focused line changed since the last one, or
    /// when a manual scroll just ended. Returns `None` while the user is
    /// dragging, while there is no focused line, or while the focused line
    /// has no layout yet (in which case it retries next frame).
    pub fn frame<H: ViewportHost + ?Sized>(
        &mut self,
        host: &H,
        focused: Option<usize>,
    ) -> Option<ScrollCommand> {
        if host.is_manual_scroll_in_progress() {
            self.last_commanded = None;
            return None;
        }
        let focused = focused?;
        if self.last_commanded == Some(focused) {
            return None;
        }
        let offset_px = host.visible_row_offset(focused)?;
        self.last_commanded = Some(focused);
        Some(ScrollCommand {
            offset_px,
            duration_ms: SCROLL_ANIM_MS,
        })
    }

    /// Forgets the last commanded target, forcing the next frame to issue a
    /// fresh command.
    pub fn reset(&mut self) {
        self.last_commanded = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scroll.rs"]
mod tests;

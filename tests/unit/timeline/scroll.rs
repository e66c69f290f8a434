use super::*;

struct Host {
    manual: bool,
    layout_known: bool,
}

impl Host {
    fn ready() -> Self {
        Self {
            manual: false,
            layout_known: true,
        }
    }
}

impl ViewportHost for Host {
    fn visible_row_offset(&self, index: usize) -> Option<f64> {
        self.layout_known.then(|| index as f64 * 40.0)
    }

    fn is_manual_scroll_in_progress(&self) -> bool {
        self.manual
    }
}

#[test]
fn first_focus_issues_a_command() {
    let mut scroller = AutoScroller::new();
    let command = scroller.frame(&Host::ready(), Some(2)).unwrap();
    assert_eq!(command.offset_px, 80.0);
    assert_eq!(command.duration_ms, SCROLL_ANIM_MS);
}

#[test]
fn repeated_focus_is_deduplicated() {
    let mut scroller = AutoScroller::new();
    let host = Host::ready();
    assert!(scroller.frame(&host, Some(2)).is_some());
    assert!(scroller.frame(&host, Some(2)).is_none());
    assert!(scroller.frame(&host, Some(2)).is_none());
}

#[test]
fn focus_change_issues_a_fresh_command() {
    let mut scroller = AutoScroller::new();
    let host = Host::ready();
    scroller.frame(&host, Some(2));
    let command = scroller.frame(&host, Some(3)).unwrap();
    assert_eq!(command.offset_px, 120.0);
}

#[test]
fn manual_scroll_suppresses_then_reissues() {
    let mut scroller = AutoScroller::new();
    let mut host = Host::ready();
    assert!(scroller.frame(&host, Some(2)).is_some());

    host.manual = true;
    assert!(scroller.frame(&host, Some(2)).is_none());
    assert!(scroller.frame(&host, Some(2)).is_none());

    // Same focus as before the drag, but the view must snap back anyway.
    host.manual = false;
    assert!(scroller.frame(&host, Some(2)).is_some());
}

#[test]
fn missing_layout_retries_until_it_lands() {
    let mut scroller = AutoScroller::new();
    let mut host = Host {
        manual: false,
        layout_known: false,
    };
    assert!(scroller.frame(&host, Some(1)).is_none());
    assert!(scroller.frame(&host, Some(1)).is_none());

    host.layout_known = true;
    let command = scroller.frame(&host, Some(1)).unwrap();
    assert_eq!(command.offset_px, 40.0);
}

#[test]
fn no_focus_means_no_command() {
    let mut scroller = AutoScroller::new();
    assert!(scroller.frame(&Host::ready(), None).is_none());
}

#[test]
fn reset_forces_the_next_command() {
    let mut scroller = AutoScroller::new();
    let host = Host::ready();
    scroller.frame(&host, Some(0));
    assert!(scroller.frame(&host, Some(0)).is_none());
    scroller.reset();
    assert!(scroller.frame(&host, Some(0)).is_some());
}

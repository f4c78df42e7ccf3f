// Host-side tests for the run/pause state machine, driven by a fake scheduler.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;

/// Records what the loop asked for; `fire` plays the role of the display refresh.
#[derive(Default)]
struct FakeScheduler {
    next_id: u32,
    live: Vec<u32>,
    requested: usize,
    cancelled: usize,
    refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn request(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.requested += 1;
        self.live.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel(&mut self, handle: u32) {
        self.cancelled += 1;
        self.live.retain(|h| *h != handle);
    }
}

/// Deliver one refresh tick. Returns how many frame updates ran.
fn fire(lp: &mut FrameLoop<FakeScheduler>) -> usize {
    let due = std::mem::take(&mut lp.scheduler_mut().live);
    let mut ran = 0;
    for _ in due {
        if lp.on_frame() {
            ran += 1;
        }
    }
    ran
}

fn running() -> FrameLoop<FakeScheduler> {
    let mut lp = FrameLoop::new(FakeScheduler::default());
    assert!(lp.resume());
    lp
}

#[test]
fn starts_paused_until_resumed() {
    let mut lp = FrameLoop::new(FakeScheduler::default());
    assert_eq!(lp.state(), RunState::Paused);
    assert_eq!(fire(&mut lp), 0);
    lp.resume();
    assert_eq!(lp.state(), RunState::Running);
    assert!(lp.is_running());
}

#[test]
fn each_frame_books_exactly_one_successor() {
    let mut lp = running();
    for _ in 0..10 {
        assert_eq!(fire(&mut lp), 1);
        assert_eq!(lp.scheduler().live.len(), 1);
    }
    assert_eq!(lp.scheduler().requested, 11);
}

#[test]
fn hidden_cancels_and_blocks_frames_until_visible() {
    let mut lp = running();
    fire(&mut lp);
    assert_eq!(lp.handle(LifecycleEvent::Hidden), RunState::Paused);
    assert!(lp.pending().is_none());
    assert!(lp.scheduler().live.is_empty());
    for _ in 0..5 {
        assert_eq!(fire(&mut lp), 0);
    }
    assert_eq!(lp.handle(LifecycleEvent::Visible), RunState::Running);
    assert_eq!(fire(&mut lp), 1);
}

#[test]
fn repeated_events_are_idempotent() {
    let mut lp = running();
    lp.handle(LifecycleEvent::Hidden);
    lp.handle(LifecycleEvent::Hidden);
    lp.handle(LifecycleEvent::Blur);
    assert_eq!(lp.scheduler().cancelled, 1);

    lp.handle(LifecycleEvent::Visible);
    lp.handle(LifecycleEvent::Visible);
    lp.handle(LifecycleEvent::Focus);
    assert_eq!(lp.scheduler().live.len(), 1, "two loops scheduled");
    assert_eq!(fire(&mut lp), 1);
}

#[test]
fn focus_while_running_does_not_double_schedule() {
    let mut lp = running();
    assert!(!lp.resume());
    lp.handle(LifecycleEvent::Focus);
    assert_eq!(lp.scheduler().requested, 1);
}

#[test]
fn blur_and_focus_mirror_visibility() {
    let mut lp = running();
    assert_eq!(lp.handle(LifecycleEvent::Blur), RunState::Paused);
    assert_eq!(fire(&mut lp), 0);
    assert_eq!(lp.handle(LifecycleEvent::Focus), RunState::Running);
    assert_eq!(fire(&mut lp), 1);
}

#[test]
fn teardown_after_updates_leaves_nothing_pending() {
    let mut lp = running();
    for _ in 0..7 {
        fire(&mut lp);
    }
    assert_eq!(lp.handle(LifecycleEvent::Teardown), RunState::Stopped);
    assert!(lp.pending().is_none());
    assert!(lp.scheduler().live.is_empty());
    for _ in 0..3 {
        assert_eq!(fire(&mut lp), 0);
    }
}

#[test]
fn nothing_restarts_after_teardown() {
    let mut lp = running();
    lp.teardown();
    let requested = lp.scheduler().requested;
    assert!(!lp.resume());
    lp.handle(LifecycleEvent::Visible);
    lp.handle(LifecycleEvent::Focus);
    assert_eq!(lp.scheduler().requested, requested);
    assert_eq!(lp.state(), RunState::Stopped);
}

#[test]
fn stale_callback_after_teardown_does_not_run() {
    let mut lp = running();
    // a refresh already dispatched by the platform races with teardown
    lp.teardown();
    assert!(!lp.on_frame());
    assert!(lp.pending().is_none());
}

#[test]
fn refused_schedule_leaves_loop_paused() {
    let mut lp = FrameLoop::new(FakeScheduler {
        refuse: true,
        ..FakeScheduler::default()
    });
    assert!(!lp.resume());
    assert_eq!(lp.state(), RunState::Paused);
    lp.scheduler_mut().refuse = false;
    assert!(lp.resume());
}

#[test]
fn cached_pagehide_pauses_and_pageshow_resumes() {
    let mut lp = running();
    fire(&mut lp);

    let hide = LifecycleEvent::page_hide(true);
    assert_eq!(hide, LifecycleEvent::Hidden);
    assert_eq!(lp.handle(hide), RunState::Paused);
    assert_eq!(fire(&mut lp), 0);

    let show = LifecycleEvent::page_show(true).expect("restore resumes");
    assert_eq!(lp.handle(show), RunState::Running);
    assert_eq!(fire(&mut lp), 1);
    assert_eq!(lp.scheduler().live.len(), 1);
}

#[test]
fn final_pagehide_stops_the_loop() {
    let mut lp = running();
    let hide = LifecycleEvent::page_hide(false);
    assert_eq!(hide, LifecycleEvent::Teardown);
    assert_eq!(lp.handle(hide), RunState::Stopped);
    assert!(lp.scheduler().live.is_empty());

    // A later restore must not revive a torn-down loop.
    assert_eq!(lp.handle(LifecycleEvent::Visible), RunState::Stopped);
    assert_eq!(fire(&mut lp), 0);
}

#[test]
fn initial_pageshow_is_ignored() {
    assert_eq!(LifecycleEvent::page_show(false), None);
}

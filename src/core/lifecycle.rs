// Run/pause bookkeeping for the frame loop.
//
// The loop owns a single optional pending handle. Every schedule checks it
// first and every cancel clears it, so there is never more than one frame in
// flight no matter how the page events interleave.

/// Display-refresh scheduling backend (`requestAnimationFrame` on the web).
pub trait FrameScheduler {
    type Handle: Copy;

    /// Ask for one callback on the next refresh. `None` if the platform refused.
    fn request(&mut self) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    Stopped,
}

/// Page signals that drive the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    Hidden,
    Visible,
    Blur,
    Focus,
    Teardown,
}

impl LifecycleEvent {
    /// `pagehide`. A page entering the back/forward cache may come back, so
    /// it only pauses; any other hide is final.
    pub fn page_hide(persisted: bool) -> Self {
        if persisted {
            LifecycleEvent::Hidden
        } else {
            LifecycleEvent::Teardown
        }
    }

    /// `pageshow`. Only a restore from the back/forward cache matters; the
    /// initial load is already running.
    pub fn page_show(persisted: bool) -> Option<Self> {
        persisted.then_some(LifecycleEvent::Visible)
    }
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    stopped: bool,
}

impl<S: FrameScheduler> FrameLoop<S> {
    /// Created paused; call [`FrameLoop::resume`] to schedule the first frame.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            stopped: false,
        }
    }

    pub fn state(&self) -> RunState {
        if self.stopped {
            RunState::Stopped
        } else if self.pending.is_some() {
            RunState::Running
        } else {
            RunState::Paused
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Schedule a frame unless one is already pending. Returns whether a new
    /// frame was scheduled.
    pub fn resume(&mut self) -> bool {
        if self.stopped || self.pending.is_some() {
            return false;
        }
        self.pending = self.scheduler.request();
        self.pending.is_some()
    }

    /// Cancel the pending frame, if any. Returns whether one was cancelled.
    pub fn pause(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                self.scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Called from the scheduled callback. Consumes the pending handle and
    /// books the following frame first, so an update that bails out early
    /// still leaves the loop alive. Returns `false` when the frame should not
    /// run at all.
    pub fn on_frame(&mut self) -> bool {
        if self.stopped {
            self.pending = None;
            return false;
        }
        self.pending = None;
        self.pending = self.scheduler.request();
        true
    }

    /// Terminal: cancels the pending frame and ignores every later event.
    pub fn teardown(&mut self) {
        self.pause();
        self.stopped = true;
    }

    /// Apply a page signal. Returns the resulting state.
    pub fn handle(&mut self, event: LifecycleEvent) -> RunState {
        match event {
            LifecycleEvent::Hidden | LifecycleEvent::Blur => {
                self.pause();
            }
            LifecycleEvent::Visible | LifecycleEvent::Focus => {
                self.resume();
            }
            LifecycleEvent::Teardown => self.teardown(),
        }
        self.state()
    }
}

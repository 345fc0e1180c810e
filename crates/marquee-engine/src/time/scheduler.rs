use std::time::{Duration, Instant};

use super::ThrottleClock;

/// Handle for one armed tick request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TickHandle(pub u64);

/// Platform animation-tick source.
///
/// The scheduler keeps at most one request outstanding; a source never
/// delivers a tick it was not armed for, and `cancel` suppresses the pending
/// delivery.
pub trait TickSource {
    fn arm(&mut self) -> TickHandle;
    fn cancel(&mut self, handle: TickHandle);
}

/// Throttling frame scheduler.
///
/// States: idle (no pending request) and scheduled (exactly one pending
/// request). Every delivered tick re-arms the source; only ticks passing the
/// throttle gate become frames. This is a rate-limiting sampler, not a
/// fixed-timestep clock.
pub struct FrameScheduler<S: TickSource> {
    source: S,
    clock: ThrottleClock,
    pending: Option<TickHandle>,
}

impl<S: TickSource> FrameScheduler<S> {
    pub fn new(source: S) -> Self {
        Self::with_clock(source, ThrottleClock::new())
    }

    pub fn with_clock(source: S, clock: ThrottleClock) -> Self {
        Self {
            source,
            clock,
            pending: None,
        }
    }

    /// Arms the first request. Idempotent while already scheduled.
    pub fn start(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.source.arm());
        }
    }

    /// Cancels the pending request, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.source.cancel(handle);
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Handles one delivered tick.
    ///
    /// Returns whether the render callback should run for this tick. The next
    /// request is re-armed regardless of the throttle decision; a tick
    /// arriving while idle (delivered after `stop`) is ignored entirely.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.pending.take().is_none() {
            return false;
        }

        let accepted = self.clock.accept(now);
        self.pending = Some(self.source.arm());
        accepted
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

/// Tick source backed by the tokio timer.
///
/// The native stand-in for a webview's animation-frame request: arming
/// schedules one wakeup `interval` from now, and [`TimerTicks::next_tick`]
/// completes at that deadline. While unarmed it never completes, which keeps
/// it safe to park inside a `select!` loop after `stop`.
pub struct TimerTicks {
    interval: Duration,
    next_handle: u64,
    deadline: Option<(TickHandle, tokio::time::Instant)>,
}

impl TimerTicks {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_handle: 0,
            deadline: None,
        }
    }

    /// Waits for the armed deadline and consumes it. Pends forever while
    /// unarmed.
    pub async fn next_tick(&mut self) -> Instant {
        match self.deadline {
            Some((_, at)) => {
                tokio::time::sleep_until(at).await;
                self.deadline = None;
                Instant::now()
            }
            None => std::future::pending().await,
        }
    }
}

impl TickSource for TimerTicks {
    fn arm(&mut self) -> TickHandle {
        let handle = TickHandle(self.next_handle);
        self.next_handle += 1;
        self.deadline = Some((handle, tokio::time::Instant::now() + self.interval));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if matches!(self.deadline, Some((armed, _)) if armed == handle) {
            self.deadline = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Counts outstanding requests so duplicate arming is observable.
    #[derive(Default)]
    struct Ledger {
        next: u64,
        outstanding: Vec<TickHandle>,
    }

    #[derive(Clone, Default)]
    struct CountingTicks(Rc<RefCell<Ledger>>);

    impl CountingTicks {
        fn outstanding(&self) -> usize {
            self.0.borrow().outstanding.len()
        }
    }

    impl TickSource for CountingTicks {
        fn arm(&mut self) -> TickHandle {
            let mut ledger = self.0.borrow_mut();
            let handle = TickHandle(ledger.next);
            ledger.next += 1;
            ledger.outstanding.push(handle);
            handle
        }

        fn cancel(&mut self, handle: TickHandle) {
            self.0.borrow_mut().outstanding.retain(|h| *h != handle);
        }
    }

    fn scheduler(threshold_ms: u64) -> (FrameScheduler<CountingTicks>, CountingTicks) {
        let source = CountingTicks::default();
        let sched = FrameScheduler::with_clock(
            source.clone(),
            ThrottleClock::with_threshold(Duration::from_millis(threshold_ms)),
        );
        (sched, source)
    }

    // ── one outstanding request ───────────────────────────────────────────

    #[test]
    fn start_is_idempotent() {
        let (mut sched, source) = scheduler(25);

        sched.start();
        sched.start();
        assert_eq!(source.outstanding(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut sched, source) = scheduler(25);

        sched.start();
        sched.stop();
        sched.stop();
        assert_eq!(source.outstanding(), 0);
        assert!(!sched.is_scheduled());
    }

    #[test]
    fn tick_rearms_exactly_once() {
        let (mut sched, source) = scheduler(25);

        sched.start();
        sched.on_tick(Instant::now());
        assert_eq!(source.outstanding(), 1);
        assert!(sched.is_scheduled());
    }

    // ── throttle behavior ─────────────────────────────────────────────────

    #[test]
    fn rejected_ticks_still_rearm() {
        let base = Instant::now();
        let (mut sched, source) = scheduler(25);

        sched.start();
        assert!(sched.on_tick(base));
        assert!(!sched.on_tick(base + Duration::from_millis(10)));
        assert_eq!(source.outstanding(), 1);
        assert!(sched.on_tick(base + Duration::from_millis(40)));
    }

    #[test]
    fn tick_after_stop_is_ignored() {
        let (mut sched, source) = scheduler(25);

        sched.start();
        sched.stop();
        assert!(!sched.on_tick(Instant::now()));
        assert_eq!(source.outstanding(), 0);
    }

    // ── timer source ──────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn timer_ticks_fire_at_the_armed_deadline() {
        let mut ticks = TimerTicks::new(Duration::from_millis(16));
        let handle = ticks.arm();

        let before = tokio::time::Instant::now();
        ticks.next_tick().await;
        assert!(tokio::time::Instant::now() - before >= Duration::from_millis(16));

        // Consumed; cancel of a stale handle is a no-op.
        ticks.cancel(handle);
        assert!(ticks.deadline.is_none());
    }
}

//! Timer ownership
//!
//! Repeating and one-shot timers are registered through a [`Scheduler`] and
//! handed back as handles. A [`TimerGuard`] owns one handle and clears it
//! exactly once, so a view that keeps its guards until teardown cannot leave
//! a callback firing into disposed state.
//!
//! [`ManualClock`] is a deterministic single-threaded scheduler driven by
//! explicit calls to [`ManualClock::advance`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::debug;

use crate::{CoreError, CoreResult};

/// Longest delay a browser timer accepts; larger values fire immediately.
pub const MAX_TIMER_MS: u64 = i32::MAX as u64;

/// Rejects periods a host timer cannot honour: zero, or beyond [`MAX_TIMER_MS`].
pub fn check_period(period: Duration) -> CoreResult<Duration> {
    if period.is_zero() || period.as_millis() > u128::from(MAX_TIMER_MS) {
        return Err(CoreError::InvalidPeriod);
    }
    Ok(period)
}

pub trait TimerHandle {
    /// Stop the timer. Clearing a timer that already fired or was already
    /// cleared does nothing.
    fn clear(&self);
}

/// Host timer facility
pub trait Scheduler {
    type Handle: TimerHandle + 'static;

    fn set_interval(&self, period: Duration, tick: Box<dyn Fn()>) -> CoreResult<Self::Handle>;

    fn set_timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> CoreResult<Self::Handle>;
}

/// Owns a timer handle and clears it on `cancel` or drop
pub struct TimerGuard<H: TimerHandle> {
    handle: Option<H>,
    label: &'static str,
}

impl<H: TimerHandle> TimerGuard<H> {
    pub fn new(handle: H, label: &'static str) -> Self {
        debug!(timer = label, "timer started");
        Self {
            handle: Some(handle),
            label,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
            debug!(timer = self.label, "timer cleared");
        }
    }
}

impl<H: TimerHandle> Drop for TimerGuard<H> {
    fn drop(&mut self) {
        self.release();
    }
}

enum Task {
    Interval { period: Duration, tick: Rc<dyn Fn()> },
    Timeout(Box<dyn FnOnce()>),
}

struct Slot {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    slots: Vec<Slot>,
}

impl ClockState {
    fn register(&mut self, due: Duration, task: Task) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.push(Slot { id, due, task });
        id
    }

    /// Earliest slot due at or before `until`; ties go to the older timer.
    fn next_due(&self, until: Duration) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.due <= until)
            .min_by_key(|(_, slot)| (slot.due, slot.id))
            .map(|(pos, _)| pos)
    }
}

/// Deterministic scheduler for a single logical thread
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of timers that can still fire.
    pub fn pending(&self) -> usize {
        self.state.borrow().slots.len()
    }

    /// Move time forward by `elapsed`, firing every timer that falls due in
    /// order. Callbacks run with the clock set to their due time and may
    /// register or clear timers.
    pub fn advance(&self, elapsed: Duration) {
        let target = self.now() + elapsed;

        loop {
            let callback: Box<dyn FnOnce()> = {
                let mut state = self.state.borrow_mut();
                let Some(pos) = state.next_due(target) else {
                    break;
                };
                let due = state.slots[pos].due;
                state.now = due;

                let rearm = match &state.slots[pos].task {
                    Task::Interval { period, tick } => Some((*period, Rc::clone(tick))),
                    Task::Timeout(_) => None,
                };
                match rearm {
                    Some((period, tick)) => {
                        state.slots[pos].due = due + period;
                        Box::new(move || tick()) as Box<dyn FnOnce()>
                    }
                    None => match state.slots.remove(pos).task {
                        Task::Timeout(fire) => fire,
                        Task::Interval { .. } => unreachable!("interval slots are re-armed"),
                    },
                }
            };
            callback();
        }

        self.state.borrow_mut().now = target;
    }

    fn handle(&self, id: u64) -> ManualHandle {
        ManualHandle {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualHandle;

    fn set_interval(&self, period: Duration, tick: Box<dyn Fn()>) -> CoreResult<ManualHandle> {
        let period = check_period(period)?;
        let id = {
            let mut state = self.state.borrow_mut();
            let due = state.now + period;
            state.register(
                due,
                Task::Interval {
                    period,
                    tick: Rc::from(tick),
                },
            )
        };
        Ok(self.handle(id))
    }

    fn set_timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> CoreResult<ManualHandle> {
        let id = {
            let mut state = self.state.borrow_mut();
            let due = state.now + delay;
            state.register(due, Task::Timeout(fire))
        };
        Ok(self.handle(id))
    }
}

/// Handle into a [`ManualClock`]
#[derive(Clone)]
pub struct ManualHandle {
    id: u64,
    state: Weak<RefCell<ClockState>>,
}

impl TimerHandle for ManualHandle {
    fn clear(&self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().slots.retain(|slot| slot.id != self.id);
        }
    }
}

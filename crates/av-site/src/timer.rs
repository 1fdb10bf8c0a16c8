//! Browser timers behind the core `Scheduler` trait.

use std::time::Duration;

use av_core::{check_period, CoreError, CoreResult, Scheduler, TimerHandle, MAX_TIMER_MS};
use leptos::leptos_dom::helpers::{
    set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle,
};

pub enum BrowserTimer {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

impl TimerHandle for BrowserTimer {
    fn clear(&self) {
        match self {
            BrowserTimer::Interval(handle) => handle.clear(),
            BrowserTimer::Timeout(handle) => handle.clear(),
        }
    }
}

/// `window.setInterval` / `window.setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn set_interval(&self, period: Duration, tick: Box<dyn Fn()>) -> CoreResult<BrowserTimer> {
        let period = check_period(period)?;
        set_interval_with_handle(move || tick(), period)
            .map(BrowserTimer::Interval)
            .map_err(|err| CoreError::Timer(format!("setInterval failed: {:?}", err)))
    }

    fn set_timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> CoreResult<BrowserTimer> {
        if delay.as_millis() > u128::from(MAX_TIMER_MS) {
            return Err(CoreError::InvalidPeriod);
        }
        set_timeout_with_handle(move || fire(), delay)
            .map(BrowserTimer::Timeout)
            .map_err(|err| CoreError::Timer(format!("setTimeout failed: {:?}", err)))
    }
}

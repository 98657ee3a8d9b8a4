//! Countdown to the ceremony.
//!
//! `Countdown` is a two-state machine: it counts while the target lies ahead
//! and switches to `Elapsed` for good on the first tick past it. The DOM side
//! owns the tick `Interval` next to that state and releases it on `Elapsed`.

use std::cell::RefCell;

use chrono::{Local, NaiveDateTime, TimeZone};
use gloo_timers::callback::Interval;
use web_sys::{Document, HtmlElement};

use crate::config::selectors;
use crate::dom;
use crate::error::{Result, SiteError};
use crate::style::{Reveal, scale};

pub const MS_PER_DAY: i64 = 86_400_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_SECOND: i64 = 1_000;

const PULSE_SCALE: f64 = 1.1;

/// Time left, split into display units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Split a non-negative millisecond delta. Negative deltas have no
    /// representation and yield `None`.
    pub fn from_millis(delta: i64) -> Option<Self> {
        if delta < 0 {
            return None;
        }
        Some(Self {
            days: delta / MS_PER_DAY,
            hours: (delta % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (delta % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (delta % MS_PER_MINUTE) / MS_PER_SECOND,
        })
    }

    /// Milliseconds covered by the whole units, i.e. the delta rounded down
    /// to the second.
    pub fn whole_millis(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Counting(Remaining),
    Elapsed,
}

#[derive(Clone, Debug)]
pub struct Countdown {
    target_ms: i64,
    elapsed: bool,
}

impl Countdown {
    pub fn new(target_ms: i64) -> Self {
        Self { target_ms, elapsed: false }
    }

    /// Target given as a wall-clock time in the local zone. `None` if that
    /// local time does not exist (skipped by a DST change).
    pub fn from_local(target: NaiveDateTime) -> Option<Self> {
        Local
            .from_local_datetime(&target)
            .earliest()
            .map(|t| Self::new(t.timestamp_millis()))
    }

    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    pub fn is_elapsed(&self) -> bool {
        self.elapsed
    }

    /// Evaluate at `now_ms`. Once `Elapsed` is returned every later call
    /// returns it too.
    pub fn tick(&mut self, now_ms: i64) -> Phase {
        if self.elapsed {
            return Phase::Elapsed;
        }
        match Remaining::from_millis(self.target_ms - now_ms) {
            Some(remaining) => Phase::Counting(remaining),
            None => {
                self.elapsed = true;
                Phase::Elapsed
            }
        }
    }
}

struct CountdownView {
    doc: Document,
    scheduler: Countdown,
    display: HtmlElement,
    pulse_ms: u32,
    ticker: Option<Interval>,
}

impl CountdownView {
    fn render(&self, remaining: &Remaining) {
        let units = [
            (selectors::DAYS_ID, remaining.days),
            (selectors::HOURS_ID, remaining.hours),
            (selectors::MINUTES_ID, remaining.minutes),
            (selectors::SECONDS_ID, remaining.seconds),
        ];
        for (id, value) in units {
            if let Some(el) = self.doc.get_element_by_id(id) {
                el.set_text_content(Some(&value.to_string()));
            }
        }
        let Ok(numbers) = dom::query_all_html(&self.doc, selectors::COUNTDOWN_NUMBER) else {
            return;
        };
        for number in numbers {
            dom::set_style(&number, "transform", &scale(PULSE_SCALE));
            dom::defer(self.pulse_ms, move || {
                dom::set_style(&number, "transform", &scale(1.0));
            });
        }
    }

    fn show_elapsed(&self) {
        dom::set_visible(&self.display, Reveal::Display, false);
        if let Some(message) = dom::by_id_html(&self.doc, selectors::COUNTDOWN_MESSAGE_ID) {
            dom::set_visible(&message, Reveal::Display, true);
        }
    }
}

thread_local! {
    static COUNTDOWN: RefCell<Option<CountdownView>> = const { RefCell::new(None) };
}

fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// One evaluation. Returns `true` while still counting.
fn tick() -> bool {
    let (counting, released) = COUNTDOWN.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(view) = slot.as_mut() else {
            return (false, None);
        };
        match view.scheduler.tick(now_ms()) {
            Phase::Counting(remaining) => {
                view.render(&remaining);
                (true, None)
            }
            Phase::Elapsed => {
                view.show_elapsed();
                (false, view.ticker.take())
            }
        }
    });
    // The interval is still running this callback; drop it on a later turn.
    if let Some(ticker) = released {
        log::info!("countdown reached the ceremony, ticker stopped");
        dom::defer(0, move || drop(ticker));
    }
    counting
}

pub fn install(doc: &Document, target: NaiveDateTime, tick_ms: u32, pulse_ms: u32) -> Result<bool> {
    let Some(display) = dom::by_id_html(doc, selectors::COUNTDOWN_ID) else {
        return Ok(false);
    };
    let scheduler = Countdown::from_local(target)
        .ok_or_else(|| SiteError::Config(format!("{target} does not exist in local time")))?;

    COUNTDOWN.with(|cell| {
        *cell.borrow_mut() = Some(CountdownView {
            doc: doc.clone(),
            scheduler,
            display,
            pulse_ms,
            ticker: None,
        });
    });

    if tick() {
        let ticker = Interval::new(tick_ms, || {
            tick();
        });
        COUNTDOWN.with(|cell| {
            if let Some(view) = cell.borrow_mut().as_mut() {
                view.ticker = Some(ticker);
            }
        });
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn utc_ms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    #[test]
    fn decomposes_with_remainders() {
        let delta = 3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 6 * MS_PER_SECOND + 789;
        let r = Remaining::from_millis(delta).unwrap();
        assert_eq!(r, Remaining { days: 3, hours: 4, minutes: 5, seconds: 6 });
        assert_eq!(r.whole_millis(), delta - 789);
    }

    #[test]
    fn zero_delta_still_counts() {
        let mut c = Countdown::new(1_000);
        assert_eq!(
            c.tick(1_000),
            Phase::Counting(Remaining { days: 0, hours: 0, minutes: 0, seconds: 0 })
        );
        assert!(!c.is_elapsed());
    }

    #[test]
    fn elapsed_after_target() {
        let target = utc_ms(2025, 11, 1, 16, 0, 0);
        let now = utc_ms(2025, 11, 2, 0, 0, 0);
        let mut c = Countdown::new(target);
        assert_eq!(c.tick(now), Phase::Elapsed);
        assert!(c.is_elapsed());
    }

    #[test]
    fn elapsed_is_permanent_even_if_clock_goes_back() {
        let mut c = Countdown::new(10_000);
        assert_eq!(c.tick(10_001), Phase::Elapsed);
        assert_eq!(c.tick(0), Phase::Elapsed);
        assert_eq!(c.tick(9_999), Phase::Elapsed);
    }

    #[test]
    fn one_millisecond_before_target() {
        let mut c = Countdown::new(5_000);
        assert_eq!(
            c.tick(4_999),
            Phase::Counting(Remaining { days: 0, hours: 0, minutes: 0, seconds: 0 })
        );
    }
}

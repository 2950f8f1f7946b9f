//! Elapsed-time text shown by the widget.

use chrono::NaiveDateTime;

/// Shown while the start time is still in the future.
pub const NOT_STARTED_MESSAGE: &str = "尚未到达起始时间";

/// Whole components of an elapsed duration, or the not-yet-started state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerReading {
    NotStarted,
    Elapsed {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

/// Formats `now - start_time` for the text slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerPresenter {
    pub start_time: NaiveDateTime,
    pub show_seconds: bool,
    pub custom_text: String,
}

impl TimerPresenter {
    pub fn new(start_time: NaiveDateTime, show_seconds: bool, custom_text: impl Into<String>) -> Self {
        Self {
            start_time,
            show_seconds,
            custom_text: custom_text.into(),
        }
    }

    /// Split the elapsed time into truncated day/hour/minute/second parts.
    pub fn reading(&self, now: NaiveDateTime) -> TimerReading {
        let delta = now - self.start_time;
        if delta < chrono::TimeDelta::zero() {
            return TimerReading::NotStarted;
        }

        let total_seconds = delta.num_seconds();
        TimerReading::Elapsed {
            days: total_seconds / 86_400,
            hours: (total_seconds / 3_600) % 24,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }

    /// Text for the given instant.
    pub fn render(&self, now: NaiveDateTime) -> String {
        match self.reading(now) {
            TimerReading::NotStarted => NOT_STARTED_MESSAGE.to_string(),
            TimerReading::Elapsed {
                days,
                hours,
                minutes,
                seconds,
            } => {
                let mut text = format!("{} {days}天 {hours}小时 {minutes}分", self.custom_text);
                if self.show_seconds {
                    text.push_str(&format!(" {seconds}秒"));
                }
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 20)
            .and_then(|date| date.and_hms_opt(13, 14, 0))
            .unwrap()
    }

    fn ago(delta: TimeDelta) -> NaiveDateTime {
        now() - delta
    }

    fn one_day_two_hours() -> TimeDelta {
        TimeDelta::days(1) + TimeDelta::hours(2) + TimeDelta::minutes(3) + TimeDelta::seconds(4)
    }

    #[test]
    fn renders_with_seconds() {
        let timer = TimerPresenter::new(ago(one_day_two_hours()), true, "X");
        assert_eq!(timer.render(now()), "X 1天 2小时 3分 4秒");
    }

    #[test]
    fn renders_without_seconds() {
        let timer = TimerPresenter::new(ago(one_day_two_hours()), false, "X");
        assert_eq!(timer.render(now()), "X 1天 2小时 3分");
    }

    #[test]
    fn future_start_is_not_started() {
        let timer = TimerPresenter::new(now() + TimeDelta::seconds(1), true, "X");
        assert_eq!(timer.reading(now()), TimerReading::NotStarted);
        assert_eq!(timer.render(now()), NOT_STARTED_MESSAGE);
    }

    #[test]
    fn exact_start_is_zero_elapsed() {
        let timer = TimerPresenter::new(now(), true, "X");
        assert_eq!(timer.render(now()), "X 0天 0小时 0分 0秒");
    }

    #[test]
    fn components_truncate_instead_of_rounding() {
        let timer = TimerPresenter::new(
            ago(TimeDelta::days(400) + TimeDelta::hours(23) + TimeDelta::milliseconds(59_999)),
            true,
            "X",
        );
        assert_eq!(
            timer.reading(now()),
            TimerReading::Elapsed {
                days: 400,
                hours: 23,
                minutes: 0,
                seconds: 59,
            }
        );
    }
}

//! A human-readable time-difference formatter in the "ago" context. Given a
//! pair of Unix timestamps (the second defaulting to the current time), the
//! delta is classified into the coarsest-fitting bucket--minute, hour, day,
//! week, month, or year--and rendered as e.g. `5 mins ago` or `1 year ago`.
//!
//! Pluralization goes through the [`Localize`] seam so themes can swap in a
//! locale whose "ago" phrasing differs; [`human_time_diff`] uses the default
//! English locale.

use crate::l10n::{sprintf, DefaultLocale, Localize};
use chrono::Utc;

pub const MINUTE_IN_SECONDS: u64 = 60;
pub const HOUR_IN_SECONDS: u64 = 60 * MINUTE_IN_SECONDS;
pub const DAY_IN_SECONDS: u64 = 24 * HOUR_IN_SECONDS;
pub const WEEK_IN_SECONDS: u64 = 7 * DAY_IN_SECONDS;
pub const MONTH_IN_SECONDS: u64 = 30 * DAY_IN_SECONDS;
pub const YEAR_IN_SECONDS: u64 = 365 * DAY_IN_SECONDS;

/// Formats the difference between two Unix timestamps as a human-readable
/// "N units ago" label using the default English locale. `to` defaults to
/// the current time. The arguments may be given in either order; only the
/// magnitude of the difference matters.
pub fn human_time_diff(from: i64, to: Option<i64>) -> String {
    human_time_diff_in(&DefaultLocale, from, to)
}

/// Like [`human_time_diff`], but selects the singular/plural label template
/// through the provided [`Localize`] implementation.
pub fn human_time_diff_in(locale: &dyn Localize, from: i64, to: Option<i64>) -> String {
    let to = to.unwrap_or_else(|| Utc::now().timestamp());

    // Widen before subtracting so that pathological inputs (e.g. i64::MIN)
    // can't overflow; the function is total over the integer domain.
    let diff = (i128::from(to) - i128::from(from)).unsigned_abs() as u64;

    let (unit, singular, plural) = if diff < HOUR_IN_SECONDS {
        /* translators: min=minute */
        (MINUTE_IN_SECONDS, "%s min ago", "%s mins ago")
    } else if diff < DAY_IN_SECONDS {
        (HOUR_IN_SECONDS, "%s hour ago", "%s hours ago")
    } else if diff < WEEK_IN_SECONDS {
        (DAY_IN_SECONDS, "%s day ago", "%s days ago")
    } else if diff < MONTH_IN_SECONDS {
        (WEEK_IN_SECONDS, "%s week ago", "%s weeks ago")
    } else if diff < YEAR_IN_SECONDS {
        (MONTH_IN_SECONDS, "%s month ago", "%s months ago")
    } else {
        (YEAR_IN_SECONDS, "%s year ago", "%s years ago")
    };

    // Clamp to 1 so a zero delta reads "1 min ago" rather than "0 mins ago".
    let count = round_div(diff, unit).max(1);
    sprintf(&locale.plural(singular, plural, count), &count.to_string())
}

/// Integer division rounding half away from zero. Both operands are
/// non-negative, so this is equivalent to round-half-up. Computed in u128
/// so the adjustment can't overflow for extreme deltas.
pub(crate) fn round_div(dividend: u64, divisor: u64) -> u64 {
    ((u128::from(dividend) + u128::from(divisor) / 2) / u128::from(divisor)) as u64
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_delta_clamps_to_one_minute() {
        assert_eq!("1 min ago", human_time_diff(1234567890, Some(1234567890)));
    }

    #[test]
    fn test_symmetric_in_from_and_to() {
        for &(from, to) in &[(0, 90), (1234567890, 0), (-3600, 3600), (7, i64::MAX)] {
            assert_eq!(
                human_time_diff(from, Some(to)),
                human_time_diff(to, Some(from)),
            );
        }
    }

    #[test]
    fn test_minute_bucket() {
        fixture("1 min ago", 0);
        fixture("1 min ago", 60);
        fixture("2 mins ago", 120);
        fixture("59 mins ago", 3555);
    }

    #[test]
    fn test_minute_hour_boundary() {
        fixture("60 mins ago", 3599);
        fixture("1 hour ago", 3600);
    }

    #[test]
    fn test_hour_day_boundary() {
        fixture("24 hours ago", 86399);
        fixture("1 day ago", 86400);
    }

    #[test]
    fn test_day_week_boundary() {
        fixture("7 days ago", 604799);
        fixture("1 week ago", 604800);
    }

    #[test]
    fn test_week_month_boundary() {
        fixture("4 weeks ago", 2591999);
        fixture("1 month ago", 2592000);
    }

    #[test]
    fn test_month_year_boundary() {
        fixture("12 months ago", 31535999);
        fixture("1 year ago", 31536000);
    }

    #[test]
    fn test_multiple_years() {
        fixture("2 years ago", 63072000);
    }

    #[test]
    fn test_count_rounds_half_up() {
        fixture("1 min ago", 89);
        fixture("2 mins ago", 90);
        fixture("2 hours ago", 3600 + 1800);
        fixture("1 hour ago", 3600 + 1799);
    }

    #[test]
    fn test_count_monotone_within_bucket() {
        let mut last = 0;
        for diff in (86400..604800).step_by(3600) {
            let count = round_div(diff, DAY_IN_SECONDS).max(1);
            assert!(count >= last, "count decreased at diff={}", diff);
            last = count;
        }
    }

    #[test]
    fn test_custom_locale() {
        struct Shouty;
        impl Localize for Shouty {
            fn plural<'a>(
                &self,
                _singular: &'a str,
                _plural: &'a str,
                _n: u64,
            ) -> std::borrow::Cow<'a, str> {
                std::borrow::Cow::Borrowed("%s MINS AGO")
            }
        }
        assert_eq!("2 MINS AGO", human_time_diff_in(&Shouty, 0, Some(120)));
    }

    fn fixture(wanted: &str, diff: i64) {
        assert_eq!(wanted, human_time_diff(0, Some(diff)));
        // Negative deltas classify identically via the absolute value.
        assert_eq!(wanted, human_time_diff(diff, Some(0)));
    }
}

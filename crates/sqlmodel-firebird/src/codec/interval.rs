//! Durations stored as a fractional number of days.
//!
//! An interval column is NUMERIC(18, 9): a duration becomes
//! `total_seconds / 86400` rounded to nine fractional digits. Both
//! directions work on integer nanoseconds so no binary float is involved.

#![allow(clippy::result_large_err)]

use chrono::TimeDelta;
use rust_decimal::{Decimal, RoundingStrategy};
use sqlmodel_core::Result;

use super::numeric::out_of_range;
use crate::types::INTERVAL_SCALE;

pub const SECONDS_PER_DAY: i128 = 86_400;
const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Days in `duration`, rounded half away from zero to nine fractional
/// digits.
pub fn duration_to_days(duration: TimeDelta) -> Result<Decimal> {
    let nanos = i128::from(duration.num_seconds()) * NANOS_PER_SECOND
        + i128::from(duration.subsec_nanos());
    // nanos / 86400 is days scaled by 10^9
    let scaled = div_round_half_away(nanos, SECONDS_PER_DAY);
    Decimal::try_from_i128_with_scale(scaled, u32::from(INTERVAL_SCALE)).map_err(|e| {
        out_of_range(
            "INTERVAL",
            format!("{} days do not fit a decimal: {}", scaled, e),
        )
    })
}

/// Duration of `days` days, after rounding to nine fractional digits.
pub fn days_to_duration(days: Decimal) -> Result<TimeDelta> {
    let scale = u32::from(INTERVAL_SCALE);
    let mut d = days.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    d.rescale(scale);
    if d.scale() != scale {
        return Err(out_of_range(
            "INTERVAL",
            format!("{} days is too large for a duration", days),
        ));
    }
    let nanos = d
        .mantissa()
        .checked_mul(SECONDS_PER_DAY)
        .ok_or_else(|| out_of_range("INTERVAL", format!("{} days overflows", days)))?;
    let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND))
        .map_err(|_| out_of_range("INTERVAL", format!("{} days overflows", days)))?;
    // rem_euclid of a positive divisor is in 0..10^9
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as u32;
    TimeDelta::new(secs, subsec).ok_or_else(|| {
        out_of_range(
            "INTERVAL",
            format!("{} days is outside the duration range", days),
        )
    })
}

fn div_round_half_away(n: i128, d: i128) -> i128 {
    let q = n / d;
    let r = n % d;
    if 2 * r.abs() >= d { q + n.signum() } else { q }
}

//! Cron expression evaluation.
//!
//! Expressions use the seconds-resolution format of the `cron` crate:
//! `sec min hour day-of-month month day-of-week`, so `*/30 * * * * *`
//! fires every 30 seconds and `0 0 3 * * *` daily at 03:00 UTC.

use crate::error::{JobError, Result};
use chrono::{TimeZone, Utc};
use cron::Schedule;
use std::str::FromStr;

/// Parses the expression, failing with `JobError::Cron` when invalid.
pub fn parse(expression: &str) -> Result<Schedule> {
    Schedule::from_str(expression)
        .map_err(|e| JobError::Cron(format!("Invalid cron expression '{}': {}", expression, e)))
}

/// The next occurrence strictly after `after_millis`, as Unix millis.
///
/// `Ok(None)` when the schedule has no future occurrence.
pub fn next_occurrence(expression: &str, after_millis: i64) -> Result<Option<i64>> {
    let schedule = parse(expression)?;
    let after = Utc
        .timestamp_millis_opt(after_millis)
        .single()
        .ok_or_else(|| JobError::Cron(format!("Invalid timestamp: {}", after_millis)))?;
    Ok(schedule.after(&after).next().map(|dt| dt.timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_thirty_seconds_advances() {
        let t0 = 1730000000000; // some instant
        let next = next_occurrence("*/30 * * * * *", t0).unwrap().unwrap();
        assert!(next > t0);
        assert!(next - t0 <= 30_000);
        // Occurrences land on whole seconds
        assert_eq!(next % 1000, 0);
    }

    #[test]
    fn next_is_strictly_after() {
        let next = next_occurrence("0 0 3 * * *", 1730000000000).unwrap().unwrap();
        let after_next = next_occurrence("0 0 3 * * *", next).unwrap().unwrap();
        assert!(after_next > next);
    }

    #[test]
    fn invalid_expression_is_an_error() {
        assert!(matches!(
            next_occurrence("not a cron", 0),
            Err(JobError::Cron(_))
        ));
        assert!(parse("61 * * * * *").is_err());
    }
}

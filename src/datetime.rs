// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Datetime utilities for the forum helpers
use chrono::{DateTime, Duration, Utc};

use crate::models::Post;

/// Return the current datetime.
///
/// The timezone is fixed to UTC so that the code is independent of local time.
pub fn curr_datetime() -> DateTime<Utc> {
    Utc::now()
}

/// Attach a count to a unit, adding an "s" for counts above one.
pub fn pluralize(value: i64, word: &str) -> String {
    if value > 1 {
        format!("{value} {word}s")
    } else {
        format!("{value} {word}")
    }
}

/// Describe an elapsed duration in the coarsest sensible unit.
///
/// Durations under a minute (including negative ones, i.e. clock skew) return None, meaning
/// "just now".
pub fn elapsed(delta: Duration) -> Option<String> {
    if delta < Duration::minutes(1) {
        return None;
    }

    let days = delta.num_days();
    let unit = if delta < Duration::hours(1) {
        pluralize(delta.num_minutes(), "minute")
    } else if delta < Duration::days(1) {
        pluralize(delta.num_hours(), "hour")
    } else if delta < Duration::days(30) {
        pluralize(days, "day")
    } else if delta < Duration::days(90) {
        pluralize(days / 7, "week")
    } else if delta < Duration::days(730) {
        pluralize(days / 30, "month")
    } else {
        // Precision on the scale of years is kept to one decimal.
        format!("{:.1} years", days as f64 / 365.0)
    };
    Some(unit)
}

/// Describe the last action on a post along with how long ago it happened.
///
/// # Arguments
/// * `post` - The post whose last edit is described
/// * `now` - The time to measure against
pub fn action_time_ago(post: &Post, now: DateTime<Utc>) -> String {
    match elapsed(now - post.lastedit_date) {
        Some(unit) => format!("{} {unit}", post.update_type),
        None => String::from("just now"),
    }
}

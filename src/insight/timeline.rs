//! Display labels and ordering keys for the match clock.

use crate::models::provider::EventClock;

/// Monotonic ordering key: `(elapsed + extra) * 60 + second`.
///
/// Added-time events ("45+2'") therefore sort after every regular-time
/// event of their half, and events sharing a minute are ordered by the
/// seconds term. An event with no elapsed minute keys at 0.
pub fn sort_key(clock: &EventClock) -> i64 {
    match clock.elapsed {
        Some(elapsed) => {
            (elapsed + clock.extra.unwrap_or(0)) * 60 + clock.second.unwrap_or(0)
        }
        None => 0,
    }
}

/// Human-readable clock label: `42'`, `45+2'`, with a zero-padded
/// two-digit seconds suffix (`42'07"`) when seconds are known. No
/// elapsed minute produces the sentinel `-`.
pub fn time_label(clock: &EventClock) -> String {
    let Some(elapsed) = clock.elapsed else {
        return "-".to_string();
    };
    let mut label = match clock.extra {
        Some(extra) if extra > 0 => format!("{}+{}'", elapsed, extra),
        _ => format!("{}'", elapsed),
    };
    if let Some(second) = clock.second {
        label.push_str(&format!("{:02}\"", second));
    }
    label
}

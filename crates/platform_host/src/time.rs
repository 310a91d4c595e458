//! Time helpers shared across host contracts, the desktop clock, and ad-hoc window ids.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static LAST_ISSUED_TIMESTAMP_MS: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns a monotonic unix millisecond timestamp.
///
/// Values are strictly increasing within the current thread even when two calls land in the
/// same wall-clock millisecond, so they can disambiguate ids created in quick succession.
pub fn next_monotonic_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_ISSUED_TIMESTAMP_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        next
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Wall-clock hour/minute pair on a 24-hour dial.
pub struct ClockTime {
    /// Hour in `0..24`.
    pub hour: u32,
    /// Minute in `0..60`.
    pub minute: u32,
}

/// Reads the current wall-clock time.
///
/// Browser builds use the user's local time zone; native builds (tests, tooling) report UTC.
pub fn local_clock_time() -> ClockTime {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        ClockTime {
            hour: now.get_hours(),
            minute: now.get_minutes(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let minutes_since_epoch = unix_time_ms_now() / 60_000;
        ClockTime {
            hour: ((minutes_since_epoch / 60) % 24) as u32,
            minute: (minutes_since_epoch % 60) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_timestamps_never_repeat() {
        let first = next_monotonic_timestamp_ms();
        let second = next_monotonic_timestamp_ms();
        let third = next_monotonic_timestamp_ms();
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn local_clock_time_stays_on_the_dial() {
        let time = local_clock_time();
        assert!(time.hour < 24);
        assert!(time.minute < 60);
    }
}

//! Shared constants, simulation time and calendar helpers.

use bevy::prelude::*;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Days per Julian century (used by the secular rates of orbital elements)
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Mean obliquity of the ecliptic at J2000, in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439281;

/// J2000.0 epoch as Unix timestamp (January 1, 2000, 12:00 TT)
/// Note: This is approximate; TT differs from UTC by leap seconds
pub const J2000_UNIX: i64 = 946728000;

/// Simulation time resource: the instant every body is evaluated at.
///
/// Starts paused at the launch instant so the plot is a snapshot of "now".
#[derive(Resource, Clone, Debug)]
pub struct SimulationTime {
    /// Current time in seconds since J2000 epoch
    pub current: f64,
    /// Simulated days per real-world second while running
    pub scale: f64,
    /// Whether simulation is paused
    pub paused: bool,
    /// Initial time for reset functionality
    pub initial: f64,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self::at_j2000_seconds(current_j2000_seconds())
    }
}

impl SimulationTime {
    /// Create simulation time starting at a specific J2000 seconds value
    pub fn at_j2000_seconds(seconds: f64) -> Self {
        Self {
            current: seconds,
            scale: 1.0,
            paused: true,
            initial: seconds,
        }
    }

    /// Reset to initial time
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.paused = true;
    }
}

/// Convert Unix timestamp to seconds since J2000 epoch
pub fn unix_to_j2000_seconds(unix_timestamp: i64) -> f64 {
    (unix_timestamp - J2000_UNIX) as f64
}

/// Convert J2000 seconds to Unix timestamp
pub fn j2000_seconds_to_unix(j2000_seconds: f64) -> i64 {
    J2000_UNIX + j2000_seconds as i64
}

/// Seconds since the Unix epoch according to the system clock.
///
/// A clock set before 1970 reads as the epoch itself.
pub fn unix_now() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Get current time as J2000 seconds (using system clock)
pub fn current_j2000_seconds() -> f64 {
    unix_to_j2000_seconds(unix_now())
}

/// Format J2000 seconds as a human-readable date string.
/// Returns format: "YYYY-MM-DD HH:MM:SS UTC (approx)"
///
/// **Note:** This is an approximation for display purposes only.
/// - Does not account for leap seconds (~27 seconds cumulative since 1972)
/// - Does not convert from TT (Terrestrial Time) to UTC (~69 seconds offset)
pub fn j2000_seconds_to_date_string(j2000_seconds: f64) -> String {
    let unix_secs = j2000_seconds_to_unix(j2000_seconds);
    let (year, month, day) = days_to_ymd(unix_secs.div_euclid(86400));
    format!(
        "{:04}-{:02}-{:02} {} UTC (approx)",
        year,
        month,
        day,
        unix_to_clock_string(unix_secs)
    )
}

/// Time of day of a Unix timestamp as "HH:MM:SS" (UTC).
pub fn unix_to_clock_string(unix_secs: i64) -> String {
    let time_of_day = unix_secs.rem_euclid(86400);
    format!(
        "{:02}:{:02}:{:02}",
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Convert days since Unix epoch to year, month, day
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    // Algorithm for Gregorian calendar
    let remaining_days = days + 719468; // Days from year 0 to 1970

    let era = if remaining_days >= 0 {
        remaining_days / 146097
    } else {
        (remaining_days - 146096) / 146097
    };

    let day_of_era = (remaining_days - era * 146097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let year = (year_of_era as i64 + era * 400) as i32;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_to_j2000() {
        assert_eq!(unix_to_j2000_seconds(J2000_UNIX), 0.0);

        let one_day_later = J2000_UNIX + 86400;
        assert_eq!(unix_to_j2000_seconds(one_day_later), 86400.0);
    }

    #[test]
    fn test_j2000_to_unix() {
        assert_eq!(j2000_seconds_to_unix(0.0), J2000_UNIX);
        assert_eq!(j2000_seconds_to_unix(86400.0), J2000_UNIX + 86400);
    }

    #[test]
    fn test_date_string_j2000() {
        // J2000 epoch should be January 1, 2000, 12:00:00 UTC
        let date_str = j2000_seconds_to_date_string(0.0);
        assert!(date_str.contains("2000-01-01"), "Expected 2000-01-01, got {}", date_str);
        assert!(date_str.contains("12:00:00"), "Expected 12:00:00, got {}", date_str);
    }

    #[test]
    fn test_date_string_before_unix_epoch() {
        // 1969-12-31 23:59:59
        let j2000 = unix_to_j2000_seconds(-1);
        let date_str = j2000_seconds_to_date_string(j2000);
        assert!(date_str.starts_with("1969-12-31 23:59:59"), "got {}", date_str);
    }

    #[test]
    fn test_clock_string() {
        assert_eq!(unix_to_clock_string(0), "00:00:00");
        assert_eq!(unix_to_clock_string(3661), "01:01:01");
        assert_eq!(unix_to_clock_string(86399), "23:59:59");
    }

    #[test]
    fn test_simulation_time_default() {
        let sim_time = SimulationTime::default();
        assert!(sim_time.paused, "The plot starts as a snapshot of now");
        assert_eq!(sim_time.scale, 1.0);
        assert!(sim_time.current > 0.0); // We're past J2000
    }

    #[test]
    fn test_simulation_time_reset() {
        let mut sim_time = SimulationTime::at_j2000_seconds(100.0);
        sim_time.paused = false;
        sim_time.current = 5000.0;
        sim_time.reset();
        assert_eq!(sim_time.current, 100.0);
        assert!(sim_time.paused);
    }
}

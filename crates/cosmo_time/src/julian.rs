//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Standard Fliegel–Van Flandern integer algorithm for whole days plus a
//! fractional-day term. Valid for all dates after 1582-10-15 (Gregorian
//! reform), which comfortably covers the engine's operating range.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Minutes in one day, as a float for JD step arithmetic.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` may carry a fraction (e.g. `15.5` = 15th, 12:00 UT).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date back to a Gregorian calendar date.
///
/// Returns `(year, month, day_fraction)` where `day_fraction` carries the
/// time of day in its fractional part.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

    (year, month, day)
}

/// Number of days in a Gregorian calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_round_trip() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2000, 1));
        assert!((d - 1.5).abs() < 1e-9, "d = {d}");
    }

    #[test]
    fn known_epoch_1987() {
        // Meeus example 7.a: 1987-04-10.0 → JD 2446895.5
        let jd = calendar_to_jd(1987, 4, 10.0);
        assert!((jd - 2_446_895.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn round_trip_fractional() {
        let jd = calendar_to_jd(2024, 8, 24.75);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 8));
        assert!((d - 24.75).abs() < 1e-9, "d = {d}");
    }

    #[test]
    fn january_february_wrap() {
        let jd = calendar_to_jd(2023, 1, 31.0);
        let (y, m, d) = jd_to_calendar(jd + 1.0);
        assert_eq!((y, m, d as u32), (2023, 2, 1));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn jd_monotonic_across_year_boundary() {
        let a = calendar_to_jd(2023, 12, 31.0);
        let b = calendar_to_jd(2024, 1, 1.0);
        assert!((b - a - 1.0).abs() < 1e-9);
    }
}

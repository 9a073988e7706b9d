//! Unit conversion constants shared by every workout type.
//!
//! Workout-specific coefficients live on the workout types themselves
//! (see [`crate::training`]); everything here is a plain unit relation.

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Seconds in a minute.
pub const SEC_IN_MIN: f64 = 60.0;

/// Centimeters in a meter.
pub const CM_IN_M: f64 = 100.0;

/// Seconds in an hour.
pub const SEC_IN_H: f64 = MIN_IN_H * SEC_IN_MIN;

/// Decimal places kept in [`KMH_TO_MS`].
pub const KMH_TO_MS_PRECISION: i32 = 3;

/// Multiplier turning a speed in km/h into m/s.
///
/// `M_IN_KM / SEC_IN_H` rounded to [`KMH_TO_MS_PRECISION`] decimals. The
/// calorie coefficients were fitted against this rounded value.
pub const KMH_TO_MS: f64 = 0.278;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kmh_to_ms_is_rounded_unit_ratio() {
        let scale = 10_f64.powi(KMH_TO_MS_PRECISION);
        let rounded = (M_IN_KM / SEC_IN_H * scale).round() / scale;
        assert_eq!(KMH_TO_MS, rounded);
        assert_eq!(SEC_IN_H, 3600.0);
    }
}

//! Workout summary record and its fixed-template rendering.

use std::fmt;

use serde::Serialize;

/// Computed results for one processed reading.
///
/// Produced by [`Workout::summary`](crate::workout::Workout::summary) and
/// rendered through `Display`; the numeric fields keep full precision and are
/// rounded to three decimal places only at render time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    /// Display name of the workout type.
    pub workout: &'static str,

    /// Workout duration in hours.
    pub duration_h: f64,

    /// Covered distance in kilometers.
    pub distance_km: f64,

    /// Mean speed over the full duration, km/h.
    pub mean_speed_kmh: f64,

    /// Estimated energy expenditure in kilocalories.
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.workout, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn sample() -> WorkoutSummary {
        WorkoutSummary {
            workout: "Running",
            duration_h: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories_kcal: 699.75,
        }
    }

    #[test]
    fn renders_the_fixed_template() {
        assert_snapshot!(
            sample().to_string(),
            @"Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn rounds_fields_to_three_decimal_places() {
        let summary = WorkoutSummary {
            workout: "Swimming",
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        };
        assert_snapshot!(
            summary.to_string(),
            @"Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let summary = sample();
        assert_eq!(summary.to_string(), summary.to_string());
    }

    #[test]
    fn serializes_full_precision_values() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["workout"], "Running");
        assert_eq!(json["duration_h"], 1.0);
        assert_eq!(json["calories_kcal"], 699.75);
    }
}

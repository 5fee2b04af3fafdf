//! Values derived from a fetched observation
//!
//! Everything here is a pure function of the raw provider data so it can be
//! exercised without a store or a network.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::Observation;

/// Number of points in the trend graph.
pub const TREND_POINTS: usize = 8;

/// Offset of the first trend point below the current temperature.
const TREND_START_OFFSET: i32 = 4;

/// Round to the nearest integer, halves toward positive infinity.
///
/// Out-of-range readings saturate at the `i32` bounds.
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}

pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    round_half_up(f64::from(celsius) * 9.0 / 5.0 + 32.0)
}

/// Synthetic graph points around the rounded temperature.
///
/// Cosmetic placeholder: consecutive integers from `t - 4` to `t + 3`, not a
/// forecast.
pub fn trend_points(rounded_celsius: i32) -> Vec<i32> {
    let base = rounded_celsius.saturating_sub(TREND_START_OFFSET);
    (0..TREND_POINTS as i32).map(|i| base.saturating_add(i)).collect()
}

/// One short recommendation chosen from the latest reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Advisory {
    Rain,
    Cold,
    Heat,
    Wind,
    Humidity,
    Pleasant,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::Rain => "Rain expected \u{2013} carry umbrella \u{2614}",
            Advisory::Cold => "Cold weather \u{2013} keep yourself warm \u{1f9e5}",
            Advisory::Heat => "High heat today \u{2013} stay hydrated \u{1f4a7}",
            Advisory::Wind => "Strong winds \u{2013} drive carefully \u{1f32c}\u{fe0f}",
            Advisory::Humidity => "High humidity \u{2013} expect discomfort \u{1f613}",
            Advisory::Pleasant => "Pleasant climate \u{2013} enjoy your day \u{1f324}\u{fe0f}",
        }
    }
}

const WET_KEYWORDS: [&str; 3] = ["rain", "drizzle", "thunder"];

/// First matching rule wins; checked in this order:
/// wet description, cold, heat, wind, humidity.
pub fn advisory_for(observation: &Observation) -> Advisory {
    let condition = observation.description.to_lowercase();

    if WET_KEYWORDS.iter().any(|kw| condition.contains(kw)) {
        Advisory::Rain
    } else if observation.temperature < 10.0 {
        Advisory::Cold
    } else if observation.temperature > 35.0 {
        Advisory::Heat
    } else if observation.wind_speed > 20.0 {
        Advisory::Wind
    } else if observation.humidity > 80 {
        Advisory::Humidity
    } else {
        Advisory::Pleasant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(description: &str, temperature: f64, wind: f64, humidity: i64) -> Observation {
        Observation {
            icon_code: "01d".into(),
            description: description.into(),
            temperature,
            humidity,
            wind_speed: wind,
            location: "Pune".into(),
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(27.4), 27);
        assert_eq!(round_half_up(27.5), 28);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.0), 0);
        // floor(x + 0.5) would give 1 here
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(-0.5), 0);
    }

    #[test]
    fn test_extreme_readings_saturate() {
        assert_eq!(round_half_up(1e12), i32::MAX);
        assert_eq!(round_half_up(-1e12), i32::MIN);
        assert_eq!(trend_points(i32::MIN)[0], i32::MIN);
        assert_eq!(trend_points(i32::MIN)[7], i32::MIN + 7);
        assert_eq!(trend_points(i32::MAX)[7], i32::MAX);
        assert_eq!(trend_points(i32::MAX)[0], i32::MAX - 4);
    }

    #[test]
    fn test_fahrenheit_reference_points() {
        assert_eq!(celsius_to_fahrenheit(0), 32);
        assert_eq!(celsius_to_fahrenheit(100), 212);
        assert_eq!(celsius_to_fahrenheit(-40), -40);
        // 21 * 1.8 + 32 = 69.8
        assert_eq!(celsius_to_fahrenheit(21), 70);
    }

    #[test]
    fn test_trend_is_eight_consecutive_points() {
        assert_eq!(trend_points(20), vec![16, 17, 18, 19, 20, 21, 22, 23]);
        assert_eq!(trend_points(-1), vec![-5, -4, -3, -2, -1, 0, 1, 2]);
        assert_eq!(trend_points(0).len(), TREND_POINTS);
    }

    #[test]
    fn test_rain_beats_every_other_rule() {
        let obs = observation("light rain", 5.0, 25.0, 90);
        assert_eq!(advisory_for(&obs), Advisory::Rain);
    }

    #[test]
    fn test_wet_keywords_are_case_insensitive() {
        assert_eq!(advisory_for(&observation("Thunderstorm", 25.0, 0.0, 40)), Advisory::Rain);
        assert_eq!(advisory_for(&observation("DRIZZLE", 25.0, 0.0, 40)), Advisory::Rain);
    }

    #[test]
    fn test_rule_priority_after_rain() {
        assert_eq!(advisory_for(&observation("clear sky", 9.9, 30.0, 95)), Advisory::Cold);
        assert_eq!(advisory_for(&observation("clear sky", 35.1, 30.0, 95)), Advisory::Heat);
        assert_eq!(advisory_for(&observation("clear sky", 25.0, 20.5, 95)), Advisory::Wind);
        assert_eq!(advisory_for(&observation("clear sky", 25.0, 20.0, 81)), Advisory::Humidity);
        assert_eq!(advisory_for(&observation("clear sky", 25.0, 20.0, 80)), Advisory::Pleasant);
    }

    #[test]
    fn test_thresholds_use_raw_temperature() {
        // 9.6 rounds to 10 for display but is still cold
        assert_eq!(advisory_for(&observation("haze", 9.6, 0.0, 50)), Advisory::Cold);
        assert_eq!(advisory_for(&observation("haze", 10.0, 0.0, 50)), Advisory::Pleasant);
        assert_eq!(advisory_for(&observation("haze", 35.0, 0.0, 50)), Advisory::Pleasant);
    }
}

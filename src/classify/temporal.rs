use chrono::Weekday;

use crate::classify::dates::Clock;
use crate::models::{LightCondition, TemporalConditions, TimeOfDay, TrafficVolume};

/// Whether `hour` falls inside a rush window (08:00–11:00 or 17:00–20:00).
/// Shared by the route classifier and the time-based traffic fallback.
pub fn is_rush_hour(hour: u32) -> bool {
    (8..11).contains(&hour) || (17..20).contains(&hour)
}

pub fn time_of_day(hour: u32) -> TimeOfDay {
    match hour {
        6..=11 => TimeOfDay::Morning,
        12..=16 => TimeOfDay::Afternoon,
        17..=20 => TimeOfDay::Evening,
        _ => TimeOfDay::Night,
    }
}

/// Ambient light from the hour alone. The form also knows
/// `Night_without_lights`, but nothing in the inputs can tell an unlit road
/// apart, so night always maps to the lit variant.
pub fn light_condition(hour: u32) -> LightCondition {
    if (6..18).contains(&hour) {
        LightCondition::Daylight
    } else {
        LightCondition::NightWithLights
    }
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Traffic volume estimated from the clock alone, used when no route data
/// is available to say better.
pub fn time_based_traffic(hour: u32, weekend: bool) -> TrafficVolume {
    if weekend {
        if (10..22).contains(&hour) {
            TrafficVolume::Medium
        } else {
            TrafficVolume::Low
        }
    } else if is_rush_hour(hour) {
        TrafficVolume::High
    } else if (11..17).contains(&hour) || (20..22).contains(&hour) {
        TrafficVolume::Medium
    } else {
        TrafficVolume::Low
    }
}

/// Bundle every clock-derived form value.
pub fn temporal_conditions(clock: &Clock) -> TemporalConditions {
    let weekend = is_weekend(clock.weekday);
    TemporalConditions {
        time_of_day: time_of_day(clock.hour),
        is_weekend: weekend,
        traffic_volume: time_based_traffic(clock.hour, weekend),
        light_condition: light_condition(clock.hour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rush_window_boundaries() {
        assert!(!is_rush_hour(7));
        assert!(is_rush_hour(8));
        assert!(is_rush_hour(10));
        assert!(!is_rush_hour(11));
        assert!(!is_rush_hour(16));
        assert!(is_rush_hour(17));
        assert!(is_rush_hour(19));
        assert!(!is_rush_hour(20));
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(time_of_day(6), TimeOfDay::Morning);
        assert_eq!(time_of_day(11), TimeOfDay::Morning);
        assert_eq!(time_of_day(12), TimeOfDay::Afternoon);
        assert_eq!(time_of_day(16), TimeOfDay::Afternoon);
        assert_eq!(time_of_day(17), TimeOfDay::Evening);
        assert_eq!(time_of_day(20), TimeOfDay::Evening);
        assert_eq!(time_of_day(21), TimeOfDay::Night);
        assert_eq!(time_of_day(5), TimeOfDay::Night);
    }

    #[test]
    fn test_light_condition_boundaries() {
        assert_eq!(light_condition(5), LightCondition::NightWithLights);
        assert_eq!(light_condition(6), LightCondition::Daylight);
        assert_eq!(light_condition(17), LightCondition::Daylight);
        assert_eq!(light_condition(18), LightCondition::NightWithLights);
        assert_eq!(light_condition(23), LightCondition::NightWithLights);
    }

    #[test]
    fn test_weekday_traffic() {
        assert_eq!(time_based_traffic(9, false), TrafficVolume::High);
        assert_eq!(time_based_traffic(18, false), TrafficVolume::High);
        assert_eq!(time_based_traffic(13, false), TrafficVolume::Medium);
        assert_eq!(time_based_traffic(21, false), TrafficVolume::Medium);
        assert_eq!(time_based_traffic(3, false), TrafficVolume::Low);
        assert_eq!(time_based_traffic(7, false), TrafficVolume::Low);
    }

    #[test]
    fn test_weekend_traffic() {
        assert_eq!(time_based_traffic(9, true), TrafficVolume::Low);
        assert_eq!(time_based_traffic(12, true), TrafficVolume::Medium);
        assert_eq!(time_based_traffic(21, true), TrafficVolume::Medium);
        assert_eq!(time_based_traffic(23, true), TrafficVolume::Low);
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(Weekday::Sat));
        assert!(is_weekend(Weekday::Sun));
        assert!(!is_weekend(Weekday::Mon));
        assert!(!is_weekend(Weekday::Fri));
    }
}

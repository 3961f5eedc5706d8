use crate::classify::temporal::light_condition;
use crate::models::{
    RoadSurface, VisibilityBand, WeatherConditions, WeatherKind, WeatherSample,
};

/// Visibility assumed when the provider omits the reading.
const DEFAULT_VISIBILITY_METERS: f64 = 10_000.0;

/// Classify a current-conditions reading into the form's weather labels.
///
/// The condition checks run in a fixed order and the first match wins:
/// precipitation outranks snow, snow outranks fog, and cloud cover is only
/// consulted when no precipitation text matched at all.
pub fn classify_weather(sample: &WeatherSample, hour: u32) -> WeatherConditions {
    let text = sample.condition_text.to_lowercase();

    let (weather, road_surface) = if text.contains("rain")
        || sample.precipitation_1h.unwrap_or(0.0) > 0.0
    {
        (WeatherKind::Rainy, RoadSurface::Wet)
    } else if sample.is_snow || text.contains("snow") {
        (WeatherKind::Snowy, RoadSurface::Icy)
    } else if text.contains("mist") || text.contains("fog") {
        (WeatherKind::Foggy, RoadSurface::Wet)
    } else if text.contains("storm") || text.contains("thunder") {
        (WeatherKind::Stormy, RoadSurface::Wet)
    } else if sample.cloud_cover_pct.unwrap_or(0.0) > 70.0 {
        (WeatherKind::Cloudy, RoadSurface::Dry)
    } else {
        (WeatherKind::Clear, RoadSurface::Dry)
    };

    WeatherConditions {
        weather,
        road_surface,
        visibility: visibility_band(
            sample.visibility_meters.unwrap_or(DEFAULT_VISIBILITY_METERS),
        ),
        light_condition: light_condition(hour),
    }
}

fn visibility_band(meters: f64) -> VisibilityBand {
    if meters < 1000.0 {
        VisibilityBand::Low
    } else if meters < 5000.0 {
        VisibilityBand::Medium
    } else {
        VisibilityBand::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LightCondition;

    const NOON: u32 = 12;

    fn sample(text: &str) -> WeatherSample {
        WeatherSample {
            condition_text: text.to_string(),
            ..WeatherSample::default()
        }
    }

    #[test]
    fn test_rain_outranks_cloud_cover() {
        let reading = WeatherSample {
            cloud_cover_pct: Some(80.0),
            ..sample("light rain")
        };
        let conditions = classify_weather(&reading, NOON);
        assert_eq!(conditions.weather, WeatherKind::Rainy);
        assert_eq!(conditions.road_surface, RoadSurface::Wet);
    }

    #[test]
    fn test_precipitation_without_rain_text() {
        let reading = WeatherSample {
            precipitation_1h: Some(0.4),
            ..sample("partly cloudy")
        };
        assert_eq!(classify_weather(&reading, NOON).weather, WeatherKind::Rainy);
    }

    #[test]
    fn test_snow_flag_and_text() {
        let reading = WeatherSample {
            is_snow: true,
            ..sample("overcast")
        };
        let conditions = classify_weather(&reading, NOON);
        assert_eq!(conditions.weather, WeatherKind::Snowy);
        assert_eq!(conditions.road_surface, RoadSurface::Icy);

        let conditions = classify_weather(&sample("light snow showers"), NOON);
        assert_eq!(conditions.weather, WeatherKind::Snowy);
    }

    #[test]
    fn test_fog_and_storm() {
        assert_eq!(classify_weather(&sample("mist"), NOON).weather, WeatherKind::Foggy);
        assert_eq!(classify_weather(&sample("Fog"), NOON).weather, WeatherKind::Foggy);
        let stormy = classify_weather(&sample("thundery outbreaks"), NOON);
        assert_eq!(stormy.weather, WeatherKind::Stormy);
        assert_eq!(stormy.road_surface, RoadSurface::Wet);
    }

    #[test]
    fn test_cloud_cover_threshold() {
        let reading = WeatherSample {
            cloud_cover_pct: Some(71.0),
            ..sample("overcast")
        };
        assert_eq!(classify_weather(&reading, NOON).weather, WeatherKind::Cloudy);

        let reading = WeatherSample {
            cloud_cover_pct: Some(70.0),
            ..sample("partly sunny")
        };
        assert_eq!(classify_weather(&reading, NOON).weather, WeatherKind::Clear);
    }

    #[test]
    fn test_visibility_buckets() {
        let reading = WeatherSample {
            visibility_meters: Some(800.0),
            ..sample("mist")
        };
        assert_eq!(classify_weather(&reading, NOON).visibility, VisibilityBand::Low);

        let reading = WeatherSample {
            visibility_meters: Some(3000.0),
            ..sample("clear")
        };
        assert_eq!(classify_weather(&reading, NOON).visibility, VisibilityBand::Medium);

        // Missing reading defaults high.
        assert_eq!(classify_weather(&sample("clear"), NOON).visibility, VisibilityBand::High);
    }

    #[test]
    fn test_light_condition_follows_hour() {
        assert_eq!(
            classify_weather(&sample("clear"), 10).light_condition,
            LightCondition::Daylight
        );
        assert_eq!(
            classify_weather(&sample("clear"), 19).light_condition,
            LightCondition::NightWithLights
        );
        assert_eq!(
            classify_weather(&sample("clear"), 23).light_condition,
            LightCondition::NightWithLights
        );
    }

    #[test]
    fn test_missing_readings_default_clear_and_dry() {
        let conditions = classify_weather(&sample(""), 22);
        assert_eq!(conditions.weather, WeatherKind::Clear);
        assert_eq!(conditions.road_surface, RoadSurface::Dry);
        assert_eq!(conditions.visibility, VisibilityBand::High);
        assert_eq!(conditions.light_condition, LightCondition::NightWithLights);
    }

    #[test]
    fn test_idempotent() {
        let reading = WeatherSample {
            cloud_cover_pct: Some(90.0),
            visibility_meters: Some(2500.0),
            ..sample("moderate rain")
        };
        assert_eq!(classify_weather(&reading, 9), classify_weather(&reading, 9));
    }
}

//! Canned provider fixtures so the full pipeline runs without network
//! access (`--mock`).

use crate::models::{RouteSample, RouteSegment, WeatherSample};

/// Sample OCR output for an Indian driving licence.
pub fn license_text() -> String {
    "GOVERNMENT OF INDIA
     DRIVING LICENCE

     Name: RAJESH KUMAR SHARMA
     S/O: RAM KUMAR SHARMA

     DOB: 15-08-1995

     DL No: MH-0120210012345

     ISSUE DATE: 20-01-2021
     VALID TILL: 19-01-2041

     COV: MCWG, LMV

     Blood Group: O+
     Address: Mumbai, Maharashtra"
        .to_string()
}

/// An 8.5 km suburban hop that touches a highway.
pub fn route() -> RouteSample {
    RouteSample {
        distance_km: 8.5,
        duration_min: 20.0,
        summary: "Via Main Road and Highway 1".to_string(),
        segments: vec![
            RouteSegment {
                instruction: "Head north on Main Street".to_string(),
                road_name: "Main Street".to_string(),
            },
            RouteSegment {
                instruction: "Turn right onto Highway 1".to_string(),
                road_name: "Highway 1".to_string(),
            },
            RouteSegment {
                instruction: "Turn left at junction".to_string(),
                road_name: "Park Road".to_string(),
            },
        ],
    }
}

/// A clear-sky reading.
pub fn weather() -> WeatherSample {
    WeatherSample {
        condition_text: "Clear sky".to_string(),
        cloud_cover_pct: Some(10.0),
        visibility_meters: Some(10_000.0),
        precipitation_1h: None,
        is_snow: false,
        temp_c: Some(28.0),
        feels_like_c: Some(30.0),
        humidity_pct: Some(60.0),
        pressure_hpa: Some(1013.0),
        wind_speed_kmph: Some(12.6),
        area_name: Some("Mumbai".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{license, route as route_classify, weather as weather_classify};
    use chrono::NaiveDate;

    // The fixtures should carry the whole pipeline end to end.

    #[test]
    fn test_mock_license_parses() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let parsed = license::parse_license_text(&license_text(), today);
        assert_eq!(parsed.full_name.as_deref(), Some("RAJESH KUMAR SHARMA"));
        assert!(parsed.is_valid);
        assert_eq!(parsed.vehicle_types.len(), 2);
    }

    #[test]
    fn test_mock_route_classifies() {
        let conditions = route_classify::classify_route(&route(), 14);
        // Three named segments, one of them a highway: city roads win.
        assert_eq!(
            conditions.road_type,
            crate::models::RoadType::CityRoad
        );
    }

    #[test]
    fn test_mock_weather_classifies() {
        let conditions = weather_classify::classify_weather(&weather(), 14);
        assert_eq!(conditions.weather, crate::models::WeatherKind::Clear);
    }
}

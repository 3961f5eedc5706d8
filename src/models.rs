use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Driver details parsed out of license OCR text.
///
/// Every field is best-effort: a pattern that never matched leaves its field
/// `None`. `vehicle_types` is never empty (defaults to `[Car]`) and
/// `is_valid` is `false` whenever the expiry date could not be determined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedLicense {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub age: Option<u32>,
    pub license_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub driving_experience_years: Option<u32>,
    pub is_valid: bool,
    pub vehicle_types: Vec<VehicleCategory>,
}

impl Default for ParsedLicense {
    fn default() -> Self {
        ParsedLicense {
            full_name: None,
            date_of_birth: None,
            age: None,
            license_number: None,
            issue_date: None,
            expiry_date: None,
            driving_experience_years: None,
            is_valid: false,
            vehicle_types: vec![VehicleCategory::Car],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleCategory {
    Bike,
    Car,
    Truck,
    Bus,
    #[serde(rename = "Auto-rickshaw")]
    AutoRickshaw,
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleCategory::Bike => write!(f, "Bike"),
            VehicleCategory::Car => write!(f, "Car"),
            VehicleCategory::Truck => write!(f, "Truck"),
            VehicleCategory::Bus => write!(f, "Bus"),
            VehicleCategory::AutoRickshaw => write!(f, "Auto-rickshaw"),
        }
    }
}

/// One step of a directions-provider route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteSegment {
    pub instruction: String,
    pub road_name: String,
}

/// Raw route telemetry as returned by the directions provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteSample {
    pub distance_km: f64,
    pub duration_min: f64,
    /// Provider route summary ("Via Main Road and Highway 1"); display only.
    pub summary: String,
    pub segments: Vec<RouteSegment>,
}

/// Categorical road/traffic labels for the form. All fields are always
/// populated; the classifier defaults rather than omits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConditions {
    pub road_type: RoadType,
    pub area_type: AreaType,
    pub traffic_volume: TrafficVolume,
    pub road_design: RoadDesign,
    pub speed_limit_kph: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadType {
    Highway,
    #[serde(rename = "City_Road")]
    CityRoad,
    #[serde(rename = "Rural_Road")]
    RuralRoad,
}

impl std::fmt::Display for RoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoadType::Highway => write!(f, "Highway"),
            RoadType::CityRoad => write!(f, "City_Road"),
            RoadType::RuralRoad => write!(f, "Rural_Road"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaType {
    Urban,
    Suburban,
    Rural,
}

impl std::fmt::Display for AreaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AreaType::Urban => write!(f, "Urban"),
            AreaType::Suburban => write!(f, "Suburban"),
            AreaType::Rural => write!(f, "Rural"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficVolume {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TrafficVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrafficVolume::Low => write!(f, "Low"),
            TrafficVolume::Medium => write!(f, "Medium"),
            TrafficVolume::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadDesign {
    Straight,
    Curved,
    Junction,
}

impl std::fmt::Display for RoadDesign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoadDesign::Straight => write!(f, "Straight"),
            RoadDesign::Curved => write!(f, "Curved"),
            RoadDesign::Junction => write!(f, "Junction"),
        }
    }
}

/// Raw current-conditions reading from the weather provider.
///
/// Only `condition_text`, `cloud_cover_pct`, `visibility_meters`,
/// `precipitation_1h`, and `is_snow` feed the classifier; the rest is
/// carried for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSample {
    pub condition_text: String,
    pub cloud_cover_pct: Option<f64>,
    pub visibility_meters: Option<f64>,
    pub precipitation_1h: Option<f64>,
    pub is_snow: bool,
    pub temp_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub wind_speed_kmph: Option<f64>,
    pub area_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub weather: WeatherKind,
    pub road_surface: RoadSurface,
    pub visibility: VisibilityBand,
    pub light_condition: LightCondition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherKind {
    Clear,
    Cloudy,
    Rainy,
    Snowy,
    Foggy,
    Stormy,
}

impl std::fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherKind::Clear => write!(f, "Clear"),
            WeatherKind::Cloudy => write!(f, "Cloudy"),
            WeatherKind::Rainy => write!(f, "Rainy"),
            WeatherKind::Snowy => write!(f, "Snowy"),
            WeatherKind::Foggy => write!(f, "Foggy"),
            WeatherKind::Stormy => write!(f, "Stormy"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadSurface {
    Dry,
    Wet,
    Icy,
}

impl std::fmt::Display for RoadSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoadSurface::Dry => write!(f, "Dry"),
            RoadSurface::Wet => write!(f, "Wet"),
            RoadSurface::Icy => write!(f, "Icy"),
        }
    }
}

/// Visibility bucket; the form uses lowercase values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityBand {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for VisibilityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisibilityBand::Low => write!(f, "low"),
            VisibilityBand::Medium => write!(f, "medium"),
            VisibilityBand::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightCondition {
    Daylight,
    #[serde(rename = "Night_with_lights")]
    NightWithLights,
    /// Present in the form schema but never derived: nothing in the inputs
    /// distinguishes an unlit road from a lit one.
    #[serde(rename = "Night_without_lights")]
    NightWithoutLights,
}

impl std::fmt::Display for LightCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LightCondition::Daylight => write!(f, "Daylight"),
            LightCondition::NightWithLights => write!(f, "Night_with_lights"),
            LightCondition::NightWithoutLights => write!(f, "Night_without_lights"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOfDay::Morning => write!(f, "Morning"),
            TimeOfDay::Afternoon => write!(f, "Afternoon"),
            TimeOfDay::Evening => write!(f, "Evening"),
            TimeOfDay::Night => write!(f, "Night"),
        }
    }
}

/// Clock-derived form values, always available even when every provider
/// fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalConditions {
    pub time_of_day: TimeOfDay,
    pub is_weekend: bool,
    pub traffic_volume: TrafficVolume,
    pub light_condition: LightCondition,
}

/// A `lat,lon` pair as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl std::str::FromStr for Coordinates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(2, ',').collect();
        if parts.len() != 2 {
            return Err(format!("expected LAT,LON, got `{}`", s));
        }
        let lat: f64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| format!("invalid latitude `{}`", parts[0].trim()))?;
        let lon: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| format!("invalid longitude `{}`", parts[1].trim()))?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {} out of range", lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude {} out of range", lon));
        }
        Ok(Coordinates { lat, lon })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4},{:.4}", self.lat, self.lon)
    }
}

/// A route sample together with the labels derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteProfile {
    pub sample: RouteSample,
    pub conditions: RouteConditions,
}

/// A weather sample together with the labels derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherProfile {
    pub sample: WeatherSample,
    pub conditions: WeatherConditions,
}

/// Everything the run managed to derive, in form-field shape. Sections are
/// `None` when their signal was not requested or its provider failed; those
/// fields stay manual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormProfile {
    pub driver: Option<ParsedLicense>,
    /// Vehicle category from an explicit `--vehicle-class` code.
    pub vehicle_override: Option<VehicleCategory>,
    pub route: Option<RouteProfile>,
    pub weather: Option<WeatherProfile>,
    pub temporal: TemporalConditions,
}

use crate::classify::temporal::is_rush_hour;
use crate::models::{
    AreaType, RoadDesign, RoadType, RouteConditions, RouteSample, TrafficVolume,
};

const HIGHWAY_TOKENS: &[&str] = &[
    "highway",
    "expressway",
    "nh-",
    "nh ",
    "sh-",
    "sh ",
    "national highway",
    "state highway",
];

const VILLAGE_TOKENS: &[&str] = &[
    "village",
    "gram",
    "rural",
    "gaon",
    "panchayat",
    "taluka",
    "khasra",
    "unpaved",
    "dirt",
    "mdr",
];

const JUNCTION_TOKENS: &[&str] = &["roundabout", "junction", "intersection", "cross"];
const TURN_TOKENS: &[&str] = &["turn", "left", "right"];

/// Per-segment evidence tallied over the whole route.
#[derive(Debug, Default)]
struct SegmentCounts {
    highway: usize,
    city: usize,
    village: usize,
    junctions: usize,
    turns: usize,
    total: usize,
    road_name_text: String,
}

/// Classify a route into the form's road/area/traffic/design labels.
///
/// Two strategies: when the provider returned usable road names, vocabulary
/// counts over the segments decide ("evidence path"); otherwise average
/// speed and distance carry the classification ("fallback path").
/// Directions providers routinely omit road names, so the fallback is a
/// first-class citizen, not an error case.
pub fn classify_route(sample: &RouteSample, hour: u32) -> RouteConditions {
    if sample.distance_km <= 0.0 && sample.duration_min <= 0.0 && sample.segments.is_empty() {
        return default_conditions();
    }

    let counts = tally_segments(sample);

    // "Usable" means more than a token or two of actual road-name text.
    if counts.road_name_text.trim().len() > 10 {
        classify_from_evidence(sample, &counts, hour)
    } else {
        classify_from_speed(sample, hour)
    }
}

/// Labels applied when the provider returned no legs at all.
pub fn default_conditions() -> RouteConditions {
    RouteConditions {
        road_type: RoadType::CityRoad,
        area_type: AreaType::Urban,
        traffic_volume: TrafficVolume::Medium,
        road_design: RoadDesign::Straight,
        speed_limit_kph: 60,
    }
}

fn tally_segments(sample: &RouteSample) -> SegmentCounts {
    let mut counts = SegmentCounts::default();

    for segment in &sample.segments {
        let name = segment.road_name.to_lowercase();
        let instruction = segment.instruction.to_lowercase();

        counts.total += 1;
        counts.road_name_text.push(' ');
        counts.road_name_text.push_str(&name);

        if HIGHWAY_TOKENS.iter().any(|t| name.contains(t))
            || instruction.contains("highway")
            || instruction.contains("expressway")
        {
            counts.highway += 1;
        } else if VILLAGE_TOKENS.iter().any(|t| name.contains(t))
            || name.is_empty()
            || name == "unnamed road"
        {
            counts.village += 1;
        } else {
            counts.city += 1;
        }

        if JUNCTION_TOKENS.iter().any(|t| instruction.contains(t)) {
            counts.junctions += 1;
        }
        if TURN_TOKENS.iter().any(|t| instruction.contains(t)) {
            counts.turns += 1;
        }
    }

    counts
}

fn classify_from_evidence(
    sample: &RouteSample,
    counts: &SegmentCounts,
    hour: u32,
) -> RouteConditions {
    let total = counts.total.max(1) as f64;
    let village_share = counts.village as f64 / total * 100.0;
    let highway_share = counts.highway as f64 / total * 100.0;

    let (road_type, speed_limit_kph) =
        if village_share > 30.0 || counts.village > counts.city {
            (RoadType::RuralRoad, 40)
        } else if highway_share > 40.0 || counts.highway > counts.city {
            (RoadType::Highway, 80)
        } else {
            (RoadType::CityRoad, 60)
        };

    let area_type = match road_type {
        RoadType::RuralRoad => AreaType::Rural,
        RoadType::Highway => {
            if sample.distance_km < 10.0 {
                AreaType::Suburban
            } else {
                AreaType::Rural
            }
        }
        RoadType::CityRoad => {
            if sample.distance_km < 5.0 {
                AreaType::Urban
            } else if sample.distance_km < 15.0 {
                AreaType::Suburban
            } else {
                AreaType::Rural
            }
        }
    };

    let traffic_volume = if area_type == AreaType::Rural || road_type == RoadType::RuralRoad {
        TrafficVolume::Low
    } else if area_type == AreaType::Urban && road_type == RoadType::CityRoad {
        if is_rush_hour(hour) {
            TrafficVolume::High
        } else {
            TrafficVolume::Medium
        }
    } else {
        // Highways and suburban stretches both sit in the middle.
        TrafficVolume::Medium
    };

    let turn_density = counts.turns as f64 / total;
    let road_design = if counts.junctions > 5 {
        RoadDesign::Junction
    } else if turn_density > 0.5 || counts.turns > 10 {
        RoadDesign::Curved
    } else {
        RoadDesign::Straight
    };

    RouteConditions {
        road_type,
        area_type,
        traffic_volume,
        road_design,
        speed_limit_kph,
    }
}

fn classify_from_speed(sample: &RouteSample, hour: u32) -> RouteConditions {
    let distance_km = sample.distance_km;
    let avg_speed = if sample.duration_min > 0.0 {
        distance_km / sample.duration_min * 60.0
    } else {
        0.0
    };

    let highway_area = if distance_km > 15.0 {
        AreaType::Rural
    } else {
        AreaType::Suburban
    };

    let (road_type, speed_limit_kph, area_type, traffic_volume) = if avg_speed > 50.0 {
        (RoadType::Highway, 80, highway_area, TrafficVolume::Medium)
    } else if avg_speed > 25.0 && distance_km > 10.0 {
        if is_rush_hour(hour) {
            // Long route crawling at rush hour: a congested highway.
            (RoadType::Highway, 80, highway_area, TrafficVolume::High)
        } else {
            (
                RoadType::CityRoad,
                60,
                AreaType::Suburban,
                TrafficVolume::Medium,
            )
        }
    } else if avg_speed < 25.0 && distance_km < 8.0 {
        (RoadType::CityRoad, 60, AreaType::Urban, TrafficVolume::High)
    } else if distance_km > 15.0 {
        (
            RoadType::Highway,
            80,
            AreaType::Suburban,
            TrafficVolume::Medium,
        )
    } else {
        (RoadType::RuralRoad, 40, AreaType::Rural, TrafficVolume::Low)
    };

    // Taking twice as long as the distance suggests means the road winds.
    let road_design = if sample.duration_min > distance_km * 2.0 {
        RoadDesign::Curved
    } else {
        RoadDesign::Straight
    };

    RouteConditions {
        road_type,
        area_type,
        traffic_volume,
        road_design,
        speed_limit_kph,
    }
}

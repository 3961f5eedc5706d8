use crate::models::VehicleCategory;

/// Map a license vehicle-class code (COV entry) to a coarse category.
///
/// Exact, case-sensitive lookup over the known codes; anything else falls
/// back to `Car`, so the function is total over arbitrary input.
pub fn classify_vehicle_code(code: &str) -> VehicleCategory {
    match code.trim() {
        "MC" | "MCWG" => VehicleCategory::Bike,
        "LMV" | "LMV-NT" => VehicleCategory::Car,
        "HMV" | "HGV" => VehicleCategory::Truck,
        "Transport" | "PSV" => VehicleCategory::Bus,
        _ => VehicleCategory::Car,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(classify_vehicle_code("MC"), VehicleCategory::Bike);
        assert_eq!(classify_vehicle_code("MCWG"), VehicleCategory::Bike);
        assert_eq!(classify_vehicle_code("LMV"), VehicleCategory::Car);
        assert_eq!(classify_vehicle_code("LMV-NT"), VehicleCategory::Car);
        assert_eq!(classify_vehicle_code("HMV"), VehicleCategory::Truck);
        assert_eq!(classify_vehicle_code("HGV"), VehicleCategory::Truck);
        assert_eq!(classify_vehicle_code("Transport"), VehicleCategory::Bus);
        assert_eq!(classify_vehicle_code("PSV"), VehicleCategory::Bus);
    }

    #[test]
    fn test_unknown_defaults_to_car() {
        assert_eq!(classify_vehicle_code(""), VehicleCategory::Car);
        assert_eq!(classify_vehicle_code("TRACTOR"), VehicleCategory::Car);
        // Case-sensitive: lowercase is not a known code.
        assert_eq!(classify_vehicle_code("mcwg"), VehicleCategory::Car);
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(classify_vehicle_code("  MCWG "), VehicleCategory::Bike);
    }
}

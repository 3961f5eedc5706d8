use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{FormProfile, TrafficVolume, VehicleCategory};

/// Render a colored terminal report of the derived form values.
pub fn render(profile: &FormProfile, verbose: bool, quiet: bool) -> Result<()> {
    let driver_auto = profile.driver.is_some();
    let route_auto = profile.route.is_some();
    let weather_auto = profile.weather.is_some();
    let auto_count =
        [driver_auto, route_auto, weather_auto].iter().filter(|f| **f).count();

    if quiet {
        println!("Sections auto-filled: {}/3 (+ time)", auto_count);
        return Ok(());
    }

    println!("\n {} v{}", "risk-fillr".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Form sections auto-filled: {}/3\n", auto_count);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "AUTO-FILL SUMMARY".bold());
    println!(" │  {:<48} │", summary_line("Driver", driver_auto, "license"));
    println!(" │  {:<48} │", summary_line("Road & traffic", route_auto, "route"));
    println!(" │  {:<48} │", summary_line("Environment", weather_auto, "weather"));
    println!(" │  {:<48} │", summary_line("Time", true, "clock"));
    println!(" └────────────────────────────────────────────────────┘\n");

    if let Some(driver) = &profile.driver {
        println!(" {} Driver:\n", "[LICENSE]".cyan().bold());
        render_driver_table(profile, verbose);
        println!();
    } else if let Some(category) = profile.vehicle_override {
        println!(" {} Driver:\n", "[MANUAL]".cyan().bold());
        let mut table = section_table();
        table.add_row(vec![
            Cell::new("Vehicle type"),
            Cell::new(category.to_string()),
            Cell::new("manual"),
        ]);
        println!("{}\n", table);
    }

    if let Some(route) = &profile.route {
        println!(" {} Road & traffic:\n", "[ROUTE]".cyan().bold());
        let mut table = section_table();
        let conditions = &route.conditions;
        table.add_row(field_row("Road type", conditions.road_type, "route"));
        table.add_row(field_row("Area type", conditions.area_type, "route"));
        table.add_row(vec![
            Cell::new("Traffic volume"),
            traffic_cell(conditions.traffic_volume),
            Cell::new("route"),
        ]);
        table.add_row(field_row("Road design", conditions.road_design, "route"));
        table.add_row(field_row(
            "Speed limit",
            format!("{} km/h", conditions.speed_limit_kph),
            "route",
        ));
        if verbose {
            table.add_row(field_row(
                "Distance",
                format!("{:.1} km", route.sample.distance_km),
                "route",
            ));
            table.add_row(field_row(
                "Duration",
                format!("{:.0} min", route.sample.duration_min),
                "route",
            ));
            if !route.sample.summary.is_empty() {
                table.add_row(field_row("Route", &route.sample.summary, "route"));
            }
        }
        println!("{}\n", table);
    }

    if let Some(weather) = &profile.weather {
        println!(" {} Environment:\n", "[WEATHER]".cyan().bold());
        let mut table = section_table();
        let conditions = &weather.conditions;
        table.add_row(field_row("Weather", conditions.weather, "weather"));
        table.add_row(field_row("Road surface", conditions.road_surface, "weather"));
        table.add_row(field_row("Visibility", conditions.visibility, "weather"));
        table.add_row(field_row(
            "Light condition",
            conditions.light_condition,
            "clock",
        ));
        if verbose {
            let sample = &weather.sample;
            if let Some(t) = sample.temp_c {
                table.add_row(field_row("Temperature", format!("{:.0} °C", t), "weather"));
            }
            if let Some(h) = sample.humidity_pct {
                table.add_row(field_row("Humidity", format!("{:.0} %", h), "weather"));
            }
            if let Some(w) = sample.wind_speed_kmph {
                table.add_row(field_row("Wind", format!("{:.1} km/h", w), "weather"));
            }
            if let Some(area) = &sample.area_name {
                table.add_row(field_row("Station area", area, "weather"));
            }
        }
        println!("{}\n", table);
    }

    println!(" {} Time:\n", "[CLOCK]".cyan().bold());
    let mut table = section_table();
    let temporal = &profile.temporal;
    table.add_row(field_row("Time of day", temporal.time_of_day, "clock"));
    table.add_row(field_row(
        "Weekend",
        if temporal.is_weekend { "yes" } else { "no" },
        "clock",
    ));
    table.add_row(vec![
        Cell::new("Traffic volume"),
        traffic_cell(temporal.traffic_volume),
        Cell::new("clock"),
    ]);
    table.add_row(field_row("Light condition", temporal.light_condition, "clock"));
    println!("{}", table);

    Ok(())
}

fn summary_line(section: &str, auto: bool, source: &str) -> String {
    if auto {
        format!("{}  {:<14}: auto ({})", "✓".green(), section, source)
    } else {
        format!("{}  {:<14}: manual entry", "–".dimmed(), section)
    }
}

fn section_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);
    table
}

fn field_row(field: &str, value: impl ToString, source: &str) -> Vec<Cell> {
    vec![
        Cell::new(field),
        Cell::new(value.to_string()),
        Cell::new(source),
    ]
}

fn traffic_cell(volume: TrafficVolume) -> Cell {
    let color = match volume {
        TrafficVolume::Low => Color::Green,
        TrafficVolume::Medium => Color::Yellow,
        TrafficVolume::High => Color::Red,
    };
    Cell::new(volume.to_string()).fg(color)
}

fn render_driver_table(profile: &FormProfile, verbose: bool) {
    // Checked by the caller.
    let Some(driver) = &profile.driver else { return };

    let mut table = section_table();

    table.add_row(field_row("Age", opt_display(driver.age), "license"));
    table.add_row(field_row(
        "Driving experience",
        driver
            .driving_experience_years
            .map(|y| format!("{} years", y))
            .unwrap_or_else(|| "—".to_string()),
        "license",
    ));

    let (validity, validity_color) = if driver.is_valid {
        ("yes", Color::Green)
    } else {
        ("no", Color::Red)
    };
    table.add_row(vec![
        Cell::new("License valid"),
        Cell::new(validity).fg(validity_color),
        Cell::new("license"),
    ]);

    // An explicit --vehicle-class code overrides the parsed classes.
    let (vehicle, vehicle_source): (VehicleCategory, &str) = match profile.vehicle_override {
        Some(category) => (category, "manual"),
        None => (
            driver
                .vehicle_types
                .first()
                .copied()
                .unwrap_or(VehicleCategory::Car),
            "license",
        ),
    };
    table.add_row(field_row("Vehicle type", vehicle, vehicle_source));

    if verbose {
        table.add_row(field_row("Name", opt_display(driver.full_name.clone()), "license"));
        table.add_row(field_row(
            "License number",
            opt_display(driver.license_number.clone()),
            "license",
        ));
        table.add_row(field_row("Date of birth", opt_display(driver.date_of_birth), "license"));
        table.add_row(field_row("Issue date", opt_display(driver.issue_date), "license"));
        table.add_row(field_row("Expiry date", opt_display(driver.expiry_date), "license"));
        let classes: Vec<String> =
            driver.vehicle_types.iter().map(|v| v.to_string()).collect();
        table.add_row(field_row("All classes", classes.join(", "), "license"));
    }

    println!("{}", table);
}

fn opt_display<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "—".to_string())
}

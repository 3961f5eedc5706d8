use chrono::NaiveDate;
use regex::Regex;

use crate::classify::dates::{parse_flexible_date, years_between};
use crate::models::{ParsedLicense, VehicleCategory};

// Per-field pattern batteries, tried in order; the first match wins and the
// later entries are fallbacks only. All patterns assume the normalized text:
// whitespace collapsed to single spaces, everything uppercased.

const NAME_PATTERNS: &[&str] = &[
    r"NAME[:\s]+([A-Z][A-Z\s]{2,40}?)\s+(?:S/D/W|S/O|D/O|W/O|ADD|DOB|D\.O\.B|PIN)",
    r"NAME[:\s]+([A-Z][A-Z\s]{2,40}?)\s+[A-Z]/[A-Z]/[A-Z]",
    r"(?:NAME|नाम)[:\s]+([A-Z][A-Z\s]{2,40})",
    r"S/D/W\s+OF[:\s]+([A-Z\s]+?)(?:ADD|DOB|PIN)",
    r"S/O[:\s]+([A-Z\s]+?)(?:ADD|DOB|D\.O\.B|PIN)",
    r"D/O[:\s]+([A-Z\s]+?)(?:ADD|DOB|D\.O\.B|PIN)",
    r"W/O[:\s]+([A-Z\s]+?)(?:ADD|DOB|D\.O\.B|PIN)",
];

/// OCR noise that disqualifies a name candidate (stock-photo watermarks).
const NAME_NOISE: &[&str] = &["GETTYIMAGES", "CREDIT"];

const DOB_PATTERNS: &[&str] = &[
    r"DOB[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"D\.O\.B[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"DATE OF BIRTH[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"BIRTH[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
];

const LICENSE_NUMBER_PATTERNS: &[&str] = &[
    r"(?:DL|LICENSE|LIC)[\s#NO:]*([A-Z]{2}[-\s]?\d{2}[-\s]?\d{4,}[-\s]?\d{7})",
    r"(?:DL|LICENSE|LIC)[\s#NO:]*([A-Z0-9-]{10,})",
];

const ISSUE_PATTERNS: &[&str] = &[
    r"DOI[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"(?:ISSUE|ISSUED|ISS)[\sDATE:]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"(?:FROM|VALID FROM)[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"DATE OF ISSUE[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
];

/// Best-effort fallback: the first date after the vehicle-class section.
/// Nothing validates that it actually denotes issuance.
const ISSUE_FALLBACK_PATTERN: &str = r"COV.*?(\d{2}-\d{2}-\d{4})";

const EXPIRY_PATTERNS: &[&str] = &[
    r"VALID TILL[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"(?:VALID|VALIDITY|EXPIRY|EXPIRES|TILL|UPTO)[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"VALID UPTO[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
    r"(?:EXP|EXPIRY DATE)[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
];

const VEHICLE_PATTERNS: &[&str] = &[
    r"COV[:\s]*([A-Z,\s]+?)(?:ADDRESS|BLOOD|BG|\d{2}[-/]\d{2})",
    r"CLASS[:\s]*([A-Z,\s]+?)(?:ADDRESS|BLOOD|BG|\d{2}[-/]\d{2})",
];

/// Parse raw OCR text into a [`ParsedLicense`].
///
/// Total over arbitrary input: a field whose patterns never match stays
/// `None`, and an empty or unrecognizable blob comes back fully defaulted
/// rather than as an error. `today` is injected so age and tenure math is
/// reproducible.
pub fn parse_license_text(raw: &str, today: NaiveDate) -> ParsedLicense {
    // One normalization pass; every pattern above assumes it.
    let text = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();

    let date_of_birth =
        first_capture(&text, DOB_PATTERNS).as_deref().and_then(parse_flexible_date);

    // A labelled issue date wins; the COV-adjacent date is only consulted
    // when no label matched at all.
    let issue_date = first_capture(&text, ISSUE_PATTERNS)
        .or_else(|| first_capture(&text, &[ISSUE_FALLBACK_PATTERN]))
        .as_deref()
        .and_then(parse_flexible_date);

    let expiry_date =
        first_capture(&text, EXPIRY_PATTERNS).as_deref().and_then(parse_flexible_date);

    ParsedLicense {
        full_name: extract_name(&text),
        age: date_of_birth.map(|dob| years_between(dob, today)),
        date_of_birth,
        license_number: first_capture(&text, LICENSE_NUMBER_PATTERNS),
        driving_experience_years: issue_date.map(|issued| years_between(issued, today)),
        issue_date,
        is_valid: expiry_date.map(|expiry| expiry > today).unwrap_or(false),
        expiry_date,
        vehicle_types: extract_vehicle_types(&text),
    }
}

/// Run an ordered pattern battery, returning the first non-empty capture.
fn first_capture(text: &str, patterns: &[&str]) -> Option<String> {
    for pattern in patterns {
        let Ok(re) = Regex::new(pattern) else { continue };
        if let Some(m) = re.captures(text).and_then(|caps| caps.get(1)) {
            let value = m.as_str().trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn extract_name(text: &str) -> Option<String> {
    for pattern in NAME_PATTERNS {
        let Ok(re) = Regex::new(pattern) else { continue };
        let Some(m) = re.captures(text).and_then(|caps| caps.get(1)) else {
            continue;
        };
        let name = m.as_str().trim();
        if name.len() > 3
            && !name.chars().any(|c| c.is_ascii_digit())
            && !NAME_NOISE.iter().any(|noise| name.contains(noise))
        {
            return Some(name.to_string());
        }
    }

    // Last resort: whatever sits between NAME and the relation marker.
    first_capture(text, &[r"NAME\s+([A-Z\s]+?)\s+S/D/W"])
}

fn extract_vehicle_types(text: &str) -> Vec<VehicleCategory> {
    // Structured COV/CLASS capture first; scanning the whole text is the
    // fallback when the section delimiters did not survive OCR.
    let mut types = first_capture(text, VEHICLE_PATTERNS)
        .map(|cov| categories_in(&cov))
        .unwrap_or_default();

    if types.is_empty() {
        types = categories_in(text);
    }
    if types.is_empty() {
        types.push(VehicleCategory::Car);
    }
    types
}

/// Independent substring checks for known class codes; one category per
/// code found, each appended at most once.
fn categories_in(text: &str) -> Vec<VehicleCategory> {
    let mut types = Vec::new();
    if text.contains("MCWG") || text.contains("MC") {
        types.push(VehicleCategory::Bike);
    }
    if text.contains("LMV") || text.contains("CAR") {
        types.push(VehicleCategory::Car);
    }
    if text.contains("HMV") || text.contains("TRUCK") {
        types.push(VehicleCategory::Truck);
    }
    if text.contains("TRANS") || text.contains("BUS") {
        types.push(VehicleCategory::Bus);
    }
    if text.contains("AUTO") {
        types.push(VehicleCategory::AutoRickshaw);
    }
    types
}

//! Display Formatters
//!
//! Small text helpers for listing cells.

use chrono::NaiveDateTime;

use crate::models::AiModel;

/// "Free", "Freemium", "$12.5 per month", or the raw pricing type
pub fn format_pricing(model: &AiModel) -> String {
    match model.pricing_type.as_deref() {
        Some("FREE") => return "Free".to_string(),
        Some("FREEMIUM") => return "Freemium".to_string(),
        _ => {}
    }
    if let Some(price) = model.model_price {
        return match model.pricing_unit.as_deref() {
            Some(unit) if !unit.is_empty() => format!("${} {}", price, unit),
            _ => format!("${}", price),
        };
    }
    model.pricing_type.clone().unwrap_or_default()
}

/// `IMAGE_GENERATION` -> `IMAGE GENERATION`
pub fn format_category(category: Option<&str>) -> String {
    match category {
        Some(c) if !c.is_empty() => c.replace('_', " "),
        _ => "Unknown".to_string(),
    }
}

pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r != 0.0 => format!("{:.1}", r),
        _ => "N/A".to_string(),
    }
}

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// Backend timestamps come as `yyyy-MM-dd HH:mm:ss` or ISO-8601 without zone.
/// Unparseable values are shown verbatim.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "N/A".to_string();
    };
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

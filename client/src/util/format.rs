//! Display helpers for geolocation records.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use store::types::GeoRecord;

/// Placeholder shown for fields the lookup provider did not return.
pub const MISSING: &str = "—";

/// Labeled rows shown in the details panel and the history modal, in display order.
pub fn detail_rows(record: &GeoRecord) -> Vec<(&'static str, String)> {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_owned());
    vec![
        ("IP", record.ip.clone()),
        ("City", field(&record.city)),
        ("Region", field(&record.region)),
        ("Country", field(&record.country)),
        ("Location", field(&record.loc)),
        ("Org", field(&record.org)),
        ("Postal", field(&record.postal)),
        ("Timezone", field(&record.timezone)),
    ]
}

/// Marker caption: `"city, region"`, or whichever part is known.
pub fn place_label(record: &GeoRecord) -> String {
    match (record.city.as_deref(), record.region.as_deref()) {
        (Some(city), Some(region)) => format!("{city}, {region}"),
        (Some(only), None) | (None, Some(only)) => only.to_owned(),
        (None, None) => record.ip.clone(),
    }
}

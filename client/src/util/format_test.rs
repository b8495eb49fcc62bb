use super::*;

fn record() -> GeoRecord {
    GeoRecord {
        ip: "8.8.8.8".to_owned(),
        city: Some("Mountain View".to_owned()),
        region: Some("California".to_owned()),
        country: Some("US".to_owned()),
        loc: Some("37.4056,-122.0775".to_owned()),
        org: None,
        postal: Some("94043".to_owned()),
        timezone: Some("America/Los_Angeles".to_owned()),
    }
}

#[test]
fn detail_rows_follow_display_order() {
    let labels: Vec<_> = detail_rows(&record()).into_iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["IP", "City", "Region", "Country", "Location", "Org", "Postal", "Timezone"]);
}

#[test]
fn detail_rows_mark_missing_fields() {
    let rows = detail_rows(&record());
    assert_eq!(rows[1], ("City", "Mountain View".to_owned()));
    assert_eq!(rows[5], ("Org", MISSING.to_owned()));
}

#[test]
fn place_label_joins_city_and_region() {
    assert_eq!(place_label(&record()), "Mountain View, California");
}

#[test]
fn place_label_falls_back_to_ip() {
    let bare = GeoRecord { city: None, region: None, ..record() };
    assert_eq!(place_label(&bare), "8.8.8.8");
}

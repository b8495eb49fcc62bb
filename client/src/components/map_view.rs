//! Embedded OpenStreetMap view with a marker on the record's location.

use leptos::prelude::*;
use store::types::GeoRecord;

use crate::util::format::place_label;
use crate::util::map::{embed_url, view_url};

/// Renders nothing when the record has no usable `loc`.
#[component]
pub fn MapView(record: GeoRecord) -> impl IntoView {
    let coordinates = match record.coordinates() {
        Ok(coordinates) => coordinates,
        Err(err) => {
            log::debug!("no map for {}: {err}", record.ip);
            return ().into_any();
        }
    };
    let label = place_label(&record);

    view! {
        <figure class="map-view">
            <iframe
                class="map-view__frame"
                title=label.clone()
                src=embed_url(coordinates)
                {..leptos::attr::loading("lazy")}
            ></iframe>
            <figcaption class="map-view__caption">
                <a href=view_url(coordinates) target="_blank" rel="noopener">
                    {label}
                </a>
                " © OpenStreetMap contributors"
            </figcaption>
        </figure>
    }
    .into_any()
}

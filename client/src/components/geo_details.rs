//! Labeled field list for one geolocation record.

use leptos::prelude::*;
use store::types::GeoRecord;

use crate::util::format::detail_rows;

#[component]
pub fn GeoDetails(record: GeoRecord) -> impl IntoView {
    view! {
        <dl class="geo-details">
            {detail_rows(&record)
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="geo-details__row">
                            <dt class="geo-details__label">{label}</dt>
                            <dd class="geo-details__value">{value}</dd>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
}

//! Keyword badge rendered through the shared tone table.

use leptos::prelude::*;

use crate::util::badge::tone_for;

/// Badge showing a status or priority keyword in its tone. The keyword is
/// also the label.
#[component]
pub fn StatusBadge(keyword: &'static str) -> impl IntoView {
    view! { <span class=tone_for(keyword).badge_class()>{keyword}</span> }
}

/// Neutral badge for free text (amenities, stat deltas, role tags).
#[component]
pub fn PlainBadge(#[prop(into)] label: String) -> impl IntoView {
    view! { <span class="badge badge--secondary">{label}</span> }
}

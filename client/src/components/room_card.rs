//! Room cards for both dashboards.

use leptos::prelude::*;

use crate::components::status_badge::{PlainBadge, StatusBadge};
use crate::state::records::{AdminRoom, RoomStatus, StudentRoom, room_subtitle};
use crate::util::badge::status_icon;

/// Student view: status, amenities, and a request button on free rooms.
#[component]
pub fn StudentRoomCard(room: StudentRoom) -> impl IntoView {
    let available = room.status == RoomStatus::Available;
    view! {
        <div class="card card--hover">
            <div class="card__header">
                <div class="card__row">
                    <h3 class="card__title">{room.id}</h3>
                    <div class="card__badges">
                        <span class=format!("icon icon--{}", status_icon(room.status)) aria-hidden="true"></span>
                        <StatusBadge keyword=room.status.as_str()/>
                    </div>
                </div>
                <p class="card__description">{room_subtitle(room.kind, room.floor)}</p>
            </div>
            <div class="card__content">
                <div class="badge-row">
                    {room.amenities.iter().map(|a| view! { <PlainBadge label=*a/> }).collect_view()}
                </div>
                <Show when=move || available>
                    <button class="btn btn--primary btn--block btn--sm">"Request Allocation"</button>
                </Show>
            </div>
        </div>
    }
}

/// Admin view: occupants plus edit and status controls.
#[component]
pub fn AdminRoomCard(room: AdminRoom) -> impl IntoView {
    view! {
        <div class="card card--hover">
            <div class="card__header">
                <div class="card__row">
                    <h3 class="card__title">{room.id}</h3>
                    <StatusBadge keyword=room.status.as_str()/>
                </div>
                <p class="card__description">{room_subtitle(room.kind, room.floor)}</p>
            </div>
            <div class="card__content">
                {room
                    .occupants
                    .map(|occupants| {
                        view! {
                            <div class="room-occupants">
                                <p class="room-occupants__label">"Occupants:"</p>
                                <p class="text--muted">{occupants}</p>
                            </div>
                        }
                    })}
                <div class="card__actions">
                    <button class="btn btn--outline btn--sm">
                        <span class="icon icon--edit" aria-hidden="true"></span>
                        "Edit"
                    </button>
                    <select class="select--compact" aria-label="Status">
                        <option value="" selected=true disabled=true>"Status"</option>
                        {RoomStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}

use dioxus::prelude::*;

use crate::model::character::LifeStatus;

pub fn badge_class(status: LifeStatus) -> &'static str {
    match status {
        LifeStatus::Alive => "badge-success",
        LifeStatus::Dead => "badge-error",
        LifeStatus::Unknown => "badge-ghost",
    }
}

pub fn dot_class(status: LifeStatus) -> &'static str {
    match status {
        LifeStatus::Alive => "bg-success",
        LifeStatus::Dead => "bg-error",
        LifeStatus::Unknown => "bg-base-content/50",
    }
}

#[component]
pub fn StatusBadge(status: String) -> Element {
    let class = badge_class(LifeStatus::from_status(&status));

    rsx!(
        span { class: "badge badge-soft {class}",
            "{status}"
        }
    )
}

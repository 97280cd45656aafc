use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            Self::Small => "loading-sm",
            Self::Medium => "loading-md",
            Self::Large => "loading-lg",
        }
    }
}

#[component]
pub fn LoadingSpinner(#[props(default)] size: SpinnerSize, class: Option<&'static str>) -> Element {
    let size = size.class();
    let class = class.unwrap_or("");

    rsx!(
        div { class: "flex items-center justify-center",
            span { class: "loading loading-spinner text-success {size} {class}" }
        }
    )
}

use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{CharacterDetail, CharacterList, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    CharacterList {},

    #[route("/character/:id")]
    CharacterDetail { id: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#![allow(non_snake_case)]

fn main() {
    dioxus::launch(rickdex::client::App);
}

//! Route state machines kept apart from rendering so they can run without a virtual DOM.

pub mod character_list;

pub use character_list::{CharacterListController, PageRequest};

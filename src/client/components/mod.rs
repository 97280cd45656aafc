pub mod character_card;
pub mod character_table;
pub mod loading_spinner;
pub mod message_card;
pub mod navbar;
pub mod page;
pub mod status_badge;

pub use character_card::CharacterCard;
pub use character_table::CharacterTable;
pub use loading_spinner::{LoadingSpinner, SpinnerSize};
pub use message_card::MessageCard;
pub use navbar::Navbar;
pub use page::Page;
pub use status_badge::StatusBadge;

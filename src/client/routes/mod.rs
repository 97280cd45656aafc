pub mod character_detail;
pub mod character_list;
pub mod not_found;

pub use character_detail::CharacterDetail;
pub use character_list::CharacterList;
pub use not_found::NotFound;

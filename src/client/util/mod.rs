pub mod pagination;
pub mod time;
pub mod view_mode;

pub use view_mode::ViewMode;

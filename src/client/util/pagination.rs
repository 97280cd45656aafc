//! Page navigation rules for the character listing.
//!
//! The page number maps 1:1 onto the API's `page` query parameter. "Next" is only available
//! when the API reported a next-page pointer for the current page, "previous" only above the
//! first page.

use crate::model::character::PageInfo;

pub const FIRST_PAGE: u32 = 1;

pub fn can_go_next(info: &PageInfo) -> bool {
    info.has_next()
}

pub fn can_go_previous(page: u32) -> bool {
    page > FIRST_PAGE
}

/// The page after `page`, if the current page's metadata has a next pointer
pub fn next_page(page: u32, info: &PageInfo) -> Option<u32> {
    if can_go_next(info) {
        page.checked_add(1)
    } else {
        None
    }
}

pub fn previous_page(page: u32) -> Option<u32> {
    if can_go_previous(page) {
        Some(page - 1)
    } else {
        None
    }
}

/// Header label, `...` until the total page count is known
pub fn page_label(page: u32, info: Option<&PageInfo>) -> String {
    match info {
        Some(info) => format!("Page {} of {}", page, info.pages),
        None => format!("Page {} of ...", page),
    }
}

//! JSON payloads shaped like the character API's responses.

use serde_json::{json, Value};

use crate::constant::{FIXTURE_API_URL, PAGE_SIZE};

/// Create a character payload with default test values.
///
/// # Arguments
/// - `id` - Character ID, also used in the image and resource URLs
pub fn mock_character(id: i64) -> Value {
    mock_character_with(id, &format!("Character {}", id), "Alive")
}

/// Create a character payload with the given name and status.
pub fn mock_character_with(id: i64, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {
            "name": "Earth (C-137)",
            "url": format!("{}/location/1", FIXTURE_API_URL)
        },
        "location": {
            "name": "Citadel of Ricks",
            "url": format!("{}/location/3", FIXTURE_API_URL)
        },
        "image": format!("{}/character/avatar/{}.jpeg", FIXTURE_API_URL, id),
        "episode": [
            format!("{}/episode/1", FIXTURE_API_URL),
            format!("{}/episode/2", FIXTURE_API_URL)
        ],
        "url": format!("{}/character/{}", FIXTURE_API_URL, id),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

/// Create a listing page payload.
///
/// Page `page` of `pages` holds a full page of characters with consecutive IDs starting at
/// `(page - 1) * PAGE_SIZE + 1`. `next` and `prev` are set exactly as the API sets them:
/// absent on the last and first page respectively.
pub fn mock_character_page(page: u32, pages: u32) -> Value {
    let first_id = i64::from((page - 1) * PAGE_SIZE + 1);
    let results: Vec<Value> = (first_id..first_id + i64::from(PAGE_SIZE))
        .map(mock_character)
        .collect();

    let next = (page < pages).then(|| format!("{}/character?page={}", FIXTURE_API_URL, page + 1));
    let prev = (page > 1).then(|| format!("{}/character?page={}", FIXTURE_API_URL, page - 1));

    json!({
        "info": {
            "count": pages * PAGE_SIZE,
            "pages": pages,
            "next": next,
            "prev": prev
        },
        "results": results
    })
}

/// Error body the API returns alongside non-2xx statuses.
pub fn mock_error(message: &str) -> Value {
    json!({ "error": message })
}

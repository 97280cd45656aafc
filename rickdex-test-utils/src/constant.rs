//! Shared values for character API fixtures.

/// Base URL used inside fixture payloads for resource pointers.
///
/// Matches the public API so `next`/`prev`/`url` fields look like real responses. Requests
/// in tests go to the mockito server instead.
pub static FIXTURE_API_URL: &str = "https://rickandmortyapi.com/api";

/// Page size of the public API's character listing.
pub const PAGE_SIZE: u32 = 20;

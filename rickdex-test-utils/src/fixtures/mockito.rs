//! Character API mock endpoint creation utilities.
//!
//! Each endpoint is registered with the test's mockito server and kept in
//! [`TestSetup::mocks`](crate::TestSetup::mocks), so `assert_mocks` can verify it was called
//! the expected number of times.

use mockito::Matcher;
use serde_json::Value;

use crate::fixtures::{
    factory::{mock_character, mock_character_page, mock_error},
    CharacterApiFixtures,
};

impl<'a> CharacterApiFixtures<'a> {
    /// Create a mock endpoint for one page of the character listing.
    ///
    /// Sets up `GET /character?page={page}` returning [`mock_character_page`].
    ///
    /// # Arguments
    /// - `page` - Page number matched against the `page` query parameter
    /// - `pages` - Total page count reported in the response metadata
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `&mut Self` - The fixtures, for registering further endpoints
    pub fn create_page_endpoint(&mut self, page: u32, pages: u32, expected_requests: usize) -> &mut Self {
        self.create_json_endpoint(
            "/character",
            Some(page),
            200,
            mock_character_page(page, pages),
            expected_requests,
        )
    }

    /// Create a mock endpoint for a single character.
    pub fn create_character_endpoint(&mut self, id: i64, expected_requests: usize) -> &mut Self {
        let url = format!("/character/{}", id);

        self.create_json_endpoint(&url, None, 200, mock_character(id), expected_requests)
    }

    /// Create a mock endpoint answering `GET /character/{id}` with an API error body.
    pub fn create_character_error_endpoint(
        &mut self,
        id: i64,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> &mut Self {
        let url = format!("/character/{}", id);

        self.create_json_endpoint(&url, None, status, mock_error(message), expected_requests)
    }

    /// Create a mock endpoint answering `GET /character?page={page}` with an API error body.
    pub fn create_page_error_endpoint(
        &mut self,
        page: u32,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> &mut Self {
        self.create_json_endpoint(
            "/character",
            Some(page),
            status,
            mock_error(message),
            expected_requests,
        )
    }

    fn create_json_endpoint(
        &mut self,
        url: &str,
        page: Option<u32>,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> &mut Self {
        let query = match page {
            Some(page) => Matcher::UrlEncoded("page".to_string(), page.to_string()),
            None => Matcher::Any,
        };

        let mock = self
            .setup
            .server
            .mock("GET", url)
            .match_query(query)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();
        self.setup.mocks.push(mock);

        self
    }
}

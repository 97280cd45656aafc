pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod query;
pub mod router;
pub mod routes;
pub mod util;

pub use app::App;

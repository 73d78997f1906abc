//! Serves a single due-date parameterized JavaScript file over HTTP.
//!
//! `GET /{due_date}` validates the date, substitutes it into a template
//! loaded once at startup, and returns the rendered script. `GET /` is a
//! heartbeat. Requests are rate-limited per client IP.

pub mod config;
pub mod date;
pub mod handlers;
pub mod rate_limit;
pub mod router;
pub mod state;
pub mod template;

pub use state::AppState;

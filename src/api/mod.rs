//! # API Module
//!
//! HTTP endpoints for the temporary local web server splcli runs during
//! authentication.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server and completes the PKCE flow by exchanging the
//!   authorization code for an access token.
//! - [`health`] - Health check returning application status and version.
//!
//! The module is built on the [Axum](https://docs.rs/axum) web framework;
//! each endpoint is an async handler wired up in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;

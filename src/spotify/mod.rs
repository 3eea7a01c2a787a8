//! # Spotify Integration Module
//!
//! This module is the integration layer between splcli and the Spotify Web
//! API. It handles authentication and all HTTP communication, exposing the
//! operations the command handlers and resolvers consume as plain async
//! request/response calls.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── User & Player (current user, currently playing)
//!     ├── Track Operations (lookup, search)
//!     └── Playlist Operations (list, create, modify, unfollow)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - the authenticated user
//! - `GET /me/player/currently-playing` - playback snapshot
//! - `GET /tracks/{id}` - track lookup by ID
//! - `GET /search?type=track` - track search by name
//! - `GET /me/playlists` - the user's playlist collection (follows `next`)
//! - `GET /playlists/{id}/tracks` - a playlist's contents (follows `next`)
//! - `POST /playlists/{id}/tracks` - add tracks
//! - `DELETE /playlists/{id}/tracks` - remove tracks
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `DELETE /playlists/{id}/followers` - unfollow a playlist
//! - `POST /api/token` - token exchange and refresh
//!
//! ## Error Handling
//!
//! Every call is a single blocking round trip from the caller's point of
//! view: a non-success status or network failure maps to
//! [`crate::types::CliError::RemoteCallFailed`] and propagates unchanged.
//! There is no retry, backoff or rate-limit handling in this layer.
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 PKCE flow: code verifier/challenge
//! generation, a temporary local callback server, browser launch, token
//! exchange and persistence. All other submodules load the stored token via
//! [`crate::management::TokenManager`], which refreshes it transparently
//! before expiry.

pub mod auth;
pub mod player;
pub mod playlists;
pub mod tracks;
pub mod user;

//! # CLI Module
//!
//! The user-facing command layer of splcli. Each function here backs one
//! subcommand and follows the same shape: resolve any named playlist/track
//! inputs through [`crate::management`], perform exactly one mutating or
//! primary read call against [`crate::spotify`], and emit a confirmation
//! line or a formatted table.
//!
//! ## Commands
//!
//! ### Authentication
//! - [`auth`] - OAuth 2.0 PKCE flow against the Spotify accounts service
//!
//! ### Track inspection
//! - [`now`] - show the currently playing track
//! - [`show`] - show a track by ID or URL
//!
//! ### Playlist management
//! - [`playlists`] - list the user's playlists
//! - [`list`] - list a playlist's tracks
//! - [`new`] / [`del`] / [`clear`] - create, unfollow, empty a playlist
//! - [`add_current`] / [`add_by_id`] / [`add_by_name`] / [`remove`] -
//!   membership edits by playback state, ID/URL or name
//!
//! ## Error presentation
//!
//! Handlers propagate resolver and remote-call errors unchanged and hand
//! them to the `error!` macro: the message is printed and the process exits
//! non-zero. Informational lines printed before the failure stay visible;
//! there is no retry or partial-success handling.

mod auth;
mod playlist;
mod track;

pub use auth::auth;
pub use playlist::add_by_id;
pub use playlist::add_by_name;
pub use playlist::add_current;
pub use playlist::clear;
pub use playlist::del;
pub use playlist::list;
pub use playlist::new;
pub use playlist::playlists;
pub use playlist::remove;
pub use track::now;
pub use track::show;

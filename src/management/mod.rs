mod auth;
mod playlist;
mod track;

pub use auth::TokenManager;
pub use playlist::find_track_in_playlist;
pub use playlist::resolve_playlist;
pub use track::resolve_track_by_name;

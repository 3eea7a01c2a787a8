use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// The authenticated user, as returned by `GET /me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

impl User {
    /// Human-facing name, falling back to the account ID when the profile
    /// has no display name set.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

/// A single track. Always a read-only snapshot of remote state at the time
/// of one command invocation; never cached across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub album: Album,
    pub artists: Vec<TrackArtist>,
    pub duration_ms: u64,
    pub popularity: u32,
    #[serde(default)]
    pub explicit: bool,
    pub preview_url: Option<String>,
}

impl Track {
    /// Name of the primary (first-listed) artist.
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(|a| a.name.as_str()).unwrap_or("")
    }

    /// The `spotify:track:<id>` URI used by the add/remove endpoints.
    pub fn uri(&self) -> String {
        format!("spotify:track:{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlayingResponse {
    pub item: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<SearchTracks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<Track>,
}

/// A playlist owned or followed by the current user. Identity is the opaque
/// `id`; `name` is only a best-effort human-facing lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
    pub public: Option<bool>,
    #[serde(default)]
    pub collaborative: bool,
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

/// One page of `GET /me/playlists`; `next` carries the follow-up URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
}

/// A track's membership in a playlist's current contents. The API yields
/// `track: null` for entries that are episodes or no longer available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackEntry {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackPage {
    pub items: Vec<PlaylistTrackEntry>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTracksRequest {
    pub tracks: Vec<RemoveTrackRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTrackRef {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: String,
    pub name: String,
    pub album: String,
    pub artist: String,
    pub duration: String,
    pub popularity: u32,
    pub explicit: bool,
    pub preview: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub public: bool,
    pub collaborative: bool,
    pub tracks: u64,
}

#[derive(Tabled)]
pub struct PlaylistTrackTableRow {
    pub id: String,
    pub name: String,
    pub album: String,
    pub artist: String,
    pub popularity: u32,
}

/// Error taxonomy of the CLI. Resolver and remote-call failures are
/// propagated unchanged up to the command handler, which prints the message
/// and exits non-zero; there is no local recovery or retry anywhere.
#[derive(Debug)]
pub enum CliError {
    /// The input contained the Spotify domain marker but did not parse as a URL.
    InvalidUrl(url::ParseError),
    /// The input parsed as a URL but its path is not `/track/<id>` shaped.
    UnrecognizedUrlShape(String),
    /// No playlist of the queried name exists in the user's collection.
    PlaylistNotFound(String),
    /// A track search returned no candidates.
    TrackNotFound(String),
    /// Neither the parsed ID nor the literal name matched a playlist entry.
    TrackNotFoundInPlaylist { query: String, playlist: String },
    /// The currently-playing endpoint reported no active track (HTTP 204).
    NothingPlaying,
    /// Any failure from the Spotify Web API collaborator, including auth,
    /// network and not-found responses.
    RemoteCallFailed(reqwest::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::InvalidUrl(e) => write!(f, "invalid URL: {}", e),
            CliError::UnrecognizedUrlShape(input) => {
                write!(f, "URL does not contain a valid track path: {}", input)
            }
            CliError::PlaylistNotFound(name) => write!(f, "playlist not found: {}", name),
            CliError::TrackNotFound(name) => write!(f, "track not found: {}", name),
            CliError::TrackNotFoundInPlaylist { query, playlist } => {
                write!(f, "track {} not found in playlist {}", query, playlist)
            }
            CliError::NothingPlaying => write!(f, "no track is currently playing"),
            CliError::RemoteCallFailed(e) => write!(f, "Spotify request failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidUrl(e) => Some(e),
            CliError::RemoteCallFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(err: reqwest::Error) -> Self {
        CliError::RemoteCallFailed(err)
    }
}

use splcli::types::{
    Album, CliError, Playlist, PlaylistOwner, PlaylistTrackEntry, PlaylistTracksRef, Track,
    TrackArtist,
};
use splcli::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, popularity: u32) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        album: Album {
            id: format!("{}_album_id", id),
            name: "A Night at the Opera".to_string(),
        },
        artists: vec![TrackArtist {
            id: format!("{}_artist_id", id),
            name: "Queen".to_string(),
        }],
        duration_ms: 273_000,
        popularity,
        explicit: false,
        preview_url: None,
    }
}

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        owner: PlaylistOwner {
            display_name: Some("tester".to_string()),
        },
        public: Some(true),
        collaborative: false,
        tracks: PlaylistTracksRef { total: 0 },
    }
}

fn entry(track: Track) -> PlaylistTrackEntry {
    PlaylistTrackEntry { track: Some(track) }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should be deterministic - same input produces same output
    assert!(!challenge.is_empty());
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_track_id_extracts_id_from_url() {
    let result =
        parse_track_id("https://open.spotify.com/track/2b7VhCSKWZAFDrDPKTJ1z2?si=xyz").unwrap();
    assert_eq!(result, "2b7VhCSKWZAFDrDPKTJ1z2");

    // Without query parameters
    let result = parse_track_id("https://open.spotify.com/track/2b7VhCSKWZAFDrDPKTJ1z2").unwrap();
    assert_eq!(result, "2b7VhCSKWZAFDrDPKTJ1z2");

    // Extra trailing segments are tolerated; the second segment wins
    let result = parse_track_id("https://open.spotify.com/track/abc123/extra").unwrap();
    assert_eq!(result, "abc123");
}

#[test]
fn test_parse_track_id_returns_non_urls_unchanged() {
    // A bare ID passes through untouched
    let result = parse_track_id("2b7VhCSKWZAFDrDPKTJ1z2").unwrap();
    assert_eq!(result, "2b7VhCSKWZAFDrDPKTJ1z2");

    // So does anything without the domain marker, even a track name
    let result = parse_track_id("Bohemian Rhapsody").unwrap();
    assert_eq!(result, "Bohemian Rhapsody");
}

#[test]
fn test_parse_track_id_rejects_malformed_urls() {
    // Contains the marker but has no scheme, so URL parsing fails
    let result = parse_track_id("open.spotify.com/track/2b7VhCSKWZAFDrDPKTJ1z2");
    assert!(matches!(result, Err(CliError::InvalidUrl(_))));
}

#[test]
fn test_parse_track_id_rejects_non_track_urls() {
    let result = parse_track_id("https://open.spotify.com/album/6X9k3hSsvQck2OfKYdBbXr");
    assert!(matches!(result, Err(CliError::UnrecognizedUrlShape(_))));

    // A bare domain has no track path either
    let result = parse_track_id("https://open.spotify.com/");
    assert!(matches!(result, Err(CliError::UnrecognizedUrlShape(_))));

    // Track path without an ID segment
    let result = parse_track_id("https://open.spotify.com/track/");
    assert!(matches!(result, Err(CliError::UnrecognizedUrlShape(_))));
}

#[test]
fn test_looks_like_id_or_url() {
    // Base62 identifiers
    assert!(looks_like_id_or_url("2b7VhCSKWZAFDrDPKTJ1z2"));
    assert!(looks_like_id_or_url("abcDEF123"));

    // URLs carrying the domain marker
    assert!(looks_like_id_or_url(
        "https://open.spotify.com/track/2b7VhCSKWZAFDrDPKTJ1z2"
    ));

    // Names with spaces or punctuation are not identifiers
    assert!(!looks_like_id_or_url(""));
    assert!(!looks_like_id_or_url("Bohemian Rhapsody"));
    assert!(!looks_like_id_or_url("don't stop me now"));
}

#[test]
fn test_is_base62() {
    assert!(is_base62("0aZ9"));
    assert!(!is_base62(""));
    assert!(!is_base62("with space"));
    assert!(!is_base62("dash-ed"));
}

#[test]
fn test_pick_playlist_by_name() {
    let playlists = vec![
        create_test_playlist("pl1", "Morning Mix"),
        create_test_playlist("pl2", "Workout"),
        create_test_playlist("pl3", "Workout"),
    ];

    // Exact match returns the playlist
    let found = pick_playlist_by_name(&playlists, "Morning Mix").unwrap();
    assert_eq!(found.id, "pl1");

    // Duplicate names: first in listing order wins
    let found = pick_playlist_by_name(&playlists, "Workout").unwrap();
    assert_eq!(found.id, "pl2");

    // Lookup is case-sensitive and byte-exact
    assert!(pick_playlist_by_name(&playlists, "workout").is_none());
    assert!(pick_playlist_by_name(&playlists, "Evening Mix").is_none());
}

#[test]
fn test_pick_most_popular_track() {
    let tracks = vec![
        create_test_track("a", "Track A", 5),
        create_test_track("b", "Track B", 9),
        create_test_track("c", "Track C", 9),
    ];

    // Highest popularity wins; ties keep the original ordering
    let picked = pick_most_popular_track(tracks).unwrap();
    assert_eq!(picked.id, "b");

    assert!(pick_most_popular_track(Vec::new()).is_none());
}

#[test]
fn test_match_playlist_entry_by_id() {
    let entries = vec![
        entry(create_test_track("1AbcDef", "Track One", 10)),
        entry(create_test_track("2b7VhCSKWZAFDrDPKTJ1z2", "Track Two", 20)),
    ];

    let matched = match_playlist_entry(&entries, "2b7VhCSKWZAFDrDPKTJ1z2").unwrap();
    assert_eq!(matched.name, "Track Two");
}

#[test]
fn test_match_playlist_entry_by_url() {
    let entries = vec![
        entry(create_test_track("1AbcDef", "Track One", 10)),
        entry(create_test_track("2b7VhCSKWZAFDrDPKTJ1z2", "Track Two", 20)),
    ];

    let matched = match_playlist_entry(
        &entries,
        "https://open.spotify.com/track/2b7VhCSKWZAFDrDPKTJ1z2?si=xyz",
    )
    .unwrap();
    assert_eq!(matched.id, "2b7VhCSKWZAFDrDPKTJ1z2");
}

#[test]
fn test_match_playlist_entry_by_name() {
    let entries = vec![
        entry(create_test_track("1AbcDef", "Track One", 10)),
        entry(create_test_track("2b7VhCSKWZAFDrDPKTJ1z2", "Bohemian Rhapsody", 20)),
    ];

    // A query with a space classifies as a name
    let matched = match_playlist_entry(&entries, "Bohemian Rhapsody").unwrap();
    assert_eq!(matched.id, "2b7VhCSKWZAFDrDPKTJ1z2");
}

#[test]
fn test_match_playlist_entry_misses() {
    let entries = vec![entry(create_test_track("1AbcDef", "Track One", 10))];

    assert!(match_playlist_entry(&entries, "no such track").is_none());
    assert!(match_playlist_entry(&entries, "9ZzzZzz").is_none());

    // A malformed URL falls through to name matching instead of failing
    assert!(match_playlist_entry(&entries, "open.spotify.com/track/1AbcDef").is_none());
}

#[test]
fn test_match_playlist_entry_alphanumeric_name_is_treated_as_id() {
    // A purely alphanumeric display name classifies as an identifier and is
    // therefore never matched by name. Known ambiguity of the heuristic.
    let entries = vec![entry(create_test_track("1AbcDef", "Yesterday", 10))];
    assert!(match_playlist_entry(&entries, "Yesterday").is_none());
}

#[test]
fn test_match_playlist_entry_skips_null_tracks() {
    let entries = vec![
        PlaylistTrackEntry { track: None },
        entry(create_test_track("1AbcDef", "Track One", 10)),
    ];

    let matched = match_playlist_entry(&entries, "1AbcDef").unwrap();
    assert_eq!(matched.name, "Track One");
}

#[test]
fn test_collect_track_uris_keeps_duplicates() {
    let entries = vec![
        entry(create_test_track("aaa", "Track A", 1)),
        PlaylistTrackEntry { track: None },
        entry(create_test_track("bbb", "Track B", 2)),
        entry(create_test_track("aaa", "Track A", 1)),
    ];

    let uris = collect_track_uris(&entries);
    assert_eq!(
        uris,
        vec![
            "spotify:track:aaa".to_string(),
            "spotify:track:bbb".to_string(),
            "spotify:track:aaa".to_string(),
        ]
    );
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(273_000), "4m33s");
    assert_eq!(format_duration(33_000), "33s");
    assert_eq!(format_duration(3_723_000), "1h2m3s");

    // Truncates to whole seconds
    assert_eq!(format_duration(999), "0s");
    assert_eq!(format_duration(0), "0s");
}

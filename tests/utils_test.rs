use plexcli::types::Song;
use plexcli::utils::*;

#[test]
fn test_generate_state_token() {
    let token = generate_state_token();

    // Should be exactly 32 characters
    assert_eq!(token.len(), 32);

    // Should contain only alphanumeric characters
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let token2 = generate_state_token();
    assert_ne!(token, token2);
}

#[test]
fn test_to_pretty_json_uses_one_space_indentation() {
    let songs = vec![Song {
        id: 1,
        album: "Abbey Road".to_string(),
        artist: "The Beatles".to_string(),
        track_name: "Come Together".to_string(),
    }];

    let json = to_pretty_json(&songs).unwrap();
    let json = String::from_utf8(json).unwrap();

    let expected = "[\n {\n  \"id\": 1,\n  \"album\": \"Abbey Road\",\n  \"artist\": \"The Beatles\",\n  \"trackName\": \"Come Together\"\n }\n]";
    assert_eq!(json, expected);
}

#[test]
fn test_to_pretty_json_empty_list() {
    let songs: Vec<Song> = Vec::new();

    let json = to_pretty_json(&songs).unwrap();
    assert_eq!(json, b"[]");
}

#[test]
fn test_to_pretty_json_is_valid_json() {
    let songs = vec![
        Song {
            id: 1,
            album: "A".to_string(),
            artist: "B".to_string(),
            track_name: "C".to_string(),
        },
        Song {
            id: 2,
            album: "D".to_string(),
            artist: "E".to_string(),
            track_name: "F".to_string(),
        },
    ];

    let json = to_pretty_json(&songs).unwrap();
    let parsed: Vec<Song> = serde_json::from_slice(&json).unwrap();
    assert_eq!(parsed, songs);
}

#[test]
fn test_export_file_name() {
    assert_eq!(export_file_name("Road Trip"), "Road Trip.json");

    // The playlist name is used verbatim, spaces and all
    assert_eq!(export_file_name("late night drive"), "late night drive.json");
}

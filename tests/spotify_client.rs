//! Streaming API client against a mock server.

use serde_json::json;
use spotiterm::{
    http::{ApiError, PlaybackStart, SpotifyApi, SpotifyClient},
    model::Suggestion,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> SpotifyClient {
    SpotifyApi::new(reqwest::Client::new(), &server.uri(), "VN", 5, 2).authorized("test-token")
}

fn track_json(id: &str, number: u32) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Song {id}"),
        "artists": [{ "name": "Den" }, { "name": "Chillies" }],
        "album": {
            "name": "Album",
            "uri": "spotify:album:a1",
            "images": [
                { "url": "https://img/640" },
                { "url": "https://img/300" },
                { "url": "https://img/64" }
            ]
        },
        "duration_ms": 215_000,
        "track_number": number,
        "uri": format!("spotify:track:{id}")
    })
}

mod profile {
    use super::*;

    #[tokio::test]
    async fn sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "user-1",
                "display_name": "Hung",
                "external_urls": { "spotify": "https://open.spotify.com/user/user-1" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client(&server).me().await.unwrap();
        assert_eq!(user.user_id, "user-1");
        assert_eq!(user.name, "Hung");
        assert_eq!(
            user.user_url.as_deref(),
            Some("https://open.spotify.com/user/user-1")
        );
    }

    #[tokio::test]
    async fn missing_display_name_falls_back_to_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "user-1" })))
            .mount(&server)
            .await;

        let user = client(&server).me().await.unwrap();
        assert_eq!(user.name, "user-1");
        assert!(user.user_url.is_none());
    }

    #[tokio::test]
    async fn rejected_token_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(401).set_body_string("The access token expired"))
            .mount(&server)
            .await;

        match client(&server).me().await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 401);
                assert!(message.contains("expired"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}

mod playlists {
    use super::*;

    #[tokio::test]
    async fn lists_my_playlists_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/playlists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "id": "pl1", "name": "Morning" },
                    { "id": "pl2", "name": "Gym" }
                ]
            })))
            .mount(&server)
            .await;

        let playlists = client(&server).my_playlists().await.unwrap();
        let names: Vec<_> = playlists.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Morning", "Gym"]);
    }

    #[tokio::test]
    async fn maps_playlist_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlists/37i9dQZF1DWVOaOWiVD1Lf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "37i9dQZF1DWVOaOWiVD1Lf",
                "name": "Top Vietnam",
                "description": "<a href=\"spotify:playlist:1\">Editorial</a>",
                "images": [{ "url": "https://img/cover" }],
                "tracks": {
                    "items": [
                        { "track": track_json("t1", 1) },
                        { "track": null },
                        { "track": {
                            "id": "t2",
                            "name": "Song t2",
                            "artists": [],
                            "album": {
                                "name": "Single",
                                "uri": "spotify:album:a2",
                                "images": [{ "url": "https://img/only" }]
                            },
                            "duration_ms": 1000,
                            "track_number": 1,
                            "uri": "spotify:track:t2"
                        } }
                    ]
                }
            })))
            .mount(&server)
            .await;

        let playlist = client(&server)
            .playlist("37i9dQZF1DWVOaOWiVD1Lf")
            .await
            .unwrap();

        assert_eq!(playlist.name, "Top Vietnam");
        assert_eq!(playlist.description, "");
        assert_eq!(playlist.image.as_deref(), Some("https://img/cover"));
        assert_eq!(playlist.tracks.len(), 2);

        let first = &playlist.tracks[0];
        assert_eq!(first.artists, ["Den", "Chillies"]);
        assert_eq!(first.image.as_deref(), Some("https://img/64"));
        assert_eq!(first.context_uri, "spotify:album:a1");

        let second = &playlist.tracks[1];
        assert_eq!(second.image.as_deref(), Some("https://img/only"));
    }

    #[tokio::test]
    async fn counts_playlist_tracks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlists/empty/tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;

        assert_eq!(client(&server).playlist_track_count("empty").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn removes_track_by_uri() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/playlists/pl1/tracks"))
            .and(body_json(json!({ "tracks": [{ "uri": "spotify:track:t1" }] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "snapshot_id": "s" })))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .remove_track("pl1", "spotify:track:t1")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn creates_private_playlist() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/user-1/playlists"))
            .and(body_json(json!({
                "name": "Road trip",
                "description": "New playlist description",
                "public": false
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "id": "new1", "name": "Road trip" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let created = client(&server)
            .create_playlist("user-1", "Road trip")
            .await
            .unwrap();
        assert_eq!(created.id, "new1");
        assert_eq!(created.name, "Road trip");
    }
}

mod search {
    use super::*;

    #[tokio::test]
    async fn caps_albums_and_artists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "mot"))
            .and(query_param("type", "track,album,artist"))
            .and(query_param("market", "VN"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": { "items": [track_json("t1", 3)] },
                "albums": { "items": [
                    { "id": "a1", "name": "A1", "uri": "spotify:album:a1",
                      "external_urls": { "spotify": "https://open.spotify.com/album/a1" } },
                    { "id": "a2", "name": "A2", "uri": "spotify:album:a2" },
                    { "id": "a3", "name": "A3", "uri": "spotify:album:a3" }
                ] },
                "artists": { "items": [
                    { "id": "r1", "name": "R1" },
                    { "id": "r2", "name": "R2" },
                    { "id": "r3", "name": "R3" }
                ] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let suggestions = client(&server).search("mot").await.unwrap();
        let kinds: Vec<_> = suggestions.iter().map(Suggestion::kind).collect();
        assert_eq!(kinds, ["track", "album", "album", "artist", "artist"]);
        assert_eq!(
            suggestions[1].external_url(),
            Some("https://open.spotify.com/album/a1")
        );

        match &suggestions[0] {
            Suggestion::Track(track) => {
                assert_eq!(track.offset(), 2);
                assert_eq!(track.context_uri, "spotify:album:a1");
            }
            other => panic!("expected a track first, got {other:?}"),
        }
    }
}

mod player {
    use super::*;

    #[tokio::test]
    async fn play_sends_context_and_offset() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/me/player/play"))
            .and(body_json(json!({
                "context_uri": "spotify:album:a1",
                "offset": { "position": 2 },
                "position_ms": 0
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let start = client(&server).play("spotify:album:a1", 2).await.unwrap();
        assert_eq!(start, PlaybackStart::Confirmed);
    }

    #[tokio::test]
    async fn non_204_success_is_only_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/me/player/play"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let start = client(&server).play("spotify:album:a1", 0).await.unwrap();
        assert_eq!(start, PlaybackStart::Accepted);
    }

    #[tokio::test]
    async fn pause_hits_pause_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/me/player/pause"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).pause().await.unwrap();
    }
}

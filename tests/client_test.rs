//! Tests for the backend client against a mock server

use serde_json::json;
use spotsafe::{backup::BackupClient, error::Error, types::Token};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_playlists_preserves_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(query_param("token", "BQC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "href": "https://api.spotify.com/v1/me/playlists",
            "items": [
                { "id": "p2", "name": "Rock Classics", "tracks": { "total": 3 } },
                { "id": "p1", "name": "Jazz", "tracks": { "total": 1 } }
            ],
            "next": null
        })))
        .mount(&mock_server)
        .await;

    let client = BackupClient::new(mock_server.uri());
    let playlists = client
        .get_playlists(&Token::new("BQC123"))
        .await
        .unwrap();

    assert_eq!(playlists.len(), 2);
    assert_eq!(playlists[0].id, "p2");
    assert_eq!(playlists[0].name, "Rock Classics");
    assert_eq!(playlists[0].track_total(), Some(3));
    assert_eq!(playlists[1].id, "p1");
}

#[tokio::test]
async fn test_get_playlists_without_items_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "status": 401, "message": "The access token expired" }
        })))
        .mount(&mock_server)
        .await;

    let client = BackupClient::new(mock_server.uri());
    let playlists = client.get_playlists(&Token::new("")).await.unwrap();

    assert!(playlists.is_empty());
}

#[tokio::test]
async fn test_get_playlists_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = BackupClient::new(mock_server.uri());
    let err = client
        .get_playlists(&Token::new("BQC123"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_get_playlists_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = BackupClient::new(mock_server.uri());
    let result = client.get_playlists(&Token::new("BQC123")).await;

    assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn test_get_tracks_sends_token_and_playlist_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks"))
        .and(query_param("token", "BQC123"))
        .and(query_param("playlist_id", "p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "added_at": "2024-01-01",
                    "track": {
                        "name": "Song A",
                        "artists": [{ "name": "Artist B" }],
                        "album": { "name": "Album C" }
                    }
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BackupClient::new(format!("{}/", mock_server.uri()));
    let tracks = client
        .get_tracks(&Token::new("BQC123"), "p1")
        .await
        .unwrap();

    assert_eq!(tracks.len(), 1);
    let track = tracks[0].track.as_ref().unwrap();
    assert_eq!(track.name, "Song A");
    assert_eq!(track.artists[0].name, "Artist B");
    assert_eq!(tracks[0].added_at.as_deref(), Some("2024-01-01"));
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BackupClient::new(format!("{}/api", mock_server.uri()));
    assert_eq!(
        client.login_url().unwrap().as_str(),
        format!("{}/api/login", mock_server.uri())
    );

    let playlists = client.get_playlists(&Token::new("t")).await.unwrap();
    assert!(playlists.is_empty());
}

#[tokio::test]
async fn test_http_error_hides_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = BackupClient::new(mock_server.uri());
    let token = Token::new("SECRET_TOKEN_XYZ");

    let err = client.get_playlists(&token).await.unwrap_err();
    assert!(err.to_string().contains("401"));
    assert!(!err.to_string().contains("SECRET_TOKEN_XYZ"));
    assert!(!format!("{:?}", err).contains("SECRET_TOKEN_XYZ"));

    let err = client.get_tracks(&token, "p1").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(!err.to_string().contains("SECRET_TOKEN_XYZ"));
}

#[tokio::test]
async fn test_connection_error_hides_token() {
    let client = BackupClient::new("http://127.0.0.1:9");
    let err = client
        .get_playlists(&Token::new("SECRET_TOKEN_XYZ"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(!err.to_string().contains("SECRET_TOKEN_XYZ"));
}

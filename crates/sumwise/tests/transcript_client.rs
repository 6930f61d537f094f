use serde_json::json;
use sumwise::{
    parser::VideoRef,
    yt::{transcript::TranscriptClient, TranscriptFetcher},
    TranscriptError,
};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_fetch_transcript_by_video_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transcript"))
        .and(query_param("video_id", "dQw4w9WgXcQ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transcript_text": "Spoken words from the video.",
            "language": "en",
            "video_id": "dQw4w9WgXcQ"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TranscriptClient::new(format!("{}/", server.uri()));
    let video = VideoRef::parse("https://youtu.be/dQw4w9WgXcQ").unwrap();

    let transcript = client.fetch_transcript(&video).await.unwrap();
    assert_eq!(transcript.transcript_text, "Spoken words from the video.");
    assert_eq!(transcript.language, "en");
    assert_eq!(transcript.video_id, "dQw4w9WgXcQ");
}

#[tokio::test]
async fn test_service_error_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transcript"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No captions available"))
        .mount(&server)
        .await;

    let client = TranscriptClient::new(server.uri());
    let video = VideoRef::parse("dQw4w9WgXcQ").unwrap();

    let err = client.fetch_transcript(&video).await.unwrap_err();
    match err {
        TranscriptError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "No captions available");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_blank_transcript_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transcript"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transcript_text": "   ",
            "language": "en",
            "video_id": "dQw4w9WgXcQ"
        })))
        .mount(&server)
        .await;

    let client = TranscriptClient::new(server.uri());
    let video = VideoRef::parse("dQw4w9WgXcQ").unwrap();

    let err = client.fetch_transcript(&video).await.unwrap_err();
    assert!(matches!(err, TranscriptError::Empty { ref video_id } if video_id == "dQw4w9WgXcQ"));
}

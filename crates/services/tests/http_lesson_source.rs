use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use services::{FetchError, HttpLessonSource, LessonSource, LessonSourceConfig};

const LESSONS_BODY: &str = r#"{"lessons":[
  {"mentor_name":"Jane","lesson_title":"Scales","video_thumbnail_url":"https://cdn.example.com/s-t.jpg","lesson_image_url":"https://cdn.example.com/s.jpg","video_url":"https://cdn.example.com/s.mp4"},
  {"mentor_name":"Ravi","lesson_title":"Arpeggios","video_thumbnail_url":"https://cdn.example.com/a-t.jpg","lesson_image_url":"https://cdn.example.com/a.jpg","video_url":"https://cdn.example.com/a.mp4"}
]}"#;

/// Serve one canned HTTP response and return the endpoint URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0_u8; 4096];
        let _ = socket.read(&mut buf).await.unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{addr}/b/7JF5")
}

fn source(endpoint: &str) -> HttpLessonSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpLessonSource::with_client(LessonSourceConfig::new(endpoint).unwrap(), client)
}

#[tokio::test]
async fn fetch_decodes_lessons_in_order() {
    let endpoint = serve_once("200 OK", LESSONS_BODY).await;

    let lessons = source(&endpoint).fetch().await.unwrap();

    let titles: Vec<_> = lessons.iter().map(|l| l.title()).collect();
    assert_eq!(titles, ["Scales", "Arpeggios"]);
    assert_eq!(lessons[1].mentor(), "Ravi");
    assert_eq!(lessons[1].video_url(), "https://cdn.example.com/a.mp4");
}

#[tokio::test]
async fn fetch_reports_error_status() {
    let endpoint = serve_once("500 Internal Server Error", "{}").await;

    let err = source(&endpoint).fetch().await.unwrap_err();

    assert!(matches!(err, FetchError::HttpStatus(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn fetch_reports_malformed_body() {
    let endpoint = serve_once("200 OK", r#"{"items":[]}"#).await;

    let err = source(&endpoint).fetch().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn fetch_reports_connection_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(&format!("http://{addr}/b/7JF5"))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Http(_)));
}

use std::fs;
use std::net::TcpListener;
use std::time::Duration;

use clinic_core::{Job, Outcome, TargetResolver};
use clinic_engine::{process_target, FetchSettings, ReqwestFetcher};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(FetchSettings {
        request_timeout: Duration::from_millis(200),
        ..FetchSettings::default()
    })
    .unwrap()
}

#[tokio::test]
async fn ok_response_is_written_byte_for_byte() {
    clinic_logging::initialize_for_tests();
    let server = MockServer::start().await;
    let body: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    Mock::given(method("GET"))
        .and(path("/2020/2020_A_Concert.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let resolver = TargetResolver::new(&server.uri(), temp.path()).unwrap();
    let target = resolver.resolve(&Job::new(2020, "A"));

    let outcome = process_target(&fetcher(), &target).await;
    assert_eq!(outcome, Outcome::Success { bytes_written: 4096 });
    assert_eq!(fs::read(&target.local_path).unwrap(), body);
    assert!(temp.path().join("2020").is_dir());
}

#[tokio::test]
async fn existing_file_is_duplicate_without_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("new"))
        .expect(0)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let resolver = TargetResolver::new(&server.uri(), temp.path()).unwrap();
    let target = resolver.resolve(&Job::new(2021, "B"));
    fs::create_dir_all(target.year_dir()).unwrap();
    fs::write(&target.local_path, b"old").unwrap();

    let outcome = process_target(&fetcher(), &target).await;
    assert_eq!(outcome, Outcome::Duplicate);
    assert_eq!(fs::read(&target.local_path).unwrap(), b"old");
}

#[tokio::test]
async fn not_found_leaves_filesystem_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let resolver = TargetResolver::new(&server.uri(), temp.path()).unwrap();
    let target = resolver.resolve(&Job::new(2020, "Imaginary"));

    let outcome = process_target(&fetcher(), &target).await;
    assert_eq!(outcome, Outcome::NotFound);
    assert!(!target.local_path.exists());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn other_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let resolver = TargetResolver::new(&server.uri(), temp.path()).unwrap();
    let target = resolver.resolve(&Job::new(2020, "A"));

    assert_eq!(process_target(&fetcher(), &target).await, Outcome::HttpError(503));
    assert!(!target.local_path.exists());
}

#[tokio::test]
async fn slow_server_is_timeout_and_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(1000))
                .set_body_string("late"),
        )
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let resolver = TargetResolver::new(&server.uri(), temp.path()).unwrap();
    let target = resolver.resolve(&Job::new(2020, "A"));

    assert_eq!(process_target(&fetcher(), &target).await, Outcome::Timeout);
    assert!(!target.local_path.exists());
}

#[tokio::test]
async fn refused_connection_is_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let temp = TempDir::new().unwrap();
    let resolver = TargetResolver::new(&base, temp.path()).unwrap();
    let target = resolver.resolve(&Job::new(2020, "A"));

    assert_eq!(
        process_target(&fetcher(), &target).await,
        Outcome::ConnectionError
    );
    assert!(!target.local_path.exists());
}

#[tokio::test]
async fn unwritable_output_is_unexpected_not_a_panic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pdf"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    // A plain file where the output root should be.
    let blocked_root = temp.path().join("programs");
    fs::write(&blocked_root, b"x").unwrap();
    let resolver = TargetResolver::new(&server.uri(), &blocked_root).unwrap();
    let target = resolver.resolve(&Job::new(2020, "A"));

    let outcome = process_target(&fetcher(), &target).await;
    assert!(matches!(outcome, Outcome::Unexpected(_)), "{outcome:?}");
}

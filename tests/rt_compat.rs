use httpfault::{normalize, HttpClientError, HttpResponse};

fn server_error() -> HttpClientError {
    HttpClientError::new("server error", HttpResponse::with_text(500, "boom"))
}

/// Test that normalization works outside any runtime
#[test]
fn normalize_outside_runtime() {
    let failure = server_error();
    let fault = normalize(&failure).unwrap();
    assert_eq!(fault.status().map(u16::from), Some(500));
    assert_eq!(fault.body(), Some("boom"));
}

/// Test that normalization works inside a tokio runtime
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn normalize_inside_tokio_runtime() {
    let failure = server_error();
    let fault = normalize(&failure).unwrap();
    assert_eq!(fault.status().map(u16::from), Some(500));
    assert_eq!(fault.body(), Some("boom"));
}

/// Test that normalization works on a spawn_blocking thread
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn normalize_inside_spawn_blocking() {
    let body = tokio::task::spawn_blocking(|| {
        let failure = server_error();
        let fault = normalize(&failure).unwrap();
        fault.body().map(str::to_owned)
    })
    .await
    .unwrap();
    assert_eq!(body.as_deref(), Some("boom"));
}

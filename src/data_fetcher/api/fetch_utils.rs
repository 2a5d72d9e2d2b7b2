//! Generic HTTP fetching utilities with caching, retry logic, and error handling

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::{cache_ttl, retry};
use crate::data_fetcher::cache::{cache_http_response, get_cached_http_response};
use crate::data_fetcher::models::LeaderboardResponse;
use crate::error::AppError;

/// Generic fetch function with HTTP caching, retry logic, and error handling.
///
/// This function:
/// - Checks the HTTP response cache first
/// - Sends the API key as the `key` query parameter (never logged, never cached)
/// - Retries 429, 5xx, timeouts and connect errors with exponential backoff
/// - Respects Retry-After headers for rate limiting
/// - Caches successful responses with a TTL chosen from the endpoint and content
#[instrument(skip(client, api_key))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    if let Some(cached_response) = get_cached_http_response(url).await {
        debug!("Using cached HTTP response for URL: {url}");
        match serde_json::from_str::<T>(&cached_response) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => {
                warn!("Failed to parse cached response for URL {}: {}", url, e);
            }
        }
    }

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        let (err, retry_after) = match client.get(url).query(&[("key", api_key)]).send().await {
            Ok(resp) if resp.status().is_success() => break resp,
            Ok(resp) => (status_error(resp.status(), url), retry_after_header(&resp)),
            Err(e) => (request_error(e, url), None),
        };

        if !err.is_retryable() || attempt >= retry::MAX_RETRIES {
            error!("Request failed: {err}");
            return Err(err);
        }

        let wait = retry_after.unwrap_or(backoff);
        warn!(
            "{err}. Retrying in {wait:?} (attempt {}/{})",
            attempt + 1,
            retry::MAX_RETRIES
        );
        tokio::time::sleep(wait).await;
        attempt += 1;
        backoff = backoff.saturating_mul(2);
    };

    debug!("Response status: {}", response.status());

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            let e = e.without_url();
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => {
            let ttl = determine_cache_ttl(url, &response_text);
            cache_http_response(url.to_string(), response_text, ttl).await;
            Ok(parsed)
        }
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            Err(classify_parse_failure(&response_text, e, url))
        }
    }
}

/// Maps an unsuccessful HTTP status to the error the caller sees.
fn status_error(status: StatusCode, url: &str) -> AppError {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    match code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(code, reason, url),
        502 | 503 => AppError::api_service_unavailable(code, reason, url),
        _ => AppError::api_server_error(code, reason, url),
    }
}

/// Maps a transport failure, dropping the request URL since it carries the key.
fn request_error(e: reqwest::Error, url: &str) -> AppError {
    let e = e.without_url();
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Seconds from a `Retry-After` header, if the provider sent one.
fn retry_after_header(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Tells an empty body, non-JSON and JSON of the wrong shape apart.
fn classify_parse_failure(body: &str, e: serde_json::Error, url: &str) -> AppError {
    let trimmed = body.trim_start();
    if trimmed.is_empty() {
        AppError::api_no_data("Response body is empty", url)
    } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        AppError::api_malformed_json("Response is not valid JSON", url)
    } else {
        AppError::api_unexpected_structure(e.to_string(), url)
    }
}

/// Picks a cache TTL from the endpoint and, for leaderboards, from whether play is under way.
pub(super) fn determine_cache_ttl(url: &str, body: &str) -> u64 {
    if url.contains("/Leaderboard/") {
        return match serde_json::from_str::<LeaderboardResponse>(body) {
            Ok(leaderboard) if leaderboard.tournament.is_in_progress => {
                info!("Tournament in progress at {}, using short cache TTL", url);
                cache_ttl::LIVE_LEADERBOARD_SECONDS
            }
            _ => cache_ttl::LEADERBOARD_SECONDS,
        };
    }

    if url.contains("/News") {
        cache_ttl::NEWS_SECONDS
    } else if url.contains("/Tournaments/")
        || url.contains("/PlayerSeasonStats/")
        || url.contains("/Player/")
    {
        cache_ttl::SEASON_DATA_SECONDS
    } else {
        cache_ttl::DEFAULT_SECONDS
    }
}

#[cfg(test)]
mod tests {
    use super::super::http_client::create_test_http_client;
    use super::*;
    use crate::data_fetcher::cache::clear_http_response_cache;
    use crate::data_fetcher::models::NewsItem;
    use serial_test::serial;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    #[test]
    fn test_determine_cache_ttl() {
        let base = "https://api.example.com";
        assert_eq!(
            determine_cache_ttl(&format!("{base}/News"), "[]"),
            cache_ttl::NEWS_SECONDS
        );
        assert_eq!(
            determine_cache_ttl(&format!("{base}/NewsByPlayerID/1"), "[]"),
            cache_ttl::NEWS_SECONDS
        );
        assert_eq!(
            determine_cache_ttl(&format!("{base}/Tournaments/2024"), "[]"),
            cache_ttl::SEASON_DATA_SECONDS
        );
        assert_eq!(
            determine_cache_ttl(&format!("{base}/Player/1"), "{}"),
            cache_ttl::SEASON_DATA_SECONDS
        );
        assert_eq!(
            determine_cache_ttl(&format!("{base}/Other"), "{}"),
            cache_ttl::DEFAULT_SECONDS
        );
    }

    #[test]
    fn test_leaderboard_ttl_depends_on_progress() {
        let url = "https://api.example.com/Leaderboard/560";
        let live = r#"{"Tournament": {"TournamentID": 560, "Name": "M", "IsInProgress": true}, "Players": []}"#;
        let done = r#"{"Tournament": {"TournamentID": 560, "Name": "M", "IsOver": true}, "Players": []}"#;

        assert_eq!(
            determine_cache_ttl(url, live),
            cache_ttl::LIVE_LEADERBOARD_SECONDS
        );
        assert_eq!(determine_cache_ttl(url, done), cache_ttl::LEADERBOARD_SECONDS);
        assert_eq!(determine_cache_ttl(url, "garbage"), cache_ttl::LEADERBOARD_SECONDS);
    }

    #[test]
    fn test_status_errors_decide_retries() {
        let url = "https://api.example.com/News";
        let retried: Vec<u16> = [400, 401, 403, 404, 429, 500, 502, 503, 504]
            .into_iter()
            .filter(|code| {
                status_error(StatusCode::from_u16(*code).unwrap(), url).is_retryable()
            })
            .collect();
        assert_eq!(retried, vec![429, 500, 502, 503, 504]);

        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, url),
            AppError::ApiNotFound { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, url),
            AppError::ApiServiceUnavailable { status: 502, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::GATEWAY_TIMEOUT, url),
            AppError::ApiServerError { status: 504, .. }
        ));
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_does_not_retry_client_errors() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/News", mock_server.uri());
        let result = fetch::<Vec<NewsItem>>(&client, &url, "k").await;

        assert!(matches!(
            result,
            Err(AppError::ApiClientError { status: 403, .. })
        ));
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_retries_rate_limit_with_retry_after() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
            .up_to_n_times(2)
            .expect(2)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/News", mock_server.uri());
        let result = fetch::<Vec<NewsItem>>(&client, &url, "k").await;

        assert!(result.unwrap().is_empty());
        clear_http_response_cache().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_sends_key_and_caches_without_it() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/News"))
            .and(query_param("key", "test-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"[{"Title": "Hello"}]"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/News", mock_server.uri());

        let first: Vec<NewsItem> = fetch(&client, &url, "test-key").await.unwrap();
        // Served from cache; the mock expects exactly one request
        let second: Vec<NewsItem> = fetch(&client, &url, "test-key").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0].title, "Hello");
        assert!(get_cached_http_response(&url).await.is_some());

        clear_http_response_cache().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_maps_not_found() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/Leaderboard/999", mock_server.uri());
        let result = fetch::<LeaderboardResponse>(&client, &url, "k").await;

        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_maps_unauthorized_to_client_error() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/News", mock_server.uri());
        let result = fetch::<Vec<NewsItem>>(&client, &url, "bad-key").await;

        match result {
            Err(AppError::ApiClientError { status, url: err_url, .. }) => {
                assert_eq!(status, 401);
                assert!(!err_url.contains("bad-key"));
            }
            other => panic!("expected client error, got {other:?}"),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_retries_then_succeeds() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/News", mock_server.uri());
        let result = fetch::<Vec<NewsItem>>(&client, &url, "k").await;

        assert!(result.unwrap().is_empty());
        clear_http_response_cache().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_service_unavailable_after_retries() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "0"))
            .expect(u64::from(retry::MAX_RETRIES) + 1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/News", mock_server.uri());
        let result = fetch::<Vec<NewsItem>>(&client, &url, "k").await;

        assert!(matches!(
            result,
            Err(AppError::ApiServiceUnavailable { status: 503, .. })
        ));
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_classifies_bad_bodies() {
        clear_http_response_cache().await;
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/shape"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Title": 5}"#))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let base = mock_server.uri();

        let empty = fetch::<Vec<NewsItem>>(&client, &format!("{base}/empty"), "k").await;
        assert!(matches!(empty, Err(AppError::ApiNoData { .. })));

        let html = fetch::<Vec<NewsItem>>(&client, &format!("{base}/html"), "k").await;
        assert!(matches!(html, Err(AppError::ApiMalformedJson { .. })));

        let shape = fetch::<Vec<NewsItem>>(&client, &format!("{base}/shape"), "k").await;
        assert!(matches!(shape, Err(AppError::ApiUnexpectedStructure { .. })));

        // Failed payloads are never cached
        assert!(get_cached_http_response(&format!("{base}/shape")).await.is_none());
    }
}

//! # Latest Rates Endpoint
//!
//! One GET per conversion: the provider returns the whole table for the base
//! currency and the target is picked out locally.

use shared::dto::rates::LatestRatesResponse;
use shared::CurrencyCode;

use super::client::RateClient;
use crate::core::error::{AppError, TARGET_NOT_AVAILABLE, UNKNOWN_PROVIDER_ERROR};

/// A successful quote for one base/target pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    /// Units of target per one unit of base.
    pub rate: f64,
    /// Provider's raw last-update string, e.g. `Mon, 01 Jan 2024 12:00:00 +0000`.
    pub retrieved_at: Option<String>,
}

/// Outcome of one rate fetch. Produced once per request and never mutated.
pub type RateQuoteResult = Result<RateQuote, AppError>;

/// Fetch the latest rate for `base` → `target`.
#[tracing::instrument(skip(client), fields(base = %base, target = %target))]
pub async fn get_latest_rate(
    client: &RateClient,
    base: CurrencyCode,
    target: CurrencyCode,
) -> RateQuoteResult {
    let start = std::time::Instant::now();

    tracing::debug!(url = %client.api_url(), "Fetching latest rates");

    let response = client
        .client
        .get(client.api_url())
        .query(&[("apikey", client.api_key()), ("base", base.as_str())])
        .send()
        .await
        .map_err(|e| {
            let connect = e.is_connect();
            let timeout = e.is_timeout();
            let err = AppError::from(e);
            tracing::error!(
                error = %err,
                connect,
                timeout,
                duration_ms = start.elapsed().as_millis(),
                "Rate fetch network error"
            );
            err
        })?;

    let status = response.status();

    let bytes = response.bytes().await.map_err(|e| {
        let err = AppError::from(e);
        tracing::error!(
            error = %err,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Rate response read error"
        );
        err
    })?;

    // The provider reports failures in the body, so decode whatever came back.
    let body: LatestRatesResponse = serde_json::from_slice(&bytes).map_err(|e| {
        let err = AppError::from(e);
        tracing::error!(
            error = %err,
            status = status.as_u16(),
            body_len = bytes.len(),
            duration_ms = start.elapsed().as_millis(),
            "Rate response parse error"
        );
        err
    })?;

    let result = interpret_response(body, target);

    match &result {
        Ok(quote) => tracing::debug!(
            rate = quote.rate,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Rate fetched successfully"
        ),
        Err(e) => tracing::warn!(
            error = %e,
            kind = e.kind(),
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Provider did not return a usable rate"
        ),
    }

    result
}

/// Turn a decoded provider response into a quote for `target`.
pub fn interpret_response(response: LatestRatesResponse, target: CurrencyCode) -> RateQuoteResult {
    if !response.is_success() {
        let reason = response
            .error_type
            .unwrap_or_else(|| UNKNOWN_PROVIDER_ERROR.to_string());
        return Err(AppError::Provider(reason));
    }

    let rate = response
        .rate_for(target.as_str())
        .ok_or_else(|| AppError::Provider(TARGET_NOT_AVAILABLE.to_string()))?;

    Ok(RateQuote {
        rate,
        retrieved_at: response.time_last_update_utc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterConfig;
    use crate::core::error::NO_CONNECTION;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::Duration;

    const API_KEY: &str = "SECRET-KEY-123";

    /// Serve a single connection on an ephemeral port and return the endpoint URL.
    ///
    /// With `response = None` the request is read and never answered.
    fn serve_once(response: Option<String>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");

        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            match response {
                Some(response) => {
                    let _ = stream.write_all(response.as_bytes());
                    let _ = stream.flush();
                }
                None => std::thread::sleep(Duration::from_secs(5)),
            }
        });

        format!("http://{addr}/v6/latest")
    }

    fn http_response(status_line: &str, content_type: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn client_for(api_url: String, request_timeout: Duration) -> RateClient {
        RateClient::new(&ConverterConfig {
            api_key: API_KEY.to_string(),
            api_url,
            request_timeout,
        })
    }

    fn parse(json: &str) -> LatestRatesResponse {
        serde_json::from_str(json).expect("fixture should parse")
    }

    #[test]
    fn test_success_picks_target_rate() {
        let response = parse(
            r#"{
                "result": "success",
                "time_last_update_utc": "Mon, 01 Jan 2024 12:00:00 +0000",
                "rates": { "USD": 1, "EUR": 0.92 }
            }"#,
        );

        let quote = interpret_response(response, CurrencyCode::EUR).unwrap();
        assert_eq!(quote.rate, 0.92);
        assert_eq!(
            quote.retrieved_at.as_deref(),
            Some("Mon, 01 Jan 2024 12:00:00 +0000")
        );
    }

    #[test]
    fn test_success_without_timestamp() {
        let response = parse(r#"{ "result": "success", "rates": { "EUR": 0.92 } }"#);

        let quote = interpret_response(response, CurrencyCode::EUR).unwrap();
        assert!(quote.retrieved_at.is_none());
    }

    #[test]
    fn test_provider_error_type_is_surfaced() {
        let response = parse(r#"{ "result": "error", "error-type": "invalid-key" }"#);

        let err = interpret_response(response, CurrencyCode::EUR).unwrap_err();
        assert_eq!(err, AppError::Provider("invalid-key".to_string()));
    }

    #[test]
    fn test_provider_error_without_type_is_unknown() {
        let response = parse(r#"{ "result": "error" }"#);

        let err = interpret_response(response, CurrencyCode::EUR).unwrap_err();
        assert_eq!(err, AppError::Provider("Unknown error".to_string()));
    }

    #[test]
    fn test_missing_target_is_provider_error() {
        let response = parse(r#"{ "result": "success", "rates": { "USD": 1 } }"#);

        let err = interpret_response(response, CurrencyCode::EUR).unwrap_err();
        assert_eq!(err, AppError::Provider("target currency not available".to_string()));
    }

    #[tokio::test]
    async fn test_connection_refused_reports_no_connection() {
        let config = ConverterConfig {
            api_key: String::new(),
            api_url: "http://127.0.0.1:1/v6/latest".to_string(),
            request_timeout: Duration::from_secs(2),
        };
        let client = RateClient::new(&config);

        let err = get_latest_rate(&client, CurrencyCode::USD, CurrencyCode::EUR)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Transport(NO_CONNECTION.to_string()));
    }

    #[tokio::test]
    async fn test_timeout_is_unexpected_and_hides_api_key() {
        let client = client_for(serve_once(None), Duration::from_secs(1));

        let err = get_latest_rate(&client, CurrencyCode::USD, CurrencyCode::EUR)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "unexpected");
        assert!(err.message().contains("timed out"), "message: {}", err.message());
        assert!(!err.message().contains(API_KEY), "message: {}", err.message());
        assert!(!err.message().contains("apikey"), "message: {}", err.message());
    }

    #[tokio::test]
    async fn test_malformed_body_is_unexpected() {
        let url = serve_once(Some(http_response("200 OK", "text/html", "<html>oops</html>")));
        let client = client_for(url, Duration::from_secs(5));

        let err = get_latest_rate(&client, CurrencyCode::USD, CurrencyCode::EUR)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "unexpected");
        assert!(!err.message().is_empty());
        assert!(!err.message().contains(API_KEY));
    }

    #[tokio::test]
    async fn test_error_status_with_provider_body_is_provider_error() {
        let body = r#"{ "result": "error", "error-type": "invalid-key" }"#;
        let url = serve_once(Some(http_response("403 Forbidden", "application/json", body)));
        let client = client_for(url, Duration::from_secs(5));

        let err = get_latest_rate(&client, CurrencyCode::USD, CurrencyCode::EUR)
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Provider("invalid-key".to_string()));
    }

    #[tokio::test]
    async fn test_success_over_http() {
        let body = r#"{ "result": "success", "time_last_update_utc": "Mon, 01 Jan 2024 12:00:00 +0000", "rates": { "USD": 1, "EUR": 0.92 } }"#;
        let url = serve_once(Some(http_response("200 OK", "application/json", body)));
        let client = client_for(url, Duration::from_secs(5));

        let quote = get_latest_rate(&client, CurrencyCode::USD, CurrencyCode::EUR)
            .await
            .unwrap();

        assert_eq!(quote.rate, 0.92);
    }
}

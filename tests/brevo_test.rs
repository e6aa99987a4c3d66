// Exercises the Brevo client against a local one-shot HTTP server: the
// success path (request shape, api-key header) and the provider-error
// mapping for non-2xx and transport failures. Nothing here touches the
// real API.

use snowman_site::brevo::BrevoClient;
use snowman_site::config::BrevoConfig;
use snowman_site::error::SiteError;
use snowman_site::forms::MailProvider;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

const TEST_KEY: &str = "xkeysib-test";

/// What the server saw: request line + headers (lowercased) and the body.
struct RecordedRequest {
    head: String,
    body: String,
}

/// Serve exactly one request with a canned response, recording what was
/// received. Returns the base URL to point the client at.
fn serve_one(status_line: &'static str, response_body: &'static str) -> (String, mpsc::Receiver<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut head = String::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line == "\n" || line.is_empty() {
                break;
            }
            let lower = line.to_lowercase();
            if let Some(value) = lower.strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap_or(0);
            }
            head.push_str(&lower);
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();
        tx.send(RecordedRequest {
            head,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
        .unwrap();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            response_body.len(),
            response_body,
        );
        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (format!("http://127.0.0.1:{}/v3", port), rx)
}

fn client(base_url: &str) -> BrevoClient {
    let config = BrevoConfig {
        api_key: Some(TEST_KEY.to_string()),
        ..BrevoConfig::default()
    };
    BrevoClient::new(&config).unwrap().with_base_url(base_url)
}

#[test]
fn test_add_contact_sends_key_and_payload() {
    let (base_url, rx) = serve_one("201 Created", "{}");
    let result = client(&base_url).add_contact("player@example.com", 123);
    assert!(result.is_ok());

    let request = rx.recv().unwrap();
    assert!(request.head.starts_with("post /v3/contacts http/1.1"));
    assert!(request.head.contains(&format!("api-key: {}", TEST_KEY)));

    let payload: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(payload["email"], "player@example.com");
    assert_eq!(payload["listIds"], serde_json::json!([123]));
}

#[test]
fn test_send_email_sends_addressing_and_content() {
    let (base_url, rx) = serve_one("201 Created", "{}");
    let result = client(&base_url).send_email("Contact Form: Hello", "<p>Hi</p>");
    assert!(result.is_ok());

    let request = rx.recv().unwrap();
    assert!(request.head.starts_with("post /v3/smtp/email http/1.1"));

    let payload: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(payload["subject"], "Contact Form: Hello");
    assert_eq!(payload["htmlContent"], "<p>Hi</p>");
    assert_eq!(payload["sender"]["email"], "contactform@snowmanstudio.com");
    assert_eq!(payload["to"][0]["email"], "hello@snowmanstudio.com");
}

#[test]
fn test_add_contact_maps_client_error_to_provider_error() {
    let (base_url, _rx) = serve_one(
        "400 Bad Request",
        r#"{"code":"duplicate_parameter","message":"Contact already exist"}"#,
    );
    let err = client(&base_url).add_contact("player@example.com", 123).unwrap_err();
    match err {
        SiteError::Provider(detail) => {
            assert!(detail.contains("/contacts"));
            assert!(detail.contains("400"));
            assert!(detail.contains("duplicate_parameter"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_send_email_maps_server_error_to_provider_error() {
    let (base_url, _rx) = serve_one("500 Internal Server Error", "upstream exploded");
    let err = client(&base_url).send_email("Subject", "<p>body</p>").unwrap_err();
    match err {
        SiteError::Provider(detail) => {
            assert!(detail.contains("/smtp/email"));
            assert!(detail.contains("500"));
            assert!(detail.contains("upstream exploded"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unreachable_server_is_provider_error() {
    // Bind then drop so the port is closed by the time the client calls.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let err = client(&format!("http://127.0.0.1:{}/v3", port))
        .add_contact("player@example.com", 123)
        .unwrap_err();
    assert!(matches!(err, SiteError::Provider(_)));
}

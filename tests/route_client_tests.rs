//! Wire-Level-Tests gegen einen Loopback-Stub des Optimierungs-Service.

use glam::Vec2;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use truck_route_planner::{RouteClient, RouteOutcome};

/// Startet einen Stub, der genau eine Verbindung annimmt, den Request
/// vollständig liest und mit der vorgegebenen Antwort schließt.
/// Gibt die Endpoint-URL und ein Handle auf den gelesenen Request zurück.
fn spawn_stub_service(
    status_line: &'static str,
    body: &'static str,
) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Stub-Service sollte binden können");
    let addr = listener.local_addr().expect("Stub-Adresse sollte vorliegen");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener
            .accept()
            .expect("Stub sollte die Verbindung annehmen");
        let request = read_http_request(&mut stream);

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .expect("Stub sollte antworten können");

        request
    });

    (format!("http://{addr}/optimize-route"), handle)
}

/// Liest Header und Body eines HTTP-Requests anhand von Content-Length.
fn read_http_request(stream: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).expect("Request sollte lesbar sein");
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buffer) {
            break pos;
        }
        if n == 0 {
            return String::from_utf8_lossy(&buffer).into_owned();
        }
    };

    let headers = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
    let content_length = parse_content_length(&headers);
    while buffer.len() < header_end + 4 + content_length {
        let n = stream.read(&mut chunk).expect("Body sollte lesbar sein");
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

fn parse_content_length(headers: &str) -> usize {
    headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn three_points() -> Vec<Vec2> {
    vec![
        Vec2::new(1.0, 1.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(3.0, 3.0),
    ]
}

#[test]
fn test_route_found_resolves_pairs_in_order() {
    let (endpoint, handle) = spawn_stub_service(
        "HTTP/1.1 200 OK",
        r#"{"optimalRoute":[[1.0,1.0],[2.0,2.0],[3.0,3.0]]}"#,
    );

    let client = RouteClient::new(&endpoint, 5);
    let outcome = client.request_optimal_route(&three_points());

    match outcome {
        RouteOutcome::RouteFound(route) => {
            assert_eq!(route.len(), 3);
            assert_eq!(route.points()[0], Vec2::new(1.0, 1.0));
            assert_eq!(route.points()[1], Vec2::new(2.0, 2.0));
            assert_eq!(route.points()[2], Vec2::new(3.0, 3.0));
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }

    // Request-Form prüfen: JSON-POST mit Punktliste an den Endpoint
    let request = handle.join().expect("Stub-Thread sollte beendet sein");
    assert!(request.starts_with("POST /optimize-route"));
    assert!(request
        .to_ascii_lowercase()
        .contains("content-type: application/json"));
    assert!(request.contains(r#"{"points":[[1.0,1.0],[2.0,2.0],[3.0,3.0]]}"#));
}

#[test]
fn test_missing_field_resolves_no_route_found() {
    let (endpoint, handle) = spawn_stub_service("HTTP/1.1 200 OK", "{}");

    let client = RouteClient::new(&endpoint, 5);
    let outcome = client.request_optimal_route(&three_points());

    assert!(matches!(outcome, RouteOutcome::NoRouteFound));
    handle.join().expect("Stub-Thread sollte beendet sein");
}

#[test]
fn test_empty_route_field_is_route_found_but_degenerate() {
    let (endpoint, handle) = spawn_stub_service("HTTP/1.1 200 OK", r#"{"optimalRoute":[]}"#);

    let client = RouteClient::new(&endpoint, 5);
    let outcome = client.request_optimal_route(&three_points());

    match outcome {
        RouteOutcome::RouteFound(route) => {
            assert!(route.is_empty());
            assert!(route.is_degenerate());
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
    handle.join().expect("Stub-Thread sollte beendet sein");
}

#[test]
fn test_http_500_resolves_transport_error_with_service_message() {
    let (endpoint, handle) = spawn_stub_service(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"error":"An error occurred on the server."}"#,
    );

    let client = RouteClient::new(&endpoint, 5);
    let outcome = client.request_optimal_route(&three_points());

    match outcome {
        RouteOutcome::TransportError(detail) => {
            assert!(detail.contains("500"), "Detail sollte den Status nennen: {detail}");
            assert!(
                detail.contains("An error occurred on the server."),
                "Detail sollte die Service-Meldung enthalten: {detail}"
            );
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
    handle.join().expect("Stub-Thread sollte beendet sein");
}

#[test]
fn test_http_400_without_error_body_still_transport_error() {
    let (endpoint, handle) = spawn_stub_service("HTTP/1.1 400 Bad Request", "no json here");

    let client = RouteClient::new(&endpoint, 5);
    let outcome = client.request_optimal_route(&[Vec2::new(1.0, 1.0)]);

    match outcome {
        RouteOutcome::TransportError(detail) => {
            assert!(detail.contains("400"), "Detail sollte den Status nennen: {detail}");
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
    handle.join().expect("Stub-Thread sollte beendet sein");
}

#[test]
fn test_invalid_json_resolves_transport_error() {
    let (endpoint, handle) = spawn_stub_service("HTTP/1.1 200 OK", "definitely-not-json");

    let client = RouteClient::new(&endpoint, 5);
    let outcome = client.request_optimal_route(&three_points());

    assert!(matches!(outcome, RouteOutcome::TransportError(_)));
    handle.join().expect("Stub-Thread sollte beendet sein");
}

#[test]
fn test_connection_refused_resolves_transport_error() {
    // Port reservieren und sofort wieder freigeben: dort lauscht niemand
    let listener = TcpListener::bind("127.0.0.1:0").expect("Port sollte reservierbar sein");
    let addr = listener.local_addr().expect("Adresse sollte vorliegen");
    drop(listener);

    let client = RouteClient::new(&format!("http://{addr}/optimize-route"), 5);
    let outcome = client.request_optimal_route(&three_points());

    assert!(matches!(outcome, RouteOutcome::TransportError(_)));
}

//! HTTP-Client für den Routen-Optimierungs-Service.
//!
//! Der Service erhält die aktuelle Punktmenge als JSON-POST und antwortet
//! mit einer optimalen Tour (`optimalRoute`) oder ohne dieses Feld, wenn
//! keine Tour gefunden wurde. Ein Versuch pro Auslösung, kein Retry.

use crate::core::Route;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request-Payload an den Service: `{"points": [[x,y], ...]}`.
#[derive(Serialize)]
struct OptimizeRouteRequest {
    points: Vec<[f32; 2]>,
}

/// Antwort des Service. `optimalRoute` fehlt, wenn keine Tour gefunden wurde.
#[derive(Deserialize)]
struct OptimizeRouteResponse {
    #[serde(rename = "optimalRoute")]
    optimal_route: Option<Vec<[f32; 2]>>,
}

/// Fehler-Body des Service bei Nicht-2xx-Antworten: `{"error": "..."}`.
#[derive(Deserialize)]
struct ServiceErrorBody {
    error: Option<String>,
}

/// Ergebnis eines Request/Response-Austauschs mit dem Service.
///
/// Alle drei Varianten sind Ergebnisse für den Controller, keine
/// propagierten Fehler: jede führt zurück in den Idle-Zustand.
#[derive(Debug, Clone)]
pub enum RouteOutcome {
    /// Der Service hat eine Tour geliefert (Länge ≥ 0).
    RouteFound(Route),
    /// Wohlgeformte Antwort ohne `optimalRoute`-Feld.
    NoRouteFound,
    /// Netzwerkfehler, Nicht-2xx-Status oder unlesbare Antwort.
    TransportError(String),
}

/// Client für den Optimierungs-Service.
pub struct RouteClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl RouteClient {
    /// Erstellt einen Client für den gegebenen Endpoint.
    ///
    /// Der Timeout begrenzt den gesamten Austausch; danach löst der
    /// Request als `TransportError` auf.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("HTTP-Client konnte nicht erstellt werden");

        Self {
            endpoint: endpoint.to_string(),
            client,
        }
    }

    /// Gibt den konfigurierten Endpoint zurück.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sendet die Punktmenge an den Service und mappt die Antwort.
    ///
    /// Ein vorhandenes `optimalRoute`-Feld zählt auch mit leerer Liste als
    /// `RouteFound`; die Degenerat-Behandlung übernimmt der Aufrufer.
    pub fn request_optimal_route(&self, points: &[Vec2]) -> RouteOutcome {
        let payload = OptimizeRouteRequest {
            points: points.iter().map(|p| [p.x, p.y]).collect(),
        };

        let response = match self.client.post(&self.endpoint).json(&payload).send() {
            Ok(response) => response,
            Err(e) => {
                let detail = if e.is_connect() {
                    format!("Keine Verbindung zum Service unter {}", self.endpoint)
                } else if e.is_timeout() {
                    format!("Service unter {} antwortet nicht (Timeout)", self.endpoint)
                } else {
                    format!("Request fehlgeschlagen: {e}")
                };
                return RouteOutcome::TransportError(detail);
            }
        };

        let status = response.status();
        if !status.is_success() {
            // Der Service liefert bei 400/500 ein {"error": "..."}-Feld mit
            // der eigentlichen Ursache. Wenn lesbar, wird es mitgegeben.
            let service_error = response
                .text()
                .ok()
                .and_then(|body| serde_json::from_str::<ServiceErrorBody>(&body).ok())
                .and_then(|body| body.error);

            let detail = match service_error {
                Some(message) => format!("Service antwortete mit Status {status}: {message}"),
                None => format!("Service antwortete mit Status {status}"),
            };
            return RouteOutcome::TransportError(detail);
        }

        let body: OptimizeRouteResponse = match response.json() {
            Ok(body) => body,
            Err(e) => {
                return RouteOutcome::TransportError(format!("Antwort nicht lesbar: {e}"));
            }
        };

        match body.optimal_route {
            Some(pairs) => {
                let points = pairs.into_iter().map(|[x, y]| Vec2::new(x, y)).collect();
                RouteOutcome::RouteFound(Route::new(points))
            }
            None => RouteOutcome::NoRouteFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_endpoint() {
        let client = RouteClient::new("http://localhost:3000/optimize-route", 30);
        assert_eq!(client.endpoint(), "http://localhost:3000/optimize-route");
    }

    #[test]
    fn test_request_payload_shape() {
        let payload = OptimizeRouteRequest {
            points: vec![[1.0, 2.0], [3.0, 4.0]],
        };
        let json = serde_json::to_string(&payload).expect("Payload muss serialisierbar sein");
        assert_eq!(json, r#"{"points":[[1.0,2.0],[3.0,4.0]]}"#);
    }
}

//! Anbindung an den externen Routen-Optimierungs-Service.

pub mod route_client;

pub use route_client::{RouteClient, RouteOutcome};

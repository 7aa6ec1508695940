//! Truck Route Planner Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod net;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog, RequestState, UiState};
pub use core::{PointSet, Route};
pub use net::{RouteClient, RouteOutcome};
pub use render::RenderOutcome;
pub use shared::{EditorOptions, RenderScene};

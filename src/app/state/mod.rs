//! Application State: Punktmenge, Routen-Anfrage, UI-Zustand.

pub mod app_state;
pub mod request;
pub mod ui_state;

pub use app_state::AppState;
pub use request::RequestState;
pub use ui_state::UiState;

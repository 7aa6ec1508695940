//! Baut die Render-Szene aus dem App-Zustand.

use super::AppState;
use crate::shared::RenderScene;

/// Erstellt die read-only Szene für einen Render-Frame.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        points: state.points.snapshot(),
        route: state.route.clone(),
        awaiting_route: state.request.is_awaiting(),
        options: state.options.clone(),
    }
}

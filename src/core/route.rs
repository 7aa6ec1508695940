//! Vom Optimierungs-Service berechnete Tour.

use glam::Vec2;

/// Geschlossene Tour als geordnete Koordinatenfolge.
///
/// Die Route speichert Koordinatenpaare statt Indizes in die Punktmenge.
/// Eine Antwort, die erst nach weiteren Punkt-Platzierungen eintrifft,
/// bleibt dadurch unverändert zeichenbar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    points: Vec<Vec2>,
}

impl Route {
    /// Erstellt eine Route aus einer Koordinatenfolge.
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Read-only Sicht auf die Tour-Punkte in Besuchsreihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Gibt die Anzahl der Tour-Punkte zurück.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Route keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Eine Route mit höchstens einem Punkt ergibt kein zeichenbares Polygon.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_below_two_points() {
        assert!(Route::new(Vec::new()).is_degenerate());
        assert!(Route::new(vec![Vec2::new(1.0, 1.0)]).is_degenerate());
        assert!(!Route::new(vec![Vec2::ZERO, Vec2::new(1.0, 1.0)]).is_degenerate());
    }
}

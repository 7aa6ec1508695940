//! Geordnete Menge aller vom Benutzer platzierten Punkte.

use glam::Vec2;

/// Container für alle platzierten Punkte in Einfüge-Reihenfolge.
///
/// Die Reihenfolge bestimmt sowohl den angezeigten 1-basierten Index
/// als auch die Reihenfolge im Request an den Optimierungs-Service.
/// Punkte werden nie entfernt, verschoben oder umsortiert.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Vec2>,
}

impl PointSet {
    /// Erstellt eine leere Punktmenge.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt ans Ende an. Die Länge wächst um genau 1.
    ///
    /// Koordinaten sind Oberflächen-Koordinaten; Bereichsgrenzen werden
    /// vom Aufrufer durch die Event-Umrechnung sichergestellt.
    pub fn append(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Gibt eine eigene Kopie der aktuellen Sequenz zurück.
    /// Mutation an der Kopie kann den internen Zustand nicht verändern.
    pub fn snapshot(&self) -> Vec<Vec2> {
        self.points.clone()
    }

    /// Read-only Sicht auf die Sequenz (für Rendering).
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Gibt die Anzahl der Punkte zurück.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn noch kein Punkt platziert wurde.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterator über die Punkte in Einfüge-Reihenfolge.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.points.iter()
    }
}

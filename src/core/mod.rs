//! Core-Domänentypen: Punktmenge und Route.

/// Core-Datenmodelle für den Routen-Planer
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - PointSet: geordnete, wachsende Menge platzierter Punkte
/// - Route: vom Service berechnete Tour als Koordinatenfolge
pub mod point_set;
pub mod route;

pub use point_set::PointSet;
pub use route::Route;

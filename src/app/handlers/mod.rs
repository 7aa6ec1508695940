//! Feature-Handler: Punkt-Platzierung, Routen-Anfrage, Dialoge.

pub mod dialog;
pub mod editing;
pub mod route;

use crate::net::RouteOutcome;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Zustand der Routen-Anfrage: Idle oder AwaitingRoute.
///
/// AwaitingRoute entspricht einem gehaltenen Empfänger-Ende des Kanals,
/// über den der Worker-Thread sein Ergebnis liefert. Mit dem Abholen des
/// Ergebnisses kehrt der Zustand automatisch zu Idle zurück.
#[derive(Default)]
pub struct RequestState {
    receiver: Option<Receiver<RouteOutcome>>,
}

impl RequestState {
    /// Erstellt den Idle-Zustand.
    pub fn new() -> Self {
        Self { receiver: None }
    }

    /// Gibt `true` zurück, solange eine Anfrage aussteht.
    pub fn is_awaiting(&self) -> bool {
        self.receiver.is_some()
    }

    /// Wechselt zu AwaitingRoute für die übergebene Anfrage.
    pub fn begin(&mut self, receiver: Receiver<RouteOutcome>) {
        self.receiver = Some(receiver);
    }

    /// Fragt das Ergebnis der laufenden Anfrage ab (einmal pro Frame).
    ///
    /// Liefert `None`, solange keine Anfrage läuft oder die Antwort noch
    /// aussteht. Ein abgerissener Kanal (Worker ohne Antwort beendet)
    /// wird als `TransportError` gemeldet, damit der Zustand nie in
    /// AwaitingRoute hängen bleibt.
    pub fn try_take_outcome(&mut self) -> Option<RouteOutcome> {
        let receiver = self.receiver.as_ref()?;

        match receiver.try_recv() {
            Ok(outcome) => {
                self.receiver = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                Some(RouteOutcome::TransportError(
                    "Anfrage wurde beendet, bevor eine Antwort vorlag".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_idle_until_begin() {
        let mut state = RequestState::new();
        assert!(!state.is_awaiting());
        assert!(state.try_take_outcome().is_none());
    }

    #[test]
    fn test_outcome_returns_state_to_idle() {
        let mut state = RequestState::new();
        let (sender, receiver) = mpsc::channel();
        state.begin(receiver);
        assert!(state.is_awaiting());

        // Antwort steht noch aus
        assert!(state.try_take_outcome().is_none());
        assert!(state.is_awaiting());

        sender.send(RouteOutcome::NoRouteFound).expect("Kanal offen");
        let outcome = state.try_take_outcome().expect("Ergebnis liegt vor");
        assert!(matches!(outcome, RouteOutcome::NoRouteFound));
        assert!(!state.is_awaiting());
    }

    #[test]
    fn test_disconnected_channel_becomes_transport_error() {
        let mut state = RequestState::new();
        let (sender, receiver) = mpsc::channel::<RouteOutcome>();
        state.begin(receiver);
        drop(sender);

        let outcome = state.try_take_outcome().expect("Abriss wird gemeldet");
        assert!(matches!(outcome, RouteOutcome::TransportError(_)));
        assert!(!state.is_awaiting());
    }
}

use macroquad::prelude::*;
use crate::application::SessionEvent;

/// Checkpoint name used by the save/load keys
pub const QUICKSAVE: &str = "quicksave";

/// Keys the viewer listens to, in the order they are checked
pub const BOUND_KEYS: [KeyCode; 7] = [
    KeyCode::Space,
    KeyCode::Right,
    KeyCode::Enter,
    KeyCode::R,
    KeyCode::S,
    KeyCode::L,
    KeyCode::N,
];

/// Map a key press to a session event
pub fn event_for_key(key: KeyCode, save_name: &str) -> Option<SessionEvent> {
    match key {
        KeyCode::Space => Some(SessionEvent::ToggleRun),
        KeyCode::Right => Some(SessionEvent::Step),
        KeyCode::Enter => Some(SessionEvent::Reseed),
        KeyCode::R => Some(SessionEvent::ResetToSnapshot),
        KeyCode::S => Some(SessionEvent::Save(save_name.to_owned())),
        KeyCode::L => Some(SessionEvent::Load(save_name.to_owned())),
        KeyCode::N => Some(SessionEvent::Perturb),
        _ => None,
    }
}

/// Collect the events for keys pressed since the last frame.
/// Presses are edge-triggered, so holding a key fires once.
pub fn poll_events(save_name: &str) -> Vec<SessionEvent> {
    BOUND_KEYS
        .iter()
        .filter(|key| is_key_pressed(**key))
        .filter_map(|key| event_for_key(*key, save_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bound_key_maps_to_an_event() {
        for key in BOUND_KEYS {
            assert!(event_for_key(key, QUICKSAVE).is_some(), "{key:?}");
        }
    }

    #[test]
    fn test_save_and_load_carry_name() {
        assert_eq!(
            event_for_key(KeyCode::S, "slot1"),
            Some(SessionEvent::Save("slot1".into()))
        );
        assert_eq!(
            event_for_key(KeyCode::L, "slot1"),
            Some(SessionEvent::Load("slot1".into()))
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(event_for_key(KeyCode::Q, QUICKSAVE), None);
    }
}

// Per-player input state management

use super::action::Action;
use crate::game::characters::{Direction, DirectionSet};
use std::collections::HashSet;

/// Represents the input state for a single player
#[derive(Debug)]
pub struct PlayerInput {
    player_id: usize,

    /// Actions that are currently pressed this frame
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    pub fn player_id(&self) -> usize {
        self.player_id
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Start a new frame. Call once per frame after the tick consumed the
    /// state.
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Movement directions held right now.
    ///
    /// A key tapped and released within the same frame still counts, so
    /// short taps are not lost between ticks.
    pub fn intent(&self) -> DirectionSet {
        Direction::PRIORITY
            .into_iter()
            .filter(|&direction| {
                let action = Action::Move(direction);
                self.is_pressed(action) || self.just_pressed(action)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NE: Action = Action::Move(Direction::NorthEast);
    const SW: Action = Action::Move(Direction::SouthWest);

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new(0);
        input.press(NE);
        assert!(input.is_pressed(NE));
        assert!(input.just_pressed(NE));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new(0);
        input.press(NE);
        input.update();
        input.release(NE);
        assert!(!input.is_pressed(NE));
        assert!(input.just_released(NE));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new(0);
        input.press(NE);
        input.update();
        assert!(input.is_pressed(NE));
        assert!(!input.just_pressed(NE));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new(0);
        input.release(NE);
        assert!(!input.just_released(NE));
    }

    #[test]
    fn test_intent_neutral() {
        let input = PlayerInput::new(0);
        assert!(input.intent().is_empty());
        assert_eq!(input.intent().resolve(), None);
    }

    #[test]
    fn test_intent_held_directions() {
        let mut input = PlayerInput::new(0);
        input.press(SW);
        input.press(NE);
        input.press(Action::Pause);

        let intent = input.intent();
        assert!(intent.contains(Direction::SouthWest));
        assert!(intent.contains(Direction::NorthEast));
        assert!(!intent.contains(Direction::NorthWest));
        assert_eq!(intent.resolve(), Some(Direction::NorthEast));
    }

    #[test]
    fn test_tap_within_frame_is_kept() {
        let mut input = PlayerInput::new(0);
        input.press(SW);
        input.release(SW);
        assert_eq!(input.intent().resolve(), Some(Direction::SouthWest));

        input.update();
        assert!(input.intent().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new(0);
        input.press(NE);
        input.press(SW);
        input.reset();
        assert!(input.intent().is_empty());
    }
}

// Input manager - Main coordination system for all input

use super::action::{Action, InputSource};
use super::config::InputConfigManager;
use super::player::PlayerInput;
use crate::game::characters::DirectionSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Main input manager that coordinates all input for all players
pub struct InputManager {
    config: InputConfigManager,

    /// Input state for each player
    players: Vec<PlayerInput>,

    /// Global actions pressed since last drained (pause, menu)
    global_pressed: Vec<Action>,
}

impl InputManager {
    pub fn new(max_players: usize) -> Self {
        Self {
            config: InputConfigManager::new(max_players),
            players: (0..max_players).map(PlayerInput::new).collect(),
            global_pressed: Vec::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(
                key_code,
                event.state == ElementState::Pressed,
                event.repeat,
            );
        }
    }

    /// Apply a key transition to every player bound to it
    pub fn process_key(&mut self, key_code: KeyCode, pressed: bool, repeat: bool) {
        // Key repeats carry no new information for held-key movement
        if repeat {
            return;
        }

        let source = InputSource::key(key_code);

        if pressed {
            if let Some(action) = self.config.get_global_action(source) {
                self.global_pressed.push(action);
            }
        }

        for player in &mut self.players {
            let Some(action) = self.config.get_action(player.player_id(), source) else {
                continue;
            };
            if pressed {
                player.press(action);
            } else {
                player.release(action);
            }
        }
    }

    /// Start a new input frame. Call after the simulation consumed the
    /// players' intent.
    pub fn update(&mut self) {
        for player in &mut self.players {
            player.update();
        }
    }

    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    pub fn player_mut(&mut self, player_id: usize) -> Option<&mut PlayerInput> {
        self.players.get_mut(player_id)
    }

    /// Movement intent of one player, empty for unknown players
    pub fn intent(&self, player_id: usize) -> DirectionSet {
        self.player(player_id)
            .map(PlayerInput::intent)
            .unwrap_or_default()
    }

    /// Global actions pressed since the last call, in press order
    pub fn drain_global_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.global_pressed)
    }

    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfigManager {
        &mut self.config
    }

    /// Reset all player input states
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.global_pressed.clear();
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::Direction;

    #[test]
    fn test_manager_creation() {
        let manager = InputManager::new(2);
        assert_eq!(manager.num_players(), 2);
        assert!(manager.player(1).is_some());
        assert!(manager.player(2).is_none());
        assert!(manager.intent(5).is_empty());
    }

    #[test]
    fn test_key_routes_to_bound_player() {
        let mut manager = InputManager::new(2);
        manager.process_key(KeyCode::KeyD, true, false);
        manager.process_key(KeyCode::ArrowLeft, true, false);

        assert_eq!(manager.intent(0).resolve(), Some(Direction::NorthEast));
        assert_eq!(manager.intent(1).resolve(), Some(Direction::SouthWest));
    }

    #[test]
    fn test_key_release() {
        let mut manager = InputManager::new(2);
        manager.process_key(KeyCode::KeyW, true, false);
        manager.update();
        manager.process_key(KeyCode::KeyW, false, false);

        let player = manager.player(0).unwrap();
        assert!(!player.is_pressed(Action::Move(Direction::NorthWest)));
        assert!(player.just_released(Action::Move(Direction::NorthWest)));
    }

    #[test]
    fn test_repeats_ignored() {
        let mut manager = InputManager::new(2);
        manager.process_key(KeyCode::KeyS, true, true);
        assert!(manager.intent(0).is_empty());
    }

    #[test]
    fn test_simultaneous_keys_resolve_by_priority() {
        let mut manager = InputManager::new(1);
        // A (south-west) then W (north-west): north-west wins regardless of order
        manager.process_key(KeyCode::KeyA, true, false);
        manager.process_key(KeyCode::KeyW, true, false);
        assert_eq!(manager.intent(0).resolve(), Some(Direction::NorthWest));
    }

    #[test]
    fn test_global_actions() {
        let mut manager = InputManager::new(2);
        manager.process_key(KeyCode::KeyP, true, false);
        manager.process_key(KeyCode::KeyP, false, false);
        manager.process_key(KeyCode::Escape, true, false);
        assert_eq!(manager.drain_global_actions(), vec![Action::Pause, Action::Menu]);
        assert!(manager.drain_global_actions().is_empty());

        // Global keys never leak into player intent
        assert!(manager.intent(0).is_empty());
    }

    #[test]
    fn test_reset_all() {
        let mut manager = InputManager::new(2);
        manager.process_key(KeyCode::KeyD, true, false);
        manager.reset_all();
        assert!(manager.intent(0).is_empty());
    }

    #[test]
    fn test_direct_input_manipulation() {
        let mut manager = InputManager::new(2);
        if let Some(player) = manager.player_mut(1) {
            player.press(Action::Move(Direction::SouthEast));
        }
        assert_eq!(manager.intent(1).resolve(), Some(Direction::SouthEast));
    }
}

// Input handling system
//
// Turns keyboard events into per-player movement intent. The movement core
// never sees keys, only the `DirectionSet` each player holds on a tick.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `player`: Per-player input state management
// - `config`: Input configuration and remapping system
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// use engine::input::InputManager;
//
// let mut input_manager = InputManager::new(2);
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Feed the held directions to the simulation tick
// characters.set_player_intent(0, input_manager.intent(0));
//
// // At the end of each frame, update the input state
// input_manager.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::{InputConfig, InputConfigManager};
pub use manager::InputManager;
pub use player::PlayerInput;

// Engine modules: process setup, frame timing, input

pub mod game_loop;
pub mod input;
pub mod setup;

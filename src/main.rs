use anyhow::Result;
use glam::Vec2;
use log::{info, trace};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use crate::core::{IsoProjection, TileCoord};
use engine::game_loop::{GameLoop, FIXED_TIMESTEP};
use engine::input::{Action, InputManager};
use game::characters::{CharacterManager, BASE_CONFIG};
use game::map::GridMap;

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;

const TILE_WIDTH: f32 = 64.0;
const TILE_HEIGHT: f32 = 32.0;

/// Test room: `#` walls, `S` where the subject starts
const ROOM_LAYOUT: &str = "
    ##########
    #S.......#
    #..##....#
    #..##....#
    #........#
    #....#...#
    #....#...#
    ##########
";

const PLAYERS: usize = 2;

fn main() -> Result<()> {
    engine::setup::init();

    let map = GridMap::from_ascii(ROOM_LAYOUT)?;
    // Top corner of the diamond sits at the top-centre of the window
    let projection = IsoProjection::new(
        TILE_WIDTH,
        TILE_HEIGHT,
        Vec2::new(WINDOW_WIDTH as f32 / 2.0, TILE_HEIGHT),
    )?;

    let mut characters = CharacterManager::new(projection, BASE_CONFIG)?;
    characters.spawn_character("Subject", Some(0), map.spawn().unwrap_or(TileCoord::new(1, 1)))?;
    characters.spawn_character("Visitor", Some(1), TileCoord::new(8, 6))?;
    info!(
        "Loaded {}x{} room with {} characters",
        map.width(),
        map.height(),
        characters.count()
    );

    let mut input = InputManager::new(PLAYERS);
    let mut game_loop = GameLoop::new();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Murder Desk")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput {
                    event: key_event, ..
                },
                ..
            } => {
                input.process_keyboard_event(&key_event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                for action in input.drain_global_actions() {
                    match action {
                        Action::Pause => game_loop.toggle_pause(),
                        Action::Menu => {
                            info!("Menu requested, shutting down...");
                            elwt.exit();
                        }
                        Action::Move(_) => {}
                    }
                }

                let updates = game_loop.begin_frame();
                step_frame(updates, game_loop.is_paused(), &mut input, &mut characters, &map);

                // Rendering happens elsewhere; this is what it would receive
                for character in characters.all() {
                    let frame = character.render_frame();
                    trace!(
                        "{} at {} (+{}) frame {:?}",
                        character.name,
                        frame.position,
                        frame.sprite_offset,
                        frame.frame
                    );
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Feed player intent to the characters and run the fixed updates granted for
/// one frame
fn step_frame(
    updates: u32,
    paused: bool,
    input: &mut InputManager,
    characters: &mut CharacterManager,
    map: &GridMap,
) {
    if updates == 0 {
        // Taps made while paused are dropped; otherwise they wait for a tick
        if paused {
            input.update();
        }
        return;
    }

    for player in 0..input.num_players() {
        characters.set_player_intent(player, input.intent(player));
    }
    for _ in 0..updates {
        characters.update(FIXED_TIMESTEP, map);
    }
    input.update();
}

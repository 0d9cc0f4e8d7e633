// Character entity and management

use std::sync::Arc;

use glam::Vec2;
use log::info;

use crate::core::{ConfigError, IsoProjection, TileCoord};
use crate::game::map::CollisionOracle;

use super::animation::{ClipTable, FrameRef};
use super::config::CharacterConfig;
use super::movement::{MovementController, RenderFrame};
use super::state::{DirectionSet, MotionState};

/// Unique identifier for a character
pub type CharacterId = u32;

/// A player-controlled or scripted character walking the map
#[derive(Debug)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,
    /// Character name (for display)
    pub name: String,
    /// Player index controlling this character, or None when scripted
    pub player_index: Option<usize>,
    /// Tile movement and animation state
    pub movement: MovementController,
    /// Directions asserted for the next tick (updated by the input system)
    pub intent: DirectionSet,
}

impl Character {
    pub fn new(
        id: CharacterId,
        name: &str,
        player_index: Option<usize>,
        movement: MovementController,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            player_index,
            movement,
            intent: DirectionSet::EMPTY,
        }
    }

    /// Run one tick with the currently held intent
    pub fn update<O>(&mut self, dt: f32, oracle: &O) -> FrameRef
    where
        O: CollisionOracle + ?Sized,
    {
        self.movement.tick(dt, self.intent, oracle)
    }

    pub fn tile(&self) -> TileCoord {
        self.movement.tile()
    }

    pub fn position(&self) -> Vec2 {
        self.movement.render_position()
    }

    pub fn state(&self) -> MotionState {
        self.movement.motion_state()
    }

    pub fn render_frame(&self) -> RenderFrame {
        self.movement.render_frame()
    }

    /// Drop any held directions
    pub fn clear_input(&mut self) {
        self.intent = DirectionSet::EMPTY;
    }
}

/// Manages all characters on one map. Characters share the projection,
/// configuration and clip table; each owns its own movement state.
#[derive(Debug)]
pub struct CharacterManager {
    characters: Vec<Character>,
    next_id: CharacterId,
    projection: IsoProjection,
    config: CharacterConfig,
    clips: Arc<ClipTable>,
}

impl CharacterManager {
    /// Manager using the standard sprite sheet layout
    pub fn new(projection: IsoProjection, config: CharacterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let clips = Arc::new(ClipTable::standard(&config)?);
        Ok(Self::with_clips(projection, config, clips))
    }

    pub fn with_clips(
        projection: IsoProjection,
        config: CharacterConfig,
        clips: Arc<ClipTable>,
    ) -> Self {
        Self {
            characters: Vec::new(),
            next_id: 0,
            projection,
            config,
            clips,
        }
    }

    /// Spawn a new idle character on `tile`
    pub fn spawn_character(
        &mut self,
        name: &str,
        player_index: Option<usize>,
        tile: TileCoord,
    ) -> Result<CharacterId, ConfigError> {
        let movement =
            MovementController::new(tile, self.projection, self.config, Arc::clone(&self.clips))?;
        Ok(self.insert(name, player_index, movement))
    }

    /// Spawn a new idle character on the tile under a screen-space map marker
    pub fn spawn_at_marker(
        &mut self,
        name: &str,
        player_index: Option<usize>,
        marker: Vec2,
    ) -> Result<CharacterId, ConfigError> {
        let movement = MovementController::spawn_at_marker(
            marker,
            self.projection,
            self.config,
            Arc::clone(&self.clips),
        )?;
        Ok(self.insert(name, player_index, movement))
    }

    fn insert(
        &mut self,
        name: &str,
        player_index: Option<usize>,
        movement: MovementController,
    ) -> CharacterId {
        let id = self.next_id;
        self.next_id += 1;

        info!(
            "Spawned {name} (#{id}) at tile {:?}, position {}",
            movement.tile(),
            movement.render_position()
        );
        self.characters
            .push(Character::new(id, name, player_index, movement));
        id
    }

    /// Get a character by ID
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Get a mutable character by ID
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Get a character by player index
    pub fn get_by_player(&self, player_index: usize) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.player_index == Some(player_index))
    }

    /// Get a mutable character by player index
    pub fn get_by_player_mut(&mut self, player_index: usize) -> Option<&mut Character> {
        self.characters
            .iter_mut()
            .find(|c| c.player_index == Some(player_index))
    }

    /// Set the held directions of the character a player controls
    pub fn set_player_intent(&mut self, player_index: usize, intent: DirectionSet) {
        if let Some(character) = self.get_by_player_mut(player_index) {
            character.intent = intent;
        }
    }

    /// Get all characters
    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    /// Advance every character by one tick
    pub fn update<O>(&mut self, dt: f32, oracle: &O)
    where
        O: CollisionOracle + ?Sized,
    {
        for character in &mut self.characters {
            character.update(dt, oracle);
        }
    }

    /// Remove a character by ID
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let pos = self.characters.iter().position(|c| c.id == id)?;
        Some(self.characters.remove(pos))
    }

    /// Get the number of characters
    pub fn count(&self) -> usize {
        self.characters.len()
    }

    /// Number of characters currently between tiles
    pub fn moving_count(&self) -> usize {
        self.characters
            .iter()
            .filter(|c| c.state() == MotionState::Moving)
            .count()
    }

    pub fn projection(&self) -> &IsoProjection {
        &self.projection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::config::BASE_CONFIG;
    use crate::game::characters::state::Direction;
    use crate::game::map::GridMap;

    fn manager() -> CharacterManager {
        let projection = IsoProjection::new(64.0, 32.0, Vec2::new(320.0, 0.0)).unwrap();
        CharacterManager::new(projection, BASE_CONFIG).unwrap()
    }

    #[test]
    fn test_character_manager_new() {
        let manager = manager();
        assert_eq!(manager.count(), 0);
        assert_eq!(manager.moving_count(), 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let projection = IsoProjection::new(64.0, 32.0, Vec2::ZERO).unwrap();
        let result = CharacterManager::new(projection, BASE_CONFIG.with_move_duration(-1.0));
        assert!(matches!(result, Err(ConfigError::InvalidMoveDuration(_))));
    }

    #[test]
    fn test_spawn_and_lookup() {
        let mut manager = manager();
        let a = manager
            .spawn_character("Subject", Some(0), TileCoord::new(1, 1))
            .unwrap();
        let b = manager
            .spawn_character("Guard", None, TileCoord::new(4, 2))
            .unwrap();

        assert_ne!(a, b);
        assert_eq!(manager.count(), 2);
        assert_eq!(manager.get(b).unwrap().name, "Guard");
        assert_eq!(manager.get_by_player(0).unwrap().id, a);
        assert!(manager.get_by_player(1).is_none());
    }

    #[test]
    fn test_characters_move_independently() {
        let mut manager = manager();
        let map = GridMap::open(8, 8);
        let a = manager
            .spawn_character("Subject", Some(0), TileCoord::new(1, 1))
            .unwrap();
        let b = manager
            .spawn_character("Guard", None, TileCoord::new(4, 4))
            .unwrap();

        manager.set_player_intent(0, DirectionSet::single(Direction::SouthEast));
        manager.update(1.0 / 60.0, &map);

        assert_eq!(manager.moving_count(), 1);
        assert_eq!(manager.get(a).unwrap().tile(), TileCoord::new(2, 1));
        assert_eq!(manager.get(b).unwrap().tile(), TileCoord::new(4, 4));
        assert_eq!(manager.get(b).unwrap().state(), MotionState::Idle);
    }

    #[test]
    fn test_scripted_character_intent() {
        let mut manager = manager();
        let map = GridMap::open(8, 8);
        let id = manager
            .spawn_character("Guard", None, TileCoord::new(4, 4))
            .unwrap();

        if let Some(guard) = manager.get_mut(id) {
            guard.intent = DirectionSet::single(Direction::NorthEast);
        }
        manager.update(0.1, &map);
        if let Some(guard) = manager.get_mut(id) {
            guard.clear_input();
        }
        for _ in 0..5 {
            manager.update(0.1, &map);
        }

        let guard = manager.get(id).unwrap();
        assert_eq!(guard.tile(), TileCoord::new(4, 3));
        assert_eq!(guard.state(), MotionState::Idle);
        assert_eq!(
            guard.position(),
            manager.projection().tile_to_iso(TileCoord::new(4, 3))
        );
    }

    #[test]
    fn test_spawn_at_marker() {
        let mut manager = manager();
        let marker = manager.projection().tile_to_iso_f(2.5, 3.5);
        let id = manager.spawn_at_marker("Subject", Some(0), marker).unwrap();
        assert_eq!(manager.get(id).unwrap().tile(), TileCoord::new(2, 3));
    }

    #[test]
    fn test_remove() {
        let mut manager = manager();
        let id = manager
            .spawn_character("Subject", Some(0), TileCoord::new(0, 0))
            .unwrap();
        assert!(manager.remove(id).is_some());
        assert!(manager.remove(id).is_none());
        assert_eq!(manager.count(), 0);
    }
}

//! Fixed-timestep frame driver
//!
//! Wall-clock time is accumulated and handed to the simulation in
//! `FIXED_TIMESTEP` slices, so movement and animation advance by the same
//! deltas no matter how fast frames arrive.

use std::time::{Duration, Instant};

/// Simulation rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Cap on ticks per frame so a long stall doesn't snowball
pub const MAX_UPDATES_PER_FRAME: u32 = 5;

pub struct GameLoop {
    /// `FIXED_TIMESTEP` as a `Duration`, so the accumulator drains exactly
    /// what the ticks simulate
    step: Duration,
    accumulator: Duration,
    last_frame_time: Instant,
    paused: bool,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            step: Duration::from_secs_f32(FIXED_TIMESTEP),
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Begin a new frame from the wall clock, returns the number of fixed
    /// updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of elapsed time, returns the number of fixed
    /// updates to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= self.step && updates < MAX_UPDATES_PER_FRAME {
            self.accumulator -= self.step;
            updates += 1;
        }

        // Drop the backlog beyond the cap instead of replaying it later
        if updates == MAX_UPDATES_PER_FRAME {
            self.accumulator = self.accumulator.min(self.step);
        }

        self.update_count += u64::from(updates);
        updates
    }

    /// Seconds each fixed update represents
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
        assert!(!game_loop.is_paused());
        assert!((game_loop.fixed_timestep() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(Duration::from_millis(10)), 0);
        assert_eq!(game_loop.advance(Duration::from_millis(10)), 1);
        assert_eq!(game_loop.advance(Duration::from_millis(34)), 2);
        assert_eq!(game_loop.update_count(), 3);
        assert_eq!(game_loop.frame_count(), 3);
    }

    #[test]
    fn test_simulated_time_matches_wall_time() {
        let mut game_loop = GameLoop::new();
        let step = Duration::from_secs_f32(FIXED_TIMESTEP);

        assert_eq!(game_loop.advance(step * 3), 3);
        for _ in 0..57 {
            assert_eq!(game_loop.advance(step), 1);
        }
        assert_eq!(game_loop.update_count(), 60);
    }

    #[test]
    fn test_max_updates_limit() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(Duration::from_millis(300)), MAX_UPDATES_PER_FRAME);
        // Backlog was dropped, so the next short frame yields at most one update
        assert!(game_loop.advance(Duration::from_millis(1)) <= 1);
    }

    #[test]
    fn test_paused_no_updates() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();
        assert_eq!(game_loop.advance(Duration::from_millis(100)), 0);
        assert_eq!(game_loop.frame_count(), 1);

        game_loop.resume();
        assert_eq!(game_loop.advance(Duration::from_millis(17)), 1);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();
        game_loop.toggle_pause();
        assert!(game_loop.is_paused());
        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }
}

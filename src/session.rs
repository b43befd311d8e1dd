//! Game loop wrapper that stops ticking once an episode ends.
//!
//! [`WorldState`] reports terminal outcomes but keeps running if called.
//! A [`Session`] latches the first terminal outcome and ignores further
//! ticks until a reset pulse arrives, which reinitialises the world between
//! ticks.

use log::debug;

use crate::camera::CameraPose;
use crate::config::GameConfig;
use crate::input::InputSnapshot;
use crate::map::Map;
use crate::world::{EpisodeOutcome, TickReport, WorldState};

/// Whether the session is still advancing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Ticks advance the world.
    #[default]
    Running,
    /// The episode ended; only a reset does anything.
    Ended(EpisodeOutcome),
}

/// A world paired with the map it is played on.
#[derive(Clone, Debug)]
pub struct Session {
    world: WorldState,
    map: Map,
    status: SessionStatus,
}

impl Session {
    /// Starts a session on `map`.
    #[must_use]
    pub fn new(config: GameConfig, map: Map) -> Self {
        Self {
            world: WorldState::new(config),
            map,
            status: SessionStatus::Running,
        }
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// The episode state.
    #[must_use]
    pub const fn world(&self) -> &WorldState {
        &self.world
    }

    /// Mutable episode state.
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// The map being played.
    #[must_use]
    pub const fn map(&self) -> &Map {
        &self.map
    }

    /// Camera pose to draw with right now.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.world.pose()
    }

    /// Processes one frame of input.
    ///
    /// A reset pulse reinitialises the episode and consumes the frame.
    /// After a terminal outcome every other frame is ignored. Otherwise the
    /// world ticks and its report is returned.
    pub fn step(&mut self, input: &InputSnapshot) -> Option<TickReport> {
        if input.reset {
            self.world.reset();
            self.status = SessionStatus::Running;
            return None;
        }
        if let SessionStatus::Ended(outcome) = self.status {
            debug!("ignoring input: episode ended with {outcome:?}");
            return None;
        }
        let report = self.world.tick(&self.map, input);
        if report.outcome.is_terminal() {
            self.status = SessionStatus::Ended(report.outcome);
        }
        Some(report)
    }
}

//! The mutable state of one episode and the per-tick driver.
//!
//! [`WorldState`] owns everything that changes during an episode: the body,
//! the view mode, the gauge and the camera blender. The map is passed in by
//! reference on every tick and never modified. A tick runs to completion:
//!
//! 1. the mode toggle pulse (dropped while a camera blend is in flight),
//! 2. the jump pulse (dropped while a blend is in flight),
//! 3. gauge drain or recovery (frozen during a blend when configured),
//! 4. the physics step (input ignored during a blend, gravity never),
//! 5. the camera advance.
//!
//! The world keeps no game-over flag. Terminal outcomes are reported in the
//! [`TickReport`] and it is up to the caller to stop ticking; see
//! [`crate::session::Session`].

use glam::Vec3;
use log::info;

use crate::body::Body;
use crate::camera::{pose_for, CameraBlender, CameraPose};
use crate::config::GameConfig;
use crate::gauge::Gauge;
use crate::input::InputSnapshot;
use crate::map::Map;
use crate::physics::{self, try_jump};
use crate::Mode;

/// How the episode stands after a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EpisodeOutcome {
    /// Nothing terminal happened.
    #[default]
    Ongoing,
    /// The body dropped below the fall threshold.
    FellOut,
    /// The gauge ran out while the view was planar.
    GaugeDepleted,
    /// The body reached the goal.
    GoalReached,
}

impl EpisodeOutcome {
    /// Returns `true` for every outcome except [`EpisodeOutcome::Ongoing`].
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Everything the presentation layer needs after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    /// Episode status after the tick.
    pub outcome: EpisodeOutcome,
    /// Body position after the tick.
    pub body_position: Vec3,
    /// Whether the body ended the tick supported.
    pub grounded: bool,
    /// Camera pose to render with.
    pub pose: CameraPose,
    /// Gauge value for the HUD.
    pub gauge: f32,
    /// Active view mode.
    pub mode: Mode,
}

/// Mutable state of one episode.
#[derive(Clone, Debug)]
pub struct WorldState {
    config: GameConfig,
    body: Body,
    mode: Mode,
    gauge: Gauge,
    camera: CameraBlender,
    ticks: u64,
}

impl WorldState {
    /// Creates a world at the configured spawn point.
    ///
    /// `config` is expected to have passed [`GameConfig::validate`].
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mode = config.episode.initial_mode;
        Self {
            body: Body::new(config.episode.spawn, config.physics.radius),
            mode,
            gauge: Gauge::full(config.gauge.max),
            camera: CameraBlender::settled(mode),
            ticks: 0,
            config,
        }
    }

    /// Reinitialises body, mode, gauge and camera in one step.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
        info!("episode reset");
    }

    /// Configuration the world was built with.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The controllable body.
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable access to the body, for placing it in tests and editors.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Active view mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Projection gauge.
    #[must_use]
    pub const fn gauge(&self) -> &Gauge {
        &self.gauge
    }

    /// Camera state machine.
    #[must_use]
    pub const fn camera(&self) -> &CameraBlender {
        &self.camera
    }

    /// Number of ticks since the last reset.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Camera pose for the current state, without advancing anything.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        pose_for(self.camera.state(), self.body.position, &self.config.camera)
    }

    /// Advances the episode by one tick.
    ///
    /// When several terminal conditions hold on the same tick the outcome
    /// is, in priority order, gauge depletion, falling out, then reaching
    /// the goal.
    pub fn tick(&mut self, map: &Map, input: &InputSnapshot) -> TickReport {
        if input.toggle_mode {
            if let Some(next) = self.camera.request_toggle(self.mode) {
                self.mode = next;
            }
        }
        let suspended = self.camera.is_transitioning();
        let effective = if suspended {
            input.without_pulses()
        } else {
            *input
        };

        if effective.jump {
            try_jump(&mut self.body, self.mode, &self.config.physics);
        }

        let gauge_frozen = suspended && self.config.gauge.pause_during_transition;
        let depleted = if gauge_frozen {
            self.mode.is_planar() && self.gauge.is_depleted()
        } else {
            self.gauge.update(self.mode, &self.config.gauge)
        };

        let step = physics::step(
            &mut self.body,
            self.mode,
            effective.movement_axes(self.mode),
            suspended,
            map,
            &self.config.physics,
            self.config.episode.goal_tolerance,
        );

        let pose = self.camera.advance(self.body.position, &self.config.camera);
        self.ticks += 1;

        let outcome = if depleted {
            EpisodeOutcome::GaugeDepleted
        } else if step.fell_out {
            EpisodeOutcome::FellOut
        } else if step.reached_goal {
            EpisodeOutcome::GoalReached
        } else {
            EpisodeOutcome::Ongoing
        };
        if outcome.is_terminal() {
            info!(
                "episode ended with {outcome:?} after {} ticks at {}",
                self.ticks, self.body.position
            );
        }

        TickReport {
            outcome,
            body_position: self.body.position,
            grounded: step.grounded,
            pose,
            gauge: self.gauge.value(),
            mode: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraState;
    use crate::geometry::Aabb;
    use crate::map::{Floor, Goal};
    use rstest::{fixture, rstest};

    #[fixture]
    fn flat() -> Map {
        Map {
            floors: vec![Floor::new(Aabb::from_center_size(
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(100.0, 0.5, 20.0),
            ))],
            obstacles: Vec::new(),
            goal: Goal {
                position: Vec3::new(500.0, 0.7, 0.0),
            },
        }
    }

    fn config_in(mode: Mode) -> GameConfig {
        let mut config = GameConfig::default();
        config.episode.initial_mode = mode;
        config
    }

    fn toggle() -> InputSnapshot {
        InputSnapshot {
            toggle_mode: true,
            ..InputSnapshot::IDLE
        }
    }

    #[rstest]
    fn toggle_flips_mode_and_starts_blend(flat: Map) {
        let mut world = WorldState::new(config_in(Mode::Planar));
        let report = world.tick(&flat, &toggle());
        assert_eq!(report.mode, Mode::Chase);
        assert!(world.camera().is_transitioning());
        assert!(report.pose.fov_degrees().is_some());
    }

    #[rstest]
    fn movement_is_suspended_during_blend(flat: Map) {
        let mut world = WorldState::new(config_in(Mode::Chase));
        world.tick(&flat, &toggle());
        let x = world.body().position.x;
        let right = InputSnapshot {
            right: true,
            ..InputSnapshot::IDLE
        };
        world.tick(&flat, &right);
        assert_eq!(world.body().position.x, x);
    }

    #[rstest]
    fn jump_is_dropped_during_blend(flat: Map) {
        let mut world = WorldState::new(config_in(Mode::Chase));
        for _ in 0..60 {
            world.tick(&flat, &InputSnapshot::IDLE);
        }
        assert!(world.body().grounded);

        world.tick(&flat, &toggle());
        let jump = InputSnapshot {
            jump: true,
            ..InputSnapshot::IDLE
        };
        world.tick(&flat, &jump);
        assert!(world.body().grounded);
        assert_eq!(world.body().velocity.y, 0.0);
    }

    #[rstest]
    fn gauge_frozen_during_blend(flat: Map) {
        let mut world = WorldState::new(config_in(Mode::Planar));
        world.tick(&flat, &InputSnapshot::IDLE);
        assert_eq!(world.gauge().value(), 99.0);
        world.tick(&flat, &toggle());
        for _ in 0..10 {
            world.tick(&flat, &InputSnapshot::IDLE);
        }
        assert_eq!(world.gauge().value(), 99.0);
    }

    #[rstest]
    fn gauge_depletes_on_the_tick_it_reaches_zero(flat: Map) {
        let mut config = config_in(Mode::Planar);
        config.gauge.max = 5.0;
        let mut world = WorldState::new(config);
        for _ in 0..4 {
            let report = world.tick(&flat, &InputSnapshot::IDLE);
            assert_eq!(report.outcome, EpisodeOutcome::Ongoing);
        }
        let report = world.tick(&flat, &InputSnapshot::IDLE);
        assert_eq!(report.gauge, 0.0);
        assert_eq!(report.outcome, EpisodeOutcome::GaugeDepleted);
    }

    #[rstest]
    fn gauge_stays_within_bounds_with_oversized_max(flat: Map) {
        let mut config = config_in(Mode::Chase);
        config.gauge.max = 500.0;
        let mut world = WorldState::new(config);
        for _ in 0..10 {
            let report = world.tick(&flat, &InputSnapshot::IDLE);
            assert!(report.gauge <= world.gauge().max());
            assert!(report.gauge <= 100.0, "gauge {} exceeds 100", report.gauge);
        }
    }

    #[rstest]
    fn spawn_counts_as_grounded_for_the_first_jump(flat: Map) {
        let mut world = WorldState::new(config_in(Mode::Planar));
        let jump = InputSnapshot {
            jump: true,
            ..InputSnapshot::IDLE
        };
        let first = world.tick(&flat, &jump);
        assert!(world.body().velocity.y > 0.0);
        let second = world.tick(&flat, &jump);
        assert!(second.body_position.y < first.body_position.y + 0.2);
        assert!(world.body().velocity.y < 0.2 - 0.01 - 1e-6, "airborne jump ignored");
    }

    #[rstest]
    fn fell_out_after_one_tick_below_threshold(flat: Map) {
        let mut world = WorldState::new(config_in(Mode::Chase));
        world.body_mut().position = Vec3::new(200.0, -10.01, 0.0);
        let report = world.tick(&flat, &InputSnapshot::IDLE);
        assert_eq!(report.outcome, EpisodeOutcome::FellOut);
    }

    #[rstest]
    fn reset_restores_spawn_state(flat: Map) {
        let mut world = WorldState::new(config_in(Mode::Planar));
        world.tick(&flat, &toggle());
        world.body_mut().position = Vec3::new(30.0, -3.0, 2.0);
        world.reset();
        assert_eq!(world.mode(), Mode::Planar);
        assert_eq!(world.body().position, Vec3::new(4.0, 1.5, 0.0));
        assert_eq!(world.gauge().value(), 100.0);
        assert_eq!(world.camera().state(), CameraState::Settled(Mode::Planar));
        assert_eq!(world.ticks(), 0);
    }
}

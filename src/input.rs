//! Per-tick input snapshot.
//!
//! Keyboard or controller handling lives outside the crate. Whatever drives
//! the game samples its devices once per frame and hands the result to the
//! tick as an [`InputSnapshot`]. The held directions are levels; `jump`,
//! `toggle_mode` and `reset` are edge-triggered pulses that are only `true`
//! on the tick the key went down.

use glam::{Vec2, Vec3};

use crate::Mode;

/// Directional flags and pulses sampled for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "The snapshot is exactly four held directions plus three pulses."
)]
pub struct InputSnapshot {
    /// "Up" is held.
    pub up: bool,
    /// "Down" is held.
    pub down: bool,
    /// "Left" is held.
    pub left: bool,
    /// "Right" is held.
    pub right: bool,
    /// Jump was pressed this tick.
    pub jump: bool,
    /// The view mode toggle was pressed this tick.
    pub toggle_mode: bool,
    /// The episode reset was pressed this tick.
    pub reset: bool,
}

impl InputSnapshot {
    /// Snapshot with nothing held or pressed.
    pub const IDLE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
        jump: false,
        toggle_mode: false,
        reset: false,
    };

    /// Returns the snapshot with only directional flags kept.
    ///
    /// Applied while a camera blend is in flight, when new presses are dropped.
    #[must_use]
    pub const fn without_pulses(self) -> Self {
        Self {
            jump: false,
            toggle_mode: false,
            reset: false,
            ..self
        }
    }

    /// Holds the directions that move a body at `from` toward `to`.
    ///
    /// Axes closer than `deadband` are left alone so the body does not
    /// oscillate around the target. Used by scripted runs and the headless
    /// runner.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec3;
    /// use parallax::{InputSnapshot, Mode};
    ///
    /// let input = InputSnapshot::toward(Vec3::ZERO, Vec3::new(5.0, 0.0, -2.0), Mode::Chase, 0.05);
    /// assert!(input.up && input.left);
    /// assert!(!input.down && !input.right);
    /// ```
    #[must_use]
    pub fn toward(from: Vec3, to: Vec3, mode: Mode, deadband: f32) -> Self {
        let dx = to.x - from.x;
        let dz = to.z - from.z;
        let push = |delta: f32| (delta < -deadband, delta > deadband);
        let (back, ahead) = push(dx);
        match mode {
            Mode::Planar => Self {
                left: back,
                right: ahead,
                ..Self::IDLE
            },
            Mode::Chase => {
                let (near, far) = push(dz);
                Self {
                    up: ahead,
                    down: back,
                    left: near,
                    right: far,
                    ..Self::IDLE
                }
            }
        }
    }

    /// Returns the movement direction on the world's `(x, z)` plane.
    ///
    /// In [`Mode::Planar`] only left/right drive the X axis. In
    /// [`Mode::Chase`] up/down drive X and left/right drive Z. Opposite keys
    /// cancel. The result is not normalised, so diagonal movement in chase
    /// mode covers both axes at full speed.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use parallax::{InputSnapshot, Mode};
    ///
    /// let input = InputSnapshot { up: true, right: true, ..InputSnapshot::IDLE };
    /// assert_eq!(input.movement_axes(Mode::Chase), Vec2::new(1.0, 1.0));
    /// assert_eq!(input.movement_axes(Mode::Planar), Vec2::new(1.0, 0.0));
    /// ```
    #[must_use]
    pub fn movement_axes(&self, mode: Mode) -> Vec2 {
        /// Maps a negative/positive key pair to an axis value.
        const fn axis(neg: bool, pos: bool) -> f32 {
            match (neg, pos) {
                (true, false) => -1.0,
                (false, true) => 1.0,
                _ => 0.0,
            }
        }

        match mode {
            Mode::Planar => Vec2::new(axis(self.left, self.right), 0.0),
            Mode::Chase => Vec2::new(axis(self.down, self.up), axis(self.left, self.right)),
        }
    }
}

#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the Parallax platformer core.
//!
//! A single sphere is driven through static box geometry one tick at a
//! time, while a camera blends between a flat side view and a trailing
//! chase view. Rendering, input devices and asset loading are left to the
//! caller: feed an [`InputSnapshot`] into [`WorldState::tick`] (or
//! [`Session::step`]) and draw the returned [`TickReport`].
pub mod body;
pub mod camera;
pub mod config;
pub mod constants;
pub mod gauge;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod map;
pub mod mode;
pub mod physics;
pub mod session;
pub mod vector_math;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use body::Body;
pub use camera::{CameraBlender, CameraPose, CameraState, Projection};
pub use config::{ConfigError, GameConfig};
pub use gauge::Gauge;
pub use geometry::Aabb;
pub use input::InputSnapshot;
pub use logging::init as init_logging;
pub use map::{Floor, Goal, Map, MapError, Obstacle};
pub use mode::Mode;
pub use session::{Session, SessionStatus};
pub use vector_math::{ease_in_out_quad, lerp};
pub use world::{EpisodeOutcome, TickReport, WorldState};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use parallax::prelude::*;
    //!
    //! let mut session = Session::new(GameConfig::default(), Map::course());
    //! let report = session.step(&InputSnapshot::IDLE);
    //! ```

    pub use crate::EpisodeOutcome;
    pub use crate::GameConfig;
    pub use crate::InputSnapshot;
    pub use crate::Map;
    pub use crate::Mode;
    pub use crate::Session;
    pub use crate::WorldState;
    pub use glam::Vec3;
}

//! Static level geometry: floors, obstacles and the goal.
//!
//! A [`Map`] is built once per episode and only read afterwards. Maps come
//! either from the built-in courses ([`Map::course`],
//! [`Map::stepping_stones`]) or from a JSON [`MapSpec`] listing box centres
//! and sizes, which is validated while it is converted.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Aabb;

/// Errors raised while building a [`Map`].
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("failed to read map {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The map text was not valid JSON for [`MapSpec`].
    #[error("failed to parse map: {0}")]
    Parse(#[from] serde_json::Error),
    /// A box had a zero, negative or non-finite edge.
    #[error("{kind} #{index} has a degenerate size {size}")]
    DegenerateBox {
        /// `"floor"` or `"obstacle"`.
        kind: &'static str,
        /// Position of the box in its list.
        index: usize,
        /// The rejected edge lengths.
        size: Vec3,
    },
    /// The map has nothing to land on.
    #[error("map has no floors")]
    NoFloors,
    /// The goal position was not finite.
    #[error("goal position {0} is not finite")]
    InvalidGoal(Vec3),
    /// No built-in map has the requested name.
    #[error("unknown built-in map `{0}` (expected `course` or `stepping-stones`)")]
    UnknownBuiltin(String),
}

/// A one-sided landing surface.
///
/// Floors only catch a descending body; they never push it sideways.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Floor {
    /// Extent of the floor.
    pub bounds: Aabb,
    /// Depth the body is moved to when it lands here in planar mode.
    pub reference_depth: f32,
}

impl Floor {
    /// Creates a floor from its box. The reference depth is the box centre.
    #[must_use]
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            reference_depth: bounds.center().z,
        }
    }
}

/// A solid box that pushes the body out along the axis of least penetration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// Extent of the obstacle.
    pub bounds: Aabb,
}

/// The point the body must reach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Goal {
    /// Centre of the goal marker.
    pub position: Vec3,
}

impl Goal {
    /// Returns `true` when `point` is strictly within `tolerance` of the goal
    /// on every axis.
    #[must_use]
    pub fn contains(&self, point: Vec3, tolerance: Vec3) -> bool {
        (point - self.position).abs().cmplt(tolerance).all()
    }
}

/// Ordered level geometry.
///
/// Iteration order matters: the first matching floor wins a landing, and
/// obstacles are resolved one after another in list order.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    /// Landing surfaces.
    pub floors: Vec<Floor>,
    /// Solid obstacles.
    pub obstacles: Vec<Obstacle>,
    /// Episode goal.
    pub goal: Goal,
}

/// A box as written in a map file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Centre of the box.
    pub center: Vec3,
    /// Edge lengths of the box.
    pub size: Vec3,
}

/// Serialisable description of a [`Map`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapSpec {
    /// Floors in priority order.
    #[serde(default)]
    pub floors: Vec<BoxSpec>,
    /// Obstacles in resolution order.
    #[serde(default)]
    pub obstacles: Vec<BoxSpec>,
    /// Goal centre.
    pub goal: Vec3,
}

fn boxes_at(centers: &[[f32; 3]], size: Vec3) -> impl Iterator<Item = Aabb> + '_ {
    centers
        .iter()
        .map(move |c| Aabb::from_center_size(Vec3::from_array(*c), size))
}

fn checked_box(kind: &'static str, index: usize, spec: BoxSpec) -> Result<Aabb, MapError> {
    let bounds = Aabb::from_center_size(spec.center, spec.size);
    if bounds.is_valid() && spec.center.is_finite() {
        Ok(bounds)
    } else {
        Err(MapError::DegenerateBox {
            kind,
            index,
            size: spec.size,
        })
    }
}

impl Map {
    /// The side-scrolling course: ten wide floors, two pillars and a wall.
    #[must_use]
    pub fn course() -> Self {
        const FLOORS: [[f32; 3]; 10] = [
            [4.0, 0.0, 0.0],
            [8.0, 0.0, 0.0],
            [12.0, 0.0, 0.0],
            [16.0, 0.0, 0.0],
            [20.0, 0.0, 0.0],
            [24.0, 0.0, -20.0],
            [28.0, 0.0, 0.0],
            [33.5, 0.0, 0.0],
            [37.5, 0.0, 0.0],
            [41.5, 0.0, 0.0],
        ];
        const PILLARS: [[f32; 3]; 2] = [[6.0, 2.5, -3.0], [10.0, 2.5, 2.0]];
        const WALLS: [[f32; 3]; 1] = [[14.0, 1.0, 0.0]];

        let floors = boxes_at(&FLOORS, Vec3::new(4.0, 0.5, 10.0))
            .map(Floor::new)
            .collect();
        let obstacles = boxes_at(&PILLARS, Vec3::new(1.0, 5.0, 1.0))
            .chain(boxes_at(&WALLS, Vec3::new(1.0, 1.5, 10.0)))
            .map(|bounds| Obstacle { bounds })
            .collect();
        Self {
            floors,
            obstacles,
            goal: Goal {
                position: Vec3::new(40.0, 0.7, 0.0),
            },
        }
    }

    /// Narrow blocks scattered in depth, meant to be crossed by switching
    /// views. Every block is a floor; there are no obstacles.
    #[must_use]
    pub fn stepping_stones() -> Self {
        const STONES: [[f32; 3]; 19] = [
            [4.0, 0.0, 0.0],
            [5.0, 0.0, 0.0],
            [7.0, 0.0, 0.0],
            [8.0, 0.0, -10.0],
            [9.0, 0.0, -10.0],
            [10.0, 0.0, -10.0],
            [11.0, 0.0, -5.0],
            [11.0, 0.0, -10.0],
            [13.0, 0.0, -5.0],
            [14.0, 0.0, -5.0],
            [15.0, 0.0, -10.0],
            [16.0, 0.0, -10.0],
            [17.0, 0.0, -10.0],
            [18.0, 0.0, -15.0],
            [18.0, 0.0, -20.0],
            [18.0, 0.0, -25.0],
            [19.0, 0.0, -20.0],
            [20.0, 0.0, -20.0],
            [22.0, 0.0, -20.0],
        ];
        Self {
            floors: boxes_at(&STONES, Vec3::new(1.0, 0.5, 0.5))
                .map(Floor::new)
                .collect(),
            obstacles: Vec::new(),
            goal: Goal {
                position: Vec3::new(22.0, 0.7, -20.0),
            },
        }
    }

    /// Looks up a built-in map by name.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnknownBuiltin`] for unrecognised names.
    pub fn builtin(name: &str) -> Result<Self, MapError> {
        match name {
            "course" => Ok(Self::course()),
            "stepping-stones" | "stepping_stones" => Ok(Self::stepping_stones()),
            other => Err(MapError::UnknownBuiltin(other.to_owned())),
        }
    }

    /// Builds a map from its serialisable description.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NoFloors`] for a map without floors,
    /// [`MapError::DegenerateBox`] for any box without positive volume and
    /// [`MapError::InvalidGoal`] for a non-finite goal.
    pub fn from_spec(spec: &MapSpec) -> Result<Self, MapError> {
        if spec.floors.is_empty() {
            return Err(MapError::NoFloors);
        }
        let floors = spec
            .floors
            .iter()
            .enumerate()
            .map(|(index, b)| checked_box("floor", index, *b).map(Floor::new))
            .collect::<Result<Vec<_>, _>>()?;
        let obstacles = spec
            .obstacles
            .iter()
            .enumerate()
            .map(|(index, b)| checked_box("obstacle", index, *b).map(|bounds| Obstacle { bounds }))
            .collect::<Result<Vec<_>, _>>()?;
        if !spec.goal.is_finite() {
            return Err(MapError::InvalidGoal(spec.goal));
        }
        Ok(Self {
            floors,
            obstacles,
            goal: Goal {
                position: spec.goal,
            },
        })
    }

    /// Parses and validates a map from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Parse`] for malformed JSON, otherwise the errors
    /// of [`Map::from_spec`].
    pub fn from_json_str(text: &str) -> Result<Self, MapError> {
        let spec: MapSpec = serde_json::from_str(text)?;
        Self::from_spec(&spec)
    }

    /// Reads, parses and validates a map file.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Map::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let file = path.as_ref();
        let text = fs::read_to_string(file).map_err(|source| MapError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Converts the map back into its serialisable description.
    #[must_use]
    pub fn to_spec(&self) -> MapSpec {
        let describe = |b: &Aabb| BoxSpec {
            center: b.center(),
            size: b.size(),
        };
        MapSpec {
            floors: self.floors.iter().map(|f| describe(&f.bounds)).collect(),
            obstacles: self.obstacles.iter().map(|o| describe(&o.bounds)).collect(),
            goal: self.goal.position,
        }
    }
}

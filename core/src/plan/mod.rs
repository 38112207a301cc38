//! Plan-level types describing the output of one generation run.
//!
//! These types are backend-agnostic: a [`FractalPlan`] is a pure data
//! structure that an emitter replays against a host modeler, and it is
//! serializable so callers can persist or transport it instead.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2;

pub mod naming;
pub use naming::{hole_name, CellPath, EntityId, CARPET_TAG, TRIANGLE_TAG};

/// Host material for conductor solids.
pub const MATERIAL_CONDUCTOR: &str = "PEC";
/// Host material for void (subtraction) solids.
pub const MATERIAL_VOID: &str = "Vacuum";

/// Component holding the antenna conductor in the host model.
pub const BASE_COMPONENT: &str = "Main_Antenna";
/// Component holding the temporary subtraction solids.
pub const SUBTRACT_COMPONENT: &str = "Subtract_Temp";

/// Name of the outer boundary solid.
pub const BASE_SHAPE_NAME: &str = "Base_Shape";

/// The two supported fractal families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractalFamily {
    Carpet,
    Triangle,
}

impl FractalFamily {
    /// Family tag used in hole names.
    pub fn hole_tag(&self) -> &'static str {
        match self {
            Self::Carpet => CARPET_TAG,
            Self::Triangle => TRIANGLE_TAG,
        }
    }

    /// Root segment of every cell path in this family.
    pub fn path_root(&self) -> &'static str {
        match self {
            Self::Carpet => "carpet",
            Self::Triangle => "triangle",
        }
    }
}

/// Kind of primitive a descriptor resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    AxisAlignedSquare,
    Triangle,
}

/// Whether a shape is the additive base or a hole removed from it.
///
/// Carpet holes are void bricks subtracted from the base square. Triangle
/// holes invert the relationship: each is built as a conductor solid and
/// subtracted from the larger base triangle afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeRole {
    BaseAdditive,
    SubtractiveHole,
}

/// Geometry payload of one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeGeometry {
    /// Axis-aligned square in the conductor plane.
    Square { center: Point2, half_extent: f64 },
    /// Planar triangle extruded to `thickness`.
    Triangle { corners: [Point2; 3], thickness: f64 },
}

impl ShapeGeometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Square { .. } => ShapeKind::AxisAlignedSquare,
            Self::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    /// Axis-aligned bounding box as (min, max) corners.
    pub fn bounding_box(&self) -> (Point2, Point2) {
        match self {
            Self::Square { center, half_extent } => (
                Point2::new(center.x - half_extent, center.y - half_extent),
                Point2::new(center.x + half_extent, center.y + half_extent),
            ),
            Self::Triangle { corners, .. } => {
                let mut min = corners[0];
                let mut max = corners[0];
                for p in &corners[1..] {
                    min.x = min.x.min(p.x);
                    min.y = min.y.min(p.y);
                    max.x = max.x.max(p.x);
                    max.y = max.y.max(p.y);
                }
                (min, max)
            }
        }
    }
}

/// The boundary loop fed to polygon extrusion: the three corners with the
/// first repeated last to close the profile explicitly.
pub fn closed_loop(corners: &[Point2; 3]) -> [Point2; 4] {
    [corners[0], corners[1], corners[2], corners[0]]
}

/// One primitive to be created in the host model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    /// Structural identity, derived from the cell path.
    pub id: EntityId,
    /// Host-facing name, derived from level and reference coordinates.
    pub name: String,
    pub geometry: ShapeGeometry,
    pub role: ShapeRole,
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Host material for this shape. Square holes are void bricks; triangle
    /// holes are conductor solids that get subtracted after creation.
    pub fn material(&self) -> &'static str {
        match (self.role, self.geometry.kind()) {
            (ShapeRole::BaseAdditive, _) => MATERIAL_CONDUCTOR,
            (ShapeRole::SubtractiveHole, ShapeKind::AxisAlignedSquare) => MATERIAL_VOID,
            (ShapeRole::SubtractiveHole, ShapeKind::Triangle) => MATERIAL_CONDUCTOR,
        }
    }
}

/// The complete, immutable output of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractalPlan {
    pub family: FractalFamily,
    /// The outer boundary shape, material-tagged as the antenna conductor.
    pub base: ShapeDescriptor,
    /// Holes in generation (pre-)order. Later boolean operations reference
    /// names created earlier, so emission must preserve this order.
    pub subtractions: Vec<ShapeDescriptor>,
    /// Conductor thickness; the z-extent of every created solid.
    pub thickness: f64,
}

impl FractalPlan {
    /// Total number of shapes, base included.
    pub fn shape_count(&self) -> usize {
        self.subtractions.len() + 1
    }

    /// Hole names in emission order.
    pub fn subtraction_names(&self) -> impl Iterator<Item = &str> {
        self.subtractions.iter().map(|s| s.name.as_str())
    }
}

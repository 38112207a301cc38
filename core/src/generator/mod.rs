//! Fractal generation: parameter validation and the recursive subdivision
//! algorithms that produce a [`FractalPlan`].
//!
//! Generation is pure: no I/O, no shared state. A call either returns a
//! complete plan or fails before the first descriptor is produced.

mod carpet;
mod triangle;

#[cfg(test)]
mod tests_carpet;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::geometry::Point2;
use crate::plan::{
    CellPath, FractalFamily, FractalPlan, ShapeDescriptor, ShapeGeometry, ShapeRole,
    BASE_SHAPE_NAME,
};

/// Iteration cap for the carpet family (branching factor 8).
pub const CARPET_MAX_ITERATIONS: u32 = 7;
/// Iteration cap for the triangle family (branching factor 3).
pub const TRIANGLE_MAX_ITERATIONS: u32 = 12;

/// Errors that can occur while building a plan.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum GenerateError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Name collision: {0}")]
    NameCollision(String),
}

/// Result type for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// All inputs of one generation run.
///
/// Negative iteration counts are unrepresentable; sizes are validated
/// before any recursion begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractalConfig {
    pub family: FractalFamily,
    /// Side length of the base shape, in model units.
    pub base_size: f64,
    /// Conductor thickness (extrusion height).
    pub thickness: f64,
    /// Number of fractal iterations.
    pub iterations: u32,
    /// Center of the base shape. For the triangle family this is the
    /// midpoint of the bottom edge, with the apex above it.
    pub center: Point2,
}

impl FractalConfig {
    pub fn new(family: FractalFamily, base_size: f64, thickness: f64, iterations: u32) -> Self {
        Self {
            family,
            base_size,
            thickness,
            iterations,
            center: Point2::origin(),
        }
    }

    pub fn with_center(mut self, center: Point2) -> Self {
        self.center = center;
        self
    }

    fn max_iterations(&self) -> u32 {
        match self.family {
            FractalFamily::Carpet => CARPET_MAX_ITERATIONS,
            FractalFamily::Triangle => TRIANGLE_MAX_ITERATIONS,
        }
    }

    fn validate(&self) -> GenerateResult<()> {
        if !self.base_size.is_finite() || self.base_size <= 0.0 {
            return Err(GenerateError::InvalidParameter(format!(
                "base_size must be a positive finite number (got {})",
                self.base_size
            )));
        }
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(GenerateError::InvalidParameter(format!(
                "thickness must be a positive finite number (got {})",
                self.thickness
            )));
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(GenerateError::InvalidParameter(format!(
                "center must be finite (got ({}, {}))",
                self.center.x, self.center.y
            )));
        }
        let cap = self.max_iterations();
        if self.iterations > cap {
            return Err(GenerateError::InvalidParameter(format!(
                "iterations must be at most {} for this family (got {})",
                cap, self.iterations
            )));
        }
        Ok(())
    }
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self::new(FractalFamily::Carpet, 50.0, 0.35, 3)
    }
}

/// Accumulates descriptors in emission order and rejects duplicate names
/// instead of silently overwriting an earlier shape.
pub(crate) struct PlanBuilder {
    shapes: Vec<ShapeDescriptor>,
    seen: HashSet<String>,
}

impl PlanBuilder {
    fn new() -> Self {
        Self {
            shapes: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub(crate) fn push(&mut self, shape: ShapeDescriptor) -> GenerateResult<()> {
        if !self.seen.insert(shape.name.clone()) {
            return Err(GenerateError::NameCollision(shape.name));
        }
        self.shapes.push(shape);
        Ok(())
    }

    fn into_shapes(self) -> Vec<ShapeDescriptor> {
        self.shapes
    }
}

/// Corners of the equilateral base triangle: bottom edge centered on
/// `center`, apex above it.
fn base_triangle_corners(center: &Point2, size: f64) -> [Point2; 3] {
    let height = size * 3.0f64.sqrt() / 2.0;
    [
        Point2::new(center.x - size / 2.0, center.y),
        Point2::new(center.x + size / 2.0, center.y),
        Point2::new(center.x, center.y + height),
    ]
}

/// Runs one complete generation and returns the plan.
pub fn generate(config: &FractalConfig) -> GenerateResult<FractalPlan> {
    config.validate()?;

    let root = CellPath::root(config.family.path_root());
    let mut builder = PlanBuilder::new();

    let base_geometry = match config.family {
        FractalFamily::Carpet => ShapeGeometry::Square {
            center: config.center,
            half_extent: config.base_size / 2.0,
        },
        FractalFamily::Triangle => ShapeGeometry::Triangle {
            corners: base_triangle_corners(&config.center, config.base_size),
            thickness: config.thickness,
        },
    };
    let base = ShapeDescriptor {
        id: root.entity_id(),
        name: BASE_SHAPE_NAME.to_string(),
        geometry: base_geometry,
        role: ShapeRole::BaseAdditive,
    };

    match config.family {
        FractalFamily::Carpet => carpet::subdivide(
            config.iterations,
            config.center,
            config.base_size,
            root,
            &mut builder,
        )?,
        FractalFamily::Triangle => {
            let [a, b, c] = base_triangle_corners(&config.center, config.base_size);
            triangle::subdivide(
                config.iterations,
                a,
                b,
                c,
                config.thickness,
                root,
                &mut builder,
            )?;
        }
    }

    Ok(FractalPlan {
        family: config.family,
        base,
        subtractions: builder.into_shapes(),
        thickness: config.thickness,
    })
}

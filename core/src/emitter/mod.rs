//! Backend emission: replaying a [`FractalPlan`] against a host modeler.
//!
//! This module provides a trait-based abstraction over the host modeling
//! application, allowing for swapping implementations (script writer,
//! in-memory recorder, a live host bridge) without changing the generator.
//! The emitter performs no geometry math itself; it only translates
//! descriptors into ordered creation and subtraction requests.

pub mod history;
pub mod recording;

pub use history::HistoryScriptBackend;
pub use recording::{BackendOp, RecordingBackend};

use std::path::Path;
use thiserror::Error;

use crate::geometry::Point2;
use crate::plan::{
    closed_loop, FractalPlan, ShapeDescriptor, ShapeGeometry, BASE_COMPONENT, SUBTRACT_COMPONENT,
};

/// Errors surfaced by a backend collaborator. The core never retries;
/// fallback policy belongs to the workflow layered above it.
#[derive(Debug, Error, Clone)]
pub enum BackendError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Backend rejected request: {0}")]
    Rejected(String),
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Abstract interface to the host modeling application.
///
/// Requests must be applied in the order issued; the host's history/undo
/// stack is ordering-sensitive even though the subtractions themselves
/// commute over disjoint regions.
pub trait ModelBackend {
    /// Open the project at `path`, creating it if it does not exist.
    fn open_or_create_project(&mut self, path: &Path) -> BackendResult<()>;

    /// Create a named box solid spanning the given axis ranges.
    fn create_box(
        &mut self,
        name: &str,
        component: &str,
        material: &str,
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
    ) -> BackendResult<()>;

    /// Create a named solid by extruding a closed planar polygon.
    fn create_extruded_polygon(
        &mut self,
        name: &str,
        component: &str,
        material: &str,
        thickness: f64,
        closed_loop: &[Point2],
    ) -> BackendResult<()>;

    /// Subtract the tool solid from the base solid. Both references use the
    /// host's `component:name` syntax.
    fn subtract(&mut self, base_ref: &str, tool_ref: &str) -> BackendResult<()>;

    fn save(&mut self) -> BackendResult<()>;

    fn close(&mut self) -> BackendResult<()>;
}

/// Summary of one emission run.
#[derive(Debug, Clone, Default)]
pub struct EmissionReport {
    /// Number of solids created, base included.
    pub created: usize,
    /// Number of boolean subtractions issued.
    pub subtracted: usize,
    /// Log messages from the emission.
    pub logs: Vec<String>,
}

fn create_shape<B: ModelBackend>(
    shape: &ShapeDescriptor,
    component: &str,
    plan_thickness: f64,
    backend: &mut B,
) -> BackendResult<()> {
    match &shape.geometry {
        ShapeGeometry::Square {
            center,
            half_extent,
        } => backend.create_box(
            &shape.name,
            component,
            shape.material(),
            (center.x - half_extent, center.x + half_extent),
            (center.y - half_extent, center.y + half_extent),
            (0.0, plan_thickness),
        ),
        ShapeGeometry::Triangle { corners, thickness } => {
            let loop_points = closed_loop(corners);
            backend.create_extruded_polygon(
                &shape.name,
                component,
                shape.material(),
                *thickness,
                &loop_points,
            )
        }
    }
}

/// Replays a plan against a backend: base shape first, then every
/// subtraction shape in plan order, then one subtraction request per shape
/// in the same order.
pub fn emit<B: ModelBackend>(plan: &FractalPlan, backend: &mut B) -> BackendResult<EmissionReport> {
    let mut report = EmissionReport::default();

    create_shape(&plan.base, BASE_COMPONENT, plan.thickness, backend)?;
    report.created += 1;
    report.logs.push(format!("Created base shape {}", plan.base.name));

    for shape in &plan.subtractions {
        create_shape(shape, SUBTRACT_COMPONENT, plan.thickness, backend)?;
        report.created += 1;
    }
    report
        .logs
        .push(format!("Created {} subtraction shapes", plan.subtractions.len()));

    let base_ref = format!("{}:{}", BASE_COMPONENT, plan.base.name);
    for shape in &plan.subtractions {
        let tool_ref = format!("{}:{}", SUBTRACT_COMPONENT, shape.name);
        backend.subtract(&base_ref, &tool_ref)?;
        report.subtracted += 1;
    }
    report
        .logs
        .push(format!("Subtracted {} shapes from {}", report.subtracted, base_ref));

    Ok(report)
}

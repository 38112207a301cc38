//! In-memory backend that records the request stream verbatim.
//!
//! Used by tests and by callers that want the raw ordered instruction
//! stream instead of a rendered script.

use std::path::{Path, PathBuf};

use crate::geometry::Point2;

use super::{BackendResult, ModelBackend};

/// One recorded backend request.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendOp {
    OpenProject(PathBuf),
    CreateBox {
        name: String,
        component: String,
        material: String,
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
    },
    CreateExtrudedPolygon {
        name: String,
        component: String,
        material: String,
        thickness: f64,
        points: Vec<Point2>,
    },
    Subtract {
        base_ref: String,
        tool_ref: String,
    },
    Save,
    Close,
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub ops: Vec<BackendOp>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModelBackend for RecordingBackend {
    fn open_or_create_project(&mut self, path: &Path) -> BackendResult<()> {
        self.ops.push(BackendOp::OpenProject(path.to_path_buf()));
        Ok(())
    }

    fn create_box(
        &mut self,
        name: &str,
        component: &str,
        material: &str,
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
    ) -> BackendResult<()> {
        self.ops.push(BackendOp::CreateBox {
            name: name.to_string(),
            component: component.to_string(),
            material: material.to_string(),
            x_range,
            y_range,
            z_range,
        });
        Ok(())
    }

    fn create_extruded_polygon(
        &mut self,
        name: &str,
        component: &str,
        material: &str,
        thickness: f64,
        closed_loop: &[Point2],
    ) -> BackendResult<()> {
        self.ops.push(BackendOp::CreateExtrudedPolygon {
            name: name.to_string(),
            component: component.to_string(),
            material: material.to_string(),
            thickness,
            points: closed_loop.to_vec(),
        });
        Ok(())
    }

    fn subtract(&mut self, base_ref: &str, tool_ref: &str) -> BackendResult<()> {
        self.ops.push(BackendOp::Subtract {
            base_ref: base_ref.to_string(),
            tool_ref: tool_ref.to_string(),
        });
        Ok(())
    }

    fn save(&mut self) -> BackendResult<()> {
        self.ops.push(BackendOp::Save);
        Ok(())
    }

    fn close(&mut self) -> BackendResult<()> {
        self.ops.push(BackendOp::Close);
        Ok(())
    }
}

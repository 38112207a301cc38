//! History-script backend.
//!
//! Renders every request as a titled VBA-style modeling block matching the
//! host's history-list format, and writes the accumulated script to the
//! project path on save. Components are declared with `Component.New` the
//! first time a shape is created inside them.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::geometry::Point2;

use super::{BackendError, BackendResult, ModelBackend};

/// Curve set holding all extrusion profiles.
const CURVE_SET: &str = "FractalCurve";

#[derive(Debug, Clone)]
struct HistoryEntry {
    title: String,
    command: String,
}

#[derive(Debug, Default)]
pub struct HistoryScriptBackend {
    entries: Vec<HistoryEntry>,
    components: HashSet<String>,
    project: Option<PathBuf>,
}

impl HistoryScriptBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered script so far.
    pub fn script(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(out, "' {}", entry.title);
            let _ = writeln!(out, "{}", entry.command);
            let _ = writeln!(out);
        }
        out
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, title: String, command: String) {
        self.entries.push(HistoryEntry { title, command });
    }

    fn ensure_component(&mut self, component: &str) {
        if self.components.insert(component.to_string()) {
            self.push(
                format!("Create_Component_{}", component),
                format!("Component.New \"{}\"", component),
            );
        }
    }
}

impl ModelBackend for HistoryScriptBackend {
    fn open_or_create_project(&mut self, path: &Path) -> BackendResult<()> {
        self.project = Some(path.to_path_buf());
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
        self.ensure_component(component);
        let command = format!(
            "With Brick\n     .Reset\n     .Name \"{name}\"\n     .Component \"{component}\"\n     .Material \"{material}\"\n     .Xrange \"{:.6}\", \"{:.6}\"\n     .Yrange \"{:.6}\", \"{:.6}\"\n     .Zrange \"{:.6}\", \"{:.6}\"\n     .Create\nEnd With",
            x_range.0, x_range.1, y_range.0, y_range.1, z_range.0, z_range.1,
        );
        self.push(format!("Create_{}", name), command);
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
        if closed_loop.len() < 4 || closed_loop.first() != closed_loop.last() {
            return Err(BackendError::Rejected(format!(
                "polygon for {} is not a closed loop",
                name
            )));
        }
        self.ensure_component(component);

        let mut polygon = format!(
            "With Polygon\n     .Reset\n     .Name \"{name}_Curve\"\n     .Curve \"{CURVE_SET}\"",
        );
        for p in closed_loop {
            let _ = write!(polygon, "\n     .Point \"{:.6}\", \"{:.6}\"", p.x, p.y);
        }
        polygon.push_str("\n     .Create\nEnd With");
        self.push(format!("Create_{}", name), polygon);

        let extrude = format!(
            "With ExtrudeCurve\n     .Reset\n     .Name \"{name}\"\n     .Component \"{component}\"\n     .Material \"{material}\"\n     .Thickness \"{:.6}\"\n     .Twistangle \"0.0\"\n     .Taperangle \"0.0\"\n     .DeleteProfile \"True\"\n     .Curve \"{CURVE_SET}:{name}_Curve\"\n     .Create\nEnd With",
            thickness,
        );
        self.push(format!("Extrude_{}", name), extrude);
        Ok(())
    }

    fn subtract(&mut self, base_ref: &str, tool_ref: &str) -> BackendResult<()> {
        let tool_name = tool_ref.rsplit(':').next().unwrap_or(tool_ref);
        let command = format!(
            "With Solid\n     .Subtract \"{base_ref}\", \"{tool_ref}\"\nEnd With",
        );
        self.push(format!("Subtract_{}", tool_name), command);
        Ok(())
    }

    fn save(&mut self) -> BackendResult<()> {
        let path = self
            .project
            .as_ref()
            .ok_or_else(|| BackendError::Unavailable("no project open".to_string()))?;
        fs::write(path, self.script())
            .map_err(|e| BackendError::Unavailable(format!("cannot write {}: {}", path.display(), e)))
    }

    fn close(&mut self) -> BackendResult<()> {
        self.project = None;
        Ok(())
    }
}

//! Sierpinski carpet subdivision.
//!
//! Each call removes the center cell of a 3x3 grid and recurses into the
//! eight remaining cells. The center hole is emitted at every level, level
//! zero included, so a run with `iterations` levels produces
//! `sum(8^k, k = 0..=iterations)` holes.

use crate::geometry::Point2;
use crate::plan::{hole_name, CellPath, ShapeDescriptor, ShapeGeometry, ShapeRole, CARPET_TAG};

use super::{GenerateResult, PlanBuilder};

/// Fixed 3x3 scan order of the eight non-center cells. Emission (and
/// therefore naming) order follows this table exactly.
const SCAN_OFFSETS: [(f64, f64); 8] = [
    (-1.0, -1.0),
    (-1.0, 0.0),
    (-1.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (1.0, -1.0),
    (1.0, 0.0),
    (1.0, 1.0),
];

pub(super) fn subdivide(
    level: u32,
    center: Point2,
    size: f64,
    path: CellPath,
    out: &mut PlanBuilder,
) -> GenerateResult<()> {
    let sub_size = size / 3.0;

    // The center cell is always removed, even at level 0.
    out.push(ShapeDescriptor {
        id: path.entity_id(),
        name: hole_name(CARPET_TAG, level, &center),
        geometry: ShapeGeometry::Square {
            center,
            half_extent: sub_size / 2.0,
        },
        role: ShapeRole::SubtractiveHole,
    })?;

    if level > 0 {
        for (index, (i, j)) in SCAN_OFFSETS.iter().enumerate() {
            let child = Point2::new(center.x + i * sub_size, center.y + j * sub_size);
            subdivide(level - 1, child, sub_size, path.child(index as u8), out)?;
        }
    }
    Ok(())
}

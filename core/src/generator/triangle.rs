//! Sierpinski triangle subdivision.
//!
//! Each call with `level >= 1` removes the midpoint ("anti") triangle and
//! recurses into the three corner triangles, so a run with `iterations`
//! levels produces `(3^iterations - 1) / 2` holes. Level zero emits
//! nothing.

use crate::geometry::{centroid, midpoint, Point2};
use crate::plan::{hole_name, CellPath, ShapeDescriptor, ShapeGeometry, ShapeRole, TRIANGLE_TAG};

use super::{GenerateResult, PlanBuilder};

#[allow(clippy::too_many_arguments)]
pub(super) fn subdivide(
    level: u32,
    a: Point2,
    b: Point2,
    c: Point2,
    thickness: f64,
    path: CellPath,
    out: &mut PlanBuilder,
) -> GenerateResult<()> {
    if level == 0 {
        return Ok(());
    }

    let m_ab = midpoint(&a, &b);
    let m_bc = midpoint(&b, &c);
    let m_ca = midpoint(&c, &a);

    out.push(ShapeDescriptor {
        id: path.entity_id(),
        name: hole_name(TRIANGLE_TAG, level, &centroid(&a, &b, &c)),
        geometry: ShapeGeometry::Triangle {
            corners: [m_ab, m_bc, m_ca],
            thickness,
        },
        role: ShapeRole::SubtractiveHole,
    })?;

    // Corner order and winding feed the extrusion step; keep fixed.
    subdivide(level - 1, a, m_ab, m_ca, thickness, path.child(0), out)?;
    subdivide(level - 1, b, m_bc, m_ab, thickness, path.child(1), out)?;
    subdivide(level - 1, c, m_ca, m_bc, thickness, path.child(2), out)?;
    Ok(())
}

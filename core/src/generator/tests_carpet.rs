use std::collections::HashSet;

use crate::geometry::{ApproxEq, Point2, EPSILON};
use crate::plan::{FractalFamily, FractalPlan, ShapeGeometry, ShapeKind, ShapeRole};

use super::{generate, FractalConfig};

fn carpet_plan(base_size: f64, iterations: u32) -> FractalPlan {
    let config = FractalConfig::new(FractalFamily::Carpet, base_size, 0.35, iterations);
    generate(&config).expect("valid carpet config")
}

fn expected_hole_count(level: u32) -> usize {
    (0..=level).map(|k| 8usize.pow(k)).sum()
}

fn square_params(geometry: &ShapeGeometry) -> (Point2, f64) {
    match geometry {
        ShapeGeometry::Square { center, half_extent } => (*center, *half_extent),
        _ => panic!("carpet holes must be squares"),
    }
}

#[test]
fn test_hole_count_formula() {
    for level in 0..=4 {
        let plan = carpet_plan(50.0, level);
        assert_eq!(
            plan.subtractions.len(),
            expected_hole_count(level),
            "level {}",
            level
        );
    }
}

#[test]
fn test_level_zero_emits_single_center_hole() {
    let plan = carpet_plan(9.0, 0);
    assert_eq!(plan.subtractions.len(), 1);

    let hole = &plan.subtractions[0];
    assert_eq!(hole.role, ShapeRole::SubtractiveHole);
    assert_eq!(hole.name, "Sub_L0_X0.0000_Y0.0000");
    let (center, half_extent) = square_params(&hole.geometry);
    assert!(center.approx_eq(&Point2::origin()));
    assert!(half_extent.approx_eq(&1.5));
}

#[test]
fn test_level_one_coordinates() {
    let plan = carpet_plan(9.0, 1);
    assert_eq!(plan.subtractions.len(), 9);

    // Top-level hole first: center (0,0), side 3.
    let (center, half_extent) = square_params(&plan.subtractions[0].geometry);
    assert!(center.approx_eq(&Point2::origin()));
    assert!(half_extent.approx_eq(&1.5));
    assert_eq!(plan.subtractions[0].name, "Sub_L1_X0.0000_Y0.0000");

    // Then the eight level-0 holes in scan order, each side 1.
    let expected_centers = [
        (-3.0, -3.0),
        (-3.0, 0.0),
        (-3.0, 3.0),
        (0.0, -3.0),
        (0.0, 3.0),
        (3.0, -3.0),
        (3.0, 0.0),
        (3.0, 3.0),
    ];
    for (hole, (x, y)) in plan.subtractions[1..].iter().zip(expected_centers) {
        let (center, half_extent) = square_params(&hole.geometry);
        assert!(center.approx_eq(&Point2::new(x, y)), "{}", hole.name);
        assert!(half_extent.approx_eq(&0.5));
    }
    assert_eq!(plan.subtractions[1].name, "Sub_L0_X-3.0000_Y-3.0000");
}

#[test]
fn test_all_holes_are_squares() {
    let plan = carpet_plan(50.0, 2);
    for hole in &plan.subtractions {
        assert_eq!(hole.kind(), ShapeKind::AxisAlignedSquare);
        assert_eq!(hole.role, ShapeRole::SubtractiveHole);
    }
}

#[test]
fn test_deterministic_names_and_ids() {
    let a = carpet_plan(50.0, 3);
    let b = carpet_plan(50.0, 3);
    let names_a: Vec<_> = a.subtraction_names().collect();
    let names_b: Vec<_> = b.subtraction_names().collect();
    assert_eq!(names_a, names_b);

    let ids_a: Vec<_> = a.subtractions.iter().map(|s| s.id).collect();
    let ids_b: Vec<_> = b.subtractions.iter().map(|s| s.id).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn test_no_duplicate_center_size_pairs() {
    let plan = carpet_plan(50.0, 3);
    let mut seen = HashSet::new();
    for hole in &plan.subtractions {
        let (center, half_extent) = square_params(&hole.geometry);
        let key = (
            center.x.to_bits(),
            center.y.to_bits(),
            half_extent.to_bits(),
        );
        assert!(seen.insert(key), "duplicate hole at {:?}", center);
    }
}

// Every hole below the top level sits in a 3x3 cell of a parent hole three
// times its size: its center offset from the parent's is (i, j) * cell_size
// with i, j in {-1, 0, 1}, not both zero.
#[test]
fn test_holes_nest_in_parent_cells() {
    let plan = carpet_plan(729.0, 2);
    let holes: Vec<(Point2, f64)> = plan
        .subtractions
        .iter()
        .map(|h| square_params(&h.geometry))
        .collect();

    let max_half = holes
        .iter()
        .map(|(_, h)| *h)
        .fold(f64::NEG_INFINITY, f64::max);

    for (center, half) in &holes {
        if (half - max_half).abs() < EPSILON {
            continue; // top-level hole has no parent cell inside the plan
        }
        let cell = 6.0 * half; // hole side * 3
        let parent = holes.iter().find(|(p, ph)| {
            (ph - 3.0 * half).abs() < EPSILON && {
                let di = (center.x - p.x) / cell;
                let dj = (center.y - p.y) / cell;
                let on_grid = |d: f64| {
                    (d.abs() < EPSILON) || ((d.abs() - 1.0).abs() < EPSILON)
                };
                on_grid(di) && on_grid(dj) && (di.abs() + dj.abs() > EPSILON)
            }
        });
        assert!(
            parent.is_some(),
            "hole at ({}, {}) has no parent cell",
            center.x,
            center.y
        );
    }
}

#[test]
fn test_holes_pairwise_disjoint() {
    let plan = carpet_plan(81.0, 2);
    let holes: Vec<(Point2, f64)> = plan
        .subtractions
        .iter()
        .map(|h| square_params(&h.geometry))
        .collect();

    for (i, (ca, ha)) in holes.iter().enumerate() {
        for (cb, hb) in &holes[i + 1..] {
            let dx = (ca.x - cb.x).abs();
            let dy = (ca.y - cb.y).abs();
            assert!(
                dx.max(dy) > ha + hb,
                "holes at ({}, {}) and ({}, {}) overlap",
                ca.x,
                ca.y,
                cb.x,
                cb.y
            );
        }
    }
}

#[test]
fn test_holes_contained_in_base() {
    let plan = carpet_plan(81.0, 3);
    let (base_center, base_half) = square_params(&plan.base.geometry);
    for hole in &plan.subtractions {
        let (center, half) = square_params(&hole.geometry);
        assert!((center.x - base_center.x).abs() + half < base_half);
        assert!((center.y - base_center.y).abs() + half < base_half);
    }
}

#[test]
fn test_stress_level_six() {
    let plan = carpet_plan(729.0, 6);
    assert_eq!(plan.subtractions.len(), 299_593);
}

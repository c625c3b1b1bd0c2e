use bevy::prelude::*;

use crate::math::{UNIT_RECT, compose_pose};

/// World-space corners of a body's rectangle under its current pose.
pub fn world_corners(center: Vec2, size: Vec2, angle: f32) -> [Vec2; 4] {
    let pose = compose_pose(center, size, angle);
    UNIT_RECT.map(|p| pose.transform_point2(p))
}

/// Separating-axis overlap test for two convex polygons in world space.
///
/// Returns `None` as soon as any edge normal of either polygon separates
/// the projected intervals. Otherwise returns the minimum translation
/// that, added to `a`'s position, pushes `a` out of `b`: the overlap on
/// the least-overlapping axis, signed toward `a`'s side of that axis.
///
/// When two axes tie for least overlap, whichever the edge scan reached
/// first wins; nothing further is promised at exact ties.
pub fn overlap(a: &[Vec2], b: &[Vec2]) -> Option<Vec2> {
    debug_assert!(
        a.len() >= 3 && b.len() >= 3,
        "polygons need at least 3 vertices"
    );
    if a.len() < 3 || b.len() < 3 {
        warn!("degenerate polygon in overlap test, treating as no collision");
        return None;
    }

    let mut least = f32::INFINITY;
    let mut least_axis = Vec2::ZERO;

    for polygon in [a, b] {
        for i in 0..polygon.len() {
            let edge = polygon[(i + 1) % polygon.len()] - polygon[i];
            let length = edge.length();
            debug_assert!(length > f32::EPSILON, "zero-length polygon edge");
            if length <= f32::EPSILON {
                warn!("zero-length edge in overlap test, treating as no collision");
                return None;
            }
            let axis = Vec2::new(-edge.y, edge.x) / length;

            let (a_min, a_max) = project(a, axis);
            let (b_min, b_max) = project(b, axis);
            if a_max <= b_min || b_max <= a_min {
                return None;
            }

            let amount = a_max.min(b_max) - a_min.max(b_min);
            if amount < least {
                least = amount;
                least_axis = axis;
            }
        }
    }

    // Point the push toward a's side of the axis.
    let to_a = centroid(a) - centroid(b);
    if to_a.dot(least_axis) < 0.0 {
        least_axis = -least_axis;
    }
    Some(least_axis * least)
}

fn project(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for p in points {
        let d = p.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

fn centroid(points: &[Vec2]) -> Vec2 {
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

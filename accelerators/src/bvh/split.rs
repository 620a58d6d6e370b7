//! Median split

use pbrt_core::pbrt::*;
use pbrt_core::scene::*;
use order_stat::kth_by;

/// Returns the median of a non-empty list of values. For an even count this is
/// the mean of the two central order statistics. The values are reordered.
///
/// * `values` - The values.
pub fn find_median(values: &mut [Float]) -> Float {
    debug_assert!(!values.is_empty());

    let n = values.len();
    let upper = *kth_by(values, n / 2, |a, b| a.total_cmp(b));
    if n % 2 == 1 {
        return upper;
    }

    // `kth_by` leaves everything below `n / 2` no greater than the pivot, so
    // the other central value is the largest of those.
    let lower = values[..n / 2]
        .iter()
        .copied()
        .max_by(|a, b| a.total_cmp(b))
        .unwrap_or(upper);
    (lower + upper) / 2.0
}

/// Which child a triangle is sent to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Returns the side with fewer members, left on ties.
fn smaller_side(n_left: usize, n_right: usize) -> Side {
    if n_right >= n_left {
        Side::Left
    } else {
        Side::Right
    }
}

/// Vote on a side for one triangle from the vertex coordinates along the split
/// axis.
///
/// * `coords`  - Vertex coordinates along the split axis.
/// * `median`  - Split position.
/// * `n_left`  - Triangles already sent left.
/// * `n_right` - Triangles already sent right.
fn vote(coords: [Float; 3], median: Float, n_left: usize, n_right: usize) -> Side {
    let above = coords.iter().filter(|&&c| c > median).count();
    let equal = coords.iter().filter(|&&c| c == median).count();

    match (equal, above) {
        (3, _) => smaller_side(n_left, n_right),
        (2, 0) => Side::Left,
        (2, _) => Side::Right,
        (1, 2) => Side::Right,
        (1, 0) => Side::Left,
        (1, _) => smaller_side(n_left, n_right),
        (_, a) if a >= 2 => Side::Right,
        _ => Side::Left,
    }
}

/// Partition triangles around `median` along `axis`, keeping their relative
/// order on each side.
///
/// When the last triangle is reached and one side is still empty it is placed
/// on that side without a vote. With at least two triangles both sides end up
/// non-empty.
///
/// * `scene`      - The scene the triangles belong to.
/// * `primitives` - The triangles.
/// * `axis`       - Split axis.
/// * `median`     - Split position.
pub fn partition<S: Scene>(
    scene: &S,
    primitives: &[PrimitiveRef],
    axis: Axis,
    median: Float,
) -> (Vec<PrimitiveRef>, Vec<PrimitiveRef>) {
    let mut left: Vec<PrimitiveRef> = Vec::with_capacity(primitives.len());
    let mut right: Vec<PrimitiveRef> = Vec::with_capacity(primitives.len());

    for (i, &prim) in primitives.iter().enumerate() {
        if i + 1 == primitives.len() {
            if right.is_empty() {
                right.push(prim);
                continue;
            }
            if left.is_empty() {
                left.push(prim);
                continue;
            }
        }

        let [p0, p1, p2] = scene.triangle(prim);
        match vote([p0[axis], p1[axis], p2[axis]], median, left.len(), right.len()) {
            Side::Left => left.push(prim),
            Side::Right => right.push(prim),
        }
    }

    (left, right)
}

/// Collect the coordinate along `axis` of every vertex of every triangle.
///
/// * `scene`      - The scene the triangles belong to.
/// * `primitives` - The triangles.
/// * `axis`       - The axis.
pub fn vertex_coordinates<S: Scene>(scene: &S, primitives: &[PrimitiveRef], axis: Axis) -> Vec<Float> {
    primitives
        .iter()
        .flat_map(|&prim| scene.triangle(prim).map(|p| p[axis]))
        .collect()
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

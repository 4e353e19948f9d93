use crate::types::{Triangle, TriangleColors, VertexBuffer};

/// Emit the medial triangle, then recurse into the three corner triangles
/// in A, B, C order. Emission is pre-order.
pub(super) fn emit_sierpinski(
    triangle: &Triangle,
    depth: u32,
    colors: &TriangleColors,
    out: &mut VertexBuffer,
) {
    out.push_triangle(&triangle.medial(), colors);

    if depth == 0 {
        return;
    }

    log::trace!("sierpinski level, {} remaining", depth);

    let corners = [triangle.corner_a(), triangle.corner_b(), triangle.corner_c()];
    for corner in &corners {
        emit_sierpinski(corner, depth - 1, colors, out);
    }
}

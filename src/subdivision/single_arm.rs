use crate::types::{Triangle, TriangleColors, VertexBuffer};

/// Emit the triangle itself, then zoom into the A corner only.
/// Produces `depth + 1` nested triangles sharing vertex A.
pub(super) fn emit_single_arm(
    triangle: &Triangle,
    depth: u32,
    colors: &TriangleColors,
    out: &mut VertexBuffer,
) {
    out.push_triangle(triangle, colors);

    if depth > 0 {
        log::trace!("single-arm level, {} remaining", depth);
        emit_single_arm(&triangle.corner_a(), depth - 1, colors, out);
    }
}

//! Recursive triangle subdivision into flat vertex buffers.
//!
//! Two policies, with different output:
//! [`SubdivisionPolicy::SingleArm`] re-emits the outer triangle and zooms into
//! corner A only, [`SubdivisionPolicy::Sierpinski`] emits medial triangles and
//! recurses into all three corners.

mod sierpinski;
mod single_arm;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SubdivisionError};
use crate::types::{Triangle, TriangleColors, VertexBuffer};

use sierpinski::emit_sierpinski;
use single_arm::emit_single_arm;

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SubdivisionPolicy {
    /// Outer triangle plus one recursive call into the A corner
    SingleArm,
    /// Medial triangle plus recursive calls into all three corners
    #[default]
    Sierpinski,
}

impl SubdivisionPolicy {
    /// Colors used when the caller does not pick any
    pub fn default_colors(&self) -> TriangleColors {
        match self {
            SubdivisionPolicy::SingleArm => TriangleColors::SHADED,
            SubdivisionPolicy::Sierpinski => TriangleColors::WHITE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubdivisionPolicy::SingleArm => "single-arm",
            SubdivisionPolicy::Sierpinski => "sierpinski",
        }
    }
}

/// Number of triangles a policy emits for `depth`, `None` on overflow.
pub fn triangle_count(policy: SubdivisionPolicy, depth: u32) -> Option<usize> {
    match policy {
        SubdivisionPolicy::SingleArm => (depth as usize).checked_add(1),
        SubdivisionPolicy::Sierpinski => {
            let exp = depth.checked_add(1)?;
            let pow = 3usize.checked_pow(exp)?;
            Some((pow - 1) / 2)
        }
    }
}

/// Most triangles `generate_new` reserves up front; deeper output grows on demand
pub const PRESIZE_LIMIT: usize = 1 << 20;

/// Triangles to reserve up front: the exact count, capped at [`PRESIZE_LIMIT`]
pub fn presize_triangles(policy: SubdivisionPolicy, depth: u32) -> usize {
    triangle_count(policy, depth).map_or(PRESIZE_LIMIT, |count| count.min(PRESIZE_LIMIT))
}

/// Stateless generator: a policy plus the colors stamped on each triangle
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SubdivisionGenerator {
    policy: SubdivisionPolicy,
    colors: TriangleColors,
}

impl SubdivisionGenerator {
    pub fn new(policy: SubdivisionPolicy, colors: TriangleColors) -> Self {
        Self { policy, colors }
    }

    pub fn single_arm(colors: TriangleColors) -> Self {
        Self::new(SubdivisionPolicy::SingleArm, colors)
    }

    pub fn sierpinski(colors: TriangleColors) -> Self {
        Self::new(SubdivisionPolicy::Sierpinski, colors)
    }

    pub fn policy(&self) -> SubdivisionPolicy {
        self.policy
    }

    pub fn colors(&self) -> &TriangleColors {
        &self.colors
    }

    /// Append the pattern for `seed` to `out`.
    ///
    /// The depth is checked before anything is emitted, so on
    /// [`SubdivisionError::InvalidDepth`] `out` is left as it was.
    /// Existing contents of `out` are never cleared.
    pub fn generate(&self, seed: &Triangle, depth: i32, out: &mut VertexBuffer) -> Result<()> {
        let depth = u32::try_from(depth).map_err(|_| SubdivisionError::InvalidDepth(depth))?;

        let before = out.triangle_count();
        match self.policy {
            SubdivisionPolicy::SingleArm => emit_single_arm(seed, depth, &self.colors, out),
            SubdivisionPolicy::Sierpinski => emit_sierpinski(seed, depth, &self.colors, out),
        }

        log::debug!(
            "{} depth {}: emitted {} triangles",
            self.policy.name(),
            depth,
            out.triangle_count() - before
        );
        Ok(())
    }

    /// Generate into a fresh buffer, pre-sized by [`presize_triangles`]
    pub fn generate_new(&self, seed: &Triangle, depth: i32) -> Result<VertexBuffer> {
        let levels = u32::try_from(depth).map_err(|_| SubdivisionError::InvalidDepth(depth))?;
        let expected = presize_triangles(self.policy, levels);

        let mut out = VertexBuffer::with_triangle_capacity(expected);
        self.generate(seed, depth, &mut out)?;
        Ok(out)
    }
}

impl Default for SubdivisionGenerator {
    fn default() -> Self {
        let policy = SubdivisionPolicy::default();
        Self::new(policy, policy.default_colors())
    }
}

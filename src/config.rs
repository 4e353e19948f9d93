use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::input::KeyPress;
use crate::math::Hsv;
use crate::subdivision::{SubdivisionGenerator, SubdivisionPolicy};
use crate::types::{Triangle, TriangleColors};

/// Deepest subdivision the binary will generate (3^13 triangles is plenty)
pub const MAX_DEPTH: i32 = 12;

/// Scene description loaded from JSON. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub policy: SubdivisionPolicy,
    /// Signed so a bad value reaches the generator and is reported there
    pub depth: i32,
    pub seed: [[f32; 2]; 3],
    /// Explicit per-corner colors; wins over `color`
    pub colors: Option<TriangleColors>,
    /// Flat triangle color given as HSV
    pub color: Option<Hsv>,
    /// Saturation and value of the animated uniform color
    pub saturation: f32,
    pub value: f32,
    /// Number of render steps to simulate
    pub frames: u32,
    /// Seconds between simulated frames
    pub frame_dt: f32,
    pub key_script: Vec<KeyPress>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let seed = Triangle::DEFAULT_SEED;
        Self {
            policy: SubdivisionPolicy::default(),
            depth: 3,
            seed: [seed.a.to_array(), seed.b.to_array(), seed.c.to_array()],
            colors: None,
            color: None,
            saturation: 1.0,
            value: 1.0,
            frames: 0,
            frame_dt: 1.0 / 60.0,
            key_script: Vec::new(),
        }
    }
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene config: {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Invalid scene config: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: SceneConfig =
            serde_json::from_str(text).context("Failed to parse scene config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject depths the binary cannot generate in reasonable memory.
    /// Negative depths pass through and are reported by the generator.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.depth <= MAX_DEPTH,
            "depth {} exceeds the maximum of {}",
            self.depth,
            MAX_DEPTH
        );
        Ok(())
    }

    pub fn seed_triangle(&self) -> Triangle {
        Triangle::from_array(self.seed)
    }

    pub fn triangle_colors(&self) -> TriangleColors {
        if let Some(colors) = self.colors {
            return colors;
        }
        match self.color {
            Some(hsv) => TriangleColors::uniform(hsv.to_rgb()),
            None => self.policy.default_colors(),
        }
    }

    pub fn generator(&self) -> SubdivisionGenerator {
        SubdivisionGenerator::new(self.policy, self.triangle_colors())
    }
}

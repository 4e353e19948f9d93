/// Hue driven by a cosine of elapsed time, wrapped into [0, 360)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCycle {
    pub amplitude: f32,
}

impl HueCycle {
    pub const DEFAULT_AMPLITUDE: f32 = 180.0;

    pub fn new(amplitude: f32) -> Self {
        Self { amplitude }
    }

    pub fn hue_at(&self, elapsed: f32) -> f32 {
        let hue = (self.amplitude * elapsed.cos()).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if hue >= 360.0 {
            0.0
        } else {
            hue
        }
    }
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AMPLITUDE)
    }
}

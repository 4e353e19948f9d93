/// Texture blend factor adjusted by Up/Down while held
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendControl {
    value: f32,
    step: f32,
}

impl BlendControl {
    pub const INITIAL: f32 = 0.2;
    pub const STEP: f32 = 0.05;

    pub fn new(value: f32, step: f32) -> Self {
        Self { value, step }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Not clamped; the shader receives the raw value
    pub fn increase(&mut self) {
        self.value += self.step;
    }

    pub fn decrease(&mut self) {
        self.value -= self.step;
    }
}

impl Default for BlendControl {
    fn default() -> Self {
        Self::new(Self::INITIAL, Self::STEP)
    }
}

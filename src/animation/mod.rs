//! Per-frame CPU state for the render step.
//!
//! [`RenderState`] is owned by the caller and passed by `&mut` into
//! [`RenderState::step`] once per frame; nothing here is global.

mod blend;
mod clock;
mod hue;

pub use blend::BlendControl;
pub use clock::FrameClock;
pub use hue::HueCycle;

use crate::input::{Button, Controller};
use crate::math::hsv_to_rgb;
use crate::types::ColorRGB;

/// Uniform values produced for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub blend: f32,
    pub hue: f32,
    pub color: ColorRGB,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub blend: BlendControl,
    pub hue: HueCycle,
    pub saturation: f32,
    pub value: f32,
    pub close_requested: bool,
}

impl RenderState {
    pub fn new(saturation: f32, value: f32) -> Self {
        Self {
            blend: BlendControl::default(),
            hue: HueCycle::default(),
            saturation,
            value,
            close_requested: false,
        }
    }

    /// Apply held keys, then derive this frame's uniforms from `elapsed` seconds
    pub fn step(&mut self, input: &impl Controller, elapsed: f32) -> FrameUniforms {
        if input.is_down(Button::Escape) {
            self.close_requested = true;
        }
        if input.is_down(Button::Up) {
            self.blend.increase();
        }
        if input.is_down(Button::Down) {
            self.blend.decrease();
        }

        let hue = self.hue.hue_at(elapsed);
        FrameUniforms {
            blend: self.blend.value(),
            hue,
            color: hsv_to_rgb(hue, self.saturation, self.value),
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

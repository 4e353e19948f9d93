use serde::{Deserialize, Serialize};

use crate::types::ColorRGB;

/// Hue in degrees (any real value), saturation and value nominally in [0, 1].
/// Nothing is clamped: out-of-range inputs produce out-of-range channels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    pub fn to_rgb(&self) -> ColorRGB {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> ColorRGB {
    let h_prime = h / 60.0;
    let whole = h_prime.floor();
    let sector = (whole as i64).rem_euclid(6);
    let f = h_prime - whole;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - (1.0 - f) * s);

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        5 => [v, p, q],
        _ => [0.0, 0.0, 0.0],
    }
}

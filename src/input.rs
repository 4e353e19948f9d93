use serde::{Deserialize, Serialize};

/// Keys the render step reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Up,
    Down,
    Escape,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn down_buttons(&self) -> &[Button];
}

/// One scripted key hold: `button` is down during `frame`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub frame: u32,
    pub button: Button,
}

/// Replays a fixed key script, one frame at a time
#[derive(Debug, Clone, Default)]
pub struct ScriptedController {
    script: Vec<KeyPress>,
    frame: u32,
    pressed: Vec<Button>,
}

impl ScriptedController {
    pub fn new(script: Vec<KeyPress>) -> Self {
        let mut controller = Self {
            script,
            frame: 0,
            pressed: Vec::new(),
        };
        controller.seek(0);
        controller
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Move to `frame` and refresh the pressed set
    pub fn seek(&mut self, frame: u32) {
        self.frame = frame;
        self.pressed.clear();
        for press in self.script.iter().filter(|p| p.frame == frame) {
            if !self.pressed.contains(&press.button) {
                self.pressed.push(press.button);
            }
        }
    }
}

impl Controller for ScriptedController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn down_buttons(&self) -> &[Button] {
        &self.pressed
    }
}

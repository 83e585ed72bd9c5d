use glam::Vec2;

pub const DEFAULT_SCALE: f32 = 80.0;

/// Fixed mapping between pixel space and simulation space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    pub scale: f32,
}

impl Units {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    pub fn to_sim(&self, pixels: f32) -> f32 {
        pixels / self.scale
    }

    pub fn to_pixel(&self, units: f32) -> f32 {
        units * self.scale
    }

    pub fn to_sim_vec(&self, pixels: Vec2) -> Vec2 {
        pixels / self.scale
    }

    pub fn to_pixel_vec(&self, units: Vec2) -> Vec2 {
        units * self.scale
    }

    /// Rounds a simulation-space point to the nearest pixel-grid point.
    pub fn snap(&self, units: Vec2) -> Vec2 {
        (units * self.scale).round() / self.scale
    }
}

impl Default for Units {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

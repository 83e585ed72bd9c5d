use crate::units::Units;

/// Global size scalar shared by every body, moved in fixed steps inside `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeMultiplier {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SizeMultiplier {
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        Self { value: min, min, max, step }
    }

    pub fn increase(&mut self) -> Option<(f32, f32)> {
        self.change(self.value + self.step)
    }

    pub fn decrease(&mut self) -> Option<(f32, f32)> {
        self.change(self.value - self.step)
    }

    /// Accepts any value inside the bounds, including the current one.
    pub fn set(&mut self, value: f32) -> bool {
        if !self.contains(value) {
            return false;
        }

        self.value = value;
        true
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn half_extent(&self, box_size: f32) -> f32 {
        box_size / 2.0 * self.value
    }

    pub fn pixel_box_size(&self, box_size: f32, units: &Units) -> i32 {
        (box_size * units.scale * self.value) as i32
    }

    fn change(&mut self, value: f32) -> Option<(f32, f32)> {
        if !self.contains(value) || value == self.value {
            return None;
        }

        let old = self.value;
        self.value = value;

        Some((old, value))
    }
}

impl Default for SizeMultiplier {
    fn default() -> Self {
        Self::new(1.0, 2.0, 1.0)
    }
}

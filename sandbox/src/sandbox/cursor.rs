use glam::IVec2;
use glam::Vec2;

pub const AXIS_RANGE: f32 = 32768.0;

/// Spawn marker in pixel space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cursor {
    pub position: Vec2,
}

impl Cursor {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// Moves by a raw stick deflection, `speed` pixels per frame at full tilt, then clamps into `[0, bounds]`.
    pub fn apply_axis(&mut self, axis: IVec2, speed: f32, bounds: Vec2) {
        let direction = axis.as_vec2() / AXIS_RANGE;

        self.position += direction * speed;
        self.clamp(bounds);
    }

    pub fn clamp(&mut self, bounds: Vec2) {
        self.position = self.position.clamp(Vec2::ZERO, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(1920.0, 1080.0);

    #[test]
    fn full_deflection_moves_by_speed() {
        let mut cursor = Cursor::new(Vec2::new(960.0, 540.0));
        cursor.apply_axis(IVec2::new(32768, -32768), 10.0, BOUNDS);

        assert_eq!(cursor.position, Vec2::new(970.0, 530.0));
    }

    #[test]
    fn position_is_clamped_to_bounds() {
        let mut cursor = Cursor::new(Vec2::new(5.0, 1075.0));
        cursor.apply_axis(IVec2::new(-32768, 32767), 10.0, BOUNDS);

        assert_eq!(cursor.position.x, 0.0);
        assert_eq!(cursor.position.y, 1080.0);

        let mut cursor = Cursor::new(Vec2::new(-40.0, 4000.0));
        cursor.clamp(BOUNDS);
        assert_eq!(cursor.position, Vec2::new(0.0, 1080.0));
    }

    #[test]
    fn idle_axis_keeps_position() {
        let mut cursor = Cursor::new(Vec2::new(100.0, 200.0));
        cursor.apply_axis(IVec2::ZERO, 10.0, BOUNDS);

        assert_eq!(cursor.position, Vec2::new(100.0, 200.0));
    }
}

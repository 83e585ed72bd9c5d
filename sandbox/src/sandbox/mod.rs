use crate::physics::BodyKind;
use crate::physics::PhysicsEngine;
use crate::render::FrameSnapshot;
use crate::settings::Settings;
use crate::units::Units;
use crate::utils::profiler::Profiler;
use glam::Vec2;

pub mod cursor;
pub mod multiplier;
pub mod rescale;
pub mod spawn;
pub mod sweep;

use self::cursor::Cursor;
use self::multiplier::SizeMultiplier;

/// Whole simulation state: the physics world plus the spawn cursor and the global size multiplier.
pub struct Sandbox<P>
where
    P: PhysicsEngine,
{
    pub physics: P,
    pub settings: Settings,
    pub units: Units,
    pub multiplier: SizeMultiplier,
    pub cursor: Cursor,
    pub profiler: Profiler,
}

impl<P> Sandbox<P>
where
    P: PhysicsEngine,
{
    /// Takes gravity from `settings`, whatever the engine was built with.
    pub fn new(mut physics: P, settings: Settings) -> Self {
        physics.set_gravity(settings.gravity);

        let units = settings.units();
        let multiplier = SizeMultiplier::new(settings.multiplier_min, settings.multiplier_max, settings.multiplier_step);
        let cursor = Cursor::new(settings.bounds() / 2.0);

        Self { physics, settings, units, multiplier, cursor, profiler: Default::default() }
    }

    pub fn half_extent(&self) -> f32 {
        self.multiplier.half_extent(self.settings.box_size)
    }

    pub fn pixel_box_size(&self) -> i32 {
        self.multiplier.pixel_box_size(self.settings.box_size, &self.units)
    }

    pub fn is_inside_bounds(&self, pixels: Vec2) -> bool {
        let bounds = self.settings.bounds();
        pixels.x >= 0.0 && pixels.x <= bounds.x && pixels.y >= 0.0 && pixels.y <= bounds.y
    }

    pub fn step(&mut self) {
        self.profiler.start("step");
        self.physics.step(&self.settings.step);
        self.profiler.stop("step");
    }

    pub fn snapshot(&self) -> FrameSnapshot<P::Handle> {
        let bodies = self.physics.bodies();
        let dynamic_count = bodies.iter().filter(|p| p.kind == BodyKind::Dynamic).count();
        let static_count = bodies.len() - dynamic_count;

        FrameSnapshot {
            bodies,
            cursor: self.cursor.position,
            multiplier: self.multiplier.value,
            pixel_box_size: self.pixel_box_size(),
            dynamic_count,
            static_count,
        }
    }
}

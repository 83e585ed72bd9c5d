use super::Sandbox;
use crate::physics::PhysicsEngine;
use log::debug;

impl<P> Sandbox<P>
where
    P: PhysicsEngine,
{
    pub fn increase_size(&mut self) -> bool {
        match self.multiplier.increase() {
            Some((old, new)) => {
                self.rescale(old, new);
                true
            }
            None => false,
        }
    }

    pub fn decrease_size(&mut self) -> bool {
        match self.multiplier.decrease() {
            Some((old, new)) => {
                self.rescale(old, new);
                true
            }
            None => false,
        }
    }

    pub fn set_multiplier(&mut self, value: f32) -> bool {
        let old = self.multiplier.value;

        if !self.multiplier.set(value) {
            return false;
        }

        if old != value {
            self.rescale(old, value);
        }

        true
    }

    /// Rewrites every body to the new size and snaps it to the pixel grid, keeping its angle.
    /// Must run between steps, the solver never sees a partially resized world.
    pub fn rescale(&mut self, old: f32, new: f32) {
        let half_extent = self.settings.box_size / 2.0 * new;
        let bodies = self.physics.bodies();

        for body in &bodies {
            self.physics.set_half_extent(body.handle, half_extent);
            self.physics.set_transform(body.handle, self.units.snap(body.position), body.angle);
        }

        debug!("Size multiplier changed from {} to {}, {} bodies rescaled", old, new, bodies.len());
    }
}

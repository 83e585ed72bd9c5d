use super::Sandbox;
use crate::physics::BodyKind;
use crate::physics::PhysicsEngine;
use log::debug;
use log::trace;

impl<P> Sandbox<P>
where
    P: PhysicsEngine,
{
    /// Destroys dynamic bodies that left the visible rectangle. Static bodies stay wherever they are.
    pub fn remove_offscreen(&mut self) -> usize {
        self.profiler.start("sweep");

        let mut orphans = Vec::new();

        for body in self.physics.bodies() {
            if body.kind == BodyKind::Dynamic && !self.is_inside_bounds(self.units.to_pixel_vec(body.position)) {
                orphans.push(body.handle);
            }
        }

        let removed = self.physics.destroy_bodies(&orphans);
        self.profiler.stop("sweep");

        if removed > 0 {
            trace!("{} bodies left the screen and were removed", removed);
        }

        removed
    }

    pub fn remove_all_static(&mut self) -> usize {
        let orphans = self.physics.bodies().into_iter().filter(|p| p.kind == BodyKind::Static).map(|p| p.handle).collect::<Vec<_>>();
        let removed = self.physics.destroy_bodies(&orphans);

        debug!("Reset removed {} static bodies", removed);
        removed
    }
}

#[cfg(test)]
mod tests {
    use crate::physics::context::PhysicsContext;
    use crate::physics::BodyKind;
    use crate::physics::PhysicsEngine;
    use crate::sandbox::Sandbox;
    use crate::settings::Settings;
    use glam::Vec2;

    fn sandbox() -> Sandbox<PhysicsContext> {
        Sandbox::new(PhysicsContext::default(), Settings::default())
    }

    #[test]
    fn offscreen_sweep_only_touches_dynamic_bodies() {
        let mut sandbox = sandbox();
        sandbox.spawn_dynamic(Vec2::new(-1.0, 500.0));
        sandbox.spawn_dynamic(Vec2::new(500.0, 1081.0));
        sandbox.spawn_dynamic(Vec2::new(1920.0, 1080.0));
        sandbox.spawn_static(Vec2::new(2500.0, -300.0));

        assert_eq!(sandbox.remove_offscreen(), 2);

        let bodies = sandbox.physics.bodies();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].kind, BodyKind::Dynamic);
        assert_eq!(bodies[1].kind, BodyKind::Static);
    }

    #[test]
    fn reset_keeps_dynamic_bodies() {
        let mut sandbox = sandbox();
        sandbox.spawn_static(Vec2::new(100.0, 100.0));
        sandbox.spawn_dynamic(Vec2::new(200.0, 100.0));
        sandbox.spawn_static(Vec2::new(300.0, 100.0));

        assert_eq!(sandbox.remove_all_static(), 2);
        assert_eq!(sandbox.physics.len(), 1);
        assert_eq!(sandbox.physics.bodies()[0].kind, BodyKind::Dynamic);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut sandbox = sandbox();
        sandbox.spawn_static(Vec2::new(100.0, 100.0));
        sandbox.spawn_dynamic(Vec2::new(200.0, 100.0));

        sandbox.remove_all_static();
        let once = sandbox.physics.bodies();

        assert_eq!(sandbox.remove_all_static(), 0);
        assert_eq!(sandbox.physics.bodies(), once);
    }
}

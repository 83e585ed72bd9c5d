use super::Sandbox;
use crate::physics::BodyDesc;
use crate::physics::BodyKind;
use crate::physics::PhysicsEngine;
use glam::Vec2;

impl<P> Sandbox<P>
where
    P: PhysicsEngine,
{
    pub fn spawn_dynamic(&mut self, pixels: Vec2) -> P::Handle {
        self.spawn(BodyKind::Dynamic, pixels)
    }

    pub fn spawn_static(&mut self, pixels: Vec2) -> P::Handle {
        self.spawn(BodyKind::Static, pixels)
    }

    pub fn spawn_at_cursor(&mut self, kind: BodyKind) -> P::Handle {
        self.spawn(kind, self.cursor.position)
    }

    /// Adds a square at a pixel position, sized by the current multiplier. Overlaps are left to the solver.
    pub fn spawn(&mut self, kind: BodyKind, pixels: Vec2) -> P::Handle {
        let desc = BodyDesc::new(kind, self.units.to_sim_vec(pixels), self.half_extent(), self.settings.material);
        self.physics.create_body(desc)
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

    #[test]
    fn spawn_converts_pixels_and_uses_current_size() {
        let mut sandbox = Sandbox::new(PhysicsContext::default(), Settings::default());
        sandbox.spawn_dynamic(Vec2::new(960.0, 540.0));

        let bodies = sandbox.physics.bodies();
        assert_eq!(bodies.len(), 1);
        assert_eq!((bodies[0].kind, bodies[0].position, bodies[0].half_extent), (BodyKind::Dynamic, Vec2::new(12.0, 6.75), 0.5));
        assert_eq!(bodies[0].angle, 0.0);

        let mut sandbox = Sandbox::new(PhysicsContext::default(), Settings::default());
        assert!(sandbox.set_multiplier(2.0));
        sandbox.spawn_static(Vec2::new(80.0, 160.0));

        let bodies = sandbox.physics.bodies();
        assert_eq!((bodies[0].kind, bodies[0].position, bodies[0].half_extent), (BodyKind::Static, Vec2::new(1.0, 2.0), 1.0));
    }

    #[test]
    fn both_kinds_get_the_configured_material() {
        let mut sandbox = Sandbox::new(PhysicsContext::default(), Settings::default());
        let material = Settings::default().material;
        let handles = [sandbox.spawn_dynamic(Vec2::new(100.0, 100.0)), sandbox.spawn_static(Vec2::new(300.0, 100.0))];

        for handle in handles {
            let collider_handle = sandbox.physics.rigidbodies[handle].colliders()[0];
            let collider = &sandbox.physics.colliders[collider_handle];

            assert_eq!(collider.density(), 1.0);
            assert_eq!(collider.friction(), 0.3);
            assert_eq!(collider.restitution(), 0.1);
            assert_eq!((collider.density(), collider.friction(), collider.restitution()), (material.density, material.friction, material.restitution));
        }
    }

    #[test]
    fn overlapping_spawns_are_allowed() {
        let mut sandbox = Sandbox::new(PhysicsContext::default(), Settings::default());
        let a = sandbox.spawn_at_cursor(BodyKind::Dynamic);
        let b = sandbox.spawn_at_cursor(BodyKind::Dynamic);

        assert_ne!(a, b);
        assert_eq!(sandbox.physics.len(), 2);
    }
}

use super::BodyDesc;
use super::BodyKind;
use super::BodySnapshot;
use super::PhysicsEngine;
use super::StepParameters;
use glam::Vec2;
use log::debug;
use log::trace;
use nalgebra::Vector2;
use rapier2d::prelude::*;
use std::num::NonZeroUsize;

pub struct PhysicsContext {
    pub gravity: Vector2<f32>,
    pub rigidbodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: BroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub solver: CCDSolver,
    pub running: bool,

    order: Vec<RigidBodyHandle>,
}

impl PhysicsContext {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: Vector2::from(gravity),
            rigidbodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            solver: CCDSolver::new(),
            running: true,

            order: Vec::new(),
        }
    }

    fn remove_rigidbody(&mut self, handle: RigidBodyHandle) -> bool {
        self.rigidbodies
            .remove(handle, &mut self.island_manager, &mut self.colliders, &mut self.impulse_joints, &mut self.multibody_joints, true)
            .is_some()
    }

    fn collider_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut Collider> {
        let collider_handle = *self.rigidbodies.get(handle)?.colliders().first()?;
        self.colliders.get_mut(collider_handle)
    }

    fn collider(&self, handle: RigidBodyHandle) -> Option<&Collider> {
        let collider_handle = *self.rigidbodies.get(handle)?.colliders().first()?;
        self.colliders.get(collider_handle)
    }
}

impl PhysicsEngine for PhysicsContext {
    type Handle = RigidBodyHandle;

    fn create_body(&mut self, desc: BodyDesc) -> RigidBodyHandle {
        let builder = match desc.kind {
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
            BodyKind::Static => RigidBodyBuilder::fixed(),
        };

        let rigidbody = builder.translation(vector![desc.position.x, desc.position.y]).rotation(desc.angle).build();
        let collider = ColliderBuilder::cuboid(desc.half_extent, desc.half_extent)
            .density(desc.material.density)
            .friction(desc.material.friction)
            .restitution(desc.material.restitution)
            .build();

        let rigidbody_handle = self.rigidbodies.insert(rigidbody);
        self.colliders.insert_with_parent(collider, rigidbody_handle, &mut self.rigidbodies);
        self.order.push(rigidbody_handle);

        trace!("Body {:?} ({:?}) created at {}", rigidbody_handle, desc.kind, desc.position);
        rigidbody_handle
    }

    fn destroy_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.destroy_bodies(&[handle]) == 1
    }

    fn destroy_bodies(&mut self, handles: &[RigidBodyHandle]) -> usize {
        let mut removed = 0;

        for handle in handles {
            if self.remove_rigidbody(*handle) {
                removed += 1;
            } else {
                debug!("Body {:?} doesn't exist, nothing to destroy", handle);
            }
        }

        if removed > 0 {
            let rigidbodies = &self.rigidbodies;
            self.order.retain(|p| rigidbodies.contains(*p));
        }

        removed
    }

    fn bodies(&self) -> Vec<BodySnapshot<RigidBodyHandle>> {
        let mut bodies = Vec::with_capacity(self.order.len());

        for handle in &self.order {
            if let Some(rigidbody) = self.rigidbodies.get(*handle) {
                let kind = if rigidbody.is_dynamic() { BodyKind::Dynamic } else { BodyKind::Static };
                let half_extent = self.half_extent(*handle).unwrap_or(0.0);

                bodies.push(BodySnapshot {
                    handle: *handle,
                    kind,
                    position: Vec2::from(*rigidbody.translation()),
                    angle: rigidbody.rotation().angle(),
                    half_extent,
                });
            }
        }

        bodies
    }

    fn half_extent(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.collider(handle)?.shape().as_cuboid().map(|p| p.half_extents.x)
    }

    fn set_half_extent(&mut self, handle: RigidBodyHandle, half_extent: f32) {
        match self.collider_mut(handle) {
            Some(collider) => collider.set_shape(SharedShape::cuboid(half_extent, half_extent)),
            None => debug!("Body {:?} has no collider to resize", handle),
        }
    }

    fn set_transform(&mut self, handle: RigidBodyHandle, position: Vec2, angle: f32) {
        match self.rigidbodies.get_mut(handle) {
            Some(rigidbody) => rigidbody.set_position(Isometry::new(vector![position.x, position.y], angle), true),
            None => debug!("Body {:?} doesn't exist, transform ignored", handle),
        }
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = Vector2::from(gravity);
    }

    fn step(&mut self, parameters: &StepParameters) {
        if !self.running {
            return;
        }

        self.integration_parameters.dt = parameters.dt;
        self.integration_parameters.num_solver_iterations = NonZeroUsize::new(parameters.velocity_iterations).unwrap_or(NonZeroUsize::MIN);
        self.integration_parameters.num_internal_pgs_iterations = parameters.position_iterations.max(1);

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigidbodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.solver,
            None,
            &(),
            &(),
        );
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

impl Default for PhysicsContext {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, 9.81))
    }
}

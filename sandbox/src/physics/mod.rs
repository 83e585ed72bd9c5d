use glam::Vec2;
use std::fmt::Debug;
use std::hash::Hash;

pub mod context;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Dynamic,
    Static,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
}

/// Everything needed to create a square body. Each body gets its own copy of the shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyDesc {
    pub kind: BodyKind,
    pub position: Vec2,
    pub half_extent: f32,
    pub angle: f32,
    pub material: Material,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodySnapshot<H> {
    pub handle: H,
    pub kind: BodyKind,
    pub position: Vec2,
    pub angle: f32,
    pub half_extent: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepParameters {
    pub dt: f32,
    pub velocity_iterations: usize,
    pub position_iterations: usize,
}

/// Rigid-body capability the sandbox is built on. Positions are in simulation units.
pub trait PhysicsEngine {
    type Handle: Copy + Eq + Hash + Debug;

    fn create_body(&mut self, desc: BodyDesc) -> Self::Handle;
    fn destroy_body(&mut self, handle: Self::Handle) -> bool;

    /// Destroys a batch in one pass over the body list, returns how many existed.
    fn destroy_bodies(&mut self, handles: &[Self::Handle]) -> usize;
    fn bodies(&self) -> Vec<BodySnapshot<Self::Handle>>;

    fn half_extent(&self, handle: Self::Handle) -> Option<f32>;
    fn set_half_extent(&mut self, handle: Self::Handle, half_extent: f32);
    fn set_transform(&mut self, handle: Self::Handle, position: Vec2, angle: f32);

    fn set_gravity(&mut self, gravity: Vec2);
    fn step(&mut self, parameters: &StepParameters);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self { density: 1.0, friction: 0.3, restitution: 0.1 }
    }
}

impl BodyDesc {
    pub fn new(kind: BodyKind, position: Vec2, half_extent: f32, material: Material) -> Self {
        Self { kind, position, half_extent, angle: 0.0, material }
    }
}

impl Default for StepParameters {
    fn default() -> Self {
        Self { dt: 1.0 / 60.0, velocity_iterations: 6, position_iterations: 2 }
    }
}

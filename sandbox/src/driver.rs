use crate::input::Button;
use crate::input::InputEvent;
use crate::input::InputSource;
use crate::physics::BodyKind;
use crate::physics::PhysicsEngine;
use crate::render::render_frame;
use crate::render::DrawSink;
use crate::render::FrameSnapshot;
use crate::sandbox::Sandbox;
use log::debug;
use log::info;

#[derive(Clone, Debug, PartialEq)]
pub enum FrameCommand {
    Exit,
}

pub struct FrameDriver<P>
where
    P: PhysicsEngine,
{
    pub sandbox: Sandbox<P>,
    pub frame_index: u64,
}

impl<P> FrameDriver<P>
where
    P: PhysicsEngine,
{
    pub fn new(sandbox: Sandbox<P>) -> Self {
        Self { sandbox, frame_index: 0 }
    }

    /// Runs one frame: commands, held spawns, cursor, off-screen sweep, physics step.
    /// Returns `None` when the input asked to quit, the world is left as it was.
    pub fn frame(&mut self, input: &mut dyn InputSource) -> Option<FrameSnapshot<P::Handle>> {
        input.pump();

        while let Some(event) = input.poll_event() {
            if let Some(FrameCommand::Exit) = self.process_event(event) {
                return None;
            }
        }

        self.frame_index += 1;

        if self.frame_index % self.sandbox.settings.spawn_interval.get() == 0 {
            if input.is_held(Button::SpawnDynamic) {
                self.sandbox.spawn_at_cursor(BodyKind::Dynamic);
            }

            if input.is_held(Button::SpawnStatic) {
                self.sandbox.spawn_at_cursor(BodyKind::Static);
            }
        }

        let bounds = self.sandbox.settings.bounds();
        self.sandbox.cursor.apply_axis(input.axis(), self.sandbox.settings.cursor_speed, bounds);

        self.sandbox.remove_offscreen();
        self.sandbox.step();

        Some(self.sandbox.snapshot())
    }

    /// Drives frames until quit or `max_frames`, presenting each one. Returns the number of frames run.
    pub fn run(&mut self, input: &mut dyn InputSource, sink: &mut dyn DrawSink, max_frames: Option<u64>) -> u64 {
        info!("Simulation started");
        let start = self.frame_index;

        while max_frames.map_or(true, |p| self.frame_index - start < p) {
            let snapshot = match self.frame(input) {
                Some(snapshot) => snapshot,
                None => break,
            };

            render_frame(&snapshot, &self.sandbox.settings, sink);
        }

        let frames = self.frame_index - start;
        info!("Simulation stopped after {} frames with {} bodies", frames, self.sandbox.physics.len());

        frames
    }

    fn process_event(&mut self, event: InputEvent) -> Option<FrameCommand> {
        match event {
            InputEvent::Quit => return Some(FrameCommand::Exit),
            InputEvent::ButtonPress { button } => match button {
                Button::ResetStatics => {
                    self.sandbox.remove_all_static();
                }
                Button::DecreaseSize => {
                    if !self.sandbox.decrease_size() {
                        debug!("Size multiplier already at minimum ({})", self.sandbox.multiplier.value);
                    }
                }
                Button::IncreaseSize => {
                    if !self.sandbox.increase_size() {
                        debug!("Size multiplier already at maximum ({})", self.sandbox.multiplier.value);
                    }
                }
                Button::SpawnDynamic | Button::SpawnStatic => {}
            },
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::physics::context::PhysicsContext;
    use crate::render::LogSink;
    use crate::settings::Settings;
    use glam::IVec2;
    use glam::Vec2;
    use std::num::NonZeroU64;

    fn driver() -> FrameDriver<PhysicsContext> {
        FrameDriver::new(Sandbox::new(PhysicsContext::default(), Settings::default()))
    }

    #[test]
    fn held_spawn_fires_every_other_frame() {
        let mut driver = driver();
        let mut input = ScriptedInput::new();
        input.hold(Button::SpawnDynamic);

        let counts = (0..6).map(|_| driver.frame(&mut input).unwrap().dynamic_count).collect::<Vec<_>>();
        assert_eq!(counts, vec![0, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn spawn_interval_of_one_spawns_every_frame() {
        let settings = Settings { spawn_interval: NonZeroU64::MIN, ..Default::default() };
        let mut driver = FrameDriver::new(Sandbox::new(PhysicsContext::default(), settings));
        let mut input = ScriptedInput::new();
        input.hold(Button::SpawnStatic);

        let counts = (0..3).map(|_| driver.frame(&mut input).unwrap().static_count).collect::<Vec<_>>();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn both_spawn_buttons_can_be_held_together() {
        let mut driver = driver();
        let mut input = ScriptedInput::new();
        input.hold(Button::SpawnDynamic);
        input.hold(Button::SpawnStatic);

        driver.frame(&mut input);
        let snapshot = driver.frame(&mut input).unwrap();

        assert_eq!((snapshot.dynamic_count, snapshot.static_count), (1, 1));
    }

    #[test]
    fn size_commands_step_once_per_press() {
        let mut driver = driver();
        let mut input = ScriptedInput::new();
        input.hold(Button::SpawnStatic);
        driver.frame(&mut input);
        driver.frame(&mut input);
        input.release(Button::SpawnStatic);

        input.press(Button::IncreaseSize);
        input.press(Button::IncreaseSize);
        let snapshot = driver.frame(&mut input).unwrap();

        assert_eq!(snapshot.multiplier, 2.0);
        assert_eq!(snapshot.pixel_box_size, 160);
        assert!(snapshot.bodies.iter().all(|p| p.half_extent == 1.0));

        let snapshot = driver.frame(&mut input).unwrap();
        assert_eq!(snapshot.multiplier, 2.0);

        input.press(Button::DecreaseSize);
        let snapshot = driver.frame(&mut input).unwrap();
        assert_eq!(snapshot.multiplier, 1.0);
        assert!(snapshot.bodies.iter().all(|p| p.half_extent == 0.5));
    }

    #[test]
    fn reset_removes_barriers_only() {
        let mut driver = driver();
        let mut input = ScriptedInput::new();
        input.hold(Button::SpawnStatic);
        input.hold(Button::SpawnDynamic);
        driver.frame(&mut input);
        driver.frame(&mut input);
        input.release(Button::SpawnStatic);
        input.release(Button::SpawnDynamic);

        input.press(Button::ResetStatics);
        let snapshot = driver.frame(&mut input).unwrap();

        assert_eq!((snapshot.dynamic_count, snapshot.static_count), (1, 0));
    }

    #[test]
    fn cursor_moves_with_stick_and_stays_inside() {
        let mut driver = driver();
        let mut input = ScriptedInput::new();
        input.set_axis(IVec2::new(32767, 0));

        let snapshot = driver.frame(&mut input).unwrap();
        assert!(snapshot.cursor.x > 960.0 && snapshot.cursor.x < 970.0);
        assert_eq!(snapshot.cursor.y, 540.0);

        input.set_axis(IVec2::new(-32768, -32768));
        for _ in 0..200 {
            let snapshot = driver.frame(&mut input).unwrap();
            assert!(snapshot.cursor.x >= 0.0 && snapshot.cursor.y >= 0.0);
        }

        assert_eq!(driver.sandbox.cursor.position, Vec2::ZERO);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut driver = driver();
        let mut input = ScriptedInput::new();
        let mut sink = LogSink::default();

        assert_eq!(driver.run(&mut input, &mut sink, Some(5)), 5);
        assert_eq!(sink.frames, 5);

        input.push_event(InputEvent::Quit);
        assert_eq!(driver.run(&mut input, &mut sink, Some(5)), 0);
        assert_eq!(driver.frame_index, 5);
    }
}

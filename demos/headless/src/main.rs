use sandbox::anyhow::Result;
use sandbox::app;
use sandbox::driver::FrameDriver;
use sandbox::fastrand;
use sandbox::glam::IVec2;
use sandbox::input::Button;
use sandbox::input::InputEvent;
use sandbox::input::InputSource;
use sandbox::input::ScriptedInput;
use sandbox::log::info;
use sandbox::physics::context::PhysicsContext;
use sandbox::render::LogSink;
use sandbox::sandbox::Sandbox;
use sandbox::settings::Settings;
use std::env;

const SETTINGS_PATH: &str = "./sandbox.cfg";
const DEFAULT_FRAMES: u64 = 3600;

/// Gamepad stand-in: wanders the stick, holds spawn buttons in bursts and pokes the size and reset buttons.
struct AutoPilot {
    inner: ScriptedInput,
    frame: u64,
    frames: u64,
    axis: IVec2,
}

impl AutoPilot {
    fn new(frames: u64) -> Self {
        Self { inner: ScriptedInput::new(), frame: 0, frames, axis: IVec2::ZERO }
    }
}

impl InputSource for AutoPilot {
    fn pump(&mut self) {
        self.frame += 1;

        if self.frame > self.frames {
            self.inner.push_event(InputEvent::Quit);
            return;
        }

        if self.frame % 30 == 0 {
            self.axis = IVec2::new(fastrand::i32(-32768..=32767), fastrand::i32(-32768..=32767));
        }
        self.inner.set_axis(self.axis);

        match self.frame % 240 {
            1 => self.inner.hold(Button::SpawnStatic),
            20 => self.inner.release(Button::SpawnStatic),
            40 => self.inner.hold(Button::SpawnDynamic),
            120 => self.inner.release(Button::SpawnDynamic),
            150 => self.inner.press(if fastrand::bool() { Button::IncreaseSize } else { Button::DecreaseSize }),
            200 => self.inner.press(Button::ResetStatics),
            _ => {}
        }
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.inner.poll_event()
    }

    fn is_held(&self, button: Button) -> bool {
        self.inner.is_held(button)
    }

    fn axis(&self) -> IVec2 {
        self.inner.axis()
    }
}

fn main() -> Result<()> {
    app::init_logging()?;

    let mut args = env::args().skip(1);
    let settings_path = args.next().unwrap_or_else(|| SETTINGS_PATH.to_string());
    let frames = match args.next() {
        Some(frames) => frames.parse()?,
        None => DEFAULT_FRAMES,
    };

    let settings = Settings::load(&settings_path)?;
    info!("Bounds {}x{}, scale {}, {} frames", settings.width, settings.height, settings.scale, frames);

    let mut sandbox = Sandbox::new(PhysicsContext::new(settings.gravity), settings);
    sandbox.profiler.enabled = true;

    let mut driver = FrameDriver::new(sandbox);
    let mut input = AutoPilot::new(frames);
    let mut sink = LogSink::default();

    driver.run(&mut input, &mut sink, None);

    let profiler = &driver.sandbox.profiler;
    for name in ["sweep", "step"] {
        if let Some(average) = profiler.get_average(name) {
            info!("Average {} time: {:.3} ms", name, average * 1000.0);
        }
    }
    info!("{} frames presented, {} rects drawn", sink.frames, sink.rects_total);

    Ok(())
}

use crate::physics::BodyKind;
use crate::physics::BodySnapshot;
use crate::settings::Settings;
use crate::units::Units;
use glam::IVec2;
use glam::Vec2;
use glam::Vec4;
use log::trace;

pub const CROSSHAIR_HALF_LENGTH: f32 = 10.0;

/// Read-only view of one frame, taken after the physics step.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot<H> {
    pub bodies: Vec<BodySnapshot<H>>,
    pub cursor: Vec2,
    pub multiplier: f32,
    pub pixel_box_size: i32,
    pub dynamic_count: usize,
    pub static_count: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DrawRect {
    pub position: IVec2,
    pub size: IVec2,
}

pub trait DrawSink {
    fn clear(&mut self, color: Vec4);
    fn draw_rect(&mut self, rect: DrawRect, color: Vec4);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Vec4);
    fn present(&mut self);
}

pub fn body_rect<H>(body: &BodySnapshot<H>, pixel_box_size: i32, units: &Units) -> DrawRect {
    let center = units.to_pixel_vec(body.position);
    let half = (pixel_box_size / 2) as f32;

    DrawRect { position: IVec2::new((center.x - half) as i32, (center.y - half) as i32), size: IVec2::splat(pixel_box_size) }
}

pub fn render_frame<H>(snapshot: &FrameSnapshot<H>, settings: &Settings, sink: &mut dyn DrawSink) {
    let units = settings.units();
    sink.clear(settings.background_color);

    for body in &snapshot.bodies {
        let color = match body.kind {
            BodyKind::Dynamic => settings.dynamic_color,
            BodyKind::Static => settings.static_color,
        };

        sink.draw_rect(body_rect(body, snapshot.pixel_box_size, &units), color);
    }

    let horizontal = Vec2::new(CROSSHAIR_HALF_LENGTH, 0.0);
    let vertical = Vec2::new(0.0, CROSSHAIR_HALF_LENGTH);

    sink.draw_line(snapshot.cursor - horizontal, snapshot.cursor + horizontal, settings.cursor_color);
    sink.draw_line(snapshot.cursor - vertical, snapshot.cursor + vertical, settings.cursor_color);
    sink.present();
}

/// Draw sink without a screen, counts primitives and logs a summary per presented frame.
#[derive(Debug, Default)]
pub struct LogSink {
    pub frames: u64,
    pub rects: usize,
    pub lines: usize,
    pub rects_total: usize,
}

impl DrawSink for LogSink {
    fn clear(&mut self, _: Vec4) {
        self.rects = 0;
        self.lines = 0;
    }

    fn draw_rect(&mut self, _: DrawRect, _: Vec4) {
        self.rects += 1;
    }

    fn draw_line(&mut self, _: Vec2, _: Vec2, _: Vec4) {
        self.lines += 1;
    }

    fn present(&mut self) {
        self.frames += 1;
        self.rects_total += self.rects;

        trace!("Frame {} presented: {} rects, {} lines", self.frames, self.rects, self.lines);
    }
}

use crate::physics::Material;
use crate::physics::StepParameters;
use crate::units::Units;
use crate::units::DEFAULT_SCALE;
use crate::utils::color::RgbToVec4;
use crate::utils::color::Vec4Color;
use anyhow::anyhow;
use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use colors_transform::Rgb;
use glam::Vec2;
use glam::Vec4;
use log::warn;
use rustc_hash::FxHashMap;
use std::fs;
use std::io::ErrorKind;
use std::num::NonZeroU64;
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub scale: f32,
    pub width: u32,
    pub height: u32,
    pub box_size: f32,

    pub multiplier_min: f32,
    pub multiplier_max: f32,
    pub multiplier_step: f32,

    pub gravity: Vec2,
    pub material: Material,
    pub step: StepParameters,

    pub cursor_speed: f32,
    pub spawn_interval: NonZeroU64,

    pub background_color: Vec4,
    pub dynamic_color: Vec4,
    pub static_color: Vec4,
    pub cursor_color: Vec4,
}

impl Settings {
    /// Reads `key=value` overrides from `path`, keeping defaults when the file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).with_context(|| format!("Failed to parse settings file {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("Settings file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err).with_context(|| format!("Failed to read settings file {}", path.display())),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut settings = Self::default();

        for (key, value) in deserialize(content)? {
            match key.as_str() {
                "scale" => settings.scale = parse_value(&key, &value)?,
                "width" => settings.width = parse_value(&key, &value)?,
                "height" => settings.height = parse_value(&key, &value)?,
                "box_size" => settings.box_size = parse_value(&key, &value)?,
                "multiplier_min" => settings.multiplier_min = parse_value(&key, &value)?,
                "multiplier_max" => settings.multiplier_max = parse_value(&key, &value)?,
                "multiplier_step" => settings.multiplier_step = parse_value(&key, &value)?,
                "gravity_x" => settings.gravity.x = parse_value(&key, &value)?,
                "gravity_y" => settings.gravity.y = parse_value(&key, &value)?,
                "density" => settings.material.density = parse_value(&key, &value)?,
                "friction" => settings.material.friction = parse_value(&key, &value)?,
                "restitution" => settings.material.restitution = parse_value(&key, &value)?,
                "timestep" => settings.step.dt = parse_value(&key, &value)?,
                "velocity_iterations" => settings.step.velocity_iterations = parse_value(&key, &value)?,
                "position_iterations" => settings.step.position_iterations = parse_value(&key, &value)?,
                "cursor_speed" => settings.cursor_speed = parse_value(&key, &value)?,
                "spawn_interval" => settings.spawn_interval = parse_value(&key, &value)?,
                "background_color" => settings.background_color = parse_color(&key, &value)?,
                "dynamic_color" => settings.dynamic_color = parse_color(&key, &value)?,
                "static_color" => settings.static_color = parse_color(&key, &value)?,
                "cursor_color" => settings.cursor_color = parse_color(&key, &value)?,
                _ => warn!("Unknown settings key {}", key),
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.scale > 0.0) {
            bail!("Scale must be positive, got {}", self.scale);
        }

        if self.width == 0 || self.height == 0 {
            bail!("Bounds must be non-empty, got {}x{}", self.width, self.height);
        }

        if !(self.box_size > 0.0) {
            bail!("Box size must be positive, got {}", self.box_size);
        }

        if !(self.multiplier_min > 0.0) || self.multiplier_min > self.multiplier_max {
            bail!("Invalid multiplier range [{}, {}]", self.multiplier_min, self.multiplier_max);
        }

        if !(self.multiplier_step > 0.0) {
            bail!("Multiplier step must be positive, got {}", self.multiplier_step);
        }

        if !(self.step.dt > 0.0) {
            bail!("Timestep must be positive, got {}", self.step.dt);
        }

        if self.step.velocity_iterations == 0 {
            bail!("Velocity iterations must be at least 1");
        }

        Ok(())
    }

    pub fn units(&self) -> Units {
        Units::new(self.scale)
    }

    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            width: 1920,
            height: 1080,
            box_size: 1.0,

            multiplier_min: 1.0,
            multiplier_max: 2.0,
            multiplier_step: 1.0,

            gravity: Vec2::new(0.0, 9.81),
            material: Default::default(),
            step: Default::default(),

            cursor_speed: 10.0,
            spawn_interval: NonZeroU64::new(2).unwrap_or(NonZeroU64::MIN),

            background_color: Vec4::new_rgb(255, 255, 255, 255),
            dynamic_color: Vec4::new_rgb(255, 0, 0, 255),
            static_color: Vec4::new_rgb(0, 255, 0, 255),
            cursor_color: Vec4::new_rgb(0, 0, 255, 255),
        }
    }
}

fn deserialize(content: &str) -> Result<FxHashMap<String, String>> {
    let mut output = FxHashMap::default();

    for (index, line) in content.lines().map(|p| p.trim()).enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, value) = line.split_once('=').ok_or_else(|| anyhow!("Missing '=' in line {}: {}", index + 1, line))?;
        output.insert(name.trim().to_string(), value.trim().to_string());
    }

    Ok(output)
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
{
    value.parse().map_err(|_| anyhow!("Invalid value {} for key {}", value, key))
}

fn parse_color(key: &str, value: &str) -> Result<Vec4> {
    Rgb::from_hex_str(value).map(|p| p.to_vec4()).map_err(|_| anyhow!("Invalid color {} for key {}", value, key))
}

//! Rig configuration: layout, tuning, and tunables.
//!
//! Every field defaults to the stock six-string instrument, so a host only
//! has to send the parts it wants to change.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PluckError};
use crate::geometry::Point;
use crate::note::{Letter, Note};
use crate::surface::Color;

use super::params::{FRETTING_COYOTE_TIME_MS, PluckParams};
use super::string::StringConfig;

/// Where strings sit on the surface. String `i` rests at
/// `start_y + spacing * i`, the lowest string on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Layout {
    pub start_x: f64,
    pub start_y: f64,
    pub length: f64,
    pub spacing: f64,
    /// Thickness unit; string `i` of `n` is `base_width / 3 * (n - i)`.
    pub base_width: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            start_x: 0.0,
            start_y: 100.0,
            length: 600.0,
            spacing: 40.0,
            base_width: 2.0,
        }
    }
}

impl Layout {
    pub fn string_config(&self, index: usize, count: usize, open_note: Note) -> StringConfig {
        let y = self.start_y + self.spacing * index as f64;
        StringConfig {
            start: Point::new(self.start_x, y),
            end: Point::new(self.start_x + self.length, y),
            thickness: self.base_width / 3.0 * (count - index) as f64,
            open_note,
        }
    }
}

/// Open-string notes, lowest string first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuning(pub Vec<Note>);

impl Tuning {
    /// E2 A2 D3 G3 B3 E4
    pub fn standard() -> Self {
        Tuning(vec![
            Note::natural(Letter::E, 2),
            Note::natural(Letter::A, 2),
            Note::natural(Letter::D, 3),
            Note::natural(Letter::G, 3),
            Note::natural(Letter::B, 3),
            Note::natural(Letter::E, 4),
        ])
    }

    /// D2 A2 D3 G3 B3 E4
    pub fn drop_d() -> Self {
        let mut t = Tuning::standard();
        t.0[0] = Note::natural(Letter::D, 2);
        t
    }

    /// B1 below standard tuning.
    pub fn seven_string() -> Self {
        let mut t = Tuning::standard();
        t.0.insert(0, Note::natural(Letter::B, 1));
        t
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RigConfig {
    pub layout: Layout,
    pub tuning: Tuning,
    pub pluck: PluckParams,
    pub coyote_ms: f64,
    pub color: Color,
}

impl Default for RigConfig {
    fn default() -> Self {
        RigConfig {
            layout: Layout::default(),
            tuning: Tuning::default(),
            pluck: PluckParams::default(),
            coyote_ms: FRETTING_COYOTE_TIME_MS,
            color: Color::default(),
        }
    }
}

impl RigConfig {
    pub fn from_json(json: &str) -> Result<Self, PluckError> {
        let config: RigConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tuning.is_empty() {
            return Err(ConfigError::EmptyTuning);
        }
        let checks = [
            (self.layout.length > 0.0, "length must be positive"),
            (self.layout.base_width > 0.0, "baseWidth must be positive"),
            (self.layout.spacing >= 0.0, "spacing must not be negative"),
            (
                self.pluck.wave_period_length > 0.0,
                "wavePeriodLength must be positive",
            ),
            (
                self.pluck.max_pluck_distance > 0.0,
                "maxPluckDistance must be positive",
            ),
            (
                self.pluck.wave_shift_speed >= 0.0,
                "waveShiftSpeed must not be negative",
            ),
            (
                self.pluck.pluck_start_distance >= 0.0,
                "pluckStartDistance must not be negative",
            ),
            (
                self.pluck.max_wave_amplitude >= 0.0,
                "maxWaveAmplitude must not be negative",
            ),
            (
                self.pluck.max_wave_duration_ms >= 0.0,
                "maxWaveDurationMs must not be negative",
            ),
            (
                self.pluck.max_note_duration_seconds >= 0.0,
                "maxNoteDurationSeconds must not be negative",
            ),
            (
                (0.0..1.0).contains(&self.pluck.wave_decrease_rate),
                "waveDecreaseRate must be in [0, 1)",
            ),
            (self.coyote_ms >= 0.0, "coyoteMs must not be negative"),
        ];
        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, reason)) => Err(ConfigError::InvalidLayout {
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Pointer must be closer than this (vertically) to grab a string.
pub const PLUCK_START_DISTANCE: f64 = 5.1;
/// A drag past this distance releases the string on its own.
pub const MAX_PLUCK_DISTANCE: f64 = 30.0;

pub const MAX_WAVE_AMPLITUDE: f64 = 10.0;
pub const MAX_WAVE_DURATION_MS: f64 = 3000.0;
pub const WAVE_PERIOD_LENGTH: f64 = 80.0;
/// Fraction of amplitude lost per tick.
pub const WAVE_DECREASE_RATE: f64 = 0.015;
/// Horizontal wave shift per tick at full pluck strength.
pub const WAVE_SHIFT_SPEED: f64 = 7.0;

pub const MAX_NOTE_DURATION_SECONDS: f64 = MAX_WAVE_DURATION_MS / 1000.0;

pub const FRETTING_COYOTE_TIME_MS: f64 = 75.0;
pub const MAX_FRET: u8 = 12;

/// Tunables shared by every string of a rig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluckParams {
    pub pluck_start_distance: f64,
    pub max_pluck_distance: f64,
    pub max_wave_amplitude: f64,
    pub max_wave_duration_ms: f64,
    pub wave_period_length: f64,
    pub wave_decrease_rate: f64,
    pub wave_shift_speed: f64,
    pub max_note_duration_seconds: f64,
}

impl Default for PluckParams {
    fn default() -> Self {
        PluckParams {
            pluck_start_distance: PLUCK_START_DISTANCE,
            max_pluck_distance: MAX_PLUCK_DISTANCE,
            max_wave_amplitude: MAX_WAVE_AMPLITUDE,
            max_wave_duration_ms: MAX_WAVE_DURATION_MS,
            wave_period_length: WAVE_PERIOD_LENGTH,
            wave_decrease_rate: WAVE_DECREASE_RATE,
            wave_shift_speed: WAVE_SHIFT_SPEED,
            max_note_duration_seconds: MAX_NOTE_DURATION_SECONDS,
        }
    }
}

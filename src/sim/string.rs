//! A single plucked string: rest → drag → decaying wave → rest.

use log::{debug, trace};

use crate::clock::Deadline;
use crate::geometry::{Point, map_range};
use crate::input::PointerState;
use crate::note::Note;
use crate::sound::SoundService;
use crate::surface::{Color, DrawSurface, SineCurve, Stroke};
use crate::transpose::pitch_up;

use super::params::{MAX_FRET, PluckParams};

/// Fixed per-string setup.
#[derive(Debug, Clone, PartialEq)]
pub struct StringConfig {
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    pub open_note: Note,
}

impl StringConfig {
    pub fn rest_y(&self) -> f64 {
        self.start.y
    }

    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StringState {
    Resting,
    /// Held by the pointer at `drag`.
    Plucking { drag: Point },
    /// Ringing. `phase` is the horizontal shift of the waveform, always in
    /// `[0, wave_period_length)`.
    Waving {
        amplitude: f64,
        phase: f64,
        shift_speed: f64,
    },
}

#[derive(Debug, Clone)]
pub struct StringSimulation {
    index: usize,
    config: StringConfig,
    params: PluckParams,
    state: StringState,
    rest_deadline: Deadline,
    /// Last triggered note, until it is muted.
    sounding: Option<Note>,
}

impl StringSimulation {
    pub fn new(index: usize, config: StringConfig, params: PluckParams) -> Self {
        StringSimulation {
            index,
            config,
            params,
            state: StringState::Resting,
            rest_deadline: Deadline::disarmed(),
            sounding: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn config(&self) -> &StringConfig {
        &self.config
    }

    pub fn state(&self) -> StringState {
        self.state
    }

    pub fn sounding(&self) -> Option<Note> {
        self.sounding
    }

    /// Host time at which a ringing string goes back to rest.
    pub fn rests_at(&self) -> Option<f64> {
        self.rest_deadline.expires_at()
    }

    pub fn amplitude(&self) -> f64 {
        match self.state {
            StringState::Waving { amplitude, .. } => amplitude,
            _ => 0.0,
        }
    }

    /// Whether a pointer sample grabs this string.
    pub fn is_grabbed_by(&self, pointer: &PointerState) -> bool {
        pointer.down
            && (pointer.position.y - self.config.rest_y()).abs() < self.params.pluck_start_distance
    }

    /// Advance one tick.
    pub fn update(
        &mut self,
        pointer: &PointerState,
        now_ms: f64,
        fret: u8,
        sound: &mut dyn SoundService,
    ) {
        if self.rest_deadline.poll(now_ms) && matches!(self.state, StringState::Waving { .. }) {
            trace!("string {} back to rest", self.index);
            self.state = StringState::Resting;
        }

        if self.is_grabbed_by(pointer) {
            self.state = StringState::Plucking {
                drag: pointer.position,
            };
        }

        match &mut self.state {
            StringState::Resting => {}
            StringState::Plucking { drag } => {
                *drag = pointer.position;
                let distance = (drag.y - self.config.rest_y()).abs();

                // Holding the string silences it and keeps it from resting.
                self.rest_deadline.cancel();
                self.mute(now_ms, sound);

                if !pointer.down || distance > self.params.max_pluck_distance {
                    self.pluck(distance, now_ms, fret, sound);
                }
            }
            StringState::Waving {
                amplitude,
                phase,
                shift_speed,
            } => {
                *amplitude -= *amplitude * self.params.wave_decrease_rate;
                *phase += *shift_speed;
                if *phase >= self.params.wave_period_length {
                    *phase = 0.0;
                }
            }
        }
    }

    /// Release the string from `distance` away from its rest line, from any
    /// state. Used both when a drag ends and for keyboard plucks.
    pub fn pluck(&mut self, distance: f64, now_ms: f64, fret: u8, sound: &mut dyn SoundService) {
        let p = self.params;
        let max = p.max_pluck_distance;
        let distance = distance.abs().min(max);

        self.state = StringState::Waving {
            amplitude: map_range(
                distance * self.config.thickness,
                0.0,
                max,
                0.0,
                p.max_wave_amplitude,
            ),
            phase: 0.0,
            shift_speed: p.wave_shift_speed * map_range(distance, 0.0, max, 0.0, 1.0),
        };

        self.mute(now_ms, sound);
        let pitch = pitch_up(self.config.open_note, u32::from(fret.min(MAX_FRET)));
        let sustain = map_range(distance, 0.0, max, 0.0, p.max_note_duration_seconds);
        sound.note_on(pitch, sustain);
        self.sounding = Some(pitch);

        let ring_ms = map_range(distance, 0.0, max, 0.0, p.max_wave_duration_ms);
        self.rest_deadline.arm(now_ms, ring_ms);

        debug!(
            "string {} plucked: {pitch} (fret {fret}), distance {distance:.1}, rings {ring_ms:.0}ms",
            self.index
        );
    }

    /// Release the sounding note, if any.
    pub fn mute(&mut self, now_ms: f64, sound: &mut dyn SoundService) {
        if let Some(pitch) = self.sounding.take() {
            sound.note_off(pitch, now_ms);
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, color: &Color) {
        let stroke = Stroke {
            color: color.clone(),
            width: self.config.thickness,
        };
        let StringConfig { start, end, .. } = self.config;

        match self.state {
            StringState::Resting => surface.stroke_line(start, end, &stroke),
            StringState::Plucking { drag } => {
                surface.stroke_line(start, drag, &stroke);
                surface.stroke_line(drag, end, &stroke);
            }
            StringState::Waving {
                amplitude, phase, ..
            } => {
                let period = self.params.wave_period_length;
                // Twice the string length, so the shifted curve always covers it.
                let theta_extent = 4.0 * self.config.length() * std::f64::consts::PI / period;
                surface.stroke_sine(
                    SineCurve {
                        origin: Point::new(start.x - phase, start.y),
                        amplitude,
                        period,
                        theta_extent,
                    },
                    &stroke,
                );
            }
        }
    }
}

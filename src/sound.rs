//! Sound service seam.
//!
//! Strings request notes; something else makes the noise. In the browser
//! that is a Tone.js-style synth or sampler fed from [`SoundQueue`].

use serde::{Deserialize, Serialize};

use crate::note::{A4_HZ, Note};

pub trait SoundService {
    /// Attack `pitch` and release it after `duration_seconds`.
    fn note_on(&mut self, pitch: Note, duration_seconds: f64);
    /// Release `pitch` at host time `at_ms`.
    fn note_off(&mut self, pitch: Note, at_ms: f64);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SoundEvent {
    #[serde(rename_all = "camelCase")]
    NoteOn {
        pitch: Note,
        /// `pitch` at A4 = 440 Hz, for hosts that drive an oscillator directly.
        frequency_hz: f64,
        duration_seconds: f64,
    },
    #[serde(rename_all = "camelCase")]
    NoteOff { pitch: Note, at_ms: f64 },
}

impl SoundEvent {
    pub fn note_on(pitch: Note, duration_seconds: f64) -> Self {
        SoundEvent::NoteOn {
            pitch,
            frequency_hz: pitch.frequency(A4_HZ),
            duration_seconds,
        }
    }
}

/// Queues sound events until the host drains them.
#[derive(Debug, Clone, Default)]
pub struct SoundQueue {
    events: Vec<SoundEvent>,
}

impl SoundQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SoundEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn note_ons(&self) -> impl Iterator<Item = (Note, f64)> + '_ {
        self.events.iter().filter_map(|e| match e {
            SoundEvent::NoteOn {
                pitch,
                duration_seconds,
                ..
            } => Some((*pitch, *duration_seconds)),
            SoundEvent::NoteOff { .. } => None,
        })
    }

    pub fn note_offs(&self) -> impl Iterator<Item = Note> + '_ {
        self.events.iter().filter_map(|e| match e {
            SoundEvent::NoteOff { pitch, .. } => Some(*pitch),
            SoundEvent::NoteOn { .. } => None,
        })
    }
}

impl SoundService for SoundQueue {
    fn note_on(&mut self, pitch: Note, duration_seconds: f64) {
        self.events
            .push(SoundEvent::note_on(pitch, duration_seconds));
    }

    fn note_off(&mut self, pitch: Note, at_ms: f64) {
        self.events.push(SoundEvent::NoteOff { pitch, at_ms });
    }
}

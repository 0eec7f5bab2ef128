//! Half-step transposition in 12-tone equal temperament.

use crate::note::Note;

/// Raise `note` by `half_steps` semitones.
///
/// The result is always spelled with sharps or naturals: `E#` becomes `F`,
/// `B#3` becomes `C4`, and flats are respelled as the sharp below.
///
/// Panics if the result does not fit a MIDI number.
pub fn pitch_up(note: Note, half_steps: u32) -> Note {
    let midi = i32::try_from(half_steps)
        .ok()
        .and_then(|steps| note.midi().checked_add(steps))
        .expect("transposition out of MIDI range");
    Note::from_midi(midi)
}

/// A single semitone step.
pub fn half_step_up(note: Note) -> Note {
    pitch_up(note, 1)
}

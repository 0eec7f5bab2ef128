//! The instrument: a set of strings, the shared fret, and input routing.

use log::debug;

use crate::error::PluckError;
use crate::input::{Key, KeyMap, PointerState};
use crate::sound::SoundService;
use crate::surface::{Color, DrawSurface};

use super::config::RigConfig;
use super::fret::FretSelector;
use super::string::StringSimulation;

#[derive(Debug, Clone)]
pub struct InstrumentRig {
    strings: Vec<StringSimulation>,
    frets: FretSelector,
    keys: KeyMap,
    color: Color,
    max_pluck_distance: f64,
}

impl Default for InstrumentRig {
    fn default() -> Self {
        InstrumentRig::build(RigConfig::default())
    }
}

impl InstrumentRig {
    /// Build a rig from a validated config.
    pub fn new(config: RigConfig) -> Result<Self, PluckError> {
        config.validate()?;
        Ok(InstrumentRig::build(config))
    }

    fn build(config: RigConfig) -> Self {
        let count = config.tuning.len();
        let strings = config
            .tuning
            .0
            .iter()
            .enumerate()
            .map(|(i, &note)| {
                StringSimulation::new(i, config.layout.string_config(i, count, note), config.pluck)
            })
            .collect();

        InstrumentRig {
            strings,
            frets: FretSelector::new(config.coyote_ms),
            keys: KeyMap::default(),
            color: config.color,
            max_pluck_distance: config.pluck.max_pluck_distance,
        }
    }

    pub fn with_key_map(mut self, keys: KeyMap) -> Self {
        self.keys = keys;
        self
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    pub fn string(&self, index: usize) -> Option<&StringSimulation> {
        self.strings.get(index)
    }

    pub fn strings(&self) -> &[StringSimulation] {
        &self.strings
    }

    pub fn fret(&self) -> u8 {
        self.frets.fret()
    }

    /// Advance every string by one tick.
    pub fn update(&mut self, pointer: &PointerState, now_ms: f64, sound: &mut dyn SoundService) {
        self.frets.poll(now_ms);
        let fret = self.frets.fret();
        for string in &mut self.strings {
            string.update(pointer, now_ms, fret, sound);
        }
    }

    /// Draw every string, lowest first.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        for string in &self.strings {
            string.draw(surface, &self.color);
        }
    }

    /// Pluck one string directly, bypassing the pointer.
    /// Returns false if the rig has no such string.
    pub fn pluck_string(
        &mut self,
        index: usize,
        distance: f64,
        now_ms: f64,
        sound: &mut dyn SoundService,
    ) -> bool {
        self.frets.poll(now_ms);
        let fret = self.frets.fret();
        match self.strings.get_mut(index) {
            Some(string) => {
                string.pluck(distance, now_ms, fret, sound);
                true
            }
            None => false,
        }
    }

    pub fn mute_all(&mut self, now_ms: f64, sound: &mut dyn SoundService) {
        for string in &mut self.strings {
            string.mute(now_ms, sound);
        }
    }

    pub fn key_down(&mut self, key: Key, now_ms: f64) {
        self.frets.poll(now_ms);
        if let Some(fret) = self.keys.fret_for(key) {
            self.frets.press(fret);
        }
    }

    pub fn key_up(&mut self, key: Key, now_ms: f64, sound: &mut dyn SoundService) {
        self.frets.poll(now_ms);
        if self.keys.fret_for(key).is_some() {
            self.frets.release(now_ms);
        }
        if let Some(index) = self.keys.string_for(key) {
            if !self.pluck_string(index, self.max_pluck_distance, now_ms, sound) {
                debug!("no string {index} for {key:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::sim::config::{Layout, Tuning};
    use crate::sim::string::StringState;
    use crate::sound::SoundQueue;
    use crate::surface::{CommandBuffer, DrawCommand};

    fn pitches(q: &SoundQueue) -> Vec<String> {
        q.note_ons().map(|(n, _)| n.to_string()).collect()
    }

    #[test]
    fn builds_six_strings_top_to_bottom() {
        let rig = InstrumentRig::default();
        assert_eq!(rig.string_count(), 6);
        let ys: Vec<f64> = rig.strings().iter().map(|s| s.config().rest_y()).collect();
        assert_eq!(ys, [100.0, 140.0, 180.0, 220.0, 260.0, 300.0]);
        assert!(rig.string(0).unwrap().config().thickness > rig.string(5).unwrap().config().thickness);
        assert!(rig.string(6).is_none());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = RigConfig {
            tuning: Tuning(vec![]),
            ..RigConfig::default()
        };
        assert!(InstrumentRig::new(config).is_err());
    }

    #[test]
    fn pointer_reaches_only_nearby_string() {
        let mut rig = InstrumentRig::default();
        let mut q = SoundQueue::new();
        rig.update(&PointerState::new(200.0, 142.0, true), 0.0, &mut q);

        for s in rig.strings() {
            let plucking = matches!(s.state(), StringState::Plucking { .. });
            assert_eq!(plucking, s.index() == 1, "string {}", s.index());
        }

        rig.update(&PointerState::new(200.0, 150.0, false), 16.0, &mut q);
        assert_eq!(pitches(&q), ["A2"]);
    }

    #[test]
    fn fret_five_on_low_e_sounds_a2() {
        let mut rig = InstrumentRig::default();
        let mut q = SoundQueue::new();
        rig.key_down(Key::Digit(5), 0.0);
        assert_eq!(rig.fret(), 5);
        rig.key_up(Key::ArrowLeft, 10.0, &mut q);
        assert_eq!(pitches(&q), ["A2"]);
    }

    #[test]
    fn fret_row_maps_to_offsets() {
        let mut rig = InstrumentRig::default();
        for (key, fret) in [
            (Key::Digit(1), 1),
            (Key::Digit(9), 9),
            (Key::Digit(0), 10),
            (Key::Minus, 11),
            (Key::Equal, 12),
        ] {
            rig.key_down(key, 0.0);
            assert_eq!(rig.fret(), fret);
        }
        rig.key_down(Key::Numpad(3), 0.0);
        assert_eq!(rig.fret(), 12, "Keypad digits do not fret");
    }

    #[test]
    fn fret_clears_after_coyote_time() {
        let mut rig = InstrumentRig::default();
        let mut q = SoundQueue::new();
        rig.key_down(Key::Digit(3), 0.0);
        rig.key_up(Key::Digit(3), 100.0, &mut q);
        assert_eq!(rig.fret(), 3);

        rig.update(&PointerState::default(), 174.0, &mut q);
        assert_eq!(rig.fret(), 3);
        rig.update(&PointerState::default(), 175.0, &mut q);
        assert_eq!(rig.fret(), 0);
    }

    #[test]
    fn rolling_between_fret_keys_keeps_new_fret() {
        let mut rig = InstrumentRig::default();
        let mut q = SoundQueue::new();
        rig.key_down(Key::Digit(5), 0.0);
        rig.key_up(Key::Digit(5), 100.0, &mut q);
        rig.key_down(Key::Digit(7), 120.0);
        rig.key_up(Key::ArrowLeft, 130.0, &mut q);
        assert_eq!(pitches(&q), ["B2"]);

        // Later plucks still use the held fret.
        rig.update(&PointerState::default(), 400.0, &mut q);
        rig.key_up(Key::ArrowDown, 410.0, &mut q);
        assert_eq!(pitches(&q), ["B2", "E3"]);
    }

    #[test]
    fn releasing_one_fret_key_clears_even_while_another_is_held() {
        let mut rig = InstrumentRig::default();
        let mut q = SoundQueue::new();
        rig.key_down(Key::Digit(5), 0.0);
        rig.key_down(Key::Digit(7), 10.0);
        rig.key_up(Key::Digit(5), 20.0, &mut q);
        assert_eq!(rig.fret(), 7);

        rig.update(&PointerState::default(), 94.0, &mut q);
        assert_eq!(rig.fret(), 7);
        rig.update(&PointerState::default(), 95.0, &mut q);
        assert_eq!(rig.fret(), 0, "Digit7 is still down but the fret clears");
    }

    #[test]
    fn pluck_keys_hit_their_strings() {
        let mut rig = InstrumentRig::default();
        let mut q = SoundQueue::new();
        for code in [
            "ArrowLeft",
            "ArrowDown",
            "ArrowRight",
            "Numpad4",
            "Numpad5",
            "Numpad6",
        ] {
            rig.key_up(Key::from_code(code), 0.0, &mut q);
        }
        assert_eq!(pitches(&q), ["E2", "A2", "D3", "G3", "B3", "E4"]);
        assert!(
            rig.strings()
                .iter()
                .all(|s| matches!(s.state(), StringState::Waving { .. }))
        );
    }

    #[test]
    fn pluck_key_for_missing_string_is_ignored() {
        let config = RigConfig {
            tuning: Tuning("E2 A2".split(' ').map(|n| n.parse().unwrap()).collect()),
            ..RigConfig::default()
        };
        let mut rig = InstrumentRig::new(config).unwrap();
        let mut q = SoundQueue::new();
        rig.key_up(Key::Numpad(6), 0.0, &mut q);
        assert!(q.events().is_empty());
        assert!(!rig.pluck_string(9, 30.0, 0.0, &mut q));
    }

    #[test]
    fn draws_strings_in_index_order() {
        let config = RigConfig {
            layout: Layout {
                spacing: 10.0,
                ..Layout::default()
            },
            ..RigConfig::default()
        };
        let mut rig = InstrumentRig::new(config).unwrap();
        let mut q = SoundQueue::new();
        rig.pluck_string(2, 30.0, 0.0, &mut q);

        let mut buf = CommandBuffer::new();
        rig.draw(&mut buf);
        assert_eq!(buf.commands().len(), 6);
        for (i, cmd) in buf.commands().iter().enumerate() {
            let y = 100.0 + 10.0 * i as f64;
            match cmd {
                DrawCommand::Line { from, .. } => {
                    assert_ne!(i, 2);
                    assert_eq!(*from, Point::new(0.0, y));
                }
                DrawCommand::Sine { curve, .. } => {
                    assert_eq!(i, 2);
                    assert_eq!(curve.origin.y, y);
                }
            }
        }
    }

    #[test]
    fn mute_all_releases_every_sounding_note() {
        let mut rig = InstrumentRig::default();
        let mut q = SoundQueue::new();
        rig.pluck_string(0, 30.0, 0.0, &mut q);
        rig.pluck_string(3, 30.0, 0.0, &mut q);
        rig.mute_all(50.0, &mut q);
        rig.mute_all(60.0, &mut q);
        let offs: Vec<String> = q.note_offs().map(|n| n.to_string()).collect();
        assert_eq!(offs, ["E2", "G3"]);
    }
}

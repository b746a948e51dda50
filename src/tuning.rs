// syn.txt -- a text based synthesizer and audio workstation
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::note::*;

/// Frequency ratio between two neighbouring half-tones, `2^(1/12)`.
pub const HALF_STEP_RATIO: f64 = 1.059_463_094_359_295_3;

/// Defines the tuning of an instrument by assinging a frequency to a certain note.
/// This defines the frequencies of all other notes at a standard tuning of 12 half-tones per octave.
///
/// # Examples
///
/// ```
/// use syn_note::note::*;
/// use syn_note::tuning::*;
/// assert_eq!(Tuning::default().frequency(Note::from_midi(57).unwrap()), 220.0);
/// assert_eq!(Tuning::default().frequency(Note::from_midi(81).unwrap()), 880.0);
/// assert_eq!(Tuning::default().pitch(880.0), Some(81.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tuning {
    pub reference_note: Note,
    pub reference_frequency: f64,
}

impl Tuning {
    /// Concert tuning, where A4 corresponds to 440 Hz.
    pub const CONCERT: Tuning = Tuning {
        reference_note: Note::CONCERT_PITCH,
        reference_frequency: CONCERT_PITCH_FREQUENCY,
    };

    /// Return the frequency of a note relative to this tuning.
    pub fn frequency(&self, other: Note) -> f64 {
        let semitones = other.index() - self.reference_note.index();
        let octaves = semitones as f64 / 12.0;
        self.reference_frequency * 2.0f64.powf(octaves)
    }

    /// Return the fractional note index of a frequency relative to this tuning.
    /// The result is not range checked. Returns `None` if the frequency is not positive and finite.
    pub fn pitch(&self, frequency: f64) -> Option<f64> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return None;
        }
        let octaves = (frequency / self.reference_frequency).log2();
        Some(self.reference_note.index() as f64 + 12.0 * octaves)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::CONCERT
    }
}

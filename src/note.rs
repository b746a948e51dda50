// syn.txt -- a text based synthesizer and audio workstation
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a note is.

use std::fmt;
use std::str::FromStr;

use snafu::Snafu;

use crate::name::NoteName;
use crate::tuning::Tuning;

/// Lowest MIDI note index.
pub const MIDI_MIN: u8 = 0;
/// Highest MIDI note index.
pub const MIDI_MAX: u8 = 127;

/// Frequency of the concert pitch A4 in Hz.
pub const CONCERT_PITCH_FREQUENCY: f64 = 440.0;
/// MIDI note index of the concert pitch A4.
pub const CONCERT_PITCH_MIDI: u8 = 69;

/// Reasons why a note could not be constructed or changed.
#[derive(Debug, PartialEq, Snafu)]
pub enum NoteError {
    #[snafu(display("MIDI note {} is outside of the range {} - {}", midi, MIDI_MIN, MIDI_MAX))]
    OutOfRange { midi: i64 },
    #[snafu(display("Frequency {} Hz does not correspond to any MIDI note", frequency))]
    InvalidFrequency { frequency: f64 },
    #[snafu(display("{:?} is not a valid note name", input))]
    InvalidFormat { input: String },
    #[snafu(display("{} does not name a known pitch class", name))]
    UnknownPitchClass { name: String },
}

impl NoteError {
    /// Whether the error was caused by a pitch outside of the MIDI range.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            NoteError::OutOfRange { .. } | NoteError::InvalidFrequency { .. }
        )
    }
}

/// Check that a note index lies within the MIDI range, returning it as a `u8` if it does.
pub fn check_midi_range(midi: i64) -> Result<u8, NoteError> {
    if midi < i64::from(MIDI_MIN) || midi > i64::from(MIDI_MAX) {
        Err(NoteError::OutOfRange { midi })
    } else {
        Ok(midi as u8)
    }
}

/// A "note" is just an index on the synthesizers keyboard.
/// This definition follows the MIDI standard where C4 corresponds to index 60.
///
/// Note indices range from 0 to 127. Every way of constructing or changing a note
/// checks that range before the new index is stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Note(u8);

impl Note {
    /// The concert pitch A4.
    pub const CONCERT_PITCH: Note = Note(CONCERT_PITCH_MIDI);

    /// Construct a note from its MIDI index.
    pub fn from_midi(midi: i64) -> Result<Note, NoteError> {
        check_midi_range(midi).map(Note)
    }

    /// Construct the note closest to a frequency in Hz at concert tuning.
    /// Halfway values are rounded up.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_note::note::*;
    ///
    /// assert_eq!(Note::from_frequency(440.0).unwrap().to_midi(), 69);
    /// assert_eq!(Note::from_frequency(261.63).unwrap().to_midi(), 60);
    /// assert!(Note::from_frequency(1_000_000.0).unwrap_err().is_out_of_range());
    /// assert!(Note::from_frequency(0.0).unwrap_err().is_out_of_range());
    /// ```
    pub fn from_frequency(frequency: f64) -> Result<Note, NoteError> {
        let pitch = Tuning::CONCERT
            .pitch(frequency)
            .ok_or(NoteError::InvalidFrequency { frequency })?;
        Note::from_midi((pitch + 0.5).floor() as i64)
    }

    /// Construct a note from its distance in half-tones to the concert pitch.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_note::note::*;
    ///
    /// assert_eq!(Note::from_half_steps(1).unwrap().to_midi(), 70);
    /// assert_eq!(Note::from_half_steps(-69).unwrap().to_midi(), 0);
    /// assert!(Note::from_half_steps(69).is_err());
    /// ```
    pub fn from_half_steps(half_steps: i32) -> Result<Note, NoteError> {
        Note::from_midi(i64::from(CONCERT_PITCH_MIDI) + i64::from(half_steps))
    }

    /// Parse a note name such as `C4`, `a#4`, `Bb-1` or `G5b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_note::note::*;
    ///
    /// assert_eq!(Note::from_name("C4").unwrap().to_midi(), 60);
    /// assert_eq!(Note::from_name("A4").unwrap(), Note::CONCERT_PITCH);
    /// assert_eq!(Note::from_name("Gb-1").unwrap().to_midi(), 6);
    /// assert!(Note::from_name("A#9").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Note, NoteError> {
        let name: NoteName = name.parse()?;
        Note::from_midi(name.midi_index()?)
    }

    pub fn to_midi(self) -> u8 {
        self.0
    }

    /// Return the note index in a signed type, convenient for further calculations.
    pub fn index(self) -> i32 {
        i32::from(self.0)
    }

    /// The note as a number of half-tones. Half-tones are counted on the MIDI scale,
    /// so this is the same as the note index.
    pub fn half_steps(self) -> i32 {
        self.index()
    }

    /// Frequency of the note in Hz at concert tuning.
    pub fn frequency_hz(self) -> f64 {
        Tuning::CONCERT.frequency(self)
    }

    /// Spell the note in standard notation, using sharps for black keys.
    pub fn name(self) -> NoteName {
        NoteName::spell(self.0)
    }

    /// Whether the two notes are exactly one octave apart, in either direction.
    pub fn forms_octave(self, other: Note) -> bool {
        (self.index() - other.index()).abs() == 12
    }

    /// Return this note moved by the given number of half-tones.
    pub fn transposed(self, delta: i32) -> Result<Note, NoteError> {
        Note::from_midi(i64::from(self.0) + i64::from(delta))
    }

    /// Move this note by the given number of half-tones.
    /// If the result would leave the MIDI range, the note is left unchanged.
    pub fn modify_by_half_steps(&mut self, delta: i32) -> Result<(), NoteError> {
        *self = self.transposed(delta)?;
        Ok(())
    }

    /// Signed distance in half-tones from `other` to this note.
    pub fn compare(self, other: Note) -> i32 {
        self.index() - other.index()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Note {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::from_name(s)
    }
}

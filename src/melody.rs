// syn.txt -- a text based synthesizer and audio workstation
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Single steps of a melody as written on the command line, e.g. `A#4`, `440.0-` or `r`.
//!
//! A step is a note or a rest. A trailing `-` makes the step last twice as long.
//! Notes are given as a frequency (any token containing a `.`), as a note name
//! (any token starting with a letter), or as half-tones relative to the concert pitch.

use std::str::FromStr;
use std::time::Duration;

use log::{debug, trace};
use snafu::Snafu;

use crate::note::{Note, NoteError};

/// Token denoting a rest.
const REST: &str = "r";

/// How long a step lasts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Length {
    Short,
    Long,
}

impl Length {
    pub fn as_duration(self) -> Duration {
        match self {
            Length::Short => Duration::from_millis(200),
            Length::Long => Duration::from_millis(400),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    Play(Note, Length),
    Rest(Length),
}

impl Step {
    pub fn length(self) -> Length {
        match self {
            Step::Play(_, length) | Step::Rest(length) => length,
        }
    }

    pub fn note(self) -> Option<Note> {
        match self {
            Step::Play(note, _) => Some(note),
            Step::Rest(_) => None,
        }
    }
}

#[derive(Debug, PartialEq, Snafu)]
pub enum StepError {
    #[snafu(display("Empty step"))]
    Empty,
    #[snafu(display("{:?} is not a number", token))]
    InvalidNumber { token: String },
    #[snafu(display("{:?} is not a valid note: {}", token, source))]
    InvalidNote { token: String, source: NoteError },
}

impl FromStr for Step {
    type Err = StepError;

    /// # Examples
    ///
    /// ```
    /// use syn_note::melody::*;
    /// use syn_note::note::Note;
    ///
    /// let a4 = Note::CONCERT_PITCH;
    /// assert_eq!("A4".parse(), Ok(Step::Play(a4, Length::Short)));
    /// assert_eq!("440.0-".parse(), Ok(Step::Play(a4, Length::Long)));
    /// assert_eq!("0".parse(), Ok(Step::Play(a4, Length::Short)));
    /// assert_eq!("r-".parse(), Ok(Step::Rest(Length::Long)));
    /// ```
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (body, length) = match token.strip_suffix('-') {
            Some(body) => (body, Length::Long),
            None => (token, Length::Short),
        };
        if body.is_empty() {
            return Err(StepError::Empty);
        }
        if body == REST {
            return Ok(Step::Rest(length));
        }

        let invalid_number = || StepError::InvalidNumber {
            token: token.to_string(),
        };
        let note = if body.contains('.') {
            let frequency: f64 = body.parse().map_err(|_| invalid_number())?;
            Note::from_frequency(frequency)
        } else if body.starts_with(char::is_alphabetic) {
            Note::from_name(body)
        } else {
            let half_steps: i32 = body.parse().map_err(|_| invalid_number())?;
            Note::from_half_steps(half_steps)
        };
        let note = note.map_err(|source| StepError::InvalidNote {
            token: token.to_string(),
            source,
        })?;

        trace!("parsed {:?} as {} ({:?})", token, note, length);
        Ok(Step::Play(note, length))
    }
}

/// The notes from `start` up to and including the note one octave above it.
///
/// Fails if the octave above `start` is not representable.
pub fn chromatic_octave(start: Note) -> Result<Vec<Note>, NoteError> {
    let top = start.transposed(12)?;
    debug!("walking from {} to {}", start, top);
    (0..=12).map(|delta| start.transposed(delta)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(midi: i64) -> Note {
        Note::from_midi(midi).unwrap()
    }

    #[test]
    fn steps() {
        assert_eq!("C4".parse(), Ok(Step::Play(note(60), Length::Short)));
        assert_eq!("c4-".parse(), Ok(Step::Play(note(60), Length::Long)));
        assert_eq!("A-1".parse(), Ok(Step::Play(note(9), Length::Short)));
        assert_eq!("A-1-".parse(), Ok(Step::Play(note(9), Length::Long)));
        assert_eq!("-9".parse(), Ok(Step::Play(note(60), Length::Short)));
        assert_eq!("261.63".parse(), Ok(Step::Play(note(60), Length::Short)));
        assert_eq!("r".parse(), Ok(Step::Rest(Length::Short)));
    }

    #[test]
    fn lengths() {
        let step: Step = "r-".parse().unwrap();
        assert_eq!(step.length().as_duration(), Duration::from_millis(400));
        assert_eq!(step.note(), None);
        let step: Step = "G2".parse().unwrap();
        assert_eq!(step.length().as_duration(), Duration::from_millis(200));
        assert_eq!(step.note(), Some(note(43)));
    }

    #[test]
    fn invalid_steps() {
        assert_eq!("".parse::<Step>(), Err(StepError::Empty));
        assert_eq!("-".parse::<Step>(), Err(StepError::Empty));
        assert_eq!(
            "1.2.3".parse::<Step>(),
            Err(StepError::InvalidNumber {
                token: "1.2.3".to_string()
            })
        );
        assert_eq!(
            "#4".parse::<Step>(),
            Err(StepError::InvalidNumber {
                token: "#4".to_string()
            })
        );
        assert_eq!(
            "A##".parse::<Step>(),
            Err(StepError::InvalidNote {
                token: "A##".to_string(),
                source: NoteError::InvalidFormat {
                    input: "A##".to_string()
                },
            })
        );
        assert_eq!(
            "69-".parse::<Step>(),
            Err(StepError::InvalidNote {
                token: "69-".to_string(),
                source: NoteError::OutOfRange { midi: 138 },
            })
        );
        assert_eq!(
            "R".parse::<Step>().unwrap_err().to_string(),
            "\"R\" is not a valid note: \"R\" is not a valid note name"
        );
    }

    #[test]
    fn octave_walk() {
        let notes = chromatic_octave(note(60)).unwrap();
        assert_eq!(notes.len(), 13);
        assert_eq!(notes.first(), Some(&note(60)));
        assert_eq!(notes.last(), Some(&note(72)));
        assert!(notes.windows(2).all(|pair| pair[1].compare(pair[0]) == 1));
        assert!(notes[0].forms_octave(notes[12]));

        assert_eq!(chromatic_octave(note(115)).unwrap().len(), 13);
        assert_eq!(
            chromatic_octave(note(116)),
            Err(NoteError::OutOfRange { midi: 128 })
        );
    }
}

// syn.txt -- a text based synthesizer and audio workstation
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The textual note-name format, e.g. `A4`, `c#5`, `Bb-1` or `G5b`.
//!
//! A name is a letter followed by an accidental and/or an octave, in either
//! order. The octave is a single digit or `-1`. Letter and accidental are
//! matched case-insensitively, so a `b` or `B` after the letter is a flat.

use std::fmt;
use std::str::FromStr;

use logos::Logos;

use crate::note::NoteError;

/// The name of a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    fn from_slice(slice: &str) -> Option<Letter> {
        match slice {
            "C" | "c" => Some(Letter::C),
            "D" | "d" => Some(Letter::D),
            "E" | "e" => Some(Letter::E),
            "F" | "f" => Some(Letter::F),
            "G" | "g" => Some(Letter::G),
            "A" | "a" => Some(Letter::A),
            "B" | "b" => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// An offset applied to a note in standard notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Accidental {
    /// The note is a half-tone higher then indicated by its letter.
    Sharp,
    /// The note is a half-tone lower then indicated by its letter.
    Flat,
}

impl Accidental {
    pub fn as_char(self) -> char {
        match self {
            Accidental::Sharp => '#',
            Accidental::Flat => 'b',
        }
    }
}

/// Octave assumed for names that carry an accidental but no octave.
/// It lies below the MIDI range, so such names never denote a valid note.
pub const MISSING_OCTAVE: i32 = -2;

/// Pitch class of every spelling the parser knows about.
///
/// `B#` is deliberately mapped into the octave of its letter, i.e. `B#4` is `C4`.
/// `Cb`, `Fb` and `E#` are not part of the table.
const PITCH_CLASSES: [(Letter, Option<Accidental>, u8); 18] = [
    (Letter::C, None, 0),
    (Letter::C, Some(Accidental::Sharp), 1),
    (Letter::D, Some(Accidental::Flat), 1),
    (Letter::D, None, 2),
    (Letter::D, Some(Accidental::Sharp), 3),
    (Letter::E, Some(Accidental::Flat), 3),
    (Letter::E, None, 4),
    (Letter::F, None, 5),
    (Letter::F, Some(Accidental::Sharp), 6),
    (Letter::G, Some(Accidental::Flat), 6),
    (Letter::G, None, 7),
    (Letter::G, Some(Accidental::Sharp), 8),
    (Letter::A, Some(Accidental::Flat), 8),
    (Letter::A, None, 9),
    (Letter::A, Some(Accidental::Sharp), 10),
    (Letter::B, Some(Accidental::Flat), 10),
    (Letter::B, None, 11),
    (Letter::B, Some(Accidental::Sharp), 0),
];

/// Spelling used when naming a pitch class, indexed by the pitch class.
const SHARP_SPELLING: [(Letter, Option<Accidental>); 12] = [
    (Letter::C, None),
    (Letter::C, Some(Accidental::Sharp)),
    (Letter::D, None),
    (Letter::D, Some(Accidental::Sharp)),
    (Letter::E, None),
    (Letter::F, None),
    (Letter::F, Some(Accidental::Sharp)),
    (Letter::G, None),
    (Letter::G, Some(Accidental::Sharp)),
    (Letter::A, None),
    (Letter::A, Some(Accidental::Sharp)),
    (Letter::B, None),
];

/// A note name broken up into its parts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NoteName {
    pub letter: Letter,
    pub accidental: Option<Accidental>,
    /// `None` if the name did not contain an octave designator.
    pub octave: Option<i8>,
}

impl NoteName {
    /// Spell a MIDI note index using sharps, e.g. 70 becomes `A#4`.
    pub(crate) fn spell(midi: u8) -> NoteName {
        let (letter, accidental) = SHARP_SPELLING[usize::from(midi % 12)];
        NoteName {
            letter,
            accidental,
            octave: Some((midi / 12) as i8 - 1),
        }
    }

    /// Look up the pitch class (0 - 11) of the letter and accidental.
    pub fn pitch_class(&self) -> Result<u8, NoteError> {
        PITCH_CLASSES
            .iter()
            .find(|(letter, accidental, _)| {
                *letter == self.letter && *accidental == self.accidental
            })
            .map(|(_, _, pitch_class)| *pitch_class)
            .ok_or_else(|| NoteError::UnknownPitchClass {
                name: self.to_string(),
            })
    }

    /// The MIDI note index denoted by this name. It is not range checked.
    pub fn midi_index(&self) -> Result<i64, NoteError> {
        let octave = self.octave.map_or(MISSING_OCTAVE, i32::from);
        Ok(i64::from(self.pitch_class()?) + 12 * (i64::from(octave) + 1))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        if let Some(accidental) = self.accidental {
            write!(f, "{}", accidental.as_char())?;
        }
        if let Some(octave) = self.octave {
            write!(f, "{}", octave)?;
        }
        Ok(())
    }
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Token {
    #[regex("[a-gA-G]")]
    Letter,
    #[token("#")]
    Sharp,
    #[regex("[0-9]")]
    Digit,
    #[token("-1")]
    LowestOctave,

    #[error]
    Error,
}

/// Everything that may follow the letter of a name.
#[derive(Debug, Clone, Copy)]
enum Part {
    Accidental(Accidental),
    Octave(i8),
}

impl Part {
    fn from_token(token: Token, slice: &str) -> Option<Part> {
        match (token, slice) {
            (Token::Sharp, _) => Some(Part::Accidental(Accidental::Sharp)),
            (Token::Letter, "b") | (Token::Letter, "B") => {
                Some(Part::Accidental(Accidental::Flat))
            }
            (Token::Digit, digit) => digit.parse().ok().map(Part::Octave),
            (Token::LowestOctave, _) => Some(Part::Octave(-1)),
            _ => None,
        }
    }
}

impl FromStr for NoteName {
    type Err = NoteError;

    /// Parse a name consisting of a letter followed by an accidental, an octave, or both.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_note::name::*;
    ///
    /// let name: NoteName = "a#4".parse().unwrap();
    /// assert_eq!(name.letter, Letter::A);
    /// assert_eq!(name.accidental, Some(Accidental::Sharp));
    /// assert_eq!(name.octave, Some(4));
    /// assert_eq!("G-1b".parse::<NoteName>().unwrap().to_string(), "Gb-1");
    /// assert!("A##".parse::<NoteName>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || NoteError::InvalidFormat {
            input: input.to_string(),
        };

        let mut tokens = Token::lexer(input)
            .spanned()
            .map(|(token, span)| (token, &input[span]));

        let letter = match tokens.next() {
            Some((Token::Letter, slice)) => Letter::from_slice(slice).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };

        let mut parts = Vec::with_capacity(2);
        for (token, slice) in tokens {
            parts.push(Part::from_token(token, slice).ok_or_else(invalid)?);
        }

        let (accidental, octave) = match parts.as_slice() {
            [Part::Octave(octave)] => (None, Some(*octave)),
            [Part::Accidental(accidental)] => (Some(*accidental), None),
            [Part::Accidental(accidental), Part::Octave(octave)]
            | [Part::Octave(octave), Part::Accidental(accidental)] => {
                (Some(*accidental), Some(*octave))
            }
            _ => return Err(invalid()),
        };

        Ok(NoteName {
            letter,
            accidental,
            octave,
        })
    }
}

// syn.txt -- a text based synthesizer and audio workstation
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Musical notes that can be given as a frequency, as half-tones relative to the
//! concert pitch, as a note name like `A#4`, or as a MIDI note index.

pub mod melody;
pub mod name;
pub mod note;
pub mod tuning;

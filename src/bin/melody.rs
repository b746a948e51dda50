// syn.txt -- a text based synthesizer and audio workstation
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `melody` - walks one chromatic octave up from a note given on the command line.

use log::{error, info, warn};
use structopt::clap::AppSettings;
use structopt::StructOpt;

use syn_note::melody::{chromatic_octave, Step};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "melody",
    about = "Walking a chromatic octave from a note",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Move the note by this many half-tones before walking.
    #[structopt(short, long, default_value = "0")]
    transpose: i32,

    /// A frequency (`440.0`), half-tones from A4 (`-9`), a note name (`A#4`) or a rest (`r`).
    /// A trailing `-` doubles the length of each step.
    step: String,
}

fn main() {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).unwrap();

    let step: Step = match opt.step.parse() {
        Ok(step) => step,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };
    let rest = step.length().as_duration().as_millis();

    let mut start = match step.note() {
        Some(note) => note,
        None => {
            info!("No notes to play, resting for {} ms", rest);
            return;
        }
    };
    if let Err(err) = start.modify_by_half_steps(opt.transpose) {
        warn!("Keeping {} untransposed: {}", start, err);
    }

    let notes = match chromatic_octave(start) {
        Ok(notes) => notes,
        Err(err) => {
            error!("Cannot walk an octave up from {}: {}", start, err);
            std::process::exit(1);
        }
    };
    for (index, note) in notes.iter().enumerate() {
        println!(
            "{}. Note: {} ({}, {:.2} Hz) || Rest: {}",
            index,
            note.to_midi(),
            note,
            note.frequency_hz(),
            rest
        );
    }
}

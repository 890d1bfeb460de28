// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

//! Typed readings of the free form `$timescale` and `$date` bodies.
use std::str::FromStr;

use chrono::prelude::*;
use itertools::Itertools;

use super::super::error::VcdError;
use super::super::types::{Timescale, TimescaleUnit};
use super::combinator_atoms::{digit, take_while};
use super::types::ParseResult;

impl FromStr for Timescale {
    type Err = VcdError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        // we might see `1ps` or `1 ps`
        let compact: String = text.split_ascii_whitespace().collect();
        let ParseResult { matched, residual } = take_while(&compact, digit);

        let invalid = || VcdError::InvalidTimescale(text.to_string());
        let scalar: u32 = matched.parse().map_err(|_| invalid())?;

        let unit = match residual {
            "fs" => TimescaleUnit::Fs,
            "ps" => TimescaleUnit::Ps,
            "ns" => TimescaleUnit::Ns,
            "us" => TimescaleUnit::Us,
            "ms" => TimescaleUnit::Ms,
            "s" => TimescaleUnit::S,
            _ => return Err(invalid()),
        };

        Ok(Timescale { scalar, unit })
    }
}

/// Reads a `$date` body such as `Mon Sep 19 12:00:00 2022`.
///
/// A date is typically composed of five words {Day, Month, Date, hh:mm:ss,
/// Year}, but simulators do not agree on their order, so every ordering is
/// tried. Anything that is not five words yields `None`.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let words: Vec<&str> = text.split_ascii_whitespace().collect();
    if words.len() != 5 {
        return None;
    }

    words
        .iter()
        .permutations(words.len())
        .find_map(|permutation| {
            let candidate = permutation.into_iter().join(" ");
            NaiveDateTime::parse_from_str(&candidate, "%a %b %e %T %Y").ok()
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
}

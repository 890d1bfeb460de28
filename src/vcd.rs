// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
pub(super) mod error;

pub(super) mod reader;

pub(super) mod types;

pub(super) mod signal;

pub(super) mod parse;

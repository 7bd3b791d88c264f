// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Output boundary for accepted combinations.
//!
//! The sink is the only fallible step inside the hot loop. Implementations
//! are expected to buffer; the enumerator never blocks on anything else.

use crate::combination::Combination;
use std::io::{self, Write};

/// Append-only destination receiving accepted combinations, in enumeration
/// order. A failed emit aborts the remaining enumeration.
pub trait CombinationSink {
    fn emit(&mut self, combination: &Combination) -> io::Result<()>;
}

/// Sink that collects combinations in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    combinations: Vec<Combination>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The combinations collected so far, in emission order.
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn into_combinations(self) -> Vec<Combination> {
        self.combinations
    }
}

impl CombinationSink for CollectSink {
    fn emit(&mut self, combination: &Combination) -> io::Result<()> {
        self.combinations.push(*combination);
        Ok(())
    }
}

/// Sink that writes one combination per line to an underlying writer.
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer, e.g. to flush a buffered file.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CombinationSink for WriteSink<W> {
    fn emit(&mut self, combination: &Combination) -> io::Result<()> {
        writeln!(self.writer, "{}", combination)
    }
}

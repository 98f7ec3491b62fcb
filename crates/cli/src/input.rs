// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands input and classification output.
use anyhow::{Result, bail};
use log::error;
use std::io::{BufRead, Write};

use holdem_eval::{HOLE_CARDS, HandClassification, HandError, classify_hand};

/// The output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Category label followed by the ranks.
    Text,
    /// A JSON object per hand.
    Json,
}

/// Classifies a hand from a line of whitespace separated card tokens, the
/// first two tokens are the hole cards.
pub fn classify_line(line: &str) -> Result<HandClassification, HandError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let (hole, community) = tokens.split_at(tokens.len().min(HOLE_CARDS));
    classify_hand(hole, community)
}

/// Writes a classification in the given format.
pub fn write_classification<W: Write>(
    w: &mut W,
    classification: &HandClassification,
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => writeln!(w, "{classification}")?,
        Format::Json => {
            serde_json::to_writer(&mut *w, classification)?;
            writeln!(w)?;
        }
    }

    Ok(())
}

/// Classifies a hand per line, empty lines and lines starting with `#` are
/// skipped.
///
/// Invalid hands are logged and skipped, returns an error if any hand was
/// invalid.
pub fn classify_lines<R: BufRead, W: Write>(reader: R, w: &mut W, format: Format) -> Result<()> {
    let mut invalid = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match classify_line(line) {
            Ok(classification) => write_classification(w, &classification, format)?,
            Err(e) => {
                error!("Line {}: {e}", idx + 1);
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        bail!("Found {invalid} invalid hands");
    }

    Ok(())
}

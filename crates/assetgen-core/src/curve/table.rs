//! 256-row RGB lookup tables and their plain-text format.
//!
//! ```text
//! # <header>
//!
//! R, G, B        (row 0)
//! ...
//! R, G, B        (row 255)
//! ```

use std::fmt::Write as _;
use std::path::Path;

use crate::config::CurveConfig;
use crate::config::defaults::TABLE_SIZE;
use crate::error::{Error, Result};

/// A precomputed map from index 0..=255 to an RGB triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    rows: [[u8; 3]; TABLE_SIZE],
}

impl LookupTable {
    /// Evaluate the configured formula for every index.
    ///
    /// Each channel is rounded half-to-even and clamped to its maximum.
    pub fn generate(config: &CurveConfig) -> Result<Self> {
        config.validate()?;
        let curve = config.formula.curve();
        let mut rows = [[0u8; 3]; TABLE_SIZE];
        for (index, row) in (0..=u8::MAX).zip(rows.iter_mut()) {
            for (value, &max) in row.iter_mut().zip(&config.channel_maxima) {
                let raw = curve.channel(index, f64::from(max)).round_ties_even();
                // max <= 255 after validation, so the cast is lossless.
                *value = raw.clamp(0.0, f64::from(max)) as u8;
            }
        }
        Ok(Self { rows })
    }

    /// All rows, index order.
    pub fn rows(&self) -> &[[u8; 3]] {
        &self.rows
    }

    /// The RGB triple at `index`.
    pub fn row(&self, index: u8) -> [u8; 3] {
        self.rows[usize::from(index)]
    }

    /// True if no channel ever decreases as the index grows.
    pub fn is_monotonic(&self) -> bool {
        self.rows
            .windows(2)
            .all(|pair| (0..3).all(|c| pair[0][c] <= pair[1][c]))
    }

    /// Render the table: header comment, blank line, then one `R, G, B` line per row.
    pub fn render(&self, header: &str) -> String {
        let mut out = String::with_capacity(TABLE_SIZE * 14 + header.len() + 4);
        out.push_str("# ");
        out.push_str(header);
        out.push_str("\n\n");
        for [r, g, b] in &self.rows {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{r}, {g}, {b}");
        }
        out
    }

    /// Write the rendered table to `path`, replacing any existing file.
    pub fn save(&self, path: &Path, header: &str) -> Result<()> {
        std::fs::write(path, self.render(header)).map_err(|e| Error::io(path, e))
    }

    /// Parse the text format back into a table.
    ///
    /// Blank lines and `#` comments are skipped. Exactly 256 rows of three
    /// integers in `0..=255` are required.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = [[0u8; 3]; TABLE_SIZE];
        let mut count = 0;

        for (n, line) in text.lines().enumerate() {
            let line_no = n + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if count == TABLE_SIZE {
                return Err(Error::parse(line_no, "more than 256 rows"));
            }

            let mut fields = line.split(',').map(str::trim);
            let mut row = [0u8; 3];
            for value in &mut row {
                let field = fields
                    .next()
                    .ok_or_else(|| Error::parse(line_no, "expected 3 values"))?;
                *value = field
                    .parse()
                    .map_err(|e| Error::parse(line_no, format!("bad value {field:?}: {e}")))?;
            }
            if fields.next().is_some() {
                return Err(Error::parse(line_no, "expected 3 values"));
            }

            rows[count] = row;
            count += 1;
        }

        if count != TABLE_SIZE {
            return Err(Error::parse(
                text.lines().count(),
                format!("expected {TABLE_SIZE} rows, found {count}"),
            ));
        }
        Ok(Self { rows })
    }

    /// Read a table file written by [`LookupTable::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&text)
    }
}

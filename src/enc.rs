use crate::{Error, LifeGrid, Result};
use crate::engine::{DEFAULT_ALIVE, DEFAULT_DEAD};

/// A textual grid format: one line of text per row, decodable back into the
/// identical grid.
pub trait GridCodec {
    fn encode(&self, grid: &LifeGrid) -> String;
    fn decode(&self, value: &str) -> Result<LifeGrid>;
}

/// JSON-style rows of 0/1 integers, e.g. `[0, 1, 1, 0]`.
#[derive(Debug, Default)]
pub struct NumericRows;

impl GridCodec for NumericRows {
    fn encode(&self, grid: &LifeGrid) -> String {
        let mut out = String::new();
        for r in 0..grid.rows() {
            let digits = grid
                .row_cells(r)
                .iter()
                .map(|&cell| if cell { "1" } else { "0" })
                .collect::<Vec<_>>();
            out.push('[');
            out.push_str(&digits.join(", "));
            out.push_str("]\n");
        }
        out
    }

    fn decode(&self, value: &str) -> Result<LifeGrid> {
        let row_re = regex::Regex::new(r"^\[\s*[01](\s*,\s*[01])*\s*\]$").unwrap();
        let cell_re = regex::Regex::new(r"[01]").unwrap();

        let mut rows = Vec::new();
        for (i, line) in value.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !row_re.is_match(line) {
                return Err(Error::InvalidConfiguration(format!(
                    "line {}: expected a row like [0, 1, 0], got {:?}",
                    i + 1,
                    line
                )));
            }
            rows.push(
                cell_re
                    .find_iter(line)
                    .map(|m| m.as_str() == "1")
                    .collect(),
            );
        }
        LifeGrid::from_rows(rows)
    }
}

/// Rows of single symbols from a two-symbol alphabet, optionally
/// space-separated, e.g. `#--#` or `# - - #`.
#[derive(Debug)]
pub struct SymbolRows {
    alive: char,
    dead: char,
}

impl SymbolRows {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }
}

impl Default for SymbolRows {
    fn default() -> Self {
        Self::new(DEFAULT_ALIVE, DEFAULT_DEAD)
    }
}

impl GridCodec for SymbolRows {
    fn encode(&self, grid: &LifeGrid) -> String {
        grid.view_with(self.alive, self.dead).to_string()
    }

    fn decode(&self, value: &str) -> Result<LifeGrid> {
        let mut rows = Vec::new();
        for (i, line) in value.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for symbol in line.chars() {
                match symbol {
                    ' ' => {}
                    s if s == self.alive => row.push(true),
                    s if s == self.dead => row.push(false),
                    s => {
                        return Err(Error::InvalidConfiguration(format!(
                            "line {}: unknown symbol {:?}",
                            i + 1,
                            s
                        )));
                    }
                }
            }
            rows.push(row);
        }
        LifeGrid::from_rows(rows)
    }
}

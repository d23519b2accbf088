use super::LifeGrid;

/// A read-only textual view of a grid, one line per row.
///
/// Cells are rendered with a two-symbol alphabet, `'#'`/`'-'` by default.
pub struct GridView<'a> {
    grid: &'a LifeGrid,
    alive: char,
    dead: char,
}

impl<'a> GridView<'a> {
    pub(super) fn new(grid: &'a LifeGrid, alive: char, dead: char) -> Self {
        Self { grid, alive, dead }
    }
}

impl std::fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.grid.rows() {
            for &cell in self.grid.row_cells(r) {
                let symbol = if cell { self.alive } else { self.dead };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Coord;
    use crate::engine::LifeGrid;

    #[test]
    fn renders_one_line_per_row() {
        let mut grid = LifeGrid::dead(2, 3);
        grid.set_cell(Coord::new(0, 1), true).unwrap();
        grid.set_cell(Coord::new(1, 2), true).unwrap();

        assert_eq!(grid.view().to_string(), "-#-\n--#\n");
    }

    #[test]
    fn custom_alphabet() {
        let mut grid = LifeGrid::dead(1, 2);
        grid.set_cell(Coord::new(0, 0), true).unwrap();

        assert_eq!(grid.view_with('O', '.').to_string(), "O.\n");
    }
}

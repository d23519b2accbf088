mod growth;
mod rule;
mod view;

pub use self::view::GridView;
use crate::{Coord, Error, Result};
use rand::Rng;
use rayon::prelude::*;

pub const DEFAULT_ALIVE: char = '#';
pub const DEFAULT_DEAD: char = '-';

/// A finite two-dimensional Game of Life grid.
///
/// Storage is a row-major `Vec<bool>` of exactly `rows * cols` cells; every
/// resize updates dimensions and storage together. The engine exclusively
/// owns the storage; callers read through [`snapshot`], [`row_cells`] or
/// [`view`] and mutate through [`set_cell`] and [`step`].
///
/// [`snapshot`]: #method.snapshot
/// [`row_cells`]: #method.row_cells
/// [`view`]: #method.view
/// [`set_cell`]: #method.set_cell
/// [`step`]: #method.step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    growth: bool,
}

impl LifeGrid {
    /// Creates an all-dead grid. Dimensions must be at least 1x1.
    pub fn dead(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "grid dimensions must be at least 1");
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
            growth: false,
        }
    }

    /// Creates a grid with every cell drawn independently at 50/50.
    pub fn random(rows: usize, cols: usize) -> Self {
        let mut grid = Self::dead(rows, cols);
        let mut rng = rand::rng();
        for cell in &mut grid.cells {
            *cell = rng.random_bool(0.5);
        }
        grid
    }

    /// Builds a grid from row-major cell states.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when the input is empty or
    /// not rectangular; no grid is produced on failure.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let n_cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                return Err(Error::InvalidConfiguration(
                    "grid must have at least one row and one column".into(),
                ));
            }
        };
        if let Some(bad) = rows.iter().position(|row| row.len() != n_cols) {
            return Err(Error::InvalidConfiguration(format!(
                "row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                n_cols
            )));
        }

        Ok(Self {
            rows: rows.len(),
            cols: n_cols,
            cells: rows.into_iter().flatten().collect(),
            growth: false,
        })
    }

    /// Enables or disables dynamic boundary growth (off by default).
    pub fn set_growth(&mut self, enabled: bool) {
        self.growth = enabled;
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// The cells of row `r` in column order. Panics if `r >= rows`.
    #[inline]
    pub fn row_cells(&self, r: usize) -> &[bool] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    /// A full row-major copy of the current generation.
    pub fn snapshot(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks_exact(self.cols)
            .map(<[bool]>::to_vec)
            .collect()
    }

    pub fn view(&self) -> GridView<'_> {
        self.view_with(DEFAULT_ALIVE, DEFAULT_DEAD)
    }
    pub fn view_with(&self, alive: char, dead: char) -> GridView<'_> {
        GridView::new(self, alive, dead)
    }

    fn index_of(&self, coord: Coord) -> Result<usize> {
        let in_rows = (0..self.rows as i32).contains(&coord.row);
        let in_cols = (0..self.cols as i32).contains(&coord.col);
        if in_rows && in_cols {
            Ok(coord.row as usize * self.cols + coord.col as usize)
        } else {
            Err(Error::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns whether the cell at `coord` is alive.
    pub fn cell_at(&self, coord: Coord) -> Result<bool> {
        Ok(self.cells[self.index_of(coord)?])
    }

    /// Sets a single cell. Never changes dimensions; out-of-bounds
    /// coordinates are reported and leave the grid untouched.
    pub fn set_cell(&mut self, coord: Coord, alive: bool) -> Result<()> {
        let idx = self.index_of(coord)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Advances the grid by one generation.
    ///
    /// Every next state is computed from the frozen pre-step grid into a
    /// separate buffer, then the buffer is swapped in; no caller can observe
    /// a half-stepped grid. With growth enabled the boundary expansion runs
    /// first, against the pre-step grid.
    pub fn step(&mut self) {
        if self.growth {
            self.grow_if_needed();
        }
        let mut next = vec![false; self.cells.len()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                let n = live_neighbors(&self.cells, self.rows, self.cols, r, c);
                next[r * self.cols + c] = rule::next_state(self.cells[r * self.cols + c], n);
            }
        }
        self.cells = next;
    }

    /// Same result as [`step`](#method.step), with rows of the output buffer
    /// computed across rayon workers. Workers only read the pre-step grid.
    pub fn step_parallel(&mut self) {
        if self.growth {
            self.grow_if_needed();
        }
        let (rows, cols) = (self.rows, self.cols);
        let cells = &self.cells;
        let mut next = vec![false; cells.len()];
        next.par_chunks_mut(cols)
            .enumerate()
            .for_each(|(r, next_row)| {
                for (c, out) in next_row.iter_mut().enumerate() {
                    let n = live_neighbors(cells, rows, cols, r, c);
                    *out = rule::next_state(cells[r * cols + c], n);
                }
            });
        self.cells = next;
    }
}

/// Counts live cells among the 8 neighbors of (r, c), with every position
/// outside the grid counting as dead.
fn live_neighbors(cells: &[bool], rows: usize, cols: usize, r: usize, c: usize) -> u8 {
    let mut count = 0;
    for dr in [-1i64, 0, 1] {
        for dc in [-1i64, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = r as i64 + dr;
            let nc = c as i64 + dc;
            if nr < 0 || nc < 0 || nr >= rows as i64 || nc >= cols as i64 {
                continue;
            }
            count += cells[nr as usize * cols + nc as usize] as u8;
        }
    }
    count
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn grid(rows: &[&str]) -> LifeGrid {
        let cells = rows
            .iter()
            .map(|row| row.chars().map(|ch| ch == '#').collect())
            .collect();
        LifeGrid::from_rows(cells).expect("rectangular test grid")
    }

    pub(crate) fn render(grid: &LifeGrid) -> String {
        grid.view().to_string()
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut g = LifeGrid::dead(4, 6);
        let coord = Coord::new(2, 5);

        g.set_cell(coord, true).unwrap();
        assert!(g.cell_at(coord).unwrap());

        g.set_cell(coord, false).unwrap();
        assert!(!g.cell_at(coord).unwrap());
    }

    #[test]
    fn out_of_bounds_is_reported_and_harmless() {
        let mut g = grid(&["#-", "-#"]);
        let before = g.clone();

        for coord in [
            Coord::new(-1, 0),
            Coord::new(0, -1),
            Coord::new(2, 0),
            Coord::new(0, 2),
        ] {
            assert!(matches!(g.cell_at(coord), Err(Error::OutOfBounds { .. })));
            assert!(matches!(
                g.set_cell(coord, true),
                Err(Error::OutOfBounds { .. })
            ));
        }
        assert_eq!(g, before);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = LifeGrid::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();

        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert!(LifeGrid::from_rows(Vec::new()).is_err());
        assert!(LifeGrid::from_rows(vec![Vec::new()]).is_err());
    }

    #[test]
    fn snapshot_copies_row_major() {
        let g = grid(&["#-", "##"]);

        assert_eq!(
            g.snapshot(),
            vec![vec![true, false], vec![true, true]]
        );
    }

    #[test]
    fn block_is_a_still_life() {
        let mut g = grid(&[
            "----",
            "-##-",
            "-##-",
            "----",
        ]);
        let before = render(&g);

        g.step();
        assert_eq!(render(&g), before);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut g = grid(&[
            "-----",
            "-----",
            "-###-",
            "-----",
            "-----",
        ]);
        let horizontal = render(&g);

        g.step();
        assert_eq!(
            render(&g),
            "-----\n\
             --#--\n\
             --#--\n\
             --#--\n\
             -----\n"
        );

        g.step();
        assert_eq!(render(&g), horizontal);
    }

    #[test]
    fn lone_cells_die_of_underpopulation() {
        let mut g = grid(&[
            "#----",
            "-----",
            "--##-",
            "-----",
            "-----",
        ]);
        g.step();

        // zero neighbors and one neighbor both die
        assert_eq!(g.live_count(), 0);
    }

    #[test]
    fn crowded_cell_dies_of_overpopulation() {
        let mut g = grid(&[
            "-#-",
            "###",
            "-#-",
        ]);
        g.step();

        // the center has 4 live neighbors
        assert!(!g.cell_at(Coord::new(1, 1)).unwrap());
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let mut g = grid(&[
            "##---",
            "#----",
            "-----",
        ]);
        g.step();

        assert!(g.cell_at(Coord::new(1, 1)).unwrap());
    }

    #[test]
    fn dead_cell_with_two_or_four_neighbors_stays_dead() {
        let mut two = grid(&[
            "#-#--",
            "-----",
            "-----",
        ]);
        two.step();
        assert!(!two.cell_at(Coord::new(0, 1)).unwrap());

        let mut four = grid(&[
            "#-#--",
            "-----",
            "#-#--",
        ]);
        four.step();
        assert!(!four.cell_at(Coord::new(1, 1)).unwrap());
    }

    #[test]
    fn boundary_neighbors_count_as_dead() {
        // a corner cell has only 3 real neighbors; all alive means survival
        let mut g = grid(&[
            "##-",
            "##-",
            "---",
        ]);
        g.step();

        assert!(g.cell_at(Coord::new(0, 0)).unwrap());
    }

    #[test]
    fn growth_trigger_one_step_before_the_edge() {
        let mut g = grid(&[
            "------",
            "--##--",
            "--##--",
            "------",
            "------",
            "------",
        ]);
        g.set_growth(true);
        g.step();

        // only the top side grew, and the still life moved down one row
        assert_eq!((g.rows(), g.cols()), (7, 6));
        assert_eq!(
            render(&g),
            "------\n\
             ------\n\
             --##--\n\
             --##--\n\
             ------\n\
             ------\n\
             ------\n"
        );
    }

    #[test]
    fn growth_disabled_keeps_dimensions() {
        let mut g = grid(&[
            "----",
            "-##-",
            "-##-",
            "----",
        ]);
        g.step();

        assert_eq!((g.rows(), g.cols()), (4, 4));
    }

    #[test]
    fn growing_glider_is_never_clipped() {
        let mut g = grid(&[
            "-#---",
            "--#--",
            "###--",
            "-----",
            "-----",
        ]);
        g.set_growth(true);

        // a glider moves one cell diagonally every 4 generations and
        // carries 5 live cells forever if nothing clips it
        for _ in 0..40 {
            g.step();
        }
        assert_eq!(g.live_count(), 5);
        assert!(g.rows() > 5 && g.cols() > 5);
    }

    #[test]
    fn steps_are_deterministic() {
        let seed = LifeGrid::random(24, 32);
        let mut a = seed.clone();
        let mut b = seed.clone();

        for _ in 0..16 {
            a.step();
            b.step();
        }
        assert_eq!(a, b);
    }

    #[test]
    fn parallel_step_matches_serial() {
        let seed = LifeGrid::random(40, 64);
        let mut serial = seed.clone();
        let mut parallel = seed;

        for _ in 0..8 {
            serial.step();
            parallel.step_parallel();
        }
        assert_eq!(serial, parallel);
    }

    #[test]
    fn live_neighbors_zero_pads_the_border() {
        let g = grid(&[
            "##",
            "##",
        ]);

        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(live_neighbors(&g.cells, g.rows, g.cols, r, c), 3);
            }
        }
    }
}

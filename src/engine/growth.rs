//! Dynamic boundary growth.
//!
//! When growth is enabled, each generation step first inspects the second
//! line from every edge of the grid. A live cell there means the pattern is
//! one step away from being clipped by the dead boundary, so a new all-dead
//! row or column is inserted on that side. Inspecting the second line rather
//! than the edge itself grows the grid one step before zero padding could
//! eat a neighbor. The grid never shrinks, and repeated growth is unbounded;
//! callers that enable growth accept the memory cost.

use super::LifeGrid;

impl LifeGrid {
    /// Expands the grid by one dead line on every side whose second line
    /// from the edge holds a live cell.
    ///
    /// All four sides are checked against the pre-growth grid before any
    /// insertion happens, so growing one side cannot shift another side's
    /// inspected line. A dimension of extent 1 has a single line standing in
    /// for both of its sides.
    pub(super) fn grow_if_needed(&mut self) {
        let top = self.row_has_life(if self.rows > 1 { 1 } else { 0 });
        let bottom = self.row_has_life(self.rows.saturating_sub(2));
        let left = self.col_has_life(if self.cols > 1 { 1 } else { 0 });
        let right = self.col_has_life(self.cols.saturating_sub(2));

        if top {
            self.insert_row(0);
        }
        if bottom {
            self.insert_row(self.rows);
        }
        if left {
            self.insert_col(0);
        }
        if right {
            self.insert_col(self.cols);
        }
    }

    fn row_has_life(&self, r: usize) -> bool {
        self.row_cells(r).iter().any(|&cell| cell)
    }

    fn col_has_life(&self, c: usize) -> bool {
        self.cells.iter().skip(c).step_by(self.cols).any(|&cell| cell)
    }

    fn insert_row(&mut self, at: usize) {
        let mut cells = Vec::with_capacity((self.rows + 1) * self.cols);
        cells.extend_from_slice(&self.cells[..at * self.cols]);
        cells.resize(cells.len() + self.cols, false);
        cells.extend_from_slice(&self.cells[at * self.cols..]);

        self.cells = cells;
        self.rows += 1;
    }

    fn insert_col(&mut self, at: usize) {
        let mut cells = Vec::with_capacity(self.rows * (self.cols + 1));
        for row in self.cells.chunks_exact(self.cols) {
            cells.extend_from_slice(&row[..at]);
            cells.push(false);
            cells.extend_from_slice(&row[at..]);
        }

        self.cells = cells;
        self.cols += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{grid, render};

    #[test]
    fn quiet_interior_does_not_grow() {
        let mut g = grid(&[
            "-----",
            "-----",
            "--#--",
            "-----",
            "-----",
        ]);
        g.grow_if_needed();

        assert_eq!((g.rows(), g.cols()), (5, 5));
    }

    #[test]
    fn life_on_second_row_grows_top_only() {
        let mut g = grid(&[
            "------",
            "--##--",
            "--##--",
            "------",
            "------",
            "------",
        ]);
        g.grow_if_needed();

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
    fn each_side_grows_independently() {
        // the block sits on the second line from all four edges
        let mut g = grid(&[
            "----",
            "-##-",
            "-##-",
            "----",
        ]);
        g.grow_if_needed();

        assert_eq!((g.rows(), g.cols()), (6, 6));
        assert_eq!(
            render(&g),
            "------\n\
             ------\n\
             --##--\n\
             --##--\n\
             ------\n\
             ------\n"
        );
    }

    #[test]
    fn edge_line_alone_does_not_trigger() {
        // life on the true edge but not on the second line
        let mut g = grid(&[
            "#----",
            "-----",
            "-----",
            "-----",
            "----#",
        ]);
        g.grow_if_needed();

        assert_eq!((g.rows(), g.cols()), (5, 5));
    }

    #[test]
    fn single_line_grid_grows_both_sides() {
        let mut g = grid(&["--#--"]);
        g.grow_if_needed();

        // the only row stands in for both top and bottom; the live cell is
        // on neither second column from an edge
        assert_eq!((g.rows(), g.cols()), (3, 5));
        assert_eq!(render(&g), "-----\n--#--\n-----\n");
    }

    #[test]
    fn insert_col_shifts_content_right() {
        let mut g = grid(&["#-", "-#"]);
        g.insert_col(0);

        assert_eq!((g.rows(), g.cols()), (2, 3));
        assert_eq!(render(&g), "-#-\n--#\n");
    }
}

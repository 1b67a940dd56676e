use rand::Rng;

use super::Cell;

/// Probability that a freshly seeded cell starts alive.
pub const INITIAL_DENSITY: f64 = 0.5;
/// Smallest cell edge in pixels a viewport is divided into.
pub const MIN_CELL_SIZE: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({col}, {row}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        col: isize,
        row: isize,
        cols: usize,
        rows: usize,
    },
}

#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Toroidal Game of Life board.
///
/// Cells live in a flat row-major buffer (`row * cols + col`). A second
/// buffer of the same size receives each new generation and the two are
/// swapped, so stepping never reallocates.
#[derive(Clone, Debug)]
pub struct LifeGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl LifeGrid {
    /// All-dead grid. Either dimension may be zero; dimensions whose
    /// product does not fit in `usize` give an empty 0x0 grid.
    pub fn new(cols: usize, rows: usize) -> Self {
        let Some(len) = cols.checked_mul(rows) else {
            log::warn!("{}x{} grid is too large, using an empty grid", cols, rows);
            return Self::new(0, 0);
        };

        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
        }
    }

    /// Grid where every cell is independently alive with probability 0.5.
    pub fn random<R: Rng>(cols: usize, rows: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(cols, rows);
        grid.randomize(rng);
        grid
    }

    /// Number of columns and rows for a viewport measured in pixels.
    ///
    /// A cell size below [`MIN_CELL_SIZE`] (or not a number) fits no cells.
    pub fn dimensions_for(width: f32, height: f32, cell_size: f32) -> (usize, usize) {
        if !(cell_size >= MIN_CELL_SIZE && cell_size.is_finite()) {
            log::warn!("cell size {} is below {} px, grid left empty", cell_size, MIN_CELL_SIZE);
            return (0, 0);
        }

        let fit = |extent: f32| {
            if extent.is_finite() && extent > 0.0 {
                (extent / cell_size).floor() as usize
            } else {
                0
            }
        };
        (fit(width), fit(height))
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    const fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, col: isize, row: isize) -> Option<usize> {
        let in_bounds = col >= 0
            && row >= 0
            && (col as usize) < self.cols
            && (row as usize) < self.rows;
        in_bounds.then(|| self.index(col as usize, row as usize))
    }

    /// Bounds-checked query; anything off the board reads as dead.
    pub fn is_alive(&self, col: isize, row: isize) -> bool {
        self.checked_index(col, row)
            .is_some_and(|idx| self.cells[idx].is_alive())
    }

    pub fn set_alive(&mut self, col: isize, row: isize) -> Result<(), GridError> {
        let idx = self.checked_index(col, row).ok_or(GridError::OutOfBounds {
            col,
            row,
            cols: self.cols,
            rows: self.rows,
        })?;
        self.cells[idx] = Cell::Alive;
        Ok(())
    }

    /// Re-seed every cell in place at the initial density.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(INITIAL_DENSITY)));
    }

    /// Live cells among the eight neighbours, wrapping at every edge.
    ///
    /// On grids narrower than three cells the same neighbour can be
    /// reached through more than one offset and is counted each time.
    pub fn live_neighbors(&self, col: usize, row: usize) -> u8 {
        let cols = self.cols as isize;
        let rows = self.rows as isize;

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dc, dr)| {
                let c = (col as isize + dc).rem_euclid(cols) as usize;
                let r = (row as isize + dr).rem_euclid(rows) as usize;
                self.cells[self.index(c, r)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance one generation. Every neighbour count is taken from the
    /// current buffer before any cell of the new generation is visible.
    pub fn step(&mut self) {
        if self.cells.is_empty() {
            return;
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(col, row);
                let next = self.cells[idx].next(self.live_neighbors(col, row));
                self.next[idx] = next;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// `(col, row)` of every live cell in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx % self.cols, idx / self.cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with(cols: usize, rows: usize, alive: &[(isize, isize)]) -> LifeGrid {
        let mut grid = LifeGrid::new(cols, rows);
        for &(c, r) in alive {
            grid.set_alive(c, r).unwrap();
        }
        grid
    }

    #[test]
    fn test_dimensions_for_viewport() {
        assert_eq!(LifeGrid::dimensions_for(1000.0, 805.0, 10.0), (100, 80));
        assert_eq!(LifeGrid::dimensions_for(9.0, 9.0, 10.0), (0, 0));
        assert_eq!(LifeGrid::dimensions_for(0.0, 600.0, 10.0), (0, 60));
        assert_eq!(LifeGrid::dimensions_for(-5.0, f32::NAN, 10.0), (0, 0));
    }

    #[test]
    fn test_dimensions_for_tiny_cell_size_is_empty() {
        assert_eq!(LifeGrid::dimensions_for(800.0, 600.0, 1e-30), (0, 0));
        assert_eq!(LifeGrid::dimensions_for(800.0, 600.0, 0.5), (0, 0));
        assert_eq!(LifeGrid::dimensions_for(800.0, 600.0, f32::NAN), (0, 0));
        assert_eq!(LifeGrid::dimensions_for(800.0, 600.0, MIN_CELL_SIZE), (800, 600));
    }

    #[test]
    fn test_overflowing_dimensions_give_empty_grid() {
        let mut grid = LifeGrid::new(usize::MAX, usize::MAX);
        assert_eq!(grid.dimensions(), (0, 0));
        assert!(grid.is_empty());
        grid.step();
        assert!(grid.set_alive(0, 0).is_err());
    }

    #[test]
    fn test_is_alive_out_of_range_is_false() {
        let grid = grid_with(4, 4, &[(0, 0)]);
        assert!(grid.is_alive(0, 0));
        assert!(!grid.is_alive(-1, 0));
        assert!(!grid.is_alive(0, -1));
        assert!(!grid.is_alive(4, 0));
        assert!(!grid.is_alive(0, 4));
    }

    #[test]
    fn test_set_alive_rejects_out_of_bounds() {
        let mut grid = LifeGrid::new(3, 2);
        assert_eq!(
            grid.set_alive(3, 0),
            Err(GridError::OutOfBounds { col: 3, row: 0, cols: 3, rows: 2 })
        );
        assert!(grid.set_alive(-1, 1).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_single_cell_on_three_by_three() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);

        assert_eq!(grid.live_neighbors(1, 1), 0);
        // (0, 0) touches (1, 1) directly; the wrapped copies are other cells
        assert_eq!(grid.live_neighbors(0, 0), 1);

        grid.step();
        assert!(!grid.is_alive(1, 1));
        assert!(!grid.is_alive(0, 0));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_neighbors_wrap_horizontally_and_vertically() {
        let grid = grid_with(6, 5, &[(5, 2), (3, 4)]);

        // last column is adjacent to column 0
        assert_eq!(grid.live_neighbors(0, 2), 1);
        // last row is adjacent to row 0
        assert_eq!(grid.live_neighbors(3, 0), 1);

        let corner = grid_with(6, 5, &[(5, 4)]);
        assert_eq!(corner.live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_all_dead_stays_dead() {
        let mut grid = LifeGrid::new(20, 15);
        for _ in 0..5 {
            grid.step();
        }
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = grid_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);

        grid.step();
        assert!(grid.is_alive(5, 4));
        assert!(grid.is_alive(5, 5));
        assert!(grid.is_alive(5, 6));
        assert!(!grid.is_alive(4, 5));
        assert!(!grid.is_alive(6, 5));
        assert_eq!(grid.population(), 3);

        grid.step();
        assert!(grid.is_alive(4, 5));
        assert!(grid.is_alive(6, 5));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_blinker_across_the_seam() {
        // horizontal blinker straddling the left/right edge
        let mut grid = grid_with(8, 8, &[(7, 3), (0, 3), (1, 3)]);

        grid.step();
        assert!(grid.is_alive(0, 2));
        assert!(grid.is_alive(0, 3));
        assert!(grid.is_alive(0, 4));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_block_still_life() {
        let alive = [(4, 4), (5, 4), (4, 5), (5, 5)];
        let mut grid = grid_with(10, 10, &alive);

        grid.step();
        for (c, r) in alive {
            assert!(grid.is_alive(c, r));
        }
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_step_matches_rule_for_every_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let before = LifeGrid::random(17, 11, &mut rng);
        let mut after = before.clone();
        after.step();

        for row in 0..11 {
            for col in 0..17 {
                let n = before.live_neighbors(col, row);
                let was = before.is_alive(col as isize, row as isize);
                let expected = matches!((was, n), (true, 2 | 3) | (false, 3));
                assert_eq!(
                    after.is_alive(col as isize, row as isize),
                    expected,
                    "cell ({}, {}) with {} neighbours",
                    col, row, n
                );
            }
        }
    }

    #[test]
    fn test_degenerate_grid_steps_without_panicking() {
        let mut grid = LifeGrid::new(0, 12);
        grid.step();
        assert!(grid.is_empty());
        assert_eq!(grid.iter_alive().count(), 0);

        let mut rng = StdRng::seed_from_u64(1);
        let mut flat = LifeGrid::random(12, 0, &mut rng);
        flat.step();
        assert_eq!(flat.population(), 0);
    }

    #[test]
    fn test_random_density_is_roughly_half() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = LifeGrid::random(100, 100, &mut rng);
        let population = grid.population();
        assert!((4000..6000).contains(&population), "population {}", population);
    }

    #[test]
    fn test_iter_alive_reports_col_row() {
        let grid = grid_with(5, 4, &[(3, 1), (0, 2)]);
        let alive: Vec<_> = grid.iter_alive().collect();
        assert_eq!(alive, vec![(3, 1), (0, 2)]);
    }
}

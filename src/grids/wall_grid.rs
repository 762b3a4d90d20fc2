const DEFAULT_DIMS: (usize, usize) = (15, 15);

use log::error;

use crate::error::{MazeError, Result};
use crate::grids::cell::Cell;
use crate::grids::{CellState, Coord, Dimensions, Direction};

/// Rectangular grid of cells, stored column-major: `index = x * height + y`.
/// The shape is fixed at construction; only cell contents change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Default for WallGrid {
    fn default() -> Self {
        let dims = Dimensions {
            width: DEFAULT_DIMS.0,
            height: DEFAULT_DIMS.1,
        };
        Self::build(dims)
    }
}

impl WallGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dims(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        Ok(Self::build(Dimensions { width, height }))
    }

    fn build(dims: Dimensions) -> Self {
        let cells = (0..dims.width)
            .flat_map(|x| (0..dims.height).map(move |y| Cell::new(Coord::new(x, y))))
            .collect();

        Self { dims, cells }
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> usize {
        coord.x * self.dims.height + coord.y
    }

    /// Inverse of the column-major index. `index` must be below `len()`.
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.dims.height, index % self.dims.height)
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.dims.width && coord.y < self.dims.height
    }

    pub fn cell(&self, coord: Coord) -> Result<&Cell> {
        if !self.contains(coord) {
            return Err(MazeError::OutOfBounds {
                coord,
                width: self.dims.width,
                height: self.dims.height,
            });
        }

        Ok(&self.cells[self.index_of(coord)])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Adjacent cell in `direction`, or `None` at the grid edge.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        if !self.contains(coord) {
            return None;
        }

        let (dx, dy) = direction.delta();
        let x = coord.x as isize + dx;
        let y = coord.y as isize + dy;

        if self.dims.contains(x, y) {
            Some(Coord::new(x as usize, y as usize))
        } else {
            None
        }
    }

    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.contains(coord) && self.cells[self.index_of(coord)].is_open(direction)
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.contains(coord) && self.cells[self.index_of(coord)].is_visited()
    }

    pub fn state(&self, coord: Coord) -> Option<CellState> {
        if self.contains(coord) {
            Some(self.cells[self.index_of(coord)].state())
        } else {
            None
        }
    }

    /// Opens `direction` on `from` and the opposite side on `to`. Walls are
    /// never opened singly, so `to` must be the neighbor of `from` that way.
    pub fn open_wall_pair(&mut self, from: Coord, to: Coord, direction: Direction) -> Result<()> {
        if self.neighbor(from, direction) != Some(to) {
            error!(
                "refusing to open wall pair: {} is not the {} neighbor of {}",
                to, direction, from
            );
            return Err(MazeError::NotAdjacent {
                from,
                to,
                direction,
            });
        }

        let from_index = self.index_of(from);
        let to_index = self.index_of(to);
        self.cells[from_index].open(direction);
        self.cells[to_index].open(-direction);

        Ok(())
    }

    pub(crate) fn mark_current(&mut self, coord: Coord) {
        let index = self.index_of(coord);
        self.cells[index].mark_current();
    }

    pub(crate) fn mark_completed(&mut self, coord: Coord) {
        let index = self.index_of(coord);
        self.cells[index].mark_completed();
    }

    /// Every opened wall pair exactly once, as `(cell, right or upper neighbor)`.
    pub fn passages(&self) -> Vec<(Coord, Coord)> {
        let mut passages = Vec::new();

        for cell in &self.cells {
            for direction in [Direction::Right, Direction::Up] {
                if !cell.is_open(direction) {
                    continue;
                }
                if let Some(other) = self.neighbor(cell.coord(), direction) {
                    passages.push((cell.coord(), other));
                }
            }
        }

        passages
    }

    /// Text drawing of the maze, top row (`y = height - 1`) first. Cells on
    /// the frontier are marked `*`, unvisited ones `.`.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.dims.width * 4 + 2) * (self.dims.height * 2 + 1));

        for y in (0..self.dims.height).rev() {
            // wall above this row
            for x in 0..self.dims.width {
                out.push('+');
                out.push_str(self.horizontal_wall(Coord::new(x, y), Direction::Up));
            }
            out.push_str("+\n");

            out.push('|');
            for x in 0..self.dims.width {
                let cell = &self.cells[self.index_of(Coord::new(x, y))];
                out.push_str(match cell.state() {
                    CellState::Available => " . ",
                    CellState::Current => " * ",
                    CellState::Completed => "   ",
                });
                out.push(if cell.is_open(Direction::Right) { ' ' } else { '|' });
            }
            out.push('\n');
        }

        for x in 0..self.dims.width {
            out.push('+');
            out.push_str(self.horizontal_wall(Coord::new(x, 0), Direction::Down));
        }
        out.push_str("+\n");

        out
    }

    fn horizontal_wall(&self, coord: Coord, direction: Direction) -> &'static str {
        if self.is_open(coord, direction) {
            "   "
        } else {
            "---"
        }
    }
}

#[cfg(test)]
mod test_wall_grid {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            WallGrid::with_dims(0, 4),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(WallGrid::with_dims(4, 0).is_err());
        assert!(WallGrid::with_dims(1, 1).is_ok());
    }

    #[test]
    fn default_grid() {
        let grid = WallGrid::new();
        assert_eq!(grid.width(), 15);
        assert_eq!(grid.height(), 15);
        assert_eq!(grid.len(), 225);
    }

    #[test]
    fn column_major_mapping_is_bijective() {
        let grid = WallGrid::with_dims(4, 3).unwrap();

        assert_eq!(grid.index_of(Coord::new(0, 0)), 0);
        assert_eq!(grid.index_of(Coord::new(0, 2)), 2);
        assert_eq!(grid.index_of(Coord::new(1, 0)), 3);
        assert_eq!(grid.index_of(Coord::new(3, 2)), 11);

        for index in 0..grid.len() {
            let coord = grid.coord_of(index);
            assert!(grid.contains(coord));
            assert_eq!(grid.index_of(coord), index);
            assert_eq!(grid.cells()[index].coord(), coord);
        }
    }

    #[test]
    fn neighbors_respect_bounds() {
        let grid = WallGrid::with_dims(3, 2).unwrap();
        let origin = Coord::new(0, 0);

        assert_eq!(grid.neighbor(origin, Direction::Right), Some(Coord::new(1, 0)));
        assert_eq!(grid.neighbor(origin, Direction::Up), Some(Coord::new(0, 1)));
        assert_eq!(grid.neighbor(origin, Direction::Left), None);
        assert_eq!(grid.neighbor(origin, Direction::Down), None);

        let corner = Coord::new(2, 1);
        assert_eq!(grid.neighbor(corner, Direction::Right), None);
        assert_eq!(grid.neighbor(corner, Direction::Up), None);
        assert_eq!(grid.neighbor(corner, Direction::Left), Some(Coord::new(1, 1)));
        assert_eq!(grid.neighbor(corner, Direction::Down), Some(Coord::new(2, 0)));

        assert_eq!(grid.neighbor(Coord::new(5, 5), Direction::Left), None);
    }

    #[test]
    fn out_of_bounds_lookup() {
        let grid = WallGrid::with_dims(2, 2).unwrap();
        assert!(matches!(
            grid.cell(Coord::new(2, 0)),
            Err(MazeError::OutOfBounds { .. })
        ));
        assert_eq!(grid.state(Coord::new(0, 9)), None);
        assert_eq!(grid.state(Coord::new(1, 1)), Some(CellState::Available));
    }

    #[test]
    fn opens_walls_in_pairs() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        let a = Coord::new(0, 1);
        let b = Coord::new(1, 1);

        grid.open_wall_pair(a, b, Direction::Right).unwrap();

        assert!(grid.is_open(a, Direction::Right));
        assert!(grid.is_open(b, Direction::Left));
        assert!(!grid.is_open(a, Direction::Up));
        assert!(!grid.is_open(b, Direction::Right));
        assert_eq!(grid.passages(), vec![(a, b)]);
    }

    #[test]
    fn refuses_non_adjacent_pairs() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        let before = grid.clone();

        let err = grid
            .open_wall_pair(Coord::new(0, 0), Coord::new(2, 0), Direction::Right)
            .unwrap_err();
        assert_eq!(
            err,
            MazeError::NotAdjacent {
                from: Coord::new(0, 0),
                to: Coord::new(2, 0),
                direction: Direction::Right,
            }
        );

        // right cell, wrong side
        assert!(grid
            .open_wall_pair(Coord::new(0, 0), Coord::new(1, 0), Direction::Up)
            .is_err());
        // off the edge
        assert!(grid
            .open_wall_pair(Coord::new(0, 0), Coord::new(0, 0), Direction::Left)
            .is_err());

        assert_eq!(grid, before);
    }

    #[test]
    fn renders_ascii() {
        let mut grid = WallGrid::with_dims(2, 1).unwrap();
        grid.mark_current(Coord::new(0, 0));
        grid.open_wall_pair(Coord::new(0, 0), Coord::new(1, 0), Direction::Right)
            .unwrap();
        grid.mark_current(Coord::new(1, 0));
        grid.mark_completed(Coord::new(1, 0));

        let expected = "\
+---+---+
| *     |
+---+---+
";
        assert_eq!(grid.render_ascii(), expected);
    }

    #[test]
    fn renders_vertical_passage() {
        let mut grid = WallGrid::with_dims(1, 2).unwrap();
        grid.open_wall_pair(Coord::new(0, 0), Coord::new(0, 1), Direction::Up)
            .unwrap();

        let expected = "\
+---+
| . |
+   +
| . |
+---+
";
        assert_eq!(grid.render_ascii(), expected);
    }
}

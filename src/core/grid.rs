//! Letter grid, coordinates and word placements
//!
//! Generation writes into a [`DraftGrid`], whose cells may still be empty.
//! Once every cell holds a letter it is frozen into a read-only [`Grid`].

use super::Word;
use std::fmt;

/// A cell position, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the cells share an edge (Manhattan distance exactly 1)
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Coord;
    ///
    /// assert!(Coord::new(2, 3).is_adjacent(Coord::new(2, 4)));
    /// assert!(!Coord::new(2, 3).is_adjacent(Coord::new(3, 4))); // diagonal
    /// assert!(!Coord::new(2, 3).is_adjacent(Coord::new(2, 3)));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.distance(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Placement direction; words only ever read forwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

impl Direction {
    /// The cell `offset` steps from `origin` in this direction
    #[inline]
    #[must_use]
    pub const fn step(self, origin: Coord, offset: usize) -> Coord {
        match self {
            Self::Horizontal => Coord::new(origin.row, origin.col + offset),
            Self::Vertical => Coord::new(origin.row + offset, origin.col),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a word's letters sit in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub origin: Coord,
    pub direction: Direction,
    pub length: usize,
}

impl Placement {
    #[must_use]
    pub const fn new(origin: Coord, direction: Direction, length: usize) -> Self {
        Self {
            origin,
            direction,
            length,
        }
    }

    /// Cells covered by the placement, in reading order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| self.direction.step(self.origin, i))
    }

    /// Check whether the placement stays inside a `size`×`size` grid
    #[must_use]
    pub const fn fits(&self, size: usize) -> bool {
        let end = match self.direction {
            Direction::Horizontal => self.origin.col + self.length,
            Direction::Vertical => self.origin.row + self.length,
        };
        self.origin.row < size && self.origin.col < size && end <= size
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }
}

/// Error type for grids built from text rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    NotSquare { rows: usize, width: usize },
    InvalidLetter(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid must have at least one row"),
            Self::NotSquare { rows, width } => {
                write!(f, "Grid must be square, got {rows} rows and a row of width {width}")
            }
            Self::InvalidLetter(ch) => write!(f, "Grid cells must be letters A-Z, got {ch:?}"),
        }
    }
}

impl std::error::Error for GridError {}

/// Grid under construction
///
/// Cells start empty; `None` marks a cell no word has claimed yet.
#[derive(Debug, Clone)]
pub struct DraftGrid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl DraftGrid {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<u8> {
        self.index(coord).and_then(|i| self.cells[i])
    }

    /// Check whether `word` can be written at `origin` going `direction`
    ///
    /// Fails when the word would run off the edge or when any covered cell
    /// already holds a different letter. Empty cells and equal letters are fine,
    /// which is what lets words cross.
    #[must_use]
    pub fn can_place(&self, word: &Word, origin: Coord, direction: Direction) -> bool {
        let placement = Placement::new(origin, direction, word.len());
        if !placement.fits(self.size) {
            return false;
        }

        placement
            .cells()
            .zip(word.letters())
            .all(|(cell, &letter)| self.get(cell).is_none_or(|existing| existing == letter))
    }

    /// Write `word` along `direction` from `origin`
    ///
    /// Returns the placement, or `None` (leaving the grid untouched) when
    /// [`DraftGrid::can_place`] would fail.
    pub fn place(&mut self, word: &Word, origin: Coord, direction: Direction) -> Option<Placement> {
        if !self.can_place(word, origin, direction) {
            return None;
        }

        let placement = Placement::new(origin, direction, word.len());
        for (cell, &letter) in placement.cells().zip(word.letters()) {
            let index = self.index(cell)?;
            self.cells[index] = Some(letter);
        }
        Some(placement)
    }

    /// Number of cells no word has claimed
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fill every empty cell with a letter from `filler` and freeze the grid
    pub fn fill(self, mut filler: impl FnMut() -> u8) -> Grid {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(&mut filler))
            .collect();

        Grid {
            size: self.size,
            cells,
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then(|| coord.row * self.size + coord.col)
    }
}

/// A completed, read-only N×N letter grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from text rows, one string per row
    ///
    /// Letters are normalised to uppercase.
    ///
    /// # Errors
    /// Returns `GridError` if there are no rows, the rows do not form a square,
    /// or a cell is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::{Coord, Grid};
    ///
    /// let grid = Grid::from_rows(&["cat", "xyz", "qrs"]).unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.letter(Coord::new(0, 1)), Some(b'A'));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let width = row.chars().count();
            if width != size {
                return Err(GridError::NotSquare { rows: size, width });
            }
            for ch in row.chars() {
                if !ch.is_ascii_alphabetic() {
                    return Err(GridError::InvalidLetter(ch));
                }
                cells.push(ch.to_ascii_uppercase() as u8);
            }
        }

        Ok(Self { size, cells })
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Letter at `coord`, or `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn letter(&self, coord: Coord) -> Option<u8> {
        self.contains(coord)
            .then(|| self.cells[coord.row * self.size + coord.col])
    }

    /// Concatenate the letters along `path`, in path order
    ///
    /// Out-of-bounds coordinates contribute nothing. Revisited cells are read
    /// again.
    #[must_use]
    pub fn read_path(&self, path: &[Coord]) -> String {
        path.iter()
            .filter_map(|&c| self.letter(c))
            .map(char::from)
            .collect()
    }

    /// Letters of the placement's cells, in reading order
    #[must_use]
    pub fn read_placement(&self, placement: &Placement) -> String {
        let cells: Vec<Coord> = placement.cells().collect();
        self.read_path(&cells)
    }

    /// Iterate over rows as byte slices
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    /// Iterate over every cell with its coordinate, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Coord, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &letter)| (Coord::new(i / self.size, i % self.size), letter))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|&b| char::from(b).to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

//! Dense 2D grids and integer points.

use std::ops::Index;

use anyhow::{Context, bail};

/// Integer coordinate, `y` growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Up, left, right, down.
    pub fn neighbours(self) -> [Point; 4] {
        [
            Point::new(self.x, self.y - 1),
            Point::new(self.x - 1, self.y),
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y + 1),
        ]
    }

    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from `width * height` cells laid out row by row.
    pub fn from_cells(width: usize, height: usize, cells: Vec<T>) -> anyhow::Result<Self> {
        if cells.len() != width * height {
            bail!(
                "expected {} cells for a {width}x{height} grid, got {}",
                width * height,
                cells.len()
            );
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse one cell per character, one row per non-empty line.
    ///
    /// All rows must have the same width.
    pub fn parse_with<F>(input: &str, mut cell: F) -> anyhow::Result<Self>
    where
        F: FnMut(char) -> anyhow::Result<T>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (row, line) in input.lines().map(str::trim_end).filter(|l| !l.is_empty()).enumerate() {
            let len = line.chars().count();
            match width {
                None => width = Some(len),
                Some(w) if w != len => bail!("row {} has width {len}, expected {w}", row + 1),
                Some(_) => {}
            }
            for (col, c) in line.chars().enumerate() {
                cells.push(cell(c).with_context(|| format!("cell at row {}, column {}", row + 1, col + 1))?);
            }
            height += 1;
        }

        let Some(width) = width else {
            bail!("empty grid");
        };
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.contains(p)
            .then(|| &self.cells[p.y as usize * self.width + p.x as usize])
    }

    /// Bottom-right corner
    pub fn last_point(&self) -> Point {
        Point::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// First point in row-major order whose cell matches.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.cells
            .iter()
            .position(|c| pred(c))
            .map(|i| Point::new((i % self.width) as i32, (i / self.width) as i32))
    }

    /// In-bounds 4-neighbours of `p` with their cells.
    pub fn neighbours(&self, p: Point) -> impl Iterator<Item = (Point, &T)> {
        p.neighbours()
            .into_iter()
            .filter_map(move |n| self.get(n).map(|cell| (n, cell)))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        assert!(self.contains(p), "{p:?} outside {}x{} grid", self.width, self.height);
        &self.cells[p.y as usize * self.width + p.x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(input: &str) -> anyhow::Result<Grid<u8>> {
        Grid::parse_with(input, |c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .with_context(|| format!("not a digit: {c:?}"))
        })
    }

    #[test]
    fn test_parse_and_index() {
        let grid = digits("123\n456\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid[Point::new(0, 0)], 1);
        assert_eq!(grid[Point::new(2, 1)], 6);
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.get(Point::new(0, -1)), None);
        assert_eq!(grid.last_point(), Point::new(2, 1));
    }

    #[test]
    fn test_parse_rejects_ragged_and_bad_cells() {
        assert!(digits("12\n3\n").is_err());
        assert!(digits("1x\n").is_err());
        assert!(digits("\n\n").is_err());
    }

    #[test]
    fn test_find_is_row_major() {
        let grid = digits("90\n09\n").unwrap();
        assert_eq!(grid.find(|&d| d == 9), Some(Point::new(0, 0)));
        assert_eq!(grid.find(|&d| d == 0), Some(Point::new(1, 0)));
        assert_eq!(grid.find(|&d| d == 5), None);
    }

    #[test]
    fn test_neighbours_stay_in_bounds() {
        let grid = digits("12\n34\n").unwrap();
        let around: Vec<_> = grid.neighbours(Point::new(0, 0)).map(|(_, &d)| d).collect();
        assert_eq!(around, vec![2, 3]);
        assert_eq!(grid.points().count(), 4);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Point::new(-2, 3).manhattan(Point::new(1, -1)), 7);
        assert_eq!(Point::new(4, 4).manhattan(Point::new(4, 4)), 0);
    }
}

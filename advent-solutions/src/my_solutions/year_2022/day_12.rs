use advent_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
use anyhow::bail;

use crate::utils::grid::{Grid, Point};
use crate::utils::search::PrioritySearch;

/// Hill Climbing Algorithm
#[derive(AutoRegisterSolver)]
#[puzzle(year = 2022, day = 12, tags = ["grid", "dijkstra"])]
pub struct Day12;

#[derive(Debug)]
pub struct Heightmap {
    /// Elevation 0 (`a`) to 25 (`z`)
    elevation: Grid<u8>,
    start: Point,
    end: Point,
}

impl AocParser for Day12 {
    type SharedData = Heightmap;

    fn parse(input: &str) -> Result<Heightmap, ParseError> {
        let marked = Grid::parse_with(input, |c| match c {
            'S' | 'E' | 'a'..='z' => Ok(c),
            _ => bail!("unexpected map character {c:?}"),
        })
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        let start = marked
            .find(|&c| c == 'S')
            .ok_or_else(|| ParseError::MissingData("start marker 'S'".into()))?;
        let end = marked
            .find(|&c| c == 'E')
            .ok_or_else(|| ParseError::MissingData("end marker 'E'".into()))?;

        let cells = marked
            .points()
            .map(|p| match marked[p] {
                'S' => 0,
                'E' => 25,
                c => c as u8 - b'a',
            })
            .collect();
        let elevation = Grid::from_cells(marked.width(), marked.height(), cells)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Ok(Heightmap {
            elevation,
            start,
            end,
        })
    }
}

impl Solver for Day12 {
    const PARTS: u8 = 2;

    fn solve_part(map: &mut Heightmap, part: u8) -> Result<String, SolveError> {
        let steps = match part {
            1 => climb(map)?,
            2 => descend(map)?,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(steps.to_string())
    }
}

/// Fewest steps from `S` to `E`, climbing at most one level per step.
fn climb(map: &Heightmap) -> Result<u32, SolveError> {
    let grid = &map.elevation;
    PrioritySearch::new(
        |&p: &Point| {
            grid.neighbours(p)
                .filter(|&(_, &h)| h <= grid[p] + 1)
                .map(|(n, _)| (n, 1u32))
                .collect::<Vec<_>>()
        },
        |&p: &Point| p == map.end,
    )
    .run(map.start)
    .cost()
    .ok_or_else(|| SolveError::NoSolution("E is unreachable from S".into()))
}

/// Fewest steps from any `a` to `E`: walk backwards from `E`, where each
/// step may drop at most one level, until the first cell at elevation `a`.
fn descend(map: &Heightmap) -> Result<u32, SolveError> {
    let grid = &map.elevation;
    PrioritySearch::new(
        |&p: &Point| {
            grid.neighbours(p)
                .filter(|&(_, &h)| h + 1 >= grid[p])
                .map(|(n, _)| (n, 1u32))
                .collect::<Vec<_>>()
        },
        |&p: &Point| grid[p] == 0,
    )
    .run(map.end)
    .cost()
    .ok_or_else(|| SolveError::NoSolution("no lowland reaches E".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn test_parse_markers() {
        let map = Day12::parse(EXAMPLE).unwrap();
        assert_eq!(map.start, Point::new(0, 0));
        assert_eq!(map.end, Point::new(5, 2));
        assert_eq!(map.elevation[map.end], 25);
    }

    #[test]
    fn test_example() {
        let mut map = Day12::parse(EXAMPLE).unwrap();
        assert_eq!(Day12::solve_part(&mut map, 1).unwrap(), "31");
        assert_eq!(Day12::solve_part(&mut map, 2).unwrap(), "29");
    }

    #[test]
    fn test_wall_is_no_solution() {
        // the cliff from a to z cannot be climbed
        let mut map = Day12::parse("SazE\n").unwrap();
        assert!(matches!(
            Day12::solve_part(&mut map, 1),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_missing_end() {
        assert!(matches!(
            Day12::parse("Sab\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}

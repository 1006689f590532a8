use advent_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
use anyhow::Context;

use crate::utils::grid::{Grid, Point};
use crate::utils::search::{ClosureProblem, PrioritySearch};

/// Chiton: cheapest path through a risk map.
#[derive(AutoRegisterSolver)]
#[puzzle(year = 2021, day = 15, tags = ["grid", "astar"])]
pub struct Day15;

impl AocParser for Day15 {
    type SharedData = Grid<u32>;

    fn parse(input: &str) -> Result<Grid<u32>, ParseError> {
        Grid::parse_with(input, |c| {
            c.to_digit(10)
                .filter(|d| (1..=9).contains(d))
                .with_context(|| format!("risk must be a digit 1-9, got {c:?}"))
        })
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl Solver for Day15 {
    const PARTS: u8 = 2;

    fn solve_part(risk: &mut Grid<u32>, part: u8) -> Result<String, SolveError> {
        let total = match part {
            1 => lowest_total_risk(risk)?,
            2 => lowest_total_risk(&tile(risk, 5)?)?,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(total.to_string())
    }
}

/// Risk of entering every cell on the way from top-left to bottom-right.
fn lowest_total_risk(risk: &Grid<u32>) -> Result<u32, SolveError> {
    let exit = risk.last_point();
    let problem = ClosureProblem::new(
        |&p: &Point| risk.neighbours(p).map(|(n, &r)| (n, r)).collect::<Vec<_>>(),
        |&p: &Point| p == exit,
    )
    // every cell costs at least 1
    .with_heuristic(|&p: &Point| p.manhattan(exit));

    PrioritySearch::with_problem(problem)
        .run(Point::new(0, 0))
        .cost()
        .ok_or_else(|| SolveError::NoSolution(format!("no path to {exit:?}")))
}

/// Repeat the map `factor` times in both directions. Each tile step adds one
/// to the risk, wrapping from 9 back to 1.
fn tile(risk: &Grid<u32>, factor: usize) -> Result<Grid<u32>, SolveError> {
    let (w, h) = (risk.width(), risk.height());
    let cells = (0..h * factor)
        .flat_map(|y| (0..w * factor).map(move |x| (x, y)))
        .map(|(x, y)| {
            let base = risk[Point::new((x % w) as i32, (y % h) as i32)];
            let shift = (x / w + y / h) as u32;
            (base + shift - 1) % 9 + 1
        })
        .collect();

    Grid::from_cells(w * factor, h * factor, cells).map_err(|e| SolveError::SolveFailed(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn test_part_1_example() {
        let mut risk = Day15::parse(EXAMPLE).unwrap();
        assert_eq!(Day15::solve_part(&mut risk, 1).unwrap(), "40");
    }

    #[test]
    fn test_part_2_example() {
        let mut risk = Day15::parse(EXAMPLE).unwrap();
        assert_eq!(Day15::solve_part(&mut risk, 2).unwrap(), "315");
    }

    #[test]
    fn test_tile_wraps_nine_to_one() {
        let risk = Day15::parse("8\n").unwrap();
        let tiled = tile(&risk, 3).unwrap();
        let row: Vec<u32> = (0..3).map(|x| tiled[Point::new(x, 0)]).collect();
        assert_eq!(row, vec![8, 9, 1]);
        assert_eq!(tiled[Point::new(2, 2)], 3);
    }

    #[test]
    fn test_rejects_non_digit() {
        assert!(matches!(Day15::parse("12\n3x\n"), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_zero_risk() {
        assert!(matches!(Day15::parse("10\n00\n"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Day15::parse("0\n"), Err(ParseError::InvalidFormat(_))));
    }
}

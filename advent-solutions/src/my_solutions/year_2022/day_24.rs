use advent_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
use anyhow::bail;
use tracing::debug;

use crate::utils::grid::{Grid, Point};
use crate::utils::search::{ClosureProblem, PrioritySearch};

/// Blizzard Basin
#[derive(AutoRegisterSolver)]
#[puzzle(year = 2022, day = 24, tags = ["grid", "astar", "time"])]
pub struct Day24;

#[derive(Debug)]
pub struct Basin {
    /// Walls, open ground and blizzards as they stand at minute 0
    map: Grid<char>,
    /// Interior size, walls excluded
    inner_width: i32,
    inner_height: i32,
    entrance: Point,
    exit: Point,
}

impl Basin {
    /// Minutes after which every blizzard is back where it started
    fn period(&self) -> u32 {
        let (w, h) = (self.inner_width as u32, self.inner_height as u32);
        w / gcd(w, h) * h
    }

    fn is_open(&self, p: Point, minute: u32) -> bool {
        if p == self.entrance || p == self.exit {
            return true;
        }
        let (w, h) = (self.inner_width, self.inner_height);
        if !(1..=w).contains(&p.x) || !(1..=h).contains(&p.y) {
            return false;
        }

        // Look up where each kind of blizzard would have to start to be here now
        let dx = (minute % w as u32) as i32;
        let dy = (minute % h as u32) as i32;
        let col = |offset: i32| (p.x - 1 + offset).rem_euclid(w) + 1;
        let row = |offset: i32| (p.y - 1 + offset).rem_euclid(h) + 1;

        self.map[Point::new(col(-dx), p.y)] != '>'
            && self.map[Point::new(col(dx), p.y)] != '<'
            && self.map[Point::new(p.x, row(-dy))] != 'v'
            && self.map[Point::new(p.x, row(dy))] != '^'
    }

    /// Earliest minute at which `to` is reached when leaving `from` at `depart`.
    fn trip(&self, from: Point, to: Point, depart: u32) -> Result<u32, SolveError> {
        let period = self.period();
        let problem = ClosureProblem::new(
            |&(p, minute): &(Point, u32)| {
                let next = minute + 1;
                std::iter::once(p)
                    .chain(p.neighbours())
                    .filter(|&q| self.is_open(q, next))
                    .map(|q| ((q, next), 1u32))
                    .collect::<Vec<_>>()
            },
            |&(p, _): &(Point, u32)| p == to,
        )
        .with_signature(|&(p, minute): &(Point, u32)| (p, minute % period))
        .with_heuristic(|&(p, _): &(Point, u32)| p.manhattan(to));

        let elapsed = PrioritySearch::with_problem(problem)
            .run((from, depart))
            .cost()
            .ok_or_else(|| SolveError::NoSolution(format!("no way from {from:?} to {to:?}")))?;
        debug!(?from, ?to, depart, elapsed, "trip done");
        Ok(depart + elapsed)
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

impl AocParser for Day24 {
    type SharedData = Basin;

    fn parse(input: &str) -> Result<Basin, ParseError> {
        let map = Grid::parse_with(input, |c| match c {
            '#' | '.' | '<' | '>' | '^' | 'v' => Ok(c),
            _ => bail!("unexpected basin character {c:?}"),
        })
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        if map.width() < 3 || map.height() < 3 {
            return Err(ParseError::InvalidFormat("basin needs walls around an interior".into()));
        }
        let bottom = map.height() as i32 - 1;

        let entrance = (0..map.width() as i32)
            .map(|x| Point::new(x, 0))
            .find(|&p| map[p] == '.')
            .ok_or_else(|| ParseError::MissingData("gap in the top wall".into()))?;
        let exit = (0..map.width() as i32)
            .map(|x| Point::new(x, bottom))
            .find(|&p| map[p] == '.')
            .ok_or_else(|| ParseError::MissingData("gap in the bottom wall".into()))?;

        Ok(Basin {
            inner_width: map.width() as i32 - 2,
            inner_height: map.height() as i32 - 2,
            map,
            entrance,
            exit,
        })
    }
}

impl Solver for Day24 {
    const PARTS: u8 = 2;

    fn solve_part(basin: &mut Basin, part: u8) -> Result<String, SolveError> {
        let (entrance, exit) = (basin.entrance, basin.exit);
        let minute = match part {
            1 => basin.trip(entrance, exit, 0)?,
            2 => {
                let there = basin.trip(entrance, exit, 0)?;
                let back = basin.trip(exit, entrance, there)?;
                basin.trip(entrance, exit, back)?
            }
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(minute.to_string())
    }
}

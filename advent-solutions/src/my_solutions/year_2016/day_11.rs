use std::collections::HashMap;

use advent_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
use itertools::Itertools;
use regex::Regex;
use tracing::debug;

use crate::utils::search::{ClosureProblem, PrioritySearch};

/// Radioisotope Thermoelectric Generators
#[derive(AutoRegisterSolver)]
#[puzzle(year = 2016, day = 11, tags = ["dijkstra", "symmetry"])]
pub struct Day11;

const FLOORS: usize = 4;
const TOP: u8 = FLOORS as u8 - 1;

/// Where everything is: the elevator, and for each element the floors of its
/// generator and its microchip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Facility {
    elevator: u8,
    pairs: Vec<(u8, u8)>,
}

/// One item on the elevator's floor: element index, and whether it is the chip
type Item = (usize, bool);

impl Facility {
    /// Elements are interchangeable, so only the multiset of pairs matters.
    fn signature(&self) -> (u8, Vec<(u8, u8)>) {
        let mut pairs = self.pairs.clone();
        pairs.sort_unstable();
        (self.elevator, pairs)
    }

    /// No microchip shares a floor with a foreign generator unless its own
    /// generator is there too.
    fn is_safe(&self) -> bool {
        self.pairs.iter().all(|&(generator, chip)| {
            generator == chip || self.pairs.iter().all(|&(other, _)| other != chip)
        })
    }

    fn is_assembled(&self) -> bool {
        self.elevator == TOP && self.pairs.iter().all(|&pair| pair == (TOP, TOP))
    }

    fn moves(&self) -> Vec<(Facility, u32)> {
        let here = self.elevator;
        let items: Vec<Item> = self
            .pairs
            .iter()
            .enumerate()
            .flat_map(|(i, &(generator, chip))| {
                [
                    (generator == here).then_some((i, false)),
                    (chip == here).then_some((i, true)),
                ]
            })
            .flatten()
            .collect();

        let loads: Vec<Vec<Item>> = items
            .iter()
            .map(|&item| vec![item])
            .chain(items.iter().tuple_combinations().map(|(&a, &b)| vec![a, b]))
            .collect();

        // going below every item is never useful
        let lowest = self.pairs.iter().map(|&(g, c)| g.min(c)).min().unwrap_or(here);
        let floors = [
            (here < TOP).then(|| here + 1),
            (here > lowest).then(|| here - 1),
        ];

        let mut moves = Vec::new();
        for floor in floors.into_iter().flatten() {
            for load in &loads {
                let mut next = self.clone();
                next.elevator = floor;
                for &(element, is_chip) in load {
                    let pair = &mut next.pairs[element];
                    if is_chip {
                        pair.1 = floor;
                    } else {
                        pair.0 = floor;
                    }
                }
                if next.is_safe() {
                    moves.push((next, 1));
                }
            }
        }
        moves
    }
}

/// Fewest elevator trips to bring everything to the top floor
fn assemble(start: &Facility) -> Result<u32, SolveError> {
    let problem = ClosureProblem::new(Facility::moves, Facility::is_assembled)
        .with_signature(Facility::signature);

    let (outcome, stats) = PrioritySearch::with_problem(problem).run_with_stats(start.clone());
    debug!(
        elements = start.pairs.len(),
        expanded = stats.expanded,
        stale = stats.stale,
        "facility searched"
    );
    outcome
        .cost()
        .ok_or_else(|| SolveError::NoSolution("generators and chips cannot all reach the top".into()))
}

impl AocParser for Day11 {
    type SharedData = Facility;

    fn parse(input: &str) -> Result<Facility, ParseError> {
        let item = Regex::new(r"(\w+)-compatible microchip|(\w+) generator")
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() != FLOORS {
            return Err(ParseError::InvalidFormat(format!(
                "expected {FLOORS} floors, got {}",
                lines.len()
            )));
        }

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut found: Vec<(Option<u8>, Option<u8>)> = Vec::new();
        for (floor, line) in lines.into_iter().enumerate() {
            for caps in item.captures_iter(line) {
                let (name, is_chip) = match (caps.get(1), caps.get(2)) {
                    (Some(chip), _) => (chip.as_str(), true),
                    (None, Some(generator)) => (generator.as_str(), false),
                    (None, None) => continue,
                };
                let i = *index.entry(name).or_insert_with(|| {
                    found.push((None, None));
                    found.len() - 1
                });
                let slot = if is_chip { &mut found[i].1 } else { &mut found[i].0 };
                if slot.replace(floor as u8).is_some() {
                    return Err(ParseError::InvalidFormat(format!("{name} listed twice")));
                }
            }
        }

        let names: HashMap<usize, &str> = index.iter().map(|(&name, &i)| (i, name)).collect();
        let pairs = found
            .into_iter()
            .enumerate()
            .map(|(i, pair)| match pair {
                (Some(generator), Some(chip)) => Ok((generator, chip)),
                _ => Err(ParseError::MissingData(format!(
                    "{} needs both a generator and a microchip",
                    names.get(&i).copied().unwrap_or("?")
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Facility { elevator: 0, pairs })
    }
}

impl Solver for Day11 {
    const PARTS: u8 = 2;

    fn solve_part(facility: &mut Facility, part: u8) -> Result<String, SolveError> {
        let steps = match part {
            1 => assemble(facility)?,
            2 => {
                // elerium and dilithium, both on the first floor
                let mut extended = facility.clone();
                extended.pairs.extend([(0, 0), (0, 0)]);
                assemble(&extended)?
            }
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(steps.to_string())
    }
}

use advent_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
use anyhow::{Context, bail, ensure};
use regex::Regex;
use tracing::debug;

use crate::utils::beam::{BeamConfig, BeamSearch};

/// Not Enough Minerals
#[derive(AutoRegisterSolver)]
#[puzzle(year = 2022, day = 19, tags = ["beam", "lossy"])]
pub struct Day19;

const ORE: usize = 0;
const GEODE: usize = 3;
const RESOURCES: [&str; 4] = ["ore", "clay", "obsidian", "geode"];

/// Survivors kept per `(robots, minutes left)` bucket
const BEAM_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    id: u32,
    /// `costs[robot][resource]`
    costs: [[u32; 4]; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Factory {
    resources: [u32; 4],
    robots: [u32; 4],
    remaining: u32,
}

impl Factory {
    fn new(minutes: u32) -> Self {
        let mut robots = [0; 4];
        robots[ORE] = 1;
        Factory {
            resources: [0; 4],
            robots,
            remaining: minutes,
        }
    }

    /// State after `minutes` of collecting.
    fn collect(&self, minutes: u32) -> Factory {
        let mut next = *self;
        for (stock, rate) in next.resources.iter_mut().zip(self.robots) {
            *stock += rate * minutes;
        }
        next.remaining -= minutes;
        next
    }

    /// Minutes until a `robot` is built, counting the minute of building, or
    /// `None` if some ingredient is not being collected at all.
    fn wait_for(&self, blueprint: &Blueprint, robot: usize) -> Option<u32> {
        blueprint.costs[robot]
            .iter()
            .zip(self.resources.iter().zip(self.robots))
            .map(|(&cost, (&have, rate))| match cost.checked_sub(have) {
                None | Some(0) => Some(1),
                Some(_) if rate == 0 => None,
                Some(missing) => Some(missing.div_ceil(rate) + 1),
            })
            .try_fold(0, |wait, w| w.map(|w| wait.max(w)))
    }

    /// Jump straight to the next robot of each affordable kind, or idle out
    /// the clock. A factory with no time left has no successors.
    fn successors(&self, blueprint: &Blueprint) -> Vec<Factory> {
        if self.remaining == 0 {
            return Vec::new();
        }
        let mut next = vec![self.collect(self.remaining)];
        for robot in 0..RESOURCES.len() {
            let Some(wait) = self.wait_for(blueprint, robot) else {
                continue;
            };
            if wait > self.remaining {
                continue;
            }
            let mut built = self.collect(wait);
            for (stock, cost) in built.resources.iter_mut().zip(blueprint.costs[robot]) {
                *stock -= cost;
            }
            built.robots[robot] += 1;
            next.push(built);
        }
        next
    }

    fn signature(&self) -> ([u32; 4], u32) {
        (self.robots, self.remaining)
    }

    /// Stock weighted geodes first, then obsidian, clay and ore.
    fn rank(&self) -> u64 {
        self.resources
            .iter()
            .rev()
            .fold(0, |acc, &n| acc * 100 + u64::from(n))
    }
}

/// Most geodes the beam finds in `minutes`. Pruning may miss the true optimum
/// when the ranking misjudges a bucket.
fn max_geodes(blueprint: &Blueprint, minutes: u32) -> u32 {
    let search = BeamSearch::new(
        BeamConfig { width: BEAM_WIDTH },
        |f: &Factory| f.successors(blueprint),
        Factory::signature,
        Factory::rank,
    );
    let finished = search.run(Factory::new(minutes));
    let geodes = finished
        .iter()
        .map(|f| f.resources[GEODE])
        .max()
        .unwrap_or(0);
    debug!(blueprint = blueprint.id, minutes, finished = finished.len(), geodes, "blueprint simulated");
    geodes
}

fn parse_blueprint(chunk: &str, robot_re: &Regex, cost_re: &Regex) -> anyhow::Result<Blueprint> {
    let (id, rules) = chunk.split_once(':').context("missing ':' after the blueprint id")?;
    let id: u32 = id.trim().parse().with_context(|| format!("bad blueprint id {id:?}"))?;

    let mut costs = [[0; 4]; 4];
    let mut seen = [false; 4];
    for caps in robot_re.captures_iter(rules) {
        let robot = resource_index(&caps[1])?;
        ensure!(!seen[robot], "blueprint {id} lists the {} robot twice", &caps[1]);
        seen[robot] = true;
        for cost in cost_re.captures_iter(&caps[2]) {
            let amount: u32 = cost[1].parse().with_context(|| format!("bad amount {:?}", &cost[1]))?;
            costs[robot][resource_index(&cost[2])?] = amount;
        }
    }
    if let Some(missing) = seen.iter().position(|&s| !s) {
        bail!("blueprint {id} has no {} robot", RESOURCES[missing]);
    }
    Ok(Blueprint { id, costs })
}

fn resource_index(name: &str) -> anyhow::Result<usize> {
    RESOURCES
        .iter()
        .position(|&r| r == name)
        .with_context(|| format!("unknown resource {name:?}"))
}

impl AocParser for Day19 {
    type SharedData = Vec<Blueprint>;

    fn parse(input: &str) -> Result<Vec<Blueprint>, ParseError> {
        let robot_re = Regex::new(r"Each\s+(\w+)\s+robot\s+costs\s+([^.]+)\.")
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let cost_re =
            Regex::new(r"(\d+)\s+(\w+)").map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        // a blueprint may be wrapped over several lines
        let blueprints = input
            .split("Blueprint")
            .filter(|chunk| !chunk.trim().is_empty())
            .map(|chunk| parse_blueprint(chunk, &robot_re, &cost_re))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        if blueprints.is_empty() {
            return Err(ParseError::MissingData("no blueprints".into()));
        }
        Ok(blueprints)
    }
}

impl Solver for Day19 {
    const PARTS: u8 = 2;

    fn solve_part(blueprints: &mut Vec<Blueprint>, part: u8) -> Result<String, SolveError> {
        let answer: u32 = match part {
            1 => blueprints.iter().map(|b| b.id * max_geodes(b, 24)).sum(),
            2 => blueprints.iter().take(3).map(|b| max_geodes(b, 32)).product(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Blueprint 1:
  Each ore robot costs 4 ore.
  Each clay robot costs 2 ore.
  Each obsidian robot costs 3 ore and 14 clay.
  Each geode robot costs 2 ore and 7 obsidian.

Blueprint 2:
  Each ore robot costs 2 ore.
  Each clay robot costs 3 ore.
  Each obsidian robot costs 3 ore and 8 clay.
  Each geode robot costs 3 ore and 12 obsidian.
";

    #[test]
    fn test_parse() {
        let blueprints = Day19::parse(EXAMPLE).unwrap();
        assert_eq!(blueprints.len(), 2);
        assert_eq!(blueprints[0].id, 1);
        assert_eq!(blueprints[0].costs[2], [3, 14, 0, 0]);
        assert_eq!(blueprints[1].costs[3], [3, 0, 12, 0]);
    }

    #[test]
    fn test_parse_single_line() {
        let line = "Blueprint 7: Each ore robot costs 4 ore. Each clay robot costs 2 ore. \
                    Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.";
        let blueprints = Day19::parse(line).unwrap();
        assert_eq!(blueprints[0].id, 7);
        assert_eq!(blueprints[0].costs, Day19::parse(EXAMPLE).unwrap()[0].costs);
    }

    #[test]
    fn test_parse_rejects_incomplete_blueprint() {
        let missing = "Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore.";
        assert!(matches!(Day19::parse(missing), Err(ParseError::InvalidFormat(_))));
        let unknown = "Blueprint 1: Each ore robot costs 4 gold.";
        assert!(matches!(Day19::parse(unknown), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Day19::parse("\n"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_wait_for() {
        let blueprint = &Day19::parse(EXAMPLE).unwrap()[0];
        let start = Factory::new(24);
        // 4 ore at one ore a minute, then a minute to build
        assert_eq!(start.wait_for(blueprint, 0), Some(5));
        assert_eq!(start.wait_for(blueprint, 1), Some(3));
        assert_eq!(start.wait_for(blueprint, 2), None, "no clay robots yet");
    }

    #[test]
    fn test_successors_idle_and_build() {
        let blueprint = &Day19::parse(EXAMPLE).unwrap()[0];
        let next = Factory::new(24).successors(blueprint);
        assert_eq!(next.len(), 3);
        assert_eq!(next[0].remaining, 0);
        assert_eq!(next[0].resources[ORE], 24);
        // clay robot after minute 3, one ore left over
        let clay = next[2];
        assert_eq!((clay.remaining, clay.robots, clay.resources), (21, [1, 1, 0, 0], [1, 0, 0, 0]));
        assert!(next[0].successors(blueprint).is_empty());
    }

    #[test]
    fn test_rank_prefers_geodes() {
        let mut rich = Factory::new(0);
        rich.resources = [90, 90, 90, 0];
        let mut cracked = Factory::new(0);
        cracked.resources = [0, 0, 0, 1];
        assert!(cracked.rank() > rich.rank());
    }

    #[test]
    fn test_example() {
        let mut blueprints = Day19::parse(EXAMPLE).unwrap();
        assert_eq!(Day19::solve_part(&mut blueprints, 1).unwrap(), "33");
        assert_eq!(Day19::solve_part(&mut blueprints, 2).unwrap(), (56 * 62).to_string());
    }
}

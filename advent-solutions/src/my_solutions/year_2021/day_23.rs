use advent_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
use anyhow::{Context, bail, ensure};
use itertools::Itertools;
use tracing::debug;

use crate::utils::search::PrioritySearch;

/// Amphipod
#[derive(AutoRegisterSolver)]
#[puzzle(year = 2021, day = 23, tags = ["dijkstra"])]
pub struct Day23;

const EMPTY: u8 = b'.';
const HALLWAY_LEN: usize = 11;
/// Hallway cells directly above each room; nobody may stop there
const DOORS: [usize; 4] = [2, 4, 6, 8];
const MAX_DEPTH: usize = 4;

/// Rows folded into the diagram when it is unfolded
const UNFOLDED: [[u8; 4]; 2] = [*b"DCBA", *b"DBAC"];

/// Room for amphipod `piece` (`A` to `D`)
fn home(piece: u8) -> usize {
    (piece - b'A') as usize
}

fn energy_per_step(piece: u8) -> u32 {
    10u32.pow(home(piece) as u32)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Burrow {
    hallway: [u8; HALLWAY_LEN],
    /// `rooms[room][slot]`, slot 0 next to the hallway
    rooms: [[u8; MAX_DEPTH]; 4],
    depth: usize,
}

impl Burrow {
    fn from_rows(rows: &[[u8; 4]]) -> Self {
        let mut rooms = [[EMPTY; MAX_DEPTH]; 4];
        for (slot, row) in rows.iter().enumerate() {
            for (room, &piece) in row.iter().enumerate() {
                rooms[room][slot] = piece;
            }
        }
        Self {
            hallway: [EMPTY; HALLWAY_LEN],
            rooms,
            depth: rows.len(),
        }
    }

    fn room(&self, room: usize) -> &[u8] {
        &self.rooms[room][..self.depth]
    }

    fn is_sorted(&self) -> bool {
        (0..4).all(|room| self.room(room).iter().all(|&p| p != EMPTY && home(p) == room))
    }

    /// Room holds nothing but its own kind, so pieces may enter and none need leave
    fn is_clean(&self, room: usize) -> bool {
        self.room(room).iter().all(|&p| p == EMPTY || home(p) == room)
    }

    /// Hallway cells between `from` (excluded) and `to` (included) are free
    fn hallway_clear(&self, from: usize, to: usize) -> bool {
        let (lo, hi) = if from < to { (from + 1, to) } else { (to, from - 1) };
        self.hallway[lo..=hi].iter().all(|&c| c == EMPTY)
    }

    fn moves(&self) -> Vec<(Burrow, u32)> {
        let mut moves = Vec::new();

        // hallway straight into the deepest free slot of its own room
        for (cell, &piece) in self.hallway.iter().enumerate() {
            if piece == EMPTY {
                continue;
            }
            let room = home(piece);
            if !self.is_clean(room) || !self.hallway_clear(cell, DOORS[room]) {
                continue;
            }
            let Some(slot) = self.room(room).iter().rposition(|&p| p == EMPTY) else {
                continue;
            };
            let mut next = self.clone();
            next.hallway[cell] = EMPTY;
            next.rooms[room][slot] = piece;
            let steps = cell.abs_diff(DOORS[room]) + slot + 1;
            moves.push((next, steps as u32 * energy_per_step(piece)));
        }

        // topmost piece of an unclean room out to any reachable hallway stop
        for room in (0..4).filter(|&room| !self.is_clean(room)) {
            let Some(slot) = self.room(room).iter().position(|&p| p != EMPTY) else {
                continue;
            };
            let piece = self.rooms[room][slot];
            for cell in (0..HALLWAY_LEN).filter(|c| !DOORS.contains(c)) {
                if !self.hallway_clear(DOORS[room], cell) {
                    continue;
                }
                let mut next = self.clone();
                next.rooms[room][slot] = EMPTY;
                next.hallway[cell] = piece;
                let steps = slot + 1 + DOORS[room].abs_diff(cell);
                moves.push((next, steps as u32 * energy_per_step(piece)));
            }
        }

        moves
    }
}

/// Least energy to sort the burrow whose room rows (top first) are given
fn organize(rows: &[[u8; 4]]) -> Result<u32, SolveError> {
    let search = PrioritySearch::new(Burrow::moves, Burrow::is_sorted);
    let (outcome, stats) = search.run_with_stats(Burrow::from_rows(rows));
    debug!(depth = rows.len(), expanded = stats.expanded, "burrow searched");
    outcome
        .cost()
        .ok_or_else(|| SolveError::NoSolution("amphipods cannot be organized".into()))
}

fn parse_rows(input: &str) -> anyhow::Result<Vec<[u8; 4]>> {
    let rows: Vec<[u8; 4]> = input
        .lines()
        .skip(2)
        .map(|line| {
            line.bytes()
                .filter(|b| (b'A'..=b'D').contains(b))
                .collect::<Vec<_>>()
        })
        .filter(|pieces| !pieces.is_empty())
        .enumerate()
        .map(|(i, pieces)| {
            <[u8; 4]>::try_from(pieces)
                .ok()
                .with_context(|| format!("room row {} must hold exactly four amphipods", i + 1))
        })
        .collect::<anyhow::Result<_>>()?;

    if rows.is_empty() {
        bail!("no room rows");
    }
    ensure!(
        rows.len() + UNFOLDED.len() <= MAX_DEPTH,
        "rooms deeper than {} are not supported",
        MAX_DEPTH - UNFOLDED.len()
    );

    let counts = rows.iter().flatten().counts();
    for piece in b'A'..=b'D' {
        let count = counts.get(&piece).copied().unwrap_or(0);
        ensure!(
            count == rows.len(),
            "expected {} amphipods of type {}, found {count}",
            rows.len(),
            piece as char
        );
    }
    Ok(rows)
}

impl AocParser for Day23 {
    type SharedData = Vec<[u8; 4]>;

    fn parse(input: &str) -> Result<Vec<[u8; 4]>, ParseError> {
        parse_rows(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl Solver for Day23 {
    const PARTS: u8 = 2;

    fn solve_part(rows: &mut Vec<[u8; 4]>, part: u8) -> Result<String, SolveError> {
        let energy = match part {
            1 => organize(rows)?,
            2 => {
                let mut unfolded = rows.clone();
                unfolded.splice(1..1, UNFOLDED);
                organize(&unfolded)?
            }
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(energy.to_string())
    }
}

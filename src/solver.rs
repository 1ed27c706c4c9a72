use std::collections::{HashSet, VecDeque};

use log::{debug, info, warn};

use crate::board::{Board, Move};
use crate::config::SolverConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every moved run must land on an accepting stack.
    Strict,
    /// Adds forced single-card moves off disordered stacks, and freezes
    /// disordered stacks as destinations.
    Relaxed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Solved(Vec<Move>),
    Unsolvable,
}

impl SolveResult {
    pub fn moves(&self) -> Option<&[Move]> {
        match self {
            SolveResult::Solved(moves) => Some(moves.as_slice()),
            SolveResult::Unsolvable => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }
}

/// Outcome of a single search pass, with the counters behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub mode: Mode,
    pub result: SolveResult,
    /// States taken off the frontier.
    pub explored: usize,
    /// Distinct states ever enqueued, the start included.
    pub seen: usize,
    /// The relaxed budget ran out with states still queued, so an
    /// `Unsolvable` result is not a proof.
    pub budget_exhausted: bool,
}

/// One entry in the search trail; walking `parent` links rebuilds the path.
struct Step {
    parent: Option<usize>,
    mv: Move,
}

/// Breadth-first solver. The first cleared board reached is reached by a
/// shortest move sequence.
#[derive(Clone, Debug)]
pub struct Solver {
    board: Board,
    config: SolverConfig,
}

pub fn solve(board: Board, allow_relaxed: bool) -> SolveResult {
    Solver::new(board).solve(allow_relaxed)
}

impl Solver {
    pub fn new(board: Board) -> Self {
        Self::with_config(board, SolverConfig::default())
    }

    pub fn with_config(board: Board, config: SolverConfig) -> Self {
        Self { board, config }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Strict search first; the relaxed search only runs when the strict
    /// one has exhausted every reachable state.
    pub fn solve(&self, allow_relaxed: bool) -> SolveResult {
        self.solve_with_report(allow_relaxed).result
    }

    /// Like [`Solver::solve`], but returns the report of the last pass run.
    pub fn solve_with_report(&self, allow_relaxed: bool) -> SearchReport {
        let strict = self.search(Mode::Strict);
        if strict.result.is_solved() || !allow_relaxed {
            return strict;
        }
        info!(
            "no strict solution after {} states, bending the rules",
            strict.explored
        );
        self.search(Mode::Relaxed)
    }

    pub fn search(&self, mode: Mode) -> SearchReport {
        let rules = &self.config.rules;
        let budget = match mode {
            Mode::Strict => None,
            Mode::Relaxed => Some(self.config.relaxed_budget),
        };
        debug!(
            "{:?} search over {} stacks, {} cards",
            mode,
            self.board.len(),
            self.board.card_count()
        );

        let start = rules.remove_completed(&self.board);
        let mut trail: Vec<Step> = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut frontier: VecDeque<(Board, Option<usize>)> = VecDeque::new();
        frontier.push_back((start, None));
        let mut explored = 0;

        let report = |result: SolveResult, explored: usize, seen: usize, budget_exhausted: bool| {
            SearchReport {
                mode,
                result,
                explored,
                seen,
                budget_exhausted,
            }
        };

        while let Some((board, node)) = frontier.pop_front() {
            if budget.is_some_and(|budget| explored >= budget) {
                warn!(
                    "{:?} search gave up after {} states with {} still queued",
                    mode,
                    explored,
                    frontier.len() + 1
                );
                return report(SolveResult::Unsolvable, explored, visited.len(), true);
            }
            explored += 1;

            if rules.is_cleared(&board) {
                let moves = path(&trail, node);
                debug!(
                    "{:?} search solved in {} moves after {} states",
                    mode,
                    moves.len(),
                    explored
                );
                return report(SolveResult::Solved(moves), explored, visited.len(), false);
            }

            for mv in self.possible_moves(&board, mode) {
                let next = rules.remove_completed(&board.apply(mv));
                if visited.contains(&next) {
                    continue;
                }
                visited.insert(next.clone());
                trail.push(Step { parent: node, mv });
                frontier.push_back((next, Some(trail.len() - 1)));
            }
        }

        debug!(
            "{:?} search exhausted {} states without clearing the board",
            mode, explored
        );
        report(SolveResult::Unsolvable, explored, visited.len(), false)
    }

    /// Moves in generation order: source ascending, then run length, then
    /// destination. This order decides which of several shortest solutions
    /// comes back.
    fn possible_moves(&self, board: &Board, mode: Mode) -> Vec<Move> {
        let rules = &self.config.rules;
        let stacks = board.stacks();
        let mut moves = Vec::new();

        for (from, column) in stacks
            .iter()
            .enumerate()
            .filter(|(_, column)| !column.is_empty())
        {
            let forced = mode == Mode::Relaxed && !rules.is_well_ordered(column);
            if forced {
                moves.extend(
                    (0..stacks.len())
                        .filter(|&to| to != from)
                        .map(|to| Move::new(from, to, 1)),
                );
                continue;
            }

            for amount in 1..=rules.movable_run_length(column) {
                let card = column[column.len() - amount];
                for (to, other) in stacks.iter().enumerate() {
                    if to == from {
                        continue;
                    }
                    if mode == Mode::Relaxed && !rules.is_well_ordered(other) {
                        continue;
                    }
                    if rules.can_accept(card, other) {
                        moves.push(Move::new(from, to, amount));
                    }
                }
            }
        }

        moves
    }
}

fn path(trail: &[Step], mut node: Option<usize>) -> Vec<Move> {
    let mut moves = Vec::new();
    while let Some(index) = node {
        let step = &trail[index];
        moves.push(step.mv);
        node = step.parent;
    }
    moves.reverse();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card as C;

    fn board(stacks: &[&[C]]) -> Board {
        Board::new(stacks.iter().map(|stack| stack.to_vec()).collect())
    }

    #[test]
    fn strict_generation_order() {
        let solver = Solver::new(board(&[&[C::KING, C::QUEEN], &[C::ACE], &[]]));
        let moves = solver.possible_moves(solver.board(), Mode::Strict);
        assert_eq!(
            moves,
            vec![
                Move::new(0, 2, 1),
                Move::new(0, 1, 2),
                Move::new(0, 2, 2),
                Move::new(1, 2, 1),
            ]
        );
    }

    #[test]
    fn relaxed_forces_off_disordered_stacks() {
        let solver = Solver::new(board(&[&[C::SIX, C::KING], &[C::TEN], &[C::NINE, C::SEVEN]]));
        let moves = solver.possible_moves(solver.board(), Mode::Relaxed);
        // Stack 0 and 2 are disordered; stack 1 may only target ordered stacks.
        assert_eq!(
            moves,
            vec![
                Move::new(0, 1, 1),
                Move::new(0, 2, 1),
                Move::new(2, 0, 1),
                Move::new(2, 1, 1),
            ]
        );
    }

    #[test]
    fn relaxed_freezes_disordered_destinations() {
        // J would legally land on the Q topping the disordered stack 1.
        let solver = Solver::new(board(&[&[C::JACK], &[C::SIX, C::QUEEN], &[]]));
        let strict = solver.possible_moves(solver.board(), Mode::Strict);
        let relaxed = solver.possible_moves(solver.board(), Mode::Relaxed);
        assert_eq!(
            strict,
            vec![Move::new(0, 1, 1), Move::new(0, 2, 1), Move::new(1, 2, 1)]
        );
        assert_eq!(
            relaxed,
            vec![Move::new(0, 2, 1), Move::new(1, 0, 1), Move::new(1, 2, 1)]
        );
    }

    #[test]
    fn relaxed_keeps_strict_rules_between_ordered_stacks() {
        let solver = Solver::new(board(&[&[C::JACK], &[C::TEN, C::NINE], &[]]));
        let strict = solver.possible_moves(solver.board(), Mode::Strict);
        let relaxed = solver.possible_moves(solver.board(), Mode::Relaxed);
        assert_eq!(strict, relaxed);
    }

    #[test]
    fn path_follows_parents() {
        let trail = vec![
            Step {
                parent: None,
                mv: Move::new(0, 1, 1),
            },
            Step {
                parent: Some(0),
                mv: Move::new(1, 2, 2),
            },
        ];
        assert_eq!(path(&trail, None), vec![]);
        assert_eq!(
            path(&trail, Some(1)),
            vec![Move::new(0, 1, 1), Move::new(1, 2, 2)]
        );
    }

    #[test]
    fn zero_budget_gives_up_immediately() {
        let solver = Solver::with_config(
            board(&[&[C::SIX], &[]]),
            SolverConfig::default().with_relaxed_budget(0),
        );
        let report = solver.search(Mode::Relaxed);
        assert_eq!(report.result, SolveResult::Unsolvable);
        assert!(report.budget_exhausted);
        assert_eq!(report.explored, 0);
    }
}

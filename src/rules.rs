//! Board predicates and transforms. Everything here is total: unknown face
//! values are never an error, they just fail every ordering test.

use crate::board::{Board, Move, MoveError};
use crate::card::Card;
use crate::config::ConfigError;

/// The rank sequence a game is played with, highest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    run: [Card; 9],
}

impl Default for Rules {
    fn default() -> Self {
        Self { run: Card::RUN }
    }
}

impl Rules {
    pub fn new(run: [Card; 9]) -> Result<Self, ConfigError> {
        for (i, card) in run.iter().enumerate() {
            if run[..i].contains(card) {
                return Err(ConfigError::DuplicateRank(*card));
            }
        }
        Ok(Self { run })
    }

    pub fn run(&self) -> &[Card; 9] {
        &self.run
    }

    /// Position of `card` in the run, 0 being the highest rank.
    pub fn position(&self, card: Card) -> Option<usize> {
        self.run.iter().position(|&c| c == card)
    }

    /// True when `upper` sits directly on `lower` in a descending run.
    fn follows(&self, lower: Card, upper: Card) -> bool {
        match (self.position(lower), self.position(upper)) {
            (Some(lower), Some(upper)) => lower + 1 == upper,
            _ => false,
        }
    }

    pub fn is_well_ordered(&self, stack: &[Card]) -> bool {
        stack.iter().all(|&card| self.position(card).is_some())
            && stack
                .windows(2)
                .all(|cards| self.follows(cards[0], cards[1]))
    }

    pub fn is_complete(&self, stack: &[Card]) -> bool {
        stack == &self.run[..]
    }

    /// Number of cards from the top that form one descending run.
    pub fn movable_run_length(&self, stack: &[Card]) -> usize {
        if stack.is_empty() {
            return 0;
        }
        stack
            .iter()
            .rev()
            .collect::<Vec<_>>()
            .windows(2)
            .take_while(|cards| self.follows(*cards[1], *cards[0]))
            .count()
            + 1
    }

    /// Only the destination's top card matters: `card` must be the next
    /// rank down from it, or the destination must be empty.
    pub fn can_accept(&self, card: Card, destination: &[Card]) -> bool {
        match destination.last() {
            None => true,
            Some(&top) => self.follows(top, card),
        }
    }

    /// Drops every complete stack. Later stacks shift down to fill the gap.
    pub fn remove_completed(&self, board: &Board) -> Board {
        Board::new(
            board
                .stacks()
                .iter()
                .filter(|stack| !self.is_complete(stack))
                .cloned()
                .collect(),
        )
    }

    pub fn is_cleared(&self, board: &Board) -> bool {
        board
            .stacks()
            .iter()
            .all(|stack| stack.is_empty() || self.is_complete(stack))
    }

    /// Applies `mv` and sweeps completed stacks, the way a player sees the
    /// board after each move.
    pub fn step(&self, board: &Board, mv: Move) -> Result<Board, MoveError> {
        Ok(self.remove_completed(&board.try_apply(mv)?))
    }

    /// Replays a move list from `board`, returning every intermediate board
    /// including the starting one.
    pub fn replay(&self, board: &Board, moves: &[Move]) -> Result<Vec<Board>, MoveError> {
        let mut boards = vec![self.remove_completed(board)];
        for &mv in moves {
            let next = self.step(boards.last().unwrap_or(board), mv)?;
            boards.push(next);
        }
        Ok(boards)
    }
}

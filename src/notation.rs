//! Plain-text boards: one stack per line, bottom card first.
//!
//! ```text
//! # stack 1 holds the high cards
//! A, K, Q
//! J 10
//! -
//!
//! ```
//!
//! `-` or a blank line is an empty stack, and `#` starts a comment line.
//! Trailing blank lines are dropped.

use crate::board::Board;
use crate::card::Card;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: invalid card {token:?}")]
    InvalidCard { line: usize, token: String },
    #[error("board has no stacks")]
    Empty,
}

pub fn parse_board(s: &str) -> Result<Board, ParseError> {
    let mut stacks = Vec::new();
    for (i, line) in s.trim_end().lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if line == "-" {
            stacks.push(Vec::new());
            continue;
        }
        let stack = line
            .split(&[',', ' ', '\t'])
            .filter(|token| !token.trim().is_empty())
            .map(|token| {
                Card::from_string(token).ok_or_else(|| ParseError::InvalidCard {
                    line: i + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        stacks.push(stack);
    }

    if stacks.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(Board::new(stacks))
}

pub fn stringify(board: &Board) -> String {
    board
        .stacks()
        .iter()
        .map(|stack| {
            if stack.is_empty() {
                "-".to_string()
            } else {
                stack
                    .iter()
                    .map(|card| card.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

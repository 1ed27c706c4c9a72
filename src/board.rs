use std::fmt::Display;

use crate::card::Card;

/// An ordered set of stacks, each listed bottom card first.
///
/// Boards are plain values: equality and hashing look at stack contents and
/// order only, which is what the solver uses to recognise revisited states.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Board {
    stacks: Vec<Vec<Card>>,
}

/// Moves the top `amount` cards of `from` onto `to`, keeping their order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub amount: usize,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("stack {0} does not exist")]
    NoSuchStack(usize),
    #[error("cannot move a stack onto itself")]
    SameStack,
    #[error("cannot move {amount} card(s) from stack {from}, which holds {held}")]
    NotEnoughCards {
        from: usize,
        amount: usize,
        held: usize,
    },
}

impl Move {
    pub fn new(from: usize, to: usize, amount: usize) -> Self {
        Self { from, to, amount }
    }
}

/// `m{amount}{from}{to}` with 1-based stacks and the amount left out when
/// it is 1. Once any number needs two digits the fields are written out in
/// full and dash-separated, `m{amount}-{from}-{to}`.
impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.amount > 9 || self.from + 1 > 9 || self.to + 1 > 9 {
            return write!(f, "m{}-{}-{}", self.amount, self.from + 1, self.to + 1);
        }
        write!(
            f,
            "m{}{}{}",
            if self.amount > 1 {
                self.amount.to_string()
            } else {
                "".to_string()
            },
            self.from + 1,
            self.to + 1
        )
    }
}

impl Board {
    pub fn new(stacks: Vec<Vec<Card>>) -> Self {
        Self { stacks }
    }

    pub fn stacks(&self) -> &[Vec<Card>] {
        &self.stacks
    }

    pub fn into_stacks(self) -> Vec<Vec<Card>> {
        self.stacks
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Applies a move the caller already knows to be in range.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds or the source holds fewer
    /// than `amount` cards. Use [`Board::try_apply`] for unchecked input.
    pub fn apply(&self, mv: Move) -> Board {
        let mut stacks = self.stacks.clone();
        let column = &mut stacks[mv.from];
        let mut cards = column.split_off(column.len() - mv.amount);
        stacks[mv.to].append(&mut cards);
        Board { stacks }
    }

    pub fn try_apply(&self, mv: Move) -> Result<Board, MoveError> {
        for index in [mv.from, mv.to] {
            if index >= self.stacks.len() {
                return Err(MoveError::NoSuchStack(index));
            }
        }
        if mv.from == mv.to {
            return Err(MoveError::SameStack);
        }
        let held = self.stacks[mv.from].len();
        if mv.amount == 0 || mv.amount > held {
            return Err(MoveError::NotEnoughCards {
                from: mv.from,
                amount: mv.amount,
                held,
            });
        }
        Ok(self.apply(mv))
    }
}

impl From<Vec<Vec<Card>>> for Board {
    fn from(stacks: Vec<Vec<Card>>) -> Self {
        Self::new(stacks)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.stacks.len() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{:>3}", i + 1)?;
        }

        for row in 0.. {
            if self.stacks.iter().all(|stack| stack.len() <= row) {
                break;
            }
            writeln!(f)?;
            for (i, stack) in self.stacks.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match stack.get(row) {
                    Some(card) => write!(f, "{:>3}", card.to_string())?,
                    None => write!(f, "   ")?,
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(vec![
            vec![Card::ACE, Card::KING, Card::QUEEN],
            vec![Card::JACK],
            vec![],
        ])
    }

    #[test]
    fn apply_moves_block_in_order() {
        let next = board().apply(Move::new(0, 2, 2));
        assert_eq!(next.stacks()[0], vec![Card::ACE]);
        assert_eq!(next.stacks()[2], vec![Card::KING, Card::QUEEN]);
        assert_eq!(next.card_count(), 4);
    }

    #[test]
    fn apply_leaves_original_untouched() {
        let original = board();
        let _ = original.apply(Move::new(1, 0, 1));
        assert_eq!(original, board());
    }

    #[test]
    fn try_apply_rejects_bad_moves() {
        let b = board();
        assert_eq!(b.try_apply(Move::new(5, 0, 1)), Err(MoveError::NoSuchStack(5)));
        assert_eq!(b.try_apply(Move::new(0, 0, 1)), Err(MoveError::SameStack));
        assert_eq!(
            b.try_apply(Move::new(2, 0, 1)),
            Err(MoveError::NotEnoughCards {
                from: 2,
                amount: 1,
                held: 0
            })
        );
        assert!(b.try_apply(Move::new(0, 1, 3)).is_ok());
    }

    #[test]
    fn move_notation() {
        assert_eq!(Move::new(1, 0, 1).to_string(), "m21");
        assert_eq!(Move::new(0, 3, 7).to_string(), "m714");
    }

    #[test]
    fn wide_moves_separate_their_numbers() {
        assert_eq!(Move::new(0, 10, 1).to_string(), "m1-1-11");
        assert_eq!(Move::new(10, 0, 1).to_string(), "m1-11-1");
        assert_eq!(Move::new(2, 0, 12).to_string(), "m12-3-1");
        assert_eq!(Move::new(8, 0, 9).to_string(), "m991");
    }

    #[test]
    fn display_lists_rows_bottom_first() {
        let text = board().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  1|  2|  3");
        assert_eq!(lines[1], "  A   J    ");
        assert_eq!(lines[3], "  Q        ");
    }
}

use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::board::Board;
use crate::card::Card;

pub const DEFAULT_STACKS: usize = 4;
/// Stack numbers stay single digits in move notation up to here.
pub const MAX_STACKS: usize = 9;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DealError {
    #[error("cannot deal {0} card(s) onto zero stacks")]
    NoStacks(usize),
}

/// Shuffles `decks` full runs and deals them round-robin onto `stacks`
/// stacks, the way cards come off a hand.
pub fn with_rng(rng: &mut impl Rng, stacks: usize, decks: usize) -> Result<Board, DealError> {
    let mut deck: Vec<Card> = (0..decks).flat_map(|_| Card::RUN).collect();
    deck.shuffle(rng);
    from_deck(&deck, stacks)
}

pub fn from_deck(deck: &[Card], stacks: usize) -> Result<Board, DealError> {
    if stacks == 0 && !deck.is_empty() {
        return Err(DealError::NoStacks(deck.len()));
    }
    let mut columns = vec![Vec::new(); stacks];
    for (i, &card) in deck.iter().enumerate() {
        columns[i % stacks].push(card);
    }
    Ok(Board::new(columns))
}

pub fn random(stacks: usize, decks: usize) -> Result<Board, DealError> {
    let mut rng = thread_rng();
    with_rng(&mut rng, stacks, decks)
}

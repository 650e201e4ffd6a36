//! The star-rating policy: a pure function of how long and how many moves
//! the player has taken. Ratings only ever go down within a game.

use std::time::Duration;

use crate::constants::rating;

/// Work out the rating after another move or clock tick.
///
/// Drops happen one rank at a time: 3 stars fall to 2 at
/// [`TWO_STAR_MOVES`](rating::TWO_STAR_MOVES) moves or past
/// [`TWO_STAR_TIME`](rating::TWO_STAR_TIME), and 2 fall to 1 at the
/// corresponding 1-star thresholds. The move checks compare exactly: moves
/// only ever advance by one, so a count can't step over its threshold.
pub fn degrade(current: u8, moves: u32, elapsed: Duration) -> u8 {
    if current == 3 && (moves == rating::TWO_STAR_MOVES || elapsed > rating::TWO_STAR_TIME) {
        2
    } else if current == 2 && (moves == rating::ONE_STAR_MOVES || elapsed > rating::ONE_STAR_TIME) {
        1
    } else {
        current
    }
}

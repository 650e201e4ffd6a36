//! Various constants, for use in various places. All of the tunable numbers
//! of the game live here; [`Rules`](crate::Rules) picks these up as defaults.

/// Constants with gameplay implications.
pub mod gameplay {
    /// How many distinct faces a standard deal uses.
    pub const FACES: usize = 8;
    /// How many copies of each face go into the grid. 2 makes it a pairs game.
    pub const SETS: usize = 2;
    /// The rating every game starts from.
    pub const MAX_STARS: u8 = 3;
}

/// Thresholds at which the star rating degrades.
pub mod rating {
    use std::time::Duration;

    /// Exact move count at which 3 stars become 2.
    pub const TWO_STAR_MOVES: u32 = 24;
    /// Elapsed time beyond which 3 stars become 2.
    pub const TWO_STAR_TIME: Duration = Duration::from_secs(30);
    /// Exact move count at which 2 stars become 1.
    pub const ONE_STAR_MOVES: u32 = 40;
    /// Elapsed time beyond which 2 stars become 1.
    pub const ONE_STAR_TIME: Duration = Duration::from_secs(60);
}

/// Constants controlling pacing.
pub mod pacing {
    use std::time::Duration;

    /// How often the clock refreshes the elapsed time.
    pub const TICK: Duration = Duration::from_secs(1);
    /// How long a non-matching pair stays face-up, so the player can see the
    /// second tile before both flip back.
    pub const REVEAL_DELAY: Duration = Duration::from_secs(1);
}

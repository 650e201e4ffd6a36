//! The game itself: the state machine every frontend drives.

use std::time::Duration;

use rand::Rng;

use crate::{
    board,
    constants::{gameplay, pacing},
    sched::Deadline,
    stars,
    tile::{Status, Tile},
    timing::Clock,
};

/// Tunable parameters for a game. The defaults are the standard 4x4 grid of
/// pairs; a frontend mostly wants these untouched, except maybe shrinking
/// the delays for tests and demos.
#[derive(Clone, Copy, Debug)]
pub struct Rules {
    /// Distinct faces in the deal.
    pub faces: usize,
    /// Copies of each face. 2 is a pairs game.
    pub sets: usize,
    /// How often the clock refreshes the elapsed time.
    pub tick: Duration,
    /// How long a completed pair stays face-up before it's resolved.
    pub reveal_delay: Duration,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            faces: gameplay::FACES,
            sets: gameplay::SETS,
            tick: pacing::TICK,
            reveal_delay: pacing::REVEAL_DELAY,
        }
    }
}

impl Rules {
    pub fn faces(mut self, faces: usize) -> Self {
        self.faces = faces;
        self
    }
    pub fn sets(mut self, sets: usize) -> Self {
        self.sets = sets;
        self
    }
    pub fn tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
    pub fn reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }
}

/// Which leg of a game the state machine is on.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Phase {
    /// Constructed but no game dealt yet.
    Idle,
    /// Accepting selections.
    Playing,
    /// Two tiles are face-up and the pair is waiting to be resolved; input
    /// is gated off until it is.
    Revealing,
    /// All tiles matched. Terminal: the clock is stopped and input stays off
    /// until [`GameState::start`] deals a fresh game.
    Won,
}

/// What a frontend needs to do after calling into the game.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Response {
    /// Nothing in particular needs to be done.
    Nothing,
    /// The model changed; redraw the grid and info display.
    Redraw,
    /// That was the last pair. Redraw and show the results screen, via
    /// [`GameState::summary`].
    Won,
}

/// The final score line for the results screen.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Summary {
    pub moves: u32,
    pub stars: u8,
    /// Elapsed time as of the last clock pulse before the win.
    pub elapsed: Duration,
}

/// The whole model of a running game.
///
/// A frontend owns one of these, calls [`Self::select`] with tile indices
/// the player clicks, calls [`Self::pump`] from its frame/tick loop, and
/// redraws from [`Self::tiles`] plus the counter accessors whenever a call
/// says to. Everything is synchronous; the reveal delay and the clock are
/// scheduled deadlines that `pump` fires, not background work.
pub struct GameState {
    rules: Rules,
    tiles: Vec<Tile>,
    /// Indices of the currently face-up, unresolved tiles. Never more than 2.
    pending: Vec<usize>,
    moves: u32,
    matches: usize,
    stars: u8,
    input_enabled: bool,
    phase: Phase,
    clock: Option<Clock>,
    resolve_at: Option<Deadline>,
}

impl GameState {
    /// A fresh model with nothing dealt. Call [`Self::start`] to play.
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            tiles: vec![],
            pending: Vec::with_capacity(2),
            moves: 0,
            matches: 0,
            stars: gameplay::MAX_STARS,
            input_enabled: false,
            phase: Phase::Idle,
            clock: None,
            resolve_at: None,
        }
    }

    /// Deal and start a game, dropping whatever game was in progress.
    ///
    /// Every counter resets, every tile is face-down, input is open, and the
    /// clock starts from zero.
    pub fn start(&mut self, rng: &mut impl Rng) -> Response {
        self.tiles = board::deal(self.rules.faces, self.rules.sets, rng);
        self.pending.clear();
        self.moves = 0;
        self.matches = 0;
        self.stars = gameplay::MAX_STARS;
        self.input_enabled = true;
        self.phase = Phase::Playing;
        self.clock = Some(Clock::start(self.rules.tick));
        self.resolve_at = None;
        Response::Redraw
    }

    /// The player picked a tile.
    ///
    /// Ignored entirely (no counters move) while input is gated off or when
    /// the tile isn't face-down. Otherwise the tile flips up and joins the
    /// pending pair; completing a pair gates input off and schedules
    /// [`Self::resolve_pending`] for one reveal-delay from now.
    ///
    /// `index` must be in range; handing out indices that don't come from
    /// [`Self::tiles`] is a frontend bug.
    pub fn select(&mut self, index: usize) -> Response {
        if !self.input_enabled || self.tiles[index].status() != Status::Hidden {
            return Response::Nothing;
        }

        self.moves += 1;
        self.recheck_stars();
        self.tiles[index].reveal();
        self.pending.push(index);

        if self.pending.len() == 2 {
            self.input_enabled = false;
            self.phase = Phase::Revealing;
            self.resolve_at = Some(Deadline::after(self.rules.reveal_delay));
        }
        Response::Redraw
    }

    /// Score the pending pair: matching faces settle as matched, a mismatch
    /// flips both back down. Fired by [`Self::pump`] once the reveal delay
    /// passes; harmless to call with no pair pending.
    pub fn resolve_pending(&mut self) -> Response {
        if self.pending.len() != 2 {
            return Response::Nothing;
        }
        debug_assert!(!self.input_enabled, "resolving with input open");

        let (a, b) = (self.pending[0], self.pending[1]);
        if self.tiles[a].face() == self.tiles[b].face() {
            self.tiles[a].settle();
            self.tiles[b].settle();
            self.matches += 2;
        } else {
            self.tiles[a].conceal();
            self.tiles[b].conceal();
        }
        self.pending.clear();
        self.resolve_at = None;

        if self.matches == self.tiles.len() {
            self.phase = Phase::Won;
            if let Some(clock) = &self.clock {
                clock.stop();
            }
            log::info!(
                "won in {} moves at {} stars, {}",
                self.moves,
                self.stars,
                crate::timing::format_elapsed(self.elapsed()),
            );
            Response::Won
        } else {
            self.input_enabled = true;
            self.phase = Phase::Playing;
            Response::Redraw
        }
    }

    /// The frontend's scheduling point; call it from the frame/tick loop.
    ///
    /// Fires the pair resolution once its deadline is due, and otherwise
    /// advances the clock, re-checking the star rating against the fresh
    /// elapsed time. Never blocks.
    pub fn pump(&mut self) -> Response {
        if let Some(deadline) = &self.resolve_at {
            if deadline.is_due() {
                return self.resolve_pending();
            }
        }
        if let Some(clock) = &mut self.clock {
            if clock.tick() {
                self.recheck_stars();
                return Response::Redraw;
            }
        }
        Response::Nothing
    }

    fn recheck_stars(&mut self) {
        self.stars = stars::degrade(self.stars, self.moves, self.elapsed());
    }

    /// Read access to the grid, for rendering. Index order is grid order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// How many tiles (not pairs) have been matched so far.
    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    /// Elapsed play time as of the last clock pulse.
    pub fn elapsed(&self) -> Duration {
        self.clock.as_ref().map(Clock::elapsed).unwrap_or_default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a selection would currently be accepted at all.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// The final score line, once the game is won.
    pub fn summary(&self) -> Option<Summary> {
        match self.phase {
            Phase::Won => Some(Summary {
                moves: self.moves,
                stars: self.stars,
                elapsed: self.elapsed(),
            }),
            _ => None,
        }
    }
}

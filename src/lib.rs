#![cfg_attr(coverage, feature(no_coverage))]

//! The model half of a memory/matching tile game (also known as pairs,
//! concentration, or Pelmanism): a grid of face-down tiles gets revealed two
//! at a time, matches stay up, and a move counter, clock, and shrinking star
//! rating keep score.
//!
//! This crate is deliberately only the model. Architecturally there are two
//! halves:
//!
//! - [`GameState`], which owns the tiles and every counter, and runs the
//!   whole turn cycle: deal and shuffle, selection, the gated reveal of a
//!   pair, resolution, win detection, and the star-rating policy.
//! - The frontend -- a terminal UI, a GUI, a bot -- which renders from
//!   [`GameState::tiles`] and the counter accessors, routes clicks to
//!   [`GameState::select`], and calls [`GameState::pump`] from its
//!   frame/tick loop so the scheduled bits (the pair-reveal delay, the
//!   clock) actually fire. Every mutating call tells the frontend what to do
//!   next via [`Response`].
//!
//! Nothing blocks and nothing spawns threads; the model is a plain value
//! and all of its time handling goes through polled deadlines, so a
//! frontend can drive it from whatever loop it already has. See
//! `src/bin/autoplay.rs` for the smallest possible driver.

pub mod board;
pub mod constants;
pub mod game;
pub mod sched;
pub mod stars;
pub mod tile;
pub mod tileset;
pub mod timing;

pub use game::{GameState, Phase, Response, Rules, Summary};
pub use tile::{Status, Tile};
pub use tileset::{SetPicker, TileSet, TILESETS};

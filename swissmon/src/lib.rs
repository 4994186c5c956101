//! Battle and capture resolution for a monster-collecting RPG.
//!
//! A [`Player`][`player::Player`] owns a team of [`Creature`][`mons::Creature`]s. A
//! [`Battle`][`battle::Battle`] pits the lead creature against a wild creature or a trainer's team,
//! resolving one player action at a time. Static game data is read through a
//! [`DataStore`][`swissmon_data::DataStore`].

extern crate alloc;

pub mod battle;
pub mod capture;
pub mod dex;
pub mod error;
pub mod log;
pub mod mons;
pub mod player;
pub mod save;

pub use swissmon_prng as prng;

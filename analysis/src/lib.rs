//! Normalization of heterogeneous match telemetry into canonical rounds,
//! kill feeds, scoreboards and per player aggregates.

pub mod aggregate;
pub mod coerce;
pub mod endofgame;
pub mod error;
pub mod head_to_head;
pub mod input;
pub mod operator;
pub mod perround;
pub mod perspective;
pub mod scoreboard;
pub mod teams;

pub use error::Error;
pub use input::Match;

//! Game simulation.
//!
//! The bird falls under gravity and flaps upward on input while pipes
//! scroll in from the right. Passing a pipe scores a point; touching a
//! pipe or leaving the field ends the session. Nothing in here draws or
//! reads the terminal.

pub mod entities;
pub mod geometry;
pub mod session;
pub mod state;

pub use entities::{Background, Bird, Pipe};
pub use geometry::{Aabb, Point};
pub use session::{Crash, Session, TickReport};
pub use state::{Control, Game, GameInput, Phase};

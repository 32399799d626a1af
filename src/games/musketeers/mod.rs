//! The Three Musketeers.
//!
//! A two-player game on a 5×5 grid:
//! - The Musketeers (`M`) move first and may only move onto an adjacent
//!   Enemy, capturing it
//! - Cardinal Richelieu's men (`o`) may only move onto an adjacent empty cell
//! - Three Musketeers in one row or column, or no Enemies left, ends the game
//!   in favour of Richelieu's men
//! - A Musketeer side left with no capture after an Enemy move wins

mod executor;
mod game;
mod validator;
pub mod win;

pub use executor::apply;
pub use game::ThreeMusketeers;
pub use validator::validate;

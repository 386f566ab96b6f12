//! Game rules for gobang.
//!
//! Pure functions over a `Board`, kept apart from the engine so they can be
//! tested and reused on their own.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{Axis, check_win, run_length, winning_line};

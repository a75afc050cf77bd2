//! Data models for the console session.

mod detail;
mod view;

pub use detail::{DetailState, ResendState};
pub use view::{PageView, RosterView};

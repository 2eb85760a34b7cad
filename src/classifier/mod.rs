mod classify;
mod kind;

pub use classify::classify;
pub use kind::Kind;

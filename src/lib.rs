pub mod classifier;
pub mod debugger;
pub mod export;
pub mod render;
pub mod script;
pub mod tracker;
pub mod watch;

//! Classic grid Snake: a 20×20 arrow-key game with a persisted high score.
//!
//! The gameplay state machine lives in [`engine::GameEngine`]; everything
//! else (rendering, input decoding, score persistence, the tick timer) is a
//! thin collaborator around its per-tick snapshot.

pub mod apple;
pub mod config;
pub mod engine;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod speed;
pub mod terminal;
pub mod ticker;
pub mod ui;

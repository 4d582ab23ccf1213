//! Grid snake: a deterministic game-state core plus a terminal front end.
//!
//! The core ([`game`], [`motion`], [`collision`], [`food`], [`score`]) has no
//! terminal dependencies and is driven one tick at a time by [`game::Game::step`].
//! Rendering, key mapping and tick scheduling live in [`renderer`], [`ui`],
//! [`input`] and [`ticker`].

pub mod collision;
pub mod commands;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod motion;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ticker;
pub mod ui;

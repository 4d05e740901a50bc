pub mod cell;
pub mod config;
pub mod console;
pub mod engine;
pub mod plot;
pub mod quadtree;
pub mod rule_set;

mod parse_util;

pub use crate::cell::Cell;
pub use crate::engine::LifeEngine;
pub use crate::parse_util::ParseError;

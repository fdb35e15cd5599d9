#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod day;
pub mod error;

mod parser;

#[cfg(test)]
mod tests;

pub use day::{DayMarker, DayToken, TokenPolicy};
pub use error::{Error, Result};
pub use parser::parse;

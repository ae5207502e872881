//! A command line interface library to load countries, build nearest-neighbour delivery tours
//! and report or render them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;

// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod course;
pub mod extract;
pub mod grid;
pub mod model;

pub mod file;
pub mod params;
pub mod progress;
pub mod runner;
pub mod source;
pub mod store;

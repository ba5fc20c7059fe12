#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[macro_use]
mod tracing_macros;

mod collapse;
mod diff;
mod format;
mod output;
mod sequences;

pub use diff::*;
pub use format::*;

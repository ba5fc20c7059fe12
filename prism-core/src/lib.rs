#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod def;
mod equality;
mod impls;
mod macros;
mod peek;
mod scalar;
mod shape;

pub use def::*;
pub use equality::*;
pub use peek::*;
pub use scalar::*;
pub use shape::*;

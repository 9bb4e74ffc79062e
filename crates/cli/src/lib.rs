//! font2css CLI library.

pub mod cli;
pub mod convert;
pub mod inspect;
pub mod io;
pub mod parallel;

pub use convert::{Stylesheet, convert_all, derive_one};
pub use parallel::{BatchResult, Outcome};

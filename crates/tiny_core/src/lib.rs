//! tiny_core: Core types shared across the tinyscript toolchain.
//!
//! Currently this is the source-location vocabulary used by tokens and
//! diagnostics.

pub mod text;

pub use text::{TextPos, TextSpan};

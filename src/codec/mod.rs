//! The explorer path codec.
//!
//! Converts between `ExplorerPath` and its single-segment URL form. Both
//! directions are pure and total.

pub mod decode;
pub mod encode;
pub mod escape;

pub use decode::explorer_path_from_string;
pub use encode::explorer_path_to_string;

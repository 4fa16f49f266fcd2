//! Multi-resolution ICO container export.

mod encode;

pub use encode::write_ico;

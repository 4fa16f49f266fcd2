//! Remove the white background from icon source images.
//!
//! A corner gate decides whether removal should run at all; the fill is a
//! corner-seeded flood fill over a per-pixel brightness mask.

mod detect;
mod floodfill;
mod mask;
mod process;

pub use process::remove_background;

//! Image processing.
//!
//! # Modules
//!
//! - [`background`]: edge-connected white background removal
//! - [`recolor`]: white-to-color substitution for the recording variant

pub mod background;
pub mod recolor;

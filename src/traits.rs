//! Hardware ports used by the pipeline stages.
//!
//! A GPIO read or write cannot fail on this hardware, so the methods are
//! infallible. Firmware adapters live in `hardware`; tests substitute
//! scripted doubles.

use crate::types::ButtonLevel;

/// Digital button input.
pub trait Button {
    /// Sample the current level of the input.
    fn level(&self) -> ButtonLevel;
}

/// Digital LED output.
pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
}

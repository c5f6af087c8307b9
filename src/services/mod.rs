// Service module exports

pub mod clock;
pub mod drag;
pub mod grid;
pub mod holiday;
pub mod index;

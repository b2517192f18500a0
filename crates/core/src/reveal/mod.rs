//! Scroll-triggered reveal of marked page elements

pub mod animator;
pub mod ports;

pub use animator::RevealAnimator;

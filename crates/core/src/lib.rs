#![deny(unsafe_code)]
//! Core types and traits for the flowcanvas particle-field animation system.
//!
//! Provides the `Animator` trait, the `Scene`/`DrawCmd` draw-command model,
//! color types (`Srgb`, `Palette`), the `Pointer` input sample, the
//! `Xorshift64` PRNG, the reproducible `Take` descriptor, and parameter
//! helpers.

pub mod animator;
pub mod color;
pub mod error;
pub mod palette;
pub mod params;
pub mod pointer;
pub mod prng;
pub mod scene;
pub mod take;

pub use animator::Animator;
pub use color::Srgb;
pub use error::AnimatorError;
pub use palette::Palette;
pub use pointer::Pointer;
pub use prng::Xorshift64;
pub use scene::{DrawCmd, Glow, Scene};
pub use take::Take;

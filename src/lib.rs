// THEORY:
// This file is the entry point for the `cvmath` library crate. It exposes a small
// toolbox of numeric helpers that vision code reaches for over and over: descriptive
// statistics over flat samples and over interleaved RGBA-style 4-channel data,
// fixed FIR stencils for derivatives and smoothing, and integer point geometry.
//
// Every function is a pure computation over caller-owned slices. Nothing here keeps
// state between calls, and every failure is returned as a `MathError`.

pub mod core_modules;

pub use crate::core_modules::error::{MathError, MathResult};
pub use crate::core_modules::point::point::{Axis, Point, Rect};
pub use crate::core_modules::signal::signal::{Boundary, FirKernel};
pub use crate::core_modules::statistics::statistics::Vec4;

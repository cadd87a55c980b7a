//! Procedural content generators.
//!
//! * [`ring`] places `n` icospheres evenly on a circle and hands them to a
//!   [`host::SceneHost`] (an in-memory [`host::MeshScene`] ships with the crate).
//! * [`board`] lays out a Parchís board for 3 to 8 players as a tree of 2D
//!   primitives ([`sketch::Group`]) sized in physical units, ready for a
//!   [`host::DocumentHost`] such as the SVG writer in `io::svg`.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**svg-io**](https://en.wikipedia.org/wiki/SVG): write boards as `.svg`
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): write icosphere rings as `.stl`
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): write boards as `.dxf` for laser cutters
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod board;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod host;
pub mod io;
pub mod mesh;
pub mod ring;
pub mod sketch;
pub mod style;
pub mod traits;
pub mod triangulated;
pub mod units;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use board::{BoardOptions, generate_board};
pub use errors::ValidationError;
pub use ring::{RingOptions, place_icospheres};

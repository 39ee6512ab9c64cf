// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editable 2D drawing paths.
//!
//! The easel library models the paths a 2D drawing layer hands to its
//! canvas: an ordered sequence of lines, quadratic curves, cubic curves and
//! pen lifts, built up from a cursor and edited much like a vector. When a
//! path is ready it is translated into primitive draw commands and replayed
//! on any [`DrawSurface`].
//!
//! # Examples
//!
//! Building and drawing a path:
//! ```
//! use easel::{draw_path, DrawCommand, Path, Point};
//!
//! let mut path = Path::new((0., 0.));
//! path.line_to((10., 10.))
//!     .quadratic_to((20., 20.), (30., 30.))
//!     .bezier_to((40., 40.), (50., 50.), (60., 60.));
//!
//! let mut recorded: Vec<DrawCommand> = Vec::new();
//! draw_path(&path, &mut recorded).unwrap();
//! assert_eq!(recorded[0], DrawCommand::MoveTo(Point::new(0., 0.)));
//! assert_eq!(recorded.len(), 4);
//! ```
//!
//! Editing a path like a sequence:
//! ```
//! use easel::{Path, Segment};
//!
//! let mut path = Path::new((0., 0.));
//! path.line_to((10., 0.)).line_to((10., 10.));
//!
//! let reversed = path.to_reversed();
//! assert_eq!(reversed.start(), path.end());
//!
//! let removed = path.splice(1, 1, [Segment::line((10., 0.), (0., 10.))]);
//! assert_eq!(removed[0].to, (10., 10.).into());
//! ```
//!
//! # Features
//!
//! - `serde`: serialization for the value types, and deserialization of
//!   segments from tagged objects such as `{"type": "line", ...}`.
//! - `schemars`: JSON schemas for points and segments.
//! - `mint`: conversions between [`Point`] and `mint::Point2<f64>`.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod common;
mod draw;
mod error;
mod path;
mod point;
mod segment;
mod size;
pub mod style;
mod svg;

pub use crate::common::*;
pub use crate::draw::*;
pub use crate::error::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::segment::*;
pub use crate::size::*;
pub use crate::svg::*;

// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style configuration handed to drawing surfaces.
//!
//! These are plain values: a surface receives them with each draw request
//! and the defaults never change at runtime.

use alloc::borrow::Cow;
use core::borrow::Borrow;

use smallvec::SmallVec;

use crate::Size;

/// Defines the connection between two segments of a stroke.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Join {
    /// A straight line connecting the segments.
    Bevel,
    /// The segments are extended to their natural intersection point.
    #[default]
    Miter,
    /// An arc between the segments.
    Round,
}

/// Defines the shape to be drawn at the ends of a stroke.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cap {
    /// Flat cap.
    #[default]
    Butt,
    /// Square cap with dimensions equal to half the stroke width.
    Square,
    /// Rounded cap with radius equal to half the stroke width.
    Round,
}

/// Collection of values representing lengths in a dash pattern.
pub type Dashes = SmallVec<[f64; 4]>;

/// Describes the visual style of a stroked line.
///
/// The default is a solid, one unit wide line with butt caps and miter
/// joins.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineStyle {
    /// Width of the line.
    pub width: f64,
    /// Style for the ends of open sub-paths.
    pub cap: Cap,
    /// Style for connecting segments.
    pub join: Join,
    /// Lengths of dashes in alternating on/off order. Empty means solid.
    pub dash_pattern: Dashes,
    /// Offset of the first dash.
    pub dash_offset: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: Cap::Butt,
            join: Join::Miter,
            dash_pattern: Dashes::new(),
            dash_offset: 0.0,
        }
    }
}

impl LineStyle {
    /// Creates a new line style with the specified width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Builder method for setting the cap style.
    #[must_use]
    pub fn with_cap(mut self, cap: Cap) -> Self {
        self.cap = cap;
        self
    }

    /// Builder method for setting the join style.
    #[must_use]
    pub fn with_join(mut self, join: Join) -> Self {
        self.join = join;
        self
    }

    /// Builder method for setting the dashing parameters.
    #[must_use]
    pub fn with_dashes<P>(mut self, offset: f64, pattern: P) -> Self
    where
        P: IntoIterator,
        P::Item: Borrow<f64>,
    {
        self.dash_offset = offset;
        self.dash_pattern.clear();
        self.dash_pattern
            .extend(pattern.into_iter().map(|dash| *dash.borrow()));
        self
    }

    /// Returns `true` if the line is drawn solid.
    pub fn is_solid(&self) -> bool {
        self.dash_pattern.is_empty()
    }
}

/// A drop shadow applied to whatever is drawn next.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// CSS color of the shadow.
    pub color: Cow<'static, str>,
    /// Blur radius.
    pub blur: f64,
    /// Horizontal offset.
    pub offset_x: f64,
    /// Vertical offset.
    pub offset_y: f64,
}

impl Shadow {
    /// No visible shadow.
    pub const DEFAULT: Shadow = Shadow {
        color: Cow::Borrowed("transparent"),
        blur: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// A shadow of the given color, blur and offset.
    pub fn new(color: impl Into<Cow<'static, str>>, blur: f64, offset_x: f64, offset_y: f64) -> Self {
        Shadow {
            color: color.into(),
            blur,
            offset_x,
            offset_y,
        }
    }

    /// Returns `true` if the shadow leaves no mark.
    pub fn is_invisible(&self) -> bool {
        self.color == "transparent" || (self.blur == 0.0 && self.offset_x == 0.0 && self.offset_y == 0.0)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Whether a shape is painted inside or along its outline.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawingType {
    /// Fill the interior.
    Filled,
    /// Stroke the outline.
    Outline,
}

/// How an image is sized when drawn.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageSizing {
    /// The image's own size.
    #[default]
    Natural,
    /// An explicit size.
    Size(Size),
    /// A scale factor applied to the natural size. When `y` is `None` the
    /// `x` factor is used for both axes.
    Scale {
        /// Horizontal factor.
        x: f64,
        /// Vertical factor.
        y: Option<f64>,
    },
}

impl ImageSizing {
    /// A uniform scale in both directions.
    pub fn uniform(scale: f64) -> Self {
        ImageSizing::Scale { x: scale, y: None }
    }

    /// The size at which an image of size `natural` is drawn.
    pub fn resolve(self, natural: Size) -> Size {
        match self {
            ImageSizing::Natural => natural,
            ImageSizing::Size(size) => size,
            ImageSizing::Scale { x, y } => natural.scale(x, y.unwrap_or(x)),
        }
    }
}

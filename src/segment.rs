// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path segments: lines, pen lifts, quadratic and cubic curves.

use core::fmt;
use core::str::FromStr;

use arrayvec::ArrayVec;

use crate::{PathError, Point};

/// The geometric kind of a [`Segment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmentKind {
    /// A straight line, or a pen lift when the segment is not drawn.
    Line,
    /// A quadratic curve with one control point.
    Quadratic,
    /// A cubic curve with two control points.
    Bezier,
}

impl SegmentKind {
    /// The lowercase tag naming this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::Line => "line",
            SegmentKind::Quadratic => "quadratic",
            SegmentKind::Bezier => "bezier",
        }
    }

    /// The number of control points a segment of this kind needs.
    pub fn control_point_count(self) -> usize {
        match self {
            SegmentKind::Line => 0,
            SegmentKind::Quadratic => 1,
            SegmentKind::Bezier => 2,
        }
    }
}

impl FromStr for SegmentKind {
    type Err = PathError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "line" => Ok(SegmentKind::Line),
            "quadratic" => Ok(SegmentKind::Quadratic),
            "bezier" => Ok(SegmentKind::Bezier),
            _ => Err(PathError::unknown_segment(tag)),
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single step of a [`Path`](crate::Path).
///
/// Construction is permissive: a quadratic or bezier segment may be built
/// without its control points. Such a segment can be stored and edited like
/// any other, and is only rejected when the path is translated into draw
/// commands (see [`translate`](crate::translate)).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// What kind of step this is.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SegmentKind,
    /// Where the segment starts.
    pub from: Point,
    /// Where the segment ends.
    pub to: Point,
    /// First control point, required by quadratic and bezier segments.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub cp1: Option<Point>,
    /// Second control point, required by bezier segments.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub cp2: Option<Point>,
    /// Whether the segment leaves a mark. An undrawn line is a pen lift.
    #[cfg_attr(feature = "serde", serde(default = "drawn_by_default"))]
    pub drawn: bool,
}

#[cfg(feature = "serde")]
fn drawn_by_default() -> bool {
    true
}

/// A loosely typed description of a segment, tagged by name.
///
/// This is the shape segments take when they come from outside the crate,
/// for example out of a JSON document. Only the tag is validated when
/// converting it with [`Segment::from_descriptor`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentDescriptor {
    /// The segment tag: `line`, `quadratic` or `bezier`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// First control point.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cp1: Option<Point>,
    /// Second control point.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cp2: Option<Point>,
    /// Whether a line is drawn; ignored for curves.
    #[cfg_attr(feature = "serde", serde(default))]
    pub drawn: Option<bool>,
}

impl Segment {
    /// A drawn straight line.
    pub fn line(from: impl Into<Point>, to: impl Into<Point>) -> Segment {
        Segment::from_parts(SegmentKind::Line, from, to, None, None)
    }

    /// A pen lift: moves to `to` without drawing, starting a new sub-path.
    pub fn pen_lift(from: impl Into<Point>, to: impl Into<Point>) -> Segment {
        Segment {
            drawn: false,
            ..Segment::line(from, to)
        }
    }

    /// A quadratic curve through one control point.
    pub fn quadratic(
        from: impl Into<Point>,
        to: impl Into<Point>,
        cp1: impl Into<Point>,
    ) -> Segment {
        Segment::from_parts(SegmentKind::Quadratic, from, to, Some(cp1.into()), None)
    }

    /// A cubic curve through two control points.
    pub fn bezier(
        from: impl Into<Point>,
        to: impl Into<Point>,
        cp1: impl Into<Point>,
        cp2: impl Into<Point>,
    ) -> Segment {
        Segment::from_parts(
            SegmentKind::Bezier,
            from,
            to,
            Some(cp1.into()),
            Some(cp2.into()),
        )
    }

    /// Build a drawn segment from raw parts, without checking that the
    /// control points match the kind.
    pub fn from_parts(
        kind: SegmentKind,
        from: impl Into<Point>,
        to: impl Into<Point>,
        cp1: Option<Point>,
        cp2: Option<Point>,
    ) -> Segment {
        Segment {
            kind,
            from: from.into(),
            to: to.into(),
            cp1,
            cp2,
            drawn: true,
        }
    }

    /// Build a segment from a tagged descriptor.
    ///
    /// Control points that do not belong to the descriptor's kind are
    /// dropped; missing ones stay missing.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] of kind
    /// [`UnknownSegment`](crate::PathErrorKind::UnknownSegment) when the tag
    /// is not one of `line`, `quadratic` or `bezier`.
    pub fn from_descriptor(descriptor: &SegmentDescriptor) -> Result<Segment, PathError> {
        let kind: SegmentKind = descriptor.kind.parse()?;
        let (from, to) = (descriptor.from, descriptor.to);
        Ok(match kind {
            SegmentKind::Line => Segment {
                drawn: descriptor.drawn.unwrap_or(true),
                ..Segment::from_parts(kind, from, to, None, None)
            },
            SegmentKind::Quadratic => Segment::from_parts(kind, from, to, descriptor.cp1, None),
            SegmentKind::Bezier => {
                Segment::from_parts(kind, from, to, descriptor.cp1, descriptor.cp2)
            }
        })
    }

    /// Returns `true` for an undrawn line.
    #[inline]
    pub fn is_pen_lift(&self) -> bool {
        self.kind == SegmentKind::Line && !self.drawn
    }

    /// The control points that are present, in order.
    pub fn control_points(&self) -> ArrayVec<Point, 2> {
        self.cp1.iter().chain(self.cp2.iter()).copied().collect()
    }

    /// Returns `true` if every control point the kind needs is present.
    pub fn is_complete(&self) -> bool {
        match self.kind {
            SegmentKind::Line => true,
            SegmentKind::Quadratic => self.cp1.is_some(),
            SegmentKind::Bezier => self.cp1.is_some() && self.cp2.is_some(),
        }
    }

    /// Reverse the direction of the segment in place.
    ///
    /// `from` and `to` are exchanged. A bezier also exchanges its control
    /// points so that it traces the same curve backwards.
    pub fn reverse(&mut self) {
        core::mem::swap(&mut self.from, &mut self.to);
        if self.kind == SegmentKind::Bezier {
            core::mem::swap(&mut self.cp1, &mut self.cp2);
        }
    }

    /// Returns a new `Segment` describing the same step as `self`, but
    /// traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Segment {
        let mut seg = self.clone();
        seg.reverse();
        seg
    }
}

struct ControlPoint(Option<Point>);

impl fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => fmt::Display::fmt(&p, f),
            None => f.write_str("(missing)"),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SegmentKind::Line if self.drawn => {
                write!(f, "Line from {} to {}", self.from, self.to)
            }
            SegmentKind::Line => write!(f, "Starting new sub-path at {}", self.to),
            SegmentKind::Quadratic => write!(
                f,
                "Quadratic curve from {} to {} with control point {}",
                self.from,
                self.to,
                ControlPoint(self.cp1)
            ),
            SegmentKind::Bezier => write!(
                f,
                "Bezier curve from {} to {} with control points {} and {}",
                self.from,
                self.to,
                ControlPoint(self.cp1),
                ControlPoint(self.cp2)
            ),
        }
    }
}

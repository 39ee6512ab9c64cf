// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation of paths into primitive draw calls.

use crate::{Path, PathError, Point, Segment, SegmentKind};

/// A primitive drawing instruction.
///
/// The variants mirror the path calls of a 2D canvas: control points come
/// first and the end point last.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    /// Move the pen without drawing.
    MoveTo(Point),
    /// Draw a straight edge.
    LineTo(Point),
    /// Draw a quadratic curve: control point, end point.
    QuadTo(Point, Point),
    /// Draw a cubic curve: two control points, end point.
    CurveTo(Point, Point, Point),
    /// Close the current sub-path.
    ClosePath,
}

/// A target for draw commands, implemented by a rendering backend.
///
/// Style state (fill, stroke, line width) is the implementor's business;
/// the translator only issues geometry.
pub trait DrawSurface {
    /// Start a new path with the pen at `start`.
    fn begin_path(&mut self, start: Point);

    /// Move the pen to `p` without drawing.
    fn move_to(&mut self, p: Point);

    /// Draw a straight edge to `p`.
    fn line_to(&mut self, p: Point);

    /// Draw a quadratic curve to `p` through `ctrl`.
    fn quad_to(&mut self, ctrl: Point, p: Point);

    /// Draw a cubic curve to `p` through `ctrl1` and `ctrl2`.
    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, p: Point);

    /// Close the current sub-path.
    fn close_path(&mut self);
}

impl DrawCommand {
    /// Issue this command on `surface`.
    pub fn apply<S: DrawSurface + ?Sized>(self, surface: &mut S) {
        match self {
            DrawCommand::MoveTo(p) => surface.move_to(p),
            DrawCommand::LineTo(p) => surface.line_to(p),
            DrawCommand::QuadTo(p1, p2) => surface.quad_to(p1, p2),
            DrawCommand::CurveTo(p1, p2, p3) => surface.curve_to(p1, p2, p3),
            DrawCommand::ClosePath => surface.close_path(),
        }
    }

    /// The point the pen rests on after this command, if it moves it.
    pub fn end_point(self) -> Option<Point> {
        match self {
            DrawCommand::MoveTo(p)
            | DrawCommand::LineTo(p)
            | DrawCommand::QuadTo(_, p)
            | DrawCommand::CurveTo(_, _, p) => Some(p),
            DrawCommand::ClosePath => None,
        }
    }
}

/// Records every call as a command; `begin_path` is recorded as a move to
/// the start point.
impl DrawSurface for Vec<DrawCommand> {
    fn begin_path(&mut self, start: Point) {
        self.push(DrawCommand::MoveTo(start));
    }

    fn move_to(&mut self, p: Point) {
        self.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.push(DrawCommand::LineTo(p));
    }

    fn quad_to(&mut self, ctrl: Point, p: Point) {
        self.push(DrawCommand::QuadTo(ctrl, p));
    }

    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, p: Point) {
        self.push(DrawCommand::CurveTo(ctrl1, ctrl2, p));
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }
}

fn segment_command(seg: &Segment, index: usize) -> Result<DrawCommand, PathError> {
    match seg.kind {
        SegmentKind::Line if seg.drawn => Ok(DrawCommand::LineTo(seg.to)),
        SegmentKind::Line => Ok(DrawCommand::MoveTo(seg.to)),
        SegmentKind::Quadratic => match seg.cp1 {
            Some(cp1) => Ok(DrawCommand::QuadTo(cp1, seg.to)),
            None => Err(PathError::missing_control_point(seg, index)),
        },
        SegmentKind::Bezier => match (seg.cp1, seg.cp2) {
            (Some(cp1), Some(cp2)) => Ok(DrawCommand::CurveTo(cp1, cp2, seg.to)),
            _ => Err(PathError::missing_control_point(seg, index)),
        },
    }
}

/// Translate a path into the commands that draw it.
///
/// The commands assume the pen already rests on the path's start point.
/// Each segment yields one command; a closed path ends with
/// [`DrawCommand::ClosePath`].
///
/// # Errors
///
/// Stops at the first quadratic or bezier segment that lacks a control
/// point and returns an error naming it and its index.
///
/// ```
/// use easel::{translate, DrawCommand, Path, Point};
///
/// let mut path = Path::new((0., 0.));
/// path.line_to((10., 10.)).quadratic_to((20., 20.), (30., 30.));
/// assert_eq!(
///     translate(&path).unwrap(),
///     [
///         DrawCommand::LineTo(Point::new(10., 10.)),
///         DrawCommand::QuadTo(Point::new(30., 30.), Point::new(20., 20.)),
///     ]
/// );
/// ```
pub fn translate(path: &Path) -> Result<Vec<DrawCommand>, PathError> {
    log::trace!(
        "translating path of {} segments from {}",
        path.len(),
        path.start()
    );
    let mut commands = Vec::with_capacity(path.len() + usize::from(path.is_closed()));
    for (ix, seg) in path.entries() {
        let command = segment_command(seg, ix).map_err(|err| {
            log::debug!("path translation aborted: {err}");
            err
        })?;
        commands.push(command);
    }
    if path.is_closed() {
        commands.push(DrawCommand::ClosePath);
    }
    Ok(commands)
}

/// Draw `path` on `surface`.
///
/// The whole path is translated before the surface is touched, so a
/// malformed path leaves the surface exactly as it was.
///
/// # Errors
///
/// Returns the translation error, if any (see [`translate`]).
pub fn draw_path<S: DrawSurface + ?Sized>(path: &Path, surface: &mut S) -> Result<(), PathError> {
    let commands = translate(path)?;
    surface.begin_path(path.start());
    for command in commands {
        command.apply(surface);
    }
    Ok(())
}

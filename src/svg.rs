// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data output.

use core::fmt;

use crate::{translate, DrawCommand, Path, PathError, Point};

/// Formats a start point and draw commands as SVG path data.
///
/// The output doesn't take any special care to be short: coordinates are
/// written at full precision and every command is absolute.
#[derive(Clone, Copy, Debug)]
pub struct SvgPathData<'a> {
    start: Point,
    commands: &'a [DrawCommand],
}

impl<'a> SvgPathData<'a> {
    /// Path data that moves to `start` and then issues `commands`.
    pub fn new(start: Point, commands: &'a [DrawCommand]) -> Self {
        SvgPathData { start, commands }
    }
}

impl fmt::Display for SvgPathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{} {}", self.start.x, self.start.y)?;
        for command in self.commands {
            match *command {
                DrawCommand::MoveTo(p) => write!(f, "M{} {}", p.x, p.y)?,
                DrawCommand::LineTo(p) => write!(f, "L{} {}", p.x, p.y)?,
                DrawCommand::QuadTo(p1, p2) => write!(f, "Q{} {} {} {}", p1.x, p1.y, p2.x, p2.y)?,
                DrawCommand::CurveTo(p1, p2, p3) => write!(
                    f,
                    "C{} {} {} {} {} {}",
                    p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
                )?,
                DrawCommand::ClosePath => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}

impl Path {
    /// Convert the path to an SVG path string representation.
    ///
    /// ```
    /// use easel::Path;
    ///
    /// let mut path = Path::new((0., 0.));
    /// path.line_to((10., 10.)).close();
    /// assert_eq!(path.to_svg().unwrap(), "M0 0L10 10Z");
    /// ```
    ///
    /// # Errors
    ///
    /// Fails like [`translate`] on a segment missing a control point.
    pub fn to_svg(&self) -> Result<String, PathError> {
        let commands = translate(self)?;
        Ok(SvgPathData::new(self.start(), &commands).to_string())
    }
}

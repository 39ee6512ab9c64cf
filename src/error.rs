// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by path construction and translation.

use thiserror::Error;

use crate::{Path, Segment};

/// The category of a [`PathError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PathErrorKind {
    /// A quadratic or bezier segment lacks a control point.
    MissingControlPoint,
    /// A segment tag was not recognized.
    UnknownSegment,
    /// An index did not address an element of the path.
    IndexOutOfRange,
    /// Raised by a drawing surface with its own message.
    Custom,
}

/// An error concerning a path or one of its segments.
///
/// The message is rendered when the error is built, so it can name the
/// offending segment and, when the segment is known to live in a path, its
/// index there.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct PathError {
    kind: PathErrorKind,
    message: String,
    segment: Option<Segment>,
    index: Option<usize>,
}

impl PathError {
    /// Build an error for a drawing surface.
    ///
    /// When `segment` is given, it is described in the message. When `path`
    /// is given as well, the segment is looked up in it by identity (see
    /// [`Path::identity_index`]) and the message names its index.
    ///
    /// ```
    /// use easel::{Path, PathError};
    ///
    /// let mut path = Path::new((0., 0.));
    /// path.line_to((10., 10.));
    /// let seg = path.at(0).unwrap();
    /// let err = PathError::new(Some("bad stroke"), Some(seg), Some(&path));
    /// assert_eq!(
    ///     err.to_string(),
    ///     "bad stroke: Invalid path segment at index 0: Line from (0, 0) to (10, 10)"
    /// );
    /// ```
    pub fn new(message: Option<&str>, segment: Option<&Segment>, path: Option<&Path>) -> Self {
        let index = match (segment, path) {
            (Some(seg), Some(path)) => path.identity_index(seg),
            _ => None,
        };
        PathError {
            kind: PathErrorKind::Custom,
            message: render(message, segment, index),
            segment: segment.cloned(),
            index,
        }
    }

    pub(crate) fn missing_control_point(segment: &Segment, index: usize) -> Self {
        let message = match segment.kind.control_point_count() {
            1 => "Missing control point in quadratic segment.",
            _ => "Missing control points in bezier segment.",
        };
        PathError {
            kind: PathErrorKind::MissingControlPoint,
            message: render(Some(message), Some(segment), Some(index)),
            segment: Some(segment.clone()),
            index: Some(index),
        }
    }

    pub(crate) fn unknown_segment(tag: &str) -> Self {
        PathError {
            kind: PathErrorKind::UnknownSegment,
            message: format!("Invalid segment type: {tag}"),
            segment: None,
            index: None,
        }
    }

    pub(crate) fn index_out_of_range(index: isize, len: usize) -> Self {
        PathError {
            kind: PathErrorKind::IndexOutOfRange,
            message: format!("Index {index} is out of range for a path of {len} segments"),
            segment: None,
            index: None,
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> PathErrorKind {
        self.kind
    }

    /// The full message, as displayed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending segment, if one was given.
    pub fn segment(&self) -> Option<&Segment> {
        self.segment.as_ref()
    }

    /// The index of the offending segment within its path, if known.
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

fn render(message: Option<&str>, segment: Option<&Segment>, index: Option<usize>) -> String {
    let Some(segment) = segment else {
        return message.unwrap_or_default().to_owned();
    };
    let prefix = match message {
        Some(message) if !message.is_empty() => format!("{message}: "),
        _ => String::new(),
    };
    match index {
        Some(index) => format!("{prefix}Invalid path segment at index {index}: {segment}"),
        None => format!("{prefix}Invalid path segment: {segment}"),
    }
}

// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editable drawing paths.

use core::cmp::Ordering;
use core::fmt;
use core::iter::Enumerate;
use core::ops::{Index, Range};
use core::slice;

use crate::common::{clamp_index, deep_clone, element_index, last_index_from};
use crate::{PathError, Point, Segment};

/// An ordered, editable sequence of [`Segment`]s with a drawing cursor.
///
/// A path starts at a point and grows by appending segments that begin
/// where the previous one ended. Disjoint sub-paths live in the same
/// sequence, separated by pen lifts (see [`Path::move_to`]).
///
/// Besides the builder methods, a path offers the editing vocabulary of an
/// ordered collection: `push`/`pop`, `shift`/`unshift`, `splice`, `slice`,
/// `sort_by`, `reverse` and non-mutating `to_*` counterparts that return a
/// new path. Indices taken as `isize` count from the end when negative.
///
/// # Cursor
///
/// The path tracks a `start` and an `end` point. The builder methods,
/// [`push`](Path::push) and [`pop`](Path::pop) keep `end` equal to the `to`
/// point of the last segment (or `start` when empty). Edits at the front
/// or in the middle ([`shift`](Path::shift), [`unshift`](Path::unshift),
/// [`splice`](Path::splice), [`sort_by`](Path::sort_by)) leave the cursor
/// where it was.
///
/// # Ownership
///
/// Whole-sequence reads such as [`segments`](Path::segments) return owned
/// copies that can be changed freely. Single-element access through
/// [`at`](Path::at) and [`at_mut`](Path::at_mut) borrows the stored
/// segment, so a change made through `at_mut` is seen by every later read.
///
/// ```
/// use easel::{Path, SegmentKind};
///
/// let mut path = Path::new((0., 0.));
/// path.line_to((10., 10.))
///     .quadratic_to((20., 20.), (30., 30.))
///     .bezier_to((40., 40.), (50., 50.), (60., 60.));
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.at(1).unwrap().kind, SegmentKind::Quadratic);
/// assert_eq!(path.end(), path.at(-1).unwrap().to);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    start: Point,
    end: Point,
    segments: Vec<Segment>,
    closed: bool,
}

impl Path {
    /// Create an empty, open path with its cursor at `start`.
    pub fn new(start: impl Into<Point>) -> Path {
        let start = start.into();
        Path {
            start,
            end: start,
            segments: Vec::new(),
            closed: false,
        }
    }

    /// Create a path from copies of `segments`.
    ///
    /// The path starts at the first segment's `from` and its cursor sits at
    /// the last segment's `to`. Returns `None` if `segments` is empty, since
    /// there is then no starting point.
    pub fn from_segments(closed: bool, segments: &[Segment]) -> Option<Path> {
        let (first, last) = (segments.first()?, segments.last()?);
        Some(Path {
            start: first.from,
            end: last.to,
            segments: segments.iter().map(deep_clone).collect(),
            closed,
        })
    }

    /// The point the path starts from.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The current cursor position.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether the path is drawn as a closed contour.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn append(&mut self, seg: Segment) -> &mut Self {
        self.end = seg.to;
        self.segments.push(seg);
        self
    }

    /// Lift the pen and move the cursor to `p`, starting a new sub-path.
    pub fn move_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.append(Segment::pen_lift(self.end, p))
    }

    /// Draw a straight line from the cursor to `p`.
    pub fn line_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.append(Segment::line(self.end, p))
    }

    /// Draw a quadratic curve from the cursor to `p`, shaped by `cp`.
    pub fn quadratic_to(&mut self, p: impl Into<Point>, cp: impl Into<Point>) -> &mut Self {
        self.append(Segment::quadratic(self.end, p, cp))
    }

    /// Draw a cubic curve from the cursor to `p`, shaped by `cp1` and `cp2`.
    pub fn bezier_to(
        &mut self,
        p: impl Into<Point>,
        cp1: impl Into<Point>,
        cp2: impl Into<Point>,
    ) -> &mut Self {
        self.append(Segment::bezier(self.end, p, cp1, cp2))
    }

    /// Mark the path as a closed contour.
    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    /// Mark the path as open.
    pub fn open(&mut self) -> &mut Self {
        self.closed = false;
        self
    }

    /// Remove every segment and move the cursor back to `start`.
    pub fn clear(&mut self) -> &mut Self {
        self.segments.clear();
        self.end = self.start;
        self
    }

    /// The number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// An owned copy of all segments.
    ///
    /// Each call returns a fresh copy; changing it does not affect the path
    /// or any other copy.
    pub fn segments(&self) -> Vec<Segment> {
        self.segments.iter().map(deep_clone).collect()
    }

    /// Borrow the segments.
    #[inline]
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// The segment at `index`; a negative index counts back from the end.
    pub fn at(&self, index: isize) -> Option<&Segment> {
        element_index(index, self.len()).map(|ix| &self.segments[ix])
    }

    /// Mutable access to the segment at `index`.
    ///
    /// Changing the segment's end points this way does not update the
    /// path's cursor.
    pub fn at_mut(&mut self, index: isize) -> Option<&mut Segment> {
        let ix = element_index(index, self.len())?;
        self.segments.get_mut(ix)
    }

    /// Append a segment and return the new length.
    ///
    /// The cursor moves to the segment's `to` point.
    pub fn push(&mut self, seg: Segment) -> usize {
        self.append(seg);
        self.len()
    }

    /// Append several segments and return the new length.
    pub fn push_all(&mut self, segments: impl IntoIterator<Item = Segment>) -> usize {
        for seg in segments {
            self.append(seg);
        }
        self.len()
    }

    /// Remove the last segment and return it.
    ///
    /// The cursor moves back to the removed segment's `from` point.
    pub fn pop(&mut self) -> Option<Segment> {
        let popped = self.segments.pop()?;
        self.end = popped.from;
        Some(popped)
    }

    /// Remove the first segment and return it.
    ///
    /// `start` is not updated.
    pub fn shift(&mut self) -> Option<Segment> {
        if self.segments.is_empty() {
            return None;
        }
        Some(self.segments.remove(0))
    }

    /// Insert segments, in order, at the front and return the new length.
    pub fn unshift(&mut self, segments: impl IntoIterator<Item = Segment>) -> usize {
        let tail = core::mem::replace(&mut self.segments, segments.into_iter().collect());
        self.segments.extend(tail);
        self.len()
    }

    /// Remove `delete_count` segments starting at `start`, insert
    /// `replacement` in their place and return the removed segments.
    ///
    /// A negative `start` counts from the end; both `start` and
    /// `delete_count` are clamped to the path. The cursor is not updated.
    ///
    /// ```
    /// use easel::{Path, Segment, SegmentKind};
    ///
    /// let mut path = Path::new((0., 0.));
    /// path.line_to((1., 0.)).line_to((1., 1.)).line_to((0., 1.));
    /// let removed = path.splice(-2, 5, [Segment::line((1., 0.), (0., 1.))]);
    /// assert_eq!(removed.len(), 2);
    /// assert_eq!(path.len(), 2);
    /// ```
    pub fn splice(
        &mut self,
        start: isize,
        delete_count: usize,
        replacement: impl IntoIterator<Item = Segment>,
    ) -> Vec<Segment> {
        let len = self.len();
        let start = clamp_index(start, len);
        let end = start + delete_count.min(len - start);
        self.segments.splice(start..end, replacement).collect()
    }

    /// A copy of the path with a [`splice`](Path::splice) applied.
    #[must_use]
    pub fn to_spliced(
        &self,
        start: isize,
        delete_count: usize,
        replacement: impl IntoIterator<Item = Segment>,
    ) -> Path {
        let mut path = self.clone();
        path.splice(start, delete_count, replacement);
        path
    }

    /// Copies of the segments from `start` up to, not including, `end`.
    ///
    /// Negative bounds count from the end; `None` for `end` means the end of
    /// the path.
    pub fn slice(&self, start: isize, end: Option<isize>) -> Vec<Segment> {
        let len = self.len();
        let start = clamp_index(start, len);
        let end = end.map_or(len, |end| clamp_index(end, len));
        if start >= end {
            return Vec::new();
        }
        self.segments[start..end].to_vec()
    }

    /// Reverse the path in place.
    ///
    /// The order of the segments is reversed, every segment is traversed
    /// backwards, and `start` and `end` trade places.
    pub fn reverse(&mut self) -> &mut Self {
        core::mem::swap(&mut self.start, &mut self.end);
        self.segments.reverse();
        for seg in &mut self.segments {
            seg.reverse();
        }
        self
    }

    /// A reversed copy of the path.
    #[must_use]
    pub fn to_reversed(&self) -> Path {
        let mut path = self.clone();
        path.reverse();
        path
    }

    /// Sort the segments with a comparator. The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&Segment, &Segment) -> Ordering,
    {
        self.segments.sort_by(compare);
        self
    }

    /// A copy of the path with its segments sorted.
    #[must_use]
    pub fn to_sorted_by<F>(&self, compare: F) -> Path
    where
        F: FnMut(&Segment, &Segment) -> Ordering,
    {
        let mut path = self.clone();
        path.sort_by(compare);
        path
    }

    /// A copy of the path with the segment at `index` replaced by `seg`.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexOutOfRange`](crate::PathErrorKind::IndexOutOfRange)
    /// error if `index` does not address a segment.
    pub fn with(&self, index: isize, seg: Segment) -> Result<Path, PathError> {
        let len = self.len();
        let ix = element_index(index, len)
            .ok_or_else(|| PathError::index_out_of_range(index, len))?;
        let mut path = self.clone();
        path.segments[ix] = seg;
        Ok(path)
    }

    /// A new path with the segments of each item appended to this one's.
    ///
    /// Items can be paths, slices or vectors of segments. The result keeps
    /// this path's `start` and closed flag.
    ///
    /// ```
    /// use easel::{Path, Segment};
    ///
    /// let mut a = Path::new((0., 0.));
    /// a.line_to((1., 0.));
    /// let mut b = Path::new((1., 0.));
    /// b.line_to((1., 1.));
    ///
    /// let joined = a.concat([&b, &b]);
    /// assert_eq!(joined.len(), 3);
    /// let more = joined.concat([vec![Segment::line((1., 1.), (0., 0.))]]);
    /// assert_eq!(more.end(), (0., 0.).into());
    /// ```
    #[must_use]
    pub fn concat<I>(&self, items: I) -> Path
    where
        I: IntoIterator,
        I::Item: AsRef<[Segment]>,
    {
        let mut path = self.clone();
        for item in items {
            path.push_all(item.as_ref().iter().cloned());
        }
        path
    }

    /// The index of the first segment equal to `seg`, searching forward
    /// from `from_index` (default 0, negative counts from the end).
    pub fn index_of(&self, seg: &Segment, from_index: Option<isize>) -> Option<usize> {
        let from = from_index.map_or(0, |ix| clamp_index(ix, self.len()));
        self.segments[from..]
            .iter()
            .position(|s| s == seg)
            .map(|ix| ix + from)
    }

    /// The index of the last segment equal to `seg`, searching backward
    /// from `from_index` (default: the last segment).
    pub fn last_index_of(&self, seg: &Segment, from_index: Option<isize>) -> Option<usize> {
        let from = last_index_from(from_index.unwrap_or(-1), self.len())?;
        self.segments[..=from].iter().rposition(|s| s == seg)
    }

    /// Returns `true` if a segment equal to `seg` is present at or after
    /// `from_index`.
    pub fn includes(&self, seg: &Segment, from_index: Option<isize>) -> bool {
        self.index_of(seg, from_index).is_some()
    }

    /// The index of `seg` if it is a reference to a segment stored in this
    /// path.
    ///
    /// Unlike [`index_of`](Path::index_of), an equal segment stored
    /// elsewhere is not found.
    pub fn identity_index(&self, seg: &Segment) -> Option<usize> {
        self.segments.iter().position(|s| core::ptr::eq(s, seg))
    }

    /// The first segment satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&Segment>
    where
        P: FnMut(&Segment, usize, &[Segment]) -> bool,
    {
        self.entries()
            .find(|&(ix, seg)| predicate(seg, ix, &self.segments))
            .map(|(_, seg)| seg)
    }

    /// The index of the first segment satisfying `predicate`.
    pub fn find_index<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Segment, usize, &[Segment]) -> bool,
    {
        self.entries()
            .find(|&(ix, seg)| predicate(seg, ix, &self.segments))
            .map(|(ix, _)| ix)
    }

    /// The last segment satisfying `predicate`, scanning backward.
    pub fn find_last<P>(&self, mut predicate: P) -> Option<&Segment>
    where
        P: FnMut(&Segment, usize, &[Segment]) -> bool,
    {
        self.entries()
            .rev()
            .find(|&(ix, seg)| predicate(seg, ix, &self.segments))
            .map(|(_, seg)| seg)
    }

    /// The index of the last segment satisfying `predicate`.
    pub fn find_last_index<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Segment, usize, &[Segment]) -> bool,
    {
        self.entries()
            .rev()
            .find(|&(ix, seg)| predicate(seg, ix, &self.segments))
            .map(|(ix, _)| ix)
    }

    /// All segments satisfying `predicate`, in order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&Segment>
    where
        P: FnMut(&Segment, usize, &[Segment]) -> bool,
    {
        self.entries()
            .filter(|&(ix, seg)| predicate(seg, ix, &self.segments))
            .map(|(_, seg)| seg)
            .collect()
    }

    /// Apply `f` to every segment and collect the results.
    pub fn map<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&Segment, usize, &[Segment]) -> U,
    {
        self.entries()
            .map(|(ix, seg)| f(seg, ix, &self.segments))
            .collect()
    }

    /// Combine the segments left to right, starting from a copy of the
    /// first one. Returns `None` for an empty path.
    pub fn reduce<F>(&self, mut f: F) -> Option<Segment>
    where
        F: FnMut(Segment, &Segment, usize, &[Segment]) -> Segment,
    {
        let (first, _) = self.segments.split_first()?;
        Some(
            self.entries()
                .skip(1)
                .fold(first.clone(), |acc, (ix, seg)| f(acc, seg, ix, &self.segments)),
        )
    }

    /// Combine the segments left to right, starting from `init`.
    pub fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &Segment, usize, &[Segment]) -> B,
    {
        self.entries()
            .fold(init, |acc, (ix, seg)| f(acc, seg, ix, &self.segments))
    }

    /// Returns `true` if every segment satisfies `predicate`.
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Segment, usize, &[Segment]) -> bool,
    {
        self.entries()
            .all(|(ix, seg)| predicate(seg, ix, &self.segments))
    }

    /// Returns `true` if any segment satisfies `predicate`.
    pub fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Segment, usize, &[Segment]) -> bool,
    {
        self.entries()
            .any(|(ix, seg)| predicate(seg, ix, &self.segments))
    }

    /// Call `f` on every segment in order.
    pub fn for_each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Segment, usize, &[Segment]),
    {
        for (ix, seg) in self.entries() {
            f(seg, ix, &self.segments);
        }
        self
    }

    /// Iterate over `(index, segment)` pairs.
    pub fn entries(&self) -> Enumerate<slice::Iter<'_, Segment>> {
        self.segments.iter().enumerate()
    }

    /// Iterate over the segment indices.
    pub fn keys(&self) -> Range<usize> {
        0..self.len()
    }

    /// Iterate over the segments.
    pub fn values(&self) -> slice::Iter<'_, Segment> {
        self.iter()
    }
}

impl Index<usize> for Path {
    type Output = Segment;

    fn index(&self, index: usize) -> &Segment {
        &self.segments[index]
    }
}

impl AsRef<[Segment]> for Path {
    fn as_ref(&self) -> &[Segment] {
        &self.segments
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl Extend<Segment> for Path {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.segments.len();
        write!(f, "Path with {n} segment{}:", if n == 1 { "" } else { "s" })?;
        for (ix, seg) in self.entries() {
            write!(f, "\n{}. {seg}", ix + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::SegmentKind;

    fn sample() -> Path {
        let mut path = Path::new((0., 0.));
        path.line_to((10., 10.))
            .quadratic_to((20., 20.), (30., 30.))
            .bezier_to((40., 40.), (50., 50.), (60., 60.));
        path
    }

    fn assert_cursor_coherent(path: &Path) {
        let expected = path.at(-1).map_or(path.start(), |seg| seg.to);
        assert_eq!(path.end(), expected, "cursor drifted in {path}");
    }

    fn random_point(rng: &mut StdRng) -> Point {
        Point::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0))
    }

    #[test]
    fn builds_segments() {
        let path = sample();
        assert_eq!(path.len(), 3);

        let s0 = path.at(0).unwrap();
        assert_eq!(s0.kind, SegmentKind::Line);
        assert!(s0.drawn);
        assert_eq!((s0.from, s0.to), (Point::new(0., 0.), Point::new(10., 10.)));

        let s1 = path.at(1).unwrap();
        assert_eq!(s1.kind, SegmentKind::Quadratic);
        assert_eq!((s1.from, s1.to), (Point::new(10., 10.), Point::new(20., 20.)));
        assert_eq!(s1.cp1, Some(Point::new(30., 30.)));

        let s2 = path.at(2).unwrap();
        assert_eq!(s2.kind, SegmentKind::Bezier);
        assert_eq!((s2.from, s2.to), (Point::new(20., 20.), Point::new(40., 40.)));
        assert_eq!(s2.control_points().as_slice(), &[Point::new(50., 50.), Point::new(60., 60.)]);

        assert_eq!(path.end(), Point::new(40., 40.));
        assert!(!path.is_closed());
    }

    #[test]
    fn move_to_lifts_pen() {
        let mut path = Path::new((0., 0.));
        path.line_to((1., 0.)).move_to((5., 5.)).line_to((6., 5.));
        let lift = path.at(1).unwrap();
        assert!(lift.is_pen_lift());
        assert_eq!(lift.from, Point::new(1., 0.));
        assert_eq!(path.at(2).unwrap().from, Point::new(5., 5.));
    }

    #[test]
    fn arguments_are_copied() {
        let mut caller = Point::new(10., 10.);
        let mut path = Path::new(caller);
        path.line_to(caller);
        caller.x = 20.;
        assert_eq!(path.start().x, 10.);
        assert_eq!(path.at(0).unwrap().to.x, 10.);
        assert_eq!(caller.x, 20.);
    }

    #[test]
    fn close_and_open() {
        let mut path = sample();
        path.close();
        assert!(path.is_closed());
        assert_eq!(path.len(), 3);
        path.open();
        assert!(!path.is_closed());
    }

    #[test]
    fn cursor_follows_random_builds() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let mut path = Path::new(random_point(&mut rng));
            for _ in 0..40 {
                match rng.random_range(0..6) {
                    0 => {
                        path.move_to(random_point(&mut rng));
                    }
                    1 => {
                        path.line_to(random_point(&mut rng));
                    }
                    2 => {
                        let (p, cp) = (random_point(&mut rng), random_point(&mut rng));
                        path.quadratic_to(p, cp);
                    }
                    3 => {
                        let p = random_point(&mut rng);
                        let (cp1, cp2) = (random_point(&mut rng), random_point(&mut rng));
                        path.bezier_to(p, cp1, cp2);
                    }
                    4 => {
                        path.push(Segment::line(path.end(), random_point(&mut rng)));
                    }
                    _ => {
                        path.pop();
                    }
                }
                assert_cursor_coherent(&path);
            }
        }
    }

    #[test]
    fn push_and_pop() {
        let mut path = Path::new((0., 0.));
        for i in 0..5 {
            let i = f64::from(i);
            let len = path.push(Segment::line((i * 10., i * 10.), ((i + 1.) * 10., (i + 1.) * 10.)));
            assert_eq!(path.end(), Point::new((i + 1.) * 10., (i + 1.) * 10.));
            assert_eq!(len, path.len());
        }
        let popped = path.pop().unwrap();
        assert_eq!(popped.to, Point::new(50., 50.));
        assert_eq!(path.end(), Point::new(40., 40.));

        let mut empty = Path::new((3., 3.));
        assert_eq!(empty.pop(), None);
        assert_eq!(empty.end(), Point::new(3., 3.));
    }

    #[test]
    fn push_all_and_extend() {
        let mut path = Path::new((0., 0.));
        assert_eq!(path.push_all(Vec::new()), 0);
        assert_eq!(path.end(), Point::ZERO);
        let n = path.push_all([
            Segment::line((0., 0.), (1., 0.)),
            Segment::line((1., 0.), (2., 0.)),
        ]);
        assert_eq!(n, 2);
        assert_eq!(path.end(), Point::new(2., 0.));
        path.extend([Segment::line((2., 0.), (3., 0.))]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.end(), Point::new(3., 0.));
    }

    #[test]
    fn shift_and_unshift_keep_cursor() {
        let mut path = sample();
        let first = path.shift().unwrap();
        assert_eq!(first.kind, SegmentKind::Line);
        assert_eq!(path.len(), 2);
        assert_eq!(path.start(), Point::ZERO);

        let n = path.unshift([first.clone(), Segment::pen_lift((0., 0.), (0., 0.))]);
        assert_eq!(n, 4);
        assert_eq!(path.at(0), Some(&first));
        assert!(path.at(1).unwrap().is_pen_lift());
        assert_eq!(path.end(), Point::new(40., 40.));

        assert_eq!(Path::new((0., 0.)).shift(), None);
    }

    #[test]
    fn splice_replaces_middle() {
        let mut path = sample();
        let replacement = Segment::line((10., 10.), (20., 20.));
        let removed = path.splice(1, 1, [replacement.clone()]);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].kind, SegmentKind::Quadratic);
        assert_eq!(removed[0].cp1, Some(Point::new(30., 30.)));
        assert_eq!(path.len(), 3);
        assert_eq!(path.at(1), Some(&replacement));
    }

    #[test]
    fn splice_clamps() {
        let mut path = sample();
        assert!(path.splice(10, 2, []).is_empty());
        assert_eq!(path.len(), 3);

        let removed = path.splice(-1, 99, []);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].kind, SegmentKind::Bezier);
        // The cursor is not repaired by splice.
        assert_eq!(path.end(), Point::new(40., 40.));

        let removed = path.splice(-10, 1, []);
        assert_eq!(removed[0].kind, SegmentKind::Line);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn to_spliced_leaves_receiver() {
        let path = sample();
        let spliced = path.to_spliced(0, 2, []);
        assert_eq!(spliced.len(), 1);
        assert_eq!(spliced.at(0).unwrap().kind, SegmentKind::Bezier);
        assert_eq!(path, sample());
    }

    #[test]
    fn slice_with_negative_indices() {
        let path = sample();
        assert_eq!(path.slice(0, None).len(), 3);
        assert_eq!(path.slice(1, Some(2)), vec![path[1].clone()]);
        assert_eq!(path.slice(-2, None), path.as_slice()[1..].to_vec());
        assert_eq!(path.slice(0, Some(-1)).len(), 2);
        assert!(path.slice(2, Some(1)).is_empty());
        assert!(path.slice(5, None).is_empty());
    }

    #[test]
    fn reverse_in_place() {
        let mut path = sample();
        let original = path.clone();
        path.reverse();

        assert_eq!(path.len(), 3);
        assert_eq!(path.start(), original.end());
        assert_eq!(path.end(), original.start());
        assert_eq!(path.at(0).unwrap().from.x, 40.);
        assert_eq!(path.at(1).unwrap().from.x, 20.);
        assert_eq!(path.at(2).unwrap().from.x, 10.);
        for (ix, seg) in original.entries() {
            let rev = &path[original.len() - ix - 1];
            assert_eq!(rev.from, seg.to);
            assert_eq!(rev.to, seg.from);
            assert_eq!(rev.kind, seg.kind);
        }
    }

    #[test]
    fn to_reversed_does_not_mutate() {
        let path = sample();
        let before = path.clone();
        let reversed = path.to_reversed();
        assert_eq!(path, before);
        assert_ne!(reversed.segments(), path.segments());
        assert_eq!(reversed.at(0).unwrap().from.x, 40.);
        assert_eq!(path.at(0).unwrap().from.x, 0.);
    }

    #[test]
    fn reverse_is_an_involution() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut path = Path::new(random_point(&mut rng));
            for _ in 0..rng.random_range(0..12) {
                let p = random_point(&mut rng);
                if rng.random_bool(0.5) {
                    path.line_to(p);
                } else {
                    let (cp1, cp2) = (random_point(&mut rng), random_point(&mut rng));
                    path.bezier_to(p, cp1, cp2);
                }
            }
            let mut twice = path.clone();
            twice.reverse().reverse();
            assert_eq!(twice, path);
        }
    }

    #[test]
    fn sort_keeps_geometry() {
        let mut path = sample();
        path.sort_by(|a, b| b.to.x.total_cmp(&a.to.x));
        assert_eq!(path.at(0).unwrap().kind, SegmentKind::Bezier);
        assert_eq!(path.at(2).unwrap().kind, SegmentKind::Line);
        assert_eq!(path.at(0).unwrap().from, Point::new(20., 20.));
        assert_eq!(path.end(), Point::new(40., 40.));

        let original = sample();
        let sorted = original.to_sorted_by(|a, b| b.from.x.total_cmp(&a.from.x));
        assert_eq!(sorted.at(0).unwrap().from.x, 20.);
        assert_eq!(original, sample());
    }

    #[test]
    fn with_replaces_one() {
        let path = sample();
        let seg = Segment::pen_lift((20., 20.), (40., 40.));
        let replaced = path.with(-1, seg.clone()).unwrap();
        assert_eq!(replaced.at(2), Some(&seg));
        assert_eq!(path.at(2).unwrap().kind, SegmentKind::Bezier);

        let err = path.with(3, seg).unwrap_err();
        assert_eq!(err.kind(), crate::PathErrorKind::IndexOutOfRange);
    }

    #[test]
    fn clone_shares_nothing() {
        let path = sample();
        let mut copy = path.clone();
        copy.at_mut(0).unwrap().from.x = 99.;
        copy.line_to((0., 0.)).close();
        assert_eq!(path.at(0).unwrap().from.x, 0.);
        assert_eq!(path.len(), 3);
        assert!(!path.is_closed());
    }

    #[test]
    fn clear_resets_cursor() {
        let mut path = sample();
        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.end(), path.start());
    }

    #[test]
    fn from_segments_copies() {
        let segs = sample().segments();
        let path = Path::from_segments(true, &segs).unwrap();
        assert!(path.is_closed());
        assert_eq!(path.start(), Point::ZERO);
        assert_eq!(path.end(), Point::new(40., 40.));
        assert_eq!(path.as_slice(), segs.as_slice());
        assert!(!core::ptr::eq(&path[0], &segs[0]));
        assert!(Path::from_segments(false, &[]).is_none());
    }

    #[test]
    fn concat_appends() {
        let path = sample();
        let mut other = Path::new((40., 40.));
        other.line_to((0., 0.));
        let joined = path.concat([&other]);
        assert_eq!(joined.len(), 4);
        assert_eq!(joined.start(), path.start());
        assert_eq!(joined.end(), Point::ZERO);
        assert_eq!(path.len(), 3);

        let loose = [Segment::pen_lift((0., 0.), (5., 5.))];
        let joined = joined.concat([&loose[..], other.as_slice()]);
        assert_eq!(joined.len(), 6);
        assert!(joined.at(4).unwrap().is_pen_lift());
    }

    #[test]
    fn segments_reads_are_independent() {
        let mut path = Path::new((0., 0.));
        path.line_to((10., 10.))
            .bezier_to((20., 20.), (30., 30.), (40., 40.));
        let mut first = path.segments();
        let second = path.segments();
        assert_eq!(first, second);
        assert_eq!(first[0], path[0]);

        first[0].from.x = 200.;
        assert_ne!(path.at(0).unwrap().from.x, first[0].from.x);
        assert_eq!(second[0].from.x, 0.);

        path.at_mut(0).unwrap().from.x = 100.;
        assert_eq!(path.at(0).unwrap().from.x, 100.);
        assert_eq!(first[0].from.x, 200.);
    }

    #[test]
    fn searches() {
        let mut path = sample();
        let line = path[0].clone();
        path.push(line.clone());

        assert_eq!(path.index_of(&line, None), Some(0));
        assert_eq!(path.index_of(&line, Some(1)), Some(3));
        assert_eq!(path.index_of(&line, Some(-1)), Some(3));
        assert_eq!(path.last_index_of(&line, None), Some(3));
        assert_eq!(path.last_index_of(&line, Some(2)), Some(0));
        assert_eq!(path.last_index_of(&line, Some(-5)), None);
        assert!(path.includes(&line, None));
        assert!(!path.includes(&Segment::line((1., 2.), (3., 4.)), None));

        assert_eq!(path.identity_index(&path[3]), Some(3));
        assert_eq!(path.identity_index(&line), None);
    }

    #[test]
    fn find_family() {
        let mut path = sample();
        path.line_to((0., 0.));
        let is_line = |seg: &Segment, _: usize, _: &[Segment]| seg.kind == SegmentKind::Line;

        assert_eq!(path.find_index(is_line), Some(0));
        assert_eq!(path.find_last_index(is_line), Some(3));
        assert_eq!(path.find(is_line).unwrap().to, Point::new(10., 10.));
        assert_eq!(path.find_last(is_line).unwrap().to, Point::ZERO);
        assert_eq!(path.find_index(|_, ix, all| ix == all.len()), None);
        assert_eq!(path.filter(is_line).len(), 2);
    }

    #[test]
    fn callbacks_see_index_and_sequence() {
        let path = sample();
        let mut seen = Vec::new();
        path.for_each(|seg, ix, all| {
            assert_eq!(&all[ix], seg);
            seen.push(ix);
        });
        assert_eq!(seen, vec![0, 1, 2]);

        let kinds = path.map(|seg, _, _| seg.kind);
        assert_eq!(
            kinds,
            vec![SegmentKind::Line, SegmentKind::Quadratic, SegmentKind::Bezier]
        );
        assert!(path.every(|seg, _, _| seg.drawn));
        assert!(path.some(|seg, _, _| seg.kind == SegmentKind::Bezier));
        assert!(!path.some(|seg, _, _| seg.is_pen_lift()));
    }

    #[test]
    fn reduce_and_fold() {
        let path = sample();
        let spanning = path
            .reduce(|acc, seg, _, _| Segment::line(acc.from, seg.to))
            .unwrap();
        assert_eq!(spanning, Segment::line((0., 0.), (40., 40.)));
        assert_eq!(Path::new((0., 0.)).reduce(|acc, _, _, _| acc), None);

        let indices = path.fold(0, |acc, _, ix, _| acc + ix);
        assert_eq!(indices, 3);
    }

    #[test]
    fn iteration() {
        let path = sample();
        assert_eq!(path.keys().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(path.values().count(), 3);
        let entries: Vec<_> = path.entries().map(|(ix, seg)| (ix, seg.kind)).collect();
        assert_eq!(entries[2], (2, SegmentKind::Bezier));
        assert_eq!((&path).into_iter().count(), 3);
    }

    #[test]
    fn display() {
        let path = sample();
        assert_eq!(
            path.to_string(),
            "Path with 3 segments:\n\
             1. Line from (0, 0) to (10, 10)\n\
             2. Quadratic curve from (10, 10) to (20, 20) with control point (30, 30)\n\
             3. Bezier curve from (20, 20) to (40, 40) with control points (50, 50) and (60, 60)"
        );
        let mut single = Path::new((0., 0.));
        single.move_to((1., 1.));
        assert_eq!(
            single.to_string(),
            "Path with 1 segment:\n1. Starting new sub-path at (1, 1)"
        );
    }
}

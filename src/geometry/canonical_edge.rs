// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geometry::{Point2, Vector2};
use crate::numeric::scalar::Scalar;

/// An undirected segment in a form independent of endpoint order.
///
/// The lexicographically smaller endpoint (x first, then y) becomes the
/// origin and the other endpoint is stored as an offset from it, so
/// `CanonicalEdge::new(p, q) == CanonicalEdge::new(q, p)` for any pair.
/// Comparison and hashing are bit-exact over the four stored scalars in the
/// order (origin.x, origin.y, offset.x, offset.y), which gives a strict
/// total order usable as a sorted-map key.
///
/// Two identical endpoints produce a zero-length edge; it participates in
/// counting like any other edge.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalEdge<T: Scalar> {
    pub origin: Point2<T>,
    pub offset: Vector2<T>,
}

impl<T: Scalar> CanonicalEdge<T> {
    pub fn new(p1: Point2<T>, p2: Point2<T>) -> Self {
        let (origin, other) = match p1.lex_cmp(&p2) {
            Ordering::Greater => (p2, p1),
            _ => (p1, p2),
        };
        Self {
            origin,
            offset: other - origin,
        }
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> T {
        self.offset.norm()
    }

    /// Both endpoints, origin first.
    pub fn endpoints(&self) -> (Point2<T>, Point2<T>) {
        (self.origin, self.origin + self.offset)
    }
}

impl<T: Scalar> Ord for CanonicalEdge<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.origin
            .x
            .total_cmp(&other.origin.x)
            .then_with(|| self.origin.y.total_cmp(&other.origin.y))
            .then_with(|| self.offset.x.total_cmp(&other.offset.x))
            .then_with(|| self.offset.y.total_cmp(&other.offset.y))
    }
}

impl<T: Scalar> PartialOrd for CanonicalEdge<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Scalar> PartialEq for CanonicalEdge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Scalar> Eq for CanonicalEdge<T> {}

impl<T: Scalar> Hash for CanonicalEdge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.origin.x.canonical_bits());
        state.write_u64(self.origin.y.canonical_bits());
        state.write_u64(self.offset.x.canonical_bits());
        state.write_u64(self.offset.y.canonical_bits());
    }
}

impl<T: Scalar> fmt::Display for CanonicalEdge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.endpoints();
        write!(f, "({}, {}), ({}, {})", a.x, a.y, b.x, b.y)
    }
}

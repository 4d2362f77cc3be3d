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

use crate::geometry::{CanonicalEdge, Point2, Rect2};
use crate::numeric::scalar::Scalar;

/// Accepts or rejects whole triangles by containment and edge length.
///
/// Pruning on raw edge length instead of circumradius is a cheap
/// approximation of an alpha shape; it removes the long bridge triangles a
/// triangulation produces over sparse areas. A triangle is accepted only as
/// a whole: one vertex outside the region, or one edge longer than alpha,
/// rejects all three edges.
#[derive(Debug, Clone, Copy)]
pub struct AlphaFilter<T: Scalar> {
    alpha: T,
    region: Rect2<T>,
}

impl<T: Scalar> AlphaFilter<T> {
    pub fn new(alpha: T, region: Rect2<T>) -> Self {
        Self { alpha, region }
    }

    pub fn accepts(&self, tri: &[Point2<T>; 3]) -> bool {
        let [p1, p2, p3] = *tri;
        if !(self.region.contains(&p1) && self.region.contains(&p2) && self.region.contains(&p3)) {
            return false;
        }
        CanonicalEdge::new(p1, p2).length() <= self.alpha
            && CanonicalEdge::new(p2, p3).length() <= self.alpha
            && CanonicalEdge::new(p1, p3).length() <= self.alpha
    }
}

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

use std::collections::BTreeMap;

use crate::geometry::{CanonicalEdge, Point2};
use crate::numeric::scalar::Scalar;

/// Count how many triangles reference each canonical edge.
///
/// In a planar triangulation an edge shared by two triangles counts 2 and an
/// edge on the rim of the triangulated area counts 1. Counts above 2 are not
/// produced by a well-formed triangulation but are not rejected either; they
/// classify as interior like any count above 1. With `verbose` set, every
/// edge is printed before it is counted.
pub fn count_edges<T: Scalar>(
    triangles: impl IntoIterator<Item = [Point2<T>; 3]>,
    verbose: bool,
) -> BTreeMap<CanonicalEdge<T>, usize> {
    let mut counts = BTreeMap::new();
    for [p1, p2, p3] in triangles {
        for edge in [
            CanonicalEdge::new(p1, p2),
            CanonicalEdge::new(p2, p3),
            CanonicalEdge::new(p1, p3),
        ] {
            if verbose {
                println!("Edge: {edge}");
            }
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    counts
}

/// The outline and the interior skeleton of the accepted triangle set,
/// both in canonical edge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgePartition<T: Scalar> {
    /// Edges referenced by exactly one accepted triangle.
    pub boundary: Vec<CanonicalEdge<T>>,
    /// Edges referenced by two or more accepted triangles.
    pub interior: Vec<CanonicalEdge<T>>,
}

/// Split a multiplicity map into boundary and interior. Every key lands in
/// exactly one of the two sets.
pub fn partition_edges<T: Scalar>(
    counts: &BTreeMap<CanonicalEdge<T>, usize>,
) -> EdgePartition<T> {
    let mut partition = EdgePartition::default();
    for (edge, &count) in counts {
        if count == 1 {
            partition.boundary.push(*edge);
        } else {
            partition.interior.push(*edge);
        }
    }
    partition
}

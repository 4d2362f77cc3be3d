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

use crate::geometry::{Point2, Rect2};
use crate::kernel::{incircle, orient2d};
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::TriangulationProvider;

pub const SQRT_3: f64 = 1.7320508075688772;

/// Number of synthetic super-triangle vertices at the front of the point list.
const SUPER: usize = 3;

/// Undirected edge between point indices, smaller index first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    fn touches_super(&self) -> bool {
        self.0 < SUPER || self.1 < SUPER || self.2 < SUPER
    }
}

/// Incremental Bowyer-Watson Delaunay triangulation over a fixed working
/// region. The region is enclosed by a synthetic super-triangle whose
/// vertices never appear in the output; points outside the region are
/// ignored on insert, as are exact duplicates.
#[derive(Clone, Debug)]
pub struct Delaunay<T: Scalar> {
    region: Rect2<T>,
    points: Vec<Point2<T>>,
    triangles: Vec<Triangle>,
}

impl<T: Scalar> Delaunay<T> {
    pub fn new(region: Rect2<T>) -> Self {
        // Super-triangle comfortably enclosing the region.
        let half = T::from(0.5).unwrap();
        let cx = (region.min.x + region.max.x) * half;
        let cy = (region.min.y + region.max.y) * half;
        let delta = region.width().max(region.height());
        let r = T::from(64).unwrap() * delta + T::one();
        let sqrt_3 = T::from(SQRT_3).unwrap();
        let two = T::from(2).unwrap();

        let points = vec![
            Point2::new(cx, cy + two * r),
            Point2::new(cx - sqrt_3 * r, cy - r),
            Point2::new(cx + sqrt_3 * r, cy - r),
        ];

        Self {
            region,
            points,
            triangles: vec![Triangle(0, 1, 2)],
        }
    }

    pub fn region(&self) -> Rect2<T> {
        self.region
    }

    /// Insert a single point using the Bowyer-Watson cavity algorithm.
    fn insert_point(&mut self, p: Point2<T>) {
        if !self.region.contains(&p) {
            return;
        }
        // Duplicates are ignored.
        if self.points[SUPER..].iter().any(|q| *q == p) {
            return;
        }

        let pid = self.points.len();
        self.points.push(p);

        // Triangles whose circumcircle contains p.
        let mut bad = Vec::new();
        for (i, &t) in self.triangles.iter().enumerate() {
            if Self::in_circumcircle(&p, t, &self.points) {
                bad.push(i);
            }
        }
        if bad.is_empty() {
            // Cannot happen for a point inside the super-triangle.
            return;
        }

        // The cavity boundary consists of the edges referenced exactly once
        // across the removed triangles.
        let mut edge_count: BTreeMap<Edge, usize> = BTreeMap::new();
        for &i in &bad {
            let t = self.triangles[i];
            for edge in [
                Edge::new(t.0, t.1),
                Edge::new(t.1, t.2),
                Edge::new(t.2, t.0),
            ] {
                *edge_count.entry(edge).or_insert(0) += 1;
            }
        }

        // Remove in reverse order to keep indices valid under swap_remove.
        bad.sort_unstable();
        for &i in bad.iter().rev() {
            self.triangles.swap_remove(i);
        }

        // Fan the new point out to the cavity boundary, oriented CCW.
        for (edge, count) in edge_count {
            if count != 1 {
                continue;
            }
            let t = if orient2d(&self.points[edge.0], &self.points[edge.1], &p) > T::zero() {
                Triangle(edge.0, edge.1, pid)
            } else {
                Triangle(edge.0, pid, edge.1)
            };
            self.triangles.push(t);
        }
    }

    /// Circumcircle containment against a consistently oriented triangle.
    fn in_circumcircle(p: &Point2<T>, t: Triangle, points: &[Point2<T>]) -> bool {
        let (a, b, c) = (t.0, t.1, t.2);
        let (aa, bb, cc) = if orient2d(&points[a], &points[b], &points[c]) > T::zero() {
            (a, b, c)
        } else {
            (a, c, b)
        };
        incircle(&points[aa], &points[bb], &points[cc], p) > T::zero()
    }
}

impl<T: Scalar> TriangulationProvider<T> for Delaunay<T> {
    fn insert(&mut self, p: Point2<T>) {
        self.insert_point(p);
    }

    fn triangles(&self) -> Vec<[Point2<T>; 3]> {
        self.triangles
            .iter()
            .filter(|t| !t.touches_super())
            .map(|t| [self.points[t.0], self.points[t.1], self.points[t.2]])
            .collect()
    }

    fn len(&self) -> usize {
        self.points.len() - SUPER
    }
}

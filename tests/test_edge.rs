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

use ahull::geometry::{CanonicalEdge, Point2};

#[test]
fn construction_is_symmetric() {
    let pairs = [
        (Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)),
        (Point2::new(3.0, 4.0), Point2::new(1.0, 2.0)),
        // Equal x, order decided by y.
        (Point2::new(5.0, -1.0), Point2::new(5.0, 9.0)),
        (Point2::new(-2.5, 0.0), Point2::new(7.25, 0.0)),
    ];
    for (p, q) in pairs {
        assert_eq!(CanonicalEdge::new(p, q), CanonicalEdge::new(q, p));
    }
}

#[test]
fn origin_is_the_lexicographically_smaller_endpoint() {
    let e = CanonicalEdge::new(Point2::new(9.0, 0.0), Point2::new(2.0, 50.0));
    assert_eq!(e.origin, Point2::new(2.0, 50.0));

    // x ties break on y.
    let e = CanonicalEdge::new(Point2::new(4.0, 8.0), Point2::new(4.0, 3.0));
    assert_eq!(e.origin, Point2::new(4.0, 3.0));
    let (a, b) = e.endpoints();
    assert_eq!(a, Point2::new(4.0, 3.0));
    assert_eq!(b, Point2::new(4.0, 8.0));
}

#[test]
fn length_is_the_euclidean_norm_of_the_offset() {
    let e = CanonicalEdge::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
    assert_eq!(e.length(), 5.0);
}

#[test]
fn identical_endpoints_give_a_zero_length_edge() {
    let p = Point2::new(6.0, 6.0);
    let e = CanonicalEdge::new(p, p);
    assert_eq!(e.length(), 0.0);
    assert_eq!(e, CanonicalEdge::new(p, p));
    assert_eq!(e.endpoints(), (p, p));
}

#[test]
fn ordering_is_a_strict_total_order() {
    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(-3.0, 2.5),
    ];
    let mut edges = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            edges.push(CanonicalEdge::new(points[i], points[j]));
        }
    }

    for a in &edges {
        assert_eq!(a.cmp(a), Ordering::Equal);
        for b in &edges {
            // Antisymmetric.
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
            for c in &edges {
                // Transitive.
                if a.cmp(b) == Ordering::Less && b.cmp(c) == Ordering::Less {
                    assert_eq!(a.cmp(c), Ordering::Less);
                }
            }
        }
    }

    // A sort under this order is stable with respect to equality: distinct
    // edges never compare equal.
    edges.sort();
    for pair in edges.windows(2) {
        assert_eq!(pair[0].cmp(&pair[1]), Ordering::Less);
    }
}

#[test]
fn equality_is_exact_not_approximate() {
    let e1 = CanonicalEdge::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
    let e2 = CanonicalEdge::new(Point2::new(0.0, 1e-12), Point2::new(1.0, 0.0));
    assert_ne!(e1, e2);
}

#[test]
fn display_shows_both_endpoints() {
    let e = CanonicalEdge::new(Point2::new(10.0, 20.0), Point2::new(0.0, 5.0));
    assert_eq!(e.to_string(), "(0, 5), (10, 20)");
}

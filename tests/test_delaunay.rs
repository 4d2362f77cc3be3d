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

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ahull::geometry::{Point2, Rect2};
use ahull::operations::hull::count_edges;
use ahull::operations::triangulation::{Delaunay, TriangulationProvider};

fn region() -> Rect2<f64> {
    Rect2::from_size(100.0, 100.0)
}

#[test]
fn fewer_than_three_points_yield_no_triangles() {
    let mut delaunay = Delaunay::new(region());
    assert!(delaunay.triangles().is_empty());

    delaunay.insert(Point2::new(10.0, 10.0));
    delaunay.insert(Point2::new(50.0, 10.0));
    assert_eq!(delaunay.len(), 2);
    assert!(delaunay.triangles().is_empty());
}

#[test]
fn three_points_yield_exactly_one_triangle() {
    let mut delaunay = Delaunay::new(region());
    let pts = [
        Point2::new(10.0, 10.0),
        Point2::new(80.0, 15.0),
        Point2::new(30.0, 70.0),
    ];
    for p in pts {
        delaunay.insert(p);
    }

    let triangles = delaunay.triangles();
    assert_eq!(triangles.len(), 1);
    for vertex in &triangles[0] {
        assert!(pts.contains(vertex));
    }
}

#[test]
fn square_corners_yield_two_triangles_sharing_one_diagonal() {
    let mut delaunay = Delaunay::new(region());
    for p in [
        Point2::new(20.0, 20.0),
        Point2::new(60.0, 20.0),
        Point2::new(60.0, 60.0),
        Point2::new(20.0, 60.0),
    ] {
        delaunay.insert(p);
    }

    let triangles = delaunay.triangles();
    assert_eq!(triangles.len(), 2);

    // 4 rim edges counted once, one shared diagonal counted twice.
    let counts = count_edges(triangles, false);
    assert_eq!(counts.len(), 5);
    let shared: Vec<_> = counts.values().filter(|&&n| n == 2).collect();
    assert_eq!(shared.len(), 1);
}

#[test]
fn duplicate_points_are_ignored() {
    let mut delaunay = Delaunay::new(region());
    let p = Point2::new(40.0, 40.0);
    delaunay.insert(p);
    delaunay.insert(p);
    delaunay.insert(Point2::new(70.0, 40.0));
    assert_eq!(delaunay.len(), 2);
}

#[test]
fn points_outside_the_region_are_ignored() {
    let mut delaunay = Delaunay::new(region());
    delaunay.insert(Point2::new(-5.0, 40.0));
    delaunay.insert(Point2::new(40.0, 500.0));
    assert_eq!(delaunay.len(), 0);
}

#[test]
fn output_never_references_synthetic_vertices() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut delaunay = Delaunay::new(region());
    let mut inserted = Vec::new();
    for _ in 0..30 {
        let p = Point2::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
        inserted.push(p);
        delaunay.insert(p);
    }

    for triangle in delaunay.triangles() {
        for vertex in &triangle {
            assert!(inserted.contains(vertex));
        }
    }
}

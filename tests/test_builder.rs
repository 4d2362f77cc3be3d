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

use ahull::HullError;
use ahull::geometry::Point2;
use ahull::operations::hull::{HullBuilder, HullOptions};
use ahull::raster::{Canvas, Rgb};

fn white_canvas() -> Canvas {
    Canvas::new(200, 200, Rgb::WHITE)
}

/// Square corners plus the center, so the triangulation has an interior
/// vertex whose incident edges seed the flood fill.
fn square_with_center() -> Vec<Point2<f64>> {
    vec![
        Point2::new(50.0, 50.0),
        Point2::new(150.0, 50.0),
        Point2::new(150.0, 150.0),
        Point2::new(50.0, 150.0),
        Point2::new(100.0, 100.0),
    ]
}

#[test]
fn rebuild_requires_three_points() {
    let mut builder = HullBuilder::<f64>::new(white_canvas(), HullOptions::default()).unwrap();

    assert!(builder.add_point(Point2::new(20.0, 20.0)).is_none());
    assert!(builder.add_point(Point2::new(120.0, 30.0)).is_none());
    let outline = builder.add_point(Point2::new(60.0, 140.0));
    assert!(outline.is_some());
    assert_eq!(outline.unwrap().boundary.len(), 3);
}

#[test]
fn non_positive_alpha_is_rejected_up_front() {
    let options = HullOptions::default().with_alpha(0.0);
    let result = HullBuilder::<f64>::new(white_canvas(), options);
    assert!(matches!(result, Err(HullError::NonPositiveAlpha(_))));
}

#[test]
fn alpha_changes_below_the_minimum_delta_are_ignored() {
    let options = HullOptions::default()
        .with_alpha(100.0)
        .with_min_alpha_delta(50.0);
    let mut builder = HullBuilder::<f64>::new(white_canvas(), options).unwrap();
    for p in square_with_center() {
        builder.add_point(p);
    }

    assert!(builder.set_alpha(120.0).is_none());
    assert_eq!(builder.alpha(), 100.0);

    assert!(builder.set_alpha(160.0).is_some());
    assert_eq!(builder.alpha(), 160.0);

    assert!(builder.set_alpha(-10.0).is_none());
    assert_eq!(builder.alpha(), 160.0);
}

#[test]
fn shrinking_alpha_erases_the_hull() {
    let options = HullOptions::default()
        .with_alpha(500.0)
        .with_min_alpha_delta(1.0);
    let mut builder = HullBuilder::<f64>::new(white_canvas(), options).unwrap();
    let outline = builder.add_points(&square_with_center()).unwrap();
    assert!(!outline.boundary.is_empty());

    // Every edge in the square-with-center setup is at least 70 long.
    let outline = builder.set_alpha(10.0).unwrap();
    assert!(outline.boundary.is_empty());
    assert!(outline.interior.is_empty());
}

#[test]
fn filled_rebuild_colors_the_enclosed_region() {
    let mut builder = HullBuilder::<f64>::new(white_canvas(), HullOptions::default()).unwrap();
    let outline = builder.add_points(&square_with_center()).unwrap();

    assert_eq!(outline.boundary.len(), 4);
    assert_eq!(outline.interior.len(), 4);

    let canvas = builder.canvas();
    // Interior pixel away from the point marks.
    assert_eq!(canvas.get(80, 80), Some(Rgb::GREEN));
    // The outline itself.
    assert_eq!(canvas.get(100, 50), Some(Rgb::GREEN));
    // Outside the hull.
    assert_eq!(canvas.get(20, 100), Some(Rgb::WHITE));
}

#[test]
fn outline_only_rebuild_leaves_the_interior_untouched() {
    let options = HullOptions::default().with_fill(false);
    let mut builder = HullBuilder::<f64>::new(white_canvas(), options).unwrap();
    builder.add_points(&square_with_center()).unwrap();

    let canvas = builder.canvas();
    assert_eq!(canvas.get(100, 50), Some(Rgb::GREEN));
    assert_eq!(canvas.get(80, 80), Some(Rgb::WHITE));
}

#[test]
fn added_points_are_marked_on_the_surface() {
    let mut builder = HullBuilder::<f64>::new(white_canvas(), HullOptions::default()).unwrap();
    builder.add_point(Point2::new(30.0, 40.0));
    // The mark square extends from the point.
    assert_eq!(builder.canvas().get(30, 40), Some(Rgb::GREEN));
    assert_eq!(builder.canvas().get(33, 43), Some(Rgb::GREEN));
    assert_eq!(builder.canvas().get(29, 40), Some(Rgb::WHITE));
}

#[test]
fn repeated_rebuilds_return_identical_partitions() {
    let mut builder = HullBuilder::<f64>::new(white_canvas(), HullOptions::default()).unwrap();
    builder.add_points(&square_with_center()).unwrap();

    let first = builder.rebuild().unwrap();
    let second = builder.rebuild().unwrap();
    assert_eq!(first, second);
}

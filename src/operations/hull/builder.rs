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

use std::sync::atomic::{AtomicU8, Ordering};

use num_traits::ToPrimitive;

use crate::error::{HullError, Result};
use crate::geometry::{Point2, Rect2};
use crate::numeric::scalar::Scalar;
use crate::operations::hull::alpha::AlphaFilter;
use crate::operations::hull::edge_count::{EdgePartition, count_edges, partition_edges};
use crate::operations::triangulation::{Delaunay, TriangulationProvider};
use crate::raster::{Canvas, Mask, Rgb};

const IDLE: u8 = 0;
const REBUILDING: u8 = 1;

/// Mutual exclusion for the rebuild pipeline.
///
/// A trigger that finds the gate occupied performs no work; the update it
/// carried is dropped, not queued, and only a later external trigger can
/// cause another rebuild. Entering is a compare-and-set so an interleaving
/// trigger can never observe a half-taken gate.
#[derive(Debug, Default)]
pub struct RebuildGate {
    state: AtomicU8,
}

impl RebuildGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move Idle -> Rebuilding. Returns false when already rebuilding.
    pub fn try_enter(&self) -> bool {
        self.state
            .compare_exchange(IDLE, REBUILDING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Move back to Idle.
    pub fn exit(&self) {
        self.state.store(IDLE, Ordering::Release);
    }

    pub fn is_rebuilding(&self) -> bool {
        self.state.load(Ordering::Acquire) == REBUILDING
    }
}

/// Tunable parameters of the hull builder.
#[derive(Debug, Clone, Copy)]
pub struct HullOptions<T: Scalar> {
    /// Maximum edge length for a triangle to survive filtering.
    pub alpha: T,
    /// Alpha changes smaller than this are ignored, suppressing redundant
    /// rebuilds from high-frequency input sources.
    pub min_alpha_delta: T,
    /// Color used for the outline, the fill, and point marks.
    pub highlight_color: Rgb,
    /// Reconstruct and color the enclosed region, not just the outline.
    pub fill: bool,
    /// Print every edge considered during classification.
    pub verbose: bool,
    /// Stroke width of the outline on the canvas.
    pub stroke_width: u32,
    /// Side length of the square stamped at every added point.
    pub point_mark_size: u32,
}

impl<T: Scalar> Default for HullOptions<T> {
    fn default() -> Self {
        Self {
            alpha: T::infinity(),
            min_alpha_delta: T::from(50).unwrap(),
            highlight_color: Rgb::GREEN,
            fill: true,
            verbose: false,
            stroke_width: 2,
            point_mark_size: 7,
        }
    }
}

impl<T: Scalar> HullOptions<T> {
    pub fn with_alpha(mut self, alpha: T) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_min_alpha_delta(mut self, delta: T) -> Self {
        self.min_alpha_delta = delta;
        self
    }

    pub fn with_highlight_color(mut self, color: Rgb) -> Self {
        self.highlight_color = color;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > T::zero()) {
            return Err(HullError::NonPositiveAlpha(
                self.alpha.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}

/// Rebuilds the concave hull whenever the point set or alpha changes.
///
/// The builder owns an immutable base snapshot of the drawing surface; the
/// working canvas is reset from it at the start of every rebuild, so earlier
/// outlines never bleed into the next one. All derived state (multiplicity
/// map, partition, mask content) lives only within one rebuild.
pub struct HullBuilder<T: Scalar, P: TriangulationProvider<T> = Delaunay<T>> {
    options: HullOptions<T>,
    region: Rect2<T>,
    provider: P,
    base: Canvas,
    canvas: Canvas,
    mask: Mask,
    gate: RebuildGate,
}

impl<T: Scalar> HullBuilder<T, Delaunay<T>> {
    /// Builder over `base` with the default Delaunay provider sized to it.
    pub fn new(base: Canvas, options: HullOptions<T>) -> Result<Self> {
        let region = region_of(&base);
        Self::with_provider(base, options, Delaunay::new(region))
    }
}

impl<T: Scalar, P: TriangulationProvider<T>> HullBuilder<T, P> {
    /// Builder with a caller-supplied triangulation provider.
    pub fn with_provider(base: Canvas, options: HullOptions<T>, provider: P) -> Result<Self> {
        options.validate()?;
        let region = region_of(&base);
        let canvas = base.clone();
        let mask = Mask::new(base.width(), base.height());
        Ok(Self {
            options,
            region,
            provider,
            base,
            canvas,
            mask,
            gate: RebuildGate::new(),
        })
    }

    /// Trigger: a single point was placed.
    pub fn add_point(&mut self, p: Point2<T>) -> Option<EdgePartition<T>> {
        self.mark_point(&p);
        self.provider.insert(p);
        self.canvas.copy_from(&self.base);
        self.rebuild()
    }

    /// Trigger: a batch of points was loaded. The pipeline runs once for the
    /// whole batch.
    pub fn add_points(&mut self, points: &[Point2<T>]) -> Option<EdgePartition<T>> {
        for p in points {
            self.mark_point(p);
            self.provider.insert(*p);
        }
        self.canvas.copy_from(&self.base);
        self.rebuild()
    }

    /// Trigger: the alpha threshold changed. Non-positive values and changes
    /// below the configured minimum delta are ignored; a change arriving
    /// during a rebuild is dropped entirely and must be re-triggered.
    pub fn set_alpha(&mut self, alpha: T) -> Option<EdgePartition<T>> {
        if !(alpha > T::zero()) || self.gate.is_rebuilding() {
            return None;
        }
        if (alpha - self.options.alpha).abs() < self.options.min_alpha_delta {
            return None;
        }
        self.options.alpha = alpha;
        self.rebuild()
    }

    pub fn set_highlight_color(&mut self, color: Rgb) {
        self.options.highlight_color = color;
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.options.verbose = verbose;
    }

    pub fn set_fill(&mut self, fill: bool) {
        self.options.fill = fill;
    }

    pub fn alpha(&self) -> T {
        self.options.alpha
    }

    pub fn point_count(&self) -> usize {
        self.provider.len()
    }

    /// The working canvas with the latest rendered state.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// The re-entrancy gate, for external trigger sources that want to
    /// observe or pre-empt the rebuild state.
    pub fn gate(&self) -> &RebuildGate {
        &self.gate
    }

    /// Run the pipeline: filter, count, partition, render. Returns `None`
    /// without running when fewer than 3 points are accumulated or when a
    /// rebuild is already in progress.
    pub fn rebuild(&mut self) -> Option<EdgePartition<T>> {
        if self.provider.len() < 3 {
            return None;
        }
        if !self.gate.try_enter() {
            return None;
        }

        self.canvas.copy_from(&self.base);
        self.mask.clear();

        let filter = AlphaFilter::new(self.options.alpha, self.region);
        let accepted = self
            .provider
            .triangles()
            .into_iter()
            .filter(|t| filter.accepts(t));
        let counts = count_edges(accepted, self.options.verbose);
        let partition = partition_edges(&counts);
        self.render(&partition);

        self.gate.exit();
        Some(partition)
    }

    /// Draw the outline and, when filling is enabled, reconstruct the
    /// enclosed region: boundary edges act as barriers on the mask, interior
    /// edge endpoints seed the flood, and every filled mask pixel is
    /// recolored on the canvas.
    fn render(&mut self, partition: &EdgePartition<T>) {
        let color = self.options.highlight_color;
        for edge in &partition.boundary {
            let (a, b) = edge.endpoints();
            let (pa, pb) = (to_pixel(a), to_pixel(b));
            self.canvas
                .draw_line(pa, pb, color, self.options.stroke_width);
            if self.options.fill {
                self.mask.draw_line(pa, pb);
            }
        }

        if !self.options.fill {
            return;
        }
        for edge in &partition.interior {
            let (a, b) = edge.endpoints();
            self.mask.flood_fill(to_pixel(b));
            self.mask.flood_fill(to_pixel(a));
        }
        for (x, y) in self.mask.non_zero_pixels() {
            self.canvas.set(x, y, color);
        }
    }

    /// Stamp a highlight square at the point on the base snapshot so added
    /// points stay visible across rebuilds.
    fn mark_point(&mut self, p: &Point2<T>) {
        let (px, py) = to_pixel(*p);
        let size = self.options.point_mark_size as i64;
        for dy in 0..size {
            for dx in 0..size {
                self.base.set(px + dx, py + dy, self.options.highlight_color);
            }
        }
    }
}

fn region_of<T: Scalar>(canvas: &Canvas) -> Rect2<T> {
    Rect2::from_size(
        T::from(canvas.width()).unwrap(),
        T::from(canvas.height()).unwrap(),
    )
}

fn to_pixel<T: Scalar>(p: Point2<T>) -> (i64, i64) {
    (
        p.x.round().to_i64().unwrap_or(-1),
        p.y.round().to_i64().unwrap_or(-1),
    )
}

#[cfg(test)]
mod tests {
    use super::{HullBuilder, HullOptions, RebuildGate};
    use crate::geometry::Point2;
    use crate::raster::{Canvas, Rgb};

    #[test]
    fn gate_drops_reentrant_entry() {
        let gate = RebuildGate::new();
        assert!(gate.try_enter());
        assert!(gate.is_rebuilding());
        assert!(!gate.try_enter());
        gate.exit();
        assert!(!gate.is_rebuilding());
        assert!(gate.try_enter());
    }

    #[test]
    fn busy_builder_drops_triggers_but_keeps_points() {
        let base = Canvas::new(100, 100, Rgb::WHITE);
        let mut builder =
            HullBuilder::<f64>::new(base, HullOptions::default().with_min_alpha_delta(1.0))
                .unwrap();

        builder.gate.try_enter();
        assert!(builder.add_point(Point2::new(10.0, 10.0)).is_none());
        assert!(builder.add_point(Point2::new(80.0, 10.0)).is_none());
        assert!(builder.add_point(Point2::new(10.0, 80.0)).is_none());
        assert!(builder.set_alpha(30.0).is_none());

        // The dropped alpha update is lost, the inserted points are not.
        assert_eq!(builder.point_count(), 3);
        assert_eq!(builder.alpha(), f64::INFINITY);

        builder.gate.exit();
        let outline = builder.rebuild().expect("rebuild after gate release");
        assert_eq!(outline.boundary.len(), 3);
    }
}

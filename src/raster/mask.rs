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

use std::collections::VecDeque;

use crate::raster::line::line_pixels;

const FILLED: u8 = 255;

/// A binary pixel surface used to reconstruct the filled hull region.
/// Reset to empty at the start of every rebuild.
#[derive(Debug, Clone)]
pub struct Mask {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Mask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn is_filled(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|idx| self.data[idx] != 0)
    }

    /// Single-pixel stroke from `a` to `b`.
    pub fn draw_line(&mut self, a: (i64, i64), b: (i64, i64)) {
        for (x, y) in line_pixels(a, b) {
            if let Some(idx) = self.index(x, y) {
                self.data[idx] = FILLED;
            }
        }
    }

    /// Fill the connected empty region reachable from `seed` with 4-neighbor
    /// steps. A seed on an already filled pixel, or outside the surface, is
    /// a no-op.
    pub fn flood_fill(&mut self, seed: (i64, i64)) {
        let Some(start) = self.index(seed.0, seed.1) else {
            return;
        };
        if self.data[start] != 0 {
            return;
        }

        let mut queue = VecDeque::new();
        self.data[start] = FILLED;
        queue.push_back(seed);

        while let Some((x, y)) = queue.pop_front() {
            for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                if let Some(idx) = self.index(nx, ny) {
                    if self.data[idx] == 0 {
                        self.data[idx] = FILLED;
                        queue.push_back((nx, ny));
                    }
                }
            }
        }
    }

    /// Coordinates of every filled pixel, in row-major order.
    pub fn non_zero_pixels(&self) -> Vec<(i64, i64)> {
        let mut pixels = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.data[y * self.width + x] != 0 {
                    pixels.push((x as i64, y as i64));
                }
            }
        }
        pixels
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::Mask;

    #[test]
    fn flood_fill_stays_inside_a_closed_boundary() {
        let mut mask = Mask::new(20, 20);
        // Closed 10x10 square outline.
        mask.draw_line((5, 5), (14, 5));
        mask.draw_line((14, 5), (14, 14));
        mask.draw_line((14, 14), (5, 14));
        mask.draw_line((5, 14), (5, 5));

        mask.flood_fill((9, 9));

        assert!(mask.is_filled(9, 9));
        assert!(mask.is_filled(6, 6));
        assert!(!mask.is_filled(4, 4));
        assert!(!mask.is_filled(15, 9));
    }

    #[test]
    fn flood_fill_on_a_filled_pixel_is_a_noop() {
        let mut mask = Mask::new(8, 8);
        mask.draw_line((0, 3), (7, 3));
        let before = mask.non_zero_pixels();
        mask.flood_fill((3, 3));
        assert_eq!(mask.non_zero_pixels(), before);
    }

    #[test]
    fn flood_fill_outside_the_surface_is_ignored() {
        let mut mask = Mask::new(8, 8);
        mask.flood_fill((-1, 0));
        mask.flood_fill((8, 8));
        assert!(mask.non_zero_pixels().is_empty());
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut mask = Mask::new(6, 6);
        mask.flood_fill((2, 2));
        assert!(!mask.non_zero_pixels().is_empty());
        mask.clear();
        assert!(mask.non_zero_pixels().is_empty());
    }

    #[test]
    fn non_zero_pixels_enumerates_in_row_major_order() {
        let mut mask = Mask::new(4, 4);
        mask.draw_line((2, 1), (2, 2));
        assert_eq!(mask.non_zero_pixels(), vec![(2, 1), (2, 2)]);
    }
}

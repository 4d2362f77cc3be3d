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

/// Bresenham rasterization of the segment from `a` to `b`, inclusive.
///
/// The produced chain is 8-connected, so a 4-connected flood fill cannot
/// leak across it. Canvas and mask strokes share this function so the
/// outline drawn on screen and the barrier used for filling always match.
pub fn line_pixels(a: (i64, i64), b: (i64, i64)) -> Vec<(i64, i64)> {
    let (mut x0, mut y0) = a;
    let (x1, y1) = b;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut pixels = Vec::new();
    loop {
        pixels.push((x0, y0));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::line_pixels;

    #[test]
    fn horizontal_line_covers_every_column() {
        let pixels = line_pixels((2, 5), (7, 5));
        assert_eq!(
            pixels,
            vec![(2, 5), (3, 5), (4, 5), (5, 5), (6, 5), (7, 5)]
        );
    }

    #[test]
    fn endpoints_are_always_plotted() {
        for (a, b) in [((0, 0), (13, 7)), ((5, 9), (-3, -2)), ((4, 4), (4, 4))] {
            let pixels = line_pixels(a, b);
            assert_eq!(pixels.first(), Some(&a));
            assert_eq!(pixels.last(), Some(&b));
        }
    }

    #[test]
    fn diagonal_line_is_eight_connected() {
        let pixels = line_pixels((0, 0), (6, 6));
        for pair in pixels.windows(2) {
            let (dx, dy) = (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1);
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
        }
    }
}

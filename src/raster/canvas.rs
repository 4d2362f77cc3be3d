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

use crate::error::{HullError, Result};
use crate::raster::line::line_pixels;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const GREEN: Rgb = Rgb([0, 255, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// Validated construction from user-supplied integers: exactly three
    /// components, each in [0, 255]. Violations are fatal configuration
    /// errors, reported before any rendering starts.
    pub fn from_components(values: &[i64]) -> Result<Self> {
        if values.len() != 3 {
            return Err(HullError::InvalidColorComponents(values.len()));
        }
        for &v in values {
            if !(0..=255).contains(&v) {
                return Err(HullError::ColorOutOfRange(v));
            }
        }
        Ok(Rgb([values[0] as u8, values[1] as u8, values[2] as u8]))
    }
}

/// An RGB pixel surface, 3 bytes per pixel, row major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        let mut data = vec![0u8; width * height * 3];
        for px in data.chunks_exact_mut(3) {
            px.copy_from_slice(&fill.0);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap an existing row-major RGB buffer.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * 3 {
            return Err(HullError::MalformedImage(format!(
                "expected {} bytes for {}x{}, got {}",
                width * height * 3,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Set one pixel; coordinates outside the surface are ignored.
    pub fn set(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        self.data[idx..idx + 3].copy_from_slice(&color.0);
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        Some(Rgb([self.data[idx], self.data[idx + 1], self.data[idx + 2]]))
    }

    /// Overwrite this surface with another of the same size.
    pub fn copy_from(&mut self, other: &Canvas) {
        debug_assert_eq!(self.width, other.width);
        debug_assert_eq!(self.height, other.height);
        self.data.copy_from_slice(&other.data);
    }

    /// Stroke the segment from `a` to `b`. A `width` above one stamps a
    /// square brush of that side length at every step of the line.
    pub fn draw_line(&mut self, a: (i64, i64), b: (i64, i64), color: Rgb, width: u32) {
        let reach = width.max(1) as i64;
        let start = -(reach - 1) / 2;
        for (x, y) in line_pixels(a, b) {
            for dy in start..start + reach {
                for dx in start..start + reach {
                    self.set(x + dx, y + dy, color);
                }
            }
        }
    }
}

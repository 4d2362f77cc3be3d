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
use std::fmt::{Debug, Display};

use num_traits::Float;

/// Coordinate scalar for the hull pipeline.
///
/// Edge identity relies on bit-exact comparison of coordinates, so on top of
/// the float arithmetic the trait exposes a total order and the bit pattern
/// used for hashing. Two values hash equal exactly when `total_cmp` says
/// they are equal; no tolerance is applied anywhere.
pub trait Scalar: Float + Copy + Debug + Display + Default + 'static {
    /// Total order over all values, including NaN and signed zeros.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Bit pattern consistent with `total_cmp` equality.
    fn canonical_bits(&self) -> u64;
}

impl Scalar for f64 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    fn canonical_bits(&self) -> u64 {
        self.to_bits()
    }
}

impl Scalar for f32 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    fn canonical_bits(&self) -> u64 {
        u64::from(self.to_bits())
    }
}

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

use thiserror::Error;

/// Result type alias using [`HullError`].
pub type Result<T> = std::result::Result<T, HullError>;

/// Errors reported before or around the hull pipeline. The pipeline itself
/// has no failure mode; malformed configuration and I/O are rejected up
/// front, malformed vertex lines are skipped where they are read.
#[derive(Debug, Error)]
pub enum HullError {
    /// The highlight color was not given as exactly three components.
    #[error("the color must have exactly 3 components, got {0}")]
    InvalidColorComponents(usize),

    /// A color component fell outside the 8-bit range.
    #[error("color component {0} is outside the range [0, 255]")]
    ColorOutOfRange(i64),

    /// Alpha must be a positive length.
    #[error("alpha must be a positive length, got {0}")]
    NonPositiveAlpha(f64),

    /// An image file could not be decoded.
    #[error("malformed image: {0}")]
    MalformedImage(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

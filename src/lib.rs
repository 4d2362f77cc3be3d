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

//! Concave hull ("alpha shape") construction over growing 2-D point sets.
//!
//! Points are triangulated incrementally; triangles whose edges are all
//! shorter than a length threshold (alpha) and whose vertices lie inside a
//! working region are kept, and the edges of the surviving triangles are
//! classified by how many triangles reference them. Edges referenced exactly
//! once form the outline of the shape, edges referenced more than once form
//! its interior skeleton. The outline is rasterized onto an RGB canvas and
//! the enclosed region is reconstructed with a seeded flood fill.

pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod operations;
pub mod raster;

pub use error::{HullError, Result};

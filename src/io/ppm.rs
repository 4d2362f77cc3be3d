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

//! Binary PPM (P6) reading and writing for [`Canvas`] surfaces.
//! Only 8-bit RGB with a maxval of 255 is supported.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::error::{HullError, Result};
use crate::raster::Canvas;

pub fn read_ppm<P: AsRef<Path>>(path: P) -> Result<Canvas> {
    let file = File::open(path)?;
    read_ppm_from(BufReader::new(file))
}

pub fn read_ppm_from<R: Read>(mut reader: R) -> Result<Canvas> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut pos = 0usize;
    let magic = token(&bytes, &mut pos)?;
    if magic != b"P6" {
        return Err(HullError::MalformedImage(
            "not a binary PPM (missing P6 magic)".into(),
        ));
    }
    let width = dimension(&bytes, &mut pos)?;
    let height = dimension(&bytes, &mut pos)?;
    let maxval = dimension(&bytes, &mut pos)?;
    if maxval != 255 {
        return Err(HullError::MalformedImage(format!(
            "unsupported maxval {maxval}, only 255 is handled"
        )));
    }

    // A single whitespace byte separates the header from the pixel data.
    pos += 1;
    let need = width * height * 3;
    if pos + need > bytes.len() {
        return Err(HullError::MalformedImage("truncated pixel data".into()));
    }
    Canvas::from_raw(width, height, bytes[pos..pos + need].to_vec())
}

pub fn write_ppm<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_ppm_to(canvas, BufWriter::new(file))
}

pub fn write_ppm_to<W: Write>(canvas: &Canvas, mut writer: W) -> Result<()> {
    write!(writer, "P6\n{} {}\n255\n", canvas.width(), canvas.height())?;
    writer.write_all(canvas.data())?;
    writer.flush()?;
    Ok(())
}

/// Next whitespace-delimited header token, skipping `#` comments.
fn token<'a>(bytes: &'a [u8], pos: &mut usize) -> Result<&'a [u8]> {
    loop {
        while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
            *pos += 1;
        }
        if *pos < bytes.len() && bytes[*pos] == b'#' {
            while *pos < bytes.len() && bytes[*pos] != b'\n' {
                *pos += 1;
            }
            continue;
        }
        break;
    }
    let start = *pos;
    while *pos < bytes.len() && !bytes[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    if start == *pos {
        return Err(HullError::MalformedImage("unexpected end of header".into()));
    }
    Ok(&bytes[start..*pos])
}

fn dimension(bytes: &[u8], pos: &mut usize) -> Result<usize> {
    let tok = token(bytes, pos)?;
    std::str::from_utf8(tok)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| HullError::MalformedImage("non-numeric header field".into()))
}

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

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::geometry::Point2;

/// Read a vertex list: one point per line, two numeric fields separated by a
/// comma or spaces. Malformed lines are skipped silently. A file that yields
/// no points at all is reported as a warning, not an error.
pub fn read_vertex_list<P: AsRef<Path>>(path: P) -> io::Result<Vec<Point2<f64>>> {
    let file = File::open(path)?;
    parse_vertices(BufReader::new(file))
}

pub fn parse_vertices<R: BufRead>(reader: R) -> io::Result<Vec<Point2<f64>>> {
    let mut points = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let fields: Vec<&str> = line
            .split([',', ' '])
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != 2 {
            continue;
        }
        let (Ok(x), Ok(y)) = (fields[0].parse::<f64>(), fields[1].parse::<f64>()) else {
            continue;
        };
        points.push(Point2::new(x, y));
    }

    if points.is_empty() {
        eprintln!("warning: no points were loaded from the vertex list; check its formatting");
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::parse_vertices;
    use crate::geometry::Point2;

    #[test]
    fn parses_comma_and_space_separated_lines() {
        let input = b"10,20\n30 40\n5.5, 6.25\n" as &[u8];
        let points = parse_vertices(input).unwrap();
        assert_eq!(
            points,
            vec![
                Point2::new(10.0, 20.0),
                Point2::new(30.0, 40.0),
                Point2::new(5.5, 6.25),
            ]
        );
    }

    #[test]
    fn skips_malformed_lines_silently() {
        let input = b"1,2\nnot a point\n3\n4,5,6\nx,y\n7,8\n" as &[u8];
        let points = parse_vertices(input).unwrap();
        assert_eq!(points, vec![Point2::new(1.0, 2.0), Point2::new(7.0, 8.0)]);
    }

    #[test]
    fn empty_input_yields_empty_vec() {
        let points = parse_vertices(b"" as &[u8]).unwrap();
        assert!(points.is_empty());
    }
}

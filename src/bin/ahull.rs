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

//! Concave hull builder CLI.
//!
//! Loads an image, overlays the concave hull of a vertex list, and writes
//! the rendered result. Run `ahull --help` for the options.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ahull::io::ppm::{read_ppm, write_ppm};
use ahull::io::vertices::read_vertex_list;
use ahull::operations::hull::{HullBuilder, HullOptions};
use ahull::raster::Rgb;

#[derive(Parser)]
#[command(name = "ahull")]
#[command(author, version, about = "Build a concave hull outline over an image", long_about = None)]
struct Cli {
    /// Image to draw on (binary PPM, P6)
    #[arg(long)]
    image: PathBuf,

    /// Text file with one vertex per line, "x,y" or "x y"
    #[arg(long)]
    vertices: Option<PathBuf>,

    /// Outline color, three values in [0, 255]
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    color: Option<Vec<i64>>,

    /// Maximum edge length in pixels (default: half the smaller image side)
    #[arg(long)]
    alpha: Option<f64>,

    /// Draw the outline only, without filling the enclosed region
    #[arg(long)]
    no_fill: bool,

    /// Print every edge considered while classifying
    #[arg(short, long)]
    verbosity: bool,

    /// Where to write the rendered image
    #[arg(long, default_value = "hull.ppm")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let color = match &cli.color {
        Some(components) => Rgb::from_components(components)?,
        None => Rgb::GREEN,
    };

    let base = read_ppm(&cli.image)
        .with_context(|| format!("failed to load image {}", cli.image.display()))?;
    let alpha = cli
        .alpha
        .unwrap_or_else(|| base.width().min(base.height()) as f64 / 2.0);

    let options = HullOptions::default()
        .with_alpha(alpha)
        .with_highlight_color(color)
        .with_fill(!cli.no_fill)
        .with_verbose(cli.verbosity);
    let mut builder = HullBuilder::new(base, options)?;

    let points = match &cli.vertices {
        Some(path) => read_vertex_list(path)
            .with_context(|| format!("failed to read vertex list {}", path.display()))?,
        None => Vec::new(),
    };

    if !points.is_empty() {
        if let Some(outline) = builder.add_points(&points) {
            println!(
                "Points: {}, boundary edges: {}, interior edges: {}",
                builder.point_count(),
                outline.boundary.len(),
                outline.interior.len()
            );
        } else {
            println!(
                "Points: {} (need at least 3 for a hull)",
                builder.point_count()
            );
        }
    }

    write_ppm(builder.canvas(), &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!("Saved: {}", cli.output.display());

    Ok(())
}

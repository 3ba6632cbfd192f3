// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg};
use failure::{format_err, Error};
use seamgrid::{FillMode, SeamGrid, SelectionMode};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), Error> {
    let matches = App::new("seamgrid")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Seam carving on a linked pixel lattice")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("rounds")
                .short("r")
                .long("rounds")
                .takes_value(true)
                .default_value("1")
                .help("How many nodes to carve from every row"),
        )
        .arg(
            Arg::with_name("select")
                .short("s")
                .long("select")
                .takes_value(true)
                .default_value("brightness")
                .help("Selection mode: brightness (0) or difference (1)"),
        )
        .arg(
            Arg::with_name("fill")
                .long("fill")
                .help("Render at the original width, filling the carved gaps"),
        )
        .arg(
            Arg::with_name("fillmode")
                .short("f")
                .long("fill-mode")
                .takes_value(true)
                .default_value("flat")
                .help("Gap fill: flat (0), average (1) or gradient (2)"),
        )
        .get_matches();

    let input = matches
        .value_of("input")
        .ok_or_else(|| format_err!("no input image given"))?;
    let output = matches
        .value_of("output")
        .ok_or_else(|| format_err!("no output image given"))?;
    let rounds: u32 = matches.value_of("rounds").unwrap_or("1").parse()?;
    let mode: SelectionMode = matches.value_of("select").unwrap_or("brightness").parse()?;
    let fill_mode: FillMode = matches.value_of("fillmode").unwrap_or("flat").parse()?;
    let fill_gaps = matches.is_present("fill");

    let image = image::open(input)?.to_rgba8();
    let mut grid = SeamGrid::from_raster(&image)?;
    let carved = grid.carve(rounds, mode)?;
    info!(
        carved,
        physical = grid.width_physical(),
        original = grid.width_original(),
        "carved {}",
        input
    );

    grid.render(fill_gaps, fill_mode).save(output)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("seamgrid: {}", err);
        process::exit(1);
    }
}

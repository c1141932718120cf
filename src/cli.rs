//! Defines the command-line interface for the application.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "svg2msvg",
    version,
    about = "Pack the numbered SVG files in ./input_svgs into ./output.msvg.",
    long_about = "Pack the numbered SVG files in ./input_svgs into ./output.msvg.\n\n\
                  Pages are ordered by the first number in each file name. Files that \
                  cannot be read are reported and left out."
)]
pub struct Cli {}

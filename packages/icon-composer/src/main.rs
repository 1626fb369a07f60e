use clap::Parser;
use icon_composer::cli::Args;
use icon_composer::{IconComposer, InkscapeRasterizer};

fn main() {
  let args = Args::parse();

  let options = args.composer_options();
  let rasterizer = InkscapeRasterizer::with_program(&args.rasterizer);
  let composer = IconComposer::with_rasterizer(options, Box::new(rasterizer));

  if let Err(e) = composer.run() {
    eprintln!("Error: {}", e);
    std::process::exit(1);
  }
}

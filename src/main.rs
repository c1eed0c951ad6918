mod cli;
mod logger;
mod scenes;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use clap::Parser;
use log::info;
use recursive_raytracer::{RenderError, render, write_ppm};

use cli::Args;
use logger::init_logger;

fn main() -> Result<(), RenderError> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let settings = args.render_settings();
    let scene = args.scene.build();
    let camera = scene.camera(&settings, args.aperture);
    info!(
        "Scene {:?}: {} primitives",
        args.scene,
        scene.world.len()
    );

    let start = Instant::now();
    let output = render(&camera, &scene.world, &settings)?;
    info!("Render time    : {:.2?}", start.elapsed());
    info!("Primary rays   : {}", output.stats.primary_rays);
    info!("Scene queries  : {}", output.stats.scene_queries);
    info!("Shadow rays    : {}", output.stats.shadow_rays);
    info!("Scatter events : {}", output.stats.scatters);

    if args.output == "-" {
        let mut out = BufWriter::new(io::stdout().lock());
        write_ppm(&mut out, &output.image)?;
        out.flush()?;
    } else {
        let mut out = BufWriter::new(File::create(&args.output)?);
        write_ppm(&mut out, &output.image)?;
        out.flush()?;
        info!("Wrote {}", args.output);
    }

    Ok(())
}

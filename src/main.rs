use clap::Parser;
use log::debug;
use mandelbrot_sampler::{Args, CliController, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    let config = args.to_config()?;
    let mut controller = CliController::new(PpmFilePresenter::new(), config);

    println!("Sampling Mandelbrot set...");
    controller.generate();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.ascii {
        controller.write_ascii(&mut out)?;
    }
    controller.write_summary(&mut out)?;

    if let Some(path) = &args.output {
        controller.write(path)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}

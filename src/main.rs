use std::process;

use clap::Parser;
use mandel_render::{Args, ConsoleObserver, NullObserver, RenderError, RenderObserver, render};

fn run(args: Args) -> Result<(), RenderError> {
    let quiet = args.quiet;
    let config = args.into_config()?;

    let mut observer: Box<dyn RenderObserver> = if quiet {
        Box::new(NullObserver)
    } else {
        Box::new(ConsoleObserver::new())
    };

    render(&config, observer.as_mut())?;

    Ok(())
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("Render failure: {}", err);
        process::exit(1);
    }
}

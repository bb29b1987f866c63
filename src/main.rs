use clap::Parser;
use readymeta::PipelineError;
use readymeta::cli::{self, Cli};
use std::env;
use std::io;

fn main() -> Result<(), PipelineError> {
    let args = Cli::parse();

    if env::var("RUST_LOG").is_err() {
        let filter = if args.debug { "readymeta=debug" } else { "readymeta=info" };
        unsafe {
            env::set_var("RUST_LOG", filter);
        }
    }
    env_logger::init();

    cli::run(&args, &mut io::stdout().lock())?;
    Ok(())
}

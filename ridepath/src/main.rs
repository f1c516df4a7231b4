use clap::Parser;
use ridepath::app::{run, CliArgs};

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    match run::run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

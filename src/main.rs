use prefix_integer_encoder::{ArgsError, CliConfig};
use std::env;
use std::process;

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();

    let config = CliConfig::build(&args).unwrap_or_else(|err| match err {
        ArgsError::Usage(usage) => {
            println!("{usage}");
            process::exit(1);
        }
        ArgsError::Clap(err) => err.exit(),
    });

    if let Err(e) = prefix_integer_encoder::run(config) {
        eprintln!("Program error: {e}");
        process::exit(2);
    }
}

use std::{env, process};

use fincontrol::{cli, init};

fn main() {
    init();

    match cli::run(env::args().skip(1)) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::warn!(error = %err, "command failed");
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

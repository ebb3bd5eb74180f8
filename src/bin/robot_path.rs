use std::process::ExitCode;

use clap::Parser;
use robot_path::CLIArgs;

fn main() -> ExitCode {
    env_logger::init();
    let args = CLIArgs::parse();
    match robot_path::find_path(&args.input_path, args.delimiter) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

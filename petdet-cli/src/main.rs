//! Entry point for the `petdet` command-line interface.
#![forbid(unsafe_code)]

use petdet_cli::{CliError, run};

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::init();
    if let Err(err) = run() {
        if let CliError::ArgumentParsing(parse_err) = &err {
            parse_err.exit();
        }
        eprintln!("petdet: {err}");
        std::process::exit(1);
    }
}

//! `binwrap` — the wrapper executable.
//!
//! Every argument is forwarded untouched to the real binary, so this entry
//! point does no argument parsing of its own.

use binwrap::{commands, utils::logging};

fn main() {
    logging::init();

    let code = match commands::run::run_wrapper(std::env::args_os().skip(1)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    std::process::exit(code);
}

//! Interactive user creation for a Radicale users file.

#[macro_use]
extern crate clap;
extern crate ctrlc;
extern crate env_logger;
extern crate radicale_users;

use std::process;

use radicale_users::cli::{self, Console};
use radicale_users::config::Config;

fn main() {
    env_logger::init();

    // Only -h/--help; everything else is interactive.
    clap_app!(("radicale-useradd") =>
        (about: "Creates users for Radicale authentication")
        (after_help:
            "Prompts for a username and password, generates a salted bcrypt \
             hash, and writes a username:hash record to the server's users \
             file (/etc/radicale/users when present, config/users otherwise).")
    )
    .get_matches();

    // An interrupt at any prompt is a normal way out, not a crash.
    ctrlc::set_handler(|| {
        println!("\n\nGoodbye!");
        process::exit(0);
    })
    .expect("failed to install interrupt handler");

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Unexpected error: {}", err);
            return;
        }
    };

    if let Err(err) = cli::run(&mut Console, &config) {
        eprintln!("Unexpected error: {}", err);
    }
}

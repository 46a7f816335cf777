//! Interactive credential collection
//!
//! A thin adapter between an operator and the [`store`](../store/index.html)
//! writer: prompt for a username and password, hash, pick a write mode,
//! write, report. All terminal interaction goes through the [`Prompt`]
//! trait, so the flow can be driven by a scripted test harness as easily as
//! by a console.
//!
//! Validation problems and write failures are reported to the operator and
//! surface as `Ok(false)` so the loop can offer a retry; only unexpected
//! failures (for example the hashing primitive rejecting its input)
//! propagate as errors.

use std::io::{self, Write};
use std::path::Path;

use config::Config;
use errors::*;
use hashing;
use store::{self, CredentialRecord, WriteMode};

/// Answers to the tool's interactive questions.
pub trait Prompt {
    /// Reads one echoed line, e.g. a username or a y/N answer.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Reads one line without echoing it back, for passwords.
    fn read_secret(&mut self, prompt: &str) -> Result<String>;
}

/// Console-backed prompt using stdin and `rpassword`.
pub struct Console;

impl Prompt for Console {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        Ok(::rpassword::prompt_password_stdout(prompt)?)
    }
}

/// Only an explicit `y` (case-insensitive) counts as yes.
fn yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

fn confirm(prompt: &mut dyn Prompt, question: &str) -> Result<bool> {
    let answer = prompt.read_line(question)?;
    Ok(yes(&answer))
}

/// Collects one credential pair and writes it to the users file.
///
/// Returns `Ok(true)` when a record was written, `Ok(false)` when the
/// attempt was rejected (empty username, empty password, mismatched
/// confirmation) or the write failed; both of the latter are already
/// reported to the operator.
pub fn create_user(prompt: &mut dyn Prompt, config: &Config) -> Result<bool> {
    println!("Radicale User Creation Tool");
    println!("{}", "=".repeat(30));

    let username = prompt.read_line("Enter username: ")?.trim().to_string();
    if username.is_empty() {
        println!("Username cannot be empty!");
        return Ok(false);
    }

    let password = prompt.read_secret("Enter password: ")?;
    if password.is_empty() {
        println!("Password cannot be empty!");
        return Ok(false);
    }

    let confirmation = prompt.read_secret("Confirm password: ")?;
    if password != confirmation {
        println!("Passwords do not match!");
        return Ok(false);
    }

    println!("Generating password hash...");
    let hash = hashing::hash_with_cost(&password, config.cost)?;
    let record = CredentialRecord::new(username, hash);

    let path = store::resolve_users_path(&config.users_file, &config.fallback_file)?;
    let mode = select_mode(prompt, &path)?;
    if mode == WriteMode::Create {
        println!("Creating new users file: {}", path.display());
    }

    match store::write_record(&path, mode, &record) {
        Ok(()) => {
            let verb = if mode == WriteMode::Append {
                "added to"
            } else {
                "created in"
            };
            println!("User '{}' {} {}", record.username, verb, path.display());
            println!("User entry: {}", record);
            Ok(true)
        }
        Err(err) => {
            println!("Error writing to users file: {}", err);
            Ok(false)
        }
    }
}

/// Picks the write mode for the resolved path.
///
/// A missing file always starts fresh with the header. For an existing file
/// appending requires explicit confirmation; declining overwrites.
fn select_mode(prompt: &mut dyn Prompt, path: &Path) -> Result<WriteMode> {
    if !path.exists() {
        return Ok(WriteMode::Create);
    }
    let question = format!("Users file '{}' exists. Append to it? (y/N): ", path.display());
    if confirm(prompt, &question)? {
        Ok(WriteMode::Append)
    } else {
        Ok(WriteMode::Overwrite)
    }
}

/// Runs the interactive loop until the operator stops.
///
/// After a successful write the operator is asked whether to create another
/// user; after a rejected attempt, whether to try again. Both default to
/// stopping.
pub fn run(prompt: &mut dyn Prompt, config: &Config) -> Result<()> {
    loop {
        if create_user(prompt, config)? {
            if !confirm(prompt, "\nCreate another user? (y/N): ")? {
                break;
            }
        } else if !confirm(prompt, "\nTry again? (y/N): ")? {
            break;
        }
    }

    println!("\nDone! You can now start your Radicale container.");
    println!("Run: docker-compose up -d");
    Ok(())
}

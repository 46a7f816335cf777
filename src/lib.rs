// Copyright (c) 2017, Sam Scott

// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.

// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES WITH
// REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF MERCHANTABILITY
// AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY SPECIAL, DIRECT,
// INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES WHATSOEVER RESULTING FROM
// LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION OF CONTRACT, NEGLIGENCE
// OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN CONNECTION WITH THE USE OR
// PERFORMANCE OF THIS SOFTWARE.

//! # Radicale users
//! _Credential records for CalDAV/CardDAV authentication_
//!
//! This library maintains the flat `users` file a Radicale server reads for
//! HTTP Basic/Digest authentication. Each record is one `username:hash` line
//! where the hash is a salted bcrypt string in modular-crypt format.
//!
//! ## Examples
//!
//! The basic functionality for computing password hashes is:
//!
//! ```
//! extern crate radicale_users;
//! // We re-export the rpassword crate for CLI password input.
//! use radicale_users::rpassword::*;
//!
//! fn main() {
//!     # if false {
//!     let password = prompt_password_stdout("Please enter your password:").unwrap();
//!     # }
//!     # let password = "hunter2".to_string();
//!     let password_hash = radicale_users::hash_password(&password);
//!     assert!(radicale_users::verify_password(&password_hash, &password));
//! }
//! ```
//!
//! Writing records is handled by the [`store`](store/index.html) module, and
//! the [`cli`](cli/index.html) module provides the interactive collection
//! loop used by the `radicale-useradd` binary.

extern crate bcrypt;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_yaml;

#[cfg(test)]
extern crate tempfile;

/// Re-export rpassword for convenience.
pub mod rpassword {
    extern crate rpassword;
    pub use self::rpassword::*;
}

/// `radicale_users` errors.
pub mod errors {
    use bcrypt;
    use serde_yaml;
    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain! {
        foreign_links {
            Bcrypt(bcrypt::BcryptError) #[doc = "Errors from the bcrypt hashing primitive."];
            Config(serde_yaml::Error) #[doc = "Errors from parsing the YAML configuration."];
            Io(::std::io::Error) #[doc = "Errors from prompts or the users file."];
        }
    }
}

use errors::*;

pub mod cli;
pub mod config;
pub mod hashing;
pub mod store;

/// Generates a salted bcrypt hash for the given password.
///
/// This is the simplest way to use the library, and uses the default cost.
/// ## Panics
/// If there is any error while attempting to hash, will panic.
/// For default usage this should not happen.
pub fn hash_password(password: &str) -> String {
    hash_password_safe(password).expect("failed to hash password")
}

/// Same as `hash_password` but returns `Result` to allow error handling.
#[doc(hidden)]
pub fn hash_password_safe(password: &str) -> Result<String> {
    hashing::hash_with_cost(password, hashing::DEFAULT_COST)
}

/// Verifies the provided password matches the stored hash string.
///
/// If there is any error in processing the hash or password, this
/// will simply return `false`.
pub fn verify_password(hash: &str, password: &str) -> bool {
    hashing::verify(hash, password)
}

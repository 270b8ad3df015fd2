// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to return an error from the handler
use argp::{get_args, Action, App, Error, Handler, Matches, OptionOccurrence, Result, Settings};

/// The type we will use to handle CLI parsing for this program.
#[derive(Clone, Debug, Default)]
struct MyHandler {}

impl Handler for MyHandler {
    /// Handler function called for every option found.
    ///
    /// The handler must return `Ok(Action)` on success, or one of the crates
    /// Error::* values on error. If the parsing errors defined are not
    /// appropriate, use `Error::HandlerError(string)` to return a more
    /// specific handler error.
    fn option(&mut self, _matches: &mut Matches, occurrence: &OptionOccurrence) -> Result<Action> {
        match occurrence.name.as_str() {
            // Only accept options that are a vowel.
            "a" | "e" | "i" | "o" | "u" => Ok(Action::Keep),

            // Reject any other values.
            _ => Err(Error::HandlerError(format!(
                "option {:?} not a vowel",
                occurrence.name
            ))),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Support all option names.
    let app = App::new("error-handler").settings(Settings::new().allow_undefined_options());

    // Parse the command-line: an error is displayed and the program exits.
    let matches = app.argv(get_args(), MyHandler::default());

    for (name, value) in matches.iter() {
        println!("{}: {}", name, value);
    }
}

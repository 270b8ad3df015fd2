// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how a handler can observe and rewrite the values
/// stored in the result.
///
/// ```bash
/// $ events --name foo bar baz
/// ```
use argp::{
    get_args, Action, App, ArgumentOccurrence, Handler, Matches, OptionOccurrence, OptionSpec,
    Result, Schema, Settings, Value,
};

/// Stores string option values in upper case and gathers all positional
/// arguments into a single "args" array.
#[derive(Debug, Default)]
struct Upper {
    args: Vec<Value>,
}

impl Handler for Upper {
    fn start(&mut self, matches: &mut Matches) -> Result<()> {
        println!("start: {} default value/s", matches.len());

        Ok(())
    }

    fn option(&mut self, matches: &mut Matches, occurrence: &OptionOccurrence) -> Result<Action> {
        println!("option: {:?}", occurrence);

        match occurrence.value.as_str() {
            Some(s) => {
                matches.set(&occurrence.id, s.to_uppercase());

                Ok(Action::Ignore)
            }
            None => Ok(Action::Keep),
        }
    }

    fn argument(&mut self, _matches: &mut Matches, occurrence: &ArgumentOccurrence) -> Result<Action> {
        println!("argument: {:?}", occurrence);

        self.args.push(occurrence.value.clone());

        Ok(Action::Ignore)
    }

    fn end(&mut self, matches: &mut Matches) -> Result<()> {
        matches.set("args", std::mem::take(&mut self.args));

        println!("end");

        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let schema = match Schema::new()
        .option(OptionSpec::with_long("name").metavar("NAME"))
        .and_then(|s| s.option(OptionSpec::new('v').long("verbose")))
        .and_then(|s| s.help())
    {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::new("events")
        .schema(schema)
        .settings(Settings::new().allow_undefined_arguments());

    let matches = app.argv(get_args(), Upper::default());

    for (name, value) in matches.iter() {
        println!("{}: {}", name, value);
    }
}

// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Crate for parsing command-line arguments into typed values.
//!
//! The parser follows the GNU conventions: short and long options, grouped
//! short flags, abbreviated long options, negated flags, `--name=value`
//! and the `--` end of options marker. The options and arguments found
//! are returned as a [Matches] object mapping each name to a [Value].
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Options and arguments are declared up front in a [Schema]. The schema is
//! then given to an [App] (or to a [Command] of the app) and the command
//! line is parsed against it. Every declared option and argument appears
//! in the result, either with the value found on the command line or with
//! its default.
//!
//! A [Handler] can be specified to observe each option and argument as it
//! is found, and to stop it being stored.
//!
//! # Quickstart
//!
//! 1. Create a [Schema] with an [OptionSpec] for each option and an
//!    [ArgumentSpec] for each argument you wish to support.
//!
//!    By default, options are "flags" (see the [Terminology section](#terminology)).
//!    Specifying a metavariable makes the option take a value.
//!
//!    ```rust
//!    # use argp::{OptionSpec, Result, Schema, ValueType};
//!    # fn main() -> Result<()> {
//!    let schema = Schema::new()
//!        // Support "-a" and "--all" flag option.
//!        .option(OptionSpec::new('a').long("all"))?
//!        // Support "-n <value>" and "--lines=<value>" numeric option.
//!        .option(
//!            OptionSpec::new('n')
//!                .long("lines")
//!                .metavar("N")
//!                .value_type(ValueType::Number),
//!        )?
//!        // Support "-h" and "--help".
//!        .help()?;
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Create an [App] variable to represent your program:
//!
//!    ```rust
//!    # use argp::{App, Schema};
//!    # let schema = Schema::new();
//!    let app = App::new("my-app").schema(schema);
//!    ```
//!
//! 1. Call the `parse()` method on the [App] variable. This parses the
//!    program arguments and returns the [Matches]. If an error is found, or
//!    if help is requested, the text is displayed and the program exits.
//!
//!    ```rust,no_run
//!    # use argp::{App, Schema};
//!    # let app = App::new("my-app").schema(Schema::new());
//!    let matches = app.parse();
//!
//!    let all = matches.flag("all");
//!    ```
//!
//!    To handle errors yourself, call [App::parse_with_args()] instead.
//!
//! # Examples
//!
//! Below is a full example showing how to write a program that supports
//! a few command line options and a handler that counts them.
//!
//! ```rust
//! use argp::{
//!     Action, App, Handler, Matches, OptionOccurrence, OptionSpec, Outcome, Result, Schema,
//!     ValueType,
//! };
//!
//! #[derive(Debug, Default)]
//! struct Counter {
//!     options: usize,
//! }
//!
//! impl Handler for Counter {
//!     fn option(&mut self, _matches: &mut Matches, occurrence: &OptionOccurrence) -> Result<Action> {
//!         println!("option: {}, value: {}", occurrence.name, occurrence.value);
//!
//!         self.options += 1;
//!
//!         Ok(Action::Keep)
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let schema = Schema::new()
//!         .option(OptionSpec::new('a').long("all"))?
//!         .option(
//!             OptionSpec::new('n')
//!                 .long("lines")
//!                 .metavar("N")
//!                 .value_type(ValueType::Number),
//!         )?
//!         .option(OptionSpec::with_long("color").negate())?
//!         .help()?;
//!
//!     let app = App::new("my-app").schema(schema);
//!
//!     let args = vec!["-a", "--li=3", "--no-color"]
//!         .into_iter()
//!         .map(String::from)
//!         .collect();
//!
//!     let mut counter = Counter::default();
//!
//!     let outcome = app.parse_with_handler(args, &mut counter)?;
//!
//!     if let Outcome::Matches(matches) = outcome {
//!         assert!(matches.flag("all"));
//!         assert_eq!(matches.number("lines"), Some(3.0));
//!         assert!(!matches.flag("color"));
//!     }
//!
//!     assert_eq!(counter.options, 3);
//!
//!     Ok(())
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -vv --name=foo -n 3 build
//! $ cargo run --example commands -- config set editor vim
//! $ cargo run --example events -- --name foo bar baz
//! $ cargo run --example error-handler -- --bad-option
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! - An "option" is an argument that starts with a dash character (`-`).
//!
//!   A "short option" has a single character name (`-a`). A "long option"
//!   has a name of one or more characters and starts with two dashes
//!   (`--all`). An option can have both forms and any number of long
//!   aliases.
//!
//! - Options that do not accept a value are called "flags". Their value is
//!   `true` when specified and `false` otherwise.
//!
//!   A "negatable" flag is specified as `--no-<name>`: its value is `true`
//!   unless the negated form is specified.
//!
//! - An "option argument" is the value of an option. It can be specified
//!   in the same argument (`-n3`, `--lines=3`) or as the next argument
//!   (`-n 3`, `--lines 3`). Values are converted to the [ValueType] of the
//!   option.
//!
//!   The value of an "optional" option can be omitted, in which case the
//!   default value is used.
//!
//! - A "positional argument" is an argument that is not an option. Declared
//!   arguments are matched by name: `build` is `true` if the argument
//!   `build` is found.
//!
//! - A "command" is a set of options and arguments selected by the first
//!   argument (`git commit`). Inside a command, an argument can collect the
//!   arguments that follow it (see [Trailing]).
//!
//! - The special option `--` is reserved to mean "end of all options". Even
//!   if an argument starting with a dash follows the double-dash, it will not
//!   be considered an option.
//!
//! # Summary of features and behaviour
//!
//! - Grouped short flags: `-abc` is the same as `-a -b -c`. If the first
//!   option of the group takes a value, the rest of the group is the value:
//!   `-n3`.
//! - Long options can be abbreviated as long as the abbreviation is
//!   unambiguous: `--li` is `--lines`.
//! - Negative numbers can be values of numeric options: `--lines -3`.
//! - A declared argument is never taken as the value of an option:
//!   `--output build` sets `build` (and fails if `--output` requires a value).
//! - Values of unknown options and unknown arguments are converted with
//!   [cast()]: `"true"`, `"false"`, `"null"` and numbers become the values
//!   they represent.
//! - Array options split their value on commas and can be specified
//!   more than once: `--list=1,a --list=true` is `[1, "a", true]`.
//! - Unknown options and arguments are errors unless allowed in the
//!   [Settings].
//! - Options and arguments are handled in order unless sorting is enabled
//!   in the [Settings], in which case all options are handled before any
//!   argument.
//! - Automatically generated help, usage and version text (see
//!   [Schema::help()], [Schema::usage()] and [Schema::version()]).
//!
//! # Limitations
//!
//! - Short options must be ASCII alphanumeric characters.
//! - Negatable flags cannot have a short name.
//! - Commands cannot be nested.

mod accumulator;
mod argument;
mod args;
mod coerce;
mod command;
mod error;
mod handler;
mod help;
mod matches;
mod option;
mod package;
mod parser;
mod schema;
mod value;

pub use error::{Error, Result};

pub use args::{get_args, App, Outcome, Settings};

pub use argument::{ArgumentSpec, Trailing};
pub use command::Command;
pub use handler::{Action, ArgumentOccurrence, Handler, NoopHandler, OptionOccurrence};
pub use help::wrap;
pub use matches::Matches;
pub use option::{OptionSpec, Transform, ValueType};
pub use package::PackageInfo;
pub use schema::Schema;
pub use value::{cast, Value};

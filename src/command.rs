// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use tracing::debug;

use crate::args::{App, Outcome, Settings};
use crate::argument::Trailing;
use crate::error::{Error, Result};
use crate::handler::Handler;
use crate::help;
use crate::parser::{Halt, Parser};
use crate::schema::Schema;

/// A command: a named set of options and arguments selected by the first
/// argument on the command line, eg. `git commit`.
///
/// # Notes
///
/// - The `allow_*` and `sort` settings of a command are its own, but the
///   exit status and wrap width are always those of the [App].
/// - A command without its own `--help` or `--usage` option uses the
///   text of the [App].
#[derive(Clone, Debug, Default)]
pub struct Command {
    pub(crate) name: String,
    pub(crate) schema: Schema,
    pub(crate) settings: Settings,
    /// Values collected straight after the command name.
    pub(crate) trailing: Option<Trailing>,
}

impl Command {
    /// Create a new command.
    pub fn new(name: &str) -> Self {
        Command {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Specify the options and arguments of the command.
    pub fn schema(self, schema: Schema) -> Self {
        Command { schema, ..self }
    }

    /// Specify the parser settings for the command.
    pub fn settings(self, settings: Settings) -> Self {
        Command { settings, ..self }
    }

    /// Collect the arguments that follow the command name, eg. with
    /// `Trailing::exactly(1)`, `prog cmd foo` gives `{"cmd": ["foo"]}`.
    pub fn trailing(self, trailing: Trailing) -> Self {
        Command {
            trailing: Some(trailing),
            ..self
        }
    }

    /// Returns the name of the command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check the definition, collapsing an equal trailing range.
    pub(crate) fn validate(self) -> Result<Self> {
        if self.name.is_empty() || self.name.chars().any(char::is_whitespace) {
            return Err(Error::InvalidDefinition(format!(
                "the command \"{}\" cannot be empty or contain whitespace characters",
                self.name
            )));
        }

        let trailing = match self.trailing {
            Some(t) => Some(t.normalize(&self.name)?),
            None => None,
        };

        Ok(Command { trailing, ..self })
    }
}

/// The schema a parse runs against: either the top-level one of the [App]
/// or that of one of its commands.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope<'a> {
    app: &'a App,
    command: Option<&'a Command>,
}

impl<'a> Scope<'a> {
    /// Select the command named by the first argument, if any, returning
    /// the arguments left to parse.
    pub(crate) fn route<'b>(app: &'a App, args: &'b [String]) -> (Self, &'b [String]) {
        let command = args.first().and_then(|name| app.find_command(name));

        match command {
            Some(command) => {
                debug!(command = %command.name, "routing to command");

                (
                    Scope {
                        app,
                        command: Some(command),
                    },
                    &args[1..],
                )
            }
            None => (Scope { app, command: None }, args),
        }
    }

    fn schema(&self) -> &'a Schema {
        match self.command {
            Some(command) => &command.schema,
            None => &self.app.schema,
        }
    }

    /// The settings in effect, with the values always taken from the
    /// top-level app filled in.
    fn settings(&self) -> Settings {
        let app = &self.app.settings;

        match self.command {
            Some(command) => Settings {
                exit_status: app.exit_status,
                columns: app.columns,
                ..command.settings.clone()
            },
            None => app.clone(),
        }
    }

    /// Name shown in help and error messages, eg. `prog cmd`.
    pub(crate) fn script(&self) -> String {
        match self.command {
            Some(command) => format!("{} {}", self.app.name, command.name),
            None => self.app.name.clone(),
        }
    }

    /// The scope providing the help or usage text: the command if it has
    /// its own help or usage option, else the app.
    fn help_scope(&self) -> Scope<'a> {
        let schema = self.schema();

        if schema.show_help || schema.show_usage {
            *self
        } else {
            Scope {
                app: self.app,
                command: None,
            }
        }
    }

    pub(crate) fn parse(&self, args: &[String], handler: &mut dyn Handler) -> Result<Outcome> {
        let settings = self.settings();

        let mut parser = Parser::new(self.schema(), &settings);

        if let Some(command) = self.command {
            parser = parser.command(&command.name, command.trailing);
        }

        let result = parser.parse(args, handler);

        match result {
            Ok(matches) => Ok(Outcome::Matches(matches)),
            Err(Halt::Help) => Ok(Outcome::Help(self.help_text())),
            Err(Halt::Usage) => Ok(Outcome::Usage(self.usage_text())),
            Err(Halt::Version) => Ok(Outcome::Version(self.version_text())),
            Err(Halt::Error(e)) => Err(e),
        }
    }

    pub(crate) fn help_text(&self) -> String {
        let scope = self.help_scope();
        let columns = self.app.settings.wrap_width();

        help::render_help(scope.schema(), &scope.script(), columns)
    }

    pub(crate) fn usage_text(&self) -> String {
        let scope = self.help_scope();
        let columns = self.app.settings.wrap_width();

        help::render_usage(scope.schema(), &scope.script(), columns)
    }

    pub(crate) fn version_text(&self) -> String {
        let columns = self.app.settings.wrap_width();

        match self.command {
            Some(command) if command.schema.version.is_some() => {
                help::render_version(&command.schema, columns)
            }
            _ => help::render_version(&self.app.schema, columns),
        }
    }

    /// The hint shown after an error, eg.
    /// `Try 'prog --help' or 'prog --usage' for more information.`
    pub(crate) fn try_hint(&self) -> Option<String> {
        let scope = self.help_scope();
        let schema = scope.schema();
        let script = scope.script();

        let options = match (schema.show_help, schema.show_usage) {
            (true, true) => format!("'{} --help' or '{} --usage'", script, script),
            (true, false) => format!("'{} --help'", script),
            (false, true) => format!("'{} --usage'", script),
            (false, false) => return None,
        };

        Some(format!("Try {} for more information.", options))
    }

    /// The full diagnostic for an error, as printed to stderr.
    pub(crate) fn error_message(&self, message: &str) -> String {
        let mut s = format!("{}: {}", self.script(), message);

        if let Some(hint) = self.try_hint() {
            s.push('\n');
            s.push_str(&hint);
        }

        s
    }

    pub(crate) fn exit_status(&self) -> i32 {
        self.app.settings.exit_status
    }
}

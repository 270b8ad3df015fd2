// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::rc::Rc;

use tracing::{debug, trace};

use crate::accumulator::{Accumulator, Merge};
use crate::argument::Trailing;
use crate::args::Settings;
use crate::coerce;
use crate::error::Error;
use crate::handler::{Action, ArgumentOccurrence, Handler, OptionOccurrence};
use crate::matches::Matches;
use crate::option::{OptionSpec, ValueType};
use crate::schema::{Schema, HELP_ID, USAGE_ID, VERSION_ID};
use crate::value::{cast, Value};

const LONG_PREFIX: &str = "--";
const SHORT_PREFIX: &str = "-";
const NEGATE_PREFIX: &str = "no-";
const VALUE_SEPARATOR: char = '=';

/// Reason the scan stopped before the end of the input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Halt {
    Error(Error),
    /// The help option was found.
    Help,
    /// The usage option was found.
    Usage,
    /// The version option was found.
    Version,
}

impl From<Error> for Halt {
    fn from(e: Error) -> Self {
        Halt::Error(e)
    }
}

/// An option waiting for its value.
#[derive(Debug)]
struct Pending {
    /// `None` for an unregistered option.
    spec: Option<Rc<OptionSpec>>,
    /// Name without dashes, as resolved from the command line.
    name: String,
    long: bool,
    negated: bool,
}

impl Pending {
    fn new(spec: Option<Rc<OptionSpec>>, name: &str, long: bool) -> Self {
        Pending {
            spec,
            name: name.into(),
            long,
            negated: false,
        }
    }

    /// The option as it would be written on the command line.
    fn display_name(&self) -> String {
        match (self.long, self.negated) {
            (true, true) => format!("{}{}{}", LONG_PREFIX, NEGATE_PREFIX, self.name),
            (true, false) => format!("{}{}", LONG_PREFIX, self.name),
            (false, _) => format!("{}{}", SHORT_PREFIX, self.name),
        }
    }

    fn value_type(&self) -> Option<ValueType> {
        self.spec.as_ref().map(|s| s.value_type)
    }
}

/// An argument collecting the tokens that follow it.
#[derive(Debug)]
struct Collector {
    name: String,
    trailing: Trailing,
}

/// Returns `true` if the token looks like a negative number, eg. `-5`,
/// `-.5` or `-1.2,foo`.
fn is_negative_number(token: &str) -> bool {
    let mut chars = token.chars().skip(1);

    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.next().map_or(false, |c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Scans an argument list against one schema.
#[derive(Debug)]
pub(crate) struct Parser<'a> {
    schema: &'a Schema,
    settings: &'a Settings,
    /// Name and trailing count of the command being parsed.
    command: Option<(&'a str, Option<Trailing>)>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(schema: &'a Schema, settings: &'a Settings) -> Self {
        Parser {
            schema,
            settings,
            command: None,
        }
    }

    /// Parse as the arguments of the named command.
    pub(crate) fn command(self, name: &'a str, trailing: Option<Trailing>) -> Self {
        Parser {
            command: Some((name, trailing)),
            ..self
        }
    }

    /// Scan `args` from left to right, calling the handler for each
    /// occurrence.
    pub(crate) fn parse(
        &self,
        args: &[String],
        handler: &mut dyn Handler,
    ) -> Result<Matches, Halt> {
        let command = self.command.map(|(name, _)| name);

        let mut scan = Scan {
            parser: self,
            acc: Accumulator::new(self.schema, command, self.settings.sort),
            handler,
            pending: None,
            only_arguments: false,
            collector: None,
        };

        scan.acc.start(&mut *scan.handler)?;

        if let Some((name, Some(trailing))) = self.command {
            scan.open(name, trailing);
        }

        for token in args {
            scan.token(token)?;
        }

        scan.finish()
    }
}

/// State of one scan.
struct Scan<'p, 'h> {
    parser: &'p Parser<'p>,
    acc: Accumulator,
    handler: &'h mut dyn Handler,
    pending: Option<Pending>,
    /// Set once `--` has been read.
    only_arguments: bool,
    collector: Option<Collector>,
}

impl<'p, 'h> Scan<'p, 'h> {
    fn token(&mut self, token: &str) -> Result<(), Halt> {
        trace!(token = %token, pending = ?self.pending.as_ref().map(|p| &p.name), "token");

        if self.only_arguments {
            return self.positional(token);
        }

        if token == LONG_PREFIX {
            self.flush()?;
            self.only_arguments = true;

            return Ok(());
        }

        if token == SHORT_PREFIX {
            return match self.pending.take() {
                Some(pending) => self.emit_value(pending, Some(token)),
                None => self.positional(token),
            };
        }

        if let Some(rest) = token.strip_prefix(LONG_PREFIX) {
            return self.long(rest);
        }

        if let Some(cluster) = token.strip_prefix(SHORT_PREFIX) {
            let numeric = matches!(
                self.pending.as_ref().and_then(Pending::value_type),
                Some(ValueType::Number) | Some(ValueType::Array)
            );

            if numeric && is_negative_number(token) {
                if let Some(pending) = self.pending.take() {
                    return self.emit_value(pending, Some(token));
                }
            }

            return self.short(cluster);
        }

        match self.pending.take() {
            Some(pending) => self.value(pending, token),
            None => self.positional(token),
        }
    }

    /// Handle a token following an option that waits for a value.
    fn value(&mut self, pending: Pending, token: &str) -> Result<(), Halt> {
        if self.parser.schema.argument_spec(token).is_some() {
            debug!(option = %pending.name, argument = token, "argument found instead of value");

            self.pending = Some(pending);
            self.flush()?;

            return self.positional(token);
        }

        self.emit_value(pending, Some(token))
    }

    /// Handle `--name`, `--name=value` and `--no-name`.
    fn long(&mut self, rest: &str) -> Result<(), Halt> {
        self.flush()?;

        let schema = self.parser.schema;

        let (name, inline) = match rest.find(VALUE_SEPARATOR) {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
        };

        // A long name starting with the negation prefix (or an
        // abbreviation of one) takes precedence over negation.
        let spec = match name.strip_prefix(NEGATE_PREFIX) {
            Some(base) if base.is_empty() && !schema.has_long(name) => {
                return self.negated(base, inline)
            }
            Some(base) => match schema.resolve_long(name, false)? {
                Some(spec) => Some(spec),
                None => return self.negated(base, inline),
            },
            None => schema.resolve_long(name, false)?,
        };

        match spec {
            Some(spec) if spec.is_flag() => {
                let pending = Pending::new(Some(spec.clone()), &spec.id(), true);

                if inline.is_some() {
                    return Err(Error::ValueNotExpected(pending.display_name()).into());
                }

                if spec.negate {
                    // Same value as the default.
                    trace!(option = %pending.name, "negatable flag elided");
                    return Ok(());
                }

                self.emit_flag(pending)
            }
            Some(spec) => {
                let pending = Pending::new(Some(spec.clone()), &spec.id(), true);

                match inline {
                    Some(value) => self.emit_value(pending, Some(value)),
                    None => {
                        self.pending = Some(pending);
                        Ok(())
                    }
                }
            }
            None => {
                if !self.parser.settings.allow_undefined_options {
                    return Err(
                        Error::UnrecognizedOption(format!("{}{}", LONG_PREFIX, name)).into(),
                    );
                }

                let pending = Pending::new(None, name, true);

                match inline {
                    Some(value) => self.emit_value(pending, Some(value)),
                    None => {
                        self.pending = Some(pending);
                        Ok(())
                    }
                }
            }
        }
    }

    fn negated(&mut self, base: &str, inline: Option<&str>) -> Result<(), Halt> {
        if base.is_empty() {
            return Err(Error::EmptyNegatedFlag.into());
        }

        let spec = self.parser.schema.resolve_long(base, true)?;

        let name = match &spec {
            Some(spec) => spec.id(),
            None if self.parser.settings.allow_undefined_options => base.to_string(),
            None => {
                return Err(Error::UnrecognizedOption(format!(
                    "{}{}{}",
                    LONG_PREFIX, NEGATE_PREFIX, base
                ))
                .into())
            }
        };

        let pending = Pending {
            negated: true,
            ..Pending::new(spec, &name, true)
        };

        if inline.is_some() {
            return Err(Error::ValueNotExpected(pending.display_name()).into());
        }

        self.emit_flag(pending)
    }

    /// Handle a cluster of short options, eg. `-abc` or `-d5`.
    fn short(&mut self, cluster: &str) -> Result<(), Halt> {
        let schema = self.parser.schema;
        let chars: Vec<char> = cluster.chars().collect();
        let last = chars.len().saturating_sub(1);

        for (i, &c) in chars.iter().enumerate() {
            self.flush()?;

            let spec = schema.resolve_short(c);
            let pending = Pending::new(spec.clone(), &c.to_string(), false);

            let spec = match spec {
                Some(spec) => spec,
                None => {
                    if !self.parser.settings.allow_undefined_options {
                        return Err(Error::UnrecognizedOption(pending.display_name()).into());
                    }

                    self.pending = Some(pending);
                    continue;
                }
            };

            if spec.is_flag() {
                self.emit_flag(pending)?;
                continue;
            }

            if i == last {
                self.pending = Some(pending);
                continue;
            }

            // The rest of the cluster is the value unless it starts with
            // another option.
            if i == 0 && schema.resolve_short(chars[1]).is_none() {
                let value: String = chars[1..].iter().collect();

                return self.emit_value(pending, Some(&value));
            }

            if !spec.optional {
                return Err(Error::ExpectedValue(pending.display_name()).into());
            }

            self.emit_value(pending, None)?;
        }

        Ok(())
    }

    /// Handle a token that is not an option.
    fn positional(&mut self, token: &str) -> Result<(), Halt> {
        if let Some(collector) = &self.collector {
            let name = collector.name.clone();
            let limit = collector.trailing.limit();

            let count = self.acc.push_trailing(&name, cast(token));

            if Some(count) == limit {
                debug!(argument = %name, count, "trailing arguments complete");
                self.collector = None;
            }

            return Ok(());
        }

        let schema = self.parser.schema;
        let spec = schema.argument_spec(token);

        if spec.is_none() && !self.parser.settings.allow_undefined_arguments {
            return Err(Error::UnrecognizedArgument(token.into()).into());
        }

        if self.parser.command.is_some() {
            if let Some(trailing) = spec.and_then(|s| s.trailing) {
                self.open(token, trailing);
                return Ok(());
            }
        }

        let occurrence = ArgumentOccurrence {
            name: token.into(),
            value: cast(token),
            defined: spec.is_some(),
        };

        self.acc.argument(occurrence, &mut *self.handler)?;

        Ok(())
    }

    /// Start collecting the tokens that follow into `name`.
    fn open(&mut self, name: &str, trailing: Trailing) {
        if trailing.limit() == Some(0) {
            return;
        }

        debug!(argument = name, ?trailing, "collecting trailing arguments");

        self.collector = Some(Collector {
            name: name.into(),
            trailing,
        });
    }

    /// Resolve an option left waiting for a value when none follows.
    fn flush(&mut self) -> Result<(), Halt> {
        let pending = match self.pending.take() {
            Some(pending) => pending,
            None => return Ok(()),
        };

        trace!(option = %pending.name, "flushing option without value");

        match &pending.spec {
            Some(spec) if spec.optional => self.emit_value(pending, None),
            Some(_) => Err(Error::ExpectedValue(pending.display_name()).into()),
            None => self.emit_flag(pending),
        }
    }

    fn emit_flag(&mut self, pending: Pending) -> Result<(), Halt> {
        let value = Value::Bool(!pending.negated);

        self.emit(pending, value, Merge::Replace)
    }

    fn emit_value(&mut self, pending: Pending, raw: Option<&str>) -> Result<(), Halt> {
        let (value, merge) = match &pending.spec {
            Some(spec) => {
                let value = coerce::bind(spec, raw, &pending.display_name())?;

                let merge = match (spec.value_type, raw) {
                    (ValueType::Array, Some(_)) => Merge::Append,
                    (ValueType::Array, None) => Merge::Retain,
                    _ => Merge::Replace,
                };

                (value, merge)
            }
            None => (raw.map_or(Value::Null, cast), Merge::Replace),
        };

        self.emit(pending, value, merge)
    }

    fn emit(&mut self, pending: Pending, value: Value, merge: Merge) -> Result<(), Halt> {
        let Pending {
            spec,
            name,
            long,
            negated,
        } = pending;

        let id = spec.as_ref().map_or_else(|| name.clone(), |s| s.id());

        let occurrence = OptionOccurrence {
            id: id.clone(),
            name,
            value,
            long,
            negated,
            defined: spec.is_some(),
        };

        let action = self.acc.option(occurrence, merge, &mut *self.handler)?;

        if action == Action::Ignore || spec.is_none() {
            return Ok(());
        }

        let schema = self.parser.schema;

        if schema.show_help && id == HELP_ID {
            return Err(Halt::Help);
        }

        if schema.show_usage && id == USAGE_ID {
            return Err(Halt::Usage);
        }

        if schema.version.is_some() && id == VERSION_ID {
            return Err(Halt::Version);
        }

        Ok(())
    }

    fn finish(mut self) -> Result<Matches, Halt> {
        self.flush()?;

        if let Some(collector) = &self.collector {
            let count = self.acc.trailing_len(&collector.name);

            collector.trailing.check(&collector.name, count)?;
        }

        let matches = self.acc.finish(&mut *self.handler)?;

        Ok(matches)
    }
}

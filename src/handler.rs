// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use crate::error::Result;
use crate::matches::Matches;
use crate::value::Value;

/// What to do with an occurrence once the handler has seen it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    /// Store the value in [Matches].
    Keep,
    /// Leave [Matches] untouched.
    Ignore,
}

impl Default for Action {
    fn default() -> Self {
        Action::Keep
    }
}

/// An option found on the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionOccurrence {
    /// Key the value is stored under: the option id for registered
    /// options, the name as specified for unknown ones.
    pub id: String,
    /// Name as resolved from the command line (without dashes). This is
    /// the full long name if an abbreviation was used.
    pub name: String,
    /// The final value, after conversion and transform.
    pub value: Value,
    /// Set if the option was specified in long form.
    pub long: bool,
    /// Set if the option was specified as `--no-<name>`.
    pub negated: bool,
    /// Set if the option is registered.
    pub defined: bool,
}

/// A positional argument found on the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentOccurrence {
    /// The token as specified.
    pub name: String,
    /// The token converted by [cast](crate::cast).
    pub value: Value,
    /// Set if the argument is registered.
    pub defined: bool,
}

/// Trait that an event handler can implement to observe (and customise)
/// the parse.
///
/// All methods have default implementations that do nothing, so handlers
/// only need to implement the events they care about.
///
/// # Return value
///
/// - The `option()` and `argument()` methods return [Action::Ignore] to
///   stop the occurrence being stored.
/// - If a handler call fails, parsing stops and the error is returned to
///   the caller of the parsing function.
pub trait Handler {
    /// Called once the default values have been stored and before any
    /// argument is read.
    fn start(&mut self, _matches: &mut Matches) -> Result<()> {
        Ok(())
    }

    /// Called for each option found.
    fn option(&mut self, _matches: &mut Matches, _occurrence: &OptionOccurrence) -> Result<Action> {
        Ok(Action::Keep)
    }

    /// Called for each positional argument found.
    fn argument(
        &mut self,
        _matches: &mut Matches,
        _occurrence: &ArgumentOccurrence,
    ) -> Result<Action> {
        Ok(Action::Keep)
    }

    /// Called once all arguments have been read.
    fn end(&mut self, _matches: &mut Matches) -> Result<()> {
        Ok(())
    }
}

impl<'a> fmt::Debug for dyn Handler + 'a {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Handler: {:p}", self)
    }
}

/// Handler used when the caller does not provide one.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHandler;

impl Handler for NoopHandler {}

impl<H: Handler + ?Sized> Handler for &mut H {
    fn start(&mut self, matches: &mut Matches) -> Result<()> {
        (**self).start(matches)
    }

    fn option(&mut self, matches: &mut Matches, occurrence: &OptionOccurrence) -> Result<Action> {
        (**self).option(matches, occurrence)
    }

    fn argument(
        &mut self,
        matches: &mut Matches,
        occurrence: &ArgumentOccurrence,
    ) -> Result<Action> {
        (**self).argument(matches, occurrence)
    }

    fn end(&mut self, matches: &mut Matches) -> Result<()> {
        (**self).end(matches)
    }
}

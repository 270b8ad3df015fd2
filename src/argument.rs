// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::error::{Error, Result};

/// Number of values a command-scoped argument collects.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Trailing {
    /// Exactly this many values.
    Exactly(usize),
    /// Between `min` and `max` values (`max` of `None` is unbounded).
    Range {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: Option<usize>,
    },
}

impl Default for Trailing {
    /// Any number of values.
    fn default() -> Self {
        Trailing::Range { min: 0, max: None }
    }
}

impl Trailing {
    /// Collect exactly `count` values.
    pub fn exactly(count: usize) -> Self {
        Trailing::Exactly(count)
    }

    /// Collect between `min` and `max` values.
    pub fn range(min: usize, max: usize) -> Self {
        Trailing::Range {
            min,
            max: Some(max),
        }
    }

    /// Collect `min` or more values.
    pub fn at_least(min: usize) -> Self {
        Trailing::Range { min, max: None }
    }

    /// Check the bounds, collapsing an equal range to an exact count.
    pub(crate) fn normalize(self, name: &str) -> Result<Self> {
        match self {
            Trailing::Range {
                min,
                max: Some(max),
            } if min > max => Err(Error::InvalidDefinition(format!(
                "trailing minimum ({}) greater than maximum ({}) for argument \"{}\"",
                min, max, name
            ))),
            Trailing::Range {
                min,
                max: Some(max),
            } if min == max => Ok(Trailing::Exactly(min)),
            t => Ok(t),
        }
    }

    /// The collector is full once this many values have been read.
    pub(crate) fn limit(&self) -> Option<usize> {
        match self {
            Trailing::Exactly(n) => Some(*n),
            Trailing::Range { max, .. } => *max,
        }
    }

    /// Check the number of values read when the collector is still open
    /// at the end of the input.
    pub(crate) fn check(&self, name: &str, count: usize) -> Result<()> {
        match *self {
            Trailing::Exactly(n) if count != n => Err(Error::TrailingCount {
                name: name.into(),
                count: n,
                minimum: false,
            }),
            Trailing::Range { min, .. } if count < min => Err(Error::TrailingCount {
                name: name.into(),
                count: min,
                minimum: true,
            }),
            _ => Ok(()),
        }
    }
}

/// Declaration of a positional argument.
///
/// Arguments are matched by name: the argument `build` is present in
/// [Matches](crate::Matches) as `true` when the token `build` is found.
/// Inside a command, an argument with [Trailing] set collects the tokens
/// that follow it instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// Name of the argument (the token to match).
    pub name: String,
    /// Description of the argument.
    pub description: Option<String>,
    /// Not shown in help or usage.
    pub hidden: bool,
    /// Text shown in help instead of the name for trailing arguments.
    pub synopsis: Option<String>,
    /// Values to collect inside a command.
    pub trailing: Option<Trailing>,
}

impl ArgumentSpec {
    /// Create a new argument.
    pub fn new(name: &str) -> Self {
        ArgumentSpec {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Specify the help text for the argument.
    pub fn description(self, description: &str) -> Self {
        ArgumentSpec {
            description: Some(description.into()),
            ..self
        }
    }

    /// Hide the argument from help and usage output.
    pub fn hidden(self) -> Self {
        ArgumentSpec {
            hidden: true,
            ..self
        }
    }

    /// Specify the help synopsis, eg. `set <key> [<value>]`.
    pub fn synopsis(self, synopsis: &str) -> Self {
        ArgumentSpec {
            synopsis: Some(synopsis.into()),
            ..self
        }
    }

    /// Collect the following tokens when used inside a command.
    pub fn trailing(self, trailing: Trailing) -> Self {
        ArgumentSpec {
            trailing: Some(trailing),
            ..self
        }
    }

    /// Name shown in help and usage.
    pub(crate) fn help_name(&self) -> &str {
        match (&self.synopsis, self.trailing) {
            (Some(synopsis), Some(_)) => synopsis,
            _ => &self.name,
        }
    }
}

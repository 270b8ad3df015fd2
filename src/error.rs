// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
///
/// The `Display` form of each variant is the single-line diagnostic shown
/// to the user (without the program name prefix).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    //------------------------------
    // Schema errors (programmer error)
    //------------------------------
    /// A malformed option, argument or command definition.
    #[error("invalid definition: {0}")]
    InvalidDefinition(String),

    /// A name, alias, argument or command was registered twice.
    #[error("{0} is already defined")]
    DuplicateDefinition(String),

    /// The package metadata file could not be loaded.
    #[error("cannot read package metadata: {0}")]
    Package(String),

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// User specified an option that is not registered.
    #[error("Unrecognized option '{0}'")]
    UnrecognizedOption(String),

    /// User specified a positional argument that is not registered.
    #[error("Unrecognized argument '{0}'")]
    UnrecognizedArgument(String),

    /// A long option prefix matches more than one long name.
    #[error("Option '{0}' is ambiguous")]
    AmbiguousOption(String),

    /// A mandatory option value was not specified.
    #[error("Option '{0}' requires an argument")]
    ExpectedValue(String),

    /// A value was given to a flag.
    #[error("Option '{0}' does not require an argument")]
    ValueNotExpected(String),

    /// `--no-` was specified without a name.
    #[error("A negated flag must contain a long name, eg. '--no-' is invalid, '--no-flag' is valid")]
    EmptyNegatedFlag,

    /// The option value cannot be converted to the declared type.
    #[error("Option '{option}' is not a {kind}")]
    TypeConversion {
        /// Option name as specified on the command line.
        option: String,
        /// Name of the declared type.
        kind: &'static str,
    },

    /// The option value is not one of the declared choices.
    #[error("Unrecognized choice '{0}'")]
    InvalidChoice(String),

    /// A command's trailing arguments do not satisfy the declared count.
    #[error("Command '{name}' expects {}{count} argument/s", minimum_prefix(.minimum))]
    TrailingCount {
        /// Name of the collecting argument (or command).
        name: String,
        /// Number of values expected.
        count: usize,
        /// Set if `count` is a lower bound rather than an exact value.
        minimum: bool,
    },

    /// A [Handler](crate::Handler) rejected an occurrence.
    #[error("{0}")]
    HandlerError(String),

    //------------------------------
    // Output errors
    //------------------------------
    /// Help, usage or version text could not be written.
    #[error("failed to write output: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

fn minimum_prefix(minimum: &bool) -> &'static str {
    if *minimum {
        "minimum "
    } else {
        ""
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

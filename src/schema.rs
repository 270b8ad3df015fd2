// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use tracing::trace;

use crate::argument::ArgumentSpec;
use crate::error::{Error, Result};
use crate::option::OptionSpec;
use crate::package::PackageInfo;

pub(crate) const HELP_ID: &str = "help";
pub(crate) const USAGE_ID: &str = "usage";
pub(crate) const VERSION_ID: &str = "version";

/// One entry of the help text, in declaration order.
#[derive(Clone, Debug)]
pub(crate) enum Line {
    Option(Rc<OptionSpec>),
    Argument(String),
    Text { text: String, prefix: String },
    Group(String),
    Columns(String, String),
}

/// The set of options and arguments a program (or command) accepts.
///
/// A schema is built once by chaining the consuming methods below and is
/// read-only while parsing. Registration methods that can fail return a
/// [Result] so that definition errors surface at the call that caused
/// them:
///
/// ```rust
/// # use argp::{ArgumentSpec, OptionSpec, Result, Schema};
/// # fn main() -> Result<()> {
/// let schema = Schema::new()
///     .option(OptionSpec::new('a').long("all"))?
///     .option(OptionSpec::with_long("depth").metavar("N"))?
///     .argument(ArgumentSpec::new("build"))?
///     .help()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Schema {
    /// All options, by declaration order.
    options: Vec<Rc<OptionSpec>>,
    short: HashMap<char, Rc<OptionSpec>>,
    /// Long names and aliases. Ordered so that all names sharing a prefix
    /// are adjacent.
    long: BTreeMap<String, Rc<OptionSpec>>,
    arguments: Vec<ArgumentSpec>,

    pub(crate) lines: Vec<Line>,

    pub(crate) show_help: bool,
    pub(crate) show_usage: bool,
    pub(crate) version: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) usages: Vec<String>,
    pub(crate) footer: Option<String>,
    pub(crate) email: Option<String>,
}

fn check_long_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidDefinition("the long name cannot be empty".into()));
    }

    if name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidDefinition(format!(
            "the long name \"{}\" cannot contain whitespace characters",
            name
        )));
    }

    Ok(())
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Schema::default()
    }

    /// Register an option.
    ///
    /// # Errors
    ///
    /// - [Error::InvalidDefinition] if neither name is given, the short
    ///   name is not alphanumeric, a long name contains whitespace, or a
    ///   negatable option has a short name or a value.
    /// - [Error::DuplicateDefinition] if any of the names is already
    ///   registered.
    pub fn option(mut self, spec: OptionSpec) -> Result<Self> {
        self.add_option(spec)?;
        Ok(self)
    }

    fn add_option(&mut self, spec: OptionSpec) -> Result<()> {
        if spec.short.is_none() && spec.long.is_none() {
            return Err(Error::InvalidDefinition(
                "at least a short or a long name must be configured".into(),
            ));
        }

        if spec.negate && spec.short.is_some() {
            return Err(Error::InvalidDefinition(
                "cannot configure a short name if the option is a negated flag".into(),
            ));
        }

        if spec.negate && !spec.is_flag() {
            return Err(Error::InvalidDefinition(format!(
                "option \"{}\" cannot be negated since it takes a value",
                spec.id()
            )));
        }

        if let Some(short) = spec.short {
            if !short.is_ascii_alphanumeric() {
                return Err(Error::InvalidDefinition(format!(
                    "the short name '{}' must be an alphanumeric character",
                    short
                )));
            }

            if self.short.contains_key(&short) {
                return Err(Error::DuplicateDefinition(format!(
                    "the short name \"{}\"",
                    short
                )));
            }
        }

        let mut long_names: Vec<&String> = Vec::new();
        long_names.extend(spec.long.iter());
        long_names.extend(spec.aliases.iter());

        for (i, name) in long_names.iter().enumerate() {
            check_long_name(name)?;

            if self.long.contains_key(*name) || long_names[..i].contains(name) {
                return Err(Error::DuplicateDefinition(format!(
                    "the long name \"{}\"",
                    name
                )));
            }
        }

        trace!(id = %spec.id(), "registered option");

        let spec = Rc::new(spec);

        if let Some(short) = spec.short {
            self.short.insert(short, spec.clone());
        }

        for name in spec.long.iter().chain(spec.aliases.iter()) {
            self.long.insert(name.clone(), spec.clone());
        }

        self.lines.push(Line::Option(spec.clone()));
        self.options.push(spec);

        Ok(())
    }

    /// Register a positional argument.
    ///
    /// # Errors
    ///
    /// - [Error::InvalidDefinition] if the name is empty or contains
    ///   whitespace, or the trailing range is inverted.
    /// - [Error::DuplicateDefinition] if the name is already registered.
    pub fn argument(mut self, spec: ArgumentSpec) -> Result<Self> {
        if spec.name.is_empty() || spec.name.chars().any(char::is_whitespace) {
            return Err(Error::InvalidDefinition(format!(
                "the argument \"{}\" cannot be empty or contain whitespace characters",
                spec.name
            )));
        }

        if self.argument_spec(&spec.name).is_some() {
            return Err(Error::DuplicateDefinition(format!(
                "the argument \"{}\"",
                spec.name
            )));
        }

        let trailing = match spec.trailing {
            Some(t) => Some(t.normalize(&spec.name)?),
            None => None,
        };

        trace!(name = %spec.name, "registered argument");

        self.lines.push(Line::Argument(spec.name.clone()));
        self.arguments.push(ArgumentSpec { trailing, ..spec });

        Ok(self)
    }

    /// Register the `-h, --help` option, which displays the help text.
    pub fn help(mut self) -> Result<Self> {
        self.add_option(
            OptionSpec::new('h')
                .long(HELP_ID)
                .description("Display this help message and exit"),
        )?;
        self.show_help = true;
        Ok(self)
    }

    /// Register the `--usage` option, which displays a short usage message.
    pub fn usage(mut self) -> Result<Self> {
        self.add_option(
            OptionSpec::with_long(USAGE_ID).description("Display a short usage message and exit"),
        )?;
        self.show_usage = true;
        Ok(self)
    }

    /// Register the `-v, --version` option, which displays `version`.
    pub fn version(mut self, version: &str) -> Result<Self> {
        self.add_option(
            OptionSpec::new('v')
                .long(VERSION_ID)
                .description("Output version information and exit"),
        )?;
        self.version = Some(version.into());
        Ok(self)
    }

    /// Use the description, version and bug report address from package
    /// metadata. The `--version` option is registered if a version is
    /// available.
    pub fn package(self, package: &PackageInfo) -> Result<Self> {
        let mut schema = self;

        if let Some(description) = &package.description {
            schema.description = Some(description.clone());
        }

        if let Some(email) = &package.email {
            schema.email = Some(email.clone());
        }

        if let Some(version) = package.version_text() {
            schema = schema.version(&version)?;
        }

        Ok(schema)
    }

    /// Specify the description shown after the usage line in help.
    pub fn description(self, description: &str) -> Self {
        Schema {
            description: Some(description.into()),
            ..self
        }
    }

    /// Replace the generated usage line with custom ones.
    pub fn usages(self, usages: Vec<&str>) -> Self {
        Schema {
            usages: usages.into_iter().map(String::from).collect(),
            ..self
        }
    }

    /// Specify text shown at the end of the help.
    pub fn footer(self, footer: &str) -> Self {
        Schema {
            footer: Some(footer.into()),
            ..self
        }
    }

    /// Specify the address bugs should be reported to.
    pub fn email(self, email: &str) -> Self {
        Schema {
            email: Some(email.into()),
            ..self
        }
    }

    /// Add a line of text to the help.
    pub fn text(self, text: &str) -> Self {
        self.text_with_prefix(text, "")
    }

    /// Add a line of text to the help, with each wrapped line prefixed.
    pub fn text_with_prefix(mut self, text: &str, prefix: &str) -> Self {
        self.lines.push(Line::Text {
            text: text.into(),
            prefix: prefix.into(),
        });
        self
    }

    /// Add a group heading to the help.
    pub fn group(mut self, title: &str) -> Self {
        self.lines.push(Line::Group(title.into()));
        self
    }

    /// Add a two-column line to the help.
    pub fn columns(mut self, left: &str, right: &str) -> Self {
        self.lines.push(Line::Columns(left.into(), right.into()));
        self
    }

    /// Resolve a long option name, allowing unambiguous abbreviations.
    ///
    /// An exact match is preferred. Otherwise every long name (including
    /// aliases) starting with `name` is considered. If `negated` is set,
    /// only negatable flags are considered.
    ///
    /// # Return value
    ///
    /// - `Ok(None)` if no option matches or `name` is empty.
    /// - [Error::AmbiguousOption] if more than one option matches.
    pub fn resolve_long(&self, name: &str, negated: bool) -> Result<Option<Rc<OptionSpec>>> {
        // Every name starts with the empty string.
        if name.is_empty() {
            return Ok(None);
        }

        let candidate = |spec: &OptionSpec| !negated || (spec.negate && spec.is_flag());

        if let Some(spec) = self.long.get(name) {
            if candidate(spec) {
                return Ok(Some(spec.clone()));
            }
        }

        let mut found: Option<&Rc<OptionSpec>> = None;

        for (key, spec) in self.long.range(name.to_string()..) {
            if !key.starts_with(name) {
                break;
            }

            if !candidate(spec) {
                continue;
            }

            match found {
                // An alias of an option already found.
                Some(f) if Rc::ptr_eq(f, spec) => (),
                Some(_) => {
                    let prefix = if negated { "--no-" } else { "--" };
                    return Err(Error::AmbiguousOption(format!("{}{}", prefix, name)));
                }
                None => found = Some(spec),
            }
        }

        if let Some(spec) = found {
            trace!(abbreviation = name, resolved = %spec.id(), "resolved abbreviation");
        }

        Ok(found.cloned())
    }

    /// Resolve a short option name. Short names are never abbreviated.
    pub fn resolve_short(&self, name: char) -> Option<Rc<OptionSpec>> {
        self.short.get(&name).cloned()
    }

    /// Determine if `name` is registered as a long name or alias.
    pub fn has_long(&self, name: &str) -> bool {
        self.long.contains_key(name)
    }

    /// Returns the argument with the specified name.
    pub fn argument_spec(&self, name: &str) -> Option<&ArgumentSpec> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// All registered options, in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.iter().map(|o| o.as_ref())
    }

    /// All registered arguments, in declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.arguments.iter()
    }

    pub(crate) fn short_options(&self) -> impl Iterator<Item = &Rc<OptionSpec>> {
        self.options.iter().filter(|o| o.short.is_some())
    }
}

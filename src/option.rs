// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

const SHORT_PREFIX: &str = "-";
const LONG_PREFIX: &str = "--";
const NEGATE_PREFIX: &str = "no-";

/// The type an option value is converted to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// Value is passed through unchanged.
    String,
    /// Value must be a numeric literal.
    Number,
    /// Value must be `true` or `false`.
    Boolean,
    /// Value is split on commas and each element is converted separately.
    Array,
}

impl Default for ValueType {
    fn default() -> Self {
        ValueType::String
    }
}

impl ValueType {
    /// Name of the type, as shown in conversion errors.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::String => "String",
            ValueType::Number => "Number",
            ValueType::Boolean => "Boolean",
            ValueType::Array => "Array",
        }
    }

    /// The value an option of this type has when no default is given.
    pub fn default_value(&self) -> Value {
        match self {
            ValueType::String => Value::Null,
            ValueType::Number => Value::Number(0.0),
            ValueType::Boolean => Value::Bool(false),
            ValueType::Array => Value::Array(Vec::new()),
        }
    }
}

/// Function applied to an option value after conversion and choice
/// validation. It receives the typed value and the option name.
#[derive(Clone)]
pub struct Transform(Rc<dyn Fn(Value, &str) -> Value>);

impl Transform {
    /// Wrap a transform function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Value, &str) -> Value + 'static,
    {
        Transform(Rc::new(f))
    }

    pub(crate) fn apply(&self, value: Value, name: &str) -> Value {
        (self.0)(value, name)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Transform: {:p}", Rc::as_ptr(&self.0))
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Transform) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Declaration of a single option.
///
/// An option without a metavariable is a flag. The canonical id (the key
/// used in [Matches](crate::Matches)) is the long name, or the short name if
/// no long name is given.
///
/// # Note
///
/// - All members are public for handler convenience.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionSpec {
    /// Single alphanumeric character short name.
    pub short: Option<char>,
    /// Long name (without the leading dashes).
    pub long: Option<String>,
    /// Additional long names resolving to this option.
    pub aliases: Vec<String>,
    /// Placeholder shown in help for the value. Options without one are flags.
    pub metavar: Option<String>,
    /// Flag defaults to `true` and `--no-<long>` turns it off.
    pub negate: bool,
    /// The value may be omitted.
    pub optional: bool,
    /// Type the value is converted to.
    pub value_type: ValueType,
    /// Explicit default value (see [OptionSpec::default_value]).
    pub default: Option<Value>,
    /// Closed set of accepted values (ignored for optional values).
    pub choices: Option<Vec<Value>>,
    /// Applied to the value last.
    pub transform: Option<Transform>,
    /// Description of the option.
    pub description: Option<String>,
    /// Not shown in help or usage.
    pub hidden: bool,
}

impl OptionSpec {
    /// Create an option with only a short name.
    pub fn new(short: char) -> Self {
        OptionSpec::default().short(short)
    }

    /// Create an option with only a long name.
    pub fn with_long(long: &str) -> Self {
        OptionSpec::default().long(long)
    }

    /// Specify the short name.
    pub fn short(self, short: char) -> Self {
        OptionSpec {
            short: Some(short),
            ..self
        }
    }

    /// Specify the long name.
    pub fn long(self, long: &str) -> Self {
        OptionSpec {
            long: Some(long.into()),
            ..self
        }
    }

    /// Add an alias long name.
    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Specify that the option takes a value shown as `metavar` in help.
    pub fn metavar(self, metavar: &str) -> Self {
        OptionSpec {
            metavar: Some(metavar.into()),
            ..self
        }
    }

    /// Make a flag negatable (`--no-<long>`), defaulting to `true`.
    pub fn negate(self) -> Self {
        OptionSpec {
            negate: true,
            ..self
        }
    }

    /// Allow the value to be omitted.
    pub fn optional(self) -> Self {
        OptionSpec {
            optional: true,
            ..self
        }
    }

    /// Specify the value type.
    pub fn value_type(self, value_type: ValueType) -> Self {
        OptionSpec { value_type, ..self }
    }

    /// Specify the default value.
    pub fn default_value<V: Into<Value>>(self, value: V) -> Self {
        OptionSpec {
            default: Some(value.into()),
            ..self
        }
    }

    /// Restrict the value to a closed set.
    pub fn choices<V: Into<Value>>(self, choices: Vec<V>) -> Self {
        OptionSpec {
            choices: Some(choices.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    /// Specify a function applied to the final value.
    pub fn transform<F>(self, f: F) -> Self
    where
        F: Fn(Value, &str) -> Value + 'static,
    {
        OptionSpec {
            transform: Some(Transform::new(f)),
            ..self
        }
    }

    /// Specify the help text for the option.
    pub fn description(self, description: &str) -> Self {
        OptionSpec {
            description: Some(description.into()),
            ..self
        }
    }

    /// Hide the option from help and usage output.
    pub fn hidden(self) -> Self {
        OptionSpec {
            hidden: true,
            ..self
        }
    }

    /// Key used for the option in [Matches](crate::Matches).
    pub fn id(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::new(),
        }
    }

    /// An option without a metavariable takes no value.
    pub fn is_flag(&self) -> bool {
        self.metavar.is_none()
    }

    /// The value the option has when it is not specified.
    ///
    /// Flags default to their `negate` setting. Otherwise the explicit
    /// default, or the default for the value type.
    pub fn default_value_or_type(&self) -> Value {
        if self.is_flag() {
            return Value::Bool(self.negate);
        }

        match &self.default {
            Some(v) => v.clone(),
            None => self.value_type.default_value(),
        }
    }

    /// Choices are only checked for mandatory values.
    pub(crate) fn effective_choices(&self) -> Option<&[Value]> {
        if self.optional || self.is_flag() {
            return None;
        }

        self.choices.as_deref()
    }

    /// Name of the option as it would be written on the command line,
    /// preferring the long form.
    pub fn display_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) if self.negate => format!("{}{}{}", LONG_PREFIX, NEGATE_PREFIX, long),
            (Some(long), _) => format!("{}{}", LONG_PREFIX, long),
            (None, Some(short)) => format!("{}{}", SHORT_PREFIX, short),
            (None, None) => String::new(),
        }
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names: Vec<String> = Vec::new();

        if let Some(short) = self.short {
            names.push(format!("{}{}", SHORT_PREFIX, short));
        }

        if self.long.is_some() {
            names.push(self.display_name());
        }

        for alias in &self.aliases {
            names.push(format!("{}{}", LONG_PREFIX, alias));
        }

        let value = match (&self.metavar, self.optional) {
            (Some(metavar), true) => format!("[={}]", metavar),
            (Some(metavar), false) => format!("={}", metavar),
            (None, _) => "".into(),
        };

        write!(f, "{}{}", names.join(", "), value)
    }
}

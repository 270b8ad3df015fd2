// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::error::{Error, Result};
use crate::option::{OptionSpec, ValueType};
use crate::value::{cast, parse_number, Value};

const ARRAY_SEPARATOR: char = ',';

/// Convert a raw command-line value to the declared type.
///
/// `name` is the option as specified on the command line and is only used
/// for the error.
pub(crate) fn convert(value_type: ValueType, raw: &str, name: &str) -> Result<Value> {
    let conversion_error = || Error::TypeConversion {
        option: name.into(),
        kind: value_type.name(),
    };

    let value = match value_type {
        ValueType::String => Value::String(raw.into()),
        ValueType::Number => Value::Number(parse_number(raw).ok_or_else(conversion_error)?),
        ValueType::Boolean => match raw {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => return Err(conversion_error()),
        },
        ValueType::Array => Value::Array(raw.split(ARRAY_SEPARATOR).map(cast).collect()),
    };

    Ok(value)
}

/// Produce the final value of a registered (non-flag) option.
///
/// - An absent value gives the default, which is not converted.
/// - A present value is converted and checked against the choices.
/// - The transform, if any, is applied last in both cases.
pub(crate) fn bind(spec: &OptionSpec, raw: Option<&str>, name: &str) -> Result<Value> {
    let value = match raw {
        None => spec.default_value_or_type(),
        Some(raw) => {
            let value = convert(spec.value_type, raw, name)?;

            if let Some(choices) = spec.effective_choices() {
                if !choices.contains(&value) {
                    return Err(Error::InvalidChoice(value.to_string()));
                }
            }

            value
        }
    };

    let value = match &spec.transform {
        Some(transform) => transform.apply(value, &spec.id()),
        None => value,
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        #[derive(Debug)]
        struct TestData<'a> {
            value_type: ValueType,
            raw: &'a str,
            result: Result<Value>,
        }

        let tests = &[
            TestData {
                value_type: ValueType::String,
                raw: "123",
                result: Ok(Value::String("123".into())),
            },
            TestData {
                value_type: ValueType::String,
                raw: "",
                result: Ok(Value::String("".into())),
            },
            TestData {
                value_type: ValueType::Number,
                raw: "-12.34",
                result: Ok(Value::Number(-12.34)),
            },
            TestData {
                value_type: ValueType::Number,
                raw: "abc",
                result: Err(Error::TypeConversion {
                    option: "--n".into(),
                    kind: "Number",
                }),
            },
            TestData {
                value_type: ValueType::Number,
                raw: "",
                result: Err(Error::TypeConversion {
                    option: "--n".into(),
                    kind: "Number",
                }),
            },
            TestData {
                value_type: ValueType::Boolean,
                raw: "true",
                result: Ok(Value::Bool(true)),
            },
            TestData {
                value_type: ValueType::Boolean,
                raw: "false",
                result: Ok(Value::Bool(false)),
            },
            TestData {
                value_type: ValueType::Boolean,
                raw: "yes",
                result: Err(Error::TypeConversion {
                    option: "--n".into(),
                    kind: "Boolean",
                }),
            },
            TestData {
                value_type: ValueType::Array,
                raw: "1,true,a",
                result: Ok(Value::Array(vec![
                    Value::Number(1.0),
                    Value::Bool(true),
                    Value::String("a".into()),
                ])),
            },
            TestData {
                value_type: ValueType::Array,
                raw: "-1.2,foo",
                result: Ok(Value::Array(vec![
                    Value::Number(-1.2),
                    Value::String("foo".into()),
                ])),
            },
            TestData {
                value_type: ValueType::Array,
                raw: "x",
                result: Ok(Value::Array(vec![Value::String("x".into())])),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            assert_eq!(convert(d.value_type, d.raw, "--n"), d.result, "{}", msg);
        }
    }

    #[test]
    fn test_bind() {
        #[derive(Debug)]
        struct TestData<'a> {
            spec: OptionSpec,
            raw: Option<&'a str>,
            result: Result<Value>,
        }

        let tests = vec![
            TestData {
                spec: OptionSpec::with_long("a").metavar("A"),
                raw: None,
                result: Ok(Value::Null),
            },
            TestData {
                // Defaults are not converted.
                spec: OptionSpec::with_long("a")
                    .metavar("A")
                    .value_type(ValueType::Number)
                    .default_value("many"),
                raw: None,
                result: Ok(Value::String("many".into())),
            },
            TestData {
                spec: OptionSpec::with_long("a")
                    .metavar("A")
                    .value_type(ValueType::Number)
                    .choices(vec![1, 2]),
                raw: Some("2"),
                result: Ok(Value::Number(2.0)),
            },
            TestData {
                spec: OptionSpec::with_long("a")
                    .metavar("A")
                    .value_type(ValueType::Number)
                    .choices(vec![1, 2]),
                raw: Some("3"),
                result: Err(Error::InvalidChoice("3".into())),
            },
            TestData {
                // Strict equality: the string "1" is not the number 1.
                spec: OptionSpec::with_long("a").metavar("A").choices(vec![1, 2]),
                raw: Some("1"),
                result: Err(Error::InvalidChoice("1".into())),
            },
            TestData {
                // Choices are ignored for optional values.
                spec: OptionSpec::with_long("a")
                    .metavar("A")
                    .optional()
                    .choices(vec!["x"]),
                raw: Some("y"),
                result: Ok(Value::String("y".into())),
            },
            TestData {
                spec: OptionSpec::with_long("a")
                    .metavar("A")
                    .transform(|v, _| Value::String(format!("-> {} <-", v))),
                raw: Some("foo"),
                result: Ok(Value::String("-> foo <-".into())),
            },
            TestData {
                // The transform also sees defaults.
                spec: OptionSpec::with_long("a")
                    .metavar("A")
                    .default_value("dflt")
                    .transform(|v, name| Value::String(format!("{}:{}", name, v))),
                raw: None,
                result: Ok(Value::String("a:dflt".into())),
            },
            TestData {
                spec: OptionSpec::with_long("a")
                    .metavar("A")
                    .value_type(ValueType::Boolean)
                    .choices(vec![true]),
                raw: Some("false"),
                result: Err(Error::InvalidChoice("false".into())),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            assert_eq!(bind(&d.spec, d.raw, "--a"), d.result, "{}", msg);
        }
    }
}

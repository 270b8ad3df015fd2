// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use tracing::trace;

use crate::error::Result;
use crate::handler::{Action, ArgumentOccurrence, Handler, OptionOccurrence};
use crate::matches::Matches;
use crate::schema::Schema;
use crate::value::Value;

/// How an option value is combined with the value already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Merge {
    /// Overwrite the stored value.
    Replace,
    /// Add the elements of an array value to the stored array.
    Append,
    /// Leave a stored array as it is (an array option given without a
    /// value).
    Retain,
}

/// Builds the [Matches] for one parse from the defaults and the
/// occurrences found, calling the handler for each.
#[derive(Debug)]
pub(crate) struct Accumulator {
    matches: Matches,
    /// Arguments held back until all options have been emitted.
    sorted: Option<Vec<ArgumentOccurrence>>,
}

impl Accumulator {
    /// Store the default value of every option and argument.
    ///
    /// In a command scope, the command name and the arguments collecting
    /// trailing values start as empty arrays; otherwise arguments start
    /// as `false`.
    pub(crate) fn new(schema: &Schema, command: Option<&str>, sort: bool) -> Self {
        let mut matches = Matches::new();

        if let Some(name) = command {
            matches.set(name, Value::Array(Vec::new()));
            matches.set_command(name);
        }

        for spec in schema.options() {
            matches.set(&spec.id(), spec.default_value_or_type());
        }

        for spec in schema.arguments() {
            let value = match (command, spec.trailing) {
                (Some(_), Some(_)) => Value::Array(Vec::new()),
                _ => Value::Bool(false),
            };

            matches.set(&spec.name, value);
        }

        Accumulator {
            matches,
            sorted: if sort { Some(Vec::new()) } else { None },
        }
    }

    pub(crate) fn start(&mut self, handler: &mut dyn Handler) -> Result<()> {
        handler.start(&mut self.matches)
    }

    /// Emit an option occurrence. Unless the handler ignores it, the value
    /// is combined with the one stored under the occurrence id as `merge`
    /// specifies. Only an array stored value is appended to or retained.
    pub(crate) fn option(
        &mut self,
        occurrence: OptionOccurrence,
        merge: Merge,
        handler: &mut dyn Handler,
    ) -> Result<Action> {
        let action = handler.option(&mut self.matches, &occurrence)?;

        trace!(id = %occurrence.id, value = %occurrence.value, ?action, "option");

        if action == Action::Ignore {
            return Ok(action);
        }

        let OptionOccurrence { id, value, .. } = occurrence;

        let stored_array = matches!(self.matches.get(&id), Some(Value::Array(_)));

        match (merge, value) {
            (Merge::Retain, _) if stored_array => (),
            (Merge::Append, Value::Array(new)) if stored_array => {
                if let Some(Value::Array(existing)) = self.matches.get_mut(&id) {
                    existing.extend(new);
                }
            }
            (_, value) => self.matches.set(&id, value),
        }

        Ok(action)
    }

    /// Emit an argument occurrence, or hold it back in sort mode.
    pub(crate) fn argument(
        &mut self,
        occurrence: ArgumentOccurrence,
        handler: &mut dyn Handler,
    ) -> Result<()> {
        if let Some(sorted) = self.sorted.as_mut() {
            sorted.push(occurrence);
            return Ok(());
        }

        self.emit_argument(occurrence, handler)
    }

    fn emit_argument(
        &mut self,
        occurrence: ArgumentOccurrence,
        handler: &mut dyn Handler,
    ) -> Result<()> {
        let action = handler.argument(&mut self.matches, &occurrence)?;

        trace!(name = %occurrence.name, ?action, "argument");

        if action == Action::Keep {
            self.matches.set(&occurrence.name, true);
        }

        Ok(())
    }

    /// Add a value to the array collecting trailing arguments, returning
    /// the number of values collected so far.
    pub(crate) fn push_trailing(&mut self, name: &str, value: Value) -> usize {
        match self.matches.get_mut(name) {
            Some(Value::Array(values)) => {
                values.push(value);
                values.len()
            }
            _ => {
                self.matches.set(name, vec![value]);
                1
            }
        }
    }

    pub(crate) fn trailing_len(&self, name: &str) -> usize {
        self.matches.array(name).map_or(0, |a| a.len())
    }

    /// Emit the arguments held back in sort mode and call the end handler.
    pub(crate) fn finish(mut self, handler: &mut dyn Handler) -> Result<Matches> {
        if let Some(sorted) = self.sorted.take() {
            for occurrence in sorted {
                self.emit_argument(occurrence, handler)?;
            }
        }

        handler.end(&mut self.matches)?;

        Ok(self.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{ArgumentSpec, Trailing};
    use crate::handler::NoopHandler;
    use crate::option::{OptionSpec, ValueType};

    fn schema() -> Schema {
        Schema::new()
            .option(OptionSpec::new('a').long("all"))
            .unwrap()
            .option(OptionSpec::with_long("color").negate())
            .unwrap()
            .option(
                OptionSpec::with_long("list")
                    .metavar("L")
                    .value_type(ValueType::Array)
                    .default_value(vec![0]),
            )
            .unwrap()
            .argument(ArgumentSpec::new("build"))
            .unwrap()
            .argument(ArgumentSpec::new("set").trailing(Trailing::range(1, 2)))
            .unwrap()
    }

    fn occurrence(id: &str, value: Value) -> OptionOccurrence {
        OptionOccurrence {
            id: id.into(),
            name: id.into(),
            value,
            long: true,
            negated: false,
            defined: true,
        }
    }

    #[derive(Default)]
    struct IgnoreHandler {
        options: Vec<String>,
        arguments: Vec<String>,
    }

    impl Handler for IgnoreHandler {
        fn option(&mut self, _: &mut Matches, occurrence: &OptionOccurrence) -> Result<Action> {
            self.options.push(occurrence.id.clone());
            Ok(Action::Ignore)
        }

        fn argument(&mut self, _: &mut Matches, occurrence: &ArgumentOccurrence) -> Result<Action> {
            self.arguments.push(occurrence.name.clone());
            Ok(Action::Ignore)
        }
    }

    #[test]
    fn test_defaults() {
        let schema = schema();

        let acc = Accumulator::new(&schema, None, false);
        let matches = acc.finish(&mut NoopHandler).unwrap();

        let entries: Vec<(&str, &Value)> = matches.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("all", &Value::Bool(false)),
                ("color", &Value::Bool(true)),
                ("list", &Value::Array(vec![Value::Number(0.0)])),
                ("build", &Value::Bool(false)),
                ("set", &Value::Bool(false)),
            ]
        );
        assert_eq!(matches.command(), None);

        let acc = Accumulator::new(&schema, Some("config"), false);
        let matches = acc.finish(&mut NoopHandler).unwrap();

        assert_eq!(matches.get("config"), Some(&Value::Array(vec![])));
        assert_eq!(matches.get("set"), Some(&Value::Array(vec![])));
        assert_eq!(matches.get("build"), Some(&Value::Bool(false)));
        assert_eq!(matches.command(), Some("config"));
    }

    #[test]
    fn test_array_append() {
        let schema = schema();

        let mut acc = Accumulator::new(&schema, None, false);

        #[derive(Debug)]
        struct TestData {
            value: Value,
            merge: Merge,
            result: Value,
        }

        let tests = &[
            TestData {
                value: Value::from(vec![1, 2]),
                merge: Merge::Append,
                result: Value::from(vec![0, 1, 2]),
            },
            TestData {
                value: Value::from(vec![3]),
                merge: Merge::Append,
                result: Value::from(vec![0, 1, 2, 3]),
            },
            TestData {
                // Array option without a value: its default.
                value: Value::from(vec![0]),
                merge: Merge::Retain,
                result: Value::from(vec![0, 1, 2, 3]),
            },
            TestData {
                value: Value::from(vec![4]),
                merge: Merge::Append,
                result: Value::from(vec![0, 1, 2, 3, 4]),
            },
            TestData {
                value: Value::from(vec![5]),
                merge: Merge::Replace,
                result: Value::from(vec![5]),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            acc.option(occurrence("list", d.value.clone()), d.merge, &mut NoopHandler)
                .unwrap();

            assert_eq!(acc.matches.get("list"), Some(&d.result), "{}", msg);
        }

        // A value that is not an array replaces the stored one.
        acc.option(occurrence("list", Value::Null), Merge::Retain, &mut NoopHandler)
            .unwrap();
        acc.option(occurrence("list", Value::from(vec![6])), Merge::Append, &mut NoopHandler)
            .unwrap();

        let matches = acc.finish(&mut NoopHandler).unwrap();

        assert_eq!(matches.get("list"), Some(&Value::from(vec![6])));

        // The registered default is left untouched.
        let list = schema.options().find(|o| o.id() == "list").unwrap();
        assert_eq!(list.default, Some(Value::from(vec![0])));
    }

    #[test]
    fn test_ignore() {
        let schema = schema();
        let mut handler = IgnoreHandler::default();

        let mut acc = Accumulator::new(&schema, None, false);

        let action = acc
            .option(occurrence("all", Value::Bool(true)), Merge::Replace, &mut handler)
            .unwrap();
        assert_eq!(action, Action::Ignore);

        acc.argument(
            ArgumentOccurrence {
                name: "build".into(),
                value: Value::from("build"),
                defined: true,
            },
            &mut handler,
        )
        .unwrap();

        let matches = acc.finish(&mut handler).unwrap();

        assert_eq!(matches.get("all"), Some(&Value::Bool(false)));
        assert_eq!(matches.get("build"), Some(&Value::Bool(false)));
        assert_eq!(handler.options, vec!["all".to_string()]);
        assert_eq!(handler.arguments, vec!["build".to_string()]);
    }

    #[test]
    fn test_trailing() {
        let schema = schema();
        let mut acc = Accumulator::new(&schema, Some("config"), false);

        assert_eq!(acc.trailing_len("set"), 0);
        assert_eq!(acc.push_trailing("set", Value::from(1)), 1);
        assert_eq!(acc.push_trailing("set", Value::from("b")), 2);
        assert_eq!(acc.trailing_len("set"), 2);

        let matches = acc.finish(&mut NoopHandler).unwrap();
        assert_eq!(
            matches.get("set"),
            Some(&Value::from(vec![Value::from(1), Value::from("b")]))
        );
    }
}

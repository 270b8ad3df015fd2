// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::io::Write;
use std::process;

use tracing::debug;

use crate::command::{Command, Scope};
use crate::error::{Error, Result};
use crate::handler::{Handler, NoopHandler};
use crate::matches::Matches;
use crate::schema::Schema;

const DEFAULT_EXIT_STATUS: i32 = 1;
const DEFAULT_COLUMNS: usize = 80;

/// Wrap widths below this are too narrow for the help layout.
const MIN_COLUMNS: usize = 32;

/// Settings used to control the parsers behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// If set, options that are not registered are stored by name; by
    /// default an unknown option is considered an error.
    pub(crate) allow_undefined_options: bool,

    /// If set, arguments that are not registered are stored by name; by
    /// default an unknown argument is considered an error.
    pub(crate) allow_undefined_arguments: bool,

    /// Pass all options to the [Handler] before any argument.
    pub(crate) sort: bool,

    /// Exit status used by [App::parse()] on error.
    pub(crate) exit_status: i32,

    /// Width the help text is wrapped to.
    pub(crate) columns: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            allow_undefined_options: false,
            allow_undefined_arguments: false,
            sort: false,
            exit_status: DEFAULT_EXIT_STATUS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Specify that unknown options should be accepted (by default, the
    /// first unknown option will generate an error).
    ///
    /// An unknown option without a value is a flag; one with a value has
    /// the value converted by [cast](crate::cast).
    pub fn allow_undefined_options(self) -> Self {
        Settings {
            allow_undefined_options: true,
            ..self
        }
    }

    /// Specify that unknown positional arguments should be accepted
    /// (by default, they will generate an error).
    pub fn allow_undefined_arguments(self) -> Self {
        Settings {
            allow_undefined_arguments: true,
            ..self
        }
    }

    /// Emit all options before any argument. The order within each kind
    /// is preserved.
    pub fn sort(self) -> Self {
        Settings { sort: true, ..self }
    }

    /// Specify the exit status used when [App::parse()] fails.
    pub fn exit_status(self, exit_status: i32) -> Self {
        Settings {
            exit_status,
            ..self
        }
    }

    /// Specify the width the help text is wrapped to.
    ///
    /// # Note
    ///
    /// Values below 32 use the default width of 80 columns.
    pub fn columns(self, columns: usize) -> Self {
        Settings { columns, ..self }
    }

    pub(crate) fn wrap_width(&self) -> usize {
        if self.columns < MIN_COLUMNS {
            DEFAULT_COLUMNS
        } else {
            self.columns
        }
    }
}

/// Get the command-line arguments to pass to [App::parse_with_args()].
///
/// # Note
///
/// Used with [App::parse_with_args()]. However, this isn't usually
/// required: just call [App::parse()].
pub fn get_args() -> Vec<String> {
    let mut args: Vec<String> = env::args().collect();

    // Remove program name
    if !args.is_empty() {
        let _ = args.remove(0);
    }

    args
}

/// The result of a successful parse.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The options and arguments found.
    Matches(Matches),
    /// The help option was specified. Contains the help text.
    Help(String),
    /// The usage option was specified. Contains the usage text.
    Usage(String),
    /// The version option was specified. Contains the version text.
    Version(String),
}

impl Outcome {
    /// Returns the matches if the parse ran to completion.
    pub fn matches(&self) -> Option<&Matches> {
        match self {
            Outcome::Matches(matches) => Some(matches),
            _ => None,
        }
    }

    /// Convert into the matches if the parse ran to completion.
    pub fn into_matches(self) -> Option<Matches> {
        match self {
            Outcome::Matches(matches) => Some(matches),
            _ => None,
        }
    }
}

/// The main object used to represent the program.
///
/// All consumers of the crate need to create a
/// single object of this type.
#[derive(Clone, Default, Debug)]
pub struct App {
    pub(crate) name: String,
    pub(crate) schema: Schema,
    pub(crate) settings: Settings,
    commands: Vec<Command>,
}

impl App {
    /// Create a new application object. The name is shown in the help
    /// and in error messages.
    pub fn new(name: &str) -> Self {
        App {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Specify the top-level options and arguments.
    pub fn schema(self, schema: Schema) -> Self {
        App { schema, ..self }
    }

    /// Specify the parser settings.
    pub fn settings(self, settings: Settings) -> Self {
        App { settings, ..self }
    }

    /// Specify that unknown options should be accepted.
    ///
    /// See the [Settings] method of the same name for full details
    pub fn allow_undefined_options(self) -> Self {
        App {
            settings: self.settings.clone().allow_undefined_options(),
            ..self
        }
    }

    /// Specify that unknown positional arguments should be accepted.
    ///
    /// See the [Settings] method of the same name for full details
    pub fn allow_undefined_arguments(self) -> Self {
        App {
            settings: self.settings.clone().allow_undefined_arguments(),
            ..self
        }
    }

    /// Emit all options before any argument.
    ///
    /// See the [Settings] method of the same name for full details
    pub fn sort(self) -> Self {
        App {
            settings: self.settings.clone().sort(),
            ..self
        }
    }

    /// Register a command.
    ///
    /// # Errors
    ///
    /// - [Error::InvalidDefinition] if the name is empty or contains
    ///   whitespace, or the trailing range is inverted.
    /// - [Error::DuplicateDefinition] if the command is already registered.
    pub fn command(mut self, command: Command) -> Result<Self> {
        let command = command.validate()?;

        if self.find_command(&command.name).is_some() {
            return Err(Error::DuplicateDefinition(format!(
                "the command \"{}\"",
                command.name
            )));
        }

        debug!(command = %command.name, "registered command");

        self.commands.push(command);

        Ok(self)
    }

    /// All registered commands, in declaration order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub(crate) fn find_command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    fn main_scope(&self) -> Scope<'_> {
        Scope::route(self, &[]).0
    }

    /// Returns the help text.
    pub fn help_text(&self) -> String {
        self.main_scope().help_text()
    }

    /// Returns the short usage text.
    pub fn usage_text(&self) -> String {
        self.main_scope().usage_text()
    }

    /// Returns the version text (empty if no version is configured).
    pub fn version_text(&self) -> String {
        self.main_scope().version_text()
    }

    /// Write the help text, followed by a newline.
    pub fn generate_help<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "{}", self.help_text())?;

        Ok(())
    }

    /// Write the short usage text, followed by a newline.
    pub fn generate_usage<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "{}", self.usage_text())?;

        Ok(())
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// # Arguments
    ///
    /// - `cli_args`: Vector of string arguments. Specify your own,
    ///    or call [get_args()].
    ///
    /// # Notes
    ///
    /// - The `cli_args` vector must _not_ specify the program name. Use
    ///   [get_args()] as this handles this for you.
    /// - If the first argument is the name of a registered command, the
    ///   remaining arguments are parsed against that command.
    /// - Errors are returned rather than reported: nothing is printed and
    ///   the process does not exit.
    pub fn parse_with_args(&self, cli_args: Vec<String>) -> Result<Outcome> {
        self.parse_with_handler(cli_args, NoopHandler)
    }

    /// Same as [App::parse_with_args()], calling `handler` for each
    /// occurrence found.
    pub fn parse_with_handler<H: Handler>(
        &self,
        cli_args: Vec<String>,
        mut handler: H,
    ) -> Result<Outcome> {
        let (scope, args) = Scope::route(self, &cli_args);

        scope.parse(args, &mut handler)
    }

    /// Simplest interface to the parser.
    ///
    /// Parses the program arguments. The help, usage and version text is
    /// printed to stdout and the process exits with status zero. On error,
    /// the message is printed to stderr and the process exits with the
    /// configured exit status.
    pub fn parse(&self) -> Matches {
        self.argv(get_args(), NoopHandler)
    }

    /// Same as [App::parse()] but for the specified arguments and handler.
    pub fn argv<H: Handler>(&self, cli_args: Vec<String>, handler: H) -> Matches {
        match self.run(cli_args, handler) {
            Ok(matches) => matches,
            Err(exit) => exit.terminate(),
        }
    }

    /// Report an error found by the program itself in the same format as
    /// parse errors and exit with the configured exit status.
    pub fn fail(&self, message: &str) -> ! {
        self.failure(message).terminate()
    }

    /// Parse, turning anything that ends the program into an [Exit].
    fn run<H: Handler>(
        &self,
        cli_args: Vec<String>,
        mut handler: H,
    ) -> std::result::Result<Matches, Exit> {
        let (scope, args) = Scope::route(self, &cli_args);

        match scope.parse(args, &mut handler) {
            Ok(Outcome::Matches(matches)) => Ok(matches),
            Ok(Outcome::Help(text)) | Ok(Outcome::Usage(text)) | Ok(Outcome::Version(text)) => {
                Err(Exit {
                    stream: Stream::Stdout,
                    text,
                    status: 0,
                })
            }
            Err(e) => Err(Exit {
                stream: Stream::Stderr,
                text: scope.error_message(&e.to_string()),
                status: scope.exit_status(),
            }),
        }
    }

    fn failure(&self, message: &str) -> Exit {
        let scope = self.main_scope();

        Exit {
            stream: Stream::Stderr,
            text: scope.error_message(message),
            status: scope.exit_status(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Text to print before the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Exit {
    stream: Stream,
    text: String,
    status: i32,
}

impl Exit {
    fn terminate(self) -> ! {
        match self.stream {
            Stream::Stdout => println!("{}", self.text),
            Stream::Stderr => eprintln!("{}", self.text),
        }

        debug!(status = self.status, "exiting");

        process::exit(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{ArgumentSpec, Trailing};
    use crate::handler::{Action, ArgumentOccurrence, OptionOccurrence};
    use crate::option::{OptionSpec, ValueType};
    use crate::value::Value;

    use regex::Regex;
    use std::sync::{Arc, Mutex};

    /// Writer that stores all data written to it.
    #[derive(Default, Clone)]
    struct BufWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for BufWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.0.lock().unwrap().flush()
        }
    }

    impl ToString for BufWriter {
        fn to_string(&self) -> String {
            let output = self.0.lock().unwrap();

            String::from_utf8((*output).clone()).unwrap()
        }
    }

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    fn app() -> App {
        App::new("prog").schema(
            Schema::new()
                .description("Test program")
                .option(OptionSpec::new('a').long("all").description("Show all"))
                .unwrap()
                .option(
                    OptionSpec::new('n')
                        .long("number")
                        .metavar("N")
                        .value_type(ValueType::Number)
                        .description("A number"),
                )
                .unwrap()
                .option(OptionSpec::with_long("color").negate())
                .unwrap()
                .argument(ArgumentSpec::new("build").description("Build it"))
                .unwrap()
                .help()
                .unwrap()
                .usage()
                .unwrap()
                .version("v1.2.3")
                .unwrap(),
        )
    }

    #[test]
    fn test_settings() {
        let new_settings = Settings::new();
        let def_settings = Settings::default();

        assert_eq!(new_settings, def_settings);
        assert_eq!(def_settings.exit_status, 1);
        assert_eq!(def_settings.wrap_width(), 80);

        let settings = Settings::new()
            .allow_undefined_options()
            .allow_undefined_arguments()
            .sort()
            .exit_status(5)
            .columns(100);

        assert!(settings.allow_undefined_options);
        assert!(settings.allow_undefined_arguments);
        assert!(settings.sort);
        assert_eq!(settings.exit_status, 5);
        assert_eq!(settings.wrap_width(), 100);

        assert_eq!(Settings::new().columns(31).wrap_width(), 80);
        assert_eq!(Settings::new().columns(32).wrap_width(), 32);

        let app = App::new("x")
            .allow_undefined_options()
            .allow_undefined_arguments()
            .sort();

        assert!(app.settings.allow_undefined_options);
        assert!(app.settings.allow_undefined_arguments);
        assert!(app.settings.sort);
    }

    #[test]
    fn test_register_command() {
        let app = App::new("prog").command(Command::new("install")).unwrap();

        let result = app.clone().command(Command::new("install"));
        assert_eq!(
            result.err(),
            Some(Error::DuplicateDefinition("the command \"install\"".into()))
        );

        let result = app.clone().command(Command::new("in stall"));
        assert!(matches!(result, Err(Error::InvalidDefinition(_))));

        let app = app.command(Command::new("remove")).unwrap();
        let names: Vec<&str> = app.commands().map(|c| c.name()).collect();
        assert_eq!(names, vec!["install", "remove"]);
    }

    #[test]
    fn test_parse_with_args() {
        let app = app();

        #[derive(Debug)]
        struct TestData<'a> {
            args: Vec<&'a str>,
            result: Result<Vec<(&'a str, Value)>>,
        }

        let tests = vec![
            TestData {
                args: vec![],
                result: Ok(vec![
                    ("all", Value::Bool(false)),
                    ("number", Value::Number(0.0)),
                    ("color", Value::Bool(true)),
                    ("build", Value::Bool(false)),
                ]),
            },
            TestData {
                args: vec!["-a", "--num", "7", "build", "--no-color"],
                result: Ok(vec![
                    ("all", Value::Bool(true)),
                    ("number", Value::Number(7.0)),
                    ("color", Value::Bool(false)),
                    ("build", Value::Bool(true)),
                ]),
            },
            TestData {
                args: vec!["--foo"],
                result: Err(Error::UnrecognizedOption("--foo".into())),
            },
            TestData {
                args: vec!["foo"],
                result: Err(Error::UnrecognizedArgument("foo".into())),
            },
            TestData {
                args: vec!["-n", "x"],
                result: Err(Error::TypeConversion {
                    option: "-n".into(),
                    kind: "Number",
                }),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = app.parse_with_args(args(&d.args));

            let expected = match &d.result {
                Ok(expected) => expected,
                Err(e) => {
                    assert_eq!(result.err().as_ref(), Some(e), "{}", msg);
                    continue;
                }
            };

            let outcome = result.unwrap();
            let matches = outcome.matches().unwrap();

            let entries: Vec<(&str, Value)> = matches
                .iter()
                .filter(|(k, _)| !["help", "usage", "version"].contains(k))
                .map(|(k, v)| (k, v.clone()))
                .collect();

            assert_eq!(&entries, expected, "{}", msg);
        }
    }

    #[test]
    fn test_builtin_outcomes() {
        let app = app();

        let outcome = app.parse_with_args(args(&["--help"])).unwrap();
        assert_eq!(outcome, Outcome::Help(app.help_text()));
        assert!(outcome.matches().is_none());

        let outcome = app.parse_with_args(args(&["--usage"])).unwrap();
        assert_eq!(outcome, Outcome::Usage(app.usage_text()));

        let outcome = app.parse_with_args(args(&["-v"])).unwrap();
        assert_eq!(outcome, Outcome::Version("v1.2.3".into()));
        assert_eq!(outcome.into_matches(), None);
    }

    #[test]
    fn test_exit() {
        let app = app();

        #[derive(Debug)]
        struct TestData<'a> {
            args: Vec<&'a str>,
            exit_status: i32,
            result: std::result::Result<(), Exit>,
        }

        let hint = "Try 'prog --help' or 'prog --usage' for more information.";

        let tests = &[
            TestData {
                args: vec!["-a"],
                exit_status: 1,
                result: Ok(()),
            },
            TestData {
                args: vec!["--help"],
                exit_status: 1,
                result: Err(Exit {
                    stream: Stream::Stdout,
                    text: app.help_text(),
                    status: 0,
                }),
            },
            TestData {
                args: vec!["-v"],
                exit_status: 7,
                result: Err(Exit {
                    stream: Stream::Stdout,
                    text: "v1.2.3".into(),
                    status: 0,
                }),
            },
            TestData {
                args: vec!["--foo"],
                exit_status: 1,
                result: Err(Exit {
                    stream: Stream::Stderr,
                    text: format!("prog: Unrecognized option '--foo'\n{}", hint),
                    status: 1,
                }),
            },
            TestData {
                args: vec!["--foo"],
                exit_status: 7,
                result: Err(Exit {
                    stream: Stream::Stderr,
                    text: format!("prog: Unrecognized option '--foo'\n{}", hint),
                    status: 7,
                }),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let app = App {
                settings: Settings::new().exit_status(d.exit_status),
                ..app.clone()
            };

            let result = app.run(args(&d.args), NoopHandler).map(|_| ());

            assert_eq!(result, d.result, "{}", msg);
        }

        let app = App {
            settings: Settings::new().exit_status(4),
            ..app
        };

        assert_eq!(
            app.failure("cannot open file"),
            Exit {
                stream: Stream::Stderr,
                text: format!("prog: cannot open file\n{}", hint),
                status: 4,
            }
        );
    }

    #[test]
    fn test_generate_help() {
        let app = app();
        let mut writer = BufWriter::default();

        app.generate_help(&mut writer).unwrap();

        let value = writer.to_string();

        let patterns = &[
            concat!(
                r"^Usage: prog \[options\] \[arguments\]\n",
                r"\n",
                r"Test program\n",
                r"\n",
            ),
            r"\n  build +Build it\n",
            r"\n  -a, --all +Show all\n",
            r"\n  -n, --number=N +A number\n",
            r"\n      --no-color\n",
            r"\n  -v, --version +Output version information and exit\n$",
        ];

        for (i, pattern) in patterns.iter().enumerate() {
            let msg = format!("test[{}]: {:?}\n{}", i, pattern, value);

            let re = Regex::new(pattern).unwrap();
            assert!(re.is_match(&value), "{}", msg);
        }

        let mut writer = BufWriter::default();
        app.generate_usage(&mut writer).unwrap();

        assert_eq!(
            writer.to_string(),
            concat!(
                "Usage: prog [-a|--all] [-n|--number=N] [--no-color] [-h|--help] [--usage]\n",
                "         [-v|--version] [build]\n",
            )
        );
    }

    #[test]
    fn test_columns() {
        let app = App::new("prog")
            .schema(
                Schema::new()
                    .option(OptionSpec::new('a').long("all").description(
                        "A long description that does not fit in the available space",
                    ))
                    .unwrap(),
            )
            .settings(Settings::new().columns(50));

        let help = app.help_text();

        let blank = " ".repeat(30);

        let expected = format!(
            "Usage: prog [options]\n\n  -a, --all{}A long description\n{}  that does not fit\n{}  in the available\n{}  space",
            " ".repeat(19),
            blank,
            blank,
            blank,
        );

        assert_eq!(help, expected);
    }

    #[derive(Default)]
    struct Upper {
        seen: usize,
    }

    impl Handler for Upper {
        fn option(&mut self, matches: &mut Matches, occurrence: &OptionOccurrence) -> Result<Action> {
            self.seen += 1;

            if let Value::String(s) = &occurrence.value {
                matches.set(&occurrence.id, s.to_uppercase());
                return Ok(Action::Ignore);
            }

            Ok(Action::Keep)
        }

        fn argument(
            &mut self,
            matches: &mut Matches,
            occurrence: &ArgumentOccurrence,
        ) -> Result<Action> {
            let mut files = matches.array("files").map(|a| a.to_vec()).unwrap_or_default();
            files.push(occurrence.value.clone());
            matches.set("files", files);

            Ok(Action::Ignore)
        }
    }

    #[test]
    fn test_parse_with_handler() {
        let app = App::new("prog")
            .schema(
                Schema::new()
                    .option(OptionSpec::with_long("name").metavar("NAME"))
                    .unwrap()
                    .option(OptionSpec::new('q'))
                    .unwrap(),
            )
            .allow_undefined_arguments();

        let mut handler = Upper::default();

        let outcome = app
            .parse_with_handler(args(&["--name", "bob", "a.txt", "-q", "b.txt"]), &mut handler)
            .unwrap();

        let matches = outcome.into_matches().unwrap();

        assert_eq!(handler.seen, 2);
        assert_eq!(matches.string("name"), Some("BOB"));
        assert!(matches.flag("q"));
        assert_eq!(matches.array("files"), Some(&[Value::from("a.txt"), Value::from("b.txt")][..]));
        assert!(!matches.contains("a.txt"));
    }

    #[test]
    fn test_commands() {
        let app = App::new("prog")
            .schema(Schema::new().help().unwrap())
            .command(
                Command::new("cmd").schema(
                    Schema::new()
                        .argument(ArgumentSpec::new("x").trailing(Trailing::range(1, 2)))
                        .unwrap(),
                ),
            )
            .unwrap();

        let matches = app
            .parse_with_args(args(&["cmd", "x", "1", "2"]))
            .unwrap()
            .into_matches()
            .unwrap();

        let json = serde_json::to_string(&matches).unwrap();
        assert_eq!(json, r#"{"cmd":[],"x":[1.0,2.0]}"#);
        assert_eq!(matches.command(), Some("cmd"));

        assert!(app.parse_with_args(args(&["cmd", "x", "1"])).is_ok());

        let result = app.parse_with_args(args(&["cmd", "x"]));
        assert_eq!(
            result.err(),
            Some(Error::TrailingCount {
                name: "x".into(),
                count: 1,
                minimum: true,
            })
        );

        // The command has no help option of its own.
        let outcome = app.parse_with_args(args(&["--help"])).unwrap();
        assert_eq!(outcome, Outcome::Help(app.help_text()));

        let result = app.parse_with_args(args(&["cmd", "--help"]));
        assert_eq!(
            result.err(),
            Some(Error::UnrecognizedOption("--help".into()))
        );
    }

    #[test]
    fn test_flag_defaults() {
        let schema = Schema::new()
            .option(OptionSpec::with_long("plain"))
            .unwrap()
            .option(OptionSpec::with_long("negatable").negate())
            .unwrap();

        let app = App::new("prog").schema(schema);

        let matches = app.parse_with_args(vec![]).unwrap().into_matches().unwrap();

        for spec in app.schema.options() {
            assert_eq!(
                matches.get(&spec.id()),
                Some(&Value::Bool(spec.negate)),
                "{:?}",
                spec
            );
        }
    }

    #[test]
    fn test_typed_values_from_argv() {
        let schema = Schema::new()
            .option(
                OptionSpec::with_long("n")
                    .metavar("N")
                    .value_type(ValueType::Number),
            )
            .unwrap()
            .option(
                OptionSpec::with_long("b")
                    .metavar("B")
                    .value_type(ValueType::Boolean),
            )
            .unwrap()
            .option(
                OptionSpec::with_long("l")
                    .metavar("L")
                    .value_type(ValueType::Array),
            )
            .unwrap()
            .option(OptionSpec::with_long("s").metavar("S"))
            .unwrap();

        let app = App::new("prog").schema(schema);

        let values = vec![
            ("n", Value::Number(-3.5)),
            ("b", Value::Bool(false)),
            ("l", Value::from(vec![Value::from(1), Value::from("x"), Value::Bool(true)])),
            ("s", Value::from("hello world")),
        ];

        let cli_args: Vec<String> = values
            .iter()
            .map(|(k, v)| format!("--{}={}", k, v))
            .collect();

        let matches = app.parse_with_args(cli_args).unwrap().into_matches().unwrap();

        for (key, value) in &values {
            assert_eq!(matches.get(key), Some(value), "key: {:?}", key);
        }
    }
}

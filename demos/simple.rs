// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to declare options and arguments and read
/// the parsed values.
use argp::{App, ArgumentSpec, OptionSpec, Result, Schema, Settings, ValueType};

fn main() -> Result<()> {
    // Set RUST_LOG=argp=trace to see how each argument is handled.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let schema = Schema::new()
        .description("Example program showing the main option types.")
        .group("Options")
        // Support "-v" flag option.
        .option(OptionSpec::new('v').long("verbose").description("Verbose output"))?
        // Support "--no-color" flag option.
        .option(
            OptionSpec::with_long("color")
                .negate()
                .description("Disable colored output"),
        )?
        // Support "--name <value>" option.
        .option(
            OptionSpec::with_long("name")
                .metavar("NAME")
                .description("Name of the thing"),
        )?
        // Support "-n <value>" numeric option.
        .option(
            OptionSpec::new('n')
                .long("count")
                .alias("number")
                .metavar("N")
                .value_type(ValueType::Number)
                .default_value(1)
                .description("Number of times to do it"),
        )?
        // Support "--level[=<value>]" option with a restricted set of values.
        .option(
            OptionSpec::with_long("level")
                .metavar("LEVEL")
                .choices(vec!["low", "high"])
                .description("Level, either 'low' or 'high'"),
        )?
        // Support "--list <value>,<value>,..." option.
        .option(
            OptionSpec::with_long("list")
                .metavar("ITEMS")
                .value_type(ValueType::Array)
                .description("Comma separated list of items, can be specified multiple times"),
        )?
        .group("Arguments")
        .argument(ArgumentSpec::new("build").description("Build the thing"))?
        .argument(ArgumentSpec::new("clean").description("Clean the thing"))?
        .group("Informational options")
        .help()?
        .usage()?
        .version("v1.0.0")?
        .footer("Long options can be abbreviated, eg. '--verb' for '--verbose'.")
        .email("bugs@example.com");

    let app = App::new("simple")
        .schema(schema)
        .settings(Settings::new().allow_undefined_arguments());

    // Parse the command-line
    let matches = app.parse();

    if matches.flag("verbose") {
        println!("INFO: all values:");

        for (name, value) in matches.iter() {
            println!("INFO:   {}: {:?}", name, value);
        }
    }

    let json = serde_json::to_string_pretty(&matches).map_err(|e| {
        argp::Error::HandlerError(format!("cannot serialise result: {}", e))
    })?;

    println!("{}", json);

    Ok(())
}

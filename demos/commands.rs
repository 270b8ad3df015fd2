// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example of a program supporting commands, in the style of a package
/// manager:
///
/// ```bash
/// $ commands install foo bar --save
/// $ commands config set editor vim
/// $ commands config --help
/// ```
use argp::{
    get_args, App, ArgumentSpec, Command, OptionSpec, Result, Schema, Settings, Trailing,
};

fn config() -> Result<Command> {
    let schema = Schema::new()
        .usages(vec![
            "commands config set <key> <value>",
            "commands config get <key>",
            "commands config list [--global]",
        ])
        .description("Manage the configuration files.")
        .group("Commands")
        .argument(
            ArgumentSpec::new("set")
                .synopsis("set <key> <value>")
                .trailing(Trailing::exactly(2))
                .description("Set a configuration value"),
        )?
        .argument(
            ArgumentSpec::new("get")
                .synopsis("get <key>")
                .trailing(Trailing::exactly(1))
                .description("Show a configuration value"),
        )?
        .argument(ArgumentSpec::new("list").description("Show all configuration values"))?
        .group("Options")
        .option(
            OptionSpec::new('g')
                .long("global")
                .description("Use the global configuration file"),
        )?
        .help()?;

    Ok(Command::new("config").schema(schema))
}

fn install() -> Result<Command> {
    let schema = Schema::new()
        .description("Install one or more packages.")
        .group("Options")
        .option(
            OptionSpec::new('S')
                .long("save")
                .description("Save the packages to the dependencies"),
        )?
        .option(
            OptionSpec::with_long("registry")
                .metavar("URL")
                .default_value("https://registry.example.com")
                .description("Registry to install the packages from"),
        )?
        .help()?;

    Ok(Command::new("install")
        .schema(schema)
        .trailing(Trailing::at_least(1))
        .settings(Settings::new().sort()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let schema = Schema::new()
        .usages(vec!["commands <command> [options]", "commands [options]"])
        .description("Example package manager.")
        .group("Commands")
        .columns("config", "Manage the configuration files")
        .columns("install <pkg>...", "Install packages")
        .group("Options")
        .option(
            OptionSpec::with_long("color")
                .negate()
                .description("Disable colored output"),
        )?
        .help()?
        .usage()?
        .version("commands v1.0.0")?
        .text("")
        .text_with_prefix(
            "Run 'commands <command> --help' for the options supported by a command.",
            "  ",
        );

    let app = App::new("commands")
        .schema(schema)
        .command(config()?)?
        .command(install()?)?;

    let matches = app.argv(get_args(), argp::NoopHandler);

    match matches.command() {
        Some(name) => println!("command: {}", name),
        None => println!("no command"),
    }

    for (name, value) in matches.iter() {
        println!("  {}: {}", name, value);
    }

    Ok(())
}

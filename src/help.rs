// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::option::OptionSpec;
use crate::schema::{Line, Schema};

/// Width of the left (names) column of the help text.
const LEFT_COLUMN: usize = 30;

/// Continuation prefix for wrapped usage lines (the width of "Usage: ").
const USAGE_PREFIX: &str = "         ";
const USAGE_LINE_PREFIX: &str = "       ";

const DESCRIPTION_PREFIX: &str = "  ";

fn with_prefix(piece: &str, prefix: &str, prefixed: bool) -> String {
    if prefixed {
        format!("{}{}", prefix, piece)
    } else {
        piece.into()
    }
}

/// Word-wrap `text` to `columns` characters.
///
/// Lines are broken at the last space that fits. A word longer than the
/// width is kept whole. Continuation lines are indented with `prefix`, as
/// is the first line if `prefix_always` is set. Existing newlines are
/// preserved.
pub fn wrap(text: &str, columns: usize, prefix: &str, prefix_always: bool) -> String {
    let narrow = columns.saturating_sub(prefix.chars().count()).max(1);

    let mut width = if prefix_always { narrow } else { columns.max(1) };
    let mut first = true;
    let mut out: Vec<String> = Vec::new();

    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        let mut offset = 0;
        let mut pieces = 0;

        while chars.len() - offset > width {
            if chars[offset] == ' ' {
                offset += 1;
                continue;
            }

            let limit = offset + width;

            let end = match chars[offset..=limit].iter().rposition(|&c| c == ' ') {
                Some(p) => offset + p,
                None => chars[limit..]
                    .iter()
                    .position(|&c| c == ' ')
                    .map_or(chars.len(), |p| limit + p),
            };

            let piece: String = chars[offset..end].iter().collect();
            out.push(with_prefix(&piece, prefix, prefix_always || !first));

            offset = (end + 1).min(chars.len());
            pieces += 1;
            first = false;
            width = narrow;
        }

        if offset < chars.len() || pieces == 0 {
            let rest: String = chars[offset..].iter().collect();
            out.push(with_prefix(&rest, prefix, prefix_always || !first));
        }

        first = false;
        width = narrow;
    }

    out.join("\n")
}

/// Lay out a name and its description in two columns.
fn columnize(left: &str, right: Option<&str>, columns: usize) -> String {
    let right = match right {
        Some(r) => r,
        None => return left.trim_end().into(),
    };

    let blank = " ".repeat(LEFT_COLUMN);
    let len = left.chars().count();

    let mut s = left.to_string();

    if len > LEFT_COLUMN {
        s.push('\n');
        s.push_str(&blank);
    } else {
        s.push_str(&" ".repeat(LEFT_COLUMN - len));
    }

    let text = wrap(
        right,
        columns.saturating_sub(LEFT_COLUMN),
        DESCRIPTION_PREFIX,
        false,
    );

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            s.push('\n');
            s.push_str(&blank);
        }
        s.push_str(line);
    }

    s
}

fn long_name(spec: &OptionSpec, long: &str) -> String {
    if spec.is_flag() && spec.negate {
        format!("--no-{}", long)
    } else {
        format!("--{}", long)
    }
}

/// The names column for an option, eg. `-d, --dot, --point[=N]`.
fn option_names(spec: &OptionSpec) -> String {
    let mut line = String::new();

    let aliases: String = spec
        .aliases
        .iter()
        .map(|a| format!(", --{}", a))
        .collect();

    match (spec.short, &spec.long) {
        (Some(short), Some(long)) => {
            line.push_str(&format!("-{}, {}{}", short, long_name(spec, long), aliases));

            if let Some(metavar) = &spec.metavar {
                if spec.optional {
                    line.push_str(&format!("[={}]", metavar));
                } else {
                    line.push_str(&format!("={}", metavar));
                }
            }
        }
        (Some(short), None) => {
            line.push_str(&format!("-{}{}", short, aliases));

            let separator = if spec.aliases.is_empty() { "" } else { "=" };

            if let Some(metavar) = &spec.metavar {
                if spec.optional {
                    line.push_str(&format!("[{}{}]", separator, metavar));
                } else if separator.is_empty() {
                    line.push_str(&format!(" {}", metavar));
                } else {
                    line.push_str(&format!("{}{}", separator, metavar));
                }
            }
        }
        (None, Some(long)) => {
            line.push_str(&format!("    {}{}", long_name(spec, long), aliases));

            if let Some(metavar) = &spec.metavar {
                if spec.optional {
                    line.push_str(&format!("[={}]", metavar));
                } else {
                    line.push_str(&format!("={}", metavar));
                }
            }
        }
        (None, None) => (),
    }

    line
}

fn usage_header(schema: &Schema, columns: usize) -> Option<String> {
    if schema.usages.is_empty() {
        return None;
    }

    let lines: Vec<String> = schema
        .usages
        .iter()
        .enumerate()
        .map(|(i, usage)| {
            if i == 0 {
                wrap(&format!("Usage: {}", usage), columns, USAGE_PREFIX, false)
            } else {
                wrap(usage, columns.saturating_sub(7), USAGE_PREFIX, false)
            }
        })
        .collect();

    Some(lines.join(&format!("\n{}", USAGE_LINE_PREFIX)))
}

/// Render the full help text.
pub(crate) fn render_help(schema: &Schema, script: &str, columns: usize) -> String {
    let mut h = match usage_header(schema, columns) {
        Some(header) => header,
        None => {
            let mut usage = format!("Usage: {}", script);

            if schema.options().next().is_some() {
                usage.push_str(" [options]");
            }

            if schema.arguments().next().is_some() {
                usage.push_str(" [arguments]");
            }

            wrap(&usage, columns, USAGE_PREFIX, false)
        }
    };

    if let Some(description) = &schema.description {
        h.push_str("\n\n");
        h.push_str(&wrap(description, columns, "", false));
    }

    if !schema.lines.is_empty() {
        h.push('\n');
    }

    for line in &schema.lines {
        match line {
            Line::Text { text, prefix } => {
                h.push('\n');
                h.push_str(&wrap(text, columns, prefix, true));
            }
            Line::Group(title) => {
                h.push_str("\n\n");
                h.push_str(&wrap(&format!("{}:", title), columns, "", false));
            }
            Line::Columns(left, right) => {
                h.push('\n');
                h.push_str(&columnize(&format!("{}  ", left), Some(right), columns));
            }
            Line::Argument(name) => {
                let spec = match schema.argument_spec(name) {
                    Some(spec) if !spec.hidden => spec,
                    _ => continue,
                };

                h.push('\n');
                h.push_str(&columnize(
                    &format!("  {}  ", spec.help_name()),
                    spec.description.as_deref(),
                    columns,
                ));
            }
            Line::Option(spec) => {
                if spec.hidden {
                    continue;
                }

                h.push('\n');
                h.push_str(&columnize(
                    &format!("  {}  ", option_names(spec)),
                    spec.description.as_deref(),
                    columns,
                ));
            }
        }
    }

    if let Some(footer) = &schema.footer {
        h.push_str("\n\n");
        h.push_str(&wrap(footer, columns, "", false));
    }

    if let Some(email) = &schema.email {
        h.push_str("\n\n");
        h.push_str(&wrap(
            &format!("Report bugs to <{}>.", email),
            columns,
            "",
            false,
        ));
    }

    h
}

/// Render the short usage message.
pub(crate) fn render_usage(schema: &Schema, script: &str, columns: usize) -> String {
    if let Some(header) = usage_header(schema, columns) {
        return header;
    }

    let mut usage = String::new();

    // Short-only options go first: flags grouped, then those with values.
    let short_only: Vec<&OptionSpec> = schema
        .short_options()
        .map(|o| o.as_ref())
        .filter(|o| !o.hidden && o.long.is_none() && o.aliases.is_empty())
        .collect();

    let flags: String = short_only
        .iter()
        .filter(|o| o.is_flag())
        .filter_map(|o| o.short)
        .collect();

    if !flags.is_empty() {
        usage.push_str(&format!(" [-{}]", flags));
    }

    for spec in short_only.iter().filter(|o| !o.is_flag()) {
        if let (Some(short), Some(metavar)) = (spec.short, &spec.metavar) {
            if spec.optional {
                usage.push_str(&format!(" [-{}[{}]]", short, metavar));
            } else {
                usage.push_str(&format!(" [-{} {}]", short, metavar));
            }
        }
    }

    for spec in schema.options() {
        if spec.hidden || (spec.long.is_none() && spec.aliases.is_empty()) {
            continue;
        }

        let mut names: Vec<String> = Vec::new();

        if let Some(short) = spec.short {
            names.push(format!("-{}", short));
        }

        if let Some(long) = &spec.long {
            names.push(long_name(spec, long));
        }

        names.extend(spec.aliases.iter().map(|a| format!("--{}", a)));

        let value = match (&spec.metavar, spec.optional) {
            (Some(metavar), true) => format!("[={}]", metavar),
            (Some(metavar), false) => format!("={}", metavar),
            (None, _) => String::new(),
        };

        usage.push_str(&format!(" [{}{}]", names.join("|"), value));
    }

    for spec in schema.arguments().filter(|a| !a.hidden) {
        usage.push_str(&format!(" [{}]", spec.help_name()));
    }

    wrap(
        &format!("Usage: {}{}", script, usage),
        columns,
        USAGE_PREFIX,
        false,
    )
}

/// Render the version text.
pub(crate) fn render_version(schema: &Schema, columns: usize) -> String {
    match &schema.version {
        Some(version) => wrap(version, columns, "", false),
        None => String::new(),
    }
}

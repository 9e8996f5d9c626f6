//! Tree formatter for terminal output
//!
//! Renders the assembled catalog tree one line per node, indentation
//! proportional to depth, with per-kind colors and human-readable size
//! annotations. `format` produces the same text as `print` without colors,
//! which keeps it testable.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::catalog::ObjectKind;
use crate::tree::Node;

use super::config::OutputConfig;
use super::utils::{format_row_estimate, format_size};

/// Formatter for terminal tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, node: &Node) -> String {
        let mut output = String::new();
        let (db_count, table_count) = self.format_node(node, &mut output, 0);
        output.push_str(&format!("\n{} databases, {} tables\n", db_count, table_count));
        output
    }

    pub fn print(&self, node: &Node) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let (db_count, table_count) = self.print_node(node, &mut stdout, 0)?;
        writeln!(stdout)?;
        writeln!(stdout, "{} databases, {} tables", db_count, table_count)?;
        Ok(())
    }

    fn format_node(&self, node: &Node, output: &mut String, depth: usize) -> (usize, usize) {
        let indent = "  ".repeat(depth);
        output.push_str(&indent);
        output.push_str("• ");
        output.push_str(&node.name);

        if let Some(annotation) = size_annotation(node) {
            output.push(' ');
            output.push_str(&annotation);
        }
        if let Some(label) = &node.type_label {
            output.push_str(" | ");
            output.push_str(label);
            if node.nullable {
                output.push_str(" (nullable)");
            }
        }
        if node.kind != ObjectKind::Column {
            output.push_str(&format!(" ({})", node.kind.label()));
        }
        output.push('\n');

        if let Some(description) = &node.description {
            output.push_str(&"  ".repeat(depth + 1));
            output.push_str(description);
            output.push_str("\n\n");
        }

        let mut counts = count_self(node);
        for child in &node.children {
            let (d, t) = self.format_node(child, output, depth + 1);
            counts.0 += d;
            counts.1 += t;
        }
        counts
    }

    fn print_node(
        &self,
        node: &Node,
        stdout: &mut StandardStream,
        depth: usize,
    ) -> io::Result<(usize, usize)> {
        let indent = "  ".repeat(depth);
        write!(stdout, "{}• ", indent)?;

        stdout.set_color(&name_spec(node.kind))?;
        write!(stdout, "{}", node.name)?;
        stdout.reset()?;

        if let Some(annotation) = size_annotation(node) {
            stdout.set_color(&dim_spec())?;
            write!(stdout, " {}", annotation)?;
            stdout.reset()?;
        }
        if let Some(label) = &node.type_label {
            write!(stdout, " | {}", label)?;
            if node.nullable {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(stdout, " (nullable)")?;
                stdout.reset()?;
            }
        }
        if node.kind != ObjectKind::Column {
            stdout.set_color(&dim_spec())?;
            write!(stdout, " ({})", node.kind.label())?;
            stdout.reset()?;
        }
        writeln!(stdout)?;

        if let Some(description) = &node.description {
            stdout.set_color(&dim_spec())?;
            writeln!(stdout, "{}{}", "  ".repeat(depth + 1), description)?;
            stdout.reset()?;
            writeln!(stdout)?;
        }

        let mut counts = count_self(node);
        for child in &node.children {
            let (d, t) = self.print_node(child, stdout, depth + 1)?;
            counts.0 += d;
            counts.1 += t;
        }
        Ok(counts)
    }
}

fn count_self(node: &Node) -> (usize, usize) {
    match node.kind {
        ObjectKind::Database => (1, 0),
        ObjectKind::Table => (0, 1),
        _ => (0, 0),
    }
}

/// The parenthesized size annotation, with the row estimate for tables.
fn size_annotation(node: &Node) -> Option<String> {
    let size = node.size_bytes?;
    match node.row_estimate {
        Some(rows) => Some(format!(
            "({}, {})",
            format_size(size),
            format_row_estimate(rows)
        )),
        None => Some(format!("({})", format_size(size))),
    }
}

fn name_spec(kind: ObjectKind) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match kind {
        ObjectKind::Server => spec.set_fg(Some(Color::Blue)).set_bold(true),
        ObjectKind::Database => spec.set_fg(Some(Color::Cyan)),
        ObjectKind::Table => spec.set_fg(Some(Color::Blue)),
        ObjectKind::View => spec.set_fg(Some(Color::Magenta)),
        ObjectKind::Index => spec.set_fg(Some(Color::Yellow)),
        ObjectKind::Column => spec.set_fg(Some(Color::Green)),
    };
    spec
}

fn dim_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::White)).set_intense(true);
    spec
}

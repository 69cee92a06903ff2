use crate::Span;
use colored::{ColoredString, Colorize};

/// Given the strings to print, colorizes them for the diagnostic kind at
/// hand (error or warning).
pub(crate) trait DiagnosticColorer {
    fn title(&self) -> &'static str;

    fn primary_color(&self, token: &str) -> ColoredString;
}

/// Renders a diagnostic into a terminal frame:
///
/// ```text
/// error: The type "User" cannot be defined because a type or enum with that name already exists.
///   -->  datamodel.prisma:5
///    |
///  4 |
///  5 | type User {
///    |
/// ```
pub(crate) fn pretty_print(
    f: &mut dyn std::io::Write,
    file_name: &str,
    text: &str,
    span: Span,
    description: &str,
    colorer: &dyn DiagnosticColorer,
) -> std::io::Result<()> {
    let start = span.start.min(text.len());
    let line_start = text[..start].rfind('\n').map(|pos| pos + 1).unwrap_or(0);
    let line_number = text[..line_start].matches('\n').count() + 1;
    let line_end = text[start..].find('\n').map(|pos| start + pos).unwrap_or(text.len());

    let prefix = &text[line_start..start];
    let token_end = span.end.clamp(start, line_end);
    let token = &text[start..token_end];
    let suffix = &text[token_end..line_end];

    let number_width = line_number.to_string().len().max(2);

    writeln!(
        f,
        "{}: {}",
        colorer.primary_color(colorer.title()).bold(),
        description.bold()
    )?;
    writeln!(
        f,
        "  {}  {}",
        "-->".bright_blue().bold(),
        format!("{file_name}:{line_number}").underline()
    )?;
    write_empty_gutter(f, number_width)?;

    if line_number > 1 {
        let previous_start = text[..line_start.saturating_sub(1)]
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        let previous_line = text[previous_start..line_start].trim_end_matches(['\r', '\n']);

        write_numbered_gutter(f, line_number - 1, number_width)?;
        if previous_line.is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, " {previous_line}")?;
        }
    }

    write_numbered_gutter(f, line_number, number_width)?;
    if prefix.is_empty() && token.is_empty() && suffix.is_empty() {
        writeln!(f)?;
    } else {
        writeln!(f, " {}{}{}", prefix, colorer.primary_color(token).bold(), suffix)?;
    }

    write_empty_gutter(f, number_width)?;

    Ok(())
}

fn write_empty_gutter(f: &mut dyn std::io::Write, width: usize) -> std::io::Result<()> {
    writeln!(f, "{}", format!("{:>width$} |", "").bright_blue().bold())
}

fn write_numbered_gutter(f: &mut dyn std::io::Write, line_number: usize, width: usize) -> std::io::Result<()> {
    write!(f, "{}", format!("{line_number:>width$} |").bright_blue().bold())
}

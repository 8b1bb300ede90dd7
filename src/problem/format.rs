use owo_colors::OwoColorize;
use orgfmt::language::LoadingError;

/// Format a LoadingError with full details, including an excerpt of the
/// offending input when we know where the problem is.
pub fn full_loading_error<'i>(error: &LoadingError<'i>, source: &'i str) -> String {
    let (line, column) = match error.position {
        Some(position) => position,
        None => return concise_loading_error(error),
    };

    let code = source
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("?");
    let width = 3.max(
        line.to_string()
            .len(),
    );
    let column = column.max(1);

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        error
            .filename
            .to_string_lossy(),
        line,
        column,
        error
            .problem
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        error.details
    )
    .trim_ascii()
    .to_string()
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    if error
        .details
        .is_empty()
    {
        format!(
            "{}: {}: {}",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold()
        )
    } else {
        format!(
            "{}: {}: {} ({})",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold(),
            error.details
        )
    }
}

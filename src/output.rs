//! Terminal output and rendering
//!
//! Provides the [`OutputWriter`] abstraction over message output plus the
//! rendering functions that turn scenarios and session views into colored
//! text. Rendering returns `String`s so it stays testable without capturing
//! stdout; the writers decide where text goes.

use crate::page::PageMark;
use crate::session::SessionView;
use crate::Scenario;
use colored::Colorize;

/// Trait for output operations
///
/// Abstracts the output mechanism so commands can run quietly or against a
/// test sink.
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// Standard writer: stdout for content, stderr for problems
///
/// With `quiet` set, only normal content is written; warnings and info are
/// suppressed, matching scripting use.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a writer, optionally in quiet mode
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "warning:".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Highlight case-insensitive occurrences of `term` in `text`
///
/// Literal scan over the lowercased text; the term is never compiled into a
/// pattern. Returns the input unchanged when the term is empty.
#[must_use]
pub fn highlight(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }

    let lower_text = text.to_lowercase();
    let lower_term = term.to_lowercase();

    // Lowercasing can change byte lengths for some characters; fall back to
    // the plain text if the two strings no longer line up.
    if lower_text.len() != text.len() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some(offset) = lower_text[cursor..].find(&lower_term) {
        let start = cursor + offset;
        let end = start + lower_term.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        result.push_str(&text[cursor..start]);
        result.push_str(&text[start..end].black().on_yellow().to_string());
        cursor = end;
    }
    result.push_str(&text[cursor..]);
    result
}

/// Render one scenario as a card
#[must_use]
pub fn render_scenario(scenario: &Scenario, search_term: &str) -> String {
    format!(
        "{} {}\n  {}\n  {}",
        format!("#{}", scenario.id).cyan(),
        highlight(&scenario.title, search_term).bold(),
        highlight(&scenario.description, search_term),
        scenario
            .tags
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join(" ")
            .dimmed()
    )
}

/// Render the pagination footer, e.g. `page 4/9: 1 ... 2 3 [4] 5 6 ... 9`
///
/// Empty when there is at most one page, since no controls are shown then.
#[must_use]
pub fn render_pagination(marks: &[PageMark], current: usize, total_pages: usize) -> String {
    if marks.is_empty() {
        return String::new();
    }

    let row = marks
        .iter()
        .map(|mark| match mark {
            PageMark::Page(n) if *n == current => format!("[{n}]").bold().to_string(),
            PageMark::Page(n) => n.to_string(),
            PageMark::Gap => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("page {current}/{total_pages}: {row}")
}

/// Render a full session view: cards, match count, pagination footer
#[must_use]
pub fn render_view(view: &SessionView<'_>) -> String {
    let mut sections: Vec<String> = view
        .scenarios
        .iter()
        .map(|scenario| render_scenario(scenario, &view.filter.search_term))
        .collect();

    if sections.is_empty() {
        sections.push("No scenarios match the current filter.".to_string());
    }

    let summary = match view.total_matches {
        1 => "1 scenario".to_string(),
        n => format!("{n} scenarios"),
    };
    sections.push(summary.dimmed().to_string());

    let footer = render_pagination(&view.marks, view.current_page, view.total_pages);
    if !footer.is_empty() {
        sections.push(footer);
    }

    sections.join("\n\n")
}

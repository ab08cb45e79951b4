//! Text rendering of recognition reports.

use std::io::IsTerminal;
use std::path::Path;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use linegraph::Graph;
use nu_ansi_term::{Color, Style};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Theme {
    Auto,
    Light,
    Dark,
    Plain,
}

/// Writes the human-readable report to stdout and warnings to stderr.
///
/// With `quiet` set, lines carry neither icons nor colors.
pub struct Ui {
    styles: Option<Styles>,
    quiet: bool,
}

impl Ui {
    pub fn new(theme: Theme, quiet: bool) -> Self {
        let paint = !quiet && std::io::stdout().is_terminal();
        let styles = if paint { Styles::for_theme(theme) } else { None };

        #[cfg(windows)]
        if styles.is_some() {
            let _ = nu_ansi_term::enable_ansi_support();
        }

        Self { styles, quiet }
    }

    pub fn spacer(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Prints the adjacency dump of `graph` under `title`.
    pub fn adjacency(&self, title: &str, graph: &Graph) {
        self.heading(title);
        for line in graph.to_string().lines() {
            println!("  {line}");
        }
    }

    /// A verdict line; `holds` picks the check or cross mark.
    pub fn verdict(&self, holds: bool, message: &str) {
        let (icon, style) = if holds {
            (YES_ICON, self.styles.as_ref().map(|s| s.yes))
        } else {
            (NO_ICON, self.styles.as_ref().map(|s| s.no))
        };
        println!("{}", self.marked(icon, style, message));
    }

    pub fn note(&self, message: &str) {
        println!(
            "{}",
            self.marked(NOTE_ICON, self.styles.as_ref().map(|s| s.accent), message)
        );
    }

    /// Boolean flags as aligned `name: value` rows. A `true` flag is painted as a
    /// failure since every flag reported here marks a forbidden structure.
    pub fn flags(&self, title: &str, rows: &[(&str, bool)]) {
        self.heading(title);
        let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for &(name, value) in rows {
            let value_text = value.to_string();
            let value_text = match &self.styles {
                Some(styles) if value => styles.no.paint(value_text).to_string(),
                Some(styles) => styles.yes.paint(value_text).to_string(),
                None => value_text,
            };
            println!("  {name:>width$}: {value_text}");
        }
    }

    pub fn files<I>(&self, title: &str, paths: I)
    where
        I: IntoIterator<Item = String>,
    {
        let paths: Vec<String> = paths.into_iter().collect();
        if paths.is_empty() {
            return;
        }
        self.heading(title);
        for path in paths {
            println!("  - {path}");
        }
    }

    pub fn warn(&self, message: &str) {
        eprintln!(
            "{}",
            self.marked(WARN_ICON, self.styles.as_ref().map(|s| s.warn), message)
        );
    }

    /// Starts the render spinner for `image`; only shown on a painted terminal.
    pub fn rendering(&self, image: &Path) -> RenderProgress {
        let bar = self.styles.as_ref().map(|styles| {
            let style = ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            let bar = ProgressBar::new_spinner().with_style(style);
            let label = format!("rendering {}", image.display());
            bar.set_message(styles.accent.paint(label).to_string());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });
        RenderProgress {
            bar,
            started: Instant::now(),
        }
    }

    fn heading(&self, title: &str) {
        match &self.styles {
            Some(styles) => println!("{}", styles.heading.paint(title)),
            None => println!("{title}"),
        }
    }

    fn marked(&self, icon: &str, style: Option<Style>, message: &str) -> String {
        if self.quiet {
            return message.to_string();
        }
        match style {
            Some(style) => format!("{} {message}", style.paint(icon)),
            None => format!("{icon} {message}"),
        }
    }
}

/// Spinner handle for one render; cleared when finished or dropped.
pub struct RenderProgress {
    bar: Option<ProgressBar>,
    started: Instant,
}

impl RenderProgress {
    pub fn finish(self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for RenderProgress {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

#[derive(Clone, Copy)]
struct Styles {
    heading: Style,
    accent: Style,
    yes: Style,
    no: Style,
    warn: Style,
}

impl Styles {
    fn for_theme(theme: Theme) -> Option<Self> {
        let (accent, yes, no) = match theme {
            Theme::Plain => return None,
            Theme::Light => (Color::Blue, Color::Green, Color::Red),
            Theme::Dark | Theme::Auto => (Color::LightCyan, Color::LightGreen, Color::LightRed),
        };
        Some(Self {
            heading: Style::new().fg(accent).bold().underline(),
            accent: Style::new().fg(accent),
            yes: Style::new().fg(yes).bold(),
            no: Style::new().fg(no).bold(),
            warn: Style::new().fg(Color::Yellow).bold(),
        })
    }
}

const YES_ICON: &str = "✔";
const NO_ICON: &str = "✘";
const NOTE_ICON: &str = "ℹ";
const WARN_ICON: &str = "⚠";

//! Application state and logic.

use std::path::PathBuf;

use crate::error::Result;
use crate::route::{Point, Route};
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Path the route was loaded from.
    pub file_path: PathBuf,
    /// The loaded tour.
    pub route: Route,
    /// The segment closing the tour, from the last stop back to the first.
    pub closing: (Point, Point),
    /// Index of the highlighted stop.
    pub cursor: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create the application state for a loaded route.
    ///
    /// Fails when the route is empty: there is no first/last stop to close
    /// the tour with, so there is nothing to display.
    pub fn new(file_path: PathBuf, route: Route) -> Result<Self> {
        let closing = route.closing_segment()?;

        let name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "route".to_string());
        let status = format!(
            "{} loaded: {} stops, tour length {:.2}",
            name,
            route.len(),
            route.total_length()
        );

        Ok(Self {
            file_path,
            route,
            closing,
            cursor: 0,
            status,
            theme: Theme::GruvboxDark,
        })
    }

    /// Stop currently under the cursor.
    pub fn current_stop(&self) -> Option<Point> {
        self.route.get(self.cursor)
    }

    /// Move the cursor to the next stop.
    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.route.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the previous stop.
    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Jump to the first stop.
    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last stop.
    pub fn cursor_last(&mut self) {
        self.cursor = self.route.len().saturating_sub(1);
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy a plain-text route summary to the clipboard.
    pub fn copy_summary(&mut self) {
        let file_name = self
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        match util::copy_route_summary(&self.route, file_name.as_deref()) {
            Ok(_) => self.status = "Route summary copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Show the help line in the status bar.
    pub fn show_help(&mut self) {
        self.status =
            "Help: q=quit, h/l=step stop, gg/G=first/last, y=copy summary, T=theme".to_string();
    }
}

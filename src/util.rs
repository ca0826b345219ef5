//! Utility functions for Meander.

use crate::clipboard;
use crate::error::Result;
use crate::route::Route;

/// Copy a plain-text route summary to the clipboard.
pub fn copy_route_summary(route: &Route, file_name: Option<&str>) -> Result<()> {
    clipboard::copy_text(&route_summary(route, file_name))
}

/// Format a plain-text summary of a route.
pub fn route_summary(route: &Route, file_name: Option<&str>) -> String {
    let mut text = String::new();

    if let Some(name) = file_name {
        text.push_str(&format!("Route: {}\n", name));
    } else {
        text.push_str("Route\n");
    }

    text.push_str(&format!("Stops: {}\n", route.len()));
    text.push_str(&format!("Tour length: {:.3}\n", route.total_length()));
    text.push_str("\nStops in visit order:\n");

    for (i, p) in route.points().iter().enumerate() {
        text.push_str(&format!("  {:>4}: {} {}\n", i + 1, p.x, p.y));
    }

    text
}

//! Fetch-once, sort-many showcase.
//!
//! The listing is fetched a single time and every view sorts its own copy,
//! so views never observe each other's ordering. All output goes to a
//! caller-provided writer.

use std::io::{self, Write};

use colored::Colorize;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::fetch::{FetchError, UserSource};
use crate::models::UserRecord;
use crate::output::OutputRenderer;
use crate::sort::{self, SortKey, SortOrder};

/// Width of the `=` banner rules.
const BANNER_WIDTH: usize = 50;

/// Errors from a showcase run.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// One labelled sorted view of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub title: &'static str,
    pub key: SortKey,
    pub order: SortOrder,
}

impl View {
    /// Sort `users` for this view and keep the first `limit` entries.
    pub fn apply(&self, users: &[UserRecord], limit: usize) -> Vec<UserRecord> {
        let mut sorted = sort::sort_by(users, self.key, self.order);
        sorted.truncate(limit);
        sorted
    }
}

/// The five views shown by a default run, in display order.
pub fn showcase_views() -> [View; 5] {
    [
        View {
            title: "SORT BY LOGIN (A-Z)",
            key: SortKey::Login,
            order: SortOrder::Ascending,
        },
        View {
            title: "SORT BY LOGIN (Z-A)",
            key: SortKey::Login,
            order: SortOrder::Descending,
        },
        View {
            title: "SORT BY ID (ASCENDING)",
            key: SortKey::Id,
            order: SortOrder::Ascending,
        },
        View {
            title: "SORT BY ID (DESCENDING)",
            key: SortKey::Id,
            order: SortOrder::Descending,
        },
        View {
            title: "SORT BY TYPE",
            key: SortKey::Type,
            order: SortOrder::Ascending,
        },
    ]
}

/// Drives a run: fetch, then render sorted views.
pub struct Showcase<'a> {
    renderer: &'a dyn OutputRenderer,
    per_page: u32,
    limit: usize,
}

impl<'a> Showcase<'a> {
    pub fn new(renderer: &'a dyn OutputRenderer, per_page: u32, limit: usize) -> Self {
        Self {
            renderer,
            per_page,
            limit,
        }
    }

    /// Fetch once and print every showcase view followed by the
    /// operations summary.
    pub async fn run(
        &self,
        source: &dyn UserSource,
        out: &mut dyn Write,
    ) -> Result<(), ShowcaseError> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(out, "{rule}")?;
        writeln!(out, "{}", "GITHUB API - SORTING METHODS".bold())?;
        writeln!(out, "{rule}")?;

        let users = source.fetch_users(self.per_page).await?;
        writeln!(out)?;
        writeln!(out, "{} {} users loaded!", "✓".green(), users.len())?;

        for (i, view) in showcase_views().iter().enumerate() {
            let leading = if i == 0 { "\n" } else { "" };
            writeln!(out, "{leading}{}. {}", i + 1, view.title.bold())?;
            write!(out, "{}", self.renderer.render(&view.apply(&users, self.limit)))?;
        }

        write_operations_summary(out)?;
        Ok(())
    }

    /// Fetch once and print a single view.
    pub async fn run_single(
        &self,
        source: &dyn UserSource,
        key: SortKey,
        order: SortOrder,
        out: &mut dyn Write,
    ) -> Result<(), ShowcaseError> {
        let users = source.fetch_users(self.per_page).await?;
        let view = View {
            title: "",
            key,
            order,
        };
        write!(out, "{}", self.renderer.render(&view.apply(&users, self.limit)))?;
        Ok(())
    }
}

/// Print the static list of available sort operations.
pub fn write_operations_summary(out: &mut dyn Write) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "AVAILABLE METHODS:")?;
    for key in SortKey::iter() {
        writeln!(out, "- {}(users, descending)", key.function_name())?;
    }
    writeln!(out, "{rule}")?;
    Ok(())
}

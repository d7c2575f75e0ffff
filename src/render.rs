//! Presentation layer.
//!
//! The controller never prints. It hands the current state of a
//! collection, or a search outcome, to a [`View`] after every change and
//! asks the view for yes/no confirmation before destructive actions.
//! [`TerminalView`] is the CLI's implementation.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use serde::Serialize;

use crate::csv_escape;
use crate::error::Result;
use crate::model::{FoundItem, LostItem};
use crate::query::SearchOutcome;

/// Everything the board needs from a user interface.
pub trait View {
    /// Show the full lost collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn render_lost(&mut self, items: &[LostItem]) -> Result<()>;

    /// Show the full found collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn render_found(&mut self, items: &[FoundItem]) -> Result<()>;

    /// Show the outcome of a search.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn render_search(&mut self, outcome: &SearchOutcome) -> Result<()>;

    /// Blocking yes/no gate. `false` leaves the board untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Short success message (the "alert" after a report).
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// How records are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Table,
    Json,
    Csv,
}

/// Where confirmation answers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Always yes (`--yes`).
    Assume,
    /// Always no (stdin is not a terminal).
    Decline,
    /// Ask on stderr and read a line from stdin.
    Prompt,
}

/// Terminal renderer writing to any `Write` sink.
pub struct TerminalView<W> {
    out: W,
    mode: OutputMode,
    confirmation: Confirmation,
    show_collections: bool,
    quiet_notices: bool,
}

impl TerminalView<io::Stdout> {
    /// View over stdout.
    #[must_use]
    pub fn stdout(mode: OutputMode) -> Self {
        Self::new(io::stdout(), mode)
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self {
            out,
            mode,
            confirmation: Confirmation::Prompt,
            show_collections: true,
            quiet_notices: false,
        }
    }

    #[must_use]
    pub fn with_confirmation(mut self, confirmation: Confirmation) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Skip collection renders (used when a command prints its own summary).
    #[must_use]
    pub fn with_collections(mut self, show: bool) -> Self {
        self.show_collections = show;
        self
    }

    /// Suppress success notices.
    #[must_use]
    pub fn with_quiet_notices(mut self, quiet: bool) -> Self {
        self.quiet_notices = quiet;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        writeln!(self.out, "{}", serde_json::to_string(value)?)?;
        Ok(())
    }

    fn lost_card(&mut self, item: &LostItem, missing_location: &str) -> Result<()> {
        writeln!(
            self.out,
            "  {} {}",
            item.item_name.bold(),
            format!("(#{})", item.id).dimmed()
        )?;
        writeln!(self.out, "    Lost on:     {}", item.lost_date)?;
        writeln!(
            self.out,
            "    Location:    {}",
            item.location.as_deref().unwrap_or(missing_location)
        )?;
        if let Some(description) = &item.description {
            writeln!(self.out, "    Description: {description}")?;
        }
        writeln!(self.out, "    Reported:    {}", item.date_reported)?;
        Ok(())
    }

    fn found_card(&mut self, item: &FoundItem) -> Result<()> {
        writeln!(
            self.out,
            "  {} {}",
            item.item_name.bold(),
            format!("(#{})", item.id).dimmed()
        )?;
        writeln!(self.out, "    Found on:    {}", item.found_date)?;
        writeln!(self.out, "    Location:    {}", item.found_location)?;
        writeln!(self.out, "    Contact:     {}", item.finder_contact)?;
        if let Some(description) = &item.description {
            writeln!(self.out, "    Description: {description}")?;
        }
        if item.has_image() {
            writeln!(self.out, "    {}", "[image attached]".cyan())?;
        }
        writeln!(self.out, "    Reported:    {}", item.date_reported)?;
        Ok(())
    }

    fn lost_csv(&mut self, items: &[LostItem]) -> Result<()> {
        writeln!(self.out, "collection,id,item_name,date,location,description")?;
        for item in items {
            writeln!(
                self.out,
                "lost,{},{},{},{},{}",
                item.id,
                csv_escape(&item.item_name),
                csv_escape(&item.lost_date),
                csv_escape(item.location.as_deref().unwrap_or_default()),
                csv_escape(item.description.as_deref().unwrap_or_default()),
            )?;
        }
        Ok(())
    }

    fn found_csv(&mut self, items: &[FoundItem], header: bool) -> Result<()> {
        if header {
            writeln!(self.out, "collection,id,item_name,date,location,description,contact,has_image")?;
        }
        for item in items {
            writeln!(
                self.out,
                "found,{},{},{},{},{},{},{}",
                item.id,
                csv_escape(&item.item_name),
                csv_escape(&item.found_date),
                csv_escape(&item.found_location),
                csv_escape(item.description.as_deref().unwrap_or_default()),
                csv_escape(&item.finder_contact),
                item.has_image(),
            )?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LostListOutput<'a> {
    lost_items: &'a [LostItem],
    count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FoundListOutput<'a> {
    found_items: &'a [FoundItem],
    count: usize,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    lost: &'a [LostItem],
    found: &'a [FoundItem],
    count: usize,
}

const INVALID_QUERY_MESSAGE: &str = "Please enter a search term.";
const NO_MATCHES_MESSAGE: &str = "No items found matching your search.";

impl<W: Write> View for TerminalView<W> {
    fn render_lost(&mut self, items: &[LostItem]) -> Result<()> {
        if !self.show_collections {
            return Ok(());
        }
        match self.mode {
            OutputMode::Json => self.write_json(&LostListOutput {
                lost_items: items,
                count: items.len(),
            }),
            OutputMode::Csv => self.lost_csv(items),
            OutputMode::Table => {
                writeln!(self.out, "{}", "Lost Items".bold().underline())?;
                if items.is_empty() {
                    writeln!(self.out, "  No lost items reported yet.")?;
                }
                for item in items {
                    self.lost_card(item, "Not specified")?;
                }
                writeln!(self.out)?;
                Ok(())
            }
        }
    }

    fn render_found(&mut self, items: &[FoundItem]) -> Result<()> {
        if !self.show_collections {
            return Ok(());
        }
        match self.mode {
            OutputMode::Json => self.write_json(&FoundListOutput {
                found_items: items,
                count: items.len(),
            }),
            OutputMode::Csv => self.found_csv(items, true),
            OutputMode::Table => {
                writeln!(self.out, "{}", "Found Items".bold().underline())?;
                if items.is_empty() {
                    writeln!(self.out, "  No found items reported yet.")?;
                }
                for item in items {
                    self.found_card(item)?;
                }
                writeln!(self.out)?;
                Ok(())
            }
        }
    }

    fn render_search(&mut self, outcome: &SearchOutcome) -> Result<()> {
        let Some(results) = outcome.results() else {
            return match self.mode {
                OutputMode::Json => self.write_json(&serde_json::json!({
                    "error": "invalid_query",
                    "message": INVALID_QUERY_MESSAGE,
                })),
                OutputMode::Table | OutputMode::Csv => {
                    writeln!(self.out, "{INVALID_QUERY_MESSAGE}")?;
                    Ok(())
                }
            };
        };

        match self.mode {
            OutputMode::Json => self.write_json(&SearchOutput {
                lost: &results.lost,
                found: &results.found,
                count: results.len(),
            }),
            OutputMode::Csv => {
                // Found rows carry two extra columns; one header covers both.
                writeln!(self.out, "collection,id,item_name,date,location,description,contact,has_image")?;
                for item in &results.lost {
                    writeln!(
                        self.out,
                        "lost,{},{},{},{},{},,",
                        item.id,
                        csv_escape(&item.item_name),
                        csv_escape(&item.lost_date),
                        csv_escape(item.location.as_deref().unwrap_or_default()),
                        csv_escape(item.description.as_deref().unwrap_or_default()),
                    )?;
                }
                self.found_csv(&results.found, false)
            }
            OutputMode::Table => {
                if results.is_empty() {
                    writeln!(self.out, "{NO_MATCHES_MESSAGE}")?;
                    return Ok(());
                }
                if !results.lost.is_empty() {
                    writeln!(self.out, "{}", "Lost Items".bold().underline())?;
                    for item in &results.lost {
                        self.lost_card(item, "Unknown")?;
                    }
                    writeln!(self.out)?;
                }
                if !results.found.is_empty() {
                    writeln!(self.out, "{}", "Found Items".bold().underline())?;
                    for item in &results.found {
                        self.found_card(item)?;
                    }
                    writeln!(self.out)?;
                }
                Ok(())
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        match self.confirmation {
            Confirmation::Assume => Ok(true),
            Confirmation::Decline => Ok(false),
            Confirmation::Prompt => {
                let stdin = io::stdin();
                eprint!("{prompt} [y/N] ");
                io::stderr().flush()?;
                let mut answer = String::new();
                stdin.lock().read_line(&mut answer)?;
                Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        if self.quiet_notices || self.mode != OutputMode::Table {
            return Ok(());
        }
        writeln!(self.out, "{}", message.green())?;
        Ok(())
    }
}

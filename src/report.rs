//! Final report of qualifying users

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::crawler::CrawlOutcome;
use crate::data_fetcher::models::RankedUser;
use crate::error::AppError;
use crate::mods::ModExclusionSet;

/// How the final report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// A JSON array of `{index, rank, id, username}` records
    Json,
}

/// One line of the report. `index` is the 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub index: usize,
    pub rank: u32,
    pub id: u64,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct Report {
    entries: Vec<ReportEntry>,
    excluded_mods: String,
    checked: usize,
    excluded: usize,
    failed: usize,
}

impl Report {
    /// Orders the qualifying users by rank, whatever order they completed in.
    /// The sort is stable.
    pub fn new(mut users: Vec<RankedUser>, exclusions: &ModExclusionSet) -> Self {
        users.sort_by_key(|user| user.rank);
        let checked = users.len();

        let entries = users
            .into_iter()
            .enumerate()
            .map(|(i, user)| ReportEntry {
                index: i + 1,
                rank: user.rank,
                id: user.id,
                username: user.username,
            })
            .collect();

        Self {
            entries,
            excluded_mods: exclusions.to_string(),
            checked,
            excluded: 0,
            failed: 0,
        }
    }

    pub fn from_outcome(outcome: &CrawlOutcome, exclusions: &ModExclusionSet) -> Self {
        let mut report = Self::new(outcome.qualified.clone(), exclusions);
        report.checked = outcome.checked();
        report.excluded = outcome.excluded;
        report.failed = outcome.failed.len();
        report
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        writeln!(out)?;
        writeln!(out, " Users with no {} plays:", self.excluded_mods)?;
        for entry in &self.entries {
            writeln!(out, "{}. Rank {}: {}", entry.index, entry.rank, entry.username)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Checked {} users: {} qualified, {} excluded, {} failed",
            self.checked,
            self.entries.len(),
            self.excluded,
            self.failed
        )?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        // Output-side failure, not an API decode error
        serde_json::to_writer_pretty(&mut *out, &self.entries)
            .map_err(|e| AppError::Io(e.into()))?;
        writeln!(out)?;
        Ok(())
    }

    pub fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<(), AppError> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }
}

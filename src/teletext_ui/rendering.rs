// src/teletext_ui/rendering.rs - Rendering of GolfPage regions to text with optional ANSI colours

use super::colors::*;
use super::core::{GolfPage, Region, TeletextRow};
use super::formatting::fit_to_width;
use crate::constants::ui::{CONTENT_MARGIN, ID_COLUMN_WIDTH, NAME_COLUMN_WIDTH};
use crate::error::AppError;
use crossterm::style::Color;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const EMPTY_REGION_TEXT: &str = "No data";
const INFO_LABEL_WIDTH: usize = 16;
const COURSE_COLUMN_WIDTH: usize = 30;

impl GolfPage {
    /// Renders the page into a string. Plain pages contain no escape sequences.
    pub fn render(&self) -> String {
        let mut buffer = String::with_capacity(self.estimate_buffer_size());
        self.render_header(&mut buffer);
        for region in &self.regions {
            self.render_region(&mut buffer, region);
        }
        buffer
    }

    /// Renders the page and writes it to `out` in one go.
    pub fn render_to<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        out.write_all(self.render().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn estimate_buffer_size(&self) -> usize {
        let rows: usize = self.regions.iter().map(|r| r.rows.len() + 2).sum();
        // Each line is at most page width plus colour sequences
        (rows + 2) * (self.width + 32)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.plain {
            text.to_string()
        } else {
            format!("\x1b[{}m{}\x1b[0m", foreground_sequence(color, 231), text)
        }
    }

    fn hyperlink(&self, url: &str) -> String {
        if self.plain {
            url.to_string()
        } else {
            format!(
                "\x1b]8;;{url}\x1b\\\x1b[38;5;{}m{url}\x1b[0m\x1b]8;;\x1b\\",
                get_ansi_code(link_fg(), 51)
            )
        }
    }

    fn push_line(&self, buffer: &mut String, content: &str) {
        buffer.push_str(&" ".repeat(CONTENT_MARGIN));
        buffer.push_str(content);
        buffer.push('\n');
    }

    fn render_header(&self, buffer: &mut String) {
        let left = format!(" {} {}", self.title, self.page_number);
        let right = self
            .resolution_date
            .map(|d| d.format("%a %d.%m.%Y ").to_string())
            .unwrap_or_default();
        let gap = self.width.saturating_sub(left.width() + right.width());
        let line = format!("{left}{}{right}", " ".repeat(gap));

        if self.plain {
            buffer.push_str(&line);
            buffer.push('\n');
            buffer.push_str(&"=".repeat(self.width));
        } else {
            buffer.push_str(&format!(
                "\x1b[48;5;{}m\x1b[38;5;{}m{}\x1b[0m",
                get_ansi_code(header_bg(), 21),
                get_ansi_code(text_fg(), 231),
                line
            ));
        }
        buffer.push('\n');
    }

    fn render_region(&self, buffer: &mut String, region: &Region) {
        buffer.push('\n');
        self.push_line(buffer, &self.paint(&region.heading, subheader_fg()));

        if region.rows.is_empty() {
            self.push_line(buffer, &self.paint(EMPTY_REGION_TEXT, text_fg()));
            return;
        }

        for row in &region.rows {
            self.render_row(buffer, row);
        }
    }

    fn render_row(&self, buffer: &mut String, row: &TeletextRow) {
        let content_width = self.width.saturating_sub(CONTENT_MARGIN * 2);

        match row {
            TeletextRow::NewsItem {
                title,
                source,
                link,
                content,
            } => {
                for line in wrap_words(title, content_width) {
                    self.push_line(buffer, &self.paint(&line, text_fg()));
                }
                self.push_line(buffer, &self.paint(source, label_fg()));
                if let Some(content) = content {
                    for line in wrap_words(content, content_width) {
                        self.push_line(buffer, &line);
                    }
                }
                if let Some(url) = link {
                    self.push_line(buffer, &self.hyperlink(url));
                }
                buffer.push('\n');
            }
            TeletextRow::LeaderboardHeader => {
                let header = format!(
                    "{}{}{:>5}{:>5}{:>5}{:>5}{:>5}",
                    fit_to_width("POS", 5),
                    fit_to_width("PLAYER", NAME_COLUMN_WIDTH),
                    "TOT",
                    "R1",
                    "R2",
                    "R3",
                    "R4"
                );
                self.push_line(buffer, &self.paint(&header, label_fg()));
            }
            TeletextRow::LeaderboardRow {
                position,
                name,
                total,
                rounds,
            } => {
                let rounds_text: String = rounds.iter().map(|r| format!("{r:>5}")).collect();
                let line = format!(
                    "{}{}{}{}",
                    self.paint(&fit_to_width(position, 5), text_fg()),
                    self.paint(&fit_to_width(name, NAME_COLUMN_WIDTH), text_fg()),
                    self.paint(&format!("{total:>5}"), score_fg()),
                    rounds_text
                );
                self.push_line(buffer, &line);
            }
            TeletextRow::InfoLine { label, value } => {
                let line = format!(
                    "{}{}",
                    self.paint(&fit_to_width(label, INFO_LABEL_WIDTH), label_fg()),
                    self.paint(value, text_fg())
                );
                self.push_line(buffer, &line);
            }
            TeletextRow::ScheduleRow {
                id,
                name,
                par,
                location,
                venue,
                purse,
                start,
                end,
            } => {
                let dates = format!("{start} - {end}");
                let id_column = format!("#{id} ");
                let name_width =
                    content_width.saturating_sub(id_column.width() + dates.width() + 1);
                let first = format!(
                    "{}{} {}",
                    self.paint(&id_column, label_fg()),
                    self.paint(&fit_to_width(name, name_width), text_fg()),
                    self.paint(&dates, label_fg())
                );
                self.push_line(buffer, &first);
                let second = format!("  {venue}, {location}  Par {par}  Purse {purse}");
                self.push_line(buffer, &fit_to_width(&second, content_width));
            }
            TeletextRow::RankingRow {
                id,
                rank,
                name,
                events,
                wins,
                earnings,
            } => {
                let counts = format!("{events:>4} ev {wins:>3} w  ");
                let line = format!(
                    "{}{}{}{}{}",
                    self.paint(&format!("{rank:>4}  "), label_fg()),
                    self.paint(&fit_to_width(name, NAME_COLUMN_WIDTH), text_fg()),
                    self.paint(&fit_to_width(id, ID_COLUMN_WIDTH), label_fg()),
                    counts,
                    self.paint(earnings, score_fg())
                );
                self.push_line(buffer, &line);
            }
            TeletextRow::RoundRow {
                id,
                date,
                course,
                holes,
                score,
                to_par,
            } => {
                let totals = format!("{holes:>3} holes {score:>4}");
                let line = format!(
                    "{}{}  {}{}{}",
                    self.paint(&format!("{id:>4}  "), label_fg()),
                    date,
                    self.paint(&fit_to_width(course, COURSE_COLUMN_WIDTH), text_fg()),
                    totals,
                    self.paint(&format!("{to_par:>5}"), score_fg())
                );
                self.push_line(buffer, &line);
            }
            TeletextRow::HoleHeader => {
                let header = format!(
                    "{:>4}{:>5}{:>7}{:>7}{:>5}{:>5}",
                    "HOLE", "PAR", "SCORE", "PUTTS", "FWY", "GIR"
                );
                self.push_line(buffer, &self.paint(&header, label_fg()));
            }
            TeletextRow::HoleRow {
                hole,
                par,
                score,
                putts,
                fairway,
                green,
            } => {
                let line = format!(
                    "{}{:>5}{}{:>7}{:>5}{:>5}",
                    self.paint(&format!("{hole:>4}"), label_fg()),
                    par,
                    self.paint(&format!("{score:>7}"), score_fg()),
                    putts,
                    fairway,
                    green
                );
                self.push_line(buffer, &line);
            }
            TeletextRow::PercentageLine { label, percentage } => {
                let line = format!(
                    "{}{}",
                    self.paint(&fit_to_width(label, INFO_LABEL_WIDTH), label_fg()),
                    self.paint(&format!("{percentage:.2}%"), progress_color(*percentage))
                );
                self.push_line(buffer, &line);
            }
            TeletextRow::ErrorMessage(message) => {
                for line in wrap_words(message, content_width) {
                    self.push_line(buffer, &self.paint(&line, error_fg()));
                }
            }
        }
    }
}

/// Greedy word wrap by display width. Words longer than a line are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        for ch in word.chars() {
            if !current.is_empty() && current.width() + ch.width().unwrap_or(0) > width {
                lines.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

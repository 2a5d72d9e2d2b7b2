// src/teletext_ui/core.rs - Page model: named regions that accept row fragments

use chrono::NaiveDate;

/// Named areas of a page. Fragments are appended to a region and rendered in
/// the order the regions were first added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRegion {
    News,
    Leaderboard,
    NextTournament,
    Schedule,
    Rankings,
    Player,
    RoundHistory,
    RoundStatistics,
    Scorecard,
}

impl PageRegion {
    /// Heading used until a caller sets a more specific one (e.g. a tournament name)
    pub fn default_heading(&self) -> &'static str {
        match self {
            PageRegion::News => "TODAY'S NEWS",
            PageRegion::Leaderboard => "CURRENT TOURNAMENT",
            PageRegion::NextTournament => "NEXT TOURNAMENT",
            PageRegion::Schedule => "PGA TOUR SCHEDULE",
            PageRegion::Rankings => "WORLD RANKINGS",
            PageRegion::Player => "PLAYER",
            PageRegion::RoundHistory => "ROUND HISTORY",
            PageRegion::RoundStatistics => "STATISTICS",
            PageRegion::Scorecard => "SCORECARD",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TeletextRow {
    NewsItem {
        title: String,
        source: String,
        link: Option<String>,
        content: Option<String>,
    },
    /// Column labels rendered above leaderboard rows
    LeaderboardHeader,
    LeaderboardRow {
        position: String,
        name: String,
        total: String,
        rounds: Vec<String>,
    },
    InfoLine {
        label: String,
        value: String,
    },
    /// `id` is the TournamentID accepted by `--leaderboard`
    ScheduleRow {
        id: String,
        name: String,
        par: String,
        location: String,
        venue: String,
        purse: String,
        start: String,
        end: String,
    },
    /// `id` is the PlayerID accepted by `--player`
    RankingRow {
        id: String,
        rank: String,
        name: String,
        events: String,
        wins: String,
        earnings: String,
    },
    /// One logged round in the history list
    RoundRow {
        id: String,
        date: String,
        course: String,
        holes: String,
        score: String,
        to_par: String,
    },
    /// Column labels rendered above scorecard holes
    HoleHeader,
    HoleRow {
        hole: String,
        par: String,
        score: String,
        putts: String,
        fairway: String,
        green: String,
    },
    /// A 0-100 value shown in a colour from red to green
    PercentageLine {
        label: String,
        percentage: f64,
    },
    ErrorMessage(String),
}

/// One region of the page with its heading and appended rows
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub kind: PageRegion,
    pub heading: String,
    pub rows: Vec<TeletextRow>,
}

#[derive(Debug)]
pub struct GolfPage {
    pub(super) page_number: u16,
    pub(super) title: String,
    pub(super) regions: Vec<Region>,
    pub(super) plain: bool,
    pub(super) width: usize,
    pub(super) resolution_date: Option<NaiveDate>,
}

impl GolfPage {
    /// Creates an empty page.
    ///
    /// # Arguments
    /// * `page_number` - The teletext page number shown in the header
    /// * `title` - The title displayed at the top of the page
    /// * `plain` - Render without colours and hyperlinks
    ///
    /// # Example
    /// ```
    /// use golf_teletext::teletext_ui::{GolfPage, PageRegion, TeletextRow};
    ///
    /// let mut page = GolfPage::new(240, "GOLF".to_string(), true);
    /// page.append(PageRegion::News, TeletextRow::ErrorMessage("No news".to_string()));
    /// assert!(page.render().contains("No news"));
    /// ```
    pub fn new(page_number: u16, title: String, plain: bool) -> Self {
        Self {
            page_number,
            title,
            regions: Vec::new(),
            plain,
            width: crate::constants::ui::DEFAULT_PAGE_WIDTH,
            resolution_date: None,
        }
    }

    /// Overrides the render width (defaults to 80 columns)
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Shows the date used to pick tournaments in the header
    pub fn set_resolution_date(&mut self, date: NaiveDate) {
        self.resolution_date = Some(date);
    }

    /// Makes sure a region exists so it renders (as "No data") even when nothing is appended
    pub fn add_region(&mut self, kind: PageRegion) -> &mut Region {
        let index = match self.regions.iter().position(|r| r.kind == kind) {
            Some(index) => index,
            None => {
                self.regions.push(Region {
                    kind,
                    heading: kind.default_heading().to_string(),
                    rows: Vec::new(),
                });
                self.regions.len() - 1
            }
        };
        &mut self.regions[index]
    }

    /// Replaces the heading of a region
    pub fn set_heading(&mut self, kind: PageRegion, heading: impl Into<String>) {
        self.add_region(kind).heading = heading.into();
    }

    /// Appends a fragment to a region, creating the region on first use
    pub fn append(&mut self, kind: PageRegion, row: TeletextRow) {
        self.add_region(kind).rows.push(row);
    }

    /// Appends several fragments to a region
    pub fn extend(&mut self, kind: PageRegion, rows: impl IntoIterator<Item = TeletextRow>) {
        self.add_region(kind).rows.extend(rows);
    }

    pub fn add_error_message(&mut self, kind: PageRegion, message: &str) {
        self.append(kind, TeletextRow::ErrorMessage(message.to_string()));
    }

    pub fn region(&self, kind: PageRegion) -> Option<&Region> {
        self.regions.iter().find(|r| r.kind == kind)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Checks whether any region carries the given error message
    pub fn has_error_message(&self, message: &str) -> bool {
        self.regions.iter().any(|region| {
            region
                .rows
                .iter()
                .any(|row| matches!(row, TeletextRow::ErrorMessage(m) if m == message))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_keep_insertion_order() {
        let mut page = GolfPage::new(240, "GOLF".to_string(), true);
        page.add_region(PageRegion::News);
        page.add_region(PageRegion::Leaderboard);
        page.append(PageRegion::News, TeletextRow::ErrorMessage("x".to_string()));
        page.add_region(PageRegion::NextTournament);

        let kinds: Vec<_> = page.regions().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PageRegion::News,
                PageRegion::Leaderboard,
                PageRegion::NextTournament
            ]
        );
        assert_eq!(page.region(PageRegion::News).unwrap().rows.len(), 1);
    }

    #[test]
    fn test_set_heading_overrides_default() {
        let mut page = GolfPage::new(240, "GOLF".to_string(), true);
        assert_eq!(
            page.add_region(PageRegion::Leaderboard).heading,
            "CURRENT TOURNAMENT"
        );
        page.set_heading(PageRegion::Leaderboard, "Masters Tournament");
        assert_eq!(
            page.region(PageRegion::Leaderboard).unwrap().heading,
            "Masters Tournament"
        );
    }

    #[test]
    fn test_error_messages_are_findable() {
        let mut page = GolfPage::new(240, "GOLF".to_string(), true);
        page.add_error_message(PageRegion::Schedule, "Schedule unavailable");
        assert!(page.has_error_message("Schedule unavailable"));
        assert!(!page.has_error_message("Something else"));
    }
}

//! Quality report aggregation and rendering

use super::distribution::{FrequencyCounter, format_thousands, percentage};
use crate::app::models::{DayOfWeek, EnrichedIncident, LocationType, Season, TimePeriod};
use crate::app::services::record_processor::ProcessingStats;
use crate::constants::{
    REPORT_COUNT_WIDTH, REPORT_RULE_WIDTH, REPORT_TITLE, REPORT_TOP_N, TIMESTAMP_FORMAT,
};
use chrono::NaiveDateTime;
use tracing::debug;

/// First and last incident timestamps of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

impl DateRange {
    /// Whole days between the first and last incident
    pub fn days_covered(&self) -> i64 {
        (self.last - self.first).num_days()
    }
}

/// Summary statistics of `unit_count`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCountSummary {
    pub mean: f64,
    pub min: usize,
    pub max: usize,
}

/// Aggregates over a non-empty enriched dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetProfile {
    pub record_count: usize,
    /// `None` only if no stored timestamp could be parsed
    pub date_range: Option<DateRange>,
    pub top_events: Vec<(String, usize)>,
    pub location_types: Vec<(LocationType, usize)>,
    pub with_radio_channel: usize,
    pub without_radio_channel: usize,
    pub top_radio_channels: Vec<(String, usize)>,
    pub unit_counts: UnitCountSummary,
    pub time_periods: Vec<(TimePeriod, usize)>,
    pub days_of_week: Vec<(DayOfWeek, usize)>,
    pub weekday_count: usize,
    pub weekend_count: usize,
    pub seasons: Vec<(Season, usize)>,
}

/// Data quality report for one enrichment run
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    pub total_original: usize,
    pub duplicates_removed: usize,
    pub total_enhanced: usize,
    /// `None` when the enriched dataset is empty
    pub profile: Option<DatasetProfile>,
}

/// Compute every report aggregate over the enriched dataset
pub fn generate_quality_report(
    incidents: &[EnrichedIncident],
    stats: &ProcessingStats,
) -> QualityReport {
    debug!("Generating quality report over {} incidents", incidents.len());

    QualityReport {
        total_original: stats.total_original,
        duplicates_removed: stats.duplicates_removed,
        total_enhanced: stats.total_enhanced,
        profile: profile_dataset(incidents),
    }
}

/// Generate and render the report in one call
pub fn report(incidents: &[EnrichedIncident], stats: &ProcessingStats) -> String {
    generate_quality_report(incidents, stats).render()
}

fn profile_dataset(incidents: &[EnrichedIncident]) -> Option<DatasetProfile> {
    let record_count = incidents.len();
    if record_count == 0 {
        return None;
    }

    let timestamps: Vec<NaiveDateTime> = incidents
        .iter()
        .filter_map(|incident| incident.timestamp().ok())
        .collect();
    let date_range = match (timestamps.iter().min(), timestamps.iter().max()) {
        (Some(&first), Some(&last)) => Some(DateRange { first, last }),
        _ => None,
    };

    let events: FrequencyCounter<&str> = incidents.iter().map(|i| i.event.as_str()).collect();
    let location_types: FrequencyCounter<LocationType> =
        incidents.iter().map(|i| i.location_type).collect();
    let radio_channels: FrequencyCounter<&str> = incidents
        .iter()
        .map(|i| i.radio_channel.as_str())
        .filter(|channel| !channel.is_empty())
        .collect();
    let time_periods: FrequencyCounter<TimePeriod> =
        incidents.iter().map(|i| i.time_period).collect();
    let days: FrequencyCounter<DayOfWeek> = incidents.iter().map(|i| i.day_of_week).collect();
    let seasons: FrequencyCounter<Season> = incidents.iter().map(|i| i.season).collect();

    let unit_total: usize = incidents.iter().map(|i| i.unit_count).sum();
    let unit_counts = UnitCountSummary {
        mean: unit_total as f64 / record_count as f64,
        min: incidents.iter().map(|i| i.unit_count).min().unwrap_or(0),
        max: incidents.iter().map(|i| i.unit_count).max().unwrap_or(0),
    };

    let weekend_count = incidents.iter().filter(|i| i.is_weekend).count();

    Some(DatasetProfile {
        record_count,
        date_range,
        top_events: events
            .most_common(Some(REPORT_TOP_N))
            .into_iter()
            .map(|(event, count)| (event.to_string(), count))
            .collect(),
        location_types: location_types.most_common(None),
        with_radio_channel: radio_channels.total(),
        without_radio_channel: record_count - radio_channels.total(),
        top_radio_channels: radio_channels
            .most_common(Some(REPORT_TOP_N))
            .into_iter()
            .map(|(channel, count)| (channel.to_string(), count))
            .collect(),
        unit_counts,
        time_periods: TimePeriod::ALL
            .iter()
            .map(|&period| (period, time_periods.get(&period)))
            .collect(),
        days_of_week: DayOfWeek::ALL
            .iter()
            .map(|&day| (day, days.get(&day)))
            .collect(),
        weekday_count: record_count - weekend_count,
        weekend_count,
        seasons: Season::ALL
            .iter()
            .map(|&season| (season, seasons.get(&season)))
            .collect(),
    })
}

impl QualityReport {
    /// Render the fixed-layout text report
    ///
    /// Lines are joined with `\n` and there is no trailing newline.
    pub fn render(&self) -> String {
        let double_rule = "=".repeat(REPORT_RULE_WIDTH);
        let mut lines = vec![double_rule.clone(), REPORT_TITLE.to_string(), double_rule.clone()];
        lines.push(String::new());

        push_section_header(&mut lines, "PROCESSING SUMMARY");
        lines.push(format!(
            "Original records:        {}",
            format_thousands(self.total_original)
        ));
        lines.push(format!(
            "Duplicates removed:      {}",
            format_thousands(self.duplicates_removed)
        ));
        lines.push(format!(
            "Enhanced records:        {}",
            format_thousands(self.total_enhanced)
        ));
        lines.push(String::new());

        match &self.profile {
            Some(profile) => profile.render_into(&mut lines),
            None => {
                push_section_header(&mut lines, "NO DATA");
                lines.push(
                    "No enriched records available; distributions were not computed.".to_string(),
                );
                lines.push(String::new());
            }
        }

        lines.push(double_rule);
        lines.join("\n")
    }
}

impl DatasetProfile {
    fn render_into(&self, lines: &mut Vec<String>) {
        let total = self.record_count;

        push_section_header(lines, "DATE RANGE");
        match &self.date_range {
            Some(range) => {
                lines.push(format!(
                    "First incident:          {}",
                    range.first.format(TIMESTAMP_FORMAT)
                ));
                lines.push(format!(
                    "Last incident:           {}",
                    range.last.format(TIMESTAMP_FORMAT)
                ));
                lines.push(format!("Total days covered:      {}", range.days_covered()));
            }
            None => lines.push("First incident:          n/a".to_string()),
        }
        lines.push(String::new());

        push_section_header(lines, &format!("TOP {} EVENT TYPES", REPORT_TOP_N));
        for (event, count) in &self.top_events {
            lines.push(distribution_line(*count, total, event));
        }
        lines.push(String::new());

        push_section_header(lines, "LOCATION TYPE DISTRIBUTION");
        for (location_type, count) in &self.location_types {
            lines.push(distribution_line(*count, total, location_type.as_str()));
        }
        lines.push(String::new());

        push_section_header(lines, "RADIO CHANNEL DISTRIBUTION");
        lines.push(format!("With radio channel:      {}", self.with_radio_channel));
        lines.push(format!("Without radio channel:   {}", self.without_radio_channel));
        lines.push(String::new());
        lines.push("Top radio channels:".to_string());
        for (channel, count) in &self.top_radio_channels {
            lines.push(format!("  {}: {}", channel, format_thousands(*count)));
        }
        lines.push(String::new());

        push_section_header(lines, "UNIT COUNT STATISTICS");
        lines.push(format!(
            "Average units per incident:  {:.2}",
            self.unit_counts.mean
        ));
        lines.push(format!("Minimum units:               {}", self.unit_counts.min));
        lines.push(format!("Maximum units:               {}", self.unit_counts.max));
        lines.push(String::new());

        push_section_header(lines, "TIME PERIOD DISTRIBUTION");
        for (period, count) in &self.time_periods {
            lines.push(distribution_line(*count, total, period.as_str()));
        }
        lines.push(String::new());

        push_section_header(lines, "DAY OF WEEK DISTRIBUTION");
        for (day, count) in &self.days_of_week {
            lines.push(distribution_line(*count, total, day.as_str()));
        }
        lines.push(String::new());

        push_section_header(lines, "WEEKEND vs WEEKDAY");
        lines.push(format!(
            "Weekday incidents:       {} ({:.1}%)",
            format_thousands(self.weekday_count),
            percentage(self.weekday_count, total)
        ));
        lines.push(format!(
            "Weekend incidents:       {} ({:.1}%)",
            format_thousands(self.weekend_count),
            percentage(self.weekend_count, total)
        ));
        lines.push(String::new());

        push_section_header(lines, "SEASONAL DISTRIBUTION");
        for (season, count) in &self.seasons {
            lines.push(distribution_line(*count, total, season.as_str()));
        }
        lines.push(String::new());
    }
}

fn push_section_header(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("-".repeat(REPORT_RULE_WIDTH));
}

/// `{count} ({pct}%) - {label}` with the count right-aligned
fn distribution_line(count: usize, total: usize, label: &str) -> String {
    format!(
        "{:>width$} ({:5.1}%) - {}",
        format_thousands(count),
        percentage(count, total),
        label,
        width = REPORT_COUNT_WIDTH
    )
}

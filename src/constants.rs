//! Application constants for the incident processor
//!
//! This module contains the fixed formats, column layouts, default paths and
//! report layout values used throughout the application.

// =============================================================================
// Timestamp and Table Formats
// =============================================================================

/// Fixed format of the incident `Datetime` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column layouts of the raw and enriched tables
pub mod columns {
    /// Header of the collector's input table (case-sensitive)
    pub const RAW: &[&str] = &["Datetime", "Event", "Location", "Units"];

    /// Header of the enriched output table, in fixed order
    pub const ENRICHED: &[&str] = &[
        // Source fields
        "datetime",
        "event",
        "location",
        "units",
        // Units analysis
        "radio_channel",
        "units_list",
        "unit_count",
        // Location analysis
        "location_type",
        "street_address",
        "cross_street",
        "apartment_unit",
        "building_name",
        // Temporal analysis
        "year",
        "month",
        "day",
        "day_of_week",
        "hour",
        "time_period",
        "is_weekend",
        "season",
        "week_of_year",
    ];
}

// =============================================================================
// Field Notation Patterns
// =============================================================================

/// Units text carrying both a radio channel and a unit list
pub const RADIO_UNITS_PATTERN: &str = r"^Radio:\s*(\S+)\s+Units:\s*(.+)";

/// Units text carrying only a unit list
pub const UNITS_ONLY_PATTERN: &str = r"^Units:\s*(.+)";

/// Comma-introduced apartment/unit segment inside a location
pub const APARTMENT_SEGMENT_PATTERN: &str = r",\s*Apt/Unit:([^,]+)";

/// Separator between the two streets of an intersection
pub const INTERSECTION_SEPARATOR: char = '/';

/// Marker identifying block-style addresses (matched case-insensitively)
pub const BLOCK_MARKER: &str = "BLOCK";

// =============================================================================
// Default Paths
// =============================================================================

/// Default raw input table
pub const DEFAULT_INPUT_FILE: &str = "incidents.csv";

/// Default enriched output table
pub const DEFAULT_OUTPUT_FILE: &str = "incidents_enhanced.csv";

/// Default quality report artifact
pub const DEFAULT_REPORT_FILE: &str = "data_quality_report_phase1.txt";

/// Application directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "incident-processor";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment overrides applied on top of the config file
pub mod env_vars {
    pub const INPUT_PATH: &str = "INCIDENT_INPUT_PATH";
    pub const OUTPUT_PATH: &str = "INCIDENT_OUTPUT_PATH";
    pub const REPORT_PATH: &str = "INCIDENT_REPORT_PATH";
}

// =============================================================================
// Processing
// =============================================================================

/// Emit a progress log line every this many records
pub const PROGRESS_LOG_INTERVAL: usize = 1000;

/// Default log level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Quality Report Layout
// =============================================================================

/// Width of the `=` and `-` rules framing report sections
pub const REPORT_RULE_WIDTH: usize = 70;

/// Report banner title
pub const REPORT_TITLE: &str = "DATA QUALITY REPORT - Phase 1 Enhancement";

/// Number of entries shown in ranked distributions
pub const REPORT_TOP_N: usize = 10;

/// Minimum width of right-aligned counts in distribution lines
pub const REPORT_COUNT_WIDTH: usize = 5;

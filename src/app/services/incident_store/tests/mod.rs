//! Tests for incident table persistence


use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Raw table exercising quoting, duplicates and a malformed timestamp
pub const RAW_TABLE: &str = "\
Datetime,Event,Location,Units
2024-01-01 07:15:00,MEDICAL EMERGENCY,100 BLOCK OF MAIN ST,Radio: 9C Units: M1
2024-01-03 13:40:00,VEHICLE ACCIDENT,MAIN ST / 2ND ST,\"Units: E1, T1, M1\"
2024-01-01 07:15:00,MEDICAL EMERGENCY,100 BLOCK OF MAIN ST,Radio: 9C Units: M1
not a date,FIRE,1 ELM ST,Units: E1
";

/// Write `content` to `name` inside a fresh temporary directory
pub fn write_fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

//! Movie records loaded from the `;`-delimited fixture file.

use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub record_id: u32,
    pub name: String,
    pub released: u32,
    pub directors_writers: String,
    /// Millions of USD.
    pub budget: f64,
    pub running_time: u32,
}

impl MovieRecord {
    fn from_row(row: &str) -> Self {
        let cells: Vec<&str> = row.split(';').collect();
        assert_eq!(cells.len(), 6, "malformed row: {}", row);
        Self {
            record_id: cells[0].parse().unwrap_or(0),
            name: cells[1].to_string(),
            released: cells[2].parse().unwrap_or(0),
            directors_writers: cells[3].to_string(),
            budget: cells[4].parse().unwrap_or(0.0),
            running_time: cells[5].parse().unwrap_or(0),
        }
    }
}

pub fn movie_records() -> Vec<MovieRecord> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/alien.csv");
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    data.lines()
        .filter(|row| !row.trim().is_empty())
        .map(MovieRecord::from_row)
        .collect()
}

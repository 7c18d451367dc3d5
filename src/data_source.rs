//! Where resources and bookings come from.
//!
//! A `DataSource` delivers the two collections independently so they can be
//! fetched in parallel. Two implementations ship with the crate: JSON files on
//! disk and a deterministic demo generator.

use crate::model::{Booking, ChildResource, Id, ParentResource};
use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::{CompressorWriter, Decompressor};
use chrono::{Duration, NaiveDate};
use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Supplier of the resource tree and the booking list.
pub trait DataSource: Send + Sync {
    /// Short human-readable description shown in the status bar
    fn describe(&self) -> String;

    fn fetch_resources(&self) -> Result<Vec<ParentResource>>;

    fn fetch_bookings(&self) -> Result<Vec<Booking>>;
}

fn is_brotli(path: &Path) -> bool {
    path.extension().map(|ext| ext == "br").unwrap_or(false)
}

/// Reads a JSON document, decompressing it first if the path ends with `.br`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let reader: Box<dyn Read> = if is_brotli(path) {
        Box::new(BufReader::new(Decompressor::new(file, 4096)))
    } else {
        Box::new(BufReader::new(file))
    };

    serde_json::from_reader(reader).with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

/// Writes a value as pretty-printed JSON, Brotli-compressed if the path ends with `.br`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let buf_writer = BufWriter::new(file);

    if is_brotli(path) {
        let params = BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        };
        let mut writer = CompressorWriter::with_params(buf_writer, 4096, &params);
        serde_json::to_writer_pretty(&mut writer, value).context("Failed to serialize to JSON")?;
        // into_inner finishes the Brotli stream
        let mut inner = writer.into_inner();
        inner.flush().context("Failed to flush writer")?;
    } else {
        let mut writer = buf_writer;
        serde_json::to_writer_pretty(&mut writer, value).context("Failed to serialize to JSON")?;
        writer.flush().context("Failed to flush writer")?;
    }
    Ok(())
}

/// Resources and bookings stored as two JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    resources_path: PathBuf,
    bookings_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(resources_path: impl Into<PathBuf>, bookings_path: impl Into<PathBuf>) -> Self {
        Self {
            resources_path: resources_path.into(),
            bookings_path: bookings_path.into(),
        }
    }

    pub fn resources_path(&self) -> &Path {
        &self.resources_path
    }

    pub fn bookings_path(&self) -> &Path {
        &self.bookings_path
    }
}

impl DataSource for JsonFileSource {
    fn describe(&self) -> String {
        let name = |p: &Path| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        };
        format!("{} + {}", name(&self.resources_path), name(&self.bookings_path))
    }

    fn fetch_resources(&self) -> Result<Vec<ParentResource>> {
        let resources: Vec<ParentResource> = read_json(&self.resources_path)?;
        log::info!("Loaded {} resource groups from {}", resources.len(), self.resources_path.display());
        Ok(resources)
    }

    fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        let bookings: Vec<Booking> = read_json(&self.bookings_path)?;
        log::info!("Loaded {} bookings from {}", bookings.len(), self.bookings_path.display());
        Ok(bookings)
    }
}

const GROUP_NAMES: &[&str] = &[
    "Butterfly", "Deluxe", "Garden", "Lakeside", "Summit", "Harbor", "Meadow", "Pinewood",
];

const GUEST_NAMES: &[&str] = &[
    "Smith", "Garcia", "Nguyen", "Okafor", "Larsen", "Tanaka", "Moreau", "Silva", "Kowalski", "Haddad",
];

const BOOKING_COLORS: &[&str] = &["#4f86c6", "#e07a5f", "#81b29a", "#f2cc8f", "#9b5de5", "#3d405b"];

/// Seeded synthetic data, reproducible for a given configuration.
#[derive(Debug)]
pub struct DemoSource {
    pub parents: usize,
    pub children_per_parent: usize,
    pub bookings: usize,
    /// Bookings start within this many days after the anchor
    pub days: usize,
    pub anchor: NaiveDate,
    pub seed: u64,
    generated: OnceCell<(Vec<ParentResource>, Vec<Booking>)>,
}

impl DemoSource {
    pub fn new(anchor: NaiveDate) -> Self {
        Self::with_config(8, 6, 120, 30, anchor, 42)
    }

    pub fn with_config(
        parents: usize,
        children_per_parent: usize,
        bookings: usize,
        days: usize,
        anchor: NaiveDate,
        seed: u64,
    ) -> Self {
        Self {
            parents,
            children_per_parent,
            bookings,
            days,
            anchor,
            seed,
            generated: OnceCell::new(),
        }
    }

    /// Generates the full data set. Same configuration, same output.
    pub fn generate(&self) -> (Vec<ParentResource>, Vec<Booking>) {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut resources = Vec::with_capacity(self.parents);
        let mut child_ids = Vec::new();
        for p in 0..self.parents {
            let group = GROUP_NAMES[p % GROUP_NAMES.len()];
            let round = p / GROUP_NAMES.len();
            let name = if round == 0 { group.to_string() } else { format!("{} {}", group, round + 1) };

            let mut parent = ParentResource::new(format!("P{}", p + 1), name).with_expanded(p == 0);
            let children = if self.children_per_parent == 0 {
                0
            } else {
                rng.gen_range(1..=self.children_per_parent)
            };
            for c in 0..children {
                let id = Id::from(format!("{}{:02}", 100 * (p + 1), c + 1));
                parent = parent.with_child(ChildResource::new(id.clone(), format!("{} {}", group, c + 1)));
                child_ids.push(id);
            }
            resources.push(parent);
        }

        let mut bookings = Vec::with_capacity(self.bookings);
        if !child_ids.is_empty() && self.days > 0 {
            for n in 0..self.bookings {
                let resource_id = child_ids[rng.gen_range(0..child_ids.len())].clone();
                let start = self.anchor + Duration::days(rng.gen_range(-3..self.days as i64));
                let end = start + Duration::days(rng.gen_range(0..6));
                let guest = GUEST_NAMES[rng.gen_range(0..GUEST_NAMES.len())];
                let color = if rng.gen_bool(0.5) {
                    Some(BOOKING_COLORS[rng.gen_range(0..BOOKING_COLORS.len())].to_string())
                } else {
                    None
                };
                bookings.push(Booking {
                    id: Id::Int(n as i64 + 1),
                    resource_id,
                    start_date: start,
                    end_date: end,
                    name: Some(format!("{} family", guest)),
                    notes: None,
                    color,
                });
            }
        }

        (resources, bookings)
    }

    fn data(&self) -> &(Vec<ParentResource>, Vec<Booking>) {
        self.generated.get_or_init(|| self.generate())
    }
}

impl DataSource for DemoSource {
    fn describe(&self) -> String {
        format!("demo (seed {})", self.seed)
    }

    fn fetch_resources(&self) -> Result<Vec<ParentResource>> {
        Ok(self.data().0.clone())
    }

    fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.data().1.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::child_ids;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 21).unwrap()
    }

    #[test]
    fn test_demo_is_deterministic() {
        let a = DemoSource::with_config(4, 5, 50, 20, anchor(), 7).generate();
        let b = DemoSource::with_config(4, 5, 50, 20, anchor(), 7).generate();
        assert_eq!(a, b);
        assert_eq!(a.0.len(), 4);
        assert_eq!(a.1.len(), 50);
    }

    #[test]
    fn test_demo_bookings_reference_children() {
        let source = DemoSource::new(anchor());
        let resources = source.fetch_resources().unwrap();
        let bookings = source.fetch_bookings().unwrap();
        let children = child_ids(&resources);
        for booking in &bookings {
            assert!(children.contains(&booking.resource_id));
            assert!(booking.start_date <= booking.end_date);
        }
    }

    #[test]
    fn test_demo_without_children_has_no_bookings() {
        let (resources, bookings) = DemoSource::with_config(3, 0, 10, 10, anchor(), 1).generate();
        assert_eq!(resources.len(), 3);
        assert!(bookings.is_empty());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let source = JsonFileSource::new("/nonexistent/resources.json", "/nonexistent/bookings.json");
        let err = source.fetch_resources().unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/resources.json"));
    }

    #[test]
    fn test_describe_uses_file_names() {
        let source = JsonFileSource::new("/data/resources.json", "/data/bookings.json.br");
        assert_eq!(source.describe(), "resources.json + bookings.json.br");
    }
}

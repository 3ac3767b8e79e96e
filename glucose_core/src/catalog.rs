//! Reference catalog of foods and exercises.
//!
//! Each dataset is a CSV file with a header row and three columns:
//! identifier, display name, total glucose impact. Effect durations are not
//! part of the rows; they come from [`CatalogConfig`] at load time. Exercise
//! rows carry a positive magnitude that is stored negated.
//!
//! A malformed row fails the whole load. There is no partially loaded catalog.

use crate::config::CatalogConfig;
use crate::{Catalog, CatalogItem, Error, ItemKind, Result};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Reference food dataset bundled with the library
pub const BUILTIN_FOOD_CSV: &str = include_str!("../data/FoodDB.csv");

/// Reference exercise dataset bundled with the library
pub const BUILTIN_EXERCISE_CSV: &str = include_str!("../data/Exercise.csv");

/// Cached built-in catalog - parsed once and shared across simulations
static BUILTIN_CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Get a reference to the cached built-in catalog
///
/// The catalog is read-only after load, so the returned reference can be
/// shared freely between threads running independent simulations.
pub fn builtin_catalog() -> Result<&'static Catalog> {
    BUILTIN_CATALOG.get_or_try_init(|| {
        Catalog::from_readers(
            BUILTIN_FOOD_CSV.as_bytes(),
            BUILTIN_EXERCISE_CSV.as_bytes(),
            &CatalogConfig::default(),
        )
    })
}

impl Catalog {
    /// Load both datasets from CSV files on disk
    pub fn load(food_path: &Path, exercise_path: &Path, config: &CatalogConfig) -> Result<Self> {
        let food = std::fs::File::open(food_path)?;
        let exercise = std::fs::File::open(exercise_path)?;
        let catalog = Self::from_readers(food, exercise, config)?;

        tracing::info!(
            "Loaded catalog: {} foods from {:?}, {} exercises from {:?}",
            catalog.foods.len(),
            food_path,
            catalog.exercises.len(),
            exercise_path
        );

        Ok(catalog)
    }

    /// Load the catalog described by a config, falling back to the built-in
    /// dataset for any path that isn't set
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let foods = match &config.food_path {
            Some(path) => load_items(std::fs::File::open(path)?, ItemKind::Food, config)?,
            None => load_items(BUILTIN_FOOD_CSV.as_bytes(), ItemKind::Food, config)?,
        };
        let exercises = match &config.exercise_path {
            Some(path) => load_items(std::fs::File::open(path)?, ItemKind::Exercise, config)?,
            None => load_items(BUILTIN_EXERCISE_CSV.as_bytes(), ItemKind::Exercise, config)?,
        };

        tracing::info!(
            "Loaded catalog: {} foods from {}, {} exercises from {}",
            foods.len(),
            source_name(config.food_path.as_deref()),
            exercises.len(),
            source_name(config.exercise_path.as_deref())
        );

        Ok(Self { foods, exercises })
    }

    /// Load both datasets from arbitrary readers
    pub fn from_readers<F: Read, E: Read>(food: F, exercise: E, config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            foods: load_items(food, ItemKind::Food, config)?,
            exercises: load_items(exercise, ItemKind::Exercise, config)?,
        })
    }

    /// Resolve an item by kind and identifier
    pub fn lookup(&self, kind: ItemKind, id: u32) -> Result<&CatalogItem> {
        let items = match kind {
            ItemKind::Food => &self.foods,
            ItemKind::Exercise => &self.exercises,
        };
        items.get(&id).ok_or(Error::UnknownItem { kind, id })
    }

    /// All items of one kind, sorted by identifier
    pub fn items(&self, kind: ItemKind) -> Vec<&CatalogItem> {
        let items = match kind {
            ItemKind::Food => &self.foods,
            ItemKind::Exercise => &self.exercises,
        };
        let mut sorted: Vec<_> = items.values().collect();
        sorted.sort_by_key(|item| item.id);
        sorted
    }
}

fn source_name(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("{:?}", path),
        None => "built-in data".to_string(),
    }
}

fn load_items<R: Read>(reader: R, kind: ItemKind, config: &CatalogConfig) -> Result<HashMap<u32, CatalogItem>> {
    let duration_hours = match kind {
        ItemKind::Food => config.food_duration_hours,
        ItemKind::Exercise => config.exercise_duration_hours,
    };

    // Column count is checked per row so the error can name the line
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let malformed = |reason: String| Error::CatalogLoad { kind, line, reason };

        if record.len() != 3 {
            return Err(malformed(format!(
                "expected 3 columns, found {}",
                record.len()
            )));
        }

        let id: u32 = record[0]
            .parse()
            .map_err(|_| malformed(format!("invalid identifier {:?}", &record[0])))?;
        let impact: i64 = record[2]
            .parse()
            .map_err(|_| malformed(format!("invalid glucose impact {:?}", &record[2])))?;

        let total_impact = match kind {
            ItemKind::Food => impact as f64,
            ItemKind::Exercise => -(impact as f64),
        };

        let item = CatalogItem {
            kind,
            id,
            name: record[1].to_string(),
            total_impact,
            duration_hours,
        };

        if let Some(previous) = items.insert(id, item) {
            tracing::warn!(
                "Duplicate {} id {} on line {} replaces '{}'",
                kind,
                id,
                line,
                previous.name
            );
        }
    }

    tracing::debug!("Parsed {} {} items", items.len(), kind);
    Ok(items)
}

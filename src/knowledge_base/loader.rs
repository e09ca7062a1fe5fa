// ABOUTME: CSV parsing and row validation for the nutrition knowledge base
// ABOUTME: Validates the header, converts numeric columns, and builds FoodRecords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use glycemic_core::constants::columns;
use glycemic_core::constants::thresholds::MAX_GLYCEMIC_INDEX;
use glycemic_core::models::{FoodRecord, MacronutrientProfile, ProcessingLevel};

use super::error::DataLoadError;
use super::normalize_food_name;

/// Parsed table plus bookkeeping for the load summary
#[derive(Debug)]
pub(super) struct LoadedTable {
    pub foods: BTreeMap<String, FoodRecord>,
    pub rows: usize,
    pub duplicates: Vec<String>,
}

/// Column name to position in each record
struct ColumnIndex(HashMap<&'static str, usize>);

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let mut seen = HashSet::with_capacity(headers.len());
        for header in headers {
            if !columns::REQUIRED.contains(&header) {
                return Err(DataLoadError::UnknownColumn(header.to_owned()));
            }
            if !seen.insert(header) {
                return Err(DataLoadError::DuplicateColumn(header.to_owned()));
            }
        }

        let mut index = HashMap::with_capacity(columns::REQUIRED.len());
        for &column in columns::REQUIRED {
            let position = headers
                .iter()
                .position(|header| header == column)
                .ok_or(DataLoadError::MissingColumn(column))?;
            index.insert(column, position);
        }
        Ok(Self(index))
    }

    fn cell<'r>(&self, record: &'r StringRecord, column: &'static str) -> &'r str {
        self.0
            .get(column)
            .and_then(|&position| record.get(position))
            .unwrap_or("")
    }
}

/// Check a record against the table invariants
///
/// Applied to every CSV row and to records handed to
/// [`KnowledgeBase::from_records`](super::KnowledgeBase::from_records).
/// Returns the reason for the first violation.
pub(super) fn validate_record(record: &FoodRecord) -> Result<(), String> {
    if record.name.is_empty() {
        return Err("name is empty".to_owned());
    }

    let gi = record.glycemic_index;
    if !gi.is_finite() || !(0.0..=MAX_GLYCEMIC_INDEX).contains(&gi) {
        return Err(format!(
            "glycemic_index must be between 0 and {MAX_GLYCEMIC_INDEX}, got {gi}"
        ));
    }

    let base = record.base_serving_grams;
    if !base.is_finite() || base <= 0.0 {
        return Err(format!("serving_size_grams must be positive, got {base}"));
    }

    let macros = &record.macronutrients_per_100g;
    for (column, value) in [
        (columns::CARBOHYDRATES, macros.carbohydrates),
        (columns::FIBER, macros.fiber),
        (columns::PROTEIN, macros.protein),
        (columns::FAT, macros.fat),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{column} must be non-negative, got {value}"));
            }
        }
    }
    Ok(())
}

/// View over one data row with typed accessors
struct Row<'a> {
    record: &'a StringRecord,
    index: &'a ColumnIndex,
    line: u64,
}

impl Row<'_> {
    fn invalid(&self, reason: impl Into<String>) -> DataLoadError {
        DataLoadError::InvalidRow {
            line: self.line,
            reason: reason.into(),
        }
    }

    fn text(&self, column: &'static str) -> &str {
        self.index.cell(self.record, column)
    }

    fn optional_number(&self, column: &'static str) -> Result<Option<f64>, DataLoadError> {
        let raw = self.text(column);
        if raw.is_empty() {
            return Ok(None);
        }
        let value: f64 = raw
            .parse()
            .map_err(|_| self.invalid(format!("{column} '{raw}' is not a number")))?;
        if !value.is_finite() {
            return Err(self.invalid(format!("{column} '{raw}' is not finite")));
        }
        Ok(Some(value))
    }

    fn required_number(&self, column: &'static str) -> Result<f64, DataLoadError> {
        self.optional_number(column)?
            .ok_or_else(|| self.invalid(format!("{column} is empty")))
    }

    fn to_record(&self) -> Result<FoodRecord, DataLoadError> {
        let processing_level: ProcessingLevel = self
            .text(columns::PROCESSING_LEVEL)
            .parse()
            .map_err(|e| self.invalid(format!("{e}")))?;

        let record = FoodRecord {
            name: normalize_food_name(self.text(columns::NAME)),
            glycemic_index: self.required_number(columns::GLYCEMIC_INDEX)?,
            macronutrients_per_100g: MacronutrientProfile {
                carbohydrates: self.optional_number(columns::CARBOHYDRATES)?,
                fiber: self.optional_number(columns::FIBER)?,
                protein: self.optional_number(columns::PROTEIN)?,
                fat: self.optional_number(columns::FAT)?,
            },
            processing_level,
            base_serving_grams: self.required_number(columns::SERVING_SIZE_GRAMS)?,
        };
        validate_record(&record).map_err(|reason| self.invalid(reason))?;
        Ok(record)
    }
}

/// Parse a nutrition CSV into a name-keyed table
///
/// The reader is consumed and dropped before this returns, on success or failure.
///
/// # Errors
///
/// Returns `DataLoadError` for an invalid header, the first malformed row, or a
/// source with no header or no rows.
pub(super) fn load_foods<R: Read>(
    reader: R,
    source_label: &str,
) -> Result<LoadedTable, DataLoadError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?;
    if headers.iter().all(str::is_empty) {
        return Err(DataLoadError::EmptyDataSource(source_label.to_owned()));
    }
    let index = ColumnIndex::from_headers(headers)?;

    let mut foods = BTreeMap::new();
    let mut duplicates = Vec::new();
    let mut rows = 0;

    for (offset, result) in csv_reader.records().enumerate() {
        let record = result?;
        rows += 1;
        let line = record
            .position()
            .map_or(offset as u64 + 2, csv::Position::line);
        let food = Row {
            record: &record,
            index: &index,
            line,
        }
        .to_record()?;

        if foods.contains_key(&food.name) {
            duplicates.push(food.name);
        } else {
            foods.insert(food.name.clone(), food);
        }
    }

    if foods.is_empty() {
        return Err(DataLoadError::EmptyDataSource(source_label.to_owned()));
    }

    Ok(LoadedTable {
        foods,
        rows,
        duplicates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "name,glycemic_index,carbohydrates,fiber,protein,fat,processing_level,serving_size_grams";

    fn load(body: &str) -> Result<LoadedTable, DataLoadError> {
        load_foods(format!("{HEADER}\n{body}").as_bytes(), "inline")
    }

    #[test]
    fn test_loads_and_normalizes_names() {
        let table = load("  Cabbage  Cruciferous Boiled ,20,6.0,2.5,1.3,0.2,whole,98\n").unwrap();
        let record = &table.foods["cabbage cruciferous boiled"];
        assert!((record.glycemic_index - 20.0).abs() < f64::EPSILON);
        assert_eq!(record.processing_level, ProcessingLevel::Whole);
        assert_eq!(table.rows, 1);
    }

    #[test]
    fn test_empty_macronutrient_cell_is_absent() {
        let table = load("kale,15,4.4,,2.9,0.4,whole,67\n").unwrap();
        let record = &table.foods["kale"];
        assert_eq!(record.macronutrients_per_100g.fiber, None);
        assert_eq!(record.macronutrients_per_100g.carbohydrates, Some(4.4));
    }

    #[test]
    fn test_duplicates_keep_first_row() {
        let table = load("rice,73,28,0.4,2.7,0.3,processed,158\nRICE,90,30,0.4,2.7,0.3,processed,158\n")
            .unwrap();
        assert_eq!(table.foods.len(), 1);
        assert_eq!(table.duplicates, vec!["rice".to_owned()]);
        assert!((table.foods["rice"].glycemic_index - 73.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_malformed_rows() {
        let cases = [
            "rice,high,28,0.4,2.7,0.3,processed,158",
            "rice,120,28,0.4,2.7,0.3,processed,158",
            "rice,,28,0.4,2.7,0.3,processed,158",
            "rice,73,-1,0.4,2.7,0.3,processed,158",
            "rice,73,28,0.4,2.7,0.3,processed,0",
            "rice,73,28,0.4,2.7,0.3,fried,158",
            ",73,28,0.4,2.7,0.3,processed,158",
        ];
        for body in cases {
            let err = load(body).unwrap_err();
            assert!(
                matches!(err, DataLoadError::InvalidRow { line: 2, .. }),
                "{body}: {err}"
            );
        }
    }

    #[test]
    fn test_rejects_bad_headers() {
        let err = load_foods("name,glycemic_index\nrice,73\n".as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("carbohydrates")));

        let err = load_foods(format!("{HEADER},sodium\n").as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, DataLoadError::UnknownColumn(ref c) if c == "sodium"));

        let err = load_foods(format!("{HEADER},fat\n").as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, DataLoadError::DuplicateColumn(ref c) if c == "fat"));
    }

    #[test]
    fn test_rejects_empty_source() {
        let err = load("").unwrap_err();
        assert!(matches!(err, DataLoadError::EmptyDataSource(_)));

        let err = load_foods("".as_bytes(), "blank").unwrap_err();
        assert!(
            matches!(err, DataLoadError::EmptyDataSource(ref label) if label == "blank"),
            "{err}"
        );
    }

    #[test]
    fn test_validate_record_checks_every_invariant() {
        let good = FoodRecord {
            name: "rice".to_owned(),
            glycemic_index: 73.0,
            macronutrients_per_100g: MacronutrientProfile::complete(28.0, 0.4, 2.7, 0.3),
            processing_level: ProcessingLevel::Processed,
            base_serving_grams: 158.0,
        };
        assert_eq!(validate_record(&good), Ok(()));

        let mut blank = good.clone();
        blank.name = String::new();
        let mut high_gi = good.clone();
        high_gi.glycemic_index = 150.0;
        let mut nan_gi = good.clone();
        nan_gi.glycemic_index = f64::NAN;
        let mut negative_carbs = good.clone();
        negative_carbs.macronutrients_per_100g.carbohydrates = Some(-5.0);
        let mut infinite_fat = good.clone();
        infinite_fat.macronutrients_per_100g.fat = Some(f64::INFINITY);
        let mut zero_base = good.clone();
        zero_base.base_serving_grams = 0.0;

        for (record, field) in [
            (blank, "name"),
            (high_gi, "glycemic_index"),
            (nan_gi, "glycemic_index"),
            (negative_carbs, "carbohydrates"),
            (infinite_fat, "fat"),
            (zero_base, "serving_size_grams"),
        ] {
            let reason = validate_record(&record).unwrap_err();
            assert!(reason.starts_with(field), "{field}: {reason}");
        }
    }
}

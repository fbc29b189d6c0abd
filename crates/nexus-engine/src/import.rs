//! # Bulk Importer
//!
//! Parses delimited text (CSV, or semicolon-delimited regional
//! spreadsheet exports) into product records.
//!
//! ## Row Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  header line ──► delimiter detection (';' if present, else ',')        │
//! │                  then discarded - columns are positional               │
//! │                                                                         │
//! │  data line ──► code, name, price, cost, stock, min_stock               │
//! │       │                                                                 │
//! │       ├── < 6 columns ............... rejected, counted                │
//! │       ├── price/cost/stock unparsable  rejected, counted               │
//! │       ├── min_stock unparsable ....... defaults to 5, row accepted     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  code matches existing product? update in place : insert with new id  │
//! │                                                                         │
//! │  One save persists the whole batch. A bad row NEVER aborts the rest.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Price and cost accept a comma as the decimal separator (`"10,5"`);
//! values may be wrapped in single or double quotes.

use csv::ReaderBuilder;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use nexus_core::{Money, Product, DEFAULT_MIN_STOCK};
use nexus_store::Store;

use crate::error::{EngineError, EngineResult};

/// Aggregate outcome of a bulk import, surfaced to the UI as a single
/// summary message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Rows accepted and applied.
    pub imported_count: usize,
    /// Rows rejected by validation.
    pub error_count: usize,
}

/// Validated content of one accepted import row.
#[derive(Debug)]
struct ParsedRow {
    code: String,
    name: String,
    price_cents: i64,
    cost_cents: i64,
    stock: i64,
    min_stock: i64,
}

/// Imports product rows from delimited text.
#[derive(Debug, Clone)]
pub struct BulkImporter {
    store: Store,
}

impl BulkImporter {
    /// Creates a new BulkImporter.
    pub fn new(store: Store) -> Self {
        BulkImporter { store }
    }

    /// Parses `text` and applies every valid row to the product
    /// collection.
    ///
    /// ## Errors
    /// [`EngineError::EmptyImport`] when the input has fewer than two
    /// non-blank lines (nothing beyond a header). Individual bad rows are
    /// *not* errors - they are skipped and counted in the summary.
    pub async fn import_products_from_text(&self, text: &str) -> EngineResult<ImportSummary> {
        let mut non_blank = text.lines().map(str::trim).filter(|l| !l.is_empty());
        let header = non_blank.next().ok_or(EngineError::EmptyImport)?;
        if non_blank.next().is_none() {
            return Err(EngineError::EmptyImport);
        }

        // Regional spreadsheet exports delimit with ';' (and use ',' as
        // the decimal separator). Plain CSV otherwise.
        let delimiter = if header.contains(';') { b';' } else { b',' };

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true) // rows may be ragged; column count is checked per row
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut products = self.store.products().list().await?;
        let mut imported = 0usize;
        let mut errors = 0usize;

        for (index, result) in reader.records().enumerate() {
            let line = index + 2; // 1-based, after the header

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!(line, error = %e, "Unreadable import row");
                    errors += 1;
                    continue;
                }
            };

            match parse_row(&record) {
                Ok(row) => {
                    apply_row(&mut products, row);
                    imported += 1;
                }
                Err(e) => {
                    warn!(line, error = %e, "Rejected import row");
                    errors += 1;
                }
            }
        }

        if imported > 0 {
            self.store.products().replace_all(&products).await?;
        }

        info!(imported, errors, "Bulk import finished");

        Ok(ImportSummary {
            imported_count: imported,
            error_count: errors,
        })
    }
}

// =============================================================================
// Row Parsing
// =============================================================================

/// Strips surrounding single/double quotes left after CSV parsing.
fn unquote(field: &str) -> &str {
    field.trim().trim_matches(|c| c == '"' || c == '\'')
}

fn malformed(reason: impl Into<String>) -> EngineError {
    EngineError::MalformedImportRow {
        reason: reason.into(),
    }
}

/// Validates one record against the positional column layout.
fn parse_row(record: &csv::StringRecord) -> EngineResult<ParsedRow> {
    if record.len() < 6 {
        return Err(malformed(format!(
            "expected 6 columns, found {}",
            record.len()
        )));
    }

    let code = unquote(&record[0]).to_string();
    let name = unquote(&record[1]).to_string();

    let price = Money::parse_decimal(unquote(&record[2]))
        .map_err(|e| malformed(format!("price: {e}")))?;
    let cost = Money::parse_decimal(unquote(&record[3]))
        .map_err(|e| malformed(format!("cost: {e}")))?;
    let stock: i64 = unquote(&record[4])
        .parse()
        .map_err(|_| malformed(format!("stock: not a whole number: {:?}", &record[4])))?;

    // An unparsable reorder threshold doesn't reject the row
    let min_stock: i64 = unquote(&record[5]).parse().unwrap_or(DEFAULT_MIN_STOCK);

    Ok(ParsedRow {
        code,
        name,
        price_cents: price.cents(),
        cost_cents: cost.cents(),
        stock,
        min_stock,
    })
}

/// Applies an accepted row: update the product with a matching code, or
/// insert a new one with a fresh id.
fn apply_row(products: &mut Vec<Product>, row: ParsedRow) {
    match products.iter_mut().find(|p| p.code == row.code) {
        Some(existing) => {
            existing.name = row.name;
            existing.price_cents = row.price_cents;
            existing.cost_cents = row.cost_cents;
            existing.stock = row.stock;
            existing.min_stock = row.min_stock;
        }
        None => products.push(Product {
            id: Uuid::new_v4().to_string(),
            code: row.code,
            name: row.name,
            description: "Importado masivamente".to_string(),
            price_cents: row.price_cents,
            cost_cents: row.cost_cents,
            stock: row.stock,
            min_stock: row.min_stock,
            category_id: "general".to_string(),
            image_url: None,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

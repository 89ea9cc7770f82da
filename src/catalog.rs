// Catalog loading from per-category CSV files
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::model::{CatalogError, CatalogRow, CatalogSet, Category};

/// Reads catalogs from a data directory given at construction. One CSV file
/// per category, header-mapped; row order is preserved because score ties
/// resolve to the earliest row.
pub struct CatalogStore {
    data_dir: PathBuf,
}

impl CatalogStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn load(&self, category: Category) -> Result<Vec<CatalogRow>, CatalogError> {
        let path = self.data_dir.join(category.data_file());
        let path_str = path.display().to_string();
        let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path_str.clone(),
            source,
        })?;
        let rows = parse_catalog(&content, &path_str)?;
        info!("Loaded {} {} rows from {}", rows.len(), category.label(), path_str);
        Ok(rows)
    }

    pub fn load_all(&self) -> Result<CatalogSet, CatalogError> {
        Ok(CatalogSet {
            cpu: self.load(Category::Cpu)?,
            gpu: self.load(Category::Gpu)?,
            ram: self.load(Category::Ram)?,
            storage: self.load(Category::Storage)?,
            motherboard: self.load(Category::Motherboard)?,
            psu: self.load(Category::Psu)?,
        })
    }
}

/// Header-based CSV parsing. `name` is required; `chipset` and `price` are
/// picked up when present. Blank lines and rows without a name are skipped.
fn parse_catalog(content: &str, path: &str) -> Result<Vec<CatalogRow>, CatalogError> {
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());
    let header = lines.next().ok_or_else(|| CatalogError::Empty {
        path: path.to_string(),
    })?;

    let columns = split_record(header);
    let name_idx =
        find_column(&columns, "name").ok_or_else(|| CatalogError::MissingColumn {
            path: path.to_string(),
            column: "name".to_string(),
        })?;
    let chipset_idx = find_column(&columns, "chipset");
    let price_idx = find_column(&columns, "price");

    let mut rows = Vec::new();
    for line in lines {
        let fields = split_record(line);
        let name = match fields.get(name_idx) {
            Some(n) if !n.is_empty() => n.clone(),
            _ => continue,
        };
        rows.push(CatalogRow {
            name,
            chipset: chipset_idx
                .and_then(|i| fields.get(i))
                .filter(|c| !c.is_empty())
                .cloned(),
            price: price_idx
                .and_then(|i| fields.get(i))
                .filter(|p| !p.is_empty())
                .cloned(),
        });
    }
    Ok(rows)
}

fn find_column(columns: &[String], name: &str) -> Option<usize> {
    columns.iter().position(|c| c == name)
}

/// Splits one CSV record, honoring double quotes and doubled-quote escapes.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field = String::new();
            }
            _ => field.push(ch),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

// Tue Feb 10 2026 - Alex

use crate::mapping::parser::parse_records;
use crate::mapping::MappingError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const METHOD_PREFIX: &str = "func_";
pub const FIELD_PREFIX: &str = "field_";

pub struct SymbolTable {
    methods: HashMap<String, String>,
    fields: HashMap<String, String>,
}

impl SymbolTable {
    // Both sources must be present and readable; a half-built table is
    // treated as invalid as a whole.
    pub fn load(methods_path: &Path, fields_path: &Path) -> Result<Self, MappingError> {
        let methods_text = read_source(methods_path)?;
        let fields_text = read_source(fields_path)?;

        let table = Self::from_text(&methods_text, &fields_text);
        log::debug!(
            "Loaded {} method and {} field mappings",
            table.method_count(),
            table.field_count()
        );
        Ok(table)
    }

    pub fn from_text(methods_csv: &str, fields_csv: &str) -> Self {
        Self {
            methods: parse_records(methods_csv, METHOD_PREFIX).into_iter().collect(),
            fields: parse_records(fields_csv, FIELD_PREFIX).into_iter().collect(),
        }
    }

    pub fn translate_method(&self, token: &str) -> Option<&str> {
        self.methods.get(token).map(String::as_str)
    }

    pub fn translate_field(&self, token: &str) -> Option<&str> {
        self.fields.get(token).map(String::as_str)
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.fields.is_empty()
    }
}

fn read_source(path: &Path) -> Result<String, MappingError> {
    if !path.is_file() {
        return Err(MappingError::MissingSource(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| MappingError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

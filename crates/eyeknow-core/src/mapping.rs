//! The emitted class mapping artifact.
//!
//! [`ClassMapping`] is the index-to-label-and-identifier lookup handed to
//! downstream consumers. It is built from the rows the storage layer confirms
//! after a sync, so the artifact can never describe state the store did not
//! commit.
//!
//! Serialization is deterministic: entries are keyed by stringified index in
//! numeric order, rendered as pretty JSON with 2-space indentation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::class::{ClassId, ObjectRecord};
use crate::error::CoreError;

/// One entry of the mapping: the label and the identifier it was stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMappingEntry {
    /// Class label.
    pub name: String,
    /// Identifier of the row in the `objects` table.
    pub database_id: ClassId,
}

/// Lookup from zero-based dataset index to [`ClassMappingEntry`].
///
/// The `BTreeMap` keeps entries in numeric index order, which both the JSON
/// rendering and the `status` report rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMapping(pub BTreeMap<usize, ClassMappingEntry>);

impl ClassMapping {
    /// Builds the mapping from confirmed custom-partition rows.
    ///
    /// The index of each entry is derived from the row's identifier, so the
    /// mapping reflects exactly what the store holds. A built-in row is
    /// rejected; the sync never returns one.
    pub fn from_records(records: &[ObjectRecord]) -> Result<Self, CoreError> {
        let mut entries = BTreeMap::new();
        for record in records {
            let index = record
                .class_id
                .custom_index()
                .ok_or(CoreError::NotACustomClass {
                    id: record.class_id,
                })?;
            entries.insert(
                index,
                ClassMappingEntry {
                    name: record.name.clone(),
                    database_id: record.class_id,
                },
            );
        }
        Ok(ClassMapping(entries))
    }

    /// Number of entries in the mapping.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the mapping as pretty JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn custom_records(names: &[&str]) -> Vec<ObjectRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| ObjectRecord::custom(i, name))
            .collect()
    }

    #[test]
    fn mapping_matches_the_documented_example() {
        let mapping = ClassMapping::from_records(&custom_records(&["cat", "dog"])).unwrap();
        let json = mapping.to_json_pretty().unwrap();
        let expected = r#"{
  "0": {
    "name": "cat",
    "database_id": 1000
  },
  "1": {
    "name": "dog",
    "database_id": 1001
  }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn empty_records_render_an_empty_mapping() {
        let mapping = ClassMapping::from_records(&[]).unwrap();
        assert!(mapping.is_empty());
        assert_eq!(mapping.to_json_pretty().unwrap(), "{}");
    }

    #[test]
    fn builtin_rows_are_rejected() {
        let record = ObjectRecord {
            class_id: ClassId(3),
            name: "motorcycle".to_string(),
            description: "Motorcycle vehicle".to_string(),
        };
        let err = ClassMapping::from_records(&[record]).unwrap_err();
        assert!(matches!(err, CoreError::NotACustomClass { id } if id == ClassId(3)));
    }

    #[test]
    fn json_roundtrip() {
        let mapping = ClassMapping::from_records(&custom_records(&["key", "umbrella"])).unwrap();
        let json = mapping.to_json_pretty().unwrap();
        let back: ClassMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }

    proptest! {
        /// For any label sequence, entry `i` carries the label at position
        /// `i` and `database_id == 1000 + i`.
        #[test]
        fn database_id_is_base_plus_index(names in proptest::collection::vec(".{1,24}", 0..40)) {
            let records: Vec<ObjectRecord> = names
                .iter()
                .enumerate()
                .map(|(i, name)| ObjectRecord::custom(i, name))
                .collect();
            let mapping = ClassMapping::from_records(&records).unwrap();
            prop_assert_eq!(mapping.len(), names.len());
            for (i, name) in names.iter().enumerate() {
                let entry = &mapping.0[&i];
                prop_assert_eq!(&entry.name, name);
                prop_assert_eq!(entry.database_id, ClassId(1000 + i as i64));
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::{parse_identifier, Record};
use crate::error::Result;

/// Ordered in-memory collection of records. Insertion order is the only
/// ordering and identifiers are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    records: Vec<Record>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { records: vec![] }
    }

    /// Appends a record. The identifier must already be numeric; the shell
    /// validates it before calling this, so a bad one is returned as an error
    /// and nothing is appended.
    pub fn add(&mut self, id: &str, title: &str, creator: &str) -> Result<()> {
        let id = parse_identifier(id)?;
        self.push(Record::new(id, title, creator));
        Ok(())
    }

    pub fn push(&mut self, record: Record) {
        debug!(id = record.id, "adding record");
        self.records.push(record);
    }

    /// Removes the first record carrying `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.records.iter().position(|record| record.id == id) {
            Some(index) => {
                let removed = self.records.remove(index);
                debug!(id, position = index, title = %removed.title, "removed record");
                true
            }
            None => {
                debug!(id, "no record to remove");
                false
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Inventory {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Inventory, Record};
    use crate::error::Error;

    fn two_records() -> Inventory {
        Inventory::from(vec![Record::new(1, "A", "X"), Record::new(2, "B", "Y")])
    }

    #[test]
    fn add_then_list() {
        let mut inventory = Inventory::new();
        inventory.add("101", "Test", "Artist").unwrap();
        assert_eq!(inventory.records(), &[Record::new(101, "Test", "Artist")]);

        let mut inventory = two_records();
        inventory.add("101", "Test", "Artist").unwrap();
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.records()[0], Record::new(1, "A", "X"));
        assert_eq!(inventory.records()[1], Record::new(2, "B", "Y"));
        assert_eq!(inventory.records()[2], Record::new(101, "Test", "Artist"));
    }

    #[test]
    fn add_rejects_non_numeric_identifier() {
        let mut inventory = two_records();
        let result = inventory.add("twelve", "Test", "Artist");
        assert!(matches!(result, Err(Error::InvalidIdentifier { .. })));
        assert_eq!(inventory, two_records());
    }

    #[test]
    fn remove_present() {
        let mut inventory = two_records();
        assert!(inventory.remove(2));
        assert_eq!(inventory.records(), &[Record::new(1, "A", "X")]);
    }

    #[test]
    fn remove_absent() {
        let mut inventory = two_records();
        assert!(!inventory.remove(99));
        assert_eq!(inventory, two_records());
    }

    #[test]
    fn remove_from_empty() {
        let mut inventory = Inventory::new();
        assert!(!inventory.remove(1));
        assert!(inventory.is_empty());
    }

    #[test]
    fn duplicate_identifiers() {
        let mut inventory = Inventory::new();
        inventory.add("5", "First", "X").unwrap();
        inventory.add("5", "Second", "Y").unwrap();
        assert_eq!(inventory.len(), 2);

        assert!(inventory.remove(5));
        assert_eq!(inventory.records(), &[Record::new(5, "Second", "Y")]);
        assert!(inventory.remove(5));
        assert!(inventory.is_empty());
    }
}

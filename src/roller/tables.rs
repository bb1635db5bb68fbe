/*
 * Equigen - Trait Tables
 * Design notes:
 * 1. A trait entry is an explicit tagged variant: a phenotype with a
 *    genotype code, or a bare label whose genotype degenerates to the
 *    label itself (oddballs). Normalized here so selection logic never
 *    branches on entry shape.
 * 2. Tables are ordered and immutable once built.
 * 3. Pair construction goes through an IndexMap so duplicate phenotype
 *    labels get dict-literal semantics: last write wins, first insertion
 *    position kept. Label construction keeps duplicates as-is.
 */

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraitEntry {
    Coded { phenotype: String, genotype: String },
    Plain(String),
}

impl TraitEntry {
    pub fn phenotype(&self) -> &str {
        match self {
            TraitEntry::Coded { phenotype, .. } => phenotype,
            TraitEntry::Plain(label) => label,
        }
    }

    /// Genotype code; equals the phenotype for label-only entries.
    pub fn genotype(&self) -> &str {
        match self {
            TraitEntry::Coded { genotype, .. } => genotype,
            TraitEntry::Plain(label) => label,
        }
    }
}

/// Ordered, immutable table of trait entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitTable {
    entries: Vec<TraitEntry>,
}

impl TraitTable {
    /// Builds a table from (phenotype, genotype) pairs, preserving
    /// insertion order and collapsing duplicate phenotype labels to the
    /// last written genotype.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map: IndexMap<&str, &str> = IndexMap::new();
        for (phenotype, genotype) in pairs {
            map.insert(phenotype, genotype);
        }

        let entries = map
            .into_iter()
            .map(|(phenotype, genotype)| TraitEntry::Coded {
                phenotype: phenotype.to_string(),
                genotype: genotype.to_string(),
            })
            .collect();

        Self { entries }
    }

    /// Builds a table from bare labels; duplicates stay distinct entries.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries = labels
            .into_iter()
            .map(|label| TraitEntry::Plain(label.to_string()))
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[TraitEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_table_preserves_order() {
        let table = TraitTable::from_pairs([("Chestnut", "ee_"), ("Bay", "E_ A_"), ("Black", "E_ aa")]);

        let labels: Vec<&str> = table.entries().iter().map(|e| e.phenotype()).collect();
        assert_eq!(labels, vec!["Chestnut", "Bay", "Black"]);
    }

    #[test]
    fn test_duplicate_pair_label_last_write_wins() {
        let table = TraitTable::from_pairs([("A", "1"), ("B", "2"), ("A", "3")]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].phenotype(), "A");
        assert_eq!(table.entries()[0].genotype(), "3");
        assert_eq!(table.entries()[1].phenotype(), "B");
    }

    #[test]
    fn test_label_table_keeps_duplicates() {
        let table = TraitTable::from_labels(["Brindle", "Chimera", "Brindle"]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.entries()[2].phenotype(), "Brindle");
    }

    #[test]
    fn test_plain_entry_genotype_degenerates_to_label() {
        let entry = TraitEntry::Plain("Heterochromia".to_string());
        assert_eq!(entry.phenotype(), entry.genotype());
    }

    #[test]
    fn test_empty_table() {
        let table = TraitTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}

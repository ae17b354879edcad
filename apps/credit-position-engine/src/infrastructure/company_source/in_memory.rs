//! In-memory company source, including the built-in demo batch.

use rust_decimal_macros::dec;

use crate::application::ports::{CompanySourcePort, SourceError};
use crate::domain::credit_position::CompanyRecord;

/// In-memory implementation of `CompanySourcePort`.
///
/// Used for tests and for runs without an input file.
#[derive(Debug, Clone)]
pub struct InMemoryCompanySource {
    label: String,
    records: Vec<CompanyRecord>,
}

impl InMemoryCompanySource {
    /// Create a source over `records`.
    #[must_use]
    pub fn new(records: Vec<CompanyRecord>) -> Self {
        Self {
            label: "in-memory".to_string(),
            records,
        }
    }

    /// The ten-company demo batch (same content as `data/companies.yaml`).
    #[must_use]
    pub fn sample() -> Self {
        let records = vec![
            CompanyRecord::new("Nordhavn Steel AG", "Steel", dec!(41.8), dec!(680)),
            CompanyRecord::new("Solvik Energi", "Utilities", dec!(6.8), dec!(1050)),
            CompanyRecord::new("Calcara Cement", "Materials", dec!(55.2), dec!(410)),
            CompanyRecord::new("Aurelia Chemicals", "Chemicals", dec!(27.5), dec!(890)),
            CompanyRecord::new("Brightwave Telecom", "Telecommunications", dec!(3.1), dec!(1520)),
            CompanyRecord::new("Ostrava Logistics", "Transport", dec!(24.6), dec!(760)),
            CompanyRecord::new("Verdant Foods", "Consumer Staples", dec!(12.4), dec!(640)),
            CompanyRecord::new("Helix Pharma", "Health Care", dec!(4.9), dec!(980)),
            CompanyRecord::new("Kestrel Airways", "Transport", dec!(38.7), dec!(1210)),
            CompanyRecord::new("Luma Software", "Technology", dec!(1.2), dec!(430)),
        ];

        Self {
            label: "built-in sample".to_string(),
            records,
        }
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the source is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryCompanySource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CompanySourcePort for InMemoryCompanySource {
    fn load(&self) -> Result<Vec<CompanyRecord>, SourceError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} ({} companies)", self.label, self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_ten_unique_companies() {
        let source = InMemoryCompanySource::sample();
        assert_eq!(source.len(), 10);

        let records = source.load().unwrap();
        let mut names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
        assert_eq!(source.describe(), "built-in sample (10 companies)");
    }

    #[test]
    fn empty_source_loads_empty_batch() {
        let source = InMemoryCompanySource::default();
        assert!(source.is_empty());
        assert!(source.load().unwrap().is_empty());
        assert_eq!(source.describe(), "in-memory (0 companies)");
    }
}

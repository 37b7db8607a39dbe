//! Filter evaluation over stored records

use crate::filter::types::FilterSet;
use crate::strings::types::StringRecord;

/// Records that passed a filter set, plus the filters that were applied
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub data: Vec<StringRecord>,
    pub filters_applied: FilterSet,
}

impl FilterOutcome {
    pub fn count(&self) -> usize {
        self.data.len()
    }
}

/// Keep the records that satisfy every present filter.
///
/// Input order is preserved. Filter values are assumed already validated.
pub fn apply<I>(records: I, filters: &FilterSet) -> FilterOutcome
where
    I: IntoIterator<Item = StringRecord>,
{
    let predicates = filters.predicates();
    let data: Vec<StringRecord> = records
        .into_iter()
        .filter(|record| predicates.iter().all(|p| p.matches(record)))
        .collect();

    tracing::debug!(
        predicates = predicates.len(),
        matched = data.len(),
        "Applied filters"
    );

    FilterOutcome {
        data,
        filters_applied: filters.clone(),
    }
}

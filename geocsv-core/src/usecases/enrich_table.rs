use super::{
    enrich_record::{enrich_record, Outcome},
    prelude::*,
    AddressColumns,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub total: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub failed: usize,
}

impl EnrichmentSummary {
    fn count(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Resolved(_) => self.resolved += 1,
            Outcome::Unresolved => self.unresolved += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

/// Geocodes all records of the table one after another.
pub fn enrich_table(
    provider: &ProviderChoice,
    columns: &AddressColumns,
    table: &mut Table,
) -> EnrichmentSummary {
    let mut summary = EnrichmentSummary::default();
    for record in table.records_mut() {
        let outcome = enrich_record(provider, columns, record);
        summary.count(&outcome);
    }
    log::debug!("Enrichment summary: {:?}", summary);
    summary
}

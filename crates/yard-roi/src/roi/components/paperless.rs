use super::super::domain::PaperAssumptions;

pub fn pages_per_shipment(paper: &PaperAssumptions) -> f64 {
    paper.pages_per_bol.max(0.0) * paper.bols_per_shipment.max(0.0)
        + paper.other_pages_per_shipment.max(0.0)
}

/// Printing and storage avoided on outbound paperwork.
pub fn paperless_savings(paper: &PaperAssumptions, total_shipments_per_year: f64) -> f64 {
    let pages_per_year = pages_per_shipment(paper) * total_shipments_per_year * paper.outbound_share;
    let cost_per_page = paper.printing_cost_per_page.max(0.0) + paper.storage_cost_per_page.max(0.0);
    pages_per_year * cost_per_page * paper.phase1_saved_share
}

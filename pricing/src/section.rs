use metrics::counter;

use crate::catalog::Catalog;
use crate::client::CatalogClient;
use crate::render;

/// Handles to the two page targets the renderer may update. Either may
/// be absent; an absent handle is skipped, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingSection {
    /// Rendered card fragments, in display order.
    pub grid: Option<Vec<String>>,
    /// The explanatory note paragraph text.
    pub note: Option<String>,
}

impl PricingSection {
    /// A section with both targets present and empty.
    pub fn new() -> PricingSection {
        PricingSection {
            grid: Some(Vec::new()),
            note: Some(String::new()),
        }
    }

    /// Swap a validated catalog into the section. The grid is cleared
    /// and repopulated in one pass, preserving server order; the note is
    /// fully replaced. Absent targets stay untouched.
    pub fn apply(&mut self, catalog: &Catalog) {
        if let Some(grid) = &mut self.grid {
            grid.clear();
            grid.extend(catalog.plans.iter().map(render::pricing_card));
        }
        if let Some(note) = &mut self.note {
            *note = render::pricing_note(&catalog.conversion);
        }
    }
}

/// Fetch the catalog and render it into the section.
///
/// Does nothing when the grid target is absent. On any failure the
/// section keeps its previous contents and the error is only logged;
/// the page shows its prior state, never a partial render.
pub async fn load_pricing_plans(client: &CatalogClient, section: &mut PricingSection) {
    if section.grid.is_none() {
        return;
    }

    match client.fetch().await {
        Ok(catalog) => section.apply(&catalog),
        Err(err) => {
            counter!("pricing_catalog_fetch_failures_total").increment(1);
            tracing::error!("error loading pricing plans: {}", err);
        }
    }
}

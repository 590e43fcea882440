use confdash_model::{SessionRecord, SessionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product catalog the event plans lab coverage against.
///
/// Closed-world list: the set-difference report below only knows
/// about products named here, so new catalog entries must be added
/// per event.
pub const MASTER_PRODUCT_CATALOG: &[&str] = &[
    "Acrobat",
    "Analytics",
    "Campaign",
    "Commerce",
    "Customer Journey Analytics",
    "Experience Manager",
    "Experience Platform",
    "Firefly",
    "GenStudio",
    "Journey Optimizer",
    "Marketo Engage",
    "Real-Time CDP",
    "Target",
    "Workfront",
];

/// Labs covering one product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSummary {
    pub name: String,

    /// Codes of the labs listing this product, in input order
    pub lab_codes: Vec<String>,

    pub total_labs: usize,
}

/// Lab coverage per product, plus the catalog gap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRollup {
    /// Products with at least one lab, sorted by name
    pub products: Vec<ProductSummary>,

    /// Catalog products no lab covers, sorted
    pub products_without_labs: Vec<String>,
}

/// Fan Hands-on Lab sessions out into every product they list.
///
/// Only labs participate; a lab listing several products counts once
/// under each (many-to-many). Products in the master catalog that no
/// lab covers are reported separately by set-difference.
#[must_use]
pub fn product_rollup(sessions: &[SessionRecord]) -> ProductRollup {
    let mut by_product: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for session in sessions {
        if session.derived_type != SessionType::HandsOnLab {
            continue;
        }
        for product in session.products() {
            by_product
                .entry(product.to_string())
                .or_default()
                .push(session.code().to_string());
        }
    }

    let products_without_labs = MASTER_PRODUCT_CATALOG
        .iter()
        .filter(|p| !by_product.contains_key(**p))
        .map(|p| (*p).to_string())
        .collect();

    let products = by_product
        .into_iter()
        .map(|(name, lab_codes)| ProductSummary {
            total_labs: lab_codes.len(),
            name,
            lab_codes,
        })
        .collect();

    ProductRollup {
        products,
        products_without_labs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdash_model::columns;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap as Map;

    fn session(code: &str, cfp_type: &str, products: &str) -> SessionRecord {
        let mut fields = Map::new();
        fields.insert(columns::SESSION_CODE.to_string(), code.to_string());
        fields.insert(columns::CFP_SESSION_TYPE.to_string(), cfp_type.to_string());
        fields.insert(columns::PRODUCTS.to_string(), products.to_string());
        SessionRecord::from_fields(fields)
    }

    #[test]
    fn labs_fan_out_to_every_listed_product() {
        let sessions = vec![
            session("L045", "Hands-on Lab", "Commerce, Analytics"),
            session("L046", "Hands-on Lab", "Commerce"),
            // Sessions are not part of the rollup even with products
            session("S100", "Session", "Commerce"),
        ];
        let rollup = product_rollup(&sessions);

        assert_eq!(rollup.products.len(), 2);
        let analytics = &rollup.products[0];
        assert_eq!(analytics.name, "Analytics");
        assert_eq!(analytics.lab_codes, vec!["L045".to_string()]);
        let commerce = &rollup.products[1];
        assert_eq!(commerce.total_labs, 2);
        assert_eq!(
            commerce.lab_codes,
            vec!["L045".to_string(), "L046".to_string()]
        );
    }

    #[test]
    fn uncovered_catalog_products_reported_by_set_difference() {
        let sessions = vec![session("L045", "Hands-on Lab", "Commerce")];
        let rollup = product_rollup(&sessions);

        assert!(!rollup.products_without_labs.contains(&"Commerce".to_string()));
        assert!(rollup.products_without_labs.contains(&"Target".to_string()));
        assert_eq!(
            rollup.products_without_labs.len(),
            MASTER_PRODUCT_CATALOG.len() - 1
        );
    }

    #[test]
    fn blank_product_fields_are_ignored() {
        let sessions = vec![session("L045", "Hands-on Lab", " , ,")];
        let rollup = product_rollup(&sessions);
        assert!(rollup.products.is_empty());
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CatalogError, CatalogIssue};
use crate::model::{Hospital, Procedure};
use crate::source::{BundledSource, CatalogConfig, CatalogSource, RawCatalog};

/// Read-only, in-memory catalog of procedures and hospitals.
///
/// Records keep the order they were loaded in; lookups by code or id go
/// through side indexes so that order never changes. Records are handed out
/// as `Arc`s so search results can hold them without copying.
#[derive(Debug, Clone)]
pub struct Catalog {
    procedures: Vec<Arc<Procedure>>,
    hospitals: Vec<Arc<Hospital>>,
    procedure_index: HashMap<String, usize>,
    hospital_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records in load order.
    ///
    /// Procedure codes and hospital ids must be unique. Range and price
    /// consistency is not checked here; see [`Catalog::validate`].
    pub fn new(procedures: Vec<Procedure>, hospitals: Vec<Hospital>) -> Result<Self, CatalogError> {
        let mut procedure_index = HashMap::with_capacity(procedures.len());
        for (position, procedure) in procedures.iter().enumerate() {
            if procedure_index
                .insert(procedure.cpt_code.clone(), position)
                .is_some()
            {
                return Err(CatalogError::DuplicateProcedure(procedure.cpt_code.clone()));
            }
        }

        let mut hospital_index = HashMap::with_capacity(hospitals.len());
        for (position, hospital) in hospitals.iter().enumerate() {
            if hospital_index.insert(hospital.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateHospital(hospital.id.clone()));
            }
        }

        Ok(Self {
            procedures: procedures.into_iter().map(Arc::new).collect(),
            hospitals: hospitals.into_iter().map(Arc::new).collect(),
            procedure_index,
            hospital_index,
        })
    }

    /// Load the catalog described by `cfg`.
    pub fn load(cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        let source = cfg.source.build();
        Self::from_source(source.as_ref(), cfg.strict)
    }

    /// Load from an explicit source.
    ///
    /// With `strict`, any [`CatalogIssue`] rejects the catalog; otherwise the
    /// issues are logged and the data is kept as-is.
    pub fn from_source(source: &dyn CatalogSource, strict: bool) -> Result<Self, CatalogError> {
        let RawCatalog {
            procedures,
            hospitals,
        } = source.read()?;
        let catalog = Self::new(procedures, hospitals)?;

        let issues = catalog.validate();
        if !issues.is_empty() {
            if strict {
                return Err(CatalogError::Invalid(issues));
            }
            for issue in &issues {
                tracing::warn!(source = %source.describe(), %issue, "catalog consistency issue");
            }
        }

        tracing::info!(
            source = %source.describe(),
            procedures = catalog.procedure_count(),
            hospitals = catalog.hospital_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The sample catalog compiled into the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_source(&BundledSource, true)
    }

    /// Procedures in load order.
    pub fn procedures(&self) -> &[Arc<Procedure>] {
        &self.procedures
    }

    /// Hospitals in load order.
    pub fn hospitals(&self) -> &[Arc<Hospital>] {
        &self.hospitals
    }

    pub fn procedure_count(&self) -> usize {
        self.procedures.len()
    }

    pub fn hospital_count(&self) -> usize {
        self.hospitals.len()
    }

    pub fn procedure_by_code(&self, cpt_code: &str) -> Option<&Arc<Procedure>> {
        self.procedure_index
            .get(cpt_code)
            .and_then(|&position| self.procedures.get(position))
    }

    pub fn hospital_by_id(&self, id: &str) -> Option<&Arc<Hospital>> {
        self.hospital_index
            .get(id)
            .and_then(|&position| self.hospitals.get(position))
    }

    /// Type-ahead suggestions for a partially typed query.
    ///
    /// A procedure is suggested when its name or category contains the query
    /// (case-insensitive) or its code contains the query verbatim. Results
    /// follow catalog order and stop at `limit`. A blank query suggests nothing.
    pub fn suggest_procedures(&self, query: &str, limit: usize) -> Vec<Arc<Procedure>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let lowered = trimmed.to_lowercase();
        self.procedures
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&lowered)
                    || p.cpt_code.contains(trimmed)
                    || p.category.to_lowercase().contains(&lowered)
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Report data-consistency problems without modifying anything.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for hospital in &self.hospitals {
            if !(0.0..=5.0).contains(&hospital.rating) {
                issues.push(CatalogIssue::RatingOutOfRange {
                    hospital_id: hospital.id.clone(),
                    rating: hospital.rating,
                });
            }
            for (cpt_code, price) in &hospital.prices {
                if !self.procedure_index.contains_key(cpt_code) {
                    issues.push(CatalogIssue::UnknownProcedure {
                        hospital_id: hospital.id.clone(),
                        cpt_code: cpt_code.clone(),
                    });
                }
                for (field, value) in [
                    ("gross_charge", price.gross_charge),
                    ("cash_price", price.cash_price),
                ] {
                    if value < 0.0 {
                        issues.push(CatalogIssue::NegativePrice {
                            hospital_id: hospital.id.clone(),
                            cpt_code: cpt_code.clone(),
                            field,
                            value,
                        });
                    }
                }
                for (provider, plans) in &price.insurance_rates {
                    for (plan, range) in plans {
                        if !range.is_ordered() {
                            issues.push(CatalogIssue::InvertedPlanRange {
                                hospital_id: hospital.id.clone(),
                                cpt_code: cpt_code.clone(),
                                provider: provider.clone(),
                                plan: plan.clone(),
                                min: range.min,
                                max: range.max,
                            });
                        }
                    }
                }
            }
        }
        issues
    }
}

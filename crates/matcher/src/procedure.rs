use std::sync::Arc;

use catalog::Procedure;

/// Whether `procedure` answers `query`.
///
/// True when the code equals the query exactly, the name contains the query,
/// or the query contains the code; the last two ignore case. An empty query
/// is contained in every name, so callers must reject it first.
pub fn matches_query(procedure: &Procedure, query: &str) -> bool {
    if procedure.cpt_code == query {
        return true;
    }
    let query = query.to_lowercase();
    procedure.name.to_lowercase().contains(&query)
        || query.contains(&procedure.cpt_code.to_lowercase())
}

/// First procedure in catalog order that matches `query`.
///
/// This is first-match, not best-match: "MRI" resolves to whichever MRI
/// procedure was loaded first.
pub fn match_procedure<'a>(procedures: &'a [Arc<Procedure>], query: &str) -> Option<&'a Arc<Procedure>> {
    procedures.iter().find(|p| matches_query(p, query))
}

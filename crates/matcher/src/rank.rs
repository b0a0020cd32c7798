use std::cmp::Ordering;

use crate::types::{HospitalResult, SortKey};

/// Ascending display price.
pub fn by_price(a: &HospitalResult, b: &HospitalResult) -> Ordering {
    a.price_info.cmp_display_price(&b.price_info)
}

/// Nearest tier first.
pub fn by_distance(a: &HospitalResult, b: &HospitalResult) -> Ordering {
    a.distance.cmp(&b.distance)
}

/// Highest rating first.
pub fn by_rating(a: &HospitalResult, b: &HospitalResult) -> Ordering {
    b.hospital.rating.total_cmp(&a.hospital.rating)
}

pub fn comparator(key: SortKey) -> fn(&HospitalResult, &HospitalResult) -> Ordering {
    match key {
        SortKey::Price => by_price,
        SortKey::Distance => by_distance,
        SortKey::Rating => by_rating,
    }
}

/// Sort `results` in place. Stable: equal keys keep their relative order.
pub fn sort_results(results: &mut [HospitalResult], key: SortKey) {
    results.sort_by(comparator(key));
}

/// A newly ordered copy of `results`; the input keeps its order.
pub fn rank(results: &[HospitalResult], key: SortKey) -> Vec<HospitalResult> {
    let mut ranked = results.to_vec();
    sort_results(&mut ranked, key);
    ranked
}

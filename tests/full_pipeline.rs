use std::io::Write;

use carecost::{
    CareCostConfig, Catalog, DistanceClassifier, DistanceTier, InsuranceProvider,
    InsuranceSelection, PriceInfo, SearchError, SearchParams, SortKey, ZipPrefixClassifier,
    build_engine, build_engine_from_file, resolve_price,
};
use tempfile::{NamedTempFile, TempDir};

const AETNA: InsuranceSelection = InsuranceSelection::Provider(InsuranceProvider::Aetna);

fn bundled() -> Catalog {
    Catalog::bundled().expect("bundled catalog loads")
}

#[test]
fn scenario_a_cash_returns_cash_price() {
    let catalog = bundled();
    let hospital = catalog.hospital_by_id("midtown-medical").unwrap();
    let price = hospital.price_for("72148").unwrap();

    assert_eq!(
        resolve_price(price, InsuranceSelection::Cash, None),
        PriceInfo::Cash { value: 1500.0 }
    );
}

#[test]
fn scenario_b_provider_without_plan_aggregates() {
    let catalog = bundled();
    let price = catalog
        .hospital_by_id("midtown-medical")
        .and_then(|h| h.price_for("72148"))
        .unwrap();

    assert_eq!(
        resolve_price(price, AETNA, None),
        PriceInfo::InsuranceRange {
            min: 700.0,
            max: 1000.0
        }
    );
}

#[test]
fn scenario_c_named_plan_returns_plan_range() {
    let catalog = bundled();
    let price = catalog
        .hospital_by_id("midtown-medical")
        .and_then(|h| h.price_for("72148"))
        .unwrap();

    assert_eq!(
        resolve_price(price, AETNA, Some("PPO")),
        PriceInfo::PlanRange {
            min: 800.0,
            max: 1000.0,
            plan_name: "PPO".into()
        }
    );
}

#[test]
fn scenario_d_unknown_procedure_is_empty() -> Result<(), SearchError> {
    let engine = build_engine(&CareCostConfig::default()).unwrap();
    let results = engine.search(&SearchParams::new("zzz-no-such-code", "10001"))?;
    assert!(results.is_empty());
    Ok(())
}

#[test]
fn scenario_e_zip_prefix_tiers() {
    let classifier = ZipPrefixClassifier;
    assert_eq!(classifier.classify("10001", "10002"), DistanceTier::Close);
    assert_eq!(classifier.classify("10001", "10200"), DistanceTier::Medium);
    assert_eq!(classifier.classify("10001", "20000"), DistanceTier::Far);
}

#[test]
fn bundled_search_end_to_end() -> Result<(), SearchError> {
    let engine = build_engine(&CareCostConfig::default()).unwrap();
    let params = SearchParams::new("MRI lumbar", "10016").with_insurance(AETNA);

    let by_price = engine.search(&params)?;
    let ids: Vec<&str> = by_price.iter().map(|r| r.hospital.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "east-harlem-general",
            "brooklyn-heights-medical",
            "hudson-river-health",
            "midtown-medical",
            "bronx-community"
        ]
    );

    // bronx-community lists no aetna rates.
    let bronx = by_price.last().unwrap();
    assert_eq!(bronx.price_info, PriceInfo::Cash { value: 950.0 });
    assert_eq!(bronx.distance, DistanceTier::Medium);

    let by_distance = engine.search_sorted(&params, SortKey::Distance)?;
    let tiers: Vec<DistanceTier> = by_distance.iter().map(|r| r.distance).collect();
    assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(by_distance[0].hospital.id, "east-harlem-general");
    Ok(())
}

#[test]
fn procedure_without_hospitals_nearby_still_prices_everywhere_listed() -> Result<(), SearchError> {
    let engine = build_engine(&CareCostConfig::default()).unwrap();
    let results = engine.search(&SearchParams::new("knee", "90210"))?;

    let ids: Vec<&str> = results.iter().map(|r| r.hospital.id.as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&"bronx-community"));
    assert!(ids.contains(&"brooklyn-heights-medical"));
    assert!(results.iter().all(|r| r.distance == DistanceTier::Far));
    Ok(())
}

const PROCEDURES: &str = r#"[
  {"cpt_code": "72148", "name": "MRI Lumbar Spine", "category": "Imaging", "description": "Lower back MRI"},
  {"cpt_code": "93000", "name": "Electrocardiogram", "category": "Cardiology", "description": "ECG"}
]"#;

const HOSPITALS: &str = r#"[
  {
    "id": "riverside", "name": "Riverside Clinic", "address": "1 River Rd", "city": "Springfield",
    "state": "IL", "zip": "62701", "phone": "555-0101", "rating": 4.1, "dataFreshness": "2025-03-01",
    "coordinates": {"lat": 39.8, "lng": -89.6},
    "prices": {
      "72148": {"gross_charge": 3000, "cash_price": 1300,
                "insurance_rates": {"cigna": {"POS": {"min": 900, "max": 1100}}}}
    }
  },
  {
    "id": "lakeside", "name": "Lakeside Medical", "address": "9 Lake Ave", "city": "Chicago",
    "state": "IL", "zip": "60601", "phone": "555-0102", "rating": 4.7, "dataFreshness": "2025-02-01",
    "coordinates": {"lat": 41.9, "lng": -87.6},
    "prices": {
      "72148": {"gross_charge": 2800, "cash_price": 1250, "insurance_rates": {}},
      "93000": {"gross_charge": 300, "cash_price": 90, "insurance_rates": {}}
    }
  }
]"#;

#[test]
fn yaml_config_with_file_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let procedures_path = dir.path().join("procedures.json");
    let hospitals_path = dir.path().join("hospitals.json");
    std::fs::write(&procedures_path, PROCEDURES)?;
    std::fs::write(&hospitals_path, HOSPITALS)?;

    let yaml = format!(
        "version: \"1.0\"\nname: illinois\ncatalog:\n  procedures_path: {:?}\n  hospitals_path: {:?}\n  strict: true\nsearch:\n  default_sort: rating\n",
        procedures_path.display().to_string(),
        hospitals_path.display().to_string()
    );
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(yaml.as_bytes())?;

    let (config, engine) = build_engine_from_file(config_file.path())?;
    assert_eq!(config.name.as_deref(), Some("illinois"));
    assert_eq!(engine.catalog().procedure_count(), 2);

    let cigna = InsuranceSelection::Provider(InsuranceProvider::Cigna);
    let params = SearchParams::new("72148", "62702").with_insurance(cigna);
    let results = engine.search_sorted(&params, config.default_sort())?;

    let ids: Vec<&str> = results.iter().map(|r| r.hospital.id.as_str()).collect();
    assert_eq!(ids, ["lakeside", "riverside"]);
    assert_eq!(
        results[1].price_info,
        PriceInfo::InsuranceRange {
            min: 900.0,
            max: 1100.0
        }
    );
    assert_eq!(results[1].distance, DistanceTier::Close);
    assert_eq!(results[0].price_info, PriceInfo::Cash { value: 1250.0 });
    Ok(())
}

//! End-to-end tests for the discovery engine: document intake through
//! candidate finding, overlap scanning, verification and reporting.

use serde_json::json;

use fk_discovery_core::{
    CandidateKind, Collection, CollectionSet, FkCheck, OverlapFinder, SchemaSet,
    VerificationOutcome, VerificationStatus, find_candidates, merge_path_relationships,
    paths_from_document, render_candidate_report, render_verification_report,
    verify_foreign_keys, PathRelationships,
};

fn asset_document() -> serde_json::Value {
    json!({
        "components": {
            "schemas": {
                "Asset": {
                    "properties": {
                        "id": {"type": "integer"},
                        "Asset_Name": {"type": "string"},
                        "Building_Id": {"type": "integer"},
                        "Room_Id": {"type": "integer"}
                    }
                }
            }
        },
        "paths": {
            "/Asset/{collectionIndex}/End_User:get": {},
            "/Asset/{collectionIndex}/Attached_Documents:get": {},
            "/Asset:list": {}
        }
    })
}

fn buildings_document() -> serde_json::Value {
    json!({
        "components": {
            "schemas": {
                "Buildings": {"properties": {"id": {"type": "integer"}}},
                "Rooms": {
                    "properties": {
                        "id": {"type": "integer"},
                        "Building_id": {"type": "integer"}
                    }
                }
            }
        }
    })
}

#[test]
fn analyze_pipeline_combines_schemas_and_paths() {
    let mut schemas = SchemaSet::new();
    schemas.merge_document(&asset_document());
    schemas.merge_document(&buildings_document());

    let mut paths = PathRelationships::new();
    merge_path_relationships(&mut paths, paths_from_document(&asset_document()));
    merge_path_relationships(&mut paths, paths_from_document(&buildings_document()));

    let candidates = find_candidates(&schemas, &paths).unwrap();

    // Asset.Building_Id resolves to Buildings via the plural variant of
    // its suffix-stripped stem
    let building = candidates
        .iter()
        .find(|c| c.from == "Asset" && c.field.as_deref() == Some("Building_Id"))
        .unwrap();
    assert_eq!(building.to.as_deref(), Some("Buildings"));
    assert_eq!(building.evidence(), "field_name");

    // Asset.Room_Id resolves to Rooms via the plural variant
    let room = candidates
        .iter()
        .find(|c| c.from == "Asset" && c.field.as_deref() == Some("Room_Id"))
        .unwrap();
    assert_eq!(room.to.as_deref(), Some("Rooms"));

    // both path hints have no matching field: exactly one path-only
    // candidate each, no duplicates
    let path_only: Vec<_> = candidates
        .iter()
        .filter(|c| c.kind == CandidateKind::ApiPathOnly)
        .collect();
    assert_eq!(path_only.len(), 2);
    assert!(path_only.iter().all(|c| c.from == "Asset"));

    let report = render_candidate_report(&candidates);
    assert!(report.contains("Schema: Asset"));
    assert!(report.contains("Schema: Rooms"));
    assert!(report.contains("(detected from API paths only)"));
}

#[test]
fn overlap_pipeline_matches_across_value_types() {
    let mut collections = CollectionSet::new();
    collections.insert(
        "Asset",
        Collection::new(vec![
            json!({"id": 1, "Building_Id": 10, "Vendor_Id": "7"}),
            json!({"id": 2, "Building_Id": null, "Vendor_Id": "8"}),
            json!(42),
        ]),
    );
    collections.insert(
        "Buildings",
        Collection::new(vec![json!({"id": 10}), json!({"id": 11})]),
    );
    collections.insert(
        "Vendor",
        Collection::new(vec![json!({"id": 7}), json!({"id": 8})]),
    );

    let found = OverlapFinder::new().find(&collections).unwrap();

    let vendor = found
        .iter()
        .find(|c| c.field == "Vendor_Id" && c.to == "Vendor")
        .unwrap();
    assert_eq!(vendor.match_count, 2);
    assert!(vendor.name_match);

    let building = found
        .iter()
        .find(|c| c.field == "Building_Id" && c.to == "Buildings")
        .unwrap();
    assert_eq!(building.match_count, 1);
    assert_eq!(building.sample_matches, vec!["10".to_string()]);

    // ranked by descending match count
    assert!(found[0].match_count >= found[found.len() - 1].match_count);
}

#[test]
fn verify_pipeline_scores_and_reports() {
    let mut collections = CollectionSet::new();
    collections.insert(
        "Asset",
        Collection::new(vec![
            json!({"id": 1, "Building_Id": 10}),
            json!({"id": 2, "Building_Id": 99}),
            json!({"id": 3, "Building_Id": null}),
        ]),
    );
    collections.insert("Buildings", Collection::new(vec![json!({"id": 10})]));

    let checks = vec![
        FkCheck::new("Asset", "Building_Id", "Buildings"),
        FkCheck::new("Ghost", "x", "Buildings"),
    ];
    let reports = verify_foreign_keys(&collections, &checks).unwrap();

    let VerificationOutcome::Verified(result) = &reports[0].outcome else {
        panic!("expected a verified outcome");
    };
    assert_eq!(result.total_values, 2);
    assert_eq!(result.null_count, 1);
    assert_eq!(result.matched_count, 1);
    assert!((result.match_pct - 50.0).abs() < f64::EPSILON);
    assert_eq!(result.status, VerificationStatus::Partial);
    assert_eq!(result.orphan_samples, vec!["99".to_string()]);

    assert_eq!(reports[1].outcome, VerificationOutcome::NoSourceData);

    let rendered = render_verification_report(&reports);
    assert!(rendered.contains("Asset.Building_Id → Buildings"));
    assert!(rendered.contains("(50.0%)"));
    assert!(rendered.contains("Ghost.x → Buildings: No source data"));
}

#[test]
fn malformed_documents_contribute_nothing_but_run_proceeds() {
    let mut schemas = SchemaSet::new();
    schemas.merge_document(&json!({"unexpected": true}));
    schemas.merge_document(&json!([1, 2, 3]));
    schemas.merge_document(&buildings_document());

    assert_eq!(schemas.len(), 2);

    let candidates = find_candidates(&schemas, &PathRelationships::new()).unwrap();
    // Rooms.Building_id still resolves; Rooms.id and Buildings.id are
    // emitted unresolved rather than dropped
    let resolved = candidates
        .iter()
        .find(|c| c.field.as_deref() == Some("Building_id"))
        .unwrap();
    assert_eq!(resolved.to.as_deref(), Some("Buildings"));
    assert!(candidates.iter().any(|c| c.to.is_none()));
}

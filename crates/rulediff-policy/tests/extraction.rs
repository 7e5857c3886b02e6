use rulediff_canonical::{canonical_text, canonicalize};
use rulediff_policy::{
    extract_rules, rule_file_stem, sanitize_name, scrub_rule, skeleton, PolicyError, RuleKind,
    IDENTIFIER_SENTINEL,
};
use serde_json::{json, Value};

fn sample_config() -> Value {
    json!({
        "schemaVersion": "1.1",
        "onPremisesDirectoryPolicies": [
            {
                "friendlyName": "Forest-A",
                "uniqueIdentifier": "4f0bb9bc-9d06-45fd-9489-6e3b5ef2f47a",
                "customSynchronizationRules": [
                    {
                        "name": "In from AD - User",
                        "internalIdentifier": "8d2709d5-a336-4761-9afd-348397d30174",
                        "uniqueIdentifier": "c9b17b05-6a40-4755-9ed5-a3b6ee43a42b",
                        "precedence": 100
                    },
                    {
                        "name": "Custom proxy flow",
                        "internalIdentifier": "0b8e87e7-7d7b-47a6-b476-07e6a4b1d4e6",
                        "uniqueIdentifier": "2ff4b4ef-98ab-4b43-97b4-6495a0c764c8"
                    }
                ],
                "standardSynchronizationRules": [
                    {
                        "name": "Out to AD - Group",
                        "uniqueIdentifier": "a21f0269-7a3e-4ba6-8dd2-3c20bb1d0be3"
                    }
                ]
            }
        ],
        "cloudDirectoryPolicy": {
            "uniqueIdentifier": "7c8b2d4b-5c09-4b66-a3de-17a64bd67c29",
            "customSynchronizationRules": [],
            "standardSynchronizationRules": [
                {
                    "name": "Out to AAD - User",
                    "uniqueIdentifier": "90014e55-5241-45cd-9a39-a4ea9e1ffd53"
                }
            ]
        }
    })
}

#[test]
fn rules_visit_in_container_kind_name_order() {
    let rules = extract_rules(&sample_config()).unwrap();
    let visited: Vec<(&str, RuleKind, &str)> = rules
        .iter()
        .map(|r| (r.container_label.as_str(), r.kind, r.name.as_str()))
        .collect();
    assert_eq!(
        visited,
        vec![
            ("Forest-A", RuleKind::Custom, "Custom proxy flow"),
            ("Forest-A", RuleKind::Custom, "In from AD - User"),
            ("Forest-A", RuleKind::Standard, "Out to AD - Group"),
            ("AAD", RuleKind::Standard, "Out to AAD - User"),
        ]
    );
}

#[test]
fn extraction_is_lossless_per_container_and_kind() {
    let config = sample_config();
    let rules = extract_rules(&config).unwrap();

    let mut forest_custom: Vec<&str> = rules
        .iter()
        .filter(|r| r.container_label == "Forest-A" && r.kind == RuleKind::Custom)
        .map(|r| r.name.as_str())
        .collect();
    forest_custom.sort_unstable();
    assert_eq!(forest_custom, vec!["Custom proxy flow", "In from AD - User"]);
}

#[test]
fn walker_does_not_mutate_the_source_tree() {
    let config = sample_config();
    let before = config.clone();
    extract_rules(&config).unwrap();
    assert_eq!(config, before);
}

#[test]
fn missing_collection_is_rejected() {
    let mut config = sample_config();
    config["cloudDirectoryPolicy"]
        .as_object_mut()
        .unwrap()
        .remove("standardSynchronizationRules");
    assert!(matches!(
        extract_rules(&config),
        Err(PolicyError::MissingField { .. })
    ));
}

#[test]
fn missing_cloud_container_is_rejected() {
    let mut config = sample_config();
    config.as_object_mut().unwrap().remove("cloudDirectoryPolicy");
    assert!(matches!(
        extract_rules(&config),
        Err(PolicyError::MissingField { .. })
    ));
}

#[test]
fn rule_without_name_is_rejected() {
    let mut config = sample_config();
    config["onPremisesDirectoryPolicies"][0]["customSynchronizationRules"][0]
        .as_object_mut()
        .unwrap()
        .remove("name");
    assert!(matches!(
        extract_rules(&config),
        Err(PolicyError::UnnamedRule(_))
    ));
}

#[test]
fn container_without_friendly_name_is_rejected() {
    let mut config = sample_config();
    config["onPremisesDirectoryPolicies"][0]
        .as_object_mut()
        .unwrap()
        .remove("friendlyName");
    assert!(matches!(
        extract_rules(&config),
        Err(PolicyError::UnnamedContainer(_))
    ));
}

#[test]
fn non_object_root_is_rejected() {
    assert!(matches!(
        extract_rules(&json!([1, 2, 3])),
        Err(PolicyError::NotAnObject(_))
    ));
}

#[test]
fn scrub_custom_overwrites_both_identifiers() {
    let mut rule = json!({
        "name": "r",
        "internalIdentifier": "8d2709d5-a336-4761-9afd-348397d30174",
        "uniqueIdentifier": "c9b17b05-6a40-4755-9ed5-a3b6ee43a42b"
    });
    scrub_rule(&mut rule, RuleKind::Custom);
    assert_eq!(rule["internalIdentifier"], IDENTIFIER_SENTINEL);
    assert_eq!(rule["uniqueIdentifier"], IDENTIFIER_SENTINEL);
}

#[test]
fn scrub_standard_leaves_internal_identifier_alone() {
    let mut rule = json!({
        "name": "r",
        "internalIdentifier": "kept",
        "uniqueIdentifier": "scrubbed"
    });
    scrub_rule(&mut rule, RuleKind::Standard);
    assert_eq!(rule["internalIdentifier"], "kept");
    assert_eq!(rule["uniqueIdentifier"], IDENTIFIER_SENTINEL);
}

#[test]
fn scrub_never_adds_fields() {
    let mut rule = json!({"name": "r"});
    scrub_rule(&mut rule, RuleKind::Custom);
    assert_eq!(rule, json!({"name": "r"}));
}

#[test]
fn rules_differing_only_in_identifiers_scrub_to_identical_text() {
    let mut left = json!({
        "name": "r",
        "internalIdentifier": "aaaa",
        "uniqueIdentifier": "bbbb",
        "precedence": 5
    });
    let mut right = json!({
        "name": "r",
        "internalIdentifier": "cccc",
        "uniqueIdentifier": "dddd",
        "precedence": 5
    });
    scrub_rule(&mut left, RuleKind::Custom);
    scrub_rule(&mut right, RuleKind::Custom);
    assert_eq!(canonical_text(&left), canonical_text(&right));
}

#[test]
fn sanitize_removes_the_denylist_without_substitution() {
    assert_eq!(sanitize_name("A/B:C"), "ABC");
    assert_eq!(sanitize_name(r#"a\b/c*d:e?f<g>h|i"#), "abcdefghi");
    assert_eq!(sanitize_name("In from AD - User"), "In from AD - User");
    assert_eq!(sanitize_name("  spaced  "), "  spaced  ");
}

#[test]
fn composite_stem_joins_label_kind_and_name() {
    assert_eq!(
        rule_file_stem("Forest-A", RuleKind::Custom, "In from AD - User"),
        "Forest-A - CUSTOM - In from AD - User"
    );
    assert_eq!(
        rule_file_stem("AAD", RuleKind::Standard, "Out to AAD - User"),
        "AAD - DEFAULT - Out to AAD - User"
    );
}

#[test]
fn skeleton_nulls_collections_and_scrubs_container_identifiers() {
    let config = canonicalize(sample_config());
    let doc = skeleton(&config).unwrap();

    let forest = &doc["onPremisesDirectoryPolicies"][0];
    assert_eq!(forest["customSynchronizationRules"], Value::Null);
    assert_eq!(forest["standardSynchronizationRules"], Value::Null);
    assert_eq!(forest["uniqueIdentifier"], IDENTIFIER_SENTINEL);
    assert_eq!(forest["friendlyName"], "Forest-A");

    let cloud = &doc["cloudDirectoryPolicy"];
    assert_eq!(cloud["customSynchronizationRules"], Value::Null);
    assert_eq!(cloud["standardSynchronizationRules"], Value::Null);
    assert_eq!(cloud["uniqueIdentifier"], IDENTIFIER_SENTINEL);

    assert_eq!(doc["schemaVersion"], "1.1");
}

#[test]
fn skeleton_is_idempotent() {
    let config = canonicalize(sample_config());
    let once = skeleton(&config).unwrap();
    let twice = skeleton(&once).unwrap();
    assert_eq!(canonical_text(&once), canonical_text(&twice));
}

#[test]
fn skeleton_preserves_everything_outside_the_rule_collections() {
    let config = canonicalize(sample_config());
    let doc = skeleton(&config).unwrap();

    // Strip the rule collections and container identifiers from both sides;
    // what remains must be canonically equal.
    fn strip_container(container: &mut Value) {
        let object = container.as_object_mut().unwrap();
        object.remove("customSynchronizationRules");
        object.remove("standardSynchronizationRules");
        object.remove("uniqueIdentifier");
    }
    let strip = |mut value: Value| -> Value {
        for container in value["onPremisesDirectoryPolicies"].as_array_mut().unwrap() {
            strip_container(container);
        }
        strip_container(&mut value["cloudDirectoryPolicy"]);
        value
    };
    assert_eq!(
        canonical_text(&strip(config)),
        canonical_text(&strip(doc))
    );
}

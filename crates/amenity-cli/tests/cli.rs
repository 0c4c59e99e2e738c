use std::fs;
use std::path::PathBuf;

use amenity_cli::input::{PolicyOverrides, read_limited, resolve_policy};
use amenity_cli::report::{
    NormalizedLabel, format_suggestion, render_json, render_normalized, render_tables,
    repeated_spellings, variations,
};
use amenity_core::analyze_amenities;
use amenity_core::sample::{SAMPLE_AMBER, SAMPLE_PMG};
use amenity_model::{Group, Suggestion};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "amenity-qa-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn read_limited_accepts_input_at_limit() {
    let text = read_limited("Gym\nPool".as_bytes(), 8).expect("read within limit");
    assert_eq!(text, "Gym\nPool");
}

#[test]
fn read_limited_rejects_oversized_input() {
    let error = read_limited("Gym\nPool".as_bytes(), 7).unwrap_err();
    assert!(error.to_string().contains("7 byte limit"));
}

#[test]
fn read_limited_rejects_invalid_utf8() {
    let error = read_limited(&[0x47, 0xff, 0x6d][..], 1024).unwrap_err();
    assert!(error.to_string().contains("UTF-8"));
}

#[test]
fn policy_overrides_apply_over_defaults() {
    let policy = resolve_policy(
        None,
        PolicyOverrides {
            threshold: Some(0.8),
            stopwords: vec!["of".to_string()],
            fold_plurals: true,
        },
    )
    .expect("valid policy");
    assert_eq!(policy.threshold, 0.8);
    assert_eq!(policy.stopwords, vec!["of"]);
    assert!(policy.fold_plurals);
}

#[test]
fn policy_file_is_loaded_then_overridden() {
    let dir = unique_temp_dir("policy");
    let path = dir.join("policy.json");
    fs::write(&path, r#"{"threshold": 0.7, "stopwords": ["the"]}"#).unwrap();

    let policy = resolve_policy(
        Some(&path),
        PolicyOverrides {
            threshold: Some(0.75),
            ..PolicyOverrides::default()
        },
    )
    .expect("valid policy");
    assert_eq!(policy.threshold, 0.75);
    assert_eq!(policy.stopwords, vec!["the"]);
    assert!(!policy.aliases.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_threshold_is_rejected() {
    let error = resolve_policy(
        None,
        PolicyOverrides {
            threshold: Some(1.2),
            ..PolicyOverrides::default()
        },
    )
    .unwrap_err();
    assert!(format!("{error:#}").contains("threshold must be a number between 0 and 1"));
}

#[test]
fn malformed_policy_file_is_reported() {
    let dir = unique_temp_dir("bad-policy");
    let path = dir.join("policy.json");
    fs::write(&path, "{ threshold: }").unwrap();

    let error = resolve_policy(Some(&path), PolicyOverrides::default()).unwrap_err();
    assert!(error.to_string().starts_with("parse policy"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn suggestion_hint_text() {
    let suggestion = Suggestion {
        normalized: "pool swiming".to_string(),
        variants: vec!["Swiming Pool".to_string()],
        similarity: 12.0 / 13.0,
    };
    assert_eq!(
        format_suggestion(Some(&suggestion)).as_deref(),
        Some("Closest match: \"Swiming Pool\" (92% similarity)")
    );
    assert_eq!(format_suggestion(None), None);
}

#[test]
fn group_spelling_helpers() {
    let mut group = Group::new("package room", "Package Room");
    assert_eq!(variations(&group), None);
    group.push_variant("Package room");
    group.push_variant("PACKAGE ROOM");
    assert_eq!(
        variations(&group).as_deref(),
        Some("Package Room, Package room, PACKAGE ROOM")
    );
    assert_eq!(repeated_spellings(&group), "Package room, PACKAGE ROOM");
}

#[test]
fn table_report_lists_every_section() {
    let report = render_tables(&analyze_amenities(SAMPLE_PMG, SAMPLE_AMBER));
    assert!(report.contains("Coverage snapshot:"));
    assert!(report.contains("50%"));
    assert!(report.contains("Missing from Amber (8 issues):"));
    assert!(report.contains("Unexpected on Amber (7 issues):"));
    assert!(report.contains("Duplicate entries (1 issues):"));
    assert!(report.contains("Closest match: \"Roof Top Garden\" (93% similarity)"));
    assert!(report.contains("Spelling & naming suggestions (by similarity):"));
}

#[test]
fn table_report_for_matching_catalogs() {
    let report = render_tables(&analyze_amenities("Gym\nPool", "pool\ngym"));
    assert!(report.contains("All PMG amenities are represented on Amber."));
    assert!(report.contains("Amber amenities all map back to PMG."));
    assert!(report.contains("No duplicates were detected."));
    assert!(report.contains("No near matches found."));
}

#[test]
fn normalized_table_marks_empty_keys() {
    let rendered = render_normalized(&[
        NormalizedLabel {
            label: "24/7 Security".to_string(),
            normalized: "24x7 security".to_string(),
        },
        NormalizedLabel {
            label: "--".to_string(),
            normalized: String::new(),
        },
    ]);
    assert!(rendered.contains("24x7 security"));
    assert!(rendered.contains("(empty)"));
}

#[test]
fn json_report_shape() {
    let json = render_json(&analyze_amenities("Gym\nSwimming Pool", "Gym\nSwiming Pool"))
        .expect("render json");
    insta::assert_snapshot!(json, @r#"
    {
      "totals": {
        "pmgTotal": 2,
        "amberTotal": 2,
        "pmgUnique": 2,
        "amberUnique": 2,
        "overlap": 1,
        "coverage": 0.5
      },
      "missingFromAmber": [
        {
          "normalized": "pool swimming",
          "variants": [
            "Swimming Pool"
          ],
          "count": 1,
          "suggestion": {
            "normalized": "pool swiming",
            "variants": [
              "Swiming Pool"
            ],
            "similarity": 0.9230769230769231
          }
        }
      ],
      "unexpectedInAmber": [
        {
          "normalized": "pool swiming",
          "variants": [
            "Swiming Pool"
          ],
          "count": 1,
          "suggestion": {
            "normalized": "pool swimming",
            "variants": [
              "Swimming Pool"
            ],
            "similarity": 0.9230769230769231
          }
        }
      ],
      "duplicatesInPmg": [],
      "duplicatesInAmber": [],
      "potentialTypos": [
        {
          "source": "Swimming Pool",
          "target": "Swiming Pool",
          "direction": "pmg→amber",
          "similarity": 0.9230769230769231,
          "distance": 1
        }
      ]
    }
    "#);
}

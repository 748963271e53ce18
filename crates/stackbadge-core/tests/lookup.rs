//! Integration tests exercising the public lookup surface and the JSON
//! record shape the web renderer consumes.

use serde_json::json;
use stackbadge_core::{badges, fallback, get, lookup, FALLBACK_KEY};

#[test]
fn test_known_keys_resolve_to_their_literal_data() {
    assert_eq!(
        serde_json::to_value(lookup("python")).unwrap(),
        json!({"name": "Python", "iconName": "python"})
    );
    assert_eq!(
        serde_json::to_value(lookup("mysql")).unwrap(),
        json!({"name": "MySQL", "iconName": "mysql", "className": "bg-[#f6ece1]!"})
    );
}

#[test]
fn test_class_name_field_is_absent_not_null() {
    let json = serde_json::to_value(lookup("python")).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("className"));
    assert_eq!(object.len(), 2);
}

#[test]
fn test_misses_substitute_the_fallback_badge() {
    for key in ["unknown-xyz", "", "HTML", "PYTHON", "c++", " python"] {
        let badge = lookup(key);
        assert_eq!(badge, fallback(), "key {key:?} should fall back");
        assert_eq!(badge.name, "HTML 5");
        assert_eq!(badge.icon_name, "html");
    }
}

#[test]
fn test_fallback_is_itself_a_registered_badge() {
    assert_eq!(get(FALLBACK_KEY), Some(fallback()));
}

#[test]
fn test_every_badge_serializes_to_a_complete_record() {
    for (key, badge) in badges() {
        let json = serde_json::to_value(badge).unwrap();
        assert!(
            json["name"].as_str().is_some_and(|name| !name.is_empty()),
            "badge {key:?} has no display name"
        );
        assert!(
            json["iconName"].as_str().is_some_and(|icon| !icon.is_empty()),
            "badge {key:?} has no icon identifier"
        );
    }
}

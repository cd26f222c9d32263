use super::*;

#[test]
fn sofa_defaults_match_library() {
    let spec = FurnitureKind::Sofa.spec();
    assert_eq!(spec.label, "Sofa");
    assert!((spec.w - 2.0).abs() < f64::EPSILON);
    assert!((spec.h - 0.9).abs() < f64::EPSILON);
    assert_eq!(spec.color, "#8B7355");
}

#[test]
fn every_kind_has_positive_footprint() {
    for kind in FurnitureKind::ALL {
        let spec = kind.spec();
        assert!(spec.w > 0.0, "{kind:?} width");
        assert!(spec.h > 0.0, "{kind:?} depth");
        assert!(spec.height3d > 0.0, "{kind:?} height3d");
        assert!(spec.color.starts_with('#'), "{kind:?} color");
        assert!(!spec.label.is_empty(), "{kind:?} label");
    }
}

#[test]
fn all_excludes_generic_fallback() {
    assert!(!FurnitureKind::ALL.contains(&FurnitureKind::Generic));
}

#[test]
fn kinds_serialize_as_catalog_keys() {
    assert_eq!(serde_json::to_string(&FurnitureKind::DiningTable).unwrap(), "\"dining_table\"");
    assert_eq!(serde_json::to_string(&FurnitureKind::TvUnit).unwrap(), "\"tv_unit\"");
    assert_eq!(serde_json::to_string(&FurnitureKind::Sofa1).unwrap(), "\"sofa1\"");
    assert_eq!(serde_json::to_string(&FurnitureKind::Wardrobe4Door).unwrap(), "\"wardrobe_4door\"");
}

#[test]
fn every_kind_round_trips_through_its_key() {
    for kind in FurnitureKind::ALL {
        let key = serde_json::to_string(&kind).unwrap();
        let back: FurnitureKind = serde_json::from_str(&key).unwrap();
        assert_eq!(back, kind, "key {key}");
    }
}

#[test]
fn unknown_key_falls_back_to_generic() {
    let kind: FurnitureKind = serde_json::from_str("\"hot_tub\"").unwrap();
    assert_eq!(kind, FurnitureKind::Generic);
}

#[test]
fn outline_dispatch_per_kind() {
    assert_eq!(FurnitureKind::DiningTable.outline(), Outline::Ellipse);
    assert_eq!(FurnitureKind::SideTable.outline(), Outline::Circle);
    assert_eq!(FurnitureKind::Sofa.outline(), Outline::RoundedRect(5.0));
    assert_eq!(FurnitureKind::CoffeeTable.outline(), Outline::RoundedRect(7.0));
}

#[test]
fn label_shorthand_reads_catalog_label() {
    assert_eq!(FurnitureKind::Bed.label(), "Standard Bed");
    assert_eq!(FurnitureKind::Generic.label(), "Item");
}

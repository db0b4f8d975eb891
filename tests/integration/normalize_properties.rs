//! Property-based tests: normalizers accept any JSON without panicking.

use folio::cms::payload::{
    Connection, GlobalSettings, RawContact, RawPhotograph, RawPhotographer,
};
use folio::cms::queries::decode;
use folio::normalize::{
    contact_data_array, featured_works, menu_photographs, photographer_by_slug,
    photographs_by_photographer, work_data_array,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z_-]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(
                (
                    prop_oneof![
                        Just("edges".to_string()),
                        Just("node".to_string()),
                        Just("menu".to_string()),
                        Just("slug".to_string()),
                        Just("children".to_string()),
                        Just("photographs".to_string()),
                        Just("featured_works".to_string()),
                        Just("work".to_string()),
                        Just("photographer".to_string()),
                        Just("photographer_slug".to_string()),
                        Just("contact_info".to_string()),
                        Just("country_es".to_string()),
                        "[a-z]{1,6}",
                    ],
                    inner,
                ),
                0..6,
            )
            .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn body(operation: &str, result: Value) -> Value {
    let mut data = serde_json::Map::new();
    data.insert(operation.to_string(), result);
    json!({ "data": data })
}

proptest! {
    #[test]
    fn test_normalizers_never_panic(value in arb_json(), slug in "[a-z-]{0,8}") {
        let settings: GlobalSettings = decode(&body("global_settings", value.clone()), "global_settings");
        let works = work_data_array(settings.featured_works.as_deref());
        let featured = featured_works(Some(&works));
        prop_assert_eq!(featured.len(), works.len());
        let _ = menu_photographs(&settings, &slug);

        let contacts: Connection<RawContact> = decode(&body("contactConnection", value.clone()), "contactConnection");
        let records = contact_data_array(Some(&contacts));
        prop_assert_eq!(records.len(), contacts.len());

        let photographers: Connection<RawPhotographer> = decode(&body("photographersConnection", value.clone()), "photographersConnection");
        if let Some(found) = photographer_by_slug(Some(&photographers), &slug) {
            prop_assert_eq!(found.photographer_slug, slug.clone());
        }

        let photographs: Connection<RawPhotograph> = decode(&body("photographsConnection", value), "photographsConnection");
        for photo in photographs_by_photographer(Some(&photographs), &slug) {
            let candidate = photo
                .photographer
                .and_then(|p| p.photographer_slug)
                .unwrap_or_default();
            prop_assert!(candidate.contains(slug.as_str()));
        }
    }

    #[test]
    fn test_featured_filter_preserves_order(flags in prop::collection::vec(any::<bool>(), 0..20)) {
        let works: Vec<_> = flags
            .iter()
            .enumerate()
            .map(|(i, flag)| folio::normalize::WorkRecord {
                id: i.to_string(),
                featured_work: *flag,
                ..Default::default()
            })
            .collect();
        let expected: Vec<String> = flags
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag)
            .map(|(i, _)| i.to_string())
            .collect();
        let actual: Vec<String> = featured_works(Some(&works)).into_iter().map(|w| w.id).collect();
        prop_assert_eq!(actual, expected);
    }
}

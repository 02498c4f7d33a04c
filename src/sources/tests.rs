//! Tests for the item normalizer.

use serde_json::{Value, json};

use super::normalize::{
    normalize_agency, normalize_agency_ref, normalize_category, normalize_category_ref,
    normalize_news_item,
};
use crate::state::types::{DEFAULT_AGENCY_NAME, DEFAULT_CATEGORY_NAME, PLACEHOLDER_LINK};

#[test]
/// What: A bare category string becomes a name-only reference.
///
/// Inputs:
/// - Record with `category: "ورزشی"` and no other category keys.
///
/// Output:
/// - `{ id: None, name: "ورزشی" }`.
fn normalize_category_string_keeps_name() {
    let item = normalize_news_item(&json!({"id": 9, "category": "ورزشی"}));
    assert_eq!(item.category.id, None);
    assert_eq!(item.category.name, "ورزشی");
}

#[test]
/// What: Aliases resolve first-present-wins and `null` counts as absent.
///
/// Inputs:
/// - Record using `_id`, `headline`, `summary`, `thumbnail`, `url`, `published_at`
///   with `title`, `image_url` explicitly `null`.
///
/// Output:
/// - Every field taken from the fallback alias.
fn normalize_aliases_and_nulls() {
    let raw = json!({
        "_id": "abc",
        "title": null,
        "headline": "تیتر",
        "summary": "خلاصه",
        "image_url": null,
        "thumbnail": "https://img/t.jpg",
        "url": "https://news/1",
        "published_at": "2023-11-14T22:13:20Z",
        "source": {"id": "4", "title": "ایرنا", "logo": "https://img/irna.png"},
        "category_id": 7
    });
    let item = normalize_news_item(&raw);
    assert_eq!(item.id, "abc");
    assert_eq!(item.title, "تیتر");
    assert_eq!(item.content, "خلاصه");
    assert_eq!(item.image_url.as_deref(), Some("https://img/t.jpg"));
    assert_eq!(item.link, "https://news/1");
    assert_eq!(item.pub_date, 1_700_000_000);
    assert_eq!(item.agency.id, Some(4));
    assert_eq!(item.agency.name, "ایرنا");
    assert_eq!(item.agency.image_url.as_deref(), Some("https://img/irna.png"));
    assert_eq!(item.category.id, Some(7));
    assert_eq!(item.category.name, DEFAULT_CATEGORY_NAME);
}

#[test]
/// What: Numeric ids are stringified; the link stands in when no id exists.
fn normalize_id_fallbacks() {
    assert_eq!(normalize_news_item(&json!({"id": 42})).id, "42");
    assert_eq!(
        normalize_news_item(&json!({"link": "https://n/2", "title": "t"})).id,
        "https://n/2"
    );
    let empty_id = normalize_news_item(&json!({"id": "", "guid": "g-1"}));
    assert_eq!(empty_id.id, "g-1");
}

#[test]
/// What: Records without any identifier get a stable synthetic id.
///
/// Inputs:
/// - The same id-less record normalized twice, and a record differing in title.
///
/// Output:
/// - Equal ids for equal input, different ids for different input.
fn normalize_synthetic_id_is_deterministic() {
    let raw = json!({"title": "بدون شناسه", "pubDate": 1_700_000_000});
    let a = normalize_news_item(&raw);
    let b = normalize_news_item(&raw);
    assert!(a.id.starts_with("syn-"));
    assert_eq!(a.id, b.id);
    let other = normalize_news_item(&json!({"title": "دیگر", "pubDate": 1_700_000_000}));
    assert_ne!(a.id, other.id);
}

#[test]
/// What: A record with nothing to hash gets a random id that differs per call.
fn normalize_empty_record_gets_random_id() {
    let a = normalize_news_item(&json!({}));
    let b = normalize_news_item(&json!({}));
    assert!(a.id.starts_with("rnd-"));
    assert_eq!(a.id.len(), "rnd-".len() + 16);
    assert_ne!(a.id, b.id);
}

#[test]
/// What: Normalization is total over malformed and non-object input.
///
/// Inputs:
/// - Strings, numbers, arrays, nested garbage, and wrongly typed fields.
///
/// Output:
/// - No panic; every field populated with defaults where needed.
fn normalize_is_total_over_malformed_input() {
    let inputs: Vec<Value> = vec![
        Value::Null,
        json!("just a string"),
        json!(12),
        json!([1, 2, 3]),
        json!({}),
        json!({"title": {"nested": true}, "content": [1], "link": 5, "pubDate": {"x": 1}}),
        json!({"category": [], "agency": 3, "image": ""}),
        json!({"category": {"title": 5}, "agency": {"name": null}}),
    ];
    for raw in &inputs {
        let item = normalize_news_item(raw);
        assert!(!item.id.is_empty(), "id missing for {raw}");
        assert!(!item.category.name.is_empty());
        assert!(!item.agency.name.is_empty());
        assert!(item.pub_date > 0);
    }
    let bare = normalize_news_item(&json!("just a string"));
    assert_eq!(bare.title, "");
    assert_eq!(bare.link, PLACEHOLDER_LINK);
    assert_eq!(bare.category.name, DEFAULT_CATEGORY_NAME);
    assert_eq!(bare.agency.name, DEFAULT_AGENCY_NAME);
    assert!(bare.image_url.is_none());
    let odd = normalize_news_item(&inputs[6]);
    assert!(odd.image_url.is_none());
    assert_eq!(odd.agency.name, DEFAULT_AGENCY_NAME);
}

#[test]
/// What: Category and agency references follow the runtime-shape rules.
fn normalize_refs_by_shape() {
    let obj = normalize_category_ref(Some(&json!({"category_id": 3, "title": "اقتصادی"})));
    assert_eq!((obj.id, obj.name.as_str()), (Some(3), "اقتصادی"));
    let num = normalize_category_ref(Some(&json!(5)));
    assert_eq!((num.id, num.name.as_str()), (Some(5), DEFAULT_CATEGORY_NAME));
    let blank = normalize_category_ref(Some(&json!("   ")));
    assert_eq!(blank.name, DEFAULT_CATEGORY_NAME);
    assert_eq!(normalize_category_ref(None).name, DEFAULT_CATEGORY_NAME);

    let agency = normalize_agency_ref(Some(&json!({"id": 1, "name": "ایسنا", "url": "https://isna.ir"})));
    assert_eq!(agency.website.as_deref(), Some("https://isna.ir"));
    let named = normalize_agency_ref(Some(&json!("مهر")));
    assert_eq!((named.id, named.name.as_str()), (None, "مهر"));
    assert_eq!(normalize_agency_ref(Some(&json!(9))).name, DEFAULT_AGENCY_NAME);
}

#[test]
/// What: Lookup records require an id and a name.
fn normalize_lookup_records() {
    let c = normalize_category(&json!({"id": "2", "name": "سیاسی"})).expect("category");
    assert_eq!((c.id, c.name.as_str()), (2, "سیاسی"));
    assert!(normalize_category(&json!({"name": "بدون شناسه"})).is_none());
    assert!(normalize_category(&json!({"id": 3})).is_none());

    let a = normalize_agency(&json!({"id": 8, "name": "تسنیم", "image_url": "https://l/t.png"}))
        .expect("agency");
    assert_eq!(a.image_url.as_deref(), Some("https://l/t.png"));
    assert!(normalize_agency(&json!("تسنیم")).is_none());
}

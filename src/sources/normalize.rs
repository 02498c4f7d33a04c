//! Map raw upstream records to the canonical [`NewsItem`], [`Category`], and
//! [`Agency`] models.
//!
//! Normalization is total: missing or oddly-typed fields fall back to defaults
//! instead of failing, so a malformed record still renders.

use rand::RngExt;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::state::types::{
    Agency, AgencyRef, Category, CategoryRef, DEFAULT_AGENCY_NAME, DEFAULT_CATEGORY_NAME,
    NewsItem, PLACEHOLDER_LINK,
};
use crate::util::{as_id, first_present, id_of, ss_non_empty};

use super::timestamp::normalize_timestamp;

/// Keys that may carry a stable identifier, in priority order.
const ID_KEYS: [&str; 5] = ["id", "_id", "uuid", "slug", "guid"];
/// Keys that may carry the headline.
const TITLE_KEYS: [&str; 3] = ["title", "name", "headline"];
/// Keys that may carry the body text.
const CONTENT_KEYS: [&str; 3] = ["content", "summary", "description"];
/// Keys that may carry the lead image.
const IMAGE_KEYS: [&str; 5] = ["image_url", "imageUrl", "image", "thumbnail", "cover"];
/// Keys that may carry the article link.
const LINK_KEYS: [&str; 2] = ["link", "url"];
/// Keys that may carry the publication time.
const PUB_DATE_KEYS: [&str; 6] = [
    "pubDate",
    "published_at",
    "publishedAt",
    "created_at",
    "createdAt",
    "timestamp",
];
/// Keys that may carry the category (object, name, or id).
const CATEGORY_KEYS: [&str; 5] = [
    "category",
    "category_obj",
    "categoryObject",
    "categoryName",
    "category_id",
];
/// Keys that may carry the agency (object or name).
const AGENCY_KEYS: [&str; 3] = ["agency", "source", "publisher"];

/// What: Normalize one raw news record into a [`NewsItem`].
///
/// Inputs:
/// - `raw`: Upstream JSON record of unknown shape.
///
/// Output:
/// - A fully populated item; never fails.
///
/// Details:
/// - Aliases are resolved first-present-wins; JSON `null` counts as absent.
/// - An id alias that renders as empty text (`""`, an object) is skipped.
/// - When no id alias is present, a non-empty `link`/`url` becomes the id; after
///   that a synthetic id is derived (see [`synthetic_id`]).
/// - Non-object input (a bare string, number, ...) yields a fully defaulted item.
#[must_use]
pub fn normalize_news_item(raw: &Value) -> NewsItem {
    let title = first_present(raw, &TITLE_KEYS)
        .map(scalar_text)
        .unwrap_or_default();
    let content = first_present(raw, &CONTENT_KEYS)
        .map(scalar_text)
        .unwrap_or_default();
    let image_url = ss_non_empty(raw, &IMAGE_KEYS);
    let link = first_present(raw, &LINK_KEYS)
        .and_then(Value::as_str)
        .map_or_else(|| PLACEHOLDER_LINK.to_string(), ToOwned::to_owned);
    let pub_raw = first_present(raw, &PUB_DATE_KEYS).unwrap_or(&Value::Null);
    let pub_date = normalize_timestamp(pub_raw);

    let id = ID_KEYS
        .iter()
        .filter_map(|k| raw.get(*k))
        .map(scalar_text)
        .find(|s| !s.is_empty())
        .or_else(|| ss_non_empty(raw, &LINK_KEYS))
        .unwrap_or_else(|| synthetic_id(&title, &link, pub_raw));

    NewsItem {
        id,
        title,
        content,
        image_url,
        pub_date,
        link,
        category: normalize_category_ref(first_present(raw, &CATEGORY_KEYS)),
        agency: normalize_agency_ref(first_present(raw, &AGENCY_KEYS)),
    }
}

/// What: Normalize the category sub-object of a news record by runtime shape.
///
/// Details:
/// - Object: `id|category_id` and `name|title`.
/// - String: bare name (blank strings fall back to the default name).
/// - Number: id with the default name.
/// - Anything else, including absence: the default.
#[must_use]
pub fn normalize_category_ref(raw: Option<&Value>) -> CategoryRef {
    match raw {
        Some(obj @ Value::Object(_)) => CategoryRef {
            id: id_of(obj, &["id", "category_id"]),
            name: ss_non_empty(obj, &["name", "title"])
                .unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string()),
        },
        Some(Value::String(name)) if !name.trim().is_empty() => CategoryRef {
            id: None,
            name: name.clone(),
        },
        Some(n @ Value::Number(_)) => CategoryRef {
            id: as_id(n),
            name: DEFAULT_CATEGORY_NAME.to_string(),
        },
        _ => CategoryRef::default(),
    }
}

/// What: Normalize the agency sub-object of a news record by runtime shape.
///
/// Details:
/// - Object: `id`, `name|title`, `website|url|homepage`, `image_url|imageUrl|logo`.
/// - String: bare name.
/// - Anything else (numbers included): the default.
#[must_use]
pub fn normalize_agency_ref(raw: Option<&Value>) -> AgencyRef {
    match raw {
        Some(obj @ Value::Object(_)) => AgencyRef {
            id: id_of(obj, &["id"]),
            name: ss_non_empty(obj, &["name", "title"])
                .unwrap_or_else(|| DEFAULT_AGENCY_NAME.to_string()),
            website: ss_non_empty(obj, &["website", "url", "homepage"]),
            image_url: ss_non_empty(obj, &["image_url", "imageUrl", "logo"]),
        },
        Some(Value::String(name)) if !name.trim().is_empty() => AgencyRef {
            id: None,
            name: name.clone(),
            website: None,
            image_url: None,
        },
        _ => AgencyRef::default(),
    }
}

/// What: Normalize a record from `GET /api/categories`.
///
/// Output:
/// - `Some(Category)` when the record has an id and a name; `None` otherwise,
///   since an entry without an id cannot be used as a filter.
#[must_use]
pub fn normalize_category(raw: &Value) -> Option<Category> {
    Some(Category {
        id: id_of(raw, &["id", "category_id"])?,
        name: ss_non_empty(raw, &["name", "title"])?,
    })
}

/// What: Normalize a record from `GET /api/agencies`.
///
/// Output:
/// - `Some(Agency)` when the record has an id and a name; `None` otherwise.
#[must_use]
pub fn normalize_agency(raw: &Value) -> Option<Agency> {
    Some(Agency {
        id: id_of(raw, &["id", "agency_id"])?,
        name: ss_non_empty(raw, &["name", "title"])?,
        website: ss_non_empty(raw, &["website", "url", "homepage"]),
        image_url: ss_non_empty(raw, &["image_url", "imageUrl", "logo"]),
    })
}

/// Render a scalar JSON value as text; strings verbatim, numbers and booleans
/// via their JSON form, containers as empty text.
fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// What: Derive an id for records that carry no identifier at all.
///
/// Inputs:
/// - `title`: Normalized title.
/// - `link`: Normalized link (may be the placeholder).
/// - `pub_raw`: Raw publication field before defaulting.
///
/// Output:
/// - `syn-<16 hex>` from a SHA-256 over the three inputs, stable across refetches.
/// - `rnd-<16 hex>` when all three inputs are empty, since nothing stable exists.
fn synthetic_id(title: &str, link: &str, pub_raw: &Value) -> String {
    let link = if link == PLACEHOLDER_LINK { "" } else { link };
    let pub_text = match pub_raw {
        Value::Null => String::new(),
        other => scalar_text(other),
    };
    if title.is_empty() && link.is_empty() && pub_text.is_empty() {
        return format!("rnd-{:016x}", rand::rng().random::<u64>());
    }
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update([0x1f]);
    hasher.update(link.as_bytes());
    hasher.update([0x1f]);
    hasher.update(pub_text.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("syn-{}", &digest[..16])
}

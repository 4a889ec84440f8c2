//! `ecloud_tag`: look up a tag by ID, name or scope.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_tag`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagLookup {
    /// Tag ID.
    pub tag_id: Option<String>,
    /// Tag name.
    pub name: Option<String>,
    /// Scope the tag applies to.
    pub scope: Option<String>,
}

/// A tag as listed by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: Option<String>,
    pub scope: Option<String>,
}

impl Lookup for TagLookup {
    type Record = Tag;
    const DATA_SOURCE: &'static str = "ecloud_tag";
    const DOMAIN: &'static str = "tag";

    fn schema() -> Schema {
        Schema::v0()
            .with_description("Look up a single tag")
            .with_attribute("tag_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("scope", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/tags")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.tag_id.as_deref())
            .with_eq("name", self.name.as_deref())
            .with_eq("scope", self.scope.as_deref())
    }

    fn id(record: &Tag) -> String {
        record.id.clone()
    }

    fn state(record: &Tag) -> Value {
        json!({
            "tag_id": record.id,
            "name": record.name,
            "scope": record.scope,
        })
    }
}

//! `ecloud_iops`: IOPS tiers.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_iops`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IopsLookup {
    pub iops_id: Option<String>,
    pub name: Option<String>,
    /// IOPS level, e.g. 300 or 600.
    pub level: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IopsTier {
    pub id: String,
    pub name: Option<String>,
    pub level: Option<i64>,
}

impl Lookup for IopsLookup {
    type Record = IopsTier;
    const DATA_SOURCE: &'static str = "ecloud_iops";
    const DOMAIN: &'static str = "IOPS tier";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("iops_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("level", Attribute::filter_int64())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/iops")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.iops_id.as_deref())
            .with_eq("name", self.name.as_deref())
            .with_eq("level", self.level)
    }

    fn id(record: &IopsTier) -> String {
        record.id.clone()
    }

    fn state(record: &IopsTier) -> Value {
        json!({
            "iops_id": record.id,
            "name": record.name,
            "level": record.level,
        })
    }
}

//! `ecloud_site`: v1 sites linking a solution to a pod.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_site`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteLookup {
    pub site_id: Option<i64>,
    pub pod_id: Option<i64>,
    pub solution_id: Option<i64>,
    /// Site state, e.g. `Active`.
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub id: i64,
    pub pod_id: Option<i64>,
    pub solution_id: Option<i64>,
    pub state: Option<String>,
}

impl Lookup for SiteLookup {
    type Record = Site;
    const DATA_SOURCE: &'static str = "ecloud_site";
    const DOMAIN: &'static str = "site";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("site_id", Attribute::filter_int64())
            .with_attribute("pod_id", Attribute::filter_int64())
            .with_attribute("solution_id", Attribute::filter_int64())
            .with_attribute("state", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v1/sites")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.site_id)
            .with_eq("pod_id", self.pod_id)
            .with_eq("solution_id", self.solution_id)
            .with_eq("state", self.state.as_deref())
    }

    fn id(record: &Site) -> String {
        record.id.to_string()
    }

    fn state(record: &Site) -> Value {
        json!({
            "site_id": record.id,
            "pod_id": record.pod_id,
            "solution_id": record.solution_id,
            "state": record.state,
        })
    }
}

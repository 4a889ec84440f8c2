//! `ecloud_datastore`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_datastore`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatastoreLookup {
    pub datastore_id: Option<String>,
    pub availability_zone_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub datastore_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Datastore {
    pub id: String,
    pub availability_zone_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub datastore_type: Option<String>,
    /// Capacity in GiB.
    pub capacity: Option<i64>,
}

impl Lookup for DatastoreLookup {
    type Record = Datastore;
    const DATA_SOURCE: &'static str = "ecloud_datastore";
    const DOMAIN: &'static str = "datastore";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("datastore_id", Attribute::filter_string())
            .with_attribute("availability_zone_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("type", Attribute::filter_string())
            .with_attribute(
                "capacity",
                Attribute::computed_int64().with_description("Capacity in GiB"),
            )
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/datastores")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.datastore_id.as_deref())
            .with_eq("availability_zone_id", self.availability_zone_id.as_deref())
            .with_eq("name", self.name.as_deref())
            .with_eq("type", self.datastore_type.as_deref())
    }

    fn id(record: &Datastore) -> String {
        record.id.clone()
    }

    fn state(record: &Datastore) -> Value {
        json!({
            "datastore_id": record.id,
            "availability_zone_id": record.availability_zone_id,
            "name": record.name,
            "type": record.datastore_type,
            "capacity": record.capacity,
        })
    }
}

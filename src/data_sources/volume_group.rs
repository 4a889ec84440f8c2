//! `ecloud_volume_group`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_volume_group`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeGroupLookup {
    pub volume_group_id: Option<String>,
    pub vpc_id: Option<String>,
    pub availability_zone_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolumeGroup {
    pub id: String,
    pub vpc_id: Option<String>,
    pub availability_zone_id: Option<String>,
    pub name: Option<String>,
}

impl Lookup for VolumeGroupLookup {
    type Record = VolumeGroup;
    const DATA_SOURCE: &'static str = "ecloud_volume_group";
    const DOMAIN: &'static str = "volume group";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("volume_group_id", Attribute::filter_string())
            .with_attribute("vpc_id", Attribute::filter_string())
            .with_attribute("availability_zone_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/volume-groups")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.volume_group_id.as_deref())
            .with_eq("vpc_id", self.vpc_id.as_deref())
            .with_eq("availability_zone_id", self.availability_zone_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &VolumeGroup) -> String {
        record.id.clone()
    }

    fn state(record: &VolumeGroup) -> Value {
        json!({
            "volume_group_id": record.id,
            "vpc_id": record.vpc_id,
            "availability_zone_id": record.availability_zone_id,
            "name": record.name,
        })
    }
}

//! `ecloud_backup_gateway`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_backup_gateway`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackupGatewayLookup {
    pub backup_gateway_id: Option<String>,
    pub vpc_id: Option<String>,
    pub router_id: Option<String>,
    pub availability_zone_id: Option<String>,
    pub gateway_spec_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackupGateway {
    pub id: String,
    pub vpc_id: Option<String>,
    pub router_id: Option<String>,
    pub availability_zone_id: Option<String>,
    pub gateway_spec_id: Option<String>,
    pub name: Option<String>,
}

impl Lookup for BackupGatewayLookup {
    type Record = BackupGateway;
    const DATA_SOURCE: &'static str = "ecloud_backup_gateway";
    const DOMAIN: &'static str = "backup gateway";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("backup_gateway_id", Attribute::filter_string())
            .with_attribute("vpc_id", Attribute::filter_string())
            .with_attribute("router_id", Attribute::filter_string())
            .with_attribute("availability_zone_id", Attribute::filter_string())
            .with_attribute("gateway_spec_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/backup-gateways")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.backup_gateway_id.as_deref())
            .with_eq("vpc_id", self.vpc_id.as_deref())
            .with_eq("router_id", self.router_id.as_deref())
            .with_eq("availability_zone_id", self.availability_zone_id.as_deref())
            .with_eq("gateway_spec_id", self.gateway_spec_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &BackupGateway) -> String {
        record.id.clone()
    }

    fn state(record: &BackupGateway) -> Value {
        json!({
            "backup_gateway_id": record.id,
            "vpc_id": record.vpc_id,
            "router_id": record.router_id,
            "availability_zone_id": record.availability_zone_id,
            "gateway_spec_id": record.gateway_spec_id,
            "name": record.name,
        })
    }
}

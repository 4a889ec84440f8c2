//! `ecloud_backup_gateway_specification`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_backup_gateway_specification`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackupGatewaySpecificationLookup {
    pub backup_gateway_specification_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackupGatewaySpecification {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Lookup for BackupGatewaySpecificationLookup {
    type Record = BackupGatewaySpecification;
    const DATA_SOURCE: &'static str = "ecloud_backup_gateway_specification";
    const DOMAIN: &'static str = "backup gateway specification";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("backup_gateway_specification_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("description", Attribute::computed_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/backup-gateway-specs")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.backup_gateway_specification_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &BackupGatewaySpecification) -> String {
        record.id.clone()
    }

    fn state(record: &BackupGatewaySpecification) -> Value {
        json!({
            "backup_gateway_specification_id": record.id,
            "name": record.name,
            "description": record.description,
        })
    }
}

//! `ecloud_active_directory_domain`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_active_directory_domain`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveDirectoryDomainLookup {
    pub active_directory_domain_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActiveDirectoryDomain {
    pub id: String,
    pub name: Option<String>,
}

impl Lookup for ActiveDirectoryDomainLookup {
    type Record = ActiveDirectoryDomain;
    const DATA_SOURCE: &'static str = "ecloud_active_directory_domain";
    const DOMAIN: &'static str = "active directory domain";

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("active_directory_domain_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/active-directory-domains")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.active_directory_domain_id.as_deref())
            .with_eq("name", self.name.as_deref())
    }

    fn id(record: &ActiveDirectoryDomain) -> String {
        record.id.clone()
    }

    fn state(record: &ActiveDirectoryDomain) -> Value {
        json!({
            "active_directory_domain_id": record.id,
            "name": record.name,
        })
    }
}

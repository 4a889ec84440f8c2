//! `ecloud_instance_credential`: login credentials of an instance.
//!
//! Credentials are a sub-collection of the instance, so `instance_id` is
//! required and selects the path. The password is marked sensitive.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::LookupQuery;
use crate::path::CollectionPath;
use crate::resolve::Lookup;
use crate::schema::{Attribute, Schema};

/// Arguments of `ecloud_instance_credential`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstanceCredentialLookup {
    /// Instance owning the credentials.
    pub instance_id: String,
    /// Credential ID.
    pub instance_credential_id: Option<String>,
    /// Credential name.
    pub name: Option<String>,
    /// Login username.
    pub username: Option<String>,
}

#[derive(Clone, Deserialize)]
pub struct InstanceCredential {
    pub id: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub port: Option<i64>,
}

impl std::fmt::Debug for InstanceCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceCredential")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .finish()
    }
}

impl Lookup for InstanceCredentialLookup {
    type Record = InstanceCredential;
    const DATA_SOURCE: &'static str = "ecloud_instance_credential";
    const DOMAIN: &'static str = "instance credential";

    fn schema() -> Schema {
        Schema::v0()
            .with_description("Look up a credential of an instance")
            .with_attribute("instance_id", Attribute::required_string())
            .with_attribute("instance_credential_id", Attribute::filter_string())
            .with_attribute("name", Attribute::filter_string())
            .with_attribute("username", Attribute::filter_string())
            .with_attribute("password", Attribute::computed_string().sensitive())
            .with_attribute("port", Attribute::computed_int64())
    }

    fn path(&self) -> CollectionPath {
        CollectionPath::new("/ecloud/v2/instances")
            .with_id("instance_id", self.instance_id.as_str())
            .join("credentials")
    }

    fn query(&self) -> LookupQuery {
        LookupQuery::new()
            .with_eq("id", self.instance_credential_id.as_deref())
            .with_eq("name", self.name.as_deref())
            .with_eq("username", self.username.as_deref())
    }

    fn id(record: &InstanceCredential) -> String {
        record.id.clone()
    }

    fn state(record: &InstanceCredential) -> Value {
        json!({
            "instance_credential_id": record.id,
            "name": record.name,
            "username": record.username,
            "password": record.password,
            "port": record.port,
        })
    }
}

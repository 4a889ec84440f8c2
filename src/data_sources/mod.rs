//! eCloud data sources.
//!
//! One module per lookup domain. Each defines the typed arguments of the
//! data source, the record shape the API returns and the
//! [`Lookup`](crate::resolve::Lookup) impl that ties them together.
//! [`registry`] collects all of them.

// Argument and record fields mirror the eCloud API attribute names.
#![allow(missing_docs)]

use crate::data_source::DataSourceRegistry;

pub mod active_directory_domain;
pub mod affinity_rule;
pub mod affinity_rule_member;
pub mod backup_gateway;
pub mod backup_gateway_specification;
pub mod datastore;
pub mod instance_credential;
pub mod iops;
pub mod ip_address;
pub mod loadbalancer_network;
pub mod loadbalancer_spec;
pub mod loadbalancer_vip;
pub mod monitoring_gateway;
pub mod nat_overload_rule;
pub mod pod;
pub mod resource_tier;
pub mod site;
pub mod solution;
pub mod tag;
pub mod volume_group;
pub mod vpn_endpoint;
pub mod vpn_gateway;
pub mod vpn_gateway_specification;
pub mod vpn_gateway_user;
pub mod vpn_profile_group;
pub mod vpn_service;

/// Every eCloud data source, keyed by type name.
pub fn registry() -> DataSourceRegistry {
    DataSourceRegistry::new()
        .register::<active_directory_domain::ActiveDirectoryDomainLookup>()
        .register::<affinity_rule::AffinityRuleLookup>()
        .register::<affinity_rule_member::AffinityRuleMemberLookup>()
        .register::<backup_gateway::BackupGatewayLookup>()
        .register::<backup_gateway_specification::BackupGatewaySpecificationLookup>()
        .register::<datastore::DatastoreLookup>()
        .register::<instance_credential::InstanceCredentialLookup>()
        .register::<iops::IopsLookup>()
        .register::<ip_address::IpAddressLookup>()
        .register::<loadbalancer_network::LoadBalancerNetworkLookup>()
        .register::<loadbalancer_spec::LoadBalancerSpecLookup>()
        .register::<loadbalancer_vip::LoadBalancerVipLookup>()
        .register::<monitoring_gateway::MonitoringGatewayLookup>()
        .register::<nat_overload_rule::NatOverloadRuleLookup>()
        .register::<pod::PodLookup>()
        .register::<resource_tier::ResourceTierLookup>()
        .register::<site::SiteLookup>()
        .register::<solution::SolutionLookup>()
        .register::<tag::TagLookup>()
        .register::<volume_group::VolumeGroupLookup>()
        .register::<vpn_endpoint::VpnEndpointLookup>()
        .register::<vpn_gateway::VpnGatewayLookup>()
        .register::<vpn_gateway_specification::VpnGatewaySpecificationLookup>()
        .register::<vpn_gateway_user::VpnGatewayUserLookup>()
        .register::<vpn_profile_group::VpnProfileGroupLookup>()
        .register::<vpn_service::VpnServiceLookup>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_ambiguous, assert_not_found, assert_state_contains, MockClient};
    use serde_json::{json, Value};

    struct Case {
        data_source: &'static str,
        domain: &'static str,
        path: &'static str,
        id_attribute: &'static str,
        ids: [Value; 2],
        missing: Value,
        // Required path arguments.
        scope: Value,
    }

    fn case(
        data_source: &'static str,
        domain: &'static str,
        path: &'static str,
        id_attribute: &'static str,
    ) -> Case {
        Case {
            data_source,
            domain,
            path,
            id_attribute,
            ids: [json!("abc-1"), json!("abc-2")],
            missing: json!("abc-404"),
            scope: json!({}),
        }
    }

    fn numeric(mut case: Case) -> Case {
        case.ids = [json!(1), json!(2)];
        case.missing = json!(404);
        case
    }

    fn scoped(mut case: Case, scope: Value) -> Case {
        case.scope = scope;
        case
    }

    fn cases() -> Vec<Case> {
        vec![
            case("ecloud_active_directory_domain", "active directory domain", "/ecloud/v2/active-directory-domains", "active_directory_domain_id"),
            case("ecloud_affinity_rule", "affinity rule", "/ecloud/v2/affinity-rules", "affinity_rule_id"),
            scoped(
                case("ecloud_affinity_rule_member", "affinity rule member", "/ecloud/v2/affinity-rules/ar-1/members", "affinity_rule_member_id"),
                json!({"affinity_rule_id": "ar-1"}),
            ),
            case("ecloud_backup_gateway", "backup gateway", "/ecloud/v2/backup-gateways", "backup_gateway_id"),
            case("ecloud_backup_gateway_specification", "backup gateway specification", "/ecloud/v2/backup-gateway-specs", "backup_gateway_specification_id"),
            case("ecloud_datastore", "datastore", "/ecloud/v2/datastores", "datastore_id"),
            scoped(
                case("ecloud_instance_credential", "instance credential", "/ecloud/v2/instances/i-1/credentials", "instance_credential_id"),
                json!({"instance_id": "i-1"}),
            ),
            case("ecloud_iops", "IOPS tier", "/ecloud/v2/iops", "iops_id"),
            case("ecloud_ip_address", "IP address", "/ecloud/v2/ip-addresses", "ip_address_id"),
            case("ecloud_loadbalancer_network", "load balancer network", "/ecloud/v2/load-balancer-networks", "loadbalancer_network_id"),
            case("ecloud_loadbalancer_spec", "load balancer specification", "/ecloud/v2/load-balancer-specs", "loadbalancer_spec_id"),
            case("ecloud_loadbalancer_vip", "load balancer VIP", "/ecloud/v2/vips", "loadbalancer_vip_id"),
            case("ecloud_monitoring_gateway", "monitoring gateway", "/ecloud/v2/monitoring-gateways", "monitoring_gateway_id"),
            case("ecloud_nat_overload_rule", "NAT overload rule", "/ecloud/v2/nat-overload-rules", "nat_overload_rule_id"),
            numeric(case("ecloud_pod", "pod", "/ecloud/v1/pods", "pod_id")),
            case("ecloud_resource_tier", "resource tier", "/ecloud/v2/resource-tiers", "resource_tier_id"),
            numeric(case("ecloud_site", "site", "/ecloud/v1/sites", "site_id")),
            numeric(case("ecloud_solution", "solution", "/ecloud/v1/solutions", "solution_id")),
            case("ecloud_tag", "tag", "/ecloud/v2/tags", "tag_id"),
            case("ecloud_volume_group", "volume group", "/ecloud/v2/volume-groups", "volume_group_id"),
            case("ecloud_vpn_endpoint", "VPN endpoint", "/ecloud/v2/vpn-endpoints", "vpn_endpoint_id"),
            case("ecloud_vpn_gateway", "VPN gateway", "/ecloud/v2/vpn-gateways", "vpn_gateway_id"),
            case("ecloud_vpn_gateway_specification", "VPN gateway specification", "/ecloud/v2/vpn-gateway-specifications", "vpn_gateway_specification_id"),
            case("ecloud_vpn_gateway_user", "VPN gateway user", "/ecloud/v2/vpn-gateway-users", "vpn_gateway_user_id"),
            case("ecloud_vpn_profile_group", "VPN profile group", "/ecloud/v2/vpn-profile-groups", "vpn_profile_group_id"),
            case("ecloud_vpn_service", "VPN service", "/ecloud/v2/vpn-services", "vpn_service_id"),
        ]
    }

    fn id_string(id: &Value) -> String {
        match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn with_id(scope: &Value, attribute: &str, id: &Value) -> Value {
        let mut config = scope.clone();
        config[attribute] = id.clone();
        config
    }

    #[test]
    fn test_registry_covers_every_case() {
        let registry = registry();
        let cases = cases();
        assert_eq!(registry.len(), cases.len());

        for case in &cases {
            let source = registry
                .get(case.data_source)
                .unwrap_or_else(|| panic!("{} not registered", case.data_source));
            let schema = source.schema();
            assert!(
                schema.attribute(case.id_attribute).is_some(),
                "{} lacks {}",
                case.data_source,
                case.id_attribute
            );
        }
    }

    #[tokio::test]
    async fn test_every_data_source_classifies_results() {
        let registry = registry();

        for case in cases() {
            let source = registry.get(case.data_source).unwrap();
            let client = MockClient::new().with_records(
                case.path,
                vec![json!({"id": case.ids[0]}), json!({"id": case.ids[1]})],
            );

            let found = source
                .read(&client, with_id(&case.scope, case.id_attribute, &case.ids[1]))
                .await
                .unwrap_or_else(|e| panic!("{}: {}", case.data_source, e));
            assert_state_contains(&found, &with_id(&json!({}), case.id_attribute, &case.ids[1]));
            assert_eq!(found["id"], json!(id_string(&case.ids[1])));
            let (path, query) = client.last_request().unwrap();
            assert_eq!(path, case.path);
            assert_eq!(query.len(), 1, "{}", case.data_source);

            let missing = source
                .read(&client, with_id(&case.scope, case.id_attribute, &case.missing))
                .await;
            assert_not_found(&missing, case.domain);

            let all = source.read(&client, case.scope.clone()).await;
            assert_ambiguous(&all, case.domain, 2);
        }
    }

    #[tokio::test]
    async fn test_scoped_data_sources_reject_blank_scope() {
        let registry = registry();

        for case in cases().into_iter().filter(|c| c.scope != json!({})) {
            let source = registry.get(case.data_source).unwrap();
            let client = MockClient::new().with_records(case.path, vec![json!({"id": case.ids[0]})]);

            let mut blank = case.scope.clone();
            for value in blank.as_object_mut().unwrap().values_mut() {
                *value = json!("");
            }

            assert!(!source.validate(&blank).is_empty(), "{}", case.data_source);
            let err = source.read(&client, blank).await.unwrap_err();
            assert!(
                matches!(err, crate::error::ProviderError::Validation(_)),
                "{}: {}",
                case.data_source,
                err
            );
            assert!(client.requests().is_empty());
        }
    }
}

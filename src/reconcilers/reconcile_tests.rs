// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `reconcile.rs`

#[cfg(test)]
mod tests {
    use crate::constants::{
        API_PATH_DNS_AUTH_NSG, API_PATH_DNS_AUTH_ZONE, API_PATH_DNS_FORWARD_ZONE,
        API_PATH_DNS_VIEW, API_PATH_IPAM_ADDRESS_BLOCK, API_PATH_IPAM_SUBNET,
    };
    use crate::errors::ReconcileError;
    use crate::reconcilers::test_support::{Call, FakeApi};
    use crate::reconcilers::{ImmutableFieldPolicy, Reconciler};
    use crate::resources::{
        AddressBlockConfig, AuthNsgConfig, AuthZoneConfig, ForwardZoneConfig, ModuleParams,
        ResourceKind, SubnetConfig, ViewConfig,
    };
    use serde_json::{json, Value};

    fn params<R: ResourceKind>(doc: Value) -> ModuleParams<R> {
        serde_json::from_value(doc).unwrap()
    }

    #[tokio::test]
    async fn test_create_view_when_absent() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);

        let result = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"name": "view1", "state": "present"})))
            .await
            .unwrap();

        let calls = api.calls();
        let created: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                Call::Create(body) => Some(body.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(created, vec![json!({"name": "view1"}).as_object().cloned().unwrap()]);

        assert!(result.changed);
        assert_eq!(result.id.as_deref(), Some("dns/view/1"));
        assert_eq!(result.msg.as_deref(), Some("View created"));
        let diff = result.diff.unwrap();
        assert!(diff.before.is_empty());
        assert_eq!(diff.after["name"], json!("view1"));
        assert_eq!(diff.after["id"], json!("dns/view/1"));
    }

    #[tokio::test]
    async fn test_second_run_is_idempotent() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);
        let doc = json!({"name": "view1", "comment": "lab", "ip_spaces": ["ipam/ip_space/1"]});

        let first = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(doc.clone()))
            .await
            .unwrap();
        let second = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(doc))
            .await
            .unwrap();

        assert!(first.changed);
        assert!(!second.changed);
        assert_eq!(first.object, second.object);
        assert_eq!(second.msg, None);
        assert_eq!(api.mutating_calls(), 1);
    }

    #[tokio::test]
    async fn test_unset_fields_are_not_compared() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);
        api.seed(json!({
            "name": "view1",
            "comment": "managed elsewhere",
            "disabled": true,
            "edns_udp_size": 1232,
        }));

        let result = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"name": "view1"})))
            .await
            .unwrap();

        assert!(!result.changed);
        assert_eq!(api.mutating_calls(), 0);
        let diff = result.diff.unwrap();
        assert_eq!(diff.before, diff.after);
    }

    #[tokio::test]
    async fn test_explicit_null_clears_remote_value() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);
        let id = api.seed(json!({"name": "view1", "comment": "old"}));

        let result = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"name": "view1", "comment": null})))
            .await
            .unwrap();

        assert!(result.changed);
        assert!(api
            .calls()
            .contains(&Call::Update(id, json!({"name": "view1", "comment": null}).as_object().cloned().unwrap())));
        assert!(!result.object.unwrap().contains_key("comment"));
    }

    #[tokio::test]
    async fn test_explicit_null_against_missing_field_is_unchanged() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);
        api.seed(json!({"name": "view1", "comment": null}));

        let result = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"name": "view1", "comment": null})))
            .await
            .unwrap();

        assert!(!result.changed);
    }

    #[tokio::test]
    async fn test_absent_with_unknown_id_is_not_an_error() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);

        let result = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"id": "dns/view/missing", "state": "absent"})))
            .await
            .unwrap();

        assert!(!result.changed);
        assert_eq!(result.id, None);
        assert_eq!(api.mutating_calls(), 0);
    }

    #[tokio::test]
    async fn test_present_with_unknown_id_fails() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);

        let err = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"id": "dns/view/missing", "name": "view1"})))
            .await
            .unwrap_err();

        assert!(matches!(err, ReconcileError::NotFound { kind: "View", ref id } if id == "dns/view/missing"));
        assert_eq!(api.mutating_calls(), 0);
    }

    #[tokio::test]
    async fn test_explicit_id_takes_precedence_over_name() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);
        let id = api.seed(json!({"name": "old-name"}));

        let result = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"id": &id, "name": "new-name"})))
            .await
            .unwrap();

        assert!(result.changed);
        assert_eq!(result.id.as_deref(), Some(id.as_str()));
        assert_eq!(api.list_calls(), 0);
        assert_eq!(api.objects()[0]["name"], json!("new-name"));
    }

    #[tokio::test]
    async fn test_ambiguous_natural_key_fails() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);
        api.seed(json!({"name": "dup"}));
        api.seed(json!({"name": "dup"}));

        let err = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"name": "dup"})))
            .await
            .unwrap_err();

        match err {
            ReconcileError::AmbiguousMatch { filter, matches, .. } => {
                assert_eq!(filter, "name=='dup'");
                assert_eq!(matches.len(), 2);
            }
            other => panic!("expected AmbiguousMatch, got {other:?}"),
        }
        assert_eq!(api.mutating_calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_required_fields() {
        let api = FakeApi::new(API_PATH_DNS_AUTH_ZONE);

        let err = Reconciler::new(&api)
            .reconcile(params::<AuthZoneConfig>(json!({"comment": "x"})))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReconcileError::MissingParameter { ref fields, .. } if fields == &["fqdn", "primary_type"]
        ));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_absent_without_id_or_key_fails_before_any_call() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);

        let err = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"state": "absent"})))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReconcileError::MissingParameter { ref fields, .. } if fields == &["name"]
        ));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_subnet_without_prefix_names_only_cidr() {
        let api = FakeApi::new(API_PATH_IPAM_SUBNET);

        let err = Reconciler::new(&api)
            .reconcile(params::<SubnetConfig>(json!({
                "address": "10.0.0.0",
                "space": "ipam/ip_space/1",
            })))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Subnet: missing required parameters: cidr");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_subnet_prefix_from_cidr_field() {
        let api = FakeApi::new(API_PATH_IPAM_SUBNET);
        api.seed(json!({"address": "10.0.0.0", "cidr": 24, "space": "ipam/ip_space/1"}));

        let result = Reconciler::new(&api)
            .reconcile(params::<SubnetConfig>(json!({
                "address": "10.0.0.0",
                "cidr": 24,
                "space": "ipam/ip_space/1",
            })))
            .await
            .unwrap();

        assert!(!result.changed);
        assert_eq!(api.mutating_calls(), 0);
    }

    #[tokio::test]
    async fn test_check_mode_reports_change_without_side_effects() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);
        api.seed(json!({"name": "existing", "comment": "a"}));

        let create = Reconciler::new(&api)
            .check_mode(true)
            .reconcile(params::<ViewConfig>(json!({"name": "new"})))
            .await
            .unwrap();
        let update = Reconciler::new(&api)
            .check_mode(true)
            .reconcile(params::<ViewConfig>(json!({"name": "existing", "comment": "b"})))
            .await
            .unwrap();
        let delete = Reconciler::new(&api)
            .check_mode(true)
            .reconcile(params::<ViewConfig>(json!({"name": "existing", "state": "absent"})))
            .await
            .unwrap();
        let noop = Reconciler::new(&api)
            .check_mode(true)
            .reconcile(params::<ViewConfig>(json!({"name": "existing", "comment": "a"})))
            .await
            .unwrap();

        assert!(create.changed && update.changed && delete.changed);
        assert!(!noop.changed);
        for result in [&create, &update, &delete, &noop] {
            assert_eq!(result.id, None);
            assert_eq!(result.object, None);
            assert_eq!(result.diff, None);
        }
        assert_eq!(update.msg.as_deref(), Some("View updated"));
        assert_eq!(api.mutating_calls(), 0);
        assert_eq!(api.objects().len(), 1);
    }

    #[tokio::test]
    async fn test_subnet_delete_by_cidr_address() {
        let api = FakeApi::new(API_PATH_IPAM_SUBNET);
        let id = api.seed(json!({
            "address": "10.0.0.0",
            "cidr": 24,
            "space": "ipam/ip_space/1",
            "name": "lab",
        }));

        let result = Reconciler::new(&api)
            .reconcile(params::<SubnetConfig>(json!({
                "address": "10.0.0.0/24",
                "space": "ipam/ip_space/1",
                "state": "absent",
            })))
            .await
            .unwrap();

        assert!(result.changed);
        assert_eq!(result.diff.unwrap().after, serde_json::Map::new());
        assert_eq!(result.object, Some(serde_json::Map::new()));
        assert!(api.calls().contains(&Call::Delete(id)));
        assert_eq!(api.mutating_calls(), 1);
        assert!(api.objects().is_empty());
    }

    #[tokio::test]
    async fn test_subnet_lookup_filter_uses_split_address() {
        let api = FakeApi::new(API_PATH_IPAM_SUBNET);

        Reconciler::new(&api)
            .reconcile(params::<SubnetConfig>(json!({
                "address": "10.1.0.0/16",
                "space": "ipam/ip_space/1",
            })))
            .await
            .unwrap();

        let filter = api.calls().iter().find_map(|c| match c {
            Call::List(p) => p.filter.clone(),
            _ => None,
        });
        assert_eq!(
            filter.as_deref(),
            Some("address=='10.1.0.0' and space=='ipam/ip_space/1' and cidr==16")
        );
        assert_eq!(api.objects()[0]["address"], json!("10.1.0.0"));
        assert_eq!(api.objects()[0]["cidr"], json!(16));
    }

    #[tokio::test]
    async fn test_read_only_field_conflict_fails_by_default() {
        let api = FakeApi::new(API_PATH_DNS_AUTH_ZONE);
        let id = api.seed(json!({"fqdn": "example.com.", "primary_type": "cloud"}));

        let err = Reconciler::new(&api)
            .reconcile(params::<AuthZoneConfig>(json!({
                "id": &id,
                "fqdn": "example.org.",
                "primary_type": "cloud",
            })))
            .await
            .unwrap_err();

        match err {
            ReconcileError::ImmutableFieldConflict { field, existing, desired, .. } => {
                assert_eq!(field, "fqdn");
                assert_eq!(existing, json!("example.com."));
                assert_eq!(desired, json!("example.org."));
            }
            other => panic!("expected ImmutableFieldConflict, got {other:?}"),
        }
        assert_eq!(api.mutating_calls(), 0);
    }

    #[tokio::test]
    async fn test_read_only_field_conflict_detected_in_check_mode() {
        let api = FakeApi::new(API_PATH_DNS_AUTH_ZONE);
        let id = api.seed(json!({"fqdn": "example.com.", "primary_type": "cloud"}));

        let err = Reconciler::new(&api)
            .check_mode(true)
            .reconcile(params::<AuthZoneConfig>(json!({
                "id": &id,
                "fqdn": "example.com.",
                "primary_type": "external",
            })))
            .await
            .unwrap_err();

        assert!(matches!(err, ReconcileError::ImmutableFieldConflict { ref field, .. } if field == "primary_type"));
    }

    #[tokio::test]
    async fn test_read_only_fields_are_stripped_from_update() {
        let api = FakeApi::new(API_PATH_DNS_AUTH_ZONE);
        let id = api.seed(json!({"fqdn": "example.com.", "primary_type": "cloud", "comment": "a"}));

        let result = Reconciler::new(&api)
            .reconcile(params::<AuthZoneConfig>(json!({
                "fqdn": "example.com.",
                "primary_type": "cloud",
                "comment": "b",
            })))
            .await
            .unwrap();

        assert!(result.changed);
        assert!(api
            .calls()
            .contains(&Call::Update(id, json!({"comment": "b"}).as_object().cloned().unwrap())));
    }

    #[tokio::test]
    async fn test_drop_policy_ignores_read_only_change() {
        let api = FakeApi::new(API_PATH_DNS_AUTH_ZONE);
        let id = api.seed(json!({"fqdn": "example.com.", "primary_type": "cloud", "comment": "a"}));

        let result = Reconciler::new(&api)
            .immutable_fields(ImmutableFieldPolicy::Drop)
            .reconcile(params::<AuthZoneConfig>(json!({
                "id": &id,
                "fqdn": "example.org.",
                "primary_type": "cloud",
                "comment": "b",
            })))
            .await
            .unwrap();

        assert!(result.changed);
        assert!(api
            .calls()
            .contains(&Call::Update(id, json!({"comment": "b"}).as_object().cloned().unwrap())));
        assert_eq!(api.objects()[0]["fqdn"], json!("example.com."));
    }

    #[tokio::test]
    async fn test_drop_policy_with_only_read_only_change_is_noop() {
        let api = FakeApi::new(API_PATH_IPAM_SUBNET);
        let id = api.seed(json!({"address": "10.0.0.0", "cidr": 24, "space": "ipam/ip_space/1"}));

        let result = Reconciler::new(&api)
            .immutable_fields(ImmutableFieldPolicy::Drop)
            .reconcile(params::<SubnetConfig>(json!({
                "id": &id,
                "address": "10.0.0.0/24",
                "space": "ipam/ip_space/2",
            })))
            .await
            .unwrap();

        assert!(!result.changed);
        assert_eq!(api.mutating_calls(), 0);
    }

    #[tokio::test]
    async fn test_quote_in_natural_key_is_rejected_locally() {
        let api = FakeApi::new(API_PATH_DNS_VIEW);

        let err = Reconciler::new(&api)
            .reconcile(params::<ViewConfig>(json!({"name": "o'brien"})))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReconcileError::InvalidParameter { field: "name", .. }
        ));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_address_block_cidr_change_is_refused() {
        let api = FakeApi::new(API_PATH_IPAM_ADDRESS_BLOCK);
        let id = api.seed(json!({"address": "10.0.0.0", "cidr": 8, "space": "ipam/ip_space/1"}));

        let err = Reconciler::new(&api)
            .reconcile(params::<AddressBlockConfig>(json!({
                "id": &id,
                "address": "10.0.0.0/16",
                "space": "ipam/ip_space/1",
            })))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReconcileError::ImmutableFieldConflict { kind: "AddressBlock", ref field, .. } if field == "cidr"
        ));
        assert_eq!(api.mutating_calls(), 0);
    }

    #[tokio::test]
    async fn test_address_block_created_from_prefixed_address() {
        let api = FakeApi::new(API_PATH_IPAM_ADDRESS_BLOCK);

        let result = Reconciler::new(&api)
            .reconcile(params::<AddressBlockConfig>(json!({
                "address": "10.0.0.0/8",
                "space": "ipam/ip_space/1",
            })))
            .await
            .unwrap();

        assert!(result.changed);
        let calls = api.calls();
        let Call::List(lookup) = &calls[0] else {
            panic!("expected a lookup first");
        };
        assert_eq!(
            lookup.filter.as_deref(),
            Some("address=='10.0.0.0' and space=='ipam/ip_space/1' and cidr==8")
        );
        let Call::Create(body) = &calls[1] else {
            panic!("expected a create");
        };
        assert_eq!(body["cidr"], json!(8));
    }

    #[tokio::test]
    async fn test_forward_zone_update_sends_changed_forwarders() {
        let api = FakeApi::new(API_PATH_DNS_FORWARD_ZONE);
        api.seed(json!({"fqdn": "corp.example.", "forward_only": false}));

        let result = Reconciler::new(&api)
            .reconcile(params::<ForwardZoneConfig>(json!({
                "fqdn": "corp.example.",
                "forward_only": true,
            })))
            .await
            .unwrap();

        assert!(result.changed);
        assert_eq!(result.msg.as_deref(), Some("ForwardZone updated"));
        let updates: Vec<_> = api
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Update(_, body) => Some(body),
                _ => None,
            })
            .collect();
        assert_eq!(updates.len(), 1);
        assert_eq!(serde_json::Value::Object(updates[0].clone()), json!({"forward_only": true}));
    }

    #[tokio::test]
    async fn test_auth_nsg_deleted_by_name() {
        let api = FakeApi::new(API_PATH_DNS_AUTH_NSG);
        api.seed(json!({"name": "edge"}));

        let result = Reconciler::new(&api)
            .reconcile(params::<AuthNsgConfig>(json!({"name": "edge", "state": "absent"})))
            .await
            .unwrap();

        assert!(result.changed);
        assert_eq!(result.msg.as_deref(), Some("AuthNsg deleted"));
        assert!(api.objects().is_empty());
    }
}

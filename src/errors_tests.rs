// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for error types.

#[cfg(test)]
mod tests {
    use crate::errors::*;
    use serde_json::json;

    #[test]
    fn test_api_status_error_message() {
        let error = ApiError::Status {
            status: 400,
            reason: "Bad Request".to_string(),
            body: r#"{"error":"invalid fqdn"}"#.to_string(),
        };

        assert_eq!(
            error.to_string(),
            r#"400 Bad Request {"error":"invalid fqdn"}"#
        );
        assert_eq!(error.status(), Some(400));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_api_not_found_detection() {
        let error = ApiError::Status {
            status: 404,
            reason: "Not Found".to_string(),
            body: String::new(),
        };
        assert!(error.is_not_found());

        let transport = ApiError::Transport {
            url: "https://csp.infoblox.com/api/ddi/v1/dns/view".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(transport.status(), None);
        assert!(!transport.is_not_found());
    }

    #[test]
    fn test_api_error_wrapped_in_reconcile_error() {
        let error: ReconcileError = ApiError::Status {
            status: 401,
            reason: "Unauthorized".to_string(),
            body: "bad token".to_string(),
        }
        .into();

        assert_eq!(
            error.to_string(),
            "Failed to execute command: 401 Unauthorized bad token"
        );
    }

    #[test]
    fn test_not_found_error() {
        let error = ReconcileError::NotFound {
            kind: "AuthZone",
            id: "dns/auth_zone/abc".to_string(),
        };

        assert_eq!(error.to_string(), "AuthZone 'dns/auth_zone/abc' not found");
    }

    #[test]
    fn test_ambiguous_match_names_every_match() {
        let error = ReconcileError::AmbiguousMatch {
            kind: "View",
            filter: "name=='default'".to_string(),
            matches: vec![
                json!({"id": "dns/view/1", "name": "default"}),
                json!({"id": "dns/view/2", "name": "default"}),
            ],
        };

        let msg = error.to_string();
        assert!(msg.starts_with("Found multiple View matching name=='default'"));
        assert!(msg.contains("dns/view/1"));
        assert!(msg.contains("dns/view/2"));
    }

    #[test]
    fn test_immutable_field_conflict_error() {
        let error = ReconcileError::ImmutableFieldConflict {
            kind: "AuthZone",
            field: "fqdn".to_string(),
            existing: json!("a.example.com."),
            desired: json!("b.example.com."),
        };

        assert_eq!(
            error.to_string(),
            r#"fqdn cannot be updated on AuthZone: existing "a.example.com.", desired "b.example.com.""#
        );
    }

    #[test]
    fn test_missing_parameter_lists_fields() {
        let error = ReconcileError::MissingParameter {
            kind: "AuthZone",
            fields: vec!["fqdn", "primary_type"],
        };

        assert_eq!(
            error.to_string(),
            "AuthZone: missing required parameters: fqdn, primary_type"
        );
    }

    #[test]
    fn test_mutually_exclusive_error() {
        let error = ReconcileError::MutuallyExclusive {
            fields: vec!["id", "filters"],
        };

        assert_eq!(
            error.to_string(),
            "parameters are mutually exclusive: id|filters"
        );
    }

    #[test]
    fn test_missing_api_key_error() {
        let error = ConfigError::MissingApiKey {
            env: "BLOXONE_API_KEY",
        };

        assert!(error.to_string().contains("BLOXONE_API_KEY"));
    }

    #[test]
    fn test_unquotable_filter_value_error() {
        let error = ReconcileError::UnquotableFilterValue {
            field: "name".to_string(),
            value: json!("o'brien").to_string(),
        };

        assert_eq!(
            error.to_string(),
            r#"cannot filter on name=="o'brien": single quotes are not supported in filter values"#
        );
    }
}

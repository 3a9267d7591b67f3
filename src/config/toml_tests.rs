//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};
use crate::integration::IntegrationKind;

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [client]
            base_url = "https://opslevel.internal"
            timeout = 30

            [integrations]
            check = "check-id"
            deploy = "deploy-id"
            payload = "payload-id"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(
            config.client.base_url.as_deref(),
            Some("https://opslevel.internal")
        );
        assert_eq!(config.client.timeout, Some(30));
        assert_eq!(config.integrations.check.as_deref(), Some("check-id"));
        assert_eq!(config.integrations.deploy.as_deref(), Some("deploy-id"));
        assert_eq!(config.integrations.payload.as_deref(), Some("payload-id"));
    }

    #[test]
    fn parse_integrations_only() {
        let toml = r#"
            [integrations]
            deploy = "deploy-id"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert!(config.client.base_url.is_none());
        assert!(config.client.timeout.is_none());
        assert!(config.integrations.check.is_none());
        assert_eq!(config.integrations.deploy.as_deref(), Some("deploy-id"));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.client.base_url.is_none());
        assert!(config.integrations.payload.is_none());
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            [client]
            base_url = "https://example.com"
            retries = 3
        "#;

        let result = TomlConfig::parse(toml);
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_sections() {
        let toml = r#"
            [webhook]
            url = "https://example.com"
        "#;

        let result = TomlConfig::parse(toml);
        assert!(result.is_err());
    }

    #[test]
    fn reject_negative_timeout() {
        let toml = r"
            [client]
            timeout = -5
        ";

        assert!(TomlConfig::parse(toml).is_err());
    }
}

mod integration_lookup {
    use super::*;

    #[test]
    fn for_kind_picks_matching_entry() {
        let config = TomlConfig::parse(
            r#"
            [integrations]
            check = "c"
            payload = "p"
        "#,
        )
        .unwrap();
        let ids = &config.integrations;

        assert_eq!(ids.for_kind(IntegrationKind::Check), Some("c"));
        assert_eq!(ids.for_kind(IntegrationKind::Deploy), None);
        assert_eq!(ids.for_kind(IntegrationKind::Payload), Some("p"));
    }
}

mod default_template {
    use super::*;

    #[test]
    fn template_is_valid_toml() {
        let template = default_config_template();
        // Commented-out values are ignored by the parser
        let result = TomlConfig::parse(&template);
        assert!(
            result.is_ok(),
            "Template should be valid TOML: {:?}",
            result.err()
        );
    }

    #[test]
    fn template_contains_all_sections() {
        let template = default_config_template();

        assert!(
            template.contains("[client]"),
            "Template should contain client section"
        );
        assert!(
            template.contains("[integrations]"),
            "Template should contain integrations section"
        );
    }

    #[test]
    fn template_documents_every_kind() {
        let template = default_config_template();

        for kind in ["check", "deploy", "payload"] {
            assert!(
                template.contains(&format!("# {kind} = ")),
                "Template should document {kind}"
            );
        }
    }

    #[test]
    fn template_leaves_everything_unset() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.client.base_url.is_none());
        assert!(config.client.timeout.is_none());
        assert!(config.integrations.check.is_none());
    }
}

mod file_loading {
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [integrations]
            check = "from-file"
        "#
        )
        .unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert_eq!(config.integrations.check.as_deref(), Some("from-file"));
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let path = Path::new("nonexistent_config_file_12345.toml");
        let result = TomlConfig::load(path);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_invalid_toml_file_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let result = TomlConfig::load(file.path());

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

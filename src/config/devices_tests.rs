//! Tests for device file parsing.

use super::ConfigError;
use super::devices::{DevicesFile, default_devices_template};
use crate::monitor::Target;

mod parsing {
    use super::*;

    #[test]
    fn parses_devices_in_order() {
        let yaml = r"
devices:
  - description: Core router
    ip: 192.168.1.1
  - description: File server
    ip: nas.lan
";

        let targets = DevicesFile::parse(yaml).unwrap().into_targets().unwrap();

        assert_eq!(
            targets,
            vec![
                Target::new("Core router", "192.168.1.1"),
                Target::new("File server", "nas.lan"),
            ]
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let yaml = r"
devices:
  - description: Router
    ip: 10.0.0.1
    location: rack 2
";

        let targets = DevicesFile::parse(yaml).unwrap().into_targets().unwrap();

        assert_eq!(targets, vec![Target::new("Router", "10.0.0.1")]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let yaml = r#"
devices:
  - description: "  Router  "
    ip: " 10.0.0.1 "
"#;

        let targets = DevicesFile::parse(yaml).unwrap().into_targets().unwrap();

        assert_eq!(targets[0], Target::new("Router", "10.0.0.1"));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = DevicesFile::parse("devices: [unclosed");

        assert!(matches!(result, Err(ConfigError::YamlParse(_))));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let result = DevicesFile::parse("devices: just-a-string");

        assert!(matches!(result, Err(ConfigError::YamlParse(_))));
    }
}

mod empty_lists {
    use super::*;

    #[test]
    fn blank_document_has_no_targets() {
        let targets = DevicesFile::parse("").unwrap().into_targets().unwrap();

        assert!(targets.is_empty());
    }

    #[test]
    fn comment_only_document_has_no_targets() {
        let targets = DevicesFile::parse("# nothing yet\n\n")
            .unwrap()
            .into_targets()
            .unwrap();

        assert!(targets.is_empty());
    }

    #[test]
    fn null_devices_key_has_no_targets() {
        let targets = DevicesFile::parse("devices:\n")
            .unwrap()
            .into_targets()
            .unwrap();

        assert!(targets.is_empty());
    }

    #[test]
    fn empty_sequence_has_no_targets() {
        let targets = DevicesFile::parse("devices: []\n")
            .unwrap()
            .into_targets()
            .unwrap();

        assert!(targets.is_empty());
    }
}

mod validation {
    use super::*;

    #[test]
    fn blank_description_is_rejected() {
        let yaml = r"
devices:
  - description: Router
    ip: 10.0.0.1
  - ip: 10.0.0.2
";

        let result = DevicesFile::parse(yaml).unwrap().into_targets();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDevice { index: 2, .. })
        ));
    }

    #[test]
    fn blank_ip_is_rejected() {
        let yaml = r#"
devices:
  - description: Router
    ip: ""
"#;

        let error = DevicesFile::parse(yaml)
            .unwrap()
            .into_targets()
            .unwrap_err();

        assert_eq!(error.to_string(), "Invalid device #1: ip must not be empty");
    }

    #[test]
    fn duplicate_addresses_are_kept() {
        let yaml = r"
devices:
  - description: Router
    ip: 10.0.0.1
  - description: Gateway
    ip: 10.0.0.1
";

        let targets = DevicesFile::parse(yaml).unwrap().into_targets().unwrap();

        assert_eq!(targets.len(), 2);
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses_to_an_empty_list() {
        let targets = DevicesFile::parse(&default_devices_template())
            .unwrap()
            .into_targets()
            .unwrap();

        assert!(targets.is_empty());
    }

    #[test]
    fn template_mentions_credentials() {
        let template = default_devices_template();

        assert!(template.contains("TELEGRAM_BOT_TOKEN"));
        assert!(template.contains("TELEGRAM_CHAT_ID"));
    }
}

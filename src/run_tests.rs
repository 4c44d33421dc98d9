//! Tests for the run module.

use super::*;
use hostwatch::config::{Cli, Credentials, DevicesFile};

fn make_test_config() -> ValidatedConfig {
    let cli = Cli::parse_from_iter(["hostwatch", "--dry-run"]);
    let credentials = Credentials {
        bot_token: "123:abc".to_string(),
        chat_id: "-100200".to_string(),
    };
    ValidatedConfig::from_raw(&cli, DevicesFile::default(), credentials).unwrap()
}

mod notifier {
    use super::*;

    #[test]
    fn uses_configured_endpoint() {
        let config = make_test_config();

        let notifier = create_notifier(&config).unwrap();

        assert_eq!(notifier.endpoint(), &config.endpoint);
    }

    #[test]
    fn budget_fits_within_one_cycle_interval() {
        let config = make_test_config();

        let notifier = create_notifier(&config).unwrap();

        assert_eq!(notifier.budget().attempts(), 2);
        assert!(notifier.budget().worst_case(defaults::http_timeout()) <= CYCLE_INTERVAL);
    }
}

mod run_error {
    use super::*;

    #[test]
    fn http_client_error_displays_prefix() {
        let source = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let error = RunError::HttpClient(source);

        assert!(error.to_string().starts_with("Failed to create HTTP client"));
    }
}

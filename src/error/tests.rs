//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sleeper_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let error = SleeperError::from(reqwest_error);

        match error {
            SleeperError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = SleeperError::from(json_error);

        match error {
            SleeperError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SleeperError::from(io_error);

        match error {
            SleeperError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty".parse::<u16>().unwrap_err();
        let error = SleeperError::from(parse_error);

        match error {
            SleeperError::InvalidSeason(_) => (),
            _ => panic!("Expected InvalidSeason error variant"),
        }
    }

    #[test]
    fn test_user_not_found_message() {
        let error = SleeperError::UserNotFound {
            username: "ghost".to_string(),
        };

        assert_eq!(error.to_string(), "User 'ghost' not found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_invalid_username_is_not_not_found() {
        assert!(!SleeperError::InvalidUsername.is_not_found());
    }

    #[test]
    fn test_invalid_rounds_message() {
        let error = SleeperError::InvalidRounds {
            spec: "1-x".to_string(),
        };
        assert!(error.to_string().contains("1-x"));
    }

    #[test]
    fn test_partial_fetch_keeps_source() {
        use std::error::Error as _;

        let inner = SleeperError::Cache {
            message: "boom".to_string(),
        };
        let error = SleeperError::partial(LeagueId::new("L1"), inner);

        let message = error.to_string();
        assert!(message.contains("L1"));
        assert!(message.contains("boom"));
        assert!(error.source().is_some());
        assert!(!error.is_not_found());
    }
}

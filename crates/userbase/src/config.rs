use std::env;

use crate::service::ServiceConfig;
use crate::storage::dynamodb::AwsSettings;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding the user records (default: "users")
    pub table_name: String,
    /// Secondary index used for email lookups (default: "emailIndex")
    pub email_index: String,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: none)
    pub aws_endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `USERS_TABLE` - DynamoDB table name (default: "users")
    /// - `USERS_EMAIL_INDEX` - Email index name (default: "emailIndex")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint URL (default: unset)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("USERS_TABLE").unwrap_or_else(|_| "users".to_string()),
            email_index: env::var("USERS_EMAIL_INDEX")
                .unwrap_or_else(|_| "emailIndex".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|url| !url.is_empty()),
        }
    }

    /// Settings handed to the user service.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            email_index: self.email_index.clone(),
        }
    }

    /// Settings used to build the DynamoDB client.
    pub fn aws_settings(&self) -> AwsSettings {
        AwsSettings {
            endpoint_url: self.aws_endpoint_url.clone(),
            region: self.aws_region.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            table_name: "users-test".to_string(),
            email_index: "byEmail".to_string(),
            aws_region: "eu-west-1".to_string(),
            aws_endpoint_url: Some("http://localhost:8000".to_string()),
        }
    }

    #[test]
    fn test_service_config_carries_index() {
        assert_eq!(
            sample_config().service_config(),
            ServiceConfig {
                email_index: "byEmail".to_string()
            }
        );
    }

    #[test]
    fn test_aws_settings() {
        let settings = sample_config().aws_settings();

        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(
            settings.endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("USERS_TABLE");
        env::remove_var("USERS_EMAIL_INDEX");
        env::remove_var("AWS_REGION");
        env::remove_var("AWS_ENDPOINT_URL");

        let config = Config::from_env();

        assert_eq!(config.table_name, "users");
        assert_eq!(config.email_index, "emailIndex");
        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.aws_endpoint_url, None);
    }
}

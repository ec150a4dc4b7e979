use crate::{
    domain::common::{PlatelensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiVisionClient,
};

pub type PlatelensService = Service<GeminiVisionClient>;

/// Wires the domain service to its infrastructure adapters. Fails before any
/// client is built when no credential is configured, so a misconfigured
/// process halts before it can accept input.
pub fn create_service(config: PlatelensConfig) -> Result<PlatelensService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::MissingCredential);
    }

    Ok(Service::new(GeminiVisionClient::new(config.llm)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::LlmConfig;

    fn config(key: &str) -> PlatelensConfig {
        PlatelensConfig {
            llm: LlmConfig {
                gemini_api_key: key.to_string(),
                gemini_model: "gemini-2.5-pro".to_string(),
            },
        }
    }

    #[test]
    fn missing_credential_halts_before_any_client_is_built() {
        let err = create_service(config("")).unwrap_err();
        assert_eq!(err, CoreError::MissingCredential);

        let err = create_service(config("   ")).unwrap_err();
        assert_eq!(err, CoreError::MissingCredential);
    }

    #[test]
    fn a_configured_credential_yields_a_service() {
        assert!(create_service(config("test-key")).is_ok());
    }
}

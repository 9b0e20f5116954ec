use async_trait::async_trait;
use genai::chat::{ChatMessage, ChatRequest};
use genai::resolver::{AuthData, AuthResolver};
use genai::{Client, ModelIden};
use tracing::{debug, error};

use super::{FallbackProvider, ProviderError};

/// Calls a hosted model through [`genai`].
///
/// The adapter is picked from the model name (`gemini-*`, `gpt-*`, ...).
/// The key is always read from `api_key_env`, whatever the adapter's usual
/// variable is. A missing key is reported as
/// [`ProviderError::MissingCredentials`] before any upstream call.
#[derive(Clone)]
pub struct GenaiProvider {
    client: Client,
    model: String,
    api_key_env: String,
}

impl std::fmt::Debug for GenaiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiProvider")
            .field("model", &self.model)
            .field("api_key_env", &self.api_key_env)
            .finish()
    }
}

impl GenaiProvider {
    pub fn new(model: impl Into<String>, api_key_env: impl Into<String>) -> Self {
        let api_key_env = api_key_env.into();
        let client = Client::builder()
            .with_auth_resolver(auth_resolver(api_key_env.clone()))
            .build();

        Self {
            client,
            model: model.into(),
            api_key_env,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    /// Returns `true` if the credential variable is set and non-blank.
    pub fn has_credentials(&self) -> bool {
        self.api_key().is_some()
    }

    /// The key the client will send, read from `api_key_env`.
    pub(crate) fn api_key(&self) -> Option<String> {
        read_api_key(&self.api_key_env)
    }
}

fn read_api_key(env_var: &str) -> Option<String> {
    std::env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolves every adapter's key from `api_key_env`.
///
/// A key that vanished after the up-front check still names `api_key_env` in
/// genai's error, never the adapter default.
fn auth_resolver(api_key_env: String) -> AuthResolver {
    AuthResolver::from_resolver_fn(
        move |_model: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
            let auth = match read_api_key(&api_key_env) {
                Some(key) => AuthData::from_single(key),
                None => AuthData::from_env(api_key_env.clone()),
            };
            Ok(Some(auth))
        },
    )
}

#[async_trait]
impl FallbackProvider for GenaiProvider {
    fn name(&self) -> &'static str {
        "genai"
    }

    async fn generate(&self, message: &str) -> Result<String, ProviderError> {
        if !self.has_credentials() {
            return Err(ProviderError::MissingCredentials {
                env_var: self.api_key_env.clone(),
            });
        }

        debug!(model = %self.model, "Calling generative provider");

        let request = ChatRequest::new(vec![ChatMessage::user(message)]);
        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| {
                error!(model = %self.model, error = %e, "Provider error");
                ProviderError::Upstream(e.to_string())
            })?;

        Ok(response.first_text().unwrap_or_default().to_string())
    }
}

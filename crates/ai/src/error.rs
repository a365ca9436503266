/// Errors from the provider clients.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A credential or setting the request needs was not configured.
    #[error("Missing configuration: {0} is not set")]
    MissingConfig(&'static str),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("{provider} request failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider returned a non-2xx status code.
    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        /// Upstream error message, extracted from the body when possible.
        message: String,
    },

    /// The provider answered 2xx but without the expected field.
    #[error("{provider} returned an unexpected response: {detail}")]
    InvalidResponse {
        provider: &'static str,
        detail: String,
    },
}

impl ProviderError {
    pub(crate) fn request(provider: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| ProviderError::Request { provider, source }
    }

    /// Build an [`ProviderError::Api`] from a failed response, consuming its body.
    pub(crate) async fn from_response(provider: &'static str, response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ProviderError::Api {
            provider,
            status,
            message: crate::normalize::upstream_error_message(&body),
        }
    }
}

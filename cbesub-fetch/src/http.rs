use std::time::Duration;

use log::debug;

use cbesub_core::errors::ProviderError;

const TIMEOUT_SECS: u64 = 60;

pub fn build_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .user_agent(concat!("cbesub/", env!("CARGO_PKG_VERSION")))
        .build()
}

///
/// GET a URL and return the body. Any non-2xx status is an error.
///
pub fn get_text(agent: &ureq::Agent, url: &str) -> Result<String, ProviderError> {
    debug!("GET {}", url);

    let response = match agent.get(url).call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(status, _)) => {
            return Err(ProviderError::Http {
                url: url.to_string(),
                status,
            });
        }
        Err(e) => {
            return Err(ProviderError::Request {
                url: url.to_string(),
                msg: e.to_string(),
            });
        }
    };

    response.into_string().map_err(|e| ProviderError::Request {
        url: url.to_string(),
        msg: format!("Failed reading response body: {}", e),
    })
}

/// The user agent sent on every fetch. A fixed desktop Chrome agent so
/// pages respond with the markup a browser would receive.
const AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// The `Accept` header sent on every fetch.
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// The `Accept-Language` header sent on every fetch.
const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// Get the default user agent for the fetcher.
pub fn get_ua() -> &'static str {
    AGENT
}

/// Structure to configure the page fetcher.
/// ```rust
/// use pare::configuration::Configuration;
/// let mut configuration = Configuration::new();
/// configuration.with_user_agent(Some("pare/0.1.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// User-Agent header for the request.
    pub user_agent: String,
    /// Accept header for the request.
    pub accept: String,
    /// Accept-Language header for the request.
    pub accept_language: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    /// Represents fetch configuration for a page. The defaults reproduce
    /// the browser-impersonation header set.
    pub fn new() -> Self {
        Self {
            user_agent: get_ua().into(),
            accept: ACCEPT.into(),
            accept_language: ACCEPT_LANGUAGE.into(),
        }
    }

    /// Add user agent to request. `None` restores the default agent.
    pub fn with_user_agent(&mut self, user_agent: Option<&str>) -> &mut Self {
        match user_agent {
            Some(agent) => self.user_agent = agent.into(),
            _ => self.user_agent = get_ua().into(),
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_headers() {
        let configuration = Configuration::new();

        assert!(configuration.user_agent.starts_with("Mozilla/5.0"));
        assert!(configuration.accept.starts_with("text/html"));
        assert_eq!(configuration, Configuration::default());
    }

    #[test]
    fn user_agent_override_and_reset() {
        let mut configuration = Configuration::new();

        configuration.with_user_agent(Some("pare/0.1.0"));
        assert_eq!(configuration.user_agent, "pare/0.1.0");

        configuration.with_user_agent(None);
        assert_eq!(configuration.user_agent, get_ua());
    }
}

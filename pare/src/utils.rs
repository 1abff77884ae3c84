use crate::configuration::Configuration;
use log::{error, info, log_enabled, Level};
use tokio::process::Command;

/// Perform a network request to a resource through an external `curl`
/// process, extracting the response body as text.
///
/// TLS verification is disabled and redirects are followed. The request
/// carries the configured browser-impersonation headers. Success requires
/// a zero exit status and non-empty captured output; anything else yields
/// `None` after the child's stderr and exit status are logged.
pub async fn fetch_page_html(url: &str, configuration: &Configuration) -> Option<String> {
    let mut cmd = Command::new("curl");

    cmd.arg("-k")
        .arg("-L")
        .arg("-A")
        .arg(&configuration.user_agent)
        .arg("-H")
        .arg(format!("Accept: {}", configuration.accept))
        .arg("-H")
        .arg(format!("Accept-Language: {}", configuration.accept_language))
        .arg(url);

    log("fetching", url);

    match cmd.output().await {
        Ok(output) => {
            if output.status.success() && !output.stdout.is_empty() {
                Some(String::from_utf8_lossy(&output.stdout).into_owned())
            } else {
                error!(
                    "fetch failed for {} - exit status: {:?} - {}",
                    url,
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                None
            }
        }
        Err(e) => {
            error!("unable to spawn fetch process for {} - {}", url, e);
            None
        }
    }
}

/// log to console if configuration verbose.
pub fn log(message: &'static str, data: impl AsRef<str>) {
    if log_enabled!(Level::Info) {
        info!("{message} - {}", data.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::fetch_page_html;
    use crate::configuration::Configuration;

    #[tokio::test]
    #[ignore = "requires curl and network access"]
    async fn fetch_real_page() {
        let configuration = Configuration::new();
        let html = fetch_page_html("https://choosealicense.com/", &configuration).await;

        assert!(html.is_some_and(|h| h.contains("<html")));
    }

    #[tokio::test]
    #[ignore = "requires curl"]
    async fn fetch_invalid_host_fails() {
        let configuration = Configuration::new();
        let html = fetch_page_html("https://invalid.invalid/", &configuration).await;

        assert!(html.is_none());
    }
}

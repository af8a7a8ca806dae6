use url::Url;

/// Hands a download URL to something that fetches it on its own, the way a
/// browser does for a link. Implementations return once the hand-off is done;
/// they never report whether the transfer itself succeeded.
pub trait DownloadLauncher: Send + Sync {
    fn trigger_browser_download(&self, url: &Url) -> anyhow::Result<()>;
}

/// Opens the URL with the user's default browser. Streaming and the saved
/// filename (`Content-Disposition`) are left to the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl DownloadLauncher for SystemBrowser {
    fn trigger_browser_download(&self, url: &Url) -> anyhow::Result<()> {
        log::info!("Opening download {} in the system browser", url);
        webbrowser::open(url.as_str())
            .map_err(|e| anyhow::anyhow!("no browser could open {}: {}", url, e))
    }
}

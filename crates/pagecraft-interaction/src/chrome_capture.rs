//! ChromeCapture - headless-browser page capture over the Chrome DevTools
//! Protocol.
//!
//! Loads a URL or an inline HTML document at the storefront's recommended
//! 860 px content width, sizes the viewport to the rendered content height,
//! and captures a full-page PNG. A fresh browser is launched per call and
//! shut down before returning; any CDP failure is fatal for that call.

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use pagecraft_core::agent::PageCapture;
use pagecraft_core::error::{PagecraftError, Result};
use std::path::Path;
use tokio::task::JoinHandle;

/// Viewport width recommended for storefront detail pages.
const VIEWPORT_WIDTH: u32 = 860;
/// Initial viewport height, replaced by the measured content height.
const INITIAL_HEIGHT: u32 = 10_000;

/// Page-capture capability backed by a headless Chromium instance.
#[derive(Clone, Default)]
pub struct ChromeCapture;

impl ChromeCapture {
    pub fn new() -> Self {
        Self
    }

    async fn launch() -> Result<(Browser, JoinHandle<()>)> {
        let config = BrowserConfig::builder()
            .window_size(VIEWPORT_WIDTH, INITIAL_HEIGHT)
            .build()
            .map_err(PagecraftError::upstream)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| PagecraftError::upstream(format!("Failed to launch browser: {e}")))?;

        // The handler stream must be driven for the browser to make progress.
        let handle = tokio::spawn(async move { while handler.next().await.is_some() {} });

        Ok((browser, handle))
    }

    async fn set_viewport(page: &Page, width: u32, height: u32) -> Result<()> {
        let params = SetDeviceMetricsOverrideParams::builder()
            .width(width as i64)
            .height(height as i64)
            .device_scale_factor(1.0)
            .mobile(false)
            .build()
            .map_err(PagecraftError::upstream)?;

        page.execute(params)
            .await
            .map_err(|e| PagecraftError::upstream(format!("Failed to set viewport: {e}")))?;
        Ok(())
    }

    async fn content_height(page: &Page) -> Result<u32> {
        let height: f64 = page
            .evaluate("document.body.scrollHeight")
            .await
            .map_err(|e| PagecraftError::upstream(format!("Failed to measure page: {e}")))?
            .into_value()
            .map_err(|e| PagecraftError::upstream(format!("Unexpected page height: {e}")))?;
        Ok(height.max(1.0) as u32)
    }

    fn screenshot_params() -> ScreenshotParams {
        ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build()
    }

    async fn shutdown(mut browser: Browser, handle: JoinHandle<()>) {
        if let Err(e) = browser.close().await {
            tracing::warn!("Browser close failed: {e}");
        }
        let _ = handle.await;
    }
}

#[async_trait]
impl PageCapture for ChromeCapture {
    async fn capture_url(&self, url: &str) -> Result<Vec<u8>> {
        let (browser, handle) = Self::launch().await?;

        let result = async {
            let page = browser
                .new_page(url)
                .await
                .map_err(|e| PagecraftError::upstream(format!("Failed to open {url}: {e}")))?;
            page.wait_for_navigation()
                .await
                .map_err(|e| PagecraftError::upstream(format!("Navigation failed: {e}")))?;

            Self::set_viewport(&page, VIEWPORT_WIDTH, INITIAL_HEIGHT).await?;

            page.screenshot(Self::screenshot_params())
                .await
                .map_err(|e| PagecraftError::upstream(format!("Screenshot failed: {e}")))
        }
        .await;

        Self::shutdown(browser, handle).await;
        result
    }

    async fn render_to_file(&self, html: &str, output: &Path) -> Result<()> {
        let (browser, handle) = Self::launch().await?;

        let result = async {
            let page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| PagecraftError::upstream(format!("Failed to open page: {e}")))?;

            page.set_content(html)
                .await
                .map_err(|e| PagecraftError::upstream(format!("Failed to load HTML: {e}")))?;
            page.wait_for_navigation()
                .await
                .map_err(|e| PagecraftError::upstream(format!("Navigation failed: {e}")))?;

            Self::set_viewport(&page, VIEWPORT_WIDTH, INITIAL_HEIGHT).await?;
            let height = Self::content_height(&page).await?;
            Self::set_viewport(&page, VIEWPORT_WIDTH, height).await?;

            page.save_screenshot(Self::screenshot_params(), output)
                .await
                .map_err(|e| PagecraftError::upstream(format!("Screenshot failed: {e}")))?;
            Ok(())
        }
        .await;

        Self::shutdown(browser, handle).await;
        result
    }
}

//! `fetch`-based content document loader.

use content_model::Locale;
use content_provider::{content_document_path, ContentFetchFuture, ContentFetcher};

/// Fetches content documents from the static origin by path convention.
///
/// A 404 maps to `Ok(None)` (document absent for that locale) so the provider's fallback
/// chain can distinguish "missing" from transport failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebContentFetcher;

impl ContentFetcher for WebContentFetcher {
    fn fetch_document<'a>(
        &'a self,
        locale: Locale,
        content_set: &'a str,
    ) -> ContentFetchFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move {
            let url = content_document_path(locale, content_set);
            fetch_text(&url).await
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<Option<String>, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| format!("fetch {url} failed: {err:?}"))?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| format!("fetch {url} returned a non-Response value"))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("fetch {url} returned status {}", response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|err| format!("fetch {url} body unavailable: {err:?}"))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|err| format!("fetch {url} body read failed: {err:?}"))?;
    let text = text_value
        .as_string()
        .ok_or_else(|| format!("fetch {url} body was not text"))?;
    Ok(Some(text))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(url: &str) -> Result<Option<String>, String> {
    let _ = url;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn non_wasm_fetch_reports_document_absent() {
        let fetcher = WebContentFetcher;
        let result = block_on(fetcher.fetch_document(Locale::En, "projects"));
        assert_eq!(result, Ok(None));
    }
}

//! Contact-form submission service contract and browser adapter.
//!
//! The form posts URL-encoded fields to a third-party form-processing endpoint. CAPTCHA
//! execution is an external collaborator: the site hands over whatever token it was
//! given, and the endpoint decides what to do with it.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`ContactSubmitService`] implementations.
pub type ContactSubmitFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// One contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRequest {
    /// Sender name.
    pub name: String,
    /// Sender reply address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// CAPTCHA token from the external challenge flow, when one ran.
    pub captcha_token: Option<String>,
}

/// Posts one contact-form submission to the configured endpoint.
pub trait ContactSubmitService {
    /// Submits the request; `Ok(())` means the endpoint accepted it.
    fn submit<'a>(
        &'a self,
        request: &'a ContactRequest,
    ) -> ContactSubmitFuture<'a, Result<(), String>>;
}

/// Submission adapter that accepts everything without network access, for tests and for
/// compositions with no endpoint configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopContactSubmitService;

impl ContactSubmitService for NoopContactSubmitService {
    fn submit<'a>(
        &'a self,
        _request: &'a ContactRequest,
    ) -> ContactSubmitFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

/// Browser submission adapter posting URL-encoded form fields via `fetch`.
#[derive(Debug, Clone)]
pub struct WebContactSubmitService {
    endpoint: String,
}

impl WebContactSubmitService {
    /// Creates an adapter posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ContactSubmitService for WebContactSubmitService {
    fn submit<'a>(
        &'a self,
        request: &'a ContactRequest,
    ) -> ContactSubmitFuture<'a, Result<(), String>> {
        Box::pin(post_form(&self.endpoint, request))
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_form(endpoint: &str, request: &ContactRequest) -> Result<(), String> {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let params = web_sys::UrlSearchParams::new()
        .map_err(|err| format!("UrlSearchParams unavailable: {err:?}"))?;
    params.append("name", &request.name);
    params.append("email", &request.email);
    params.append("message", &request.message);
    if let Some(token) = &request.captcha_token {
        params.append("token", token);
    }

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    // Form-processing endpoints typically lack CORS headers; the opaque response still
    // tells us the request went out, which is all the status line needs.
    init.set_mode(web_sys::RequestMode::NoCors);
    init.set_body(&JsValue::from(params));

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    JsFuture::from(window.fetch_with_str_and_init(endpoint, &init))
        .await
        .map_err(|err| format!("contact submission failed: {err:?}"))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_form(endpoint: &str, request: &ContactRequest) -> Result<(), String> {
    let _ = (endpoint, request);
    Err("contact submission requires a browser environment".to_string())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_service_accepts_submissions() {
        let service = NoopContactSubmitService;
        assert_eq!(block_on(service.submit(&ContactRequest::default())), Ok(()));
    }

    #[test]
    fn non_wasm_web_service_reports_missing_browser() {
        let service = WebContactSubmitService::new("https://forms.example.com/post");
        let result = block_on(service.submit(&ContactRequest::default()));
        assert!(result.is_err());
    }
}

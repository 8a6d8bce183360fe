//! `HtmlImageElement`-based asset existence probe.

use asset_resolver::{AssetProbe, AssetProbeFuture};

/// Probes for an asset by letting the browser attempt to load it as an image.
///
/// Success means the image decoded; any error event (404, non-image payload, network
/// failure) reads as "not found". The browser's own HTTP cache makes the eventual real
/// `<img>` render cheap after a successful probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebImageProbe;

impl AssetProbe for WebImageProbe {
    fn probe<'a>(&'a self, path: &'a str) -> AssetProbeFuture<'a, bool> {
        Box::pin(probe_image(path))
    }
}

#[cfg(target_arch = "wasm32")]
async fn probe_image(path: &str) -> bool {
    use std::{cell::RefCell, rc::Rc};

    use wasm_bindgen::{closure::Closure, JsCast};

    let Ok(image) = web_sys::HtmlImageElement::new() else {
        return false;
    };

    let (sender, receiver) = futures::channel::oneshot::channel::<bool>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_load = {
        let sender = sender.clone();
        Closure::once(move |_: web_sys::Event| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(true);
            }
        })
    };
    let on_error = {
        let sender = sender.clone();
        Closure::once(move |_: web_sys::Event| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(false);
            }
        })
    };

    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(path);

    // A dropped sender can only mean the closures were collected without firing.
    receiver.await.unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
async fn probe_image(path: &str) -> bool {
    let _ = path;
    false
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn non_wasm_probe_reports_not_found() {
        let probe = WebImageProbe;
        assert!(!block_on(probe.probe("/assets/skills/rust.png")));
    }
}

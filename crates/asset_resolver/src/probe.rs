//! Asset existence-probe service contract and test adapters.

use std::{
    cell::RefCell,
    collections::HashSet,
    future::Future,
    pin::Pin,
    rc::Rc,
};

/// Object-safe boxed future used by [`AssetProbe`] implementations.
pub type AssetProbeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Existence oracle for one candidate asset path.
///
/// The resolver only needs a yes/no answer per path; headers, caching policy, and image
/// decoding stay behind the adapter. The browser adapter lives in `platform_web`.
pub trait AssetProbe {
    /// Reports whether a loadable image exists at `path`.
    fn probe<'a>(&'a self, path: &'a str) -> AssetProbeFuture<'a, bool>;
}

/// Probe adapter that finds nothing, for unsupported targets and baseline tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAssetProbe;

impl AssetProbe for NoopAssetProbe {
    fn probe<'a>(&'a self, _path: &'a str) -> AssetProbeFuture<'a, bool> {
        Box::pin(async { false })
    }
}

/// Probe adapter answering from a fixed path set, recording every attempt in order.
///
/// Tests assert on [`StaticAssetProbe::attempts`] to prove probe ordering and counts.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetProbe {
    existing: Rc<HashSet<String>>,
    attempts: Rc<RefCell<Vec<String>>>,
}

impl StaticAssetProbe {
    /// Creates a probe that reports success for exactly the given paths.
    pub fn with_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            existing: Rc::new(paths.into_iter().map(Into::into).collect()),
            attempts: Rc::default(),
        }
    }

    /// Every probed path, in probe order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.borrow().clone()
    }

    /// Number of probes issued so far.
    pub fn attempt_count(&self) -> usize {
        self.attempts.borrow().len()
    }
}

impl AssetProbe for StaticAssetProbe {
    fn probe<'a>(&'a self, path: &'a str) -> AssetProbeFuture<'a, bool> {
        Box::pin(async move {
            self.attempts.borrow_mut().push(path.to_string());
            self.existing.contains(path)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn static_probe_answers_and_records_attempts() {
        let probe = StaticAssetProbe::with_paths(["/a.png"]);
        let probe_obj: &dyn AssetProbe = &probe;
        assert!(block_on(probe_obj.probe("/a.png")));
        assert!(!block_on(probe_obj.probe("/b.png")));
        assert_eq!(probe.attempts(), vec!["/a.png", "/b.png"]);
    }

    #[test]
    fn noop_probe_never_finds_anything() {
        let probe = NoopAssetProbe;
        assert!(!block_on(probe.probe("/anything.png")));
    }
}

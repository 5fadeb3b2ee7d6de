//! Test doubles shared by the endpoint tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use bytes::Bytes;

use crate::error::FetchError;
use crate::fetcher::PageFetcher;

/// A canned fetcher: serves fixture bodies in order and records every
/// requested URL. Clones share the same request log and body queue.
#[derive(Debug, Clone)]
pub(crate) struct FixtureFetcher {
    bodies: Rc<RefCell<VecDeque<&'static str>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl FixtureFetcher {
    /// Serve the same body for every request.
    pub(crate) fn serving(body: &'static str) -> Self {
        Self::serving_sequence(&[body])
    }

    /// Serve one body per request, in order; the last body repeats.
    pub(crate) fn serving_sequence(bodies: &[&'static str]) -> Self {
        Self {
            bodies: Rc::new(RefCell::new(bodies.iter().copied().collect())),
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The URLs requested so far, in order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageFetcher for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        self.requests.borrow_mut().push(url.to_owned());
        let mut bodies = self.bodies.borrow_mut();
        let body = if bodies.len() > 1 {
            bodies.pop_front().unwrap_or_default()
        } else {
            bodies.front().copied().unwrap_or_default()
        };
        Ok(Bytes::from_static(body.as_bytes()))
    }
}

//! Canned-reply transport for exercising the request loop and actions in
//! native tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use records::{ApiError, TokenPair};
use serde_json::Value;

use super::api::{Method, Transport};

/// One exchange as the transport saw it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Call {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub(crate) struct Scripted {
    replies: RefCell<VecDeque<(u16, String)>>,
    calls: RefCell<Vec<Call>>,
    access: RefCell<Option<String>>,
    refresh: RefCell<Option<String>>,
    expired: Cell<bool>,
}

impl Scripted {
    pub(crate) fn with_tokens(access: &str, refresh: Option<&str>) -> Self {
        let scripted = Self::default();
        scripted.access.replace(Some(access.to_owned()));
        scripted.refresh.replace(refresh.map(str::to_owned));
        scripted
    }

    /// Queue the next response.
    pub(crate) fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.replies.borrow_mut().push_back((status, body.into()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn tokens(&self) -> (Option<String>, Option<String>) {
        (self.access.borrow().clone(), self.refresh.borrow().clone())
    }

    pub(crate) fn expired(&self) -> bool {
        self.expired.get()
    }
}

impl Transport for Scripted {
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<(u16, String), ApiError> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_owned(),
            query: query.to_vec(),
            bearer: bearer.map(str::to_owned),
            body: body.cloned(),
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::Network(format!("no reply scripted for {path}")))
    }

    fn access_token(&self) -> Option<String> {
        self.access.borrow().clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.borrow().clone()
    }

    fn store_tokens(&self, pair: &TokenPair) {
        self.access.replace(Some(pair.access_token.clone()));
        self.refresh.replace(Some(pair.refresh_token.clone()));
    }

    fn expire(&self) {
        self.access.replace(None);
        self.refresh.replace(None);
        self.expired.set(true);
    }
}

thread_local! {
    static INSTALLED: RefCell<Option<Rc<Scripted>>> = const { RefCell::new(None) };
}

/// Route this thread's requests through `scripted` until the guard drops.
pub(crate) fn install(scripted: Scripted) -> Installed {
    let scripted = Rc::new(scripted);
    INSTALLED.with(|slot| slot.replace(Some(Rc::clone(&scripted))));
    Installed(scripted)
}

pub(crate) fn installed() -> Option<Rc<Scripted>> {
    INSTALLED.with(|slot| slot.borrow().clone())
}

pub(crate) struct Installed(Rc<Scripted>);

impl std::ops::Deref for Installed {
    type Target = Scripted;

    fn deref(&self) -> &Scripted {
        &self.0
    }
}

impl Drop for Installed {
    fn drop(&mut self) {
        INSTALLED.with(|slot| slot.replace(None));
    }
}

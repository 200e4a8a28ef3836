//! Application Context
//!
//! Services and shared signals provided via Leptos Context API.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::CONFIG;
use crate::storage::{BrowserStore, KeyValueStore};

/// Long-lived collaborators shared by every page
#[derive(Clone)]
pub struct Services {
    pub api: ApiClient,
    /// `userEmail`, `studentID`
    pub local: Arc<dyn KeyValueStore>,
    /// `adminKey`
    pub session: Arc<dyn KeyValueStore>,
}

impl Services {
    pub fn browser() -> Self {
        Self {
            api: ApiClient::new(),
            local: Arc::new(BrowserStore::local()),
            session: Arc::new(BrowserStore::session()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Inline message shown above the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// App-wide context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services>,
    notice: RwSignal<Option<Notice>>,
    notice_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        Self {
            services: StoredValue::new(services),
            notice: RwSignal::new(None),
            notice_seq: StoredValue::new(0),
        }
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }

    pub fn notice(&self) -> ReadSignal<Option<Notice>> {
        self.notice.read_only()
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(NoticeKind::Info, text.into());
    }

    /// Errors stay until dismissed or replaced
    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    fn show(&self, kind: NoticeKind, text: String) {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.notice.set(Some(Notice { id, kind, text }));

        if kind == NoticeKind::Error {
            return;
        }
        let notice = self.notice;
        spawn_local(async move {
            TimeoutFuture::new(CONFIG.notice_timeout_ms).await;
            // Leave newer notices alone
            if notice.get_untracked().is_some_and(|n| n.id == id) {
                notice.set(None);
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

//! Session
//!
//! Per-session ephemeral state: user-facing notices and the one-shot
//! post-add popup trigger. Both are explicit consume-and-clear queues, so no
//! flag can leak across renders.

use rusty_money::{Money, iso::Currency};

use crate::catalog::ProductKey;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational, shown once on the next render.
    Notice,

    /// Something the shopper should act on.
    Error,
}

/// A user-facing message queued for the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,

    /// Message text
    pub message: String,
}

/// Data backing the post-add popup.
///
/// The category link is cosmetic: when it cannot be resolved the popup still
/// shows title, price and image.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView<'a> {
    /// Product title
    pub title: String,

    /// Regular price of the product
    pub price: Money<'a, Currency>,

    /// Product image URL, when one exists
    pub image: Option<String>,

    /// Link to the product's most specific category page, when resolvable
    pub category_url: Option<String>,
}

/// Per-session ephemeral state.
#[derive(Debug, Default)]
pub struct Session {
    notices: Vec<Notice>,
    pending_popup: Option<ProductKey>,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notice for the next render.
    pub fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }

    /// Drain all queued notices in one step.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Arm the one-shot popup for the given product, replacing any pending one.
    pub fn queue_popup(&mut self, product: ProductKey) {
        self.pending_popup = Some(product);
    }

    /// Whether a popup is waiting for the next render.
    #[must_use]
    pub fn has_pending_popup(&self) -> bool {
        self.pending_popup.is_some()
    }

    pub(crate) fn take_popup_product(&mut self) -> Option<ProductKey> {
        self.pending_popup.take()
    }
}

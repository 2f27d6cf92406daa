//! Background advisor requests.
//!
//! Each request runs on its own thread and reports back over an mpsc
//! channel that the UI loop drains with `try_recv`. Replies carry the
//! ticket they were issued under; the receiver drops any reply whose
//! ticket no longer matches what it is waiting for.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use super::{recommend_or_fallback, review_or_fallback, Advisor};
use crate::build_state::BuildState;
use crate::types::Category;

/// What an advisor request was for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Review,
    Recommendation(Category),
}

/// Identifies a request. `session` is the wizard session it was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub session: u64,
    pub kind: RequestKind,
}

impl RequestTicket {
    pub fn review(session: u64) -> Self {
        Self {
            session,
            kind: RequestKind::Review,
        }
    }

    pub fn recommendation(session: u64, category: Category) -> Self {
        Self {
            session,
            kind: RequestKind::Recommendation(category),
        }
    }
}

/// Reply from a worker thread. `text` is already the fallback on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorMessage {
    pub ticket: RequestTicket,
    pub text: String,
}

/// Issues advisor requests on background threads.
pub struct AdvisorWorker {
    advisor: Arc<dyn Advisor>,
    tx: Sender<AdvisorMessage>,
}

impl AdvisorWorker {
    /// Create a worker and the receiver its replies arrive on.
    pub fn new(advisor: Arc<dyn Advisor>) -> (Self, Receiver<AdvisorMessage>) {
        let (tx, rx) = mpsc::channel();
        (Self { advisor, tx }, rx)
    }

    /// Request a review of `build`. The build is a snapshot.
    pub fn request_review(&self, session: u64, build: BuildState) -> RequestTicket {
        let ticket = RequestTicket::review(session);
        self.spawn(ticket, build);
        ticket
    }

    /// Request recommendations for `category` given `build`.
    pub fn request_recommendation(
        &self,
        session: u64,
        category: Category,
        build: BuildState,
    ) -> RequestTicket {
        let ticket = RequestTicket::recommendation(session, category);
        self.spawn(ticket, build);
        ticket
    }

    fn spawn(&self, ticket: RequestTicket, build: BuildState) {
        let advisor = Arc::clone(&self.advisor);
        let tx = self.tx.clone();
        tracing::debug!("Spawning advisor request {:?}", ticket);

        thread::spawn(move || {
            let text = match ticket.kind {
                RequestKind::Review => review_or_fallback(advisor.as_ref(), &build),
                RequestKind::Recommendation(category) => {
                    recommend_or_fallback(advisor.as_ref(), category, &build)
                }
            };
            if tx.send(AdvisorMessage { ticket, text }).is_err() {
                // Receiver dropped; the app has exited
                tracing::debug!("Advisor reply for {:?} discarded", ticket);
            }
        });
    }
}

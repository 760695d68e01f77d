#![allow(dead_code)]

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::mpsc;

use harbor::{BoxError, CloseSource, Closeable, ErrorSource, InfoSource, WarnSource};

/// Test service fulfilling every emitter role; keeps the senders it is
/// handed at registration so tests can push through them.
#[derive(Default)]
pub struct Probe {
    pub errors: OnceLock<mpsc::Sender<BoxError>>,
    pub warns: OnceLock<mpsc::Sender<BoxError>>,
    pub closes: OnceLock<mpsc::Sender<BoxError>>,
    pub infos: OnceLock<mpsc::Sender<String>>,
}

impl ErrorSource for Probe {
    fn attach_errors(&self, tx: mpsc::Sender<BoxError>) {
        let _ = self.errors.set(tx);
    }
}

impl WarnSource for Probe {
    fn attach_warns(&self, tx: mpsc::Sender<BoxError>) {
        let _ = self.warns.set(tx);
    }
}

impl CloseSource for Probe {
    fn attach_closed(&self, tx: mpsc::Sender<BoxError>) {
        let _ = self.closes.set(tx);
    }
}

impl InfoSource for Probe {
    fn attach_infos(&self, tx: mpsc::Sender<String>) {
        let _ = self.infos.set(tx);
    }
}

/// Test closeable that records how often it was closed and optionally fails.
pub struct Closer {
    fail_with: Option<&'static str>,
    times_closed: AtomicUsize,
}

impl Closer {
    pub fn ok() -> Self {
        Self {
            fail_with: None,
            times_closed: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &'static str) -> Self {
        Self {
            fail_with: Some(message),
            times_closed: AtomicUsize::new(0),
        }
    }

    pub fn was_closed(&self) -> bool {
        self.times_closed() > 0
    }

    pub fn times_closed(&self) -> usize {
        self.times_closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Closeable for Closer {
    async fn close(&self) -> Result<(), BoxError> {
        self.times_closed.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(message) => Err(message.into()),
            None => Ok(()),
        }
    }
}

//! History store for Scout.
//!
//! An append-biased, capacity-bounded log of past searches, newest first,
//! persisted in the `history_items` storage slot. Every mutation
//! re-serializes the full list and hands it to a background writer thread;
//! mutations return as soon as the in-memory list is updated and callers
//! never observe persistence failures. Failed writes are dropped after
//! logging, with the outcome visible through [`last_write_status`].
//!
//! Mutations take `&mut self`, so concurrent callers are serialized by the
//! borrow checker; reads share the in-memory snapshot and never touch disk.
//!
//! [`last_write_status`]: HistoryStoreTrait::last_write_status

use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::warn;
use uuid::Uuid;

use crate::storage::{Storage, HISTORY_SLOT};
use crate::types::history::HistoryItem;

/// Maximum number of retained items. Insertion beyond capacity evicts the
/// oldest entries, FIFO by insertion order.
pub const HISTORY_CAPACITY: usize = 100;

/// Observable outcome of the most recent durable write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// No write has been attempted yet.
    Idle,
    Completed,
    /// The write failed and was dropped; no retry.
    Failed,
}

enum WriterJob {
    Write(String),
    /// Acknowledged once every job queued before it has been processed.
    Flush(SyncSender<()>),
}

/// Trait defining history store operations.
pub trait HistoryStoreTrait {
    fn add(&mut self, item: HistoryItem);
    fn delete(&mut self, id: &Uuid);
    fn clear(&mut self);
    fn list(&self) -> &[HistoryItem];
    fn last_write_status(&self) -> WriteStatus;
    fn flush(&self);
}

/// History store backed by a storage slot and a dedicated writer thread.
pub struct HistoryStore {
    items: Vec<HistoryItem>,
    jobs: Sender<WriterJob>,
    last_write: Arc<Mutex<WriteStatus>>,
    writer: Option<JoinHandle<()>>,
}

impl HistoryStore {
    /// Opens the store: loads persisted history and starts the writer thread.
    ///
    /// An absent or malformed history slot degrades to an empty list; decode
    /// problems are logged, never surfaced. A successfully decoded list is
    /// re-sorted by capture time, newest first, before becoming the active
    /// in-memory state.
    pub fn open(storage: Arc<Mutex<Storage>>) -> Self {
        let items = Self::load(&storage);
        let (jobs, rx) = mpsc::channel();
        let last_write = Arc::new(Mutex::new(WriteStatus::Idle));
        let writer = Some(Self::spawn_writer(storage, rx, last_write.clone()));
        Self {
            items,
            jobs,
            last_write,
            writer,
        }
    }

    fn load(storage: &Arc<Mutex<Storage>>) -> Vec<HistoryItem> {
        let payload = match storage.lock() {
            Ok(storage) => match storage.read_slot(HISTORY_SLOT) {
                Ok(Some(payload)) => payload,
                Ok(None) => return Vec::new(),
                Err(e) => {
                    warn!("failed to read history slot, starting empty: {}", e);
                    return Vec::new();
                }
            },
            Err(_) => {
                warn!("storage lock poisoned while loading history, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryItem>>(&payload) {
            Ok(mut items) => {
                items.sort_by(|a, b| b.time.cmp(&a.time));
                items.truncate(HISTORY_CAPACITY);
                items
            }
            Err(e) => {
                warn!("malformed history payload, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn spawn_writer(
        storage: Arc<Mutex<Storage>>,
        jobs: Receiver<WriterJob>,
        last_write: Arc<Mutex<WriteStatus>>,
    ) -> JoinHandle<()> {
        thread::spawn(move || {
            for job in jobs {
                match job {
                    WriterJob::Write(payload) => {
                        let status = match storage.lock() {
                            Ok(storage) => match storage.write_slot(HISTORY_SLOT, &payload) {
                                Ok(()) => WriteStatus::Completed,
                                Err(e) => {
                                    warn!("history write failed, dropped: {}", e);
                                    WriteStatus::Failed
                                }
                            },
                            Err(_) => {
                                warn!("storage lock poisoned, history write dropped");
                                WriteStatus::Failed
                            }
                        };
                        if let Ok(mut last) = last_write.lock() {
                            *last = status;
                        }
                    }
                    WriterJob::Flush(ack) => {
                        // Channel order guarantees every earlier write has
                        // been processed by now.
                        let _ = ack.send(());
                    }
                }
            }
        })
    }

    /// Serializes the current list and queues it for the writer thread.
    /// Fire-and-forget: any failure from here on is logged and dropped.
    fn schedule_persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(payload) => {
                if self.jobs.send(WriterJob::Write(payload)).is_err() {
                    warn!("history writer is gone, write dropped");
                }
            }
            Err(e) => warn!("failed to serialize history, write dropped: {}", e),
        }
    }
}

impl HistoryStoreTrait for HistoryStore {
    /// Inserts at the head and truncates to capacity, then schedules a
    /// durable write. Returns once the in-memory list reflects the insert;
    /// the disk write may still be pending.
    fn add(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
        self.items.truncate(HISTORY_CAPACITY);
        self.schedule_persist();
    }

    /// Removes the first item matching `id`. An absent id is a no-op, not an
    /// error; persistence is scheduled only when something was removed.
    fn delete(&mut self, id: &Uuid) {
        if let Some(position) = self.items.iter().position(|item| &item.id == id) {
            self.items.remove(position);
            self.schedule_persist();
        }
    }

    /// Empties the list and schedules a durable write.
    fn clear(&mut self) {
        self.items.clear();
        self.schedule_persist();
    }

    /// Current in-memory snapshot, newest first. Never blocks on persistence.
    fn list(&self) -> &[HistoryItem] {
        &self.items
    }

    /// Outcome of the most recent completed write attempt. The durable slot
    /// may lag the in-memory list by one write cycle at any instant.
    fn last_write_status(&self) -> WriteStatus {
        self.last_write
            .lock()
            .map(|status| *status)
            .unwrap_or(WriteStatus::Failed)
    }

    /// Blocks until the writer has drained every queued write. Intended for
    /// shutdown and tests; normal operation never waits on persistence.
    fn flush(&self) {
        let (ack, done) = mpsc::sync_channel(0);
        if self.jobs.send(WriterJob::Flush(ack)).is_ok() {
            let _ = done.recv();
        }
    }
}

impl Drop for HistoryStore {
    fn drop(&mut self) {
        // Replace the live sender so the writer's channel closes, letting it
        // drain remaining jobs and exit before we join.
        let (detached, _) = mpsc::channel();
        drop(std::mem::replace(&mut self.jobs, detached));
        if let Some(writer) = self.writer.take() {
            let _ = writer.join();
        }
    }
}

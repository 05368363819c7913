#![allow(dead_code)]

use std::process::{Command, Output};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use parking_lot::Mutex;
use tempfile::TempDir;

use dashnav::navigator::{
    DraftOrderCreated, DraftOrderCreator, InputHandle, ListenerId, LookupRequest, MutationError,
    Navigator, OrderLookup,
};

/// Helper struct to run dashnav commands in an isolated temp directory
pub struct DashnavTest {
    pub temp_dir: TempDir,
}

impl DashnavTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        DashnavTest { temp_dir }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dashnav"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("DASHNAV_ROOT")
            .env_remove("DASHNAV_API_URL")
            .env_remove("DASHNAV_TOKEN")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute dashnav command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} unexpectedly succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".dashnav");
        std::fs::create_dir_all(&dir).expect("Failed to create .dashnav dir");
        std::fs::write(dir.join("config.yaml"), content).expect("Failed to write config");
    }
}

/// Lookup that records every request instead of fetching
#[derive(Default)]
pub struct RecordingLookup {
    requests: Mutex<Vec<LookupRequest>>,
}

impl RecordingLookup {
    pub fn requests(&self) -> Vec<LookupRequest> {
        self.requests.lock().clone()
    }
}

impl OrderLookup for RecordingLookup {
    fn get_order_data(&self, request: LookupRequest) {
        self.requests.lock().push(request);
    }
}

/// Input that counts listener attach/detach calls
#[derive(Default)]
pub struct RecordingInput {
    next_id: AtomicU64,
    attached: AtomicUsize,
    detached: AtomicUsize,
    max_live: AtomicUsize,
    live: Mutex<Vec<ListenerId>>,
}

impl RecordingInput {
    pub fn attached(&self) -> usize {
        self.attached.load(Ordering::SeqCst)
    }

    pub fn detached(&self) -> usize {
        self.detached.load(Ordering::SeqCst)
    }

    pub fn live(&self) -> usize {
        self.live.lock().len()
    }

    /// Highest number of simultaneously attached listeners seen
    pub fn max_live(&self) -> usize {
        self.max_live.load(Ordering::SeqCst)
    }
}

impl InputHandle for RecordingInput {
    fn attach_key_listener(&self) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.attached.fetch_add(1, Ordering::SeqCst);
        let mut live = self.live.lock();
        live.push(id);
        self.max_live.fetch_max(live.len(), Ordering::SeqCst);
        id
    }

    fn detach_key_listener(&self, id: ListenerId) {
        self.detached.fetch_add(1, Ordering::SeqCst);
        self.live.lock().retain(|l| *l != id);
    }
}

/// Navigator recording every URL; clones share the record
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    urls: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.urls.lock().push(url.to_string());
    }
}

/// Draft-order mutation returning a canned result
pub struct StubDraftOrderCreator {
    result: DraftOrderCreated,
    calls: AtomicUsize,
}

impl StubDraftOrderCreator {
    pub fn succeeding(order_id: &str) -> Self {
        Self {
            result: DraftOrderCreated {
                errors: vec![],
                order_id: Some(order_id.to_string()),
            },
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(code: &str) -> Self {
        Self {
            result: DraftOrderCreated {
                errors: vec![MutationError {
                    field: Some("channelId".to_string()),
                    code: code.to_string(),
                    message: Some("Channel is required".to_string()),
                }],
                order_id: None,
            },
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DraftOrderCreator for StubDraftOrderCreator {
    async fn create_draft_order(&self) -> dashnav::Result<DraftOrderCreated> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}

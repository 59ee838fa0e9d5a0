// src/util/testing.rs

use anyhow::Result;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{CompletionClient, NoteStore, Notifier};
use crate::domain::{ChatRequest, DomainError};

enum ScriptedResponse {
    Content(String),
    NoContent,
    Error(String),
}

/// Scripted completion client for testing the generator and processor
///
/// Responses are handed out in the order they were configured, one per
/// request. Every request is recorded for later inspection.
///
/// # Examples
///
/// ```
/// use flashcards_llm::util::testing::MockCompletionClient;
///
/// let mock = MockCompletionClient::builder()
///     .with_response("Q1::A1\nQ2::A2")
///     .with_error("rate limited")
///     .build();
/// ```
pub struct MockCompletionClient {
    responses: RefCell<VecDeque<ScriptedResponse>>,
    requests: RefCell<Vec<ChatRequest>>,
}

impl MockCompletionClient {
    pub fn builder() -> MockCompletionClientBuilder {
        MockCompletionClientBuilder::new()
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.borrow().clone()
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(&self, request: &ChatRequest) -> Result<Option<String>, DomainError> {
        self.requests.borrow_mut().push(request.clone());

        match self.responses.borrow_mut().pop_front() {
            Some(ScriptedResponse::Content(content)) => Ok(Some(content)),
            Some(ScriptedResponse::NoContent) => Ok(None),
            Some(ScriptedResponse::Error(msg)) => Err(DomainError::Api(msg)),
            None => Err(DomainError::Api("no scripted response left".to_string())),
        }
    }
}

/// Builder for MockCompletionClient
pub struct MockCompletionClientBuilder {
    responses: VecDeque<ScriptedResponse>,
}

impl MockCompletionClientBuilder {
    pub fn new() -> Self {
        Self {
            responses: VecDeque::new(),
        }
    }

    /// Answer the next request with `content`
    pub fn with_response(mut self, content: &str) -> Self {
        self.responses
            .push_back(ScriptedResponse::Content(content.to_string()));
        self
    }

    /// Answer the next request without any message content
    pub fn with_no_content(mut self) -> Self {
        self.responses.push_back(ScriptedResponse::NoContent);
        self
    }

    /// Fail the next request with an API error
    pub fn with_error(mut self, message: &str) -> Self {
        self.responses
            .push_back(ScriptedResponse::Error(message.to_string()));
        self
    }

    pub fn build(self) -> MockCompletionClient {
        MockCompletionClient {
            responses: RefCell::new(self.responses),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Default for MockCompletionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Note store keeping notes in memory, keyed and listed by path
pub struct InMemoryNoteStore {
    notes: BTreeMap<PathBuf, String>,
    write_failures: HashSet<PathBuf>,
    writes: Vec<PathBuf>,
}

impl InMemoryNoteStore {
    pub fn builder() -> InMemoryNoteStoreBuilder {
        InMemoryNoteStoreBuilder::new()
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.notes.get(path.as_ref()).map(|s| s.as_str())
    }

    /// Paths written so far, in order
    pub fn writes(&self) -> &[PathBuf] {
        &self.writes
    }
}

impl NoteStore for InMemoryNoteStore {
    fn read(&self, path: &Path) -> Result<String, DomainError> {
        self.notes
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::Store(format!("{}: not found", path.display())))
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<(), DomainError> {
        if self.write_failures.contains(path) {
            return Err(DomainError::Store(format!(
                "{}: permission denied",
                path.display()
            )));
        }
        self.notes.insert(path.to_path_buf(), text.to_string());
        self.writes.push(path.to_path_buf());
        Ok(())
    }

    fn list_notes(&self, folder: &Path, recursive: bool) -> Result<Vec<PathBuf>, DomainError> {
        Ok(self
            .notes
            .keys()
            .filter(|p| {
                if recursive {
                    p.starts_with(folder)
                } else {
                    p.parent() == Some(folder)
                }
            })
            .cloned()
            .collect())
    }
}

/// Builder for InMemoryNoteStore
pub struct InMemoryNoteStoreBuilder {
    notes: BTreeMap<PathBuf, String>,
    write_failures: HashSet<PathBuf>,
}

impl InMemoryNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            write_failures: HashSet::new(),
        }
    }

    pub fn with_note(mut self, path: impl Into<PathBuf>, text: &str) -> Self {
        self.notes.insert(path.into(), text.to_string());
        self
    }

    /// Make every write to `path` fail
    pub fn with_write_failure(mut self, path: impl Into<PathBuf>) -> Self {
        self.write_failures.insert(path.into());
        self
    }

    pub fn build(self) -> InMemoryNoteStore {
        InMemoryNoteStore {
            notes: self.notes,
            write_failures: self.write_failures,
            writes: Vec::new(),
        }
    }
}

impl Default for InMemoryNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifier collecting messages instead of showing them
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

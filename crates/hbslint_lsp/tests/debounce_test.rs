mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower_lsp::lsp_types::*;
use tower_lsp::{LanguageServer, LspService};
use tracing_subscriber::prelude::*;

use hbslint_lsp::Backend;

struct LogCounter(Arc<Mutex<usize>>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        if visitor.0.contains("Linting template") {
            *self.0.lock().unwrap() += 1;
        }
    }
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            use std::fmt::Write;
            let _ = write!(self.0, "{:?}", value);
        }
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}

#[tokio::test]
async fn test_did_change_lint_frequency() {
    let counter = Arc::new(Mutex::new(0));
    let log_layer = LogCounter(counter.clone());
    let subscriber = tracing_subscriber::registry().with(log_layer);

    // Try to set global default. If it fails, we might miss logs.
    let _ = tracing::subscriber::set_global_default(subscriber);

    // A project with a config file but no node_modules: every lint that
    // fires fails to spawn, which is fine for counting.
    let temp_dir = tempfile::tempdir().unwrap();
    common::create_project(temp_dir.path());

    let (service, _) = LspService::new(Backend::new);

    let _ = service
        .inner()
        .initialize(InitializeParams {
            initialization_options: Some(serde_json::json!({ "debounceMs": 200 })),
            ..Default::default()
        })
        .await;
    service.inner().initialized(InitializedParams {}).await;

    // Send 5 rapid changes, alternating between two templates.
    for i in 1..=5 {
        let path = temp_dir
            .path()
            .join(format!("app/templates/t{}.hbs", i % 2));
        service
            .inner()
            .did_change(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier {
                    uri: Url::from_file_path(path).unwrap(),
                    version: i,
                },
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: format!("<p>Change {}</p>", i),
                }],
            })
            .await;

        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    // Wait past the debounce delay
    tokio::time::sleep(Duration::from_millis(500)).await;

    let count = *counter.lock().unwrap();
    println!("Total lints: {}", count);

    assert_eq!(count, 1, "Expected one lint for the whole burst");
}

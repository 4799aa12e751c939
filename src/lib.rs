//! AutoIt Language Server implementation.
//!
//! Serves hover, completion and signature help for AutoIt scripts from a
//! registry of documented function signatures.

use std::sync::{Arc, OnceLock};

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};
use tracing::{debug, info};

mod document;
pub mod error;
pub mod format;
mod library;
mod lsp;
mod registry;
pub mod settings;
mod types;

pub use document::{word_at, DocumentState, DocumentStore, LineIndex, Word, WordKind};
pub use error::RegistryError;
pub use library::{bundled_module, bundled_modules, LibraryModule};
pub use lsp::{
    completion_at_position, hover_at_position, hover_markdown, signature_help_at_position,
    signature_to_completion, signature_to_hover, CompletionEntry,
};
pub use registry::{aggregate, Aggregator, Collision, MergePolicy, Merged, Registry};
pub use settings::{build_registry, discover_settings, load_module_file, load_settings};
pub use types::{FunctionSignature, Parameter, SignatureStore};

pub struct Backend {
    client: Client,
    documents: DocumentStore,
    registry: OnceLock<Arc<Registry>>,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            registry: OnceLock::new(),
        }
    }

    /// The registry built at initialize, or the bundled one if a request
    /// arrives first.
    fn registry(&self) -> &Arc<Registry> {
        self.registry.get_or_init(|| Arc::new(Registry::bundled()))
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        // Extract workspace root from params
        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .and_then(|f| f.uri.to_file_path().ok())
            .or_else(|| {
                #[allow(deprecated)]
                params.root_uri.as_ref()?.to_file_path().ok()
            });

        let registry = if let Some(root) = workspace_root {
            // Discover settings by walking up the directory tree
            let (settings, settings_dir) = settings::discover_settings(&root);
            debug!(settings_dir = %settings_dir.display(), "settings discovered");
            settings::build_registry(&settings, &settings_dir)
        } else {
            Registry::bundled()
        };
        let _ = self.registry.set(Arc::new(registry));

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                signature_help_provider: Some(SignatureHelpOptions {
                    trigger_characters: Some(vec!["(".to_string(), ",".to_string()]),
                    retrigger_characters: None,
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        let registry = self.registry();
        info!(functions = registry.len(), "server initialized");

        self.client
            .log_message(
                MessageType::INFO,
                format!(
                    "AutoIt language server initialized ({} functions)",
                    registry.len()
                ),
            )
            .await;

        for collision in registry.collisions() {
            self.client
                .log_message(
                    MessageType::INFO,
                    format!(
                        "`{}` from `{}` shadows the one from `{}`",
                        collision.name, collision.winner, collision.shadowed
                    ),
                )
                .await;
        }
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.documents.open(
            params.text_document.uri,
            params.text_document.text,
            params.text_document.version,
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // We use FULL sync, so there's exactly one change with the full text
        if let Some(change) = params.content_changes.into_iter().next() {
            self.documents.open(
                params.text_document.uri,
                change.text,
                params.text_document.version,
            );
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.close(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };

        Ok(lsp::hover_at_position(
            &doc.line_index,
            self.registry(),
            position,
        ))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(doc) = self.documents.get(uri) else {
            debug!(%uri, "completion requested for unknown document");
            return Ok(None);
        };

        Ok(lsp::completion_at_position(
            &doc.line_index,
            self.registry(),
            position,
        ))
    }

    async fn signature_help(&self, params: SignatureHelpParams) -> Result<Option<SignatureHelp>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };

        Ok(lsp::signature_help_at_position(
            &doc.line_index,
            self.registry(),
            position,
        ))
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use clausewise::application::ports::{
    AnalysisRepository, ChatRepository, LlmClient, StagingStore, TextSplitter,
    ThreatScanRepository,
};
use clausewise::application::services::{
    AnalysisWorker, AnalyzerConfig, DocumentAnalyzer, StaleAnalysisReaper, ThreatScanService,
    UploadService, VoiceAssistantService,
};
use clausewise::domain::UploadPolicy;
use clausewise::infrastructure::llm::create_chat_completions_client;
use clausewise::infrastructure::observability::{TracingConfig, init_tracing};
use clausewise::infrastructure::persistence::{
    InMemoryAnalysisRepository, InMemoryChatRepository, InMemoryThreatScanRepository,
};
use clausewise::infrastructure::storage::ObjectStagingStore;
use clausewise::infrastructure::text_processing::{ExtractorFactory, ParagraphSplitter};
use clausewise::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let llm_client: Arc<dyn LlmClient> = Arc::new(
        create_chat_completions_client(&settings.llm)
            .context("Failed to create LLM client")?,
    );

    let analysis_repository: Arc<dyn AnalysisRepository> =
        Arc::new(InMemoryAnalysisRepository::new());
    let scan_repository: Arc<dyn ThreatScanRepository> =
        Arc::new(InMemoryThreatScanRepository::new());
    let chat_repository: Arc<dyn ChatRepository> = Arc::new(InMemoryChatRepository::new());
    let staging_store: Arc<dyn StagingStore> = Arc::new(
        ObjectStagingStore::local(PathBuf::from(&settings.storage.local_path))
            .context("Failed to open staging directory")?,
    );

    let analysis = &settings.analysis;
    let text_splitter: Arc<dyn TextSplitter> =
        Arc::new(ParagraphSplitter::new(analysis.max_chunk_chars));
    let analyzer = Arc::new(DocumentAnalyzer::new(
        Arc::clone(&llm_client),
        text_splitter,
        AnalyzerConfig {
            model: settings.llm.analysis_model.clone(),
            max_chunk_chars: analysis.max_chunk_chars,
            chunk_delay: Duration::from_millis(analysis.chunk_delay_ms),
            max_clauses: analysis.max_clauses,
        },
    ));
    let file_loader = ExtractorFactory::create(Arc::clone(&llm_client), &settings.llm.ocr_model);

    let (sender, receiver) = mpsc::channel(analysis.queue_capacity);
    let worker = AnalysisWorker::new(
        receiver,
        file_loader,
        analyzer,
        Arc::clone(&analysis_repository),
        Arc::clone(&staging_store),
        Duration::from_secs(analysis.processing_timeout_secs),
    );
    tokio::spawn(worker.run());

    let reaper = StaleAnalysisReaper::new(
        Arc::clone(&analysis_repository),
        Duration::from_secs(analysis.stale_after_secs),
        Duration::from_secs(analysis.reaper_interval_secs),
    );
    tokio::spawn(reaper.run());

    let state = AppState {
        upload_service: Arc::new(UploadService::new(
            Arc::clone(&analysis_repository),
            staging_store,
            sender,
            UploadPolicy::new(settings.upload.max_file_size_bytes),
        )),
        analysis_repository: Arc::clone(&analysis_repository),
        threat_scan_service: Arc::new(ThreatScanService::new(
            Arc::clone(&llm_client),
            scan_repository,
            settings.llm.threat_model.clone(),
        )),
        voice_assistant_service: Arc::new(VoiceAssistantService::new(
            llm_client,
            analysis_repository,
            chat_repository,
            settings.llm.assistant_model.clone(),
        )),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

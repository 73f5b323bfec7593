use axum::Router;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tts_gateway::{
    controllers::speech::SpeechController,
    domain::{
        auth::ApiKeyGate,
        speech::{SpeechService, VoiceRegistry, DEFAULT_LANGUAGE},
    },
    infrastructure::http::create_app,
};

pub mod api_client;

use api_client::TestClient;
use fakes::{FakeSynthesizer, FakeTranscoder, KeywordDetector};

pub const TEST_API_KEY: &str = "test-api-key-for-testing-only";

pub const DA_VOICE: &str = "./voices/da_DK-talesyntese-medium.onnx";
pub const EN_VOICE: &str = "./voices/en_US-amy-medium.onnx";
pub const GB_VOICE: &str = "./voices/en_GB-alan-medium.onnx";

/// A running server wired to fake engines
pub struct TestContext {
    pub client: TestClient,
    pub synthesizer: Arc<FakeSynthesizer>,
    pub transcoder: Arc<FakeTranscoder>,
}

impl TestContext {
    pub async fn start(synthesizer: FakeSynthesizer, transcoder: FakeTranscoder) -> Self {
        let synthesizer = Arc::new(synthesizer);
        let transcoder = Arc::new(transcoder);

        let app = create_test_app(synthesizer.clone(), transcoder.clone());

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: TestClient::new(&base_url),
            synthesizer,
            transcoder,
        }
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async { TestContext::start(FakeSynthesizer::default(), FakeTranscoder::default()).await }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Server task ends with the test runtime
        }
    }
}

fn create_test_app(synthesizer: Arc<FakeSynthesizer>, transcoder: Arc<FakeTranscoder>) -> Router {
    let registry = VoiceRegistry::new(VoiceRegistry::built_in_voices(), DEFAULT_LANGUAGE)
        .expect("built-in voices contain the default language");

    let speech_service = Arc::new(SpeechService::new(
        Arc::new(registry),
        Arc::new(KeywordDetector),
        synthesizer,
        transcoder,
    ));
    let speech_controller = Arc::new(SpeechController::new(speech_service));
    let gate = Arc::new(ApiKeyGate::new(TEST_API_KEY.to_string()));

    create_app(gate, speech_controller)
}

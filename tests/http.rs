use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    available: bool,
    submissions: u64,
    authors: u64,
    models: u64,
    providers: u64,
}

#[derive(Debug, Deserialize)]
struct ModelCount {
    model: String,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct HomeworkRow {
    homework: String,
    count: u64,
    top_models: Vec<ModelCount>,
}

#[derive(Debug, Deserialize)]
struct ProviderRow {
    provider: String,
    count: u64,
    share: f64,
}

#[derive(Debug, Deserialize)]
struct ThemeRow {
    label: String,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct InsightsResponse {
    available: bool,
    homework: Vec<HomeworkRow>,
    providers: Vec<ProviderRow>,
    strengths: Vec<ThemeRow>,
    weaknesses: Vec<ThemeRow>,
    total_models: u64,
}

#[derive(Debug, Deserialize)]
struct ThemeResponse {
    effective: String,
    preference: Option<String>,
    swap_token: u64,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_path(suffix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "insights_http_{}_{}_{suffix}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

fn write_fixture(path: &str) {
    let record = |author: &str, homework: &str, model: &str, provider: &str, content: &str| {
        serde_json::json!({
            "author": author,
            "homework": homework,
            "llm_used": model,
            "provider": provider,
            "title": format!("{homework} writeup"),
            "content": content,
        })
    };

    let data = serde_json::json!({
        "threads": [
            record("alice", "HW1", "gpt-5", "OpenAI",
                "Worked through the proof step by step, no arithmetic errors."),
            record("bob", "HW2", "gemini-2.5-pro", "Google",
                "It hallucinated a citation and the final answer was wrong."),
            record("carol", "HW1", "gpt-5", "OpenAI",
                "Great conceptual explanation with clear intuition."),
        ],
    });

    std::fs::write(path, serde_json::to_vec_pretty(&data).unwrap()).expect("write fixture");
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/summary")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server_with(data_path: &str, theme_path: &str) -> TestServer {
    let port = pick_free_port();

    let child = Command::new(env!("CARGO_BIN_EXE_insights_app"))
        .env("PORT", port.to_string())
        .env("SUBMISSIONS_PATH", data_path)
        .env("THEME_STATE_PATH", theme_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn spawn_server() -> TestServer {
    let data_path = unique_path("data");
    write_fixture(&data_path);
    spawn_server_with(&data_path, &unique_path("theme")).await
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_summary_counts_fixture_records() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let summary: SummaryResponse = client
        .get(format!("{}/api/summary", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(summary.available);
    assert_eq!(summary.submissions, 3);
    assert_eq!(summary.authors, 3);
    assert_eq!(summary.models, 2);
    assert_eq!(summary.providers, 2);
}

#[tokio::test]
async fn http_insights_aggregate_and_tag() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let insights: InsightsResponse = client
        .get(format!("{}/api/insights", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(insights.available);
    assert_eq!(insights.total_models, 2);

    let homework: Vec<(&str, u64)> = insights
        .homework
        .iter()
        .map(|row| (row.homework.as_str(), row.count))
        .collect();
    assert_eq!(homework, vec![("HW1", 2), ("HW2", 1)]);
    assert_eq!(insights.homework[0].top_models[0].model, "gpt-5");
    assert_eq!(insights.homework[0].top_models[0].count, 2);

    let total: u64 = insights.providers.iter().map(|row| row.count).sum();
    assert_eq!(total, 3);
    let openai = insights
        .providers
        .iter()
        .find(|row| row.provider == "OpenAI")
        .expect("missing OpenAI row");
    assert!((openai.share - 66.66).abs() < 1.0);

    let strength_labels: Vec<&str> = insights
        .strengths
        .iter()
        .map(|row| row.label.as_str())
        .collect();
    assert!(strength_labels.contains(&"Step-by-step derivations"));

    let weakness_labels: Vec<&str> = insights
        .weaknesses
        .iter()
        .map(|row| row.label.as_str())
        .collect();
    assert!(weakness_labels.contains(&"Hallucination / guessing"));
    // "no arithmetic errors" in the HW1 writeup must not count as a math
    // mistake; the only math-mistake hit comes from the HW2 record.
    if let Some(math) = insights
        .weaknesses
        .iter()
        .find(|row| row.label.starts_with("Math mistakes"))
    {
        assert_eq!(math.count, 1);
    }
}

#[tokio::test]
async fn http_theme_toggle_and_reset_flow() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // No stored preference, system reports dark: effective is dark.
    let state: ThemeResponse = client
        .get(format!("{}/api/theme?system=dark", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state.effective, "dark");
    assert_eq!(state.preference, None);

    // Toggle pins light explicitly.
    let toggled: ThemeResponse = client
        .post(format!("{}/api/theme/toggle", server.base_url))
        .json(&serde_json::json!({ "system": "dark" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled.effective, "light");
    assert_eq!(toggled.preference.as_deref(), Some("light"));
    assert!(toggled.swap_token > state.swap_token);

    // A second toggle stores the opposite preference, not "unset".
    let toggled_again: ThemeResponse = client
        .post(format!("{}/api/theme/toggle", server.base_url))
        .json(&serde_json::json!({ "system": "dark" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled_again.effective, "dark");
    assert_eq!(toggled_again.preference.as_deref(), Some("dark"));

    // Stored preference wins regardless of the system signal.
    let pinned: ThemeResponse = client
        .get(format!("{}/api/theme?system=light", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pinned.effective, "dark");

    // Reset clears the preference and follows the system again.
    let reset: ThemeResponse = client
        .post(format!("{}/api/theme/reset", server.base_url))
        .json(&serde_json::json!({ "system": "light" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reset.preference, None);
    assert_eq!(reset.effective, "light");
}

#[tokio::test]
async fn http_missing_data_file_serves_placeholders() {
    let _guard = TEST_LOCK.lock().await;
    // Points at a path that was never written; the server must come up
    // anyway and answer with unavailable payloads instead of failing.
    let server = spawn_server_with(&unique_path("data_absent"), &unique_path("theme_absent")).await;
    let client = Client::new();

    let summary: SummaryResponse = client
        .get(format!("{}/api/summary", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!summary.available);
    assert_eq!(summary.submissions, 0);
    assert_eq!(summary.authors, 0);
    assert_eq!(summary.models, 0);
    assert_eq!(summary.providers, 0);

    let insights: InsightsResponse = client
        .get(format!("{}/api/insights", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!insights.available);
    assert!(insights.homework.is_empty());
    assert!(insights.providers.is_empty());
    assert!(insights.strengths.is_empty());
    assert!(insights.weaknesses.is_empty());
    assert_eq!(insights.total_models, 0);
}

#[tokio::test]
async fn http_theme_preference_survives_restart() {
    let _guard = TEST_LOCK.lock().await;
    let data_path = unique_path("data_restart");
    let theme_path = unique_path("theme_restart");
    write_fixture(&data_path);
    let client = Client::new();

    let server = spawn_server_with(&data_path, &theme_path).await;
    let toggled: ThemeResponse = client
        .post(format!("{}/api/theme/toggle", server.base_url))
        .json(&serde_json::json!({ "system": "dark" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled.preference.as_deref(), Some("light"));
    drop(server);

    // A fresh process reads the persisted preference back, and it still
    // wins over the system signal.
    let server = spawn_server_with(&data_path, &theme_path).await;
    let state: ThemeResponse = client
        .get(format!("{}/api/theme?system=dark", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state.preference.as_deref(), Some("light"));
    assert_eq!(state.effective, "light");
}

#[tokio::test]
async fn http_invalid_system_value_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/theme?system=sepia", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/api/theme/toggle", server.base_url))
        .json(&serde_json::json!({ "system": "sepia" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/rental-api");
        cmd.env("RENTAL_API_PORT", port.to_string())
            .env("RENTAL_API_BIND", "127.0.0.1")
            // login tests need a signing secret; honor one from the caller
            .env(
                "JWT_SECRET",
                std::env::var("JWT_SECRET").unwrap_or_else(|_| "integration-test-secret".into()),
            )
            .stdin(Stdio::null())
            // Route server output to null so the orphaned child does not keep
            // the test harness's captured stdout/stderr pipe open after the
            // test binary exits (which would hang `cargo test` waiting on EOF).
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Inherit environment so the server sees DATABASE_URL and JWT_SECRET from .env
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            port,
            base_url,
            child,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Ready once the server answers; degraded (no database) still counts
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// True when the spawned server has a working database behind it. Tests that
/// mutate state gate themselves on this and skip quietly otherwise.
#[allow(dead_code)]
pub async fn db_available(server: &TestServer) -> bool {
    let client = reqwest::Client::new();
    match client.get(format!("{}/health", server.base_url)).send().await {
        Ok(resp) => resp.status() == StatusCode::OK,
        Err(_) => false,
    }
}

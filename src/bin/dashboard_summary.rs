use anyhow::{Context, Result};
use registry_ops::EnvSource;
use registry_ops::common::{DEFAULT_DASHBOARD_API_URL, DOTENV_PATH};
use registry_ops::dashboard::{ApiClient, Credentials};
use registry_ops::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let env = EnvSource::load(DOTENV_PATH);
    let base_url = env
        .get("DASHBOARD_API_URL")
        .unwrap_or_else(|| DEFAULT_DASHBOARD_API_URL.to_string());
    let client = ApiClient::new(&base_url);

    // an explicit token wins, otherwise log in with email/password
    let credentials = match env.get("DASHBOARD_TOKEN") {
        Some(token) => Credentials::new(token),
        None => {
            let email = env.require("DASHBOARD_EMAIL")?;
            let password = env.require("DASHBOARD_PASSWORD")?;
            client
                .login(&email, &password)
                .await
                .context("Dashboard login failed")?
        }
    };

    println!("📊 Dashboard summary from {}", base_url);
    let summary = client
        .summary(&credentials)
        .await
        .context("Failed to fetch dashboard summary")?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

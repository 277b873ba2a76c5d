use std::path::Path;
use std::time::Duration;

use alloy::primitives::Address;
use serde::Deserialize;
use tracing::{debug, info};

use super::{BuildInfo, ContractArtifact, VerifyError};
use crate::config::Settings;

const STATUS_POLL_ATTEMPTS: u32 = 10;
const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRequest {
    pub address: Address,
    pub contract_name: String, // fully qualified, "path/To.sol:Name"
    pub compiler_version: String,
    pub standard_json: String,
    pub constructor_args: String, // abi encoded hex without 0x, empty for none
}

impl VerificationRequest {
    pub fn new(address: Address, artifact: &ContractArtifact, build_info: &BuildInfo) -> Self {
        Self {
            address,
            contract_name: artifact.fully_qualified_name(),
            compiler_version: build_info.compiler_version(),
            standard_json: build_info.input.to_string(),
            constructor_args: String::new(),
        }
    }

    // build info is optional config, so its absence is a verification error
    pub fn from_build_info_path(
        address: Address,
        artifact: &ContractArtifact,
        build_info_path: Option<&Path>,
    ) -> Result<Self, VerifyError> {
        let path = build_info_path.ok_or(VerifyError::MissingBuildInfo)?;
        let build_info = BuildInfo::load(path)?;
        Ok(Self::new(address, artifact, &build_info))
    }
}

/// Publishes contract source to a block explorer.
#[allow(async_fn_in_trait)]
pub trait SourceVerifier {
    /// Returns the explorer's final status message on success.
    async fn verify(&self, request: &VerificationRequest) -> Result<String, VerifyError>;
}

// Etherscan style api response, shared by polygonscan and friends
#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    #[allow(dead_code)]
    message: String,
    result: String,
}

pub struct EtherscanVerifier {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    poll_interval: Duration,
}

impl EtherscanVerifier {
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            poll_interval: STATUS_POLL_INTERVAL,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, VerifyError> {
        let api_url = settings
            .network
            .verify_api_url
            .ok_or_else(|| VerifyError::Unsupported(settings.network.name.to_string()))?;
        let api_key = settings
            .explorer_api_key
            .as_deref()
            .ok_or(VerifyError::MissingApiKey)?;
        Ok(Self::new(api_url, api_key))
    }

    async fn submit(&self, request: &VerificationRequest) -> Result<Submission, VerifyError> {
        let address = request.address.to_string();
        let form = [
            ("apikey", self.api_key.as_str()),
            ("module", "contract"),
            ("action", "verifysourcecode"),
            ("contractaddress", address.as_str()),
            ("sourceCode", request.standard_json.as_str()),
            ("codeformat", "solidity-standard-json-input"),
            ("contractname", request.contract_name.as_str()),
            ("compilerversion", request.compiler_version.as_str()),
            // the misspelling is part of the api
            ("constructorArguements", request.constructor_args.as_str()),
        ];

        let response: ExplorerResponse = self
            .client
            .post(&self.api_url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(status = %response.status, result = %response.result, "verification submitted");
        Ok(interpret_submission(&response))
    }

    async fn check_status(&self, guid: &str) -> Result<CheckStatus, VerifyError> {
        let response: ExplorerResponse = self
            .client
            .get(&self.api_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("module", "contract"),
                ("action", "checkverifystatus"),
                ("guid", guid),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(interpret_status(&response))
    }
}

impl SourceVerifier for EtherscanVerifier {
    async fn verify(&self, request: &VerificationRequest) -> Result<String, VerifyError> {
        let guid = match self.submit(request).await? {
            Submission::Queued(guid) => guid,
            Submission::AlreadyVerified => return Ok("Already Verified".to_string()),
            Submission::Rejected(reason) => return Err(VerifyError::Rejected(reason)),
        };
        info!(%guid, address = %request.address, "verification queued");

        for attempt in 1..=STATUS_POLL_ATTEMPTS {
            tokio::time::sleep(self.poll_interval).await;
            match self.check_status(&guid).await? {
                CheckStatus::Pending => debug!(attempt, "verification pending"),
                CheckStatus::Verified(message) => return Ok(message),
                CheckStatus::Failed(reason) => return Err(VerifyError::Rejected(reason)),
            }
        }

        Err(VerifyError::Timeout {
            attempts: STATUS_POLL_ATTEMPTS,
        })
    }
}

#[derive(Debug, PartialEq)]
enum Submission {
    Queued(String),
    AlreadyVerified,
    Rejected(String),
}

fn interpret_submission(response: &ExplorerResponse) -> Submission {
    if response.result.to_lowercase().contains("already verified") {
        return Submission::AlreadyVerified;
    }
    if response.status == "1" {
        Submission::Queued(response.result.clone())
    } else {
        Submission::Rejected(response.result.clone())
    }
}

#[derive(Debug, PartialEq)]
enum CheckStatus {
    Pending,
    Verified(String),
    Failed(String),
}

fn interpret_status(response: &ExplorerResponse) -> CheckStatus {
    let result = response.result.as_str();
    if result.starts_with("Pending") {
        CheckStatus::Pending
    } else if response.status == "1" || result.to_lowercase().contains("already verified") {
        CheckStatus::Verified(result.to_string())
    } else {
        CheckStatus::Failed(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str, result: &str) -> ExplorerResponse {
        ExplorerResponse {
            status: status.to_string(),
            message: String::new(),
            result: result.to_string(),
        }
    }

    #[test]
    fn test_verifier_needs_api_key_and_explorer() {
        use crate::config::EnvSource;

        let settings = Settings::from_env(&EnvSource::from_pairs([("NETWORK", "amoy")])).unwrap();
        assert!(matches!(
            EtherscanVerifier::from_settings(&settings),
            Err(VerifyError::MissingApiKey)
        ));

        let settings = Settings::from_env(&EnvSource::from_pairs([
            ("NETWORK", "hardhat"),
            ("POLYGONSCAN_API_KEY", "key"),
        ]))
        .unwrap();
        assert!(matches!(
            EtherscanVerifier::from_settings(&settings),
            Err(VerifyError::Unsupported(_))
        ));
    }

    #[test]
    fn test_request_without_build_info() {
        let artifact = ContractArtifact {
            contract_name: "ContractRegistry".to_string(),
            source_name: "contracts/ContractRegistry.sol".to_string(),
            bytecode: alloy::primitives::Bytes::from_static(&[0x60]),
        };
        assert!(matches!(
            VerificationRequest::from_build_info_path(Address::ZERO, &artifact, None),
            Err(VerifyError::MissingBuildInfo)
        ));
    }

    // answers the verifysourcecode POST once, then stops listening
    async fn explorer_once(body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let api_url = format!("http://{}/api", listener.local_addr().unwrap());

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 16384];
            let mut received = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received).to_string();
                if n == 0 {
                    break;
                }
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text
                        .lines()
                        .filter_map(|line| line.split_once(':'))
                        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if received.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        api_url
    }

    fn registry_request() -> VerificationRequest {
        VerificationRequest {
            address: Address::ZERO,
            contract_name: "contracts/ContractRegistry.sol:ContractRegistry".to_string(),
            compiler_version: "v0.8.20+commit.a1b79de6".to_string(),
            standard_json: "{}".to_string(),
            constructor_args: String::new(),
        }
    }

    #[tokio::test]
    async fn test_already_verified_skips_status_polling() {
        let api_url = explorer_once(
            r#"{"status":"0","message":"NOTOK","result":"Contract source code already verified"}"#,
        )
        .await;

        let verifier = EtherscanVerifier::new(&api_url, "key");
        let result = verifier.verify(&registry_request()).await;

        assert_eq!(result.unwrap(), "Already Verified");
    }

    #[tokio::test]
    async fn test_rejected_submission_is_an_error() {
        let api_url =
            explorer_once(r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#).await;

        let verifier = EtherscanVerifier::new(&api_url, "bad");
        let result = verifier.verify(&registry_request()).await;

        assert!(matches!(result, Err(VerifyError::Rejected(reason)) if reason == "Invalid API Key"));
    }

    #[test]
    fn test_submission_outcomes() {
        assert_eq!(
            interpret_submission(&response("1", "ezq878u486pzijkvvmerl6a9mzwhv6sefgvqi5tkwceejc7tvn")),
            Submission::Queued("ezq878u486pzijkvvmerl6a9mzwhv6sefgvqi5tkwceejc7tvn".to_string())
        );
        assert_eq!(
            interpret_submission(&response("0", "Contract source code already verified")),
            Submission::AlreadyVerified
        );
        assert_eq!(
            interpret_submission(&response("0", "Invalid API Key")),
            Submission::Rejected("Invalid API Key".to_string())
        );
    }

    #[test]
    fn test_status_outcomes() {
        assert_eq!(
            interpret_status(&response("0", "Pending in queue")),
            CheckStatus::Pending
        );
        assert_eq!(
            interpret_status(&response("1", "Pass - Verified")),
            CheckStatus::Verified("Pass - Verified".to_string())
        );
        assert_eq!(
            interpret_status(&response("0", "Fail - Unable to verify")),
            CheckStatus::Failed("Fail - Unable to verify".to_string())
        );
    }
}

//! Chronograph configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use url::Url;

/// Value shipped in the sample `.env`; treated as "not configured".
pub const INFURA_PLACEHOLDER: &str = "YOUR_INFURA_PROJECT_ID_HERE";

/// Base of the Infura mainnet endpoint; the project id is appended.
pub const INFURA_MAINNET_BASE: &str = "https://mainnet.infura.io/v3/";

/// Default number of blocks in the analyzed window.
pub const DEFAULT_PERIOD: u64 = 1000;

/// Errors resolving the chain data endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Neither an RPC URL nor an Infura project id was given.
    #[error(
        "INFURA_PROJECT_ID is not configured; create a .env file containing INFURA_PROJECT_ID=\"<your key>\" or pass --rpc-url"
    )]
    MissingCredential,
    /// The Infura project id still holds the sample value.
    #[error("INFURA_PROJECT_ID still holds the placeholder value {INFURA_PLACEHOLDER}")]
    PlaceholderCredential,
    /// The Infura project id does not fit in a URL path segment.
    #[error("INFURA_PROJECT_ID contains characters that cannot appear in an endpoint URL")]
    MalformedCredential,
}

/// RPC endpoint configuration options
#[derive(Debug, Clone, Default, Parser)]
pub struct RpcOpts {
    /// Infura project id used to reach Ethereum mainnet
    #[clap(long, env = "INFURA_PROJECT_ID", hide_env_values = true)]
    pub infura_project_id: Option<String>,
    /// Full JSON-RPC HTTP endpoint; takes precedence over the Infura project id
    #[clap(long, env = "RPC_URL", hide_env_values = true)]
    pub rpc_url: Option<Url>,
}

impl RpcOpts {
    /// Resolve the JSON-RPC endpoint to read blocks from.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        if let Some(url) = &self.rpc_url {
            return Ok(url.clone());
        }

        let project_id = self
            .infura_project_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingCredential)?;

        if project_id == INFURA_PLACEHOLDER {
            return Err(ConfigError::PlaceholderCredential);
        }
        if !project_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(ConfigError::MalformedCredential);
        }

        Url::parse(INFURA_MAINNET_BASE)
            .and_then(|base| base.join(project_id))
            .map_err(|_| ConfigError::MalformedCredential)
    }
}

/// How the final report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled, human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI options for chronograph
#[derive(Debug, Clone, Parser)]
#[clap(
    name = "chronograph",
    about = "Timeline analyzer reconstructing who interacted with an on-chain contract"
)]
pub struct Opts {
    /// Address of the artifact (smart contract) to investigate
    pub artifact: String,

    /// Length of the investigated period, in blocks
    #[clap(
        short,
        long,
        default_value_t = DEFAULT_PERIOD,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub period: u64,

    /// File listing previously known actors, one address per line
    #[clap(long)]
    pub known_actors: Option<PathBuf>,

    /// Report format
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not draw the progress bar
    #[clap(long)]
    pub no_progress: bool,

    /// RPC endpoint configuration
    #[clap(flatten)]
    pub rpc: RpcOpts,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Opts::command().debug_assert()
    }

    #[test]
    fn parses_artifact_and_period() {
        let opts = Opts::try_parse_from(["chronograph", ARTIFACT, "-p", "250"]).unwrap();
        assert_eq!(opts.artifact, ARTIFACT);
        assert_eq!(opts.period, 250);
        assert_eq!(opts.format, OutputFormat::Text);
        assert!(!opts.no_progress);

        let opts = Opts::try_parse_from(["chronograph", "--period", "5", ARTIFACT]).unwrap();
        assert_eq!(opts.period, 5);
    }

    #[test]
    fn period_defaults_to_one_thousand() {
        let opts = Opts::try_parse_from(["chronograph", ARTIFACT]).unwrap();
        assert_eq!(opts.period, DEFAULT_PERIOD);
    }

    #[test]
    fn zero_period_is_rejected() {
        assert!(Opts::try_parse_from(["chronograph", ARTIFACT, "-p", "0"]).is_err());
    }

    #[test]
    fn artifact_is_required() {
        assert!(Opts::try_parse_from(["chronograph"]).is_err());
    }

    #[test]
    fn json_format_and_known_actors() {
        let opts = Opts::try_parse_from([
            "chronograph",
            ARTIFACT,
            "--format",
            "json",
            "--known-actors",
            "actors.txt",
        ])
        .unwrap();
        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.known_actors, Some(PathBuf::from("actors.txt")));
    }

    #[test]
    fn endpoint_from_infura_project_id() {
        let rpc = RpcOpts { infura_project_id: Some("abcdef1234567890".to_owned()), rpc_url: None };
        assert_eq!(rpc.endpoint().unwrap().as_str(), "https://mainnet.infura.io/v3/abcdef1234567890");
    }

    #[test]
    fn explicit_rpc_url_wins() {
        let url = Url::parse("http://localhost:8545/").unwrap();
        let rpc = RpcOpts {
            infura_project_id: Some(INFURA_PLACEHOLDER.to_owned()),
            rpc_url: Some(url.clone()),
        };
        assert_eq!(rpc.endpoint().unwrap(), url);
    }

    #[test]
    fn missing_or_placeholder_credential_fails() {
        assert_eq!(RpcOpts::default().endpoint(), Err(ConfigError::MissingCredential));

        let blank = RpcOpts { infura_project_id: Some("   ".to_owned()), rpc_url: None };
        assert_eq!(blank.endpoint(), Err(ConfigError::MissingCredential));

        let placeholder =
            RpcOpts { infura_project_id: Some(INFURA_PLACEHOLDER.to_owned()), rpc_url: None };
        assert_eq!(placeholder.endpoint(), Err(ConfigError::PlaceholderCredential));
    }

    #[test]
    fn credential_with_path_characters_fails() {
        let rpc = RpcOpts { infura_project_id: Some("../v2/key".to_owned()), rpc_url: None };
        assert_eq!(rpc.endpoint(), Err(ConfigError::MalformedCredential));
    }
}

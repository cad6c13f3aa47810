use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use url::Url;

use crate::client::StdlClient;
use crate::config::{DEFAULT_CONFIG_PATH, load_auth_config};
use crate::crypto::decrypt_cookie;
use crate::error::Error;
use crate::request::create_request;
use crate::types::RequestType;

#[derive(Parser)]
#[command(name = "stdl-curl")]
#[command(about = "Send a live watch request to a stdl recorder", long_about = None)]
pub struct Cli {
    /// Recorder endpoint to POST the request to
    pub url: String,
    /// Request type: chzzk_live or afreeca_live
    pub req_type: String,
    /// Channel or user id to watch
    pub user_id: String,
    /// "true" to attach the decrypted auth cookie
    pub has_cookie: String,
    /// Auth config file
    #[arg(long, env = "STDL_CURL_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// Keep watching after the stream ends instead of recording once
    #[arg(long)]
    pub no_once: bool,
}

/// Everything one run needs, detached from the process arguments
#[derive(Debug, Clone)]
pub struct Invocation {
    pub url: String,
    pub req_type: String,
    pub user_id: String,
    pub with_cookie: bool,
    pub once: bool,
    pub config_path: PathBuf,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        Self {
            url: cli.url,
            req_type: cli.req_type,
            user_id: cli.user_id,
            with_cookie: cli.has_cookie == "true",
            once: !cli.no_once,
            config_path: cli.config,
        }
    }
}

pub async fn run_cli() -> Result<()> {
    env_logger::init();

    let invocation = Invocation::from(Cli::parse());
    let client = StdlClient::new();

    let body = execute(&invocation, &client).await?;
    println!("{}", body);
    Ok(())
}

/// Resolve the cookie if requested, send the request and return the response body
pub async fn execute(invocation: &Invocation, client: &StdlClient) -> Result<String> {
    // reject bad input before touching the network
    let req_type: RequestType = invocation.req_type.parse()?;
    Url::parse(&invocation.url).map_err(|source| Error::InvalidUrl {
        url: invocation.url.clone(),
        source,
    })?;

    let cookies = if invocation.with_cookie {
        Some(fetch_cookie(invocation, client).await?)
    } else {
        None
    };

    let req = create_request(
        req_type.as_str(),
        &invocation.user_id,
        invocation.once,
        cookies.as_deref(),
    )?;

    let submission = client.submit(&invocation.url, &req).await?;
    log::info!("Response status: {}", submission.status);
    Ok(submission.body)
}

async fn fetch_cookie(invocation: &Invocation, client: &StdlClient) -> Result<String> {
    let config = load_auth_config(&invocation.config_path).await?;
    let encrypted = client.fetch_encrypted_cookie(&config.authed.url).await?;
    let cookie = decrypt_cookie(&encrypted, config.authed.enckey.as_bytes())?;
    log::debug!("Decrypted auth cookie ({} bytes)", cookie.len());
    Ok(cookie)
}

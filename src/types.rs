use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Platforms a live watch request can target
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RequestType {
    ChzzkLive,
    AfreecaLive,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::ChzzkLive => "chzzk_live",
            RequestType::AfreecaLive => "afreeca_live",
        }
    }
}

impl FromStr for RequestType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chzzk_live" => Ok(RequestType::ChzzkLive),
            "afreeca_live" => Ok(RequestType::AfreecaLive),
            _ => Err(Error::UnsupportedRequestType(s.to_string())),
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body posted to the recorder, tagged by `reqType`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reqType")]
pub enum RequestDescriptor {
    #[serde(rename = "chzzk_live")]
    ChzzkLive {
        #[serde(rename = "chzzkLive")]
        chzzk_live: ChzzkLiveRequest,
    },
    #[serde(rename = "afreeca_live")]
    AfreecaLive {
        #[serde(rename = "afreecaLive")]
        afreeca_live: AfreecaLiveRequest,
    },
}

impl RequestDescriptor {
    pub fn req_type(&self) -> RequestType {
        match self {
            RequestDescriptor::ChzzkLive { .. } => RequestType::ChzzkLive,
            RequestDescriptor::AfreecaLive { .. } => RequestType::AfreecaLive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChzzkLiveRequest {
    pub uid: String,
    pub once: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cookies: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfreecaLiveRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub once: bool,
}

/// Local auth config file
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    pub authed: AuthedEndpoint,
}

#[derive(Debug, Deserialize)]
pub struct AuthedEndpoint {
    pub url: String,
    /// 32 raw bytes used as the AES-256 key
    pub enckey: String,
}

/// Response of the auth endpoint
#[derive(Debug, Deserialize)]
pub struct EncryptedCookie {
    pub encrypted: String,
}

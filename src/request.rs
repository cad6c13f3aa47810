use crate::error::Result;
use crate::types::{AfreecaLiveRequest, ChzzkLiveRequest, RequestDescriptor, RequestType};

/// Build the request body for a live watch request.
///
/// Fails with `UnsupportedRequestType` for unknown tags. Cookies only apply
/// to chzzk; an empty cookie string is treated as none.
pub fn create_request(
    req_type: &str,
    user_id: &str,
    once: bool,
    cookies: Option<&str>,
) -> Result<RequestDescriptor> {
    let req = match req_type.parse::<RequestType>()? {
        RequestType::ChzzkLive => RequestDescriptor::ChzzkLive {
            chzzk_live: ChzzkLiveRequest {
                uid: user_id.to_string(),
                once,
                cookies: cookies.filter(|c| !c.is_empty()).map(str::to_string),
            },
        },
        RequestType::AfreecaLive => RequestDescriptor::AfreecaLive {
            afreeca_live: AfreecaLiveRequest {
                user_id: user_id.to_string(),
                once,
            },
        },
    };

    Ok(req)
}

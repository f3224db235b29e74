use std::sync::LazyLock;

use gloo_net::http::Request;
use regex::Regex;
use tracing::{debug, warn};
use web_sys::{RequestMode, UrlSearchParams};

use crate::EMAIL_REGEX;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("EMAIL_REGEX is a valid pattern"));

// subscribe a reader to the newsletter
//
// the provider's embed endpoint takes the same form fields as its html snippet: the address and
// an "embed" flag
#[derive(Clone, Debug)]
pub struct SubscribeReq {
    pub email: String,
}

impl SubscribeReq {
    pub fn new(email: &str) -> anyhow::Result<Self> {
        Ok(SubscribeReq {
            email: validate_email(email)?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct SubscribeResp {
    // the provider does not send cors headers, so the browser only hands back an opaque
    // response and we cannot tell more than "the request went out"
    pub opaque: bool,
}

pub fn validate_email(email: &str) -> anyhow::Result<String> {
    let email = email.trim();

    if email.is_empty() {
        return Err(anyhow::Error::msg("Please enter an email address"));
    }

    if !EMAIL.is_match(email) {
        return Err(anyhow::Error::msg(format!("{email} is not a valid email address")));
    }

    Ok(email.to_owned())
}

pub async fn subscribe(action: &str, req: &SubscribeReq) -> anyhow::Result<SubscribeResp> {
    let params = UrlSearchParams::new()
        .map_err(|err| anyhow::Error::msg(format!("failed to build form body: {err:?}")))?;
    params.append("email", &req.email);
    params.append("embed", "1");

    debug!({ action = action }, "sending newsletter subscription");

    let resp = Request::post(action)
        .mode(RequestMode::NoCors)
        .body(params)?
        .send()
        .await?;

    // opaque responses always report status 0
    match (resp.ok(), resp.status()) {
        (true, _) => Ok(SubscribeResp { opaque: false }),
        (false, 0) => Ok(SubscribeResp { opaque: true }),
        (false, status) => {
            warn!({ status = status }, "newsletter provider rejected subscription");
            Err(anyhow::Error::msg(resp.text().await?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert_eq!(validate_email("reader@example.com").unwrap(), "reader@example.com");
        assert_eq!(validate_email("first.last+news@mail.example.co").unwrap(), "first.last+news@mail.example.co");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_email("  reader@example.com\n").unwrap(), "reader@example.com");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "   ", "reader", "reader@", "@example.com", "reader@example", "a b@example.com", "a@b@example.com"] {
            assert!(validate_email(email).is_err(), "{email:?} should be rejected");
        }
    }

    #[test]
    fn empty_address_has_a_friendly_message() {
        let err = SubscribeReq::new("").unwrap_err();

        assert_eq!(err.to_string(), "Please enter an email address");
    }
}

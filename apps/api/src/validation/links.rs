//! Format checks for contact fields: email address and profile links.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

pub const LINKEDIN_HOST: &str = "linkedin.com";
pub const GITHUB_HOST: &str = "github.com";

const REQUIRED_SCHEME: &str = "https://";

/// Why a profile link was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkProblem {
    Scheme,
    Domain,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Checks that `raw` is an `https://` link whose host is `expected_host`,
/// optionally prefixed with `www.`. Whitespace anywhere makes the link malformed.
pub fn check_profile_url(raw: &str, expected_host: &str) -> Result<(), LinkProblem> {
    if !raw.starts_with(REQUIRED_SCHEME) {
        return Err(LinkProblem::Scheme);
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(LinkProblem::Domain);
    }

    let url = Url::parse(raw).map_err(|_| LinkProblem::Domain)?;
    let host = url.host_str().ok_or(LinkProblem::Domain)?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.eq_ignore_ascii_case(expected_host) {
        Ok(())
    } else {
        Err(LinkProblem::Domain)
    }
}

//! Curl command rendering for test reports and bug tickets.

use crate::http::HttpMethod;

const DEFAULT_HEADERS: &[(&str, &str)] = &[("Content-Type", "application/json")];

/// Render an equivalent `curl` invocation.
///
/// When `headers` is `None` a JSON content type is assumed. An explicit empty
/// slice renders no `-H` flags. The body is attached with `-d` only when it
/// is non-empty.
pub fn curl_command(
    method: HttpMethod,
    url: &str,
    headers: Option<&[(String, String)]>,
    body: Option<&str>,
) -> String {
    let mut cmd = format!("curl -X {} {}", method.as_str(), quote(url));
    match headers {
        Some(headers) => {
            for (key, value) in headers {
                push_header(&mut cmd, key, value);
            }
        }
        None => {
            for (key, value) in DEFAULT_HEADERS {
                push_header(&mut cmd, key, value);
            }
        }
    }
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        cmd.push_str(" -d ");
        cmd.push_str(&quote(body));
    }
    cmd
}

fn push_header(cmd: &mut String, key: &str, value: &str) {
    cmd.push_str(" -H ");
    cmd.push_str(&quote(&format!("{key}: {value}")));
}

/// Single-quote for a POSIX shell; embedded quotes become `'\''`.
fn quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', r"'\''"))
}

// Generic URI splitting shared by template compilation and matching

use std::borrow::Cow;

use url::form_urlencoded;

/// The components of a URI before any template interpretation
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawUri<'a> {
    /// Lowercased scheme
    pub scheme: String,
    /// Host exactly as written, port included
    pub host: &'a str,
    /// Percent-decoded path
    pub path: String,
    /// Raw query string without the leading '?'
    pub query: &'a str,
}

impl<'a> RawUri<'a> {
    /// Split `input` into scheme, host, path and query. The fragment is dropped.
    ///
    /// Errors are plain reasons; callers decide whether the input was a
    /// template or a candidate URI.
    pub fn parse(input: &'a str) -> Result<Self, String> {
        if input.is_empty() {
            return Err("empty input".to_string());
        }
        if let Some(ch) = input.chars().find(|c| c.is_control() || *c == ' ') {
            return Err(format!("invalid character {:?}", ch));
        }

        let without_fragment = input.split_once('#').map_or(input, |(head, _)| head);

        let (scheme, rest) = without_fragment
            .split_once(':')
            .ok_or_else(|| "missing scheme".to_string())?;
        validate_scheme(scheme)?;

        let rest = rest
            .strip_prefix("//")
            .ok_or_else(|| "missing '//' after scheme".to_string())?;

        let authority_end = rest.find(|c: char| c == '/' || c == '?').unwrap_or(rest.len());
        let (authority, remainder) = rest.split_at(authority_end);
        // Userinfo is not part of the host
        let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

        let (raw_path, query) = remainder.split_once('?').unwrap_or((remainder, ""));
        validate_escapes(raw_path)?;
        let path = urlencoding::decode(raw_path)
            .map_err(|e| format!("invalid path encoding: {}", e))?
            .into_owned();

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            host,
            path,
            query,
        })
    }

    /// Path segments after trimming leading and trailing slashes
    pub fn segments(&self) -> Vec<&str> {
        self.path.trim_matches('/').split('/').collect()
    }

    /// Query pairs with percent and '+' decoding applied
    pub fn query_pairs(&self) -> impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)> {
        form_urlencoded::parse(self.query.as_bytes())
    }
}

fn validate_scheme(scheme: &str) -> Result<(), String> {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return Err(format!("invalid scheme '{}'", scheme)),
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.') {
        Ok(())
    } else {
        Err(format!("invalid scheme '{}'", scheme))
    }
}

fn validate_escapes(raw: &str) -> Result<(), String> {
    let bytes = raw.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'%' {
            let escape = bytes.get(pos + 1..pos + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => pos += 3,
                _ => {
                    let end = (pos + 3).min(raw.len());
                    return Err(format!(
                        "invalid escape '{}'",
                        String::from_utf8_lossy(&bytes[pos..end])
                    ));
                }
            }
        } else {
            pos += 1;
        }
    }
    Ok(())
}

//! Page-origin facts used to pick the preferred listing source.

use serde::{Deserialize, Serialize};

const LOOPBACK_HOSTS: [&str; 4] = ["localhost", "127.0.0.1", "::1", "[::1]"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Hostname and protocol of the page hosting the gallery.
pub struct PageOrigin {
    /// `location.hostname` value.
    pub hostname: String,
    /// `location.protocol` value including the trailing colon (for example `https:`).
    pub protocol: String,
}

impl PageOrigin {
    /// Creates an origin from hostname and protocol strings.
    pub fn new(hostname: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            protocol: protocol.into(),
        }
    }

    /// Returns `true` when the page is served from a loopback host or opened from disk.
    pub fn is_local(&self) -> bool {
        LOOPBACK_HOSTS.contains(&self.hostname.as_str()) || self.protocol == "file:"
    }
}

#[cfg(test)]
mod tests {
    use super::PageOrigin;

    #[test]
    fn is_local_matches_loopback_hosts_and_file_protocol() {
        let cases = [
            ("localhost", "http:", true),
            ("127.0.0.1", "http:", true),
            ("[::1]", "http:", true),
            ("", "file:", true),
            ("example.github.io", "https:", false),
            ("localhost.example.com", "https:", false),
        ];

        for (hostname, protocol, expected) in cases {
            assert_eq!(
                PageOrigin::new(hostname, protocol).is_local(),
                expected,
                "hostname={hostname:?} protocol={protocol:?}"
            );
        }
    }
}

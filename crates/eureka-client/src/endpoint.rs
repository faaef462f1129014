use eureka_model::ApiVersion;
use url::Url;

use crate::errors::ClientError;

const EUREKA: &str = "eureka";

/// Normalised registry root: `{scheme}://{host}[:{port}][/{prefix}]/eureka[/v{N}]`.
///
/// Any `eureka` segment already present in the configured address or in a
/// resource path is dropped before the canonical one is appended, so
/// `http://h`, `http://h/`, `http://h/eureka` and `http://h/eureka/` all build
/// identical URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    root: Url,
}

impl Endpoint {
    pub fn new(base: &str, version: ApiVersion) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidAddress {
            address: base.to_string(),
            reason,
        };

        let mut root = Url::parse(base.trim()).map_err(|e| invalid(e.to_string()))?;
        if root.cannot_be_a_base() || !matches!(root.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) address".into()));
        }
        if root.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".into()));
        }

        let mut segments: Vec<String> = root
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|seg| keep_segment(seg))
            .map(str::to_owned)
            .collect();
        segments.push(EUREKA.to_string());
        if let Some(v) = version.segment() {
            segments.push(v);
        }

        root.set_path(&format!("/{}", segments.join("/")));
        root.set_query(None);
        root.set_fragment(None);
        Ok(Self { root })
    }

    /// Canonical root without any resource path.
    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Resolve a resource path (`apps/X`, `/apps/X`, `eureka/apps/X`) against the root.
    pub fn url(&self, path: &str) -> Url {
        let resource: Vec<&str> = path.split('/').filter(|seg| keep_segment(seg)).collect();
        if resource.is_empty() {
            return self.root.clone();
        }

        let mut url = self.root.clone();
        let joined = format!("{}/{}", self.root.path(), resource.join("/"));
        url.set_path(&joined);
        url
    }
}

fn keep_segment(seg: &str) -> bool {
    !seg.is_empty() && seg != EUREKA
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "http://10.250.100.71:8761";
    const BASES: [&str; 4] = [
        "http://10.250.100.71:8761/eureka/",
        "http://10.250.100.71:8761/eureka",
        "http://10.250.100.71:8761/",
        "http://10.250.100.71:8761",
    ];

    #[test]
    fn every_base_form_builds_the_same_url() {
        let expected = "http://10.250.100.71:8761/eureka/apps/nit-ts-app-server";
        for base in BASES {
            let endpoint = Endpoint::new(base, ApiVersion::V1).unwrap();
            assert_eq!(endpoint.url("apps/nit-ts-app-server").as_str(), expected, "base {base}");
            assert_eq!(endpoint.url("/apps/nit-ts-app-server").as_str(), expected, "base {base}");
        }
    }

    #[test]
    fn v2_adds_version_segment() {
        for base in BASES {
            let endpoint = Endpoint::new(base, ApiVersion::V2).unwrap();
            assert_eq!(
                endpoint.url("apps/X").as_str(),
                format!("{HOST}/eureka/v2/apps/X"),
                "base {base}"
            );
        }
    }

    #[test]
    fn eureka_prefix_in_resource_path_is_dropped() {
        let endpoint = Endpoint::new(HOST, ApiVersion::V1).unwrap();
        let expected = format!("{HOST}/eureka/apps/X");
        assert_eq!(endpoint.url("eureka/apps/X").as_str(), expected);
        assert_eq!(endpoint.url("/eureka/apps/X").as_str(), expected);
        assert_eq!(endpoint.url("/eureka/eureka/apps/X/").as_str(), expected);
    }

    #[test]
    fn repeated_eureka_segments_collapse() {
        let endpoint = Endpoint::new("http://h:8761/eureka/eureka/", ApiVersion::V1).unwrap();
        assert_eq!(endpoint.root().as_str(), "http://h:8761/eureka");
    }

    #[test]
    fn instance_path_keeps_colons() {
        let endpoint = Endpoint::new(HOST, ApiVersion::V1).unwrap();
        let url = endpoint.url("apps/APP/10.0.0.1:app:9527");
        assert_eq!(url.as_str(), format!("{HOST}/eureka/apps/APP/10.0.0.1:app:9527"));
    }

    #[test]
    fn host_and_prefix_containing_eureka_survive() {
        let endpoint = Endpoint::new("https://eureka.internal/registry/eureka/", ApiVersion::V1).unwrap();
        assert_eq!(
            endpoint.url("apps/EUREKA-TOOLS").as_str(),
            "https://eureka.internal/registry/eureka/apps/EUREKA-TOOLS"
        );
    }

    #[test]
    fn query_and_fragment_are_discarded() {
        let endpoint = Endpoint::new("http://h:8761/eureka/?zone=a#top", ApiVersion::V1).unwrap();
        assert_eq!(endpoint.url("apps/X").as_str(), "http://h:8761/eureka/apps/X");
    }

    #[test]
    fn empty_path_returns_root() {
        let endpoint = Endpoint::new(HOST, ApiVersion::V2).unwrap();
        assert_eq!(endpoint.url("").as_str(), format!("{HOST}/eureka/v2"));
        assert_eq!(endpoint.url("/eureka/"), *endpoint.root());
    }

    #[test]
    fn malformed_addresses_fail_fast() {
        for base in ["", "not a url", "localhost:8761", "mailto:ops@example.com", "ftp://h/eureka"] {
            let err = Endpoint::new(base, ApiVersion::V1).unwrap_err();
            assert!(matches!(err, ClientError::InvalidAddress { .. }), "base {base:?}");
        }
    }
}

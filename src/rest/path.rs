use crate::error::Error;
use url::Url;

/// Location of a resource below `{host}/api/`.
///
/// Renders as `api/{version}/{component}[/{id}][/{segment}...]` followed by
/// any query pairs. An empty id is skipped so callers can pass through
/// optional identifiers unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    api_version: String,
    component: String,
    id: Option<String>,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl ResourcePath {
    pub fn new(api_version: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            component: component.into(),
            id: None,
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.id = if id.is_empty() { None } else { Some(id) };
        self
    }

    /// Appends a path segment after the id.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub(crate) fn with_query(mut self, params: &[(&str, &str)]) -> Self {
        self.query.extend(
            params
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        self
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub(crate) fn to_url(&self, host: &Url) -> Result<Url, Error> {
        let mut url = host.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path_segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidBaseUrl(host.to_string()))?;
            path_segments.pop_if_empty();
            path_segments.push("api");
            path_segments.push(&self.api_version);
            if !self.component.is_empty() {
                path_segments.push(&self.component);
            }
            if let Some(id) = &self.id {
                path_segments.push(id);
            }
            for segment in &self.segments {
                path_segments.push(segment);
            }
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(raw: &str) -> Url {
        Url::parse(raw).expect("host")
    }

    #[test]
    fn composes_version_component_and_id() {
        let url = ResourcePath::new("v2", "access_tier")
            .id("at-1")
            .to_url(&host("https://net.example.com"))
            .expect("url");
        assert_eq!(url.as_str(), "https://net.example.com/api/v2/access_tier/at-1");
    }

    #[test]
    fn trims_trailing_slash_and_drops_host_query() {
        let url = ResourcePath::new("v1", "security_policies")
            .query("PolicyID", "p-1")
            .to_url(&host("https://net.example.com/console/?debug=1#top"))
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://net.example.com/console/api/v1/security_policies?PolicyID=p-1"
        );
    }

    #[test]
    fn empty_id_is_skipped_and_segments_follow() {
        let url = ResourcePath::new("v2", "service_tunnel")
            .id("")
            .segment("security_policy")
            .to_url(&host("https://net.example.com"))
            .expect("url");
        assert_eq!(url.path(), "/api/v2/service_tunnel/security_policy");

        let url = ResourcePath::new("v2", "service_tunnel")
            .id("st-1")
            .segment("security_policy")
            .segment("p-9")
            .to_url(&host("https://net.example.com"))
            .expect("url");
        assert_eq!(url.path(), "/api/v2/service_tunnel/st-1/security_policy/p-9");
    }

    #[test]
    fn segments_are_percent_encoded() {
        let url = ResourcePath::new("v2", "access_tier")
            .id("a/b c")
            .to_url(&host("https://net.example.com"))
            .expect("url");
        assert_eq!(url.path(), "/api/v2/access_tier/a%2Fb%20c");
    }

    #[test]
    fn extra_query_pairs_are_appended_in_order() {
        let url = ResourcePath::new("v1", "netagent")
            .with_query(&[("CLUSTERNAME", "cluster-1"), ("HOSTNAME", "host a")])
            .to_url(&host("https://net.example.com"))
            .expect("url");
        assert_eq!(url.query(), Some("CLUSTERNAME=cluster-1&HOSTNAME=host+a"));
    }

    #[test]
    fn rejects_hosts_that_cannot_carry_paths() {
        let err = ResourcePath::new("v2", "scim")
            .to_url(&host("mailto:ops@example.com"))
            .expect_err("cannot-be-a-base");
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }
}

//! Microsoft Graph backed metadata source.

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::{StatusCode, Url};
use spexplorer_types::{AccessToken, FailureReason, ListInfo, ListMetadataEntry};
use std::time::Duration;

use crate::source::MetadataSource;
use crate::wire::GraphListResource;
use crate::{Error, Result};

pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Connection settings for [`GraphSource`].
#[derive(Debug, Clone)]
pub struct GraphSettings {
    pub base_url: String,
    /// Graph site identifier (`host,site-guid,web-guid`) or `root`.
    pub site_id: String,
    /// List titles or ids, in the order they should be displayed.
    pub lists: Vec<String>,
    pub timeout: Duration,
}

/// What a single list request turned into.
#[derive(Debug, PartialEq, Eq)]
enum ListOutcome {
    Fetch,
    Failed(FailureReason),
    AbortBulk,
}

fn classify_status(status: StatusCode) -> ListOutcome {
    if status.is_success() {
        return ListOutcome::Fetch;
    }
    match status {
        StatusCode::UNAUTHORIZED => ListOutcome::AbortBulk,
        StatusCode::FORBIDDEN => ListOutcome::Failed(FailureReason::AccessDenied),
        StatusCode::NOT_FOUND => ListOutcome::Failed(FailureReason::NotFound),
        other => ListOutcome::Failed(FailureReason::Unavailable {
            status: other.as_u16(),
        }),
    }
}

fn failed_list(list: &str, reason: FailureReason) -> ListMetadataEntry {
    ListMetadataEntry::Failed {
        list: ListInfo::new(list, list),
        reason,
    }
}

pub struct GraphSource {
    http: reqwest::Client,
    base_url: Url,
    site_id: String,
    lists: Vec<String>,
}

impl GraphSource {
    pub fn new(settings: GraphSettings) -> Result<Self> {
        if settings.site_id.trim().is_empty() {
            return Err(Error::Settings("graph.site_id is not set".to_string()));
        }

        let base_url = Url::parse(&settings.base_url).map_err(|_| Error::InvalidBaseUrl {
            url: settings.base_url.clone(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: settings.base_url,
            });
        }

        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("spexplorer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            site_id: settings.site_id,
            lists: settings.lists,
        })
    }

    fn list_url(&self, list: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so the segments are mutable
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["sites", self.site_id.as_str(), "lists", list]);
        }
        url.query_pairs_mut().append_pair("expand", "columns");
        url
    }

    async fn fetch_list(&self, token: &AccessToken, list: &str) -> Result<ListMetadataEntry> {
        let url = self.list_url(list);
        let response = self
            .http
            .get(url)
            .bearer_auth(token.expose())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(list = %list, status = status.as_u16(), "graph list response");

        match classify_status(status) {
            ListOutcome::Fetch => {
                let body = response.text().await?;
                match serde_json::from_str::<GraphListResource>(&body) {
                    Ok(resource) => Ok(resource.into_entry()),
                    Err(err) => {
                        // A malformed list body only costs that list
                        tracing::warn!(list = %list, error = %err, "undecodable list resource");
                        Ok(failed_list(
                            list,
                            FailureReason::Unavailable {
                                status: status.as_u16(),
                            },
                        ))
                    }
                }
            }
            ListOutcome::Failed(reason) => Ok(failed_list(list, reason)),
            ListOutcome::AbortBulk => Err(Error::Unauthorized),
        }
    }
}

#[async_trait]
impl MetadataSource for GraphSource {
    async fn get_all_list_metadata(&self, token: &AccessToken) -> Result<Vec<ListMetadataEntry>> {
        tracing::info!(
            site = %self.site_id,
            lists = self.lists.len(),
            "fetching list metadata from Microsoft Graph"
        );
        // try_join_all keeps input order
        try_join_all(self.lists.iter().map(|list| self.fetch_list(token, list))).await
    }

    fn describe(&self) -> String {
        format!("Microsoft Graph ({})", self.site_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GraphSettings {
        GraphSettings {
            base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            site_id: "contoso.sharepoint.com,abc,def".to_string(),
            lists: vec!["Tasks".to_string(), "Registro de Riscos".to_string()],
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_list_url_encodes_titles() {
        let source = GraphSource::new(settings()).unwrap();
        let url = source.list_url("Registro de Riscos");
        assert_eq!(
            url.as_str(),
            "https://graph.microsoft.com/v1.0/sites/contoso.sharepoint.com,abc,def/lists/Registro%20de%20Riscos?expand=columns"
        );
    }

    #[test]
    fn test_list_url_with_trailing_slash_base() {
        let mut s = settings();
        s.base_url = "http://localhost:8080/graph/".to_string();
        let source = GraphSource::new(s).unwrap();
        assert_eq!(
            source.list_url("Tasks").as_str(),
            "http://localhost:8080/graph/sites/contoso.sharepoint.com,abc,def/lists/Tasks?expand=columns"
        );
    }

    #[test]
    fn test_rejects_missing_site() {
        let mut s = settings();
        s.site_id = "  ".to_string();
        assert!(matches!(GraphSource::new(s), Err(Error::Settings(_))));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut s = settings();
        s.base_url = "not a url".to_string();
        assert!(matches!(
            GraphSource::new(s),
            Err(Error::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(classify_status(StatusCode::OK), ListOutcome::Fetch);
        assert_eq!(classify_status(StatusCode::UNAUTHORIZED), ListOutcome::AbortBulk);
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN),
            ListOutcome::Failed(FailureReason::AccessDenied)
        );
        assert_eq!(
            classify_status(StatusCode::NOT_FOUND),
            ListOutcome::Failed(FailureReason::NotFound)
        );
        assert_eq!(
            classify_status(StatusCode::SERVICE_UNAVAILABLE),
            ListOutcome::Failed(FailureReason::Unavailable { status: 503 })
        );
    }

    #[test]
    fn test_describe_names_site() {
        let source = GraphSource::new(settings()).unwrap();
        assert!(source.describe().contains("contoso.sharepoint.com"));
    }

    mod http {
        use super::*;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        /// (list, status, body, delay in ms)
        type Route = (&'static str, u16, String, u64);

        /// Minimal HTTP/1.1 server answering `/lists/{name}` requests from `routes`.
        async fn serve(routes: Vec<Route>) -> String {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();

            tokio::spawn(async move {
                while let Ok((mut stream, _)) = listener.accept().await {
                    let routes = routes.clone();
                    tokio::spawn(async move {
                        let mut request = Vec::new();
                        let mut chunk = [0u8; 1024];
                        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                            let n = stream.read(&mut chunk).await.unwrap();
                            if n == 0 {
                                return;
                            }
                            request.extend_from_slice(&chunk[..n]);
                        }
                        let request = String::from_utf8_lossy(&request).to_string();
                        let path = request.split_whitespace().nth(1).unwrap_or("").to_string();

                        let (status, body, delay) = routes
                            .iter()
                            .find(|(name, ..)| path.contains(&format!("/lists/{name}?")))
                            .map(|(_, status, body, delay)| (*status, body.clone(), *delay))
                            .unwrap_or((404, String::new(), 0));

                        tokio::time::sleep(Duration::from_millis(delay)).await;
                        let response = format!(
                            "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                            body.len()
                        );
                        let _ = stream.write_all(response.as_bytes()).await;
                        let _ = stream.shutdown().await;
                    });
                }
            });

            format!("http://{addr}")
        }

        fn list_body(id: &str, name: &str) -> String {
            serde_json::json!({
                "id": id,
                "displayName": name,
                "webUrl": format!("https://contoso.sharepoint.com/Lists/{name}"),
                "columns": [
                    {"id": "c1", "name": "Title", "displayName": "Title", "text": {}}
                ]
            })
            .to_string()
        }

        fn source(base_url: String, lists: &[&str]) -> GraphSource {
            GraphSource::new(GraphSettings {
                base_url,
                site_id: "root".to_string(),
                lists: lists.iter().map(|l| l.to_string()).collect(),
                timeout: Duration::from_secs(5),
            })
            .unwrap()
        }

        fn token() -> AccessToken {
            AccessToken::new("secret").unwrap()
        }

        #[tokio::test]
        async fn test_forbidden_and_missing_lists_become_failed_entries() {
            let base = serve(vec![
                ("Tasks", 200, list_body("1", "Tasks"), 0),
                ("Risks", 403, String::new(), 0),
            ])
            .await;

            let entries = source(base, &["Tasks", "Risks", "Gone"])
                .get_all_list_metadata(&token())
                .await
                .unwrap();

            assert_eq!(entries.len(), 3);
            assert!(matches!(&entries[0], ListMetadataEntry::Ok { list, .. } if list.id == "1"));
            assert!(matches!(
                &entries[1],
                ListMetadataEntry::Failed {
                    list,
                    reason: FailureReason::AccessDenied
                } if list.id == "Risks"
            ));
            assert!(matches!(
                &entries[2],
                ListMetadataEntry::Failed { reason: FailureReason::NotFound, .. }
            ));
        }

        #[tokio::test]
        async fn test_unauthorized_aborts_bulk_call() {
            let base = serve(vec![
                ("Tasks", 200, list_body("1", "Tasks"), 0),
                ("Risks", 401, String::new(), 0),
            ])
            .await;

            let result = source(base, &["Tasks", "Risks"])
                .get_all_list_metadata(&token())
                .await;

            assert!(matches!(result, Err(Error::Unauthorized)));
        }

        #[tokio::test]
        async fn test_configured_order_survives_slow_responses() {
            let base = serve(vec![
                ("Slow", 200, list_body("1", "Slow"), 150),
                ("Fast", 200, list_body("2", "Fast"), 0),
            ])
            .await;

            let entries = source(base, &["Slow", "Fast"])
                .get_all_list_metadata(&token())
                .await
                .unwrap();

            let ids: Vec<&str> = entries.iter().map(|e| e.list().id.as_str()).collect();
            assert_eq!(ids, ["1", "2"]);
        }

        #[tokio::test]
        async fn test_undecodable_body_fails_only_that_list() {
            let broken = serde_json::json!({
                "columns": [{"id": "c1", "name": "x", "required": null}]
            })
            .to_string();
            let base = serve(vec![
                ("Tasks", 200, list_body("1", "Tasks"), 0),
                ("Broken", 200, broken, 0),
            ])
            .await;

            let entries = source(base, &["Tasks", "Broken"])
                .get_all_list_metadata(&token())
                .await
                .unwrap();

            assert!(matches!(&entries[0], ListMetadataEntry::Ok { .. }));
            assert!(matches!(
                &entries[1],
                ListMetadataEntry::Failed {
                    list,
                    reason: FailureReason::Unavailable { status: 200 }
                } if list.id == "Broken"
            ));
        }
    }
}

//! Retrieving listing pages.
//!
//! [`ListingFetcher`] is the transport seam: [`HttpFetcher`] talks to the
//! institute sites, tests substitute a fixed-page implementation.

use std::{future::Future, time::Duration};

use catalog_core::institute::Institute;
use reqwest::Client;
use url::Url;

use crate::{Error, FetchError, Result, SourceAdapter, listing::ListingExtraction};

/// Fetches the body of a listing page. One request per call, no retries.
pub trait ListingFetcher: Send + Sync {
  fn fetch<'a>(
    &'a self,
    url: &'a Url,
  ) -> impl Future<Output = Result<String, FetchError>> + Send + 'a;
}

/// [`ListingFetcher`] over HTTP(S) with a fixed per-request timeout.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  client: Client,
}

impl HttpFetcher {
  pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(user_agent)
      .build()
      .map_err(Error::Client)?;
    Ok(Self { client })
  }
}

impl ListingFetcher for HttpFetcher {
  async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
    let resp = self.client.get(url.clone()).send().await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(FetchError::Status {
        url:    url.to_string(),
        status: status.as_u16(),
      });
    }
    Ok(resp.text().await?)
  }
}

/// Fetch and extract `institute`'s listing page with `adapter`.
///
/// Row failures are logged here with the institute and row context and are
/// also returned in the extraction. A page-level error (bad base URL,
/// transport failure, non-success status) is returned to the caller, who
/// treats the institute as having no entries.
pub async fn fetch_listing<F: ListingFetcher>(
  adapter: &dyn SourceAdapter,
  fetcher: &F,
  institute: &Institute,
) -> Result<ListingExtraction> {
  let base = adapter.base_url(&institute.url)?;
  let url = adapter.listing_url(&base)?;

  tracing::debug!(institute = %institute.name, %url, "fetching listing");
  let html = fetcher.fetch(&url).await?;
  let extraction = adapter.extract(&html, &url)?;

  for failure in &extraction.failures {
    tracing::warn!(
      institute = %institute.name,
      row = failure.row,
      snippet = %failure.snippet,
      error = %failure.error,
      "skipping malformed row"
    );
  }

  Ok(extraction)
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use tokio::{
    io::{AsyncReadExt as _, AsyncWriteExt as _},
    net::TcpListener,
  };

  use super::*;
  use crate::institutes::Seoul;

  /// Serves canned pages keyed by full URL; anything else is a 404.
  struct CannedPages(HashMap<String, String>);

  impl ListingFetcher for CannedPages {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
      self.0.get(url.as_str()).cloned().ok_or_else(|| FetchError::Status {
        url:    url.to_string(),
        status: 404,
      })
    }
  }

  fn seoul() -> Institute {
    Institute {
      id:     "seoul".into(),
      name:   "서울교육연구정보원".into(),
      region: "서울".into(),
      url:    "https://serii.example.kr".into(),
    }
  }

  const LISTING_URL: &str =
    "https://serii.example.kr/cop/bbs/selectBoardList.do?bbsId=BBSMSTR_000000000121";

  const PAGE: &str = r#"
    <table class="board_list"><tbody>
      <tr><td class="title"><a href="/cop/bbs/view.do?nttId=1">2025 교육정책 연구보고서</a></td><td class="date">2025-03-02</td></tr>
      <tr><td class="title"><a href="javascript:void(0)">깨진 행</a></td><td class="date">2025-03-01</td></tr>
      <tr><td class="title"><a href="view.do?nttId=3">AI 수업 지도안</a></td><td class="date">2024.11.20</td></tr>
    </tbody></table>
  "#;

  #[tokio::test]
  async fn fetches_and_extracts_listing() {
    let fetcher = CannedPages(HashMap::from([(LISTING_URL.to_owned(), PAGE.to_owned())]));
    let out = fetch_listing(&Seoul, &fetcher, &seoul()).await.unwrap();

    assert_eq!(out.entries.len(), 2);
    assert_eq!(out.entries[0].link, "https://serii.example.kr/cop/bbs/view.do?nttId=1");
    assert_eq!(out.entries[1].link, "https://serii.example.kr/cop/bbs/view.do?nttId=3");
    assert_eq!(out.entries[1].date_text.as_deref(), Some("2024.11.20"));
    assert_eq!(out.failures.len(), 1);
    assert_eq!(out.failures[0].row, 1);
  }

  #[tokio::test]
  async fn http_error_is_returned() {
    let fetcher = CannedPages(HashMap::new());
    let r = fetch_listing(&Seoul, &fetcher, &seoul()).await;
    assert!(matches!(r, Err(Error::Fetch(FetchError::Status { status: 404, .. }))));
  }

  #[tokio::test]
  async fn bad_base_url_is_returned() {
    let fetcher = CannedPages(HashMap::new());
    let mut institute = seoul();
    institute.url = "serii.example.kr".into();
    let r = fetch_listing(&Seoul, &fetcher, &institute).await;
    assert!(matches!(r, Err(Error::InvalidBaseUrl { .. })));
  }

  // ─── HttpFetcher against a local socket ──────────────────────────────────

  /// Accept one connection and answer it with `response`, or hold it open
  /// without answering when `response` is `None`.
  async fn local_server(response: Option<&'static str>) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      let (mut socket, _) = listener.accept().await.unwrap();
      let mut request = [0u8; 2048];
      let _ = socket.read(&mut request).await;
      match response {
        Some(response) => {
          let _ = socket.write_all(response.as_bytes()).await;
          let _ = socket.shutdown().await;
        }
        None => tokio::time::sleep(Duration::from_secs(30)).await,
      }
    });
    Url::parse(&format!("http://{addr}/board/list.do")).unwrap()
  }

  fn http_fetcher(timeout: Duration) -> HttpFetcher {
    HttpFetcher::new(timeout, "catalog-harvest-test").unwrap()
  }

  #[tokio::test]
  async fn http_success_returns_body() {
    let url = local_server(Some(
      "HTTP/1.1 200 OK\r\ncontent-type: text/html; charset=utf-8\r\n\
       content-length: 15\r\nconnection: close\r\n\r\n<table></table>",
    ))
    .await;
    let body = http_fetcher(Duration::from_secs(5)).fetch(&url).await.unwrap();
    assert_eq!(body, "<table></table>");
  }

  #[tokio::test]
  async fn http_server_error_is_status() {
    let url = local_server(Some(
      "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\
       connection: close\r\n\r\n",
    ))
    .await;
    let r = http_fetcher(Duration::from_secs(5)).fetch(&url).await;
    assert!(matches!(r, Err(FetchError::Status { status: 500, .. })));
  }

  #[tokio::test]
  async fn silent_server_times_out_as_transport_error() {
    let url = local_server(None).await;
    let started = std::time::Instant::now();
    let r = http_fetcher(Duration::from_millis(300)).fetch(&url).await;

    assert!(matches!(r, Err(FetchError::Transport(_))));
    assert!(started.elapsed() < Duration::from_secs(10));
  }
}

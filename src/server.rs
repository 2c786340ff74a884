//! Blocking page server.
//!
//! Each `GET /` runs a fresh render pass and answers with the full document.
//! Responses carry a content-addressed ETag so unchanged pages revalidate with
//! `304 Not Modified`. Requests are handled one at a time on the calling thread.

use crate::rendering::{HtmlHost, RenderHost};
use crate::{Error, PageAssembler, Result, ServerConfig};
use log::{error, info, warn};
use sha2::{Digest, Sha256};
use std::net::SocketAddr;
use tiny_http::{Header, Method, Request, Response, Server};

/// A transport-independent response, converted to `tiny_http` at the edge
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    fn new(status: u16, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type", content_type.to_string())],
            body: body.into(),
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self::new(status, "text/plain; charset=utf-8", body)
    }

    fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// First header value with the given name, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn into_response(self) -> Result<Response<std::io::Cursor<Vec<u8>>>> {
        let mut response = Response::from_data(self.body).with_status_code(self.status);
        for (name, value) in &self.headers {
            let header = Header::from_bytes(name.as_bytes(), value.as_bytes())
                .map_err(|_| Error::ServerError(format!("invalid header {}: {}", name, value)))?;
            response = response.with_header(header);
        }
        Ok(response)
    }
}

/// Quoted SHA-256 of the body, as sent in `ETag`
pub fn etag_for(body: &[u8]) -> String {
    format!("\"{}\"", hex::encode(Sha256::digest(body)))
}

fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match
        .split(',')
        .map(|t| t.trim().trim_start_matches("W/"))
        .any(|t| t == "*" || t == etag)
}

/// Serves the assembled page through a [`RenderHost`]
pub struct PageServer<H: RenderHost = HtmlHost> {
    assembler: PageAssembler,
    host: H,
}

impl PageServer<HtmlHost> {
    pub fn new(assembler: PageAssembler) -> Self {
        Self::with_host(assembler, HtmlHost::new())
    }
}

impl<H: RenderHost> PageServer<H> {
    pub fn with_host(assembler: PageAssembler, host: H) -> Self {
        Self { assembler, host }
    }

    /// Route one request. `if_none_match` is the raw `If-None-Match` header, if any.
    pub fn handle(&self, method: &Method, url: &str, if_none_match: Option<&str>) -> Reply {
        if !matches!(method, Method::Get | Method::Head) {
            return Reply::text(405, "Method Not Allowed").with_header("Allow", "GET, HEAD");
        }

        let path = url.split(|c: char| c == '?' || c == '#').next().unwrap_or("/");
        match path {
            "/" | "" | "/index.html" => self.page(if_none_match),
            "/healthz" => Reply::text(200, "ok"),
            _ => Reply::text(404, "Not Found"),
        }
    }

    fn page(&self, if_none_match: Option<&str>) -> Reply {
        let page = self.assembler.assemble();
        let html = match self.host.render(&page) {
            Ok(html) => html,
            Err(e) => {
                error!("failed to render page: {}", e);
                return Reply::text(500, "Internal Server Error");
            }
        };

        let etag = etag_for(html.as_bytes());
        if if_none_match.is_some_and(|inm| etag_matches(inm, &etag)) {
            return Reply {
                status: 304,
                headers: Vec::new(),
                body: Vec::new(),
            }
            .with_header("ETag", etag)
            .with_header("Cache-Control", "no-cache");
        }

        Reply::new(200, self.host.content_type(), html)
            .with_header("ETag", etag)
            .with_header("Cache-Control", "no-cache")
    }

    fn respond(&self, request: Request) -> Result<()> {
        let if_none_match = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("If-None-Match"))
            .map(|h| h.value.as_str().to_string());

        let reply = self.handle(request.method(), request.url(), if_none_match.as_deref());
        info!("{} {} -> {}", request.method(), request.url(), reply.status);

        let response = reply.into_response()?;
        request
            .respond(response)
            .map_err(|e| Error::ServerError(format!("failed to send response: {}", e)))
    }

    /// Bind the listening socket without serving yet
    pub fn bind(self, config: &ServerConfig) -> Result<BoundServer<H>> {
        let server = Server::http(config.addr.as_str())
            .map_err(|e| Error::ServerError(format!("cannot bind {}: {}", config.addr, e)))?;
        Ok(BoundServer {
            inner: self,
            server,
        })
    }
}

/// A page server with an open listening socket
pub struct BoundServer<H: RenderHost = HtmlHost> {
    inner: PageServer<H>,
    server: Server,
}

impl<H: RenderHost> BoundServer<H> {
    /// The bound address, useful when listening on port 0
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until the listener shuts down
    pub fn run(self) -> Result<()> {
        match self.local_addr() {
            Some(addr) => info!("serving portfolio on http://{}", addr),
            None => info!("serving portfolio"),
        }
        for request in self.server.incoming_requests() {
            if let Err(e) = self.inner.respond(request) {
                warn!("request dropped: {}", e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCache;
    use crate::{AssetPaths, Content, Page, PageConfig};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn server() -> PageServer {
        let paths = AssetPaths {
            background: PathBuf::from("/nonexistent/bg.jpg"),
            profile: PathBuf::from("/nonexistent/me.jpg"),
        };
        let assembler = PageAssembler::new(PageConfig::default(), paths, Content::default())
            .with_cache(Arc::new(AssetCache::new()));
        PageServer::new(assembler)
    }

    #[test]
    fn serves_page_with_etag() {
        let reply = server().handle(&Method::Get, "/?utm=x", None);
        assert_eq!(reply.status, 200);
        assert_eq!(reply.header("content-type"), Some("text/html; charset=utf-8"));
        let etag = reply.header("ETag").unwrap();
        assert_eq!(etag, etag_for(&reply.body));
    }

    #[test]
    fn matching_etag_is_not_modified() {
        let s = server();
        let first = s.handle(&Method::Get, "/", None);
        let etag = first.header("ETag").unwrap().to_string();
        let second = s.handle(&Method::Get, "/", Some(&format!("W/{}", etag)));
        assert_eq!(second.status, 304);
        assert!(second.body.is_empty());
        assert_eq!(second.header("ETag"), Some(etag.as_str()));
        assert_eq!(second.header("Cache-Control"), Some("no-cache"));
    }

    #[test]
    fn serves_index_alias() {
        let s = server();
        let root = s.handle(&Method::Get, "/", None);
        let index = s.handle(&Method::Get, "/index.html", None);
        assert_eq!(index.status, 200);
        assert_eq!(index.header("ETag"), root.header("ETag"));
    }

    #[test]
    fn head_is_routed_like_get() {
        let reply = server().handle(&Method::Head, "/", None);
        assert_eq!(reply.status, 200);
        assert!(reply.header("ETag").is_some());
    }

    #[test]
    fn stale_etag_gets_full_page() {
        let reply = server().handle(&Method::Get, "/", Some("\"deadbeef\""));
        assert_eq!(reply.status, 200);
        assert!(!reply.body.is_empty());
    }

    #[test]
    fn unknown_routes_and_methods() {
        let s = server();
        assert_eq!(s.handle(&Method::Get, "/admin", None).status, 404);
        let r = s.handle(&Method::Post, "/", None);
        assert_eq!(r.status, 405);
        assert_eq!(r.header("Allow"), Some("GET, HEAD"));
        assert_eq!(s.handle(&Method::Get, "/healthz", None).body, b"ok");
    }

    struct FailingHost;

    impl RenderHost for FailingHost {
        fn render(&self, _page: &Page) -> Result<String> {
            Err(Error::RenderError("boom".into()))
        }
    }

    #[test]
    fn render_failure_is_500() {
        let s = PageServer::with_host(server().assembler, FailingHost);
        assert_eq!(s.handle(&Method::Get, "/", None).status, 500);
    }
}

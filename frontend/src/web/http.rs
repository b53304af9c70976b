//! 浏览器 HTTP 传输
//!
//! 用 `gloo-net` 的 fetch 封装实现核心 crate 的 [`HttpClient`]。

use async_trait::async_trait;
use gaide::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};
use gloo_net::http::{Request, RequestBuilder};

/// 基于 `window.fetch` 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Patch => Request::patch(url),
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = builder(req.method, &req.url);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(format!("网络错误: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("响应读取失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现核心库的 [`HttpClient`]。

use gloo_net::http::{Request, RequestBuilder};
use pancakes_shop::error::{ShopError, ShopResult};
use pancakes_shop::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use web_sys::RequestCredentials;

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Patch => Request::patch(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ShopResult<HttpResponse> {
        let mut builder = builder(req.method, &req.url);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }
        if req.with_credentials {
            // 会话保存在 Cookie 中，跨域部署时也要带上
            builder = builder.credentials(RequestCredentials::Include);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ShopError::network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ShopError::network(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ShopError::network(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

//! 浏览器 API 封装模块
//!
//! 核心库只定义 trait，这里提供浏览器中的实现：fetch、LocalStorage、定时器和 History 路由。

mod http;
pub mod router;
mod storage;
mod timer;

pub use http::FetchClient;
pub use storage::BrowserStorage;
pub use timer::{after, use_interval};

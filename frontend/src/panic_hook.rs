//! panic 处理
//!
//! 先交给 `console_error_panic_hook` 打印带堆栈的错误，再把页面换成提示，
//! 避免用户面对一个不再响应的界面。

use std::panic;

const FALLBACK_HTML: &str = r#"<div style="padding:2rem;text-align:center;font-family:sans-serif">
<h1>Something went wrong</h1>
<p>Please reload the page.</p>
</div>"#;

pub fn hook(info: &panic::PanicHookInfo) {
    console_error_panic_hook::hook(info);
    tracing::error!(%info, "application panicked");
    show_fallback();
}

fn show_fallback() {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    body.set_inner_html(FALLBACK_HTML);
}

/// 注册 panic hook，只需在启动时调用一次
pub fn install() {
    panic::set_hook(Box::new(hook));
}

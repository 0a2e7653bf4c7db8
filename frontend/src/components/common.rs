//! 通用小组件：加载状态、错误提示、表单字段

use leptos::prelude::*;
use pancakes_shop::cache::QueryState;
use pancakes_shop::error::{FieldError, field_error};

/// 金额显示
pub fn money(value: f64) -> String {
    format!("${:.2}", value)
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error text-sm py-2">
            <span>{message}</span>
        </div>
    }
}

/// 按查询状态渲染
///
/// 首次加载显示转圈；失败且没有旧数据时显示错误；有数据（包括后台刷新中的旧数据）时渲染内容。
pub fn query_view<T, V>(
    state: ReadSignal<QueryState<T>>,
    render: impl Fn(T) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let current = state.get();
        match current.data {
            Some(data) => render(data).into_any(),
            None if current.is_error => view! {
                <ErrorAlert message=current.error.unwrap_or_default() />
            }
            .into_any(),
            None => view! { <Spinner /> }.into_any(),
        }
    }
}

/// 查询结果作为表格行，还没有数据时为空列表
pub fn rows_of<T>(state: ReadSignal<QueryState<Vec<T>>>) -> Signal<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    Signal::derive(move || state.with(|s| s.data.clone().unwrap_or_default()))
}

/// 表格上方的加载 / 错误提示
#[component]
pub fn QueryStatus<T>(state: ReadSignal<QueryState<T>>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    move || {
        state.with(|s| {
            if s.is_error {
                Some(view! { <ErrorAlert message=s.error.clone().unwrap_or_default() /> }.into_any())
            } else if s.is_loading && s.data.is_none() {
                Some(view! { <Spinner /> }.into_any())
            } else {
                None
            }
        })
    }
}

/// 带标签和校验错误的输入框
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    /// 校验错误里的字段名
    name: &'static str,
    value: RwSignal<String>,
    #[prop(into)] errors: Signal<Vec<FieldError>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let error = move || errors.with(|errs| field_error(errs, name).map(str::to_string));

    view! {
        <div class="form-control">
            <label class="label" for=name>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=name
                type=input_type
                placeholder=placeholder
                class=move || {
                    if error().is_some() { "input input-bordered input-error" } else { "input input-bordered" }
                }
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error().is_some()>
                <label class="label">
                    <span class="label-text-alt text-error">{move || error().unwrap_or_default()}</span>
                </label>
            </Show>
        </div>
    }
}

/// 提交按钮，提交中显示转圈并禁用
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| "btn btn-primary".to_string());
    view! {
        <button type="submit" class=class disabled=move || pending.get()>
            <Show when=move || pending.get()>
                <span class="loading loading-spinner loading-sm"></span>
            </Show>
            {label}
        </button>
    }
}

/// 表单里不属于具体字段的错误（比如服务端返回的错误）
#[component]
pub fn FormAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|message| view! { <ErrorAlert message=message /> })
    }
}

/// 勾选框
#[component]
pub fn CheckboxField(#[prop(into)] label: String, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label cursor-pointer justify-start gap-3">
                <input
                    type="checkbox"
                    class="toggle toggle-primary toggle-sm"
                    prop:checked=move || value.get()
                    on:change=move |ev| value.set(event_target_checked(&ev))
                />
                <span class="label-text">{label}</span>
            </label>
        </div>
    }
}

/// 后台编辑用的弹窗
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal modal-open">
            <div class="modal-box max-w-lg space-y-2">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-lg">{title}</h3>
                    <button class="btn btn-ghost btn-sm btn-circle" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
                {children()}
            </div>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        </div>
    }
}

// =========================================================
// 数字输入
// =========================================================

/// 金额等非负小数；格式不对时记录一条字段错误
pub fn parse_amount(errors: &mut Vec<FieldError>, field: &'static str, raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => {
            errors.push(FieldError::new(field, "Enter a number of 0 or more"));
            None
        }
    }
}

/// 可留空的非负整数
pub fn parse_count(errors: &mut Vec<FieldError>, field: &'static str, raw: &str) -> Option<Option<u32>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    match raw.parse::<u32>() {
        Ok(value) => Some(Some(value)),
        Err(_) => {
            errors.push(FieldError::new(field, "Enter a whole number"));
            None
        }
    }
}

/// 空白输入视为未填写
pub fn non_blank(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        let mut errors = Vec::new();
        assert_eq!(parse_amount(&mut errors, "price", " 4.50 "), Some(4.5));
        assert_eq!(parse_amount(&mut errors, "price", "-1"), None);
        assert_eq!(parse_amount(&mut errors, "fee", "abc"), None);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].field, "fee");
    }

    #[test]
    fn test_parse_count_allows_blank() {
        let mut errors = Vec::new();
        assert_eq!(parse_count(&mut errors, "max", ""), Some(None));
        assert_eq!(parse_count(&mut errors, "max", "3"), Some(Some(3)));
        assert_eq!(parse_count(&mut errors, "max", "2.5"), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_money_and_blank_helpers() {
        assert_eq!(money(3.0), "$3.00");
        assert_eq!(non_blank("  "), None);
        assert_eq!(non_blank(" Mains "), Some("Mains".to_string()));
    }
}

//! 邮件链接相关页面：找回密码、重置密码、确认邮箱变更

use leptos::prelude::*;
use leptos::task::spawn_local;
use pancakes_shop::error::FieldError;
use pancakes_shop::route::AppRoute;
use pancakes_shop::session::validate_password_reset;

use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, FormAlert, FormField, Spinner, SubmitButton};
use crate::pages::login::AuthCard;
use crate::toast::use_toasts;
use crate::web::router::{Link, use_router};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let server_error = RwSignal::new(Option::<String>::None);
    let sent = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_string();
        if address.is_empty() {
            errors.set(vec![FieldError::new("email", "Email is required")]);
            return;
        }
        errors.set(Vec::new());
        pending.set(true);
        server_error.set(None);
        let session = auth.session();
        spawn_local(async move {
            let result = session.forgot_password(&address).await;
            pending.try_set(false);
            match result {
                Ok(message) => {
                    sent.try_set(Some(message));
                }
                Err(e) => {
                    server_error.try_set(Some(e.user_message().to_string()));
                }
            }
        });
    };

    view! {
        <AuthCard title="Forgot password">
            <Show
                when=move || sent.with(Option::is_none)
                fallback=move || view! {
                    <div role="alert" class="alert alert-success">
                        <span>{sent.get().unwrap_or_default()}</span>
                    </div>
                    <Link to=AppRoute::Login class="btn btn-ghost mt-4">"Back to sign in"</Link>
                }
            >
                <form class="space-y-2" on:submit=on_submit>
                    <p class="text-sm text-base-content/70">"We'll email you a link to reset your password."</p>
                    <FormAlert message=server_error />
                    <FormField label="Email" name="email" input_type="email" value=email errors=errors />
                    <SubmitButton label="Send reset link" pending=pending class="btn btn-primary w-full" />
                </form>
            </Show>
        </AuthCard>
    }
}

#[component]
pub fn ResetPasswordPage(token: String) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toasts = use_toasts();

    let token = StoredValue::new(token);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let server_error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let found = validate_password_reset(&password.get(), &confirm.get());
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        pending.set(true);
        server_error.set(None);
        let session = auth.session();
        let token = token.get_value();
        let new_password = password.get_untracked();
        spawn_local(async move {
            let result = session.reset_password(&token, &new_password).await;
            pending.try_set(false);
            match result {
                Ok(message) => {
                    toasts.success(message);
                    router.go(AppRoute::Login);
                }
                Err(e) => {
                    server_error.try_set(Some(e.user_message().to_string()));
                }
            }
        });
    };

    view! {
        <AuthCard title="Choose a new password">
            <Show
                when=move || token.with_value(|t| !t.is_empty())
                fallback=|| view! {
                    <ErrorAlert message="This reset link is invalid or incomplete." />
                    <Link to=AppRoute::ForgotPassword class="btn btn-ghost mt-4">"Request a new link"</Link>
                }
            >
                <form class="space-y-2" on:submit=on_submit>
                    <FormAlert message=server_error />
                    <FormField label="New password" name="password" input_type="password" value=password errors=errors />
                    <FormField label="Confirm password" name="confirm_password" input_type="password" value=confirm errors=errors />
                    <SubmitButton label="Reset password" pending=pending class="btn btn-primary w-full" />
                </form>
            </Show>
        </AuthCard>
    }
}

/// 打开页面即提交确认，不需要用户操作
#[component]
pub fn ConfirmEmailChangePage(token: String) -> impl IntoView {
    let auth = use_auth();
    let outcome = RwSignal::new(Option::<Result<String, String>>::None);

    if token.is_empty() {
        outcome.set(Some(Err("This confirmation link is invalid or incomplete.".to_string())));
    } else {
        let session = auth.session();
        spawn_local(async move {
            let result = session
                .confirm_email_change(&token)
                .await
                .map_err(|e| e.user_message().to_string());
            outcome.try_set(Some(result));
        });
    }

    view! {
        <AuthCard title="Confirm email change">
            {move || match outcome.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(Ok(message)) => view! {
                    <div role="alert" class="alert alert-success"><span>{message}</span></div>
                    <Link to=AppRoute::Profile class="btn btn-ghost mt-4">"Go to profile"</Link>
                }
                .into_any(),
                Some(Err(message)) => view! { <ErrorAlert message=message /> }.into_any(),
            }}
        </AuthCard>
    }
}

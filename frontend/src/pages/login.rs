//! 登录与注册

use leptos::prelude::*;
use leptos::task::spawn_local;
use pancakes_shop::error::FieldError;
use pancakes_shop::route::AppRoute;
use pancakes_shop::session::{RegistrationForm, validate_login};

use crate::auth::{login, use_auth};
use crate::components::common::{FormAlert, FormField, SubmitButton};
use crate::toast::use_toasts;
use crate::web::router::{Link, use_router};

/// 认证页面的卡片外框
#[component]
pub fn AuthCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="flex justify-center py-8">
            <div class="card w-full max-w-md shadow-xl bg-base-100">
                <div class="card-body">
                    <h1 class="card-title text-2xl justify-center mb-2">{title}</h1>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toasts = use_toasts();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let server_error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let found = validate_login(&email.get(), &password.get());
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        pending.set(true);
        server_error.set(None);
        spawn_local(async move {
            let result = login(auth, email.get_untracked().trim().to_string(), password.get_untracked()).await;
            pending.try_set(false);
            match result {
                Ok(user) => {
                    toasts.success(format!("Welcome back, {}", user.display_name()));
                    router.go(AppRoute::landing_for(user.role()));
                }
                Err(e) => {
                    server_error.try_set(Some(e.user_message().to_string()));
                }
            }
        });
    };

    view! {
        <AuthCard title="Sign in">
            <form class="space-y-2" on:submit=on_submit>
                <FormAlert message=server_error />
                <FormField label="Email" name="email" input_type="email" value=email errors=errors />
                <FormField label="Password" name="password" input_type="password" value=password errors=errors />
                <div class="flex justify-end">
                    <Link to=AppRoute::ForgotPassword class="link link-hover text-sm">"Forgot password?"</Link>
                </div>
                <SubmitButton label="Sign in" pending=pending class="btn btn-primary w-full" />
            </form>
            <p class="text-center text-sm mt-4">
                "New here? "
                <Link to=AppRoute::Register class="link link-primary">"Create an account"</Link>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toasts = use_toasts();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let server_error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = RegistrationForm {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };
        let found = form.validate();
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        pending.set(true);
        server_error.set(None);
        let session = auth.session();
        spawn_local(async move {
            let result = session.register(&form.to_request()).await;
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
        <AuthCard title="Create an account">
            <form class="space-y-2" on:submit=on_submit>
                <FormAlert message=server_error />
                <FormField label="Name" name="name" value=name errors=errors />
                <FormField label="Email" name="email" input_type="email" value=email errors=errors />
                <FormField label="Phone (optional)" name="phone" input_type="tel" value=phone errors=errors />
                <FormField label="Password" name="password" input_type="password" value=password errors=errors />
                <FormField label="Confirm password" name="confirm_password" input_type="password" value=confirm errors=errors />
                <SubmitButton label="Create account" pending=pending class="btn btn-primary w-full" />
            </form>
            <p class="text-center text-sm mt-4">
                "Already have an account? "
                <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
            </p>
        </AuthCard>
    }
}

use leptos::prelude::*;
use leptos::task::spawn_local;
use pancakes_shared::protocol::UpdateProfileRequest;
use pancakes_shop::error::{ErrorKind, FieldError};

use crate::auth::{update_profile, use_auth};
use crate::components::common::{FormAlert, FormField, SubmitButton};
use crate::toast::use_toasts;

fn changed(current: &str, original: Option<&str>) -> Option<String> {
    let current = current.trim();
    (current != original.unwrap_or_default().trim()).then(|| current.to_string())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let user = untrack(|| auth.user());
    let field = |value: Option<&str>| RwSignal::new(value.unwrap_or_default().to_string());
    let name = field(user.as_ref().map(|u| u.name.as_str()));
    let email = field(user.as_ref().map(|u| u.email.as_str()));
    let phone = field(user.as_ref().and_then(|u| u.phone.as_deref()));
    let address = field(user.as_ref().and_then(|u| u.address.as_deref()));

    let errors = RwSignal::new(Vec::<FieldError>::new());
    let server_error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(original) = auth.user() else {
            return;
        };
        if name.get().trim().is_empty() {
            errors.set(vec![FieldError::new("name", "Name is required")]);
            return;
        }
        errors.set(Vec::new());

        let req = UpdateProfileRequest {
            name: changed(&name.get(), Some(&original.name)),
            phone: changed(&phone.get(), original.phone.as_deref()),
            address: changed(&address.get(), original.address.as_deref()),
            email: changed(&email.get(), Some(&original.email)),
        };
        if req.name.is_none() && req.phone.is_none() && req.address.is_none() && req.email.is_none() {
            toasts.info("Nothing to update");
            return;
        }
        let email_changed = req.email.is_some();

        pending.set(true);
        server_error.set(None);
        spawn_local(async move {
            let result = update_profile(auth, req).await;
            pending.try_set(false);
            match result {
                Ok(user) => {
                    toasts.success("Profile updated");
                    if email_changed {
                        toasts.info("Check your inbox to confirm the new email address");
                        // 确认之前仍是旧邮箱
                        email.try_set(user.email);
                    }
                }
                Err(e) if e.kind == ErrorKind::Unauthorized => {}
                Err(e) => {
                    server_error.try_set(Some(e.user_message().to_string()));
                }
            }
        });
    };

    view! {
        <div class="max-w-lg mx-auto">
            <div class="card bg-base-100 shadow-sm">
                <form class="card-body space-y-2" on:submit=on_submit>
                    <h1 class="card-title text-2xl">"Profile"</h1>
                    <p class="text-sm text-base-content/60">
                        {move || auth.user().map(|u| format!("Signed in as {} ({})", u.email, u.role)).unwrap_or_default()}
                    </p>
                    <FormAlert message=server_error />
                    <FormField label="Name" name="name" value=name errors=errors />
                    <FormField label="Email" name="email" input_type="email" value=email errors=errors />
                    <FormField label="Phone" name="phone" input_type="tel" value=phone errors=errors />
                    <FormField label="Default delivery address" name="address" value=address errors=errors />
                    <SubmitButton label="Save" pending=pending />
                </form>
            </div>
        </div>
    }
}

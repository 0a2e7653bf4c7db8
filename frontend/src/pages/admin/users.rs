//! 用户管理：角色、启用状态、删除

use leptos::prelude::*;
use pancakes_shared::protocol::{AdminUsersRequest, DeleteUserRequest, UpdateUserRequest};
use pancakes_shared::{Role, User};

use crate::auth::use_auth;
use crate::components::common::{QueryStatus, rows_of};
use crate::components::data_table::DataTable;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::query::{use_mutation, use_query};

#[component]
pub fn UsersPage() -> impl IntoView {
    let role = RwSignal::new(Option::<Role>::None);
    let search = RwSignal::new(String::new());
    let users = use_query(move || AdminUsersRequest {
        role: role.get(),
        search: Some(search.get()),
    });
    let mutation = use_mutation();
    let me = use_auth();

    let actions = Callback::new(move |user: User| {
        let id = user.id;
        let current_role = user.role();
        let is_active = user.is_active;
        // 不能在这里降级或删除自己
        let is_self = untrack(|| me.user()).is_some_and(|u| u.id == id);

        view! {
            <select
                class="select select-bordered select-xs"
                disabled=is_self
                on:change=move |ev| {
                    if let Some(role) = Role::parse(&event_target_value(&ev)) {
                        mutation.run_with_toast(UpdateUserRequest { id, role: Some(role), ..Default::default() }, "Role updated");
                    }
                }
            >
                {Role::ALL
                    .into_iter()
                    .map(|r| view! { <option value=r.as_str() selected=current_role == Some(r)>{r.as_str()}</option> })
                    .collect_view()}
            </select>
            <button
                class="btn btn-ghost btn-xs"
                disabled=is_self
                on:click=move |_| mutation.run_with_toast(
                    UpdateUserRequest { id, is_active: Some(!is_active), ..Default::default() },
                    if is_active { "User deactivated" } else { "User activated" },
                )
            >
                {if is_active { "Deactivate" } else { "Activate" }}
            </button>
            {(!is_self).then(|| view! {
                <DeleteConfirmButton on_confirm=move |_| mutation.run_with_toast(DeleteUserRequest { id }, "User deleted") />
            })}
        }
        .into_any()
    });

    view! {
        <div class="flex flex-wrap gap-2">
            <input
                type="search"
                placeholder="Search name or email"
                class="input input-bordered input-sm"
                on:change=move |ev| search.set(event_target_value(&ev))
            />
            <select
                class="select select-bordered select-sm"
                on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)))
            >
                <option value="">"All roles"</option>
                {Role::ALL
                    .into_iter()
                    .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                    .collect_view()}
            </select>
        </div>
        <QueryStatus state=users />
        <DataTable rows=rows_of(users) actions=actions />
    }
}

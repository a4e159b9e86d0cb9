//! Login page: role selector, id and password, and the demo credentials card.
//!
//! No credentials are checked. A submit with both fields filled hands
//! `(role, id)` to `on_login`; anything else is ignored.

use leptos::prelude::*;

use crate::state::login::{DEMO_CREDENTIALS, LoginForm};
use crate::state::session::Role;

#[component]
pub fn LoginPage(on_login: Callback<(Role, String)>) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(LoginForm::submit) {
            Ok(accepted) => on_login.run(accepted),
            Err(e) => log::debug!("login submit ignored: {e}"),
        }
    };

    let role_button = move |role: Role, icon: &'static str, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if form.with(|f| f.role) == role { "btn btn--primary login-role" } else { "btn btn--outline login-role" }
                }
                on:click=move |_| form.update(|f| f.role = role)
            >
                <span class=format!("icon icon--{icon}") aria-hidden="true"></span>
                {label}
            </button>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__column">
                <div class="login-page__heading">
                    <span class="icon icon--xl icon--building text--primary" aria-hidden="true"></span>
                    <h1>"Hostel Management"</h1>
                    <p class="text--muted">"Sign in to your account"</p>
                </div>

                <div class="login-roles">
                    {role_button(Role::Student, "users", "Student")}
                    {role_button(Role::Admin, "shield", "Admin")}
                </div>

                <div class="card card--raised">
                    <div class="card__header">
                        <h2 class="card__title">
                            <span class="badge badge--secondary">{move || form.with(|f| f.role.badge_label())}</span>
                            "Login"
                        </h2>
                        <p class="card__description">{move || form.with(LoginForm::description)}</p>
                    </div>
                    <div class="card__content">
                        <form class="form" on:submit=on_submit>
                            <div class="form__field">
                                <label for="user-id">{move || form.with(LoginForm::id_label)}</label>
                                <input
                                    id="user-id"
                                    type="text"
                                    required=true
                                    placeholder=move || form.with(LoginForm::id_placeholder)
                                    prop:value=move || form.with(|f| f.id.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.id = value);
                                    }
                                />
                            </div>
                            <div class="form__field">
                                <label for="password">"Password"</label>
                                <input
                                    id="password"
                                    type="password"
                                    required=true
                                    placeholder="Enter your password"
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.password = value);
                                    }
                                />
                            </div>
                            <button class="btn btn--primary btn--block" type="submit">"Sign In"</button>
                        </form>
                    </div>
                </div>

                <div class="card card--muted">
                    <div class="card__content demo-credentials">
                        <p class="demo-credentials__title">"Demo Credentials:"</p>
                        <div class="demo-credentials__grid">
                            {DEMO_CREDENTIALS
                                .iter()
                                .map(|cred| {
                                    let heading = match cred.role {
                                        Role::Student => "Student:",
                                        Role::Admin => "Admin:",
                                    };
                                    view! {
                                        <div>
                                            <p class="demo-credentials__role">{heading}</p>
                                            <p>"ID: " {cred.id}</p>
                                            <p>"Pass: " {cred.password}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

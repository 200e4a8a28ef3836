//! Auth Tabs Component
//!
//! Login and registration forms behind two tabs.

use leptos::prelude::*;

use crate::controllers::portal::{LoginForm, RegistrationForm};

const GENDERS: &[&str] = &["Male", "Female"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

#[component]
pub fn AuthTabs(
    tab: RwSignal<AuthTab>,
    /// Prefilled after a successful registration
    login_email: RwSignal<String>,
    #[prop(into)] on_login: Callback<LoginForm>,
    #[prop(into)] on_register: Callback<RegistrationForm>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let tab_class = move |which: AuthTab| {
        move || if tab.get() == which { "tab active" } else { "tab" }
    };

    view! {
        <div class="auth-panel">
            <div class="auth-tabs">
                <button class=tab_class(AuthTab::Login) on:click=move |_| tab.set(AuthTab::Login)>
                    "Login"
                </button>
                <button class=tab_class(AuthTab::Register) on:click=move |_| tab.set(AuthTab::Register)>
                    "Register"
                </button>
            </div>
            {move || match tab.get() {
                AuthTab::Login => view! {
                    <LoginPane login_email=login_email on_login=on_login busy=busy />
                }
                .into_any(),
                AuthTab::Register => view! {
                    <RegisterPane on_register=on_register busy=busy />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn LoginPane(login_email: RwSignal<String>, on_login: Callback<LoginForm>, busy: Signal<bool>) -> impl IntoView {
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_login.run(LoginForm {
            email: login_email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || login_email.get()
                on:input=move |ev| login_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Login"</button>
        </form>
    }
}

#[component]
fn RegisterPane(on_register: Callback<RegistrationForm>, busy: Signal<bool>) -> impl IntoView {
    let form = RwSignal::new(RegistrationForm {
        gender: GENDERS[0].to_string(),
        ..RegistrationForm::default()
    });

    // Binds one text field of the form
    macro_rules! field {
        ($name:ident) => {
            (
                move || form.with(|f| f.$name.clone()),
                move |ev: web_sys::Event| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.$name = value);
                },
            )
        };
    }

    let (full_name, set_full_name) = field!(full_name);
    let (email, set_email) = field!(email);
    let (password, set_password) = field!(password);
    let (department, set_department) = field!(department);
    let (year, set_year) = field!(year);
    let (gender, set_gender) = field!(gender);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_register.run(form.get_untracked());
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <input type="text" placeholder="Full name" prop:value=full_name on:input=set_full_name />
            <input type="email" placeholder="Email" prop:value=email on:input=set_email />
            <input type="password" placeholder="Password" prop:value=password on:input=set_password />
            <input type="text" placeholder="Department" prop:value=department on:input=set_department />
            <input type="number" min="1" max="5" placeholder="Year" prop:value=year on:input=set_year />
            <select prop:value=gender on:change=set_gender>
                {GENDERS.iter().map(|g| view! { <option value=*g>{*g}</option> }).collect_view()}
            </select>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.physically_disabled)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.physically_disabled = checked);
                    }
                />
                "Physically disabled"
            </label>
            <button type="submit" disabled=move || busy.get()>"Register"</button>
        </form>
    }
}

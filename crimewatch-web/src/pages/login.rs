use crate::{
    api::CrimeWatchClient, config::FrontendConfig, models::app_state::SessionState, routes::MainRoute,
    session,
};
use shared::models::{AuthResponse, LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Combined sign-in / sign-up page; the toggle mirrors which request the
/// submit button issues.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let is_login = use_state(|| true);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let phone = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_session, session_dispatch) = use_store::<SessionState>();

    let onsubmit = {
        let is_login = is_login.clone();
        let name_handle = name.clone();
        let email_handle = email.clone();
        let password_handle = password.clone();
        let phone_handle = phone.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let session_dispatch = session_dispatch.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let signing_in = *is_login;
            let name_value = (*name_handle).clone();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            let phone_value = (*phone_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = session_dispatch.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                let result = if signing_in {
                    let request = LoginRequest {
                        email: email_value,
                        password: password_value,
                    };
                    client.login(&request).await
                } else {
                    let request = RegisterRequest {
                        name: name_value,
                        email: email_value,
                        password: password_value,
                        phone: if phone_value.is_empty() {
                            None
                        } else {
                            Some(phone_value)
                        },
                        city: FrontendConfig::default().home_city().to_string(),
                    };
                    client.register(&request).await
                };
                match result {
                    Ok(AuthResponse { token, user, .. }) => {
                        session::persist_token(&token);
                        dispatch.set(SessionState::authenticated(user));
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(err.to_string()));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_name_change = bind_input(name.clone());
    let on_email_change = bind_input(email.clone());
    let on_password_change = bind_input(password.clone());
    let on_phone_change = bind_input(phone.clone());

    let toggle_mode = {
        let is_login = is_login.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            is_login.set(!*is_login);
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty()
        || (*password).is_empty()
        || (!*is_login && (*name).is_empty())
        || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"CrimeWatch"}</h2>
                    <p class="text-base-content/70">{"Making cities safer together"}</p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    if !*is_login {
                        <>
                            <div class="form-control">
                                <label class="label" for="name">
                                    <span class="label-text">{"Full name"}</span>
                                </label>
                                <input
                                    id="name"
                                    class="input input-bordered"
                                    type="text"
                                    required=true
                                    value={(*name).clone()}
                                    oninput={on_name_change}
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="phone">
                                    <span class="label-text">{"Phone number"}</span>
                                </label>
                                <input
                                    id="phone"
                                    class="input input-bordered"
                                    type="tel"
                                    value={(*phone).clone()}
                                    oninput={on_phone_change}
                                />
                            </div>
                        </>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {
                                if is_busy {
                                    "Please wait..."
                                } else if *is_login {
                                    "Sign in"
                                } else {
                                    "Sign up"
                                }
                            }
                        </button>
                    </div>
                    <div class="text-center mt-2">
                        <button type="button" class="btn btn-link btn-sm" onclick={toggle_mode}>
                            {
                                if *is_login {
                                    "Don't have an account? Sign up"
                                } else {
                                    "Already have an account? Sign in"
                                }
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

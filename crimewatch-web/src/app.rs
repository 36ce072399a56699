use crate::api::CrimeWatchClient;
use crate::models::app_state::SessionState;
use crate::routes::MainRoute;
use crate::session;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let (session_state, session_dispatch) = use_store::<SessionState>();

    // Resolve the persisted session exactly once at mount. A stored token
    // either resolves to a user via GET /me or is discarded entirely; a
    // token is never kept without a resolvable user.
    {
        let dispatch = session_dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                match session::stored_token() {
                    None => dispatch.set(SessionState::anonymous()),
                    Some(token) => {
                        client.set_bearer_token(Some(token));
                        match client.current_user().await {
                            Ok(user) => dispatch.set(SessionState::authenticated(user)),
                            Err(err) => {
                                log(std::format!("session resolution failed: {err}").as_str());
                                session::clear_token();
                                client.set_bearer_token(None);
                                dispatch.set(SessionState::anonymous());
                            }
                        }
                    }
                }
            });
            || ()
        });
    }

    let logout_callback = {
        let dispatch = session_dispatch;
        yew::Callback::from(move |_| {
            // Idempotent: clearing an absent token is a no-op.
            session::clear_token();
            CrimeWatchClient::shared().set_bearer_token(None);
            dispatch.set(SessionState::anonymous());
        })
    };

    if session_state.loading {
        return html! { <crate::components::loading::Loading/> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| crate::routes::switch_with_logout(route, logout_callback.clone())} />
        </BrowserRouter>
    }
}

use crate::models::app_state::SessionState;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub on_logout: Callback<()>,
}

/// Profile card for the signed-in user; the fields are read-only and
/// re-fetched with the session rather than edited here.
#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let user = use_selector(|state: &SessionState| state.user.clone());
    let Some(user) = (*user).clone() else {
        return html! {};
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="card bg-base-200 shadow-sm max-w-xl mx-auto">
            <div class="card-body space-y-4">
                <div class="text-center">
                    <h2 class="text-2xl font-bold">{ &user.name }</h2>
                    <p class="text-base-content/70">{ &user.email }</p>
                </div>

                <div>
                    <p class="font-medium">{"Phone"}</p>
                    <p class="text-base-content/80">
                        { user.phone.clone().unwrap_or_else(|| "Not provided".to_string()) }
                    </p>
                </div>

                <div>
                    <p class="font-medium">{"City"}</p>
                    <p class="text-base-content/80">{ &user.city }</p>
                </div>

                <div>
                    <p class="font-medium">{"Member since"}</p>
                    <p class="text-base-content/80">{ user.created_at.clone() }</p>
                </div>

                <div class="pt-4 border-t border-base-300">
                    <button class="btn btn-error w-full" onclick={on_logout_click}>
                        {"Logout"}
                    </button>
                </div>
            </div>
        </div>
    }
}

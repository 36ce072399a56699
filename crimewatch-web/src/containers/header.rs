use crate::{
    components::header_nav_item::HeaderNavItem,
    config::FrontendConfig,
    models::app_state::SessionState,
    routes::{AdminRoute, AppRoute, MainRoute},
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
    #[prop_or_default]
    pub header_routes: Vec<AppRoute>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let config = FrontendConfig::new();
    let user = use_selector(|state: &SessionState| state.user.clone());
    let user_opt = (*user).clone();

    let render_routes = |routes: &[AppRoute]| -> Html {
        html! {
            { for routes.iter().map(|route| match route {
                AppRoute::Admin(admin_route) => html! {
                    <HeaderNavItem<AdminRoute>
                        current_route={props.current_route.clone()}
                        route={admin_route.clone()}
                    />
                },
                AppRoute::Main(main_route) => html! {
                    <HeaderNavItem<MainRoute>
                        current_route={props.current_route.clone()}
                        route={main_route.clone()}
                    />
                },
            }) }
        }
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(ref callback) = on_logout {
                callback.emit(());
            }
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    { format!("CrimeWatch · {}", config.home_city()) }
                </Link<MainRoute>>
            </a>
            <ul class="menu menu-horizontal">
                { render_routes(&props.header_routes) }
            </ul>
            <div class="flex items-center gap-2">
                {
                    user_opt.as_ref().map_or_else(
                        || html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        },
                        |user| html! {
                            <>
                                <span class="text-sm text-base-content/80 mr-2">{ &user.name }</span>
                                <button class="btn btn-ghost btn-sm" onclick={on_logout_click.clone()}>
                                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-4 h-4" />
                                    {"Logout"}
                                </button>
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}

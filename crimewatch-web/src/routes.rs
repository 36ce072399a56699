use crate::{containers::layout::Layout, models::app_state::SessionState, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/search")]
    Search,
    #[at("/submit")]
    Submit,
    #[at("/report/:report_id")]
    Report { report_id: String },
    #[at("/profile")]
    Profile,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The admin routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/admin")]
    CrimeTypes,
    #[at("/admin/reports")]
    Reports,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

/// The app routes.
#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    Main(MainRoute),
    Admin(AdminRoute),
}

impl Default for AppRoute {
    fn default() -> Self {
        AppRoute::Main(MainRoute::Home)
    }
}

impl From<AdminRoute> for AppRoute {
    fn from(route: AdminRoute) -> Self {
        AppRoute::Admin(route)
    }
}

impl From<MainRoute> for AppRoute {
    fn from(route: MainRoute) -> Self {
        AppRoute::Main(route)
    }
}

/// A route the header can render as a navigation item.
pub trait NavRoute: Routable {
    /// Label shown next to the icon.
    fn title(&self) -> &'static str;
    /// Icon rendered for the item.
    fn icon_id(&self) -> IconId;
}

impl NavRoute for MainRoute {
    fn title(&self) -> &'static str {
        match self {
            MainRoute::Home => "Home",
            MainRoute::Login => "Sign in",
            MainRoute::Search => "Search",
            MainRoute::Submit => "Report",
            MainRoute::Report { .. } => "Report details",
            MainRoute::Profile => "Profile",
            MainRoute::AdminRoot | MainRoute::Admin => "Admin",
            MainRoute::NotFound => "Not found",
        }
    }

    fn icon_id(&self) -> IconId {
        match self {
            MainRoute::Home => IconId::HeroiconsOutlineHome,
            MainRoute::Login => IconId::HeroiconsOutlineArrowRightOnRectangle,
            MainRoute::Search => IconId::HeroiconsOutlineMagnifyingGlass,
            MainRoute::Submit => IconId::HeroiconsOutlinePlusCircle,
            MainRoute::Report { .. } => IconId::HeroiconsOutlineDocumentText,
            MainRoute::Profile => IconId::HeroiconsOutlineUser,
            MainRoute::AdminRoot | MainRoute::Admin => IconId::HeroiconsOutlineShieldCheck,
            MainRoute::NotFound => IconId::HeroiconsOutlineExclamationTriangle,
        }
    }
}

impl NavRoute for AdminRoute {
    fn title(&self) -> &'static str {
        match self {
            AdminRoute::CrimeTypes => "Crime types",
            AdminRoute::Reports => "Moderation",
            AdminRoute::NotFound => "Not found",
        }
    }

    fn icon_id(&self) -> IconId {
        match self {
            AdminRoute::CrimeTypes => IconId::HeroiconsOutlineTag,
            AdminRoute::Reports => IconId::HeroiconsOutlineFlag,
            AdminRoute::NotFound => IconId::HeroiconsOutlineExclamationTriangle,
        }
    }
}

/// Navigation shown to every signed-in user, in header order.
pub(crate) fn main_nav_routes(is_admin: bool) -> Vec<AppRoute> {
    let mut routes = vec![
        AppRoute::Main(MainRoute::Home),
        AppRoute::Main(MainRoute::Search),
        AppRoute::Main(MainRoute::Submit),
        AppRoute::Main(MainRoute::Profile),
    ];
    if is_admin {
        routes.push(AppRoute::Main(MainRoute::AdminRoot));
    }
    routes
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &SessionState| state.clone());
    let is_authenticated = session.is_authenticated();
    let is_admin = session.is_admin();
    let header_routes = main_nav_routes(is_admin);
    let on_logout = props.on_logout.clone();

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Home => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout {header_routes} current_route={AppRoute::Main(MainRoute::Home)} on_logout={Some(on_logout)}>
                    <HomePage />
                </Layout>
            }
        }
        MainRoute::Search => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout {header_routes} current_route={AppRoute::Main(MainRoute::Search)} on_logout={Some(on_logout)}>
                    <SearchPage />
                </Layout>
            }
        }
        MainRoute::Submit => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout {header_routes} current_route={AppRoute::Main(MainRoute::Submit)} on_logout={Some(on_logout)}>
                    <SubmitReportPage />
                </Layout>
            }
        }
        MainRoute::Report { report_id } => {
            // Shareable deep link: stays reachable without a session.
            let route_clone = MainRoute::Report {
                report_id: report_id.clone(),
            };
            let header_routes = if is_authenticated {
                header_routes
            } else {
                Vec::new()
            };
            html! {
                <Layout {header_routes} current_route={AppRoute::Main(route_clone)} on_logout={Some(on_logout)}>
                    <ReportDetailPage {report_id} />
                </Layout>
            }
        }
        MainRoute::Profile => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout {header_routes} current_route={AppRoute::Main(MainRoute::Profile)} on_logout={Some(on_logout)}>
                    <ProfilePage on_logout={props.on_logout.clone()} />
                </Layout>
            }
        }
        MainRoute::AdminRoot | MainRoute::Admin => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            if !is_admin {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! {
                <Switch<AdminRoute> render={move |route| {
                    let on_logout = on_logout.clone();
                    switch_admin(route, on_logout.clone())
                }} />
            }
        }
        MainRoute::NotFound => {
            let header_routes = if is_authenticated {
                header_routes
            } else {
                Vec::new()
            };
            html! {
                <Layout {header_routes} current_route={AppRoute::Main(MainRoute::NotFound)} on_logout={Some(on_logout)}>
                    <ErrorPage />
                </Layout>
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}

/// Switch function for the admin routes.
fn switch_admin(route: AdminRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to admin route: {:?}", route).as_str());
    let header_routes = AdminRoute::iter()
        .filter(|route| {
            // Filter out the error routes
            route != &AdminRoute::NotFound
        })
        .map(AppRoute::Admin)
        .collect::<Vec<_>>();
    match route {
        AdminRoute::CrimeTypes => {
            let on_logout = on_logout.clone();
            html! {<Layout {header_routes} current_route={AppRoute::Admin(route)} on_logout={Some(on_logout)}>
            <AdminCrimeTypesPage /></Layout>}
        }
        AdminRoute::Reports => {
            let on_logout = on_logout.clone();
            html! {<Layout {header_routes} current_route={AppRoute::Admin(route)} on_logout={Some(on_logout)}>
            <AdminReportsPage /></Layout>}
        }
        AdminRoute::NotFound => html! {<Redirect<MainRoute> to={MainRoute::NotFound}/>},
    }
}

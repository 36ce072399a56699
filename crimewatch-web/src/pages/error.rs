use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Fallback page for unknown routes.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="text-center py-12 space-y-4">
            <h1 class="text-3xl font-bold">{"Page not found"}</h1>
            <p class="text-base-content/70">{"The page you are looking for does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {"Back to reports"}
            </Link<MainRoute>>
        </div>
    }
}

use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::routes::{AppRoute, NavRoute};

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps<R: NavRoute + Clone + PartialEq + Into<AppRoute> + 'static> {
    pub route: R,
    pub current_route: Option<AppRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item<R: NavRoute + Clone + PartialEq + Into<AppRoute> + 'static>(
    props: &HeaderNavItemProps<R>,
) -> Html {
    let route = props.route.clone();

    // Convert R to AppRoute for comparison
    let app_route: AppRoute = props.route.clone().into();
    let active_route_class = if props.current_route.as_ref() == Some(&app_route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<R> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <Icon icon_id={route.icon_id()} class="w-4 h-4" />
              {route.title()}
          </Link<R>>
      </li>
    }
}

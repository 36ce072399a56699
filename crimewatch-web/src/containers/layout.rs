use crate::containers::header::Header;
use crate::containers::page_content::PageContent;
use crate::routes::AppRoute;
use yew::{Callback, Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
    #[prop_or_default]
    pub header_routes: Vec<AppRoute>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
    <>
        <Header
            header_routes={props.header_routes.clone()}
            current_route={props.current_route.clone()}
            on_logout={props.on_logout.clone()}
        />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!("flex-grow", "p-4")}>
                <PageContent>
                    {props.children.clone()}
                </PageContent>
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"CrimeWatch · Making cities safer together"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}

use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PageContentProps {
    pub children: Children,
}

#[function_component(PageContent)]
pub fn page_content(props: &PageContentProps) -> Html {
    html! {
        <div class="max-w-4xl mx-auto w-full">
            {props.children.clone()}
        </div>
    }
}

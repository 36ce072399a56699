use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

/// Whether `text` carries anything worth sending; a whitespace-only comment
/// is a no-op and never reaches the network.
pub fn is_postable(text: &str) -> bool {
    !text.trim().is_empty()
}

#[derive(Properties, PartialEq, Clone)]
pub struct CommentComposerProps {
    pub text: String,
    pub on_text_change: Callback<String>,
    pub on_submit: Callback<()>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(CommentComposer)]
pub fn comment_composer(props: &CommentComposerProps) -> Html {
    let on_change = {
        let on_text_change = props.on_text_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_text_change.emit(target.value());
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        let disabled = props.disabled;
        Callback::from(move |event: yew::events::KeyboardEvent| {
            if event.key() == "Enter" && !disabled {
                event.prevent_default();
                on_submit.emit(());
            }
        })
    };

    let on_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: yew::events::MouseEvent| on_submit.emit(()))
    };

    html! {
        <div class="flex space-x-3">
            <input
                type="text"
                class="input input-bordered flex-1"
                placeholder="Add a comment..."
                value={props.text.clone()}
                oninput={on_change}
                onkeydown={on_keydown}
                disabled={props.disabled}
            />
            <button
                type="button"
                class="btn btn-primary"
                onclick={on_click}
                disabled={props.disabled || !is_postable(&props.text)}
            >
                {"Post"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_is_not_postable() {
        assert!(!is_postable(""));
        assert!(!is_postable("   "));
        assert!(!is_postable("\n\t "));
    }

    #[test]
    fn test_trimmed_text_is_postable() {
        assert!(is_postable("I saw this too."));
        assert!(is_postable("  leading and trailing  "));
    }
}

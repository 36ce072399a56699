use shared::models::{RATING_MAX, RATING_MIN};
use yew::{Callback, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct RatingStarsProps {
    /// The caller's current rating; stars up to it render filled.
    #[prop_or_default]
    pub value: Option<u8>,
    /// Emits the chosen value, `RATING_MIN..=RATING_MAX`.
    pub on_rate: Callback<u8>,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Ten star buttons; the selected value renders immediately through the
/// `value` prop, before any server round-trip resolves.
#[function_component(RatingStars)]
pub fn rating_stars(props: &RatingStarsProps) -> Html {
    let current = props.value.unwrap_or(0);

    html! {
        <div class="flex items-center space-x-1">
            { for (RATING_MIN..=RATING_MAX).map(|star| {
                let on_rate = props.on_rate.clone();
                let filled = star <= current;
                let class = if filled {
                    classes!("btn", "btn-ghost", "btn-xs", "px-0", "text-warning")
                } else {
                    classes!("btn", "btn-ghost", "btn-xs", "px-0", "text-base-content/30")
                };
                html! {
                    <button
                        type="button"
                        {class}
                        disabled={props.disabled}
                        onclick={Callback::from(move |_| on_rate.emit(star))}
                    >
                        <Icon icon_id={IconId::HeroiconsSolidStar} class="w-5 h-5" />
                    </button>
                }
            })}
            {
                props.value.map_or_else(|| html! {}, |value| html! {
                    <span class="text-sm text-base-content/70 ml-2">
                        { format!("Your rating: {value}/10") }
                    </span>
                })
            }
        </div>
    }
}

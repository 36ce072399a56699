use crate::api::CrimeWatchClient;
use crate::components::loading::Loading;
use crate::components::{CommentComposer, CommentList, RatingStars};
use crate::components::comment_composer::is_postable;
use crate::config::FrontendConfig;
use crate::models::app_state::SessionState;
use shared::models::{Comment, CommentDraft, CrimeReport, RatingDraft};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct ReportDetailPageProps {
    /// Route parameter of the shareable `/report/{id}` deep link.
    pub report_id: String,
}

/// Single-report view: full details, aggregate credibility, the caller's
/// own rating, and comments. Publicly reachable; rating and commenting
/// require a session.
#[function_component(ReportDetailPage)]
pub fn report_detail_page(props: &ReportDetailPageProps) -> Html {
    let report = use_state(|| None::<CrimeReport>);
    let comments = use_state(Vec::<Comment>::new);
    let my_rating = use_state(|| None::<u8>);
    let comment_text = use_state(String::new);
    let comment_busy = use_state(|| false);
    let loading = use_state(|| true);
    let session = use_selector(|state: &SessionState| state.clone());
    let is_authenticated = session.is_authenticated();

    {
        let report_handle = report.clone();
        let comments_handle = comments.clone();
        let my_rating_handle = my_rating.clone();
        let loading_handle = loading.clone();
        use_effect_with(
            (props.report_id.clone(), is_authenticated),
            move |(report_id, authenticated)| {
                let parsed = Uuid::parse_str(report_id);
                let authenticated = *authenticated;
                match parsed {
                    Ok(id) => {
                        spawn_local(async move {
                            let client = CrimeWatchClient::shared();
                            let city = FrontendConfig::default().home_city().to_string();
                            match client.report_by_id(&city, &id).await {
                                Ok(found) => report_handle.set(found),
                                Err(err) => log::error!("failed to fetch report: {err}"),
                            }
                            match client.comments(&id).await {
                                Ok(fetched) => comments_handle.set(fetched),
                                Err(err) => log::error!("failed to fetch comments: {err}"),
                            }
                            // Anonymous visitors never issue the rating call.
                            if authenticated {
                                match client.my_rating(&id).await {
                                    Ok(mine) => my_rating_handle.set(mine.rating),
                                    Err(err) => {
                                        log::error!("failed to fetch own rating: {err}");
                                    }
                                }
                            }
                            loading_handle.set(false);
                        });
                    }
                    Err(_) => loading_handle.set(false),
                }
                || ()
            },
        );
    }

    let on_rate = {
        let report = report.clone();
        let my_rating = my_rating.clone();
        Callback::from(move |value: u8| {
            if !RatingDraft::in_range(value) {
                return;
            }
            let Some(report_id) = (*report).as_ref().map(|current| current.id) else {
                return;
            };
            // Optimistic: the displayed own rating flips before the POST
            // resolves. The aggregate keeps its last-fetched value.
            my_rating.set(Some(value));
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                let draft = RatingDraft { rating: value };
                if let Err(err) = client.submit_rating(&report_id, &draft).await {
                    log::error!("failed to rate report: {err}");
                }
            });
        })
    };

    let on_comment_text = {
        let comment_text = comment_text.clone();
        Callback::from(move |value: String| comment_text.set(value))
    };

    let on_post_comment = {
        let report = report.clone();
        let comment_text = comment_text.clone();
        let comment_busy = comment_busy.clone();
        let comments = comments.clone();
        Callback::from(move |()| {
            if *comment_busy || !is_postable(&comment_text) {
                return;
            }
            let Some(report_id) = (*report).as_ref().map(|current| current.id) else {
                return;
            };
            let draft = CommentDraft {
                comment_text: (*comment_text).clone(),
            };
            comment_busy.set(true);
            let comment_text = comment_text.clone();
            let comment_busy = comment_busy.clone();
            let comments = comments.clone();
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                match client.post_comment(&report_id, &draft).await {
                    Ok(_) => {
                        comment_text.set(String::new());
                        // Re-fetch rather than append locally; the list stays
                        // whatever the server returns.
                        match client.comments(&report_id).await {
                            Ok(fetched) => comments.set(fetched),
                            Err(err) => log::error!("failed to refresh comments: {err}"),
                        }
                    }
                    Err(err) => log::error!("failed to add comment: {err}"),
                }
                comment_busy.set(false);
            });
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    let Some(current) = (*report).as_ref() else {
        return html! {
            <div class="text-center py-12 text-base-content/60">{"Report not found"}</div>
        };
    };

    let location_line = match &current.landmark {
        Some(landmark) => format!("{} · {}", current.location, landmark),
        None => current.location.clone(),
    };

    html! {
        <div class="space-y-6">
            <div class="card bg-base-200 shadow-sm">
                <div class="card-body space-y-3">
                    <div class="flex items-center justify-between">
                        <div>
                            <h3 class="font-semibold text-lg">{ &current.user_name }</h3>
                            <p class="text-sm text-base-content/70">{ current.created_at.short() }</p>
                        </div>
                        <span class="badge badge-error badge-outline">{ &current.crime_type }</span>
                    </div>

                    <div>
                        <p class="font-medium">{"Location"}</p>
                        <p class="text-base-content/80">{ location_line }</p>
                    </div>

                    <div>
                        <p class="font-medium">{"Incident time"}</p>
                        <p class="text-base-content/80">{ current.crime_time.format("%d %b %Y %H:%M").to_string() }</p>
                    </div>

                    {
                        current.criminal_name.as_ref().map_or_else(|| html! {}, |name| html! {
                            <div>
                                <p class="font-medium">{"Suspect"}</p>
                                <p class="text-base-content/80">{ name }</p>
                            </div>
                        })
                    }

                    <div>
                        <p class="font-medium">{"Details"}</p>
                        <p class="text-base-content/80">{ &current.crime_details }</p>
                    </div>

                    {
                        current.image_base64.as_ref().map_or_else(|| html! {}, |encoded| html! {
                            <div>
                                <p class="font-medium mb-1">{"Evidence"}</p>
                                <img
                                    src={format!("data:image/jpeg;base64,{encoded}")}
                                    alt="Crime evidence"
                                    class="max-w-full h-96 object-cover rounded-lg"
                                />
                            </div>
                        })
                    }

                    <div class="pt-4 border-t border-base-300 space-y-2">
                        <p class="font-medium">{"Credibility rating"}</p>
                        <div class="flex items-center gap-2">
                            <Icon icon_id={IconId::HeroiconsSolidStar} class="w-5 h-5 text-warning" />
                            <span class="text-lg">{ format!("{:.1}/10", current.avg_credibility) }</span>
                            <span class="text-sm text-base-content/60">
                                { format!("({} ratings)", current.total_ratings) }
                            </span>
                        </div>
                        {
                            if is_authenticated {
                                html! {
                                    <div>
                                        <p class="text-sm text-base-content/70 mb-1">{"Rate this report:"}</p>
                                        <RatingStars value={*my_rating} on_rate={on_rate} />
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 border border-base-300">
                <div class="card-body space-y-4">
                    <h3 class="font-semibold">{ format!("Comments ({})", comments.len()) }</h3>
                    {
                        if is_authenticated {
                            html! {
                                <CommentComposer
                                    text={(*comment_text).clone()}
                                    on_text_change={on_comment_text}
                                    on_submit={on_post_comment}
                                    disabled={*comment_busy}
                                />
                            }
                        } else {
                            html! {}
                        }
                    }
                    <CommentList comments={(*comments).clone()} />
                </div>
            </div>
        </div>
    }
}

use shared::models::CrimeReport;
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct ReportCardProps {
    pub report: CrimeReport,
}

/// One report in a feed or search result list.
#[function_component(ReportCard)]
pub fn report_card(props: &ReportCardProps) -> Html {
    let report = &props.report;
    let detail_route = MainRoute::Report {
        report_id: report.id.to_string(),
    };
    let location_line = match &report.landmark {
        Some(landmark) => format!("{} · {}", report.location, landmark),
        None => report.location.clone(),
    };

    html! {
        <div class="card bg-base-200 shadow-sm">
            <div class="card-body space-y-2">
                <div class="flex items-center justify-between">
                    <div>
                        <h3 class="font-semibold">{ &report.user_name }</h3>
                        <p class="text-sm text-base-content/70">{ report.created_at.short() }</p>
                    </div>
                    <span class="badge badge-error badge-outline">{ &report.crime_type }</span>
                </div>

                <div>
                    <p class="font-medium">{"Location"}</p>
                    <p class="text-base-content/80">{ location_line }</p>
                </div>

                <div>
                    <p class="font-medium">{"Incident time"}</p>
                    <p class="text-base-content/80">{ report.crime_time.format("%d %b %Y %H:%M").to_string() }</p>
                </div>

                {
                    report.criminal_name.as_ref().map_or_else(|| html! {}, |name| html! {
                        <div>
                            <p class="font-medium">{"Suspect"}</p>
                            <p class="text-base-content/80">{ name }</p>
                        </div>
                    })
                }

                <div>
                    <p class="font-medium">{"Details"}</p>
                    <p class="text-base-content/80">{ &report.crime_details }</p>
                </div>

                {
                    report.image_base64.as_ref().map_or_else(|| html! {}, |encoded| html! {
                        <div>
                            <p class="font-medium mb-1">{"Evidence"}</p>
                            <img
                                src={format!("data:image/jpeg;base64,{encoded}")}
                                alt="Crime evidence"
                                class="max-w-full h-48 object-cover rounded-lg"
                            />
                        </div>
                    })
                }

                <div class="flex items-center justify-between pt-2 border-t border-base-300">
                    <div class="flex items-center gap-3 text-sm text-base-content/70">
                        <span class="flex items-center gap-1">
                            <Icon icon_id={IconId::HeroiconsSolidStar} class="w-4 h-4 text-warning" />
                            { format!("{:.1}/10 ({} ratings)", report.avg_credibility, report.total_ratings) }
                        </span>
                        <span class="flex items-center gap-1">
                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-4 h-4" />
                            { report.comments_count }
                        </span>
                    </div>
                    <Link<MainRoute> to={detail_route} classes="btn btn-sm btn-ghost">
                        {"View details"}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}

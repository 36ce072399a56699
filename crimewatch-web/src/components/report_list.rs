use shared::models::CrimeReport;
use yew::{Html, Properties, function_component, html};

use crate::components::ReportCard;

#[derive(Properties, PartialEq)]
pub struct ReportListProps {
    pub reports: Vec<CrimeReport>,
    /// Headline of the empty-state affordance.
    #[prop_or("No reports yet".to_string())]
    pub empty_title: String,
    /// Supporting line under the empty-state headline.
    #[prop_or_default]
    pub empty_hint: String,
}

/// Renders a fetched report window, or a neutral empty state — an empty
/// result is not an error.
#[function_component(ReportList)]
pub fn report_list(props: &ReportListProps) -> Html {
    if props.reports.is_empty() {
        return html! {
            <div class="text-center py-12">
                <h3 class="text-xl font-medium">{ props.empty_title.clone() }</h3>
                <p class="text-base-content/70 mt-2">{ props.empty_hint.clone() }</p>
            </div>
        };
    }

    html! {
        <div class="space-y-4">
            { for props.reports.iter().map(|report| html! {
                <ReportCard key={report.id.to_string()} report={report.clone()} />
            })}
        </div>
    }
}

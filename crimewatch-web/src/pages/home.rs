use crate::api::CrimeWatchClient;
use crate::components::ReportList;
use crate::components::loading::Loading;
use crate::config::{FEED_WINDOW, FrontendConfig};
use shared::models::{CrimeReport, ReportQuery};
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with, use_state};

/// City feed: a fixed window of the newest reports, no pagination cursor.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let reports = use_state(Vec::<CrimeReport>::new);
    let loading = use_state(|| true);
    let config = FrontendConfig::new();

    {
        let reports_handle = reports.clone();
        let loading_handle = loading.clone();
        let city = config.home_city().to_string();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                let query = ReportQuery::feed(city, FEED_WINDOW);
                match client.list_reports(&query).await {
                    Ok(fetched) => reports_handle.set(fetched),
                    Err(err) => {
                        // Read path: log only, the empty state stands in.
                        log::error!("failed to fetch reports: {err}");
                    }
                }
                loading_handle.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold">{"Crime Reports"}</h2>
                <p class="text-base-content/70">{ format!("Recent reports in {}", config.home_city()) }</p>
            </div>
            <ReportList
                reports={(*reports).clone()}
                empty_title="No reports yet"
                empty_hint="Be the first to report a crime in your area"
            />
        </div>
    }
}

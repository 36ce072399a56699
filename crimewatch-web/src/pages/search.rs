use crate::api::CrimeWatchClient;
use crate::components::ReportList;
use crate::config::FrontendConfig;
use shared::models::{CrimeReport, CrimeType, ReportQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Search over the feed endpoint; the filters are assembled client-side and
/// the matching happens entirely on the server.
#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let search_text = use_state(String::new);
    let crime_type = use_state(String::new);
    let location = use_state(String::new);
    let crime_types = use_state(Vec::<CrimeType>::new);
    let reports = use_state(Vec::<CrimeReport>::new);
    let searched = use_state(|| false);
    let loading = use_state(|| false);

    {
        let crime_types_handle = crime_types.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                match client.crime_types().await {
                    Ok(fetched) => crime_types_handle.set(fetched),
                    Err(err) => log::error!("failed to fetch crime types: {err}"),
                }
            });
            || ()
        });
    }

    let on_search = {
        let search_text = search_text.clone();
        let crime_type = crime_type.clone();
        let location = location.clone();
        let reports_handle = reports.clone();
        let searched_handle = searched.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let query = ReportQuery {
                city: FrontendConfig::default().home_city().to_string(),
                search: optional(&search_text),
                crime_type: optional(&crime_type),
                location: optional(&location),
                ..ReportQuery::default()
            };
            let reports_handle = reports_handle.clone();
            let searched_handle = searched_handle.clone();
            let loading_handle = loading_handle.clone();
            loading_handle.set(true);
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                match client.list_reports(&query).await {
                    Ok(fetched) => {
                        reports_handle.set(fetched);
                        searched_handle.set(true);
                    }
                    Err(err) => log::error!("search failed: {err}"),
                }
                loading_handle.set(false);
            });
        })
    };

    let on_text_change = {
        let search_text = search_text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search_text.set(input.value());
            }
        })
    };

    let on_type_change = {
        let crime_type = crime_type.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                crime_type.set(select.value());
            }
        })
    };

    let on_location_change = {
        let location = location.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                location.set(input.value());
            }
        })
    };

    let is_busy = *loading;

    html! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">{"Search Reports"}</h2>

            <form class="space-y-4" onsubmit={on_search}>
                <input
                    type="text"
                    class="input input-bordered w-full"
                    placeholder="Search by keywords, location, or criminal name..."
                    value={(*search_text).clone()}
                    oninput={on_text_change}
                />
                <div class="grid grid-cols-2 gap-4">
                    <select class="select select-bordered" onchange={on_type_change}>
                        <option value="" selected={(*crime_type).is_empty()}>{"All Crime Types"}</option>
                        { for crime_types.iter().map(|entry| html! {
                            <option
                                value={entry.name.clone()}
                                selected={*crime_type == entry.name}
                            >
                                { &entry.name }
                            </option>
                        })}
                    </select>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="Filter by location"
                        value={(*location).clone()}
                        oninput={on_location_change}
                    />
                </div>
                <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                    { if is_busy { "Searching..." } else { "Search Reports" } }
                </button>
            </form>

            {
                if *searched {
                    html! {
                        <ReportList
                            reports={(*reports).clone()}
                            empty_title="No matching reports"
                            empty_hint="Try widening the filters"
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

use crate::api::{CrimeWatchClient, ImageAttachment};
use chrono::NaiveDateTime;
use gloo_timers::callback::Timeout;
use shared::models::{CrimeType, ReportDraft};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Largest accepted evidence image, in bytes (2 MiB).
pub(crate) const IMAGE_LIMIT_BYTES: u64 = 2 * 1024 * 1024;

/// Whether a file of `size_bytes` is over the evidence limit. Checked
/// before the file is read and before any request is issued.
pub(crate) fn exceeds_image_limit(size_bytes: f64) -> bool {
    size_bytes > IMAGE_LIMIT_BYTES as f64
}

/// Parse the value of a `datetime-local` input, with or without seconds.
pub(crate) fn parse_incident_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// How long the post-submission success panel stays up.
const SUCCESS_WINDOW_MS: u32 = 3_000;

async fn read_attachment(file: &File) -> Option<ImageAttachment> {
    let buffer = JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(ImageAttachment {
        bytes,
        file_name: file.name(),
        mime: file.type_(),
    })
}

/// Report Composer: collects the incident fields plus optional photo
/// evidence and submits them as one multipart request. No draft
/// persistence; a reload loses in-progress input.
#[function_component(SubmitReportPage)]
pub fn submit_report_page() -> Html {
    let crime_type = use_state(String::new);
    let location = use_state(String::new);
    let landmark = use_state(String::new);
    let crime_time = use_state(String::new);
    let criminal_name = use_state(String::new);
    let crime_details = use_state(String::new);
    let is_anonymous = use_state(|| false);
    let image = use_state(|| None::<File>);
    let image_error = use_state(|| None::<String>);
    let form_error = use_state(|| None::<String>);
    let crime_types = use_state(Vec::<CrimeType>::new);
    let loading = use_state(|| false);
    let success = use_state(|| false);

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

    let on_image_change = {
        let image = image.clone();
        let image_error = image_error.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let file = input.files().and_then(|files| files.get(0));
            match file {
                Some(file) if exceeds_image_limit(file.size()) => {
                    // Fail fast, before the file is ever read.
                    image_error.set(Some("Image size must be less than 2 MB".to_string()));
                    image.set(None);
                    input.set_value("");
                }
                Some(file) => {
                    image_error.set(None);
                    image.set(Some(file));
                }
                None => {
                    image_error.set(None);
                    image.set(None);
                }
            }
        })
    };

    let onsubmit = {
        let crime_type = crime_type.clone();
        let location = location.clone();
        let landmark = landmark.clone();
        let crime_time = crime_time.clone();
        let criminal_name = criminal_name.clone();
        let crime_details = crime_details.clone();
        let is_anonymous = is_anonymous.clone();
        let image = image.clone();
        let form_error = form_error.clone();
        let loading = loading.clone();
        let success = success.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }

            let Some(incident_time) = parse_incident_time(&crime_time) else {
                form_error.set(Some("Enter the incident date and time".to_string()));
                return;
            };
            if crime_type.is_empty() || location.is_empty() || crime_details.is_empty() {
                form_error.set(Some("Fill in all required fields".to_string()));
                return;
            }

            let draft = ReportDraft {
                crime_type: (*crime_type).clone(),
                location: (*location).clone(),
                landmark: if landmark.is_empty() {
                    None
                } else {
                    Some((*landmark).clone())
                },
                crime_time: incident_time,
                criminal_name: if criminal_name.is_empty() {
                    None
                } else {
                    Some((*criminal_name).clone())
                },
                crime_details: (*crime_details).clone(),
                is_anonymous: *is_anonymous,
            };
            let selected_image = (*image).clone();

            form_error.set(None);
            loading.set(true);

            let crime_type = crime_type.clone();
            let location = location.clone();
            let landmark = landmark.clone();
            let crime_time = crime_time.clone();
            let criminal_name = criminal_name.clone();
            let crime_details = crime_details.clone();
            let is_anonymous = is_anonymous.clone();
            let image = image.clone();
            let loading = loading.clone();
            let success = success.clone();
            spawn_local(async move {
                let attachment = match selected_image {
                    Some(ref file) => read_attachment(file).await,
                    None => None,
                };

                let client = CrimeWatchClient::shared();
                match client.submit_report(&draft, attachment).await {
                    Ok(_) => {
                        crime_type.set(String::new());
                        location.set(String::new());
                        landmark.set(String::new());
                        crime_time.set(String::new());
                        criminal_name.set(String::new());
                        crime_details.set(String::new());
                        is_anonymous.set(false);
                        image.set(None);
                        success.set(true);
                        let success = success.clone();
                        Timeout::new(SUCCESS_WINDOW_MS, move || success.set(false)).forget();
                    }
                    Err(err) => {
                        // Write path: a blocking alert with the server detail.
                        if let Some(window) = web_sys::window() {
                            let _ = window
                                .alert_with_message(&format!("Failed to submit report: {err}"));
                        }
                    }
                }
                loading.set(false);
            });
        })
    };

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
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

    let on_details_change = {
        let crime_details = crime_details.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                crime_details.set(area.value());
            }
        })
    };

    let on_anonymous_change = {
        let is_anonymous = is_anonymous.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                is_anonymous.set(input.checked());
            }
        })
    };

    let on_location_change = bind_input(location.clone());
    let on_landmark_change = bind_input(landmark.clone());
    let on_time_change = bind_input(crime_time.clone());
    let on_criminal_change = bind_input(criminal_name.clone());

    if *success {
        return html! {
            <div class="text-center py-12 space-y-2">
                <h2 class="text-2xl font-bold">{"Report Submitted"}</h2>
                <p class="text-base-content/70">{"Your crime report has been submitted successfully."}</p>
            </div>
        };
    }

    let is_busy = *loading;

    html! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold">{"Report a Crime"}</h2>
                <p class="text-base-content/70">{"Help make your community safer"}</p>
            </div>

            <form class="space-y-4" onsubmit={onsubmit}>
                if let Some(message) = &*form_error {
                    <div class="alert alert-error">
                        <span>{message.clone()}</span>
                    </div>
                }

                <div class="form-control">
                    <label class="label" for="crime-type">
                        <span class="label-text">{"Crime type *"}</span>
                    </label>
                    <select id="crime-type" class="select select-bordered" required=true onchange={on_type_change}>
                        <option value="" selected={(*crime_type).is_empty()}>{"Select crime type"}</option>
                        { for crime_types.iter().map(|entry| html! {
                            <option
                                value={entry.name.clone()}
                                selected={*crime_type == entry.name}
                            >
                                { &entry.name }
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-control">
                    <label class="label" for="location">
                        <span class="label-text">{"Location *"}</span>
                    </label>
                    <input
                        id="location"
                        class="input input-bordered"
                        type="text"
                        placeholder="Enter location (e.g., street name, area)"
                        required=true
                        value={(*location).clone()}
                        oninput={on_location_change}
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="landmark">
                        <span class="label-text">{"Nearby landmark"}</span>
                    </label>
                    <input
                        id="landmark"
                        class="input input-bordered"
                        type="text"
                        placeholder="Any nearby landmark (optional)"
                        value={(*landmark).clone()}
                        oninput={on_landmark_change}
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="crime-time">
                        <span class="label-text">{"Incident date & time *"}</span>
                    </label>
                    <input
                        id="crime-time"
                        class="input input-bordered"
                        type="datetime-local"
                        required=true
                        value={(*crime_time).clone()}
                        oninput={on_time_change}
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="criminal-name">
                        <span class="label-text">{"Suspect name"}</span>
                    </label>
                    <input
                        id="criminal-name"
                        class="input input-bordered"
                        type="text"
                        placeholder="If known (optional)"
                        value={(*criminal_name).clone()}
                        oninput={on_criminal_change}
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="crime-details">
                        <span class="label-text">{"Crime details *"}</span>
                    </label>
                    <textarea
                        id="crime-details"
                        class="textarea textarea-bordered"
                        placeholder="Describe what happened in detail..."
                        rows="4"
                        required=true
                        value={(*crime_details).clone()}
                        oninput={on_details_change}
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="evidence">
                        <span class="label-text">{"Upload evidence (image)"}</span>
                    </label>
                    <input
                        id="evidence"
                        class="file-input file-input-bordered"
                        type="file"
                        accept="image/*"
                        onchange={on_image_change}
                    />
                    <span class="label-text-alt mt-1">{"Maximum size: 2 MB"}</span>
                    if let Some(message) = &*image_error {
                        <div class="alert alert-error mt-2">
                            <span>{message.clone()}</span>
                        </div>
                    }
                </div>

                <div class="form-control">
                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            class="checkbox"
                            checked={*is_anonymous}
                            onchange={on_anonymous_change}
                        />
                        <span class="label-text">{"Submit anonymously"}</span>
                    </label>
                </div>

                <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                    { if is_busy { "Submitting..." } else { "Submit Report" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_limit_boundary() {
        let limit = IMAGE_LIMIT_BYTES as f64;
        assert!(!exceeds_image_limit(0.0));
        assert!(!exceeds_image_limit(limit));
        assert!(exceeds_image_limit(limit + 1.0));
    }

    #[test]
    fn test_parse_datetime_local_value() {
        let parsed = parse_incident_time("2025-06-01T21:15").unwrap();
        assert_eq!(parsed.format("%Y-%m-%dT%H:%M:%S").to_string(), "2025-06-01T21:15:00");

        let with_seconds = parse_incident_time("2025-06-01T21:15:30").unwrap();
        assert_eq!(with_seconds.format("%S").to_string(), "30");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_incident_time("").is_none());
        assert!(parse_incident_time("yesterday").is_none());
        assert!(parse_incident_time("2025-06-01").is_none());
    }
}

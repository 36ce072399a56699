use crate::api::CrimeWatchClient;
use shared::models::{BlockRequest, CrimeReport};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Moderation console: every report regardless of block state, with a
/// per-row block toggle. Blocking only hides a report from public feeds;
/// the record itself is retained.
#[function_component(AdminReportsPage)]
pub fn admin_reports_page() -> Html {
    let reports = use_state(Vec::<CrimeReport>::new);
    let busy = use_state(|| false);

    {
        let reports_handle = reports.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                match client.all_reports_for_admin().await {
                    Ok(fetched) => reports_handle.set(fetched),
                    Err(err) => log::error!("failed to fetch reports for moderation: {err}"),
                }
            });
            || ()
        });
    }

    let on_toggle_block = {
        let reports = reports.clone();
        let busy = busy.clone();
        Callback::from(move |report: CrimeReport| {
            if *busy {
                return;
            }
            busy.set(true);
            let reports = reports.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                let block = BlockRequest {
                    is_blocked: !report.is_blocked,
                    reason: None,
                };
                match client.set_report_blocked(&report.id, &block).await {
                    Ok(_) => {
                        let mut next = (*reports).clone();
                        if let Some(entry) = next.iter_mut().find(|entry| entry.id == report.id) {
                            entry.is_blocked = block.is_blocked;
                        }
                        reports.set(next);
                    }
                    Err(err) => {
                        let action = if report.is_blocked { "unblock" } else { "block" };
                        alert(&format!("Failed to {action} report: {err}"));
                    }
                }
                busy.set(false);
            });
        })
    };

    let is_busy = *busy;

    html! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">{"Report Moderation"}</h2>

            {
                if reports.is_empty() {
                    html! {
                        <div class="text-center py-12 text-base-content/60">
                            {"No reports to moderate"}
                        </div>
                    }
                } else {
                    html! {
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{"Reporter"}</th>
                                        <th>{"Type"}</th>
                                        <th>{"Location"}</th>
                                        <th>{"Filed"}</th>
                                        <th>{"Status"}</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for reports.iter().map(|report| {
                                        let on_click = {
                                            let on_toggle_block = on_toggle_block.clone();
                                            let report = report.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                on_toggle_block.emit(report.clone());
                                            })
                                        };
                                        html! {
                                            <tr key={report.id.to_string()}>
                                                <td>{ &report.user_name }</td>
                                                <td>{ &report.crime_type }</td>
                                                <td>{ &report.location }</td>
                                                <td>{ report.created_at.short() }</td>
                                                <td>
                                                    {
                                                        if report.is_blocked {
                                                            html! { <span class="badge badge-error">{"Blocked"}</span> }
                                                        } else {
                                                            html! { <span class="badge badge-success">{"Visible"}</span> }
                                                        }
                                                    }
                                                </td>
                                                <td>
                                                    <button class="btn btn-sm btn-outline" onclick={on_click} disabled={is_busy}>
                                                        { if report.is_blocked { "Unblock" } else { "Block" } }
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })}
                                </tbody>
                            </table>
                        </div>
                    }
                }
            }
        </div>
    }
}

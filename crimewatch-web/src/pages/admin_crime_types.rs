use crate::api::CrimeWatchClient;
use shared::models::{CrimeType, CrimeTypeDraft};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// A taxonomy name the console is willing to submit: non-empty once trimmed.
pub(crate) fn acceptable_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Crime-type taxonomy console: add, rename in place, delete. Every failed
/// mutation surfaces the server's detail in a blocking alert; nothing
/// retries.
#[function_component(AdminCrimeTypesPage)]
pub fn admin_crime_types_page() -> Html {
    let entries = use_state(Vec::<CrimeType>::new);
    let new_name = use_state(String::new);
    let editing = use_state(|| None::<(Uuid, String)>);
    let busy = use_state(|| false);

    {
        let entries_handle = entries.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                match client.crime_types().await {
                    Ok(fetched) => entries_handle.set(fetched),
                    Err(err) => log::error!("failed to fetch crime types: {err}"),
                }
            });
            || ()
        });
    }

    let on_add = {
        let entries = entries.clone();
        let new_name = new_name.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let Some(name) = acceptable_name(&new_name) else {
                return;
            };
            busy.set(true);
            let entries = entries.clone();
            let new_name = new_name.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                match client.create_crime_type(&CrimeTypeDraft { name }).await {
                    Ok(created) => {
                        let mut next = (*entries).clone();
                        next.push(created);
                        entries.set(next);
                        new_name.set(String::new());
                    }
                    Err(err) => alert(&format!("Failed to add crime type: {err}")),
                }
                busy.set(false);
            });
        })
    };

    let commit_rename = {
        let entries = entries.clone();
        let editing = editing.clone();
        let busy = busy.clone();
        Callback::from(move |()| {
            if *busy {
                return;
            }
            let Some(name) = (*editing)
                .as_ref()
                .and_then(|(_, draft_name)| acceptable_name(draft_name))
            else {
                return;
            };
            let Some(id) = (*editing).as_ref().map(|(id, _)| *id) else {
                return;
            };
            busy.set(true);
            let entries = entries.clone();
            let editing = editing.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                match client.rename_crime_type(&id, &CrimeTypeDraft { name }).await {
                    Ok(renamed) => {
                        let mut next = (*entries).clone();
                        if let Some(entry) = next.iter_mut().find(|entry| entry.id == id) {
                            *entry = renamed;
                        }
                        entries.set(next);
                        editing.set(None);
                    }
                    Err(err) => alert(&format!("Failed to rename crime type: {err}")),
                }
                busy.set(false);
            });
        })
    };

    let on_delete = {
        let entries = entries.clone();
        let busy = busy.clone();
        Callback::from(move |entry: CrimeType| {
            if *busy {
                return;
            }
            // Destructive and without undo; always confirm first.
            if !confirm(&format!("Delete crime type \"{}\"?", entry.name)) {
                return;
            }
            busy.set(true);
            let entries = entries.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let client = CrimeWatchClient::shared();
                match client.delete_crime_type(&entry.id).await {
                    Ok(_) => {
                        let mut next = (*entries).clone();
                        next.retain(|existing| existing.id != entry.id);
                        entries.set(next);
                    }
                    Err(err) => alert(&format!("Failed to delete crime type: {err}")),
                }
                busy.set(false);
            });
        })
    };

    let on_new_name_change = {
        let new_name = new_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                new_name.set(input.value());
            }
        })
    };

    let is_busy = *busy;

    html! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">{"Crime Types"}</h2>

            <form class="flex gap-3" onsubmit={on_add}>
                <input
                    type="text"
                    class="input input-bordered flex-1"
                    placeholder="New crime type name"
                    value={(*new_name).clone()}
                    oninput={on_new_name_change}
                />
                <button
                    class="btn btn-primary"
                    type="submit"
                    disabled={is_busy || acceptable_name(&new_name).is_none()}
                >
                    {"Add"}
                </button>
            </form>

            <ul class="divide-y divide-base-300">
                { for entries.iter().map(|entry| {
                    let is_editing = (*editing)
                        .as_ref()
                        .is_some_and(|(editing_id, _)| *editing_id == entry.id);

                    if is_editing {
                        let draft_name = (*editing)
                            .as_ref()
                            .map(|(_, name)| name.clone())
                            .unwrap_or_default();

                        let on_draft_change = {
                            let editing = editing.clone();
                            let id = entry.id;
                            Callback::from(move |event: InputEvent| {
                                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                                    editing.set(Some((id, input.value())));
                                }
                            })
                        };

                        let on_keydown = {
                            let commit_rename = commit_rename.clone();
                            Callback::from(move |event: KeyboardEvent| {
                                if event.key() == "Enter" {
                                    event.prevent_default();
                                    commit_rename.emit(());
                                }
                            })
                        };

                        let on_save = {
                            let commit_rename = commit_rename.clone();
                            Callback::from(move |_: MouseEvent| commit_rename.emit(()))
                        };

                        let on_cancel = {
                            let editing = editing.clone();
                            Callback::from(move |_: MouseEvent| editing.set(None))
                        };

                        html! {
                            <li key={entry.id.to_string()} class="py-3 flex items-center gap-3">
                                <input
                                    type="text"
                                    class="input input-bordered input-sm flex-1"
                                    value={draft_name}
                                    oninput={on_draft_change}
                                    onkeydown={on_keydown}
                                />
                                <button class="btn btn-sm btn-primary" onclick={on_save} disabled={is_busy}>
                                    {"Save"}
                                </button>
                                <button class="btn btn-sm btn-ghost" onclick={on_cancel}>
                                    {"Cancel"}
                                </button>
                            </li>
                        }
                    } else {
                        let on_edit = {
                            let editing = editing.clone();
                            let entry = entry.clone();
                            Callback::from(move |_: MouseEvent| {
                                editing.set(Some((entry.id, entry.name.clone())));
                            })
                        };

                        let on_delete_click = {
                            let on_delete = on_delete.clone();
                            let entry = entry.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(entry.clone()))
                        };

                        html! {
                            <li key={entry.id.to_string()} class="py-3 flex items-center justify-between">
                                <span>{ &entry.name }</span>
                                <div class="flex gap-2">
                                    <button class="btn btn-sm btn-ghost" onclick={on_edit}>
                                        {"Rename"}
                                    </button>
                                    <button class="btn btn-sm btn-error btn-outline" onclick={on_delete_click} disabled={is_busy}>
                                        {"Delete"}
                                    </button>
                                </div>
                            </li>
                        }
                    }
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptable_name_trims() {
        assert_eq!(acceptable_name("  Vandalism  "), Some("Vandalism".to_string()));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert_eq!(acceptable_name(""), None);
        assert_eq!(acceptable_name("   "), None);
    }
}

//! Generic create/edit form.
//!
//! The form edits the entity as [`FormValues`] and only converts to the
//! typed entity on submit. Lookup fields get their options from their
//! [`LookupSource`](contracts::shared::lookup::LookupSource); a scoped
//! source reloads whenever its parent field changes, and each reload takes a
//! ticket so an older response cannot overwrite a newer one.

use std::collections::HashMap;

use contracts::shared::form::FormValues;
use contracts::shared::list_view::LoadState;
use contracts::shared::lookup::LookupOption;
use contracts::shared::metadata::{FieldErrors, FieldMetadata, Widget};
use contracts::shared::request_guard::RequestSequence;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use serde_json::Value;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::service::{Attachment, CrudService};
use crate::domain::CrudPage;
use crate::shared::components::page_header::PageHeader;
use crate::system::auth::context::use_auth;

type Options = HashMap<&'static str, Vec<LookupOption>>;

fn lookup_fields<T: CrudPage>() -> impl Iterator<Item = &'static FieldMetadata> {
    T::form_fields().iter().filter(|f| f.widget.lookup().is_some())
}

/// Lookup fields whose source is scoped by `parent`.
fn dependents_of<T: CrudPage>(parent: &'static str) -> impl Iterator<Item = &'static FieldMetadata> {
    lookup_fields::<T>().filter(move |f| f.widget.lookup().and_then(|s| s.parent) == Some(parent))
}

pub fn entity_form_page<T: CrudPage>(id: Option<i64>) -> AnyView {
    let auth = use_auth();

    let values = RwSignal::new(FormValues::defaults::<T>());
    let errors = RwSignal::new(FieldErrors::new());
    let options = RwSignal::new(Options::new());
    let load_state = RwSignal::new(match id {
        Some(_) => LoadState::Loading,
        None => LoadState::Loaded(()),
    });
    let submit_error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let attachments = StoredValue::new_local(Vec::<Attachment>::new());

    // one sequence per lookup field plus one for the record and the submit
    let lookups: HashMap<&'static str, RequestSequence> = lookup_fields::<T>()
        .map(|f| (f.name, RequestSequence::new()))
        .collect();
    let requests = RequestSequence::new();
    on_cleanup({
        let lookups = lookups.clone();
        let requests = requests.clone();
        move || {
            requests.invalidate();
            lookups.values().for_each(RequestSequence::invalidate);
        }
    });
    let lookups = StoredValue::new(lookups);
    let requests = StoredValue::new(requests);

    let load_lookup = move |field: &'static FieldMetadata| {
        let Some(source) = field.widget.lookup().copied() else {
            return;
        };
        let Some(ticket) = lookups.with_value(|l| l.get(field.name).map(RequestSequence::issue)) else {
            return;
        };
        let parent_id = source.parent.and_then(|p| values.with_untracked(|v| v.id(p)));
        let Some(url) = source.url(parent_id) else {
            // nothing to offer until the parent is chosen
            options.update(|o| {
                o.insert(field.name, Vec::new());
            });
            return;
        };

        spawn_local(async move {
            let result = auth.client().get_json::<Value>(&url).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(response) => {
                    let items = if source.autofill.is_empty() {
                        values.with_untracked(|v| v.clone().apply_lookup::<T>(field, &response))
                    } else {
                        values
                            .try_update(|v| v.apply_lookup::<T>(field, &response))
                            .unwrap_or_default()
                    };
                    log::debug!("{} options for {}", items.len(), field.name);
                    options.update(|o| {
                        o.insert(field.name, items);
                    });
                }
                Err(e) => {
                    let message = auth.handle_error(&e);
                    submit_error.set(Some(format!("Could not load {}: {}", field.label, message)));
                }
            }
        });
    };

    let load_all_lookups = move || lookup_fields::<T>().for_each(load_lookup);

    match id {
        Some(id) => {
            let ticket = requests.with_value(RequestSequence::issue);
            spawn_local(async move {
                let result = T::Service::new(auth.client()).get_by_id(id).await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(entity) => {
                        values.set(FormValues::from_entity(&entity));
                        load_state.set(LoadState::Loaded(()));
                        // children are loaded for the stored parent, keeping the stored child
                        load_all_lookups();
                    }
                    Err(e) if e.is_not_found() => {
                        load_state.set(LoadState::Failed(format!("{} not found", T::ELEMENT_NAME)))
                    }
                    Err(e) => load_state.set(LoadState::Failed(auth.handle_error(&e))),
                }
            });
        }
        None => {
            values.update(|v| v.recompute::<T>());
            load_all_lookups();
        }
    }

    let on_input = move |field: &'static FieldMetadata, raw: String| {
        values.update(|v| {
            v.set_from_input(field, &raw);
            v.clear_dependents::<T>(field.name);
            v.recompute::<T>();
        });
        dependents_of::<T>(field.name).for_each(load_lookup);
    };

    let on_file = move |field: &'static FieldMetadata, ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        attachments.update_value(|a| {
            a.retain(|(name, _)| *name != field.name);
            if let Some(file) = file {
                a.push((field.name, file));
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        values.update(|v| v.recompute::<T>());
        let found = values.with_untracked(|v| v.validate::<T>());
        if !found.is_empty() {
            log::debug!("{} form has {} invalid fields", T::NAME, found.len());
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());

        let entity: T = match values.with_untracked(|v| v.to_entity::<T>()) {
            Ok(entity) => entity,
            Err(e) => {
                submit_error.set(Some(format!("Invalid form data: {}", e)));
                return;
            }
        };
        let files = attachments.with_value(Clone::clone);
        let ticket = requests.with_value(RequestSequence::issue);
        saving.set(true);
        submit_error.set(None);

        spawn_local(async move {
            let service = T::Service::new(auth.client());
            let result = match id {
                Some(id) => service.update(id, &entity, &files).await.map(|_| id),
                None => service
                    .create(&entity, &files)
                    .await
                    .map(|created| created.id().unwrap_or_default()),
            };
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(id) => {
                    log::info!("Saved {} {}", T::NAME, id);
                    saved.set(true);
                }
                Err(e) => {
                    submit_error.set(Some(auth.handle_error(&e)));
                    saving.set(false);
                }
            }
        });
    };

    let title = match id {
        Some(_) => format!("Edit {}", T::ELEMENT_NAME),
        None => format!("New {}", T::ELEMENT_NAME),
    };

    let fields = move || {
        T::form_fields()
            .iter()
            .map(|field| {
                view! {
                    <Show when=move || values.with(|v| field.is_visible(v.as_map()))>
                        <div class="form-group" class:form-group--invalid=move || errors.with(|e| e.get(field.name).is_some())>
                            <label for=field.name>{field.label}</label>
                            {field_input(field, values, options, on_input, on_file)}
                            {field.hint.map(|hint| view! { <div class="form-hint">{hint}</div> })}
                            {move || errors.with(|e| e.get(field.name).map(str::to_string)).map(|message| view! {
                                <div class="field-error">{message}</div>
                            })}
                        </div>
                    </Show>
                }
            })
            .collect_view()
    };

    // entity-level messages that do not belong to a single input
    let form_errors = move || {
        errors.with(|e| {
            e.iter()
                .filter(|(key, _)| T::form_fields().iter().all(|f| f.name != *key))
                .map(|(_, message)| message.to_string())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                <A href=format!("/{}", T::ROUTE) attr:class="button button--secondary">
                    "Back to list"
                </A>
            </PageHeader>

            {move || saved.get().then(|| view! { <Redirect path=format!("/{}", T::ROUTE) /> })}

            {move || match load_state.get() {
                LoadState::Idle | LoadState::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="error-message">{message}</div>
                }.into_any(),
                LoadState::Loaded(()) => ().into_any(),
            }}

            <Show when=move || load_state.with(|s| s.loaded().is_some())>
                <form class="entity-form" on:submit=on_submit>
                    {move || submit_error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                    {move || form_errors().into_iter().map(|m| view! { <div class="error-message">{m}</div> }).collect_view()}

                    {fields()}

                    <div class="form-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=saving
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </div>
                </form>
            </Show>
        </div>
    }
    .into_any()
}

/// Input element for one field, bound to the form values.
fn field_input(
    field: &'static FieldMetadata,
    values: RwSignal<FormValues>,
    options: RwSignal<Options>,
    on_input: impl Fn(&'static FieldMetadata, String) + Copy + Send + Sync + 'static,
    on_file: impl Fn(&'static FieldMetadata, leptos::ev::Event) + Copy + Send + Sync + 'static,
) -> AnyView {
    let value = move || values.with(|v| v.input_value(field));
    let disabled = !field.is_editable();

    match field.widget {
        Widget::TextArea => view! {
            <textarea
                id=field.name
                class="form-input"
                rows="3"
                prop:value=value
                readonly=disabled
                on:input=move |ev| on_input(field, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        Widget::Checkbox => view! {
            <input
                id=field.name
                type="checkbox"
                prop:checked=move || values.with(|v| v.is_checked(field.name))
                disabled=disabled
                on:change=move |ev| on_input(field, event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        Widget::Choice(choices) => view! {
            <select
                id=field.name
                class="form-input"
                disabled=disabled
                on:change=move |ev| on_input(field, event_target_value(&ev))
            >
                <option value="">"-- Select --"</option>
                {choices.iter().map(|choice| view! {
                    <option value=*choice prop:selected=move || value() == *choice>{*choice}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        Widget::Lookup(source) => {
            let waiting_for_parent = move || {
                source
                    .parent
                    .is_some_and(|parent| values.with(|v| v.id(parent).is_none()))
            };
            view! {
                <select
                    id=field.name
                    class="form-input"
                    disabled=move || disabled || waiting_for_parent()
                    on:change=move |ev| on_input(field, event_target_value(&ev))
                >
                    <option value="">
                        {move || if waiting_for_parent() { "-- Select the parent first --" } else { "-- Select --" }}
                    </option>
                    {move || options
                        .with(|o| o.get(field.name).cloned().unwrap_or_default())
                        .into_iter()
                        .map(|option| {
                            let key = option.value.to_string();
                            view! {
                                <option
                                    value=key.clone()
                                    prop:selected=move || value() == key
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        Widget::File => view! {
            <input
                id=field.name
                type="file"
                class="form-input"
                on:change=move |ev| on_file(field, ev)
            />
        }
        .into_any(),
        widget => view! {
            <input
                id=field.name
                type=widget.as_str()
                class="form-input"
                step=if matches!(widget, Widget::Decimal) { "any" } else { "1" }
                placeholder=field.placeholder.unwrap_or_default()
                prop:value=value
                readonly=disabled
                on:input=move |ev| on_input(field, event_target_value(&ev))
            />
        }
        .into_any(),
    }
}

//! Read-only detail page with optional summary panels.

use contracts::shared::display::DisplayField;
use contracts::shared::list_view::LoadState;
use contracts::shared::metadata::DetailPanel;
use contracts::shared::request_guard::RequestSequence;
use leptos::prelude::*;
use leptos_router::components::A;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use super::service::CrudService;
use crate::domain::CrudPage;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

fn field_rows(fields: &'static [DisplayField], json: &Value) -> impl IntoView {
    fields
        .iter()
        .map(|field| {
            let class = field.css_class(json).unwrap_or_default();
            view! {
                <div class="detail-row">
                    <span class="detail-row__label">{field.label}</span>
                    <span class=format!("detail-row__value {}", class)>{field.render(json)}</span>
                </div>
            }
        })
        .collect_view()
}

/// A panel fetched from its own endpoint once the record is shown.
#[component]
fn SummaryPanel(panel: &'static DetailPanel, id: i64) -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(LoadState::<Value>::Loading);

    let sequence = RequestSequence::new();
    let ticket = sequence.issue();
    on_cleanup(move || sequence.invalidate());

    spawn_local(async move {
        let result = auth.client().get_json::<Value>(&panel.url(id)).await;
        if !ticket.is_current() {
            return;
        }
        state.set(match result {
            Ok(json) => LoadState::Loaded(json),
            Err(e) => LoadState::Failed(auth.handle_error(&e)),
        });
    });

    view! {
        <section class="detail-panel">
            <h3 class="detail-panel__title">{panel.title}</h3>
            {move || match state.get() {
                LoadState::Idle | LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="error-message">{message}</div> }.into_any(),
                LoadState::Loaded(json) => field_rows(panel.fields, &json).into_any(),
            }}
        </section>
    }
}

pub fn entity_detail_page<T: CrudPage>(id: i64) -> AnyView {
    let auth = use_auth();
    let state = RwSignal::new(LoadState::<Value>::Loading);

    let sequence = RequestSequence::new();
    let ticket = sequence.issue();
    on_cleanup(move || sequence.invalidate());

    spawn_local(async move {
        let result = T::Service::new(auth.client()).get_by_id(id).await;
        if !ticket.is_current() {
            return;
        }
        state.set(match result {
            Ok(entity) => match serde_json::to_value(&entity) {
                Ok(json) => LoadState::Loaded(json),
                Err(e) => LoadState::Failed(format!("Unexpected {} data: {}", T::ELEMENT_NAME, e)),
            },
            Err(e) if e.is_not_found() => LoadState::Failed(format!("{} not found", T::ELEMENT_NAME)),
            Err(e) => LoadState::Failed(auth.handle_error(&e)),
        });
    });

    view! {
        <div class="page">
            <PageHeader title=format!("{} Details", T::ELEMENT_NAME)>
                <A href=format!("/{}/{}/edit", T::ROUTE, id) attr:class="button button--primary">
                    {icon("edit")}
                    "Edit"
                </A>
                <A href=format!("/{}", T::ROUTE) attr:class="button button--secondary">
                    {icon("arrow-left")}
                    "Back to list"
                </A>
            </PageHeader>

            {move || match state.get() {
                LoadState::Idle | LoadState::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="error-message">{message}</div>
                }.into_any(),
                LoadState::Loaded(json) => view! {
                    <section class="detail-card">
                        {field_rows(T::detail_fields(), &json)}
                    </section>
                    {T::detail_panels()
                        .iter()
                        .map(|panel| view! { <SummaryPanel panel=panel id=id /> })
                        .collect_view()}
                }.into_any(),
            }}
        </div>
    }
    .into_any()
}

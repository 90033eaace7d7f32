//! Generic list page: fetch all, then search, sort and paginate in memory.

use contracts::shared::list_view::{EntityRow, ListQuery, LoadState};
use contracts::shared::request_guard::RequestSequence;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::service::CrudService;
use crate::domain::CrudPage;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn entity_list_page<T: CrudPage>() -> AnyView {
    let auth = use_auth();
    let state = RwSignal::new(LoadState::<Vec<EntityRow>>::Idle);
    let query = RwSignal::new(ListQuery::default());
    let search = RwSignal::new(String::new());
    let delete_error = RwSignal::new(Option::<String>::None);

    let loads = RequestSequence::new();
    let deletes = RequestSequence::new();
    on_cleanup({
        let (loads, deletes) = (loads.clone(), deletes.clone());
        move || {
            loads.invalidate();
            deletes.invalidate();
        }
    });
    let loads = StoredValue::new(loads);
    let deletes = StoredValue::new(deletes);

    let fetch = move || {
        let ticket = loads.with_value(RequestSequence::issue);
        state.set(LoadState::Loading);
        spawn_local(async move {
            let result = T::Service::new(auth.client()).get_all().await;
            if !ticket.is_current() {
                return;
            }
            state.set(match result {
                Ok(items) => {
                    log::debug!("Loaded {} {}", items.len(), T::PLURAL);
                    LoadState::Loaded(items.iter().map(EntityRow::from_entity).collect())
                }
                Err(e) => LoadState::Failed(auth.handle_error(&e)),
            });
        });
    };

    let delete = move |id: i64| {
        if !confirm(&format!("Delete this {}?", T::ELEMENT_NAME.to_lowercase())) {
            return;
        }
        delete_error.set(None);
        let mounted = deletes.with_value(RequestSequence::current);
        spawn_local(async move {
            let result = T::Service::new(auth.client()).delete(id).await;
            if !mounted.is_current() {
                return;
            }
            match result {
                Ok(()) => {
                    log::info!("Deleted {} {}", T::NAME, id);
                    fetch();
                }
                Err(e) => delete_error.set(Some(auth.handle_error(&e))),
            }
        });
    };

    Effect::new(move |_| {
        let text = search.get();
        query.update(|q| q.set_search(text));
    });

    let page = Memo::new(move |_| {
        state.with(|s| s.loaded().map(|rows| query.with(|q| q.apply(rows))))
    });

    fetch();

    let columns = T::list_columns();

    view! {
        <div class="page">
            <PageHeader
                title=T::LIST_NAME
                subtitle=Signal::derive(move || page.get().map(|p| p.range_label()))
            >
                <A href=format!("/{}/new", T::ROUTE) attr:class="button button--primary">
                    {icon("plus")}
                    {format!("New {}", T::ELEMENT_NAME)}
                </A>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="list-toolbar">
                <Input value=search placeholder="Search..." />
            </div>

            {move || delete_error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            {move || match state.get() {
                LoadState::Idle | LoadState::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="error-message">
                        <span>{message}</span>
                        <Button on_click=move |_| fetch()>"Retry"</Button>
                    </div>
                }.into_any(),
                LoadState::Loaded(_) => view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    {columns.iter().enumerate().map(|(index, column)| view! {
                                        <th
                                            class="table__header-cell table__header-cell--sortable"
                                            on:click=move |_| query.update(|q| q.toggle_sort(index))
                                        >
                                            {column.label}
                                            {move || query.with(|q| q.sort_indicator(index))}
                                        </th>
                                    }).collect_view()}
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let rows = page.get().map(|p| p.items).unwrap_or_default();
                                    if rows.is_empty() {
                                        return view! {
                                            <tr>
                                                <td class="table__cell table__cell--empty" colspan=columns.len() + 1>
                                                    {format!("No {} found", T::LIST_NAME.to_lowercase())}
                                                </td>
                                            </tr>
                                        }.into_any();
                                    }
                                    rows.into_iter().map(|row| {
                                        let id = row.id;
                                        view! {
                                            <tr class="table__row">
                                                {row.cells.into_iter().map(|cell| view! {
                                                    <td class="table__cell">{cell}</td>
                                                }).collect_view()}
                                                <td class="table__cell table__cell--actions">
                                                    <A href=format!("/{}/{}", T::ROUTE, id) attr:title="View">
                                                        {icon("eye")}
                                                    </A>
                                                    <A href=format!("/{}/{}/edit", T::ROUTE, id) attr:title="Edit">
                                                        {icon("edit")}
                                                    </A>
                                                    <button
                                                        class="table__action table__action--danger"
                                                        title="Delete"
                                                        on:click=move |_| delete(id)
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>

                    <PaginationControls
                        current_page=Signal::derive(move || page.get().map(|p| p.page).unwrap_or_default())
                        total_pages=Signal::derive(move || page.get().map(|p| p.page_count).unwrap_or(1))
                        range_label=Signal::derive(move || page.get().map(|p| p.range_label()).unwrap_or_default())
                        page_size=Signal::derive(move || query.with(|q| q.page_size))
                        on_page_change=Callback::new(move |p| query.update(|q| q.page = p))
                        on_page_size_change=Callback::new(move |size| query.update(|q| q.set_page_size(size)))
                    />
                }.into_any(),
            }}
        </div>
    }
    .into_any()
}

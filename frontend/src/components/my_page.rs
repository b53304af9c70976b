//! 我的文档：按分类分组的列表

use crate::auth::use_auth;
use crate::components::layout::{Layout, Tone};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use gaide::library::{CategoryGroup, group_by_category, listing_error_message, normalize};
use gaide_shared::DocumentSummary;
use gaide_shared::date::format_created_date;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
enum ListState {
    Loading,
    Loaded(Vec<CategoryGroup>),
    Error(String),
}

#[component]
fn DocumentItem(doc: DocumentSummary) -> impl IntoView {
    let router = use_router();
    let date = doc.created_at.as_deref().and_then(format_created_date);
    let id = doc.id;

    view! {
        <li>
            <button
                class="w-full text-left p-3 rounded-box hover:bg-base-200 flex justify-between"
                on:click=move |_| router.go(AppRoute::Document(id.clone()))
            >
                <span class="font-medium">{doc.title}</span>
                <span class="text-sm text-base-content/50">{date}</span>
            </button>
        </li>
    }
}

#[component]
fn CategorySection(group: CategoryGroup) -> impl IntoView {
    let info = group.category.info();
    let count = group.len();

    view! {
        <section class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center gap-2">
                    <span
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {};", info.indicator_color)
                    ></span>
                    <h2 class="card-title">{group.category.label()}</h2>
                    <span class="text-base-content/50">{format!("({})", count)}</span>
                </div>
                {if group.is_empty() {
                    view! { <p class="text-base-content/50 py-4">"작성한 글이 없습니다"</p> }.into_any()
                } else {
                    view! {
                        <ul class="divide-y divide-base-200">
                            {group
                                .documents
                                .into_iter()
                                .map(|doc| view! { <DocumentItem doc=doc /> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </div>
        </section>
    }
}

#[component]
pub fn MyPage() -> impl IntoView {
    let auth = use_auth();
    let (state, set_state) = signal(ListState::Loading);

    spawn_local(async move {
        let next = match auth.api().get_my_documents().await {
            Ok(records) => ListState::Loaded(group_by_category(&normalize(records))),
            Err(e) => {
                tracing::error!(error = %e, "failed to load documents");
                ListState::Error(listing_error_message(&e))
            }
        };
        set_state.set(next);
    });

    view! {
        <Layout tone=Tone::Muted>
            <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
                <div>
                    <h1 class="text-3xl font-bold">"내가 작성한 글"</h1>
                    <p class="text-base-content/70 mt-1">"카테고리별로 분류된 글 목록입니다"</p>
                </div>
                {move || match state.get() {
                    ListState::Loading => view! {
                        <div class="flex justify-center py-12 gap-2">
                            <span class="loading loading-spinner text-primary"></span>
                            "불러오는 중..."
                        </div>
                    }
                    .into_any(),
                    ListState::Error(message) => view! {
                        <div role="alert" class="alert alert-error">
                            <span>{message}</span>
                        </div>
                    }
                    .into_any(),
                    ListState::Loaded(groups) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {groups
                                .into_iter()
                                .map(|group| view! { <CategorySection group=group /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </Layout>
    }
}

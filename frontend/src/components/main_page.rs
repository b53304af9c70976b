//! 分类选择与新建文档

use crate::auth::use_auth;
use crate::components::layout::{Layout, Tone};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use gaide::forms::NewDocumentForm;
use gaide_shared::{CATALOG, Category, CategoryInfo, MAX_KEYWORDS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

#[component]
fn CategoryCard(info: &'static CategoryInfo, form: RwSignal<NewDocumentForm>) -> impl IntoView {
    let category = info.category;
    let selected = move || form.with(|f| f.category == Some(category));
    let style = move || {
        let border = if selected() {
            info.selected_border_color
        } else {
            "transparent"
        };
        format!("background-color: {}; border-color: {};", info.bg_color, border)
    };

    view! {
        <button
            type="button"
            class="card border-4 text-left transition hover:shadow-lg"
            style=style
            on:click=move |_| form.update(|f| f.category = Some(category))
        >
            <div class="card-body p-5">
                <h3 class="card-title" style=format!("color: {};", info.icon_color)>
                    {info.title}
                </h3>
                <p class="text-sm text-base-content/70">{info.description}</p>
            </div>
        </button>
    }
}

#[component]
fn KeywordInput(form: RwSignal<NewDocumentForm>) -> impl IntoView {
    let add = move || {
        form.update(|f| {
            f.add_keyword();
        })
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add();
        }
    };

    view! {
        <div class="form-control">
            <label class="label" for="keyword">
                <span class="label-text">"키워드"</span>
                <span class="label-text-alt">
                    {move || form.with(|f| f.keywords.len())} " / " {MAX_KEYWORDS}
                </span>
            </label>
            <div class="join w-full">
                <input
                    id="keyword"
                    type="text"
                    placeholder="키워드를 입력하고 Enter"
                    on:input=move |ev| form.update(|f| f.keyword_input = event_target_value(&ev))
                    on:keydown=on_keydown
                    prop:value=move || form.with(|f| f.keyword_input.clone())
                    disabled=move || form.with(NewDocumentForm::keywords_full)
                    class="input input-bordered join-item flex-1"
                />
                <button
                    type="button"
                    class="btn btn-primary join-item"
                    disabled=move || !form.with(NewDocumentForm::can_add_keyword)
                    on:click=move |_| add()
                >
                    "+"
                </button>
            </div>
            <div class="flex flex-wrap gap-2 mt-2">
                {move || {
                    form.with(|f| f.keywords.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(index, keyword)| view! {
                            <span class="badge badge-outline gap-1">
                                {keyword}
                                <button
                                    type="button"
                                    class="text-xs"
                                    on:click=move |_| form.update(|f| f.remove_keyword(index))
                                >
                                    "✕"
                                </button>
                            </span>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn MainPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(NewDocumentForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = match form.with_untracked(NewDocumentForm::validate) {
            Ok(req) => req,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match auth.api().create_new_document(&req).await {
                Ok(id) => router.go(AppRoute::Document(id)),
                Err(e) => {
                    warn!(error = %e, "document creation failed");
                    set_error_msg.set(Some(e.to_string()));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    let selected_label = move || {
        form.with(|f| f.category)
            .map(|c: Category| c.label())
            .unwrap_or("카테고리를 선택해주세요")
    };

    view! {
        <Layout tone=Tone::Muted>
            <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-8">
                <div>
                    <h1 class="text-3xl font-bold">"어떤 글을 쓰시나요?"</h1>
                    <p class="text-base-content/70 mt-1">"카테고리를 고르고 글의 주제를 알려주세요."</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {CATALOG
                        .iter()
                        .map(|info| view! { <CategoryCard info=info form=form /> })
                        .collect_view()}
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="card-title">{selected_label}</h2>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="title">
                                <span class="label-text">"제목"</span>
                            </label>
                            <input
                                id="title"
                                type="text"
                                placeholder="제목을 입력하세요"
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.title.clone())
                                class="input input-bordered"
                            />
                        </div>

                        <KeywordInput form=form />

                        <div class="form-control">
                            <label class="label" for="description">
                                <span class="label-text">"설명 (선택)"</span>
                            </label>
                            <textarea
                                id="description"
                                placeholder="글의 주제나 조건을 적어주세요"
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.description.clone())
                                class="textarea textarea-bordered h-24"
                            ></textarea>
                        </div>

                        <div class="card-actions justify-end mt-4">
                            <button
                                class="btn btn-primary"
                                disabled=move || is_submitting.get() || form.with(|f| f.category.is_none())
                            >
                                {move || if is_submitting.get() { "생성 중..." } else { "글쓰기 시작" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Layout>
    }
}

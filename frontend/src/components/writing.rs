//! 写作页
//!
//! 页面状态全部放在一个 `RwSignal<WritingSession>` 里，
//! 事件处理只做 `begin_*` → 异步请求 → `finish_*` 的编排。

mod feedback_panel;

use crate::auth::use_auth;
use crate::components::layout::{Layout, Tone};
use gaide::workflow::{Phase, WritingSession};
use gaide_shared::{Document, DocumentId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use feedback_panel::FeedbackPanel;

fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

#[component]
pub fn WritingPage(doc_id: Option<DocumentId>) -> impl IntoView {
    let auth = use_auth();

    let session = RwSignal::new(match doc_id.clone() {
        Some(id) => WritingSession::loading(id),
        None => WritingSession::new(Document::default()),
    });

    if let Some(id) = doc_id {
        spawn_local(async move {
            let result = auth.api().get_document(&id).await;
            session.try_update(|s| s.finish_load(result));
        });
    }

    // 只在阶段变化时重建编辑器，避免输入时丢失焦点
    let phase = Memo::new(move |_| session.with(|s| s.phase().clone()));

    view! {
        <Layout tone=Tone::Muted>
            {move || match phase.get() {
                Phase::Loading => view! {
                    <div class="flex items-center justify-center min-h-[60vh] gap-2">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                        "문서를 불러오는 중입니다..."
                    </div>
                }
                .into_any(),
                Phase::Failed(message) => view! {
                    <div class="max-w-3xl mx-auto p-8">
                        <div role="alert" class="alert alert-error">
                            <span>{message}</span>
                        </div>
                    </div>
                }
                .into_any(),
                Phase::Ready => view! { <Editor session=session /> }.into_any(),
            }}
        </Layout>
    }
}

#[component]
fn Editor(session: RwSignal<WritingSession>) -> impl IntoView {
    let auth = use_auth();

    let request_feedback = move |_| {
        let Some(begun) = session.try_update(WritingSession::begin_feedback) else {
            return;
        };
        let req = match begun {
            Ok(req) => req,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        spawn_local(async move {
            let result = auth.api().request_sentence_feedback(&req).await;
            if let Some(Err(e)) = session.try_update(|s| s.finish_feedback(result)) {
                alert(&format!("피드백 요청에 실패했습니다.\n{}", e));
            }
        });
    };

    let save = move || {
        let Some(Ok(req)) = session.try_update(WritingSession::begin_save) else {
            return;
        };

        spawn_local(async move {
            let api = auth.api();
            let saved = api.save_document(&req).await;
            let eval_req = match session.try_update(|s| s.finish_save(saved)) {
                Some(Ok(eval_req)) => eval_req,
                Some(Err(e)) => {
                    alert(&format!("저장에 실패했습니다.\n{}", e));
                    return;
                }
                None => return,
            };

            let evaluation = api.get_final_evaluation(&eval_req).await;
            if let Some(Err(e)) = session.try_update(|s| s.finish_evaluation(evaluation)) {
                alert(&format!("최종 평가를 불러오지 못했습니다.\n{}", e));
            }
        });
    };

    let category_label = move || session.with(|s| s.document().category.label());

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="card bg-base-100 shadow-xl lg:col-span-2">
                <div class="card-body">
                    <span class="badge badge-primary">{category_label}</span>
                    <input
                        type="text"
                        placeholder="제목"
                        on:input=move |ev| session.update(|s| s.set_title(event_target_value(&ev)))
                        prop:value=move || session.with(|s| s.document().title.clone())
                        class="input input-ghost text-2xl font-bold px-0"
                    />
                    <textarea
                        on:input=move |ev| session.update(|s| s.edit_content(event_target_value(&ev)))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            let key = ev.key();
                            if key == "Enter" && session.with_untracked(WritingSession::overlay_visible) {
                                session.update(|s| s.key_pressed(&key));
                            }
                        }
                        prop:value=move || session.with(|s| s.document().content.clone())
                        class="textarea textarea-bordered min-h-[50vh] text-base leading-relaxed"
                    ></textarea>
                    <div class="flex items-center justify-between mt-2">
                        <span class="text-sm text-base-content/60">
                            {move || session.with(WritingSession::word_count)} " words"
                        </span>
                        <button
                            class="btn btn-primary"
                            on:click=request_feedback
                            disabled=move || !session.with(WritingSession::can_request_feedback)
                        >
                            {move || if session.with(WritingSession::is_feedback_loading) {
                                view! { <span class="loading loading-spinner"></span> "피드백 요청 중..." }.into_any()
                            } else {
                                "피드백 요청".into_any()
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <FeedbackPanel session=session on_save=move |_| save() />
        </div>
    }
}

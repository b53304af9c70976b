//! 写作教练面板
//!
//! 标签切换、两类反馈列表、最终评价浮层与保存按钮。

use gaide::workflow::{FeedbackTab, WritingSession};
use leptos::prelude::*;

#[component]
fn TabButton(tab: FeedbackTab, session: RwSignal<WritingSession>) -> impl IntoView {
    let class = move || {
        if session.with(|s| s.active_tab() == tab) {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <button role="tab" class=class on:click=move |_| session.update(|s| s.select_tab(tab))>
            {tab.label()}
        </button>
    }
}

#[component]
fn EmptyHint(tab: FeedbackTab) -> impl IntoView {
    let lines = match tab {
        FeedbackTab::Sentence => [
            "피드백을 받고 싶은 내용을 작성한 후",
            "왼쪽의 \"피드백 요청\" 버튼을 눌러주세요.",
        ],
        FeedbackTab::Structure => [
            "개요 피드백을 받으려면",
            "상단에서 \"개요\" 탭을 선택한 뒤 피드백을 요청해 주세요.",
        ],
    };

    view! {
        <div class="text-center text-base-content/50 py-12 space-y-1">
            {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
        </div>
    }
}

#[component]
fn SentenceList(items: Vec<String>) -> impl IntoView {
    view! {
        <div>
            <div class="font-semibold mb-2">"개선 제안:"</div>
            <ul class="list-disc pl-5 space-y-2">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn StructureList(items: Vec<String>) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, text)| view! {
                    <div class="border border-base-300 rounded-box p-3">
                        <div class="font-semibold text-primary">{format!("#{}", index + 1)}</div>
                        <div class="text-sm mt-1">{text}</div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn FeedbackPanel(
    session: RwSignal<WritingSession>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let content = move || {
        session.with(|s| {
            if s.overlay_visible() {
                let text = s
                    .evaluation()
                    .map(str::to_string)
                    .unwrap_or_else(|| "최종 평가를 불러오는 중...".to_string());
                return view! {
                    <div>
                        <div class="font-semibold mb-2">"최종 평가:"</div>
                        <p class="whitespace-pre-wrap">{text}</p>
                    </div>
                }
                .into_any();
            }

            let tab = s.active_tab();
            let items = s.active_feedback().to_vec();
            match (tab, items.is_empty()) {
                (_, true) => view! { <EmptyHint tab=tab /> }.into_any(),
                (FeedbackTab::Sentence, false) => view! { <SentenceList items=items /> }.into_any(),
                (FeedbackTab::Structure, false) => view! { <StructureList items=items /> }.into_any(),
            }
        })
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Writing Coach"</h2>
                <div role="tablist" class="tabs tabs-boxed">
                    <TabButton tab=FeedbackTab::Sentence session=session />
                    <TabButton tab=FeedbackTab::Structure session=session />
                </div>

                <div class="flex-1 overflow-y-auto min-h-[40vh] mt-4">{content}</div>

                <div class="card-actions justify-end mt-4">
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| on_save.run(())
                        disabled=move || !session.with(WritingSession::can_save)
                    >
                        {move || if session.with(WritingSession::is_saving) { "저장 중..." } else { "저장" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

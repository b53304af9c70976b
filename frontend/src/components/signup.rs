use crate::auth::use_auth;
use crate::components::layout::{Layout, Tone};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use gaide::forms::SignupForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

/// 单个输入框
#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=kind
                placeholder=placeholder
                on:input=move |ev| on_input(event_target_value(&ev))
                prop:value=value
                class="input input-bordered"
            />
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(SignupForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let mismatch = move || form.with(SignupForm::password_mismatch);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = match form.with_untracked(SignupForm::validate) {
            Ok(req) => req,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match auth.signup(req).await {
                Ok(()) => {
                    let _ = window().alert_with_message("회원가입이 완료되었습니다!");
                    router.go(AppRoute::Login);
                }
                Err(e) => {
                    warn!(error = %e, "signup failed");
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Layout tone=Tone::Brand>
            <div class="hero min-h-screen">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <h1 class="text-4xl font-bold text-primary">"gAIde"</h1>
                        <p class="text-base-content/70 mt-2">
                            "당신이 쓴 문장에 AI의 손길을 더해주는 글 첨삭 파트너"
                        </p>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <h2 class="card-title">"회원가입"</h2>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <Field
                                id="name"
                                label="이름"
                                placeholder="이름을 입력하세요"
                                value=Signal::derive(move || form.with(|f| f.name.clone()))
                                on_input=move |v| form.update(|f| f.name = v)
                            />
                            <Field
                                id="login_id"
                                label="ID"
                                placeholder="ID를 입력하세요"
                                value=Signal::derive(move || form.with(|f| f.login_id.clone()))
                                on_input=move |v| form.update(|f| f.login_id = v)
                            />
                            <Field
                                id="password"
                                label="비밀번호"
                                kind="password"
                                placeholder="비밀번호를 입력하세요"
                                value=Signal::derive(move || form.with(|f| f.password.clone()))
                                on_input=move |v| form.update(|f| f.password = v)
                            />
                            <Field
                                id="confirm_password"
                                label="비밀번호 확인"
                                kind="password"
                                placeholder="비밀번호를 다시 입력하세요"
                                value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                                on_input=move |v| form.update(|f| f.confirm_password = v)
                            />
                            <Show when=mismatch>
                                <p class="text-error text-sm">"입력하신 비밀번호가 다릅니다"</p>
                            </Show>

                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() { "처리 중..." } else { "회원가입" }}
                                </button>
                            </div>
                            <p class="text-center text-sm mt-2">
                                "이미 계정이 있으신가요? "
                                <Link route=AppRoute::Login class="link link-primary">"로그인"</Link>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

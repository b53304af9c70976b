use crate::auth::use_auth;
use crate::components::layout::{Layout, Tone};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use gaide::auth::MSG_LOGIN_WITHOUT_TOKEN;
use gaide::forms::LoginForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(LoginForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = match form.with_untracked(LoginForm::validate) {
            Ok(req) => req,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match auth.login(req).await {
                Ok(true) => router.go(AppRoute::Main),
                Ok(false) => set_error_msg.set(Some(MSG_LOGIN_WITHOUT_TOKEN.to_string())),
                Err(e) => {
                    warn!(error = %e, "login failed");
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
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="login_id">
                                    <span class="label-text">"ID"</span>
                                </label>
                                <input
                                    id="login_id"
                                    type="text"
                                    placeholder="ID를 입력하세요"
                                    on:input=move |ev| form.update(|f| f.login_id = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.login_id.clone())
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"비밀번호"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="비밀번호를 입력하세요"
                                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.password.clone())
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "처리 중..." }.into_any()
                                    } else {
                                        "로그인".into_any()
                                    }}
                                </button>
                            </div>
                            <p class="text-center text-sm mt-2">
                                "계정이 없으신가요? "
                                <Link route=AppRoute::Signup class="link link-primary">"회원가입"</Link>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

//! gAIde 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: API 客户端与认证状态
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod layout;
    pub mod login;
    pub mod main_page;
    pub mod my_page;
    pub mod signup;
    pub mod writing;
}

use crate::auth::AuthContext;
use crate::components::layout::{Header, Layout, Tone};
use crate::components::login::LoginPage;
use crate::components::main_page::MainPage;
use crate::components::my_page::MyPage;
use crate::components::signup::SignupPage;
use crate::components::writing::WritingPage;

use leptos::prelude::*;

// 浏览器平台适配：fetch 传输、sessionStorage、路由
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::BrowserSessionStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Main => view! { <MainPage /> }.into_any(),
        AppRoute::Writing => view! { <WritingPage doc_id=None /> }.into_any(),
        AppRoute::Document(id) => view! { <WritingPage doc_id=Some(id) /> }.into_any(),
        AppRoute::MyPage => view! { <MyPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <Layout tone=Tone::Muted>
                <div class="flex items-center justify-center min-h-[60vh]">
                    <div class="text-center">
                        <h1 class="text-6xl font-bold text-error">"404"</h1>
                        <p class="text-xl mt-4">"페이지를 찾을 수 없습니다."</p>
                    </div>
                </div>
            </Layout>
        }
        .into_any(),
    }
}

/// 页头只在登录、注册以外的页面显示
#[component]
fn Shell() -> impl IntoView {
    let router = use_router();
    let shows_header = move || router.current_route().with(AppRoute::shows_header);

    view! {
        <Show when=shows_header>
            <Header />
        </Show>
        <RouterOutlet matcher=route_matcher />
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（从 sessionStorage 恢复登录状态）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Shell />
        </Router>
    }
}

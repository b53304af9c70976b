//! 页面骨架：背景包装与公共页头

use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

/// 页面背景色调
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Muted,
    /// 登录、注册页的品牌色背景
    Brand,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Muted => "min-h-screen bg-base-200",
            Tone::Brand => "min-h-screen bg-gradient-to-br from-primary/20 to-secondary/20",
        }
    }
}

/// 页面背景包装，由页面显式声明色调
#[component]
pub fn Layout(#[prop(optional)] tone: Tone, children: Children) -> impl IntoView {
    view! {
        <div class=tone.class()>
            {children()}
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="navbar bg-base-100 shadow-md px-4 md:px-8">
            <div class="flex-1">
                <Link route=AppRoute::Main class="btn btn-ghost text-xl font-bold text-primary">
                    "gAIde"
                </Link>
            </div>
            <div class="flex-none gap-2">
                <Link route=AppRoute::MyPage class="btn btn-ghost">
                    "내 문서"
                </Link>
                <button class="btn btn-outline btn-sm" on:click=move |_| auth.logout()>
                    "로그아웃"
                </button>
            </div>
        </div>
    }
}

//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::web::{BrowserSessionStorage, FetchHttpClient};
use gaide::{ApiClient, ApiResult, ClientConfig};
use gaide_shared::protocol::{LoginRequest, SignupRequest};
use leptos::prelude::*;
use tracing::info;

/// 前端使用的 API 客户端
pub type GaideApi = ApiClient<FetchHttpClient, BrowserSessionStorage>;

/// 认证上下文
///
/// API 客户端与认证状态信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    api: StoredValue<GaideApi>,
    is_authenticated: RwSignal<bool>,
}

impl AuthContext {
    /// 创建认证上下文，已存的会话令牌视为已登录
    pub fn new() -> Self {
        let config = ClientConfig::new(option_env!("GAIDE_API_BASE_URL"));
        info!(base_url = %config.base_url, "api client configured");
        let api = GaideApi::new(config, FetchHttpClient, BrowserSessionStorage);
        let is_authenticated = RwSignal::new(api.is_authenticated());

        Self {
            api: StoredValue::new(api),
            is_authenticated,
        }
    }

    pub fn api(&self) -> GaideApi {
        self.api.get_value()
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.is_authenticated.into()
    }

    pub async fn signup(&self, req: SignupRequest) -> ApiResult<()> {
        self.api().signup(&req).await
    }

    /// 登录，返回是否已保存令牌
    ///
    /// 响应没有令牌时仍算成功，但认证状态保持未登录。
    pub async fn login(&self, req: LoginRequest) -> ApiResult<bool> {
        let api = self.api();
        api.login(&req).await?;
        let stored = api.is_authenticated();
        self.is_authenticated.set(stored);
        Ok(stored)
    }

    /// 注销并清除令牌
    ///
    /// 导航将由路由服务的认证状态监听自动处理。
    pub fn logout(&self) {
        self.api().logout();
        self.is_authenticated.set(false);
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

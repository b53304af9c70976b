//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use gaide_shared::DocumentId;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    Signup,
    /// 选择分类、新建文档
    Main,
    /// 尚未保存的新文档
    Writing,
    /// 编辑已有文档
    Document(DocumentId),
    MyPage,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Login,
            "/signup" => Self::Signup,
            "/main" => Self::Main,
            "/writing" => Self::Writing,
            "/mypage" => Self::MyPage,
            _ => trimmed
                .strip_prefix("/documents/")
                .filter(|rest| !rest.contains('/'))
                .and_then(DocumentId::parse)
                .map(Self::Document)
                .unwrap_or(Self::NotFound),
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Main => "/main".to_string(),
            Self::Writing => "/writing".to_string(),
            Self::Document(id) => format!("/documents/{}", id),
            Self::MyPage => "/mypage".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Main | Self::Writing | Self::Document(_) | Self::MyPage
        )
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 登录、注册页不显示公共页头
    pub fn shows_header(&self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Main
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/signup"), AppRoute::Signup);
        assert_eq!(AppRoute::from_path("/main/"), AppRoute::Main);
        assert_eq!(AppRoute::from_path("/writing"), AppRoute::Writing);
        assert_eq!(AppRoute::from_path("/mypage"), AppRoute::MyPage);
        assert_eq!(
            AppRoute::from_path("/documents/42"),
            AppRoute::Document(DocumentId::Number(42))
        );
        assert_eq!(
            AppRoute::from_path("/documents/abc-1"),
            AppRoute::Document(DocumentId::Text("abc-1".into()))
        );
        assert_eq!(AppRoute::from_path("/documents/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/documents/1/edit"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        let route = AppRoute::Document(DocumentId::Number(7));
        assert_eq!(route.to_path(), "/documents/7");
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }

    #[test]
    fn test_guard_and_header() {
        assert!(AppRoute::MyPage.requires_auth());
        assert!(AppRoute::Document(DocumentId::Number(1)).requires_auth());
        assert!(!AppRoute::Signup.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());

        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Signup.should_redirect_when_authenticated());

        assert!(!AppRoute::Login.shows_header());
        assert!(!AppRoute::Signup.shows_header());
        assert!(AppRoute::Writing.shows_header());
        assert!(AppRoute::NotFound.shows_header());
    }
}

//! sessionStorage 封装模块
//!
//! 令牌只在当前标签页的会话内有效，关闭标签页即失效。

use gaide::KeyValueStore;
use gloo_storage::{SessionStorage, Storage};

/// 浏览器 sessionStorage
///
/// 直接读写原始字符串，不做 JSON 编码。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

impl KeyValueStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        SessionStorage::raw().set_item(key, value).is_ok()
    }

    fn remove(&self, key: &str) {
        SessionStorage::delete(key);
    }
}

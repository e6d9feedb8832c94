use contracts::system::session::{LoginInfo, LOGIN_INFO_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Login info written by the login page; `None` when absent or unreadable
pub fn load_login_info() -> Option<LoginInfo> {
    let raw = get_local_storage()?.get_item(LOGIN_INFO_KEY).ok()??;
    match LoginInfo::from_json(&raw) {
        Ok(info) => Some(info),
        Err(e) => {
            log::warn!("ignoring stored login info: {:#}", e);
            None
        }
    }
}

/// Clear the session on logout
pub fn clear_login_info() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(LOGIN_INFO_KEY);
    }
}

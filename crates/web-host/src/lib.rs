pub mod context;
pub mod dom;
pub mod error;
pub mod frame;
pub mod image;

/// パニック時のメッセージをコンソールに出す
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

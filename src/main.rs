//! Progress Todo Frontend Entry Point

mod app;
mod components;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    match console_logger::init(log::LevelFilter::Debug) {
        Ok(logger) => {
            // Report the panic, then the log lines leading up to it
            std::panic::set_hook(Box::new(move |info| {
                console_error_panic_hook::hook(info);
                let recent = format!("[APP] Recent log lines:\n{}", logger.dump());
                web_sys::console::error_1(&recent.into());
            }));
        }
        Err(e) => {
            console_error_panic_hook::set_once();
            web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
        }
    }
    mount_to_body(App);
}

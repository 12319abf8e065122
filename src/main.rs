mod app;
mod clipboard;
mod components;
mod config;
mod models;
mod timer;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

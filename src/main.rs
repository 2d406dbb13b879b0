use log::{info, Level};
use web_sys::console;

use clientist_frontend::App;

// Styled startup banner, informational only.
fn welcome_banner() {
    console::log_2(
        &"%c🚀 Clientist Website".into(),
        &"font-size: 24px; font-weight: bold; color: #8B5CF6;".into(),
    );
    console::log_2(
        &"%cManage Your Clients Like a Pro".into(),
        &"font-size: 14px; color: #6B7280;".into(),
    );
    console::log_2(&"%c---".into(), &"color: #E5E7EB;".into());
    console::log_2(
        &format!("%cNeed help? Contact: {}", clientist_frontend::config::SUPPORT_EMAIL).into(),
        &"font-size: 12px; color: #9CA3AF;".into(),
    );
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    welcome_banner();

    yew::Renderer::<App>::new().render();
}

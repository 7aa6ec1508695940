//! UI-Komponenten: Menü, Toolbar, Status-Bar, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
pub mod menu;
pub mod status;
pub mod toolbar;

pub use dialogs::show_notification;
pub use input::collect_viewport_events;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

pub mod admin_api;
pub mod notifier;
pub mod posters;

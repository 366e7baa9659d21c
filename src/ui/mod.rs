mod app;
mod chat_view;
mod components;
mod errors;
mod state;

pub use app::ChatApp;

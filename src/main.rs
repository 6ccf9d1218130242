mod app;
mod cli;
mod components;
mod config;
mod error;
mod message;
mod model;
mod picker;
mod views;

pub fn main() -> iced::Result {
    app::run()
}

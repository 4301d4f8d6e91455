mod app;
mod audio;
mod browser;
mod config;
mod controller;
mod error;
mod logging;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}

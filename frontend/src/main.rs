use nightmode::Settings;
use page::{Page, PageProps};
use tracing_subscriber::{filter::LevelFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

use crate::night_mode::init_night_mode;

mod night_mode;
mod page;

fn main() {
    // initialize logging, events end up in the browser console
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry().with(fmt_layer).init();

    let settings = Settings::default();

    // mark the document root before the first render
    let initial = init_night_mode(settings.clone());

    yew::Renderer::<Page>::with_props(PageProps { settings, initial }).render();
}

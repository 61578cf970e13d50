//! Basic usage example of the viewkit view manager

use std::{
    io::Write,
    sync::Arc,
};

use serde_json::json;
use viewkit::{FnView, RenderResult, Result, View, ViewManager};

/// A toy "template": a static page shell with a couple of placeholders.
/// A real host would register pre-built templating engine objects here.
struct PageTemplate {
    shell: &'static str,
}

impl View for PageTemplate {
    fn render(&self, out: &mut dyn Write, data: &serde_json::Value) -> RenderResult<()> {
        let title = data["title"].as_str().unwrap_or("untitled");
        let rendered = self.shell.replace("{title}", title);
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    println!("viewkit View Manager Example");
    println!("============================");

    // Create a manager; the pool keeps up to 50 idle render buffers
    let manager = ViewManager::new(50)?;

    manager
        .register(
            "pages.home",
            Arc::new(PageTemplate {
                shell: "<html><head><title>{title}</title></head></html>",
            }),
        )
        .register(
            "pages.greet",
            Arc::new(FnView::new(|out: &mut dyn Write, data: &serde_json::Value| {
                write!(out, "Hello, {}", data["name"].as_str().unwrap_or("world"))?;
                Ok(())
            })),
        );

    log::info!("registered {} views", manager.len());

    // Render a page; in a server this sink would be the response body
    let mut sink = Vec::new();
    manager.render("pages.home", &mut sink, &json!({ "title": "Home" }))?;
    println!("pages.home  -> {}", String::from_utf8_lossy(&sink));

    let mut sink = Vec::new();
    manager.render("pages.greet", &mut sink, &json!({ "name": "Ada" }))?;
    println!("pages.greet -> {}", String::from_utf8_lossy(&sink));

    // A second render reuses the buffer parked by the first
    let mut sink = Vec::new();
    manager.render("pages.home", &mut sink, &json!({ "title": "Again" }))?;

    let stats = manager.pool_stats();
    println!(
        "pool: acquired={} recycled={} discarded={} (recycle rate {:.0}%)",
        stats.acquired,
        stats.recycled,
        stats.discarded,
        stats.recycle_rate() * 100.0
    );

    Ok(())
}

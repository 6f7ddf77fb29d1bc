use dom::outline::outline_from_dom;
use enhancer::{Enhancer, EventKind};
use std::{env, fs, process::ExitCode};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Loads a page, runs both enhancement passes over it, plays through a
/// short interaction, and prints the resulting tree. Handy for eyeballing
/// what the enhancer actually did to a page.
fn main() -> ExitCode {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/login.html".to_string());
    let html = match fs::read_to_string(&path) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("cannot read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut dom = dom::parse_document(&html);
    let mut enhancer = Enhancer::new();
    enhancer.enhance(&mut dom);
    enhancer.on_dom_content_loaded(&mut dom);

    // Play through the interactions a user would hit first: focus and
    // fill the username, then reveal the password.
    if let Some(username) = dom::find_element(&dom, &|n| n.attr("name") == Some("username")) {
        let id = username.id();
        enhancer.dispatch(&mut dom, id, EventKind::Focus);
        enhancer.input_value_changed(id, "demo");
        enhancer.dispatch(&mut dom, id, EventKind::Blur);
    }
    if let Some(toggle) = dom::find_element(&dom, &|n| n.has_class("toggle-password")) {
        let id = toggle.id();
        enhancer.dispatch(&mut dom, id, EventKind::Click);
    }

    for line in outline_from_dom(&dom, 200) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}

use std::collections::HashMap;

use translate_toggle::{
    ClickEvent, MockMode, MockTranslator, Node, Page, ToggleConfig, ToggleController,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().expect("valid directive")),
        )
        .init();

    // Two translatable posts paired with their triggers
    let mut page = Page::new();
    page.add_node(
        Node::new("p1")
            .with_class("translate-link")
            .with_text("Translate"),
    );
    page.add_node(
        Node::new("p1-text")
            .with_class("post-text")
            .with_attr("data-postid", "p1")
            .with_text("Hello world"),
    );
    page.add_node(
        Node::new("p2")
            .with_class("translate-link")
            .with_text("Translate"),
    );
    page.add_node(
        Node::new("p2-text")
            .with_class("post-text")
            .with_attr("data-postid", "p2")
            .with_text("Good morning"),
    );

    // Swap in GoogleTranslateProvider::new() for real translations
    let mut mappings = HashMap::new();
    mappings.insert(
        ("Hello world".to_string(), "ru".to_string()),
        "Привет мир".to_string(),
    );
    mappings.insert(
        ("Good morning".to_string(), "ru".to_string()),
        "Доброе утро".to_string(),
    );
    let provider = MockTranslator::new(MockMode::Mappings(mappings));
    let mut controller = ToggleController::new(ToggleConfig::default(), provider);

    for item_id in ["p1", "p2", "p1"] {
        let mut click = ClickEvent::new(item_id);
        let outcome = controller.activate(&mut page, &mut click).await;
        let block = page
            .find_block("post-text", "data-postid", item_id)
            .map(|b| b.text().to_string())
            .unwrap_or_default();
        let label = page
            .node(item_id)
            .map(|n| n.text().to_string())
            .unwrap_or_default();
        println!(
            "clicked {}: outcome={:?} text=\"{}\" label=\"{}\"",
            item_id, outcome, block, label
        );
    }
}

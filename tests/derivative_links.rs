use media_vdom::behavior::{Behavior, DerivativeLinks, ImageState, Page, PairState};
use media_vdom::config::MediaConfig;
use media_vdom::node::{Document, Element};
use media_vdom::render::{RenderConfig, render_document};
use media_vdom::{srcset, webp};

const THUMBS: &str = "https://wiki.example/files/styles/thumb/lighthouse.webp 1x, \
                      https://wiki.example/files/styles/thumb/lighthouse.jpg 1x";
const FULL: &str = "https://wiki.example/files/lighthouse.JPG?itok=Zx9#top";

fn figure(full: &str) -> Element {
    Element::new("div").with_class("omnipedia-media").child(
        Element::new("a")
            .attr("data-photoswipe-src", full)
            .child(Element::new("img").attr("srcset", THUMBS)),
    )
}

fn article() -> Page {
    let body = Element::new("article")
        .child(Element::new("p").text("The lighthouse at dusk."))
        .child(figure(FULL))
        .child(figure("https://wiki.example/files/harbour.png"));
    Page::new(Document::new(body))
}

/// Simulates the browser: pick the first declared candidate.
fn browser_choice(img: &Element) -> String {
    let entries = srcset::parse(img.get_attr("srcset").unwrap_or_default());
    entries[0].url.clone()
}

fn targets(page: &Page) -> Vec<String> {
    page.document()
        .find_all(|e| e.tag == "a")
        .iter()
        .filter_map(|a| a.get_attr("data-photoswipe-src"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_attach_load_detach_round_trip() {
    let mut page = article();
    let original = render_document(page.document(), &RenderConfig::default());
    let root = page.document().root.id;

    let mut links = DerivativeLinks::new(&MediaConfig::default());
    links.attach(&mut page, root);
    assert_eq!(page.listener_count(), 2);

    let images: Vec<_> = page
        .document()
        .find_all(|e| e.tag == "img")
        .iter()
        .map(|img| (img.id, browser_choice(img)))
        .collect();
    for (img, chosen) in &images {
        page.load_image(*img, chosen, &mut links);
    }

    assert_eq!(
        targets(&page),
        vec![
            "https://wiki.example/files/lighthouse.webp?itok=Zx9#top".to_string(),
            "https://wiki.example/files/harbour.webp".to_string(),
        ]
    );

    links.detach(&mut page, root);
    assert_eq!(render_document(page.document(), &RenderConfig::default()), original);
    assert_eq!(links.backup_count(), 0);
}

#[test]
fn test_second_attach_keeps_backup() {
    let mut page = article();
    let root = page.document().root.id;
    let images: Vec<_> = page.document().find_all(|e| e.tag == "img").iter().map(|e| e.id).collect();
    for img in images {
        page.set_image_state(img, ImageState::loaded("https://wiki.example/t.webp"));
    }

    let mut links = DerivativeLinks::default();
    links.attach(&mut page, root);
    let first = targets(&page);
    links.attach(&mut page, root);
    assert_eq!(targets(&page), first);

    let anchor = page.find_id(|e| e.get_attr("data-photoswipe-src").is_some()).unwrap();
    assert_eq!(links.state(anchor), PairState::Resolved);
    assert_eq!(links.backup(anchor), Some(FULL));
}

#[test]
fn test_non_webp_choice_leaves_page_untouched() {
    let mut page = article();
    let root = page.document().root.id;
    let before = page.document().clone();

    let mut links = DerivativeLinks::default();
    links.attach(&mut page, root);
    let images: Vec<_> = page.document().find_all(|e| e.tag == "img").iter().map(|e| e.id).collect();
    for img in images {
        page.load_image(img, "https://wiki.example/files/styles/thumb/lighthouse.png", &mut links);
    }

    assert_eq!(page.document(), &before);
    assert_eq!(links.backup_count(), 0);
}

#[test]
fn test_rewrite_matches_url_rewriter() {
    // the behavior and the plain string rewriter agree on absolute URLs
    assert_eq!(
        webp::image_url_to_webp(FULL).unwrap(),
        "https://wiki.example/files/lighthouse.webp?itok=Zx9#top"
    );
}

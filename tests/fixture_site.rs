use std::path::PathBuf;

use agency_blog::content::{render_document, render_html, Block, HeadingLevel, ListKind};
use agency_blog::templates::{PostCard, PostView};
use agency_blog::Site;

fn fixture_site() -> Site {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    Site::new(&dir, None).unwrap()
}

#[tokio::test]
async fn published_posts_newest_first() {
    let site = fixture_site();
    let posts = site.posts.list_published().await.unwrap();
    let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec![
            "building-scalable-react-architecture",
            "modern-css-techniques-2026",
            "typescript-advanced-patterns",
            "testing-strategies-frontend",
        ]
    );
    assert!(posts.iter().all(|p| p.is_published()));
}

#[tokio::test]
async fn latest_respects_configured_limit() {
    let site = fixture_site();
    let limit = site.config.blog.latest_limit;
    let latest = site.posts.list_latest(limit).await.unwrap();
    assert_eq!(latest.len(), 3);
    assert_eq!(latest[0].slug, "building-scalable-react-architecture");

    assert!(site.posts.list_latest(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn drafts_are_hidden_by_slug() {
    let site = fixture_site();
    assert!(site
        .posts
        .get_by_slug("api-design-best-practices")
        .await
        .unwrap()
        .is_none());

    let slugs = site.posts.list_slugs().await.unwrap();
    assert_eq!(slugs.len(), 4);
    assert!(!slugs.iter().any(|s| s == "api-design-best-practices"));
}

#[tokio::test]
async fn featured_images_are_resolved() {
    let site = fixture_site();
    let post = site
        .posts
        .get_by_slug("modern-css-techniques-2026")
        .await
        .unwrap()
        .unwrap();

    let media = post.featured_image().unwrap();
    assert_eq!(media.url, "/media/modern-css.png");

    let card = PostCard::new(&post, &site.config);
    let image = card.image.unwrap();
    assert_eq!(image.alt, "Modern CSS Techniques for 2026");
    assert_eq!(card.date, "Jan 10, 2026");
}

#[tokio::test]
async fn post_body_renders_to_blocks() {
    let site = fixture_site();
    let post = site
        .posts
        .get_by_slug("building-scalable-react-architecture")
        .await
        .unwrap()
        .unwrap();

    let blocks = render_document(post.content.as_ref()).unwrap();
    assert_eq!(blocks.len(), 6);
    assert_eq!(
        blocks[0],
        Block::Heading {
            level: HeadingLevel::H2,
            text: "Folder structure".to_string()
        }
    );
    assert_eq!(
        blocks[1],
        Block::paragraph("Group code by feature, not by file type.")
    );
    assert!(blocks[2].is_blank());
    match &blocks[3] {
        Block::List { kind, items } => {
            assert_eq!(*kind, ListKind::Ordered);
            assert_eq!(items.len(), 2);
        }
        other => panic!("expected a list, got {:?}", other),
    }

    let html = render_html(&blocks);
    assert!(html.contains("<p>&nbsp;</p>"));
    assert!(html.contains("<ol><li>Colocate state</li><li>Keep components small</li></ol>"));
    assert!(html.contains("<pre><code>export const App = () =&gt; &lt;Layout /&gt;</code></pre>"));
}

#[tokio::test]
async fn posts_without_a_body_have_no_blocks() {
    let site = fixture_site();
    for slug in ["modern-css-techniques-2026", "testing-strategies-frontend"] {
        let post = site.posts.get_by_slug(slug).await.unwrap().unwrap();
        assert!(PostView::new(&post).blocks.is_none(), "{}", slug);
    }
}

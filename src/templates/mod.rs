//! Page templates
//!
//! View data for post cards and post pages, and the HTML pages built from
//! them. Markup is kept to structure only; styling lives with the front end.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{render_document, render_html, Block, Post};
use crate::helpers::{
    full_date, full_url_for, html_escape, image_tag, link_to, post_path, short_date, time_tag,
    BLOG_PATH,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageData {
    pub src: String,
    pub alt: String,
}

/// A post as shown in the landing blog section and the blog index
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Display date, "No date" when unpublished
    pub date: String,
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub path: String,
    pub permalink: String,
    pub image: Option<ImageData>,
}

impl PostCard {
    pub fn new(post: &Post, config: &SiteConfig) -> Self {
        let path = post_path(&post.slug);
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            date: short_date(post.published_at.as_ref()),
            read_time: post.read_time.clone(),
            tags: post.tag_names().into_iter().map(str::to_string).collect(),
            permalink: full_url_for(config, &path),
            path,
            image: image_data(post),
        }
    }
}

/// A post page with its rendered body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    /// Like "8 min read"
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<ImageData>,
    /// `None` when the post has no renderable body
    pub blocks: Option<Vec<Block>>,
}

impl PostView {
    pub fn new(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            date: full_date(post.published_at.as_ref()),
            read_time: post.read_time.as_ref().map(|t| format!("{} read", t)),
            tags: post.tag_names().into_iter().map(str::to_string).collect(),
            image: image_data(post),
            blocks: render_document(post.content.as_ref()),
        }
    }
}

fn image_data(post: &Post) -> Option<ImageData> {
    let media = post.featured_image()?;
    Some(ImageData {
        src: media.url.clone(),
        alt: post
            .featured_image_alt()
            .unwrap_or(post.title.as_str())
            .to_string(),
    })
}

/// Wrap a body in the document shell
fn layout(config: &SiteConfig, title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<main>\n{}\n</main>\n</body>\n</html>\n",
        html_escape(&page_title(config, title)),
        body
    )
}

fn page_title(config: &SiteConfig, title: &str) -> String {
    if title.is_empty() {
        config.title.clone()
    } else {
        format!("{} | {}", title, config.title)
    }
}

fn render_card(post: &Post, config: &SiteConfig) -> String {
    let card = PostCard::new(post, config);
    let mut out = String::from("<article class=\"post-card\">");

    if let Some(image) = &card.image {
        out.push_str(&image_tag(&image.src, &image.alt));
    }

    out.push_str(&time_tag(post.published_at.as_ref(), &card.date));
    if let Some(read_time) = &card.read_time {
        out.push_str(&format!(
            "<span class=\"read-time\">{}</span>",
            html_escape(read_time)
        ));
    }

    out.push_str(&format!("<h3>{}</h3>", link_to(&card.path, &card.title)));
    out.push_str(&format!("<p>{}</p>", html_escape(&card.excerpt)));
    out.push_str(&render_tags(&card.tags));
    out.push_str("</article>");
    out
}

fn render_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let items: String = tags
        .iter()
        .map(|t| format!("<li>{}</li>", html_escape(t)))
        .collect();
    format!("<ul class=\"tags\">{}</ul>", items)
}

fn render_card_list(posts: &[Post], config: &SiteConfig, empty: &str) -> String {
    if posts.is_empty() {
        return format!("<p class=\"empty\">{}</p>", html_escape(empty));
    }
    let cards: String = posts.iter().map(|p| render_card(p, config)).collect();
    format!("<div class=\"posts\">{}</div>", cards)
}

/// Landing page blog section with the latest posts
pub fn render_landing(config: &SiteConfig, latest: &[Post]) -> String {
    let body = format!(
        "<section id=\"blog\" aria-label=\"Blog\">\n<h2>Latest Insights</h2>\n{}\n{}\n</section>",
        render_card_list(latest, config, "No posts yet. Check back soon."),
        link_to(BLOG_PATH, "View all posts")
    );
    layout(config, "", &body)
}

/// Blog index with every published post
pub fn render_index(config: &SiteConfig, posts: &[Post]) -> String {
    let body = format!(
        "{}\n<h1>Blog</h1>\n{}\n<p class=\"count\">{} posts found</p>",
        link_to("/", "Back to Home"),
        render_card_list(posts, config, "No posts published yet."),
        posts.len()
    );
    layout(config, "Blog", &body)
}

/// A single post page
pub fn render_post(config: &SiteConfig, post: &Post) -> String {
    let view = PostView::new(post);
    let mut body = String::new();

    body.push_str(&link_to(BLOG_PATH, "Back to Blog"));
    body.push_str("\n<article>\n<header>");
    body.push_str(&render_tags(&view.tags));
    body.push_str(&format!("<h1>{}</h1>", html_escape(&view.title)));
    body.push_str(&time_tag(post.published_at.as_ref(), &view.date));
    if let Some(read_time) = &view.read_time {
        body.push_str(&format!(
            "<span class=\"read-time\">{}</span>",
            html_escape(read_time)
        ));
    }
    body.push_str("</header>\n");

    if let Some(image) = &view.image {
        body.push_str(&image_tag(&image.src, &image.alt));
        body.push('\n');
    }

    if let Some(blocks) = &view.blocks {
        body.push_str(&render_html(blocks));
        body.push('\n');
    }

    body.push_str("</article>\n");
    body.push_str(&link_to(BLOG_PATH, "Back to all posts"));

    layout(config, &view.title, &body)
}

/// Page shown for a missing post
pub fn render_not_found(config: &SiteConfig) -> String {
    let body = format!(
        "<h1>Post Not Found</h1>\n{}",
        link_to(BLOG_PATH, "Back to Blog")
    );
    layout(config, "Post Not Found", &body)
}

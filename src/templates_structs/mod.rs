// Template context structures for Askama templates.
// Page-level templates live here; slide fragments live in `slides`.

pub mod slides;

use askama::Template;

use crate::layouts::LayoutEntry;

/// One group on the catalog page.
pub struct CatalogGroup<'a> {
    pub name: &'a str,
    pub ordered: bool,
    pub layouts: &'a [LayoutEntry],
}

#[derive(Template)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate<'a> {
    pub app_name: &'a str,
    pub groups: Vec<CatalogGroup<'a>>,
}

/// Full HTML page wrapping one rendered slide fragment.
#[derive(Template)]
#[template(path = "preview.html")]
pub struct PreviewTemplate<'a> {
    pub app_name: &'a str,
    pub layout: &'a LayoutEntry,
    pub slide_html: String,
}

//! 终端渲染

use std::fmt::Write;

use super::{api::CatalogApi, view::ProductListView};
use crate::app::product::model::ProductRecord;

pub const TITLE: &str = "Simple Card List";

pub fn render<A: CatalogApi>(view: &ProductListView<A>) -> String {
    let mut out = String::new();

    if view.is_loading() {
        out.push_str("Loading...\n");
        return out;
    }

    let _ = writeln!(out, "{}\n{}", TITLE, "=".repeat(TITLE.len()));

    if let Some(error) = view.error() {
        let _ = writeln!(out, "[error] {}", error);
    }

    for product in view.products() {
        out.push_str(&render_card(product));
    }

    if view.is_empty_state() {
        out.push_str("\nNo Products Available\n");
        out.push_str(
            "All products have been deleted. You can restore them with `restore`.\n",
        );
    }

    let dialog = view.delete_dialog();
    if dialog.open {
        let _ = writeln!(
            out,
            "\nConfirm Deletion\nAre you sure you want to delete {}? This action cannot be undone.",
            dialog.product_name
        );
    }

    out
}

pub fn render_card(product: &ProductRecord) -> String {
    format!(
        "\n#{} {}\n  {}\n  ${}\n  {}\n",
        product.id, product.name, product.description, product.price, product.image_url
    )
}

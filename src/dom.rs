//! DOM Helpers
//!
//! Mirrors a [`NodeAttrs`] onto a rendered element's dataset.

use crate::node_data::{NodeAttrs, NODE_ATTRIBUTES};

/// Write every node attribute onto `el`; absent values are removed
pub fn write_node_attrs(el: &web_sys::HtmlElement, attrs: &NodeAttrs) {
    let dataset = el.dataset();
    for key in NODE_ATTRIBUTES {
        match attrs.get(key) {
            Some(value) => {
                if dataset.set(key, value).is_err() {
                    log::warn!("failed to set data-{key}");
                }
            }
            None => dataset.delete(key),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Social share links for gallery entries.

use url::form_urlencoded;

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php?u=";
const WHATSAPP_SHARER: &str = "https://wa.me/?text=";

/// Percent-encodes `value` as a single URI component.
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`) are kept, every
/// other byte is written as `%XX`, space included.
#[must_use]
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .map(|chunk| match chunk {
            "+" => "%20",
            "%21" => "!",
            "%27" => "'",
            "%28" => "(",
            "%29" => ")",
            "%7E" => "~",
            other => other,
        })
        .collect()
}

#[must_use]
pub fn facebook_share_url(display_url: &str) -> String {
    format!("{FACEBOOK_SHARER}{}", encode_component(display_url))
}

#[must_use]
pub fn whatsapp_share_url(display_url: &str) -> String {
    format!("{WHATSAPP_SHARER}{}", encode_component(display_url))
}

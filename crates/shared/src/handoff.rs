//! Payloads handed from one page to the next through a query parameter.
//!
//! A payload is an ordered list of strings serialized as a JSON array and
//! percent-encoded. Pages never share any other state.

pub const CAPTURE_ROUTE: &str = "/";
pub const PLANNING_ROUTE: &str = "/cardapio";
pub const SHOPPING_ROUTE: &str = "/lista";

pub const INGREDIENTS_PARAM: &str = "ingredients";
pub const SHOPPING_PARAM: &str = "shopping";

/// Serializes `items` as a JSON array, without percent-encoding.
pub fn to_json<S: AsRef<str>>(items: &[S]) -> crate::Result<String> {
    let items = items.iter().map(|item| item.as_ref()).collect::<Vec<&str>>();

    Ok(serde_json::to_string(&items)?)
}

/// Serializes `items` as JSON and percent-encodes the result.
pub fn encode<S: AsRef<str>>(items: &[S]) -> crate::Result<String> {
    Ok(urlencoding::encode(&to_json(items)?).into_owned())
}

/// Parses a query value that was already percent-decoded by the extractor.
///
/// Only a JSON array of strings is accepted.
pub fn decode(raw: &str) -> crate::Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn href<S: AsRef<str>>(route: &str, param: &str, items: &[S]) -> crate::Result<String> {
    Ok(format!("{route}?{param}={}", encode(items)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_payload_is_query_safe() {
        let encoded = encode(&["tomato", "feijão & arroz"]).unwrap();

        assert!(!encoded.contains('"'));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains(' '));
        assert!(encoded.starts_with("%5B%22tomato%22"));
    }

    #[test]
    fn decoded_encoding_gives_back_the_list() {
        let items = vec!["Fruit".to_owned(), "Bread".to_owned(), "a/b?c=d".to_owned()];
        let encoded = encode(&items).unwrap();
        let raw = urlencoding::decode(&encoded).unwrap();

        assert_eq!(decode(&raw).unwrap(), items);
    }

    #[test]
    fn decode_rejects_anything_but_string_arrays() {
        assert!(decode("").is_err());
        assert!(decode("not json").is_err());
        assert!(decode("[\"tomato\"").is_err());
        assert!(decode("{\"a\":1}").is_err());
        assert!(decode("[1,2,3]").is_err());
        assert!(decode("\"tomato\"").is_err());
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn href_targets_route_and_param() {
        let link = href(PLANNING_ROUTE, INGREDIENTS_PARAM, &["egg"]).unwrap();
        assert_eq!(link, "/cardapio?ingredients=%5B%22egg%22%5D");

        let link = href::<&str>(SHOPPING_ROUTE, SHOPPING_PARAM, &[]).unwrap();
        assert_eq!(link, "/lista?shopping=%5B%5D");
    }
}

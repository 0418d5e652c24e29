use crate::framework::ResourceError;

/// The resource a request path addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dishes,
    Dish(String),
    Orders { filter: Option<String> },
    Order(String),
}

impl Route {
    /// Parses a path with optional query. Trailing slashes are ignored.
    pub fn parse(target: &str) -> Result<Self, ResourceError> {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };

        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["dishes"] => Ok(Route::Dishes),
            ["dishes", id] if !id.is_empty() => Ok(Route::Dish(id.to_string())),
            ["orders"] => Ok(Route::Orders {
                filter: query.and_then(|q| query_param(q, "id")),
            }),
            ["orders", id] if !id.is_empty() => Ok(Route::Order(id.to_string())),
            _ => Err(ResourceError::PathNotFound(path.to_string())),
        }
    }

    /// Canonical path, as used in 405 messages.
    pub fn path(&self) -> String {
        match self {
            Route::Dishes => "/dishes".to_string(),
            Route::Dish(id) => format!("/dishes/{id}"),
            Route::Orders { .. } => "/orders".to_string(),
            Route::Order(id) => format!("/orders/{id}"),
        }
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| percent_decode(value))
}

/// Decodes `%XX` escapes and `+` in a query value. Malformed escapes are kept
/// as written.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' => {
                let escape = bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escape {
                    Some(byte) => {
                        decoded.push(byte);
                        i += 2;
                    }
                    None => decoded.push(b'%'),
                }
            }
            byte => decoded.push(byte),
        }
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

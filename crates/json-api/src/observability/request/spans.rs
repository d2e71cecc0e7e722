//! HTTP span helpers.

use uuid::Uuid;

use crate::routes::Mount;

#[derive(Debug, Clone)]
pub(super) struct RequestRoute {
    pub(super) group: &'static str,
    pub(super) normalised_path: String,
}

/// Route group label and id-free path for a request span.
pub(super) fn request_route(path: &str) -> RequestRoute {
    let group = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .and_then(Mount::from_segment)
        .map_or("none", Mount::segment);

    RequestRoute {
        group,
        normalised_path: normalise_path(path),
    }
}

fn normalise_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if Uuid::parse_str(segment).is_ok()
            || (!segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()))
        {
            normalised.push_str("{id}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}

use std::{convert::Infallible, fmt, str::FromStr};

/// Display order of the top-level comments
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    /// Newest first
    #[default]
    Latest,

    /// Most likes first, ties in insertion order
    MostLiked,

    /// Insertion order
    Unsorted,
}

impl FromStr for Filter {
    type Err = Infallible;

    /// Unknown names fall back to insertion order
    fn from_str(s: &str) -> Result<Filter, Infallible> {
        Ok(match s {
            "latest" => Filter::Latest,
            "mostLiked" | "most-liked" => Filter::MostLiked,
            _ => Filter::Unsorted,
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Filter::Latest => "latest",
            Filter::MostLiked => "most-liked",
            Filter::Unsorted => "unsorted",
        })
    }
}

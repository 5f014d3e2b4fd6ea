//! Browsing helpers for an ordered list of posts
//!
//! Posts are expected newest first. Tag and category lookups compare URL
//! slugs, so `"Web Dev"` and `"web-dev"` name the same tag.
//!
//! # Example
//!
//! ```rust
//! use pagewise::listing::{neighbours, posts_by_tag, unique_tags};
//! use pagewise::related::Post;
//!
//! let posts = vec![
//!     Post::new("newest", Some("rust"), ["Web Dev", "cli"]),
//!     Post::new("middle", None, ["cli"]),
//!     Post::new("oldest", Some("life"), Vec::<String>::new()),
//! ];
//!
//! assert_eq!(unique_tags(&posts), ["Web Dev", "cli"]);
//! assert_eq!(posts_by_tag(&posts, "web-dev").len(), 1);
//!
//! let around = neighbours(&posts, "middle").unwrap();
//! assert_eq!(around.previous.map(|post| post.slug.as_str()), Some("newest"));
//! assert_eq!(around.next.map(|post| post.slug.as_str()), Some("oldest"));
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::related::Post;

/// The posts on either side of a post in list order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbours<'a> {
    /// The post listed before, `None` for the first post
    pub previous: Option<&'a Post>,
    /// The post listed after, `None` for the last post
    pub next: Option<&'a Post>,
}

/// Find the previous and next posts around `slug`
pub fn neighbours<'a>(posts: &'a [Post], slug: &str) -> Result<Neighbours<'a>> {
    let index = posts
        .iter()
        .position(|post| post.slug == slug)
        .ok_or_else(|| Error::NotFound(format!("post '{slug}'")))?;

    Ok(Neighbours {
        previous: index.checked_sub(1).and_then(|previous| posts.get(previous)),
        next: posts.get(index + 1),
    })
}

/// Every tag used by `posts`, in first-seen order
#[must_use]
pub fn unique_tags(posts: &[Post]) -> Vec<&str> {
    first_seen(posts.iter().flat_map(|post| post.tags.iter().map(String::as_str)))
}

/// Every category used by `posts`, in first-seen order
#[must_use]
pub fn unique_categories(posts: &[Post]) -> Vec<&str> {
    first_seen(
        posts
            .iter()
            .filter_map(|post| post.category.as_deref())
            .filter(|category| !category.is_empty()),
    )
}

/// Posts carrying a tag whose slug is `tag_slug`
#[must_use]
pub fn posts_by_tag<'a>(posts: &'a [Post], tag_slug: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|tag| slugify(tag) == tag_slug))
        .collect()
}

/// Posts whose category slug is `category_slug`
#[must_use]
pub fn posts_by_category<'a>(posts: &'a [Post], category_slug: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| {
            post.category
                .as_deref()
                .is_some_and(|category| !category.is_empty() && slugify(category) == category_slug)
        })
        .collect()
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

/// Turn a title, tag or category into a URL slug
///
/// Lowercases, folds common accented letters to ASCII, spells `&` as `and`,
/// turns whitespace and separators into single dashes and drops everything
/// else.
///
/// # Example
///
/// ```rust
/// use pagewise::listing::slugify;
///
/// assert_eq!(slugify("Me, myself (& ëye)!"), "me-myself-and-eye");
/// assert_eq!(slugify("  Web Dev  "), "web-dev");
/// assert_eq!(slugify("snake_case/path"), "snake-case-path");
/// ```
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut previous = None;

    for c in input.chars().flat_map(char::to_lowercase) {
        match c {
            '&' if previous == Some('&') => {}
            '&' => {
                push_dash(&mut slug);
                slug.push_str("and");
                push_dash(&mut slug);
            }
            c if c.is_whitespace() => push_dash(&mut slug),
            c if c.is_ascii_alphanumeric() => slug.push(c),
            c => match fold(c) {
                Some('-') => push_dash(&mut slug),
                Some(folded) => slug.push(folded),
                None => {}
            },
        }
        previous = Some(c);
    }

    slug.trim_matches('-').to_string()
}

fn push_dash(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}

fn fold(c: char) -> Option<char> {
    let folded = match c {
        'à' | 'á' | 'ä' | 'â' | 'ã' | 'å' | 'æ' => 'a',
        'è' | 'é' | 'ë' | 'ê' => 'e',
        'ì' | 'í' | 'ï' | 'î' => 'i',
        'ò' | 'ó' | 'ö' | 'ô' | 'œ' => 'o',
        'ù' | 'ú' | 'ü' | 'û' | 'ǘ' => 'u',
        'ñ' | 'ń' | 'ǹ' => 'n',
        'ç' => 'c',
        'ß' | 'ś' => 's',
        'ÿ' => 'y',
        'ŕ' => 'r',
        'ṕ' => 'p',
        'ẃ' => 'w',
        'ǵ' => 'g',
        'ḿ' => 'm',
        'ẍ' => 'x',
        'ź' => 'z',
        'ḧ' => 'h',
        '-' | '·' | '/' | '_' | ',' | ':' | ';' => '-',
        _ => return None,
    };
    Some(folded)
}

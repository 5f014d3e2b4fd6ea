//! "You might also like" ranking for blog posts
//!
//! Candidates score `category_match_score` for sharing the current post's
//! category, plus `tag_match_score` for each of their tags the current post
//! also carries. The highest scores win; ties keep list order.
//!
//! # Example
//!
//! ```rust
//! use pagewise::related::{Post, SimilarPosts};
//!
//! let current = Post::new("intro-to-rust", Some("programming"), ["rust", "beginners"]);
//! let posts = vec![
//!     current.clone(),
//!     Post::new("async-rust", Some("programming"), ["rust", "async"]),
//!     Post::new("gardening", Some("life"), ["outdoors"]),
//!     Post::new("python-tips", Some("programming"), ["python", "beginners"]),
//! ];
//!
//! let picks = SimilarPosts::new(&posts, &current).with_max_recommendations(2).recommend();
//! let slugs: Vec<&str> = picks.iter().map(|pick| pick.post.slug.as_str()).collect();
//!
//! assert_eq!(slugs, ["async-rust", "python-tips"]);
//! assert_eq!(picks[0].score, 3.5);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::RelatedConfig;
use crate::error::{Error, Result};

/// Default number of recommendations
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 3;

/// Default score for a shared category
pub const DEFAULT_CATEGORY_MATCH_SCORE: f64 = 2.5;

/// Default score per shared tag
pub const DEFAULT_TAG_MATCH_SCORE: f64 = 1.0;

/// The parts of a post that similarity looks at
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub slug: String,

    #[serde(default)]
    pub category: Option<String>,

    /// A missing or `null` tag list is empty
    #[serde(default, deserialize_with = "tags_or_empty")]
    pub tags: Vec<String>,
}

fn tags_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Post {
    /// Create a post
    pub fn new<S, I, T>(slug: S, category: Option<&str>, tags: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            slug: slug.into(),
            category: category.map(str::to_string),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// A candidate post and its similarity score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPost<'a> {
    pub post: &'a Post,
    pub score: f64,
}

/// Ranks posts by how much they have in common with the current one
#[derive(Debug, Clone)]
pub struct SimilarPosts<'a> {
    posts: Vec<&'a Post>,
    category: Option<String>,
    tags: Vec<String>,
    max_recommendations: usize,
    category_match_score: f64,
    tag_match_score: f64,
}

impl<'a> SimilarPosts<'a> {
    /// Rank `posts` against `current`; `current` itself is never recommended
    pub fn new(posts: &'a [Post], current: &Post) -> Self {
        Self {
            posts: posts.iter().filter(|post| post.slug != current.slug).collect(),
            category: current.category.clone(),
            tags: current.tags.clone(),
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
            category_match_score: DEFAULT_CATEGORY_MATCH_SCORE,
            tag_match_score: DEFAULT_TAG_MATCH_SCORE,
        }
    }

    /// Rank `posts` against the post with `slug`, taken from the same list
    pub fn for_slug(posts: &'a [Post], slug: &str) -> Result<Self> {
        let current = posts
            .iter()
            .find(|post| post.slug == slug)
            .ok_or_else(|| Error::NotFound(format!("post '{slug}'")))?;
        Ok(Self::new(posts, current))
    }

    /// Apply scores and limits from configuration
    #[must_use]
    pub fn with_config(self, config: &RelatedConfig) -> Self {
        self.with_max_recommendations(config.max_recommendations)
            .with_category_match_score(config.category_match_score)
            .with_tag_match_score(config.tag_match_score)
    }

    #[must_use]
    pub fn with_max_recommendations(mut self, max: usize) -> Self {
        self.max_recommendations = max;
        self
    }

    /// Override the category compared against
    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_category_match_score(mut self, score: f64) -> Self {
        self.category_match_score = score;
        self
    }

    /// Override the tags compared against
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub fn with_tag_match_score(mut self, score: f64) -> Self {
        self.tag_match_score = score;
        self
    }

    /// Similarity of a single post
    #[must_use]
    pub fn score(&self, post: &Post) -> f64 {
        let mut score = 0.0;

        if post.category.is_some() && post.category == self.category {
            score += self.category_match_score;
        }

        for tag in &post.tags {
            if self.tags.contains(tag) {
                score += self.tag_match_score;
            }
        }

        score
    }

    /// Score every candidate, one entry per slug
    ///
    /// A later post with an already-seen slug replaces the earlier one in place.
    #[must_use]
    pub fn scores(&self) -> Vec<ScoredPost<'a>> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut scored: Vec<ScoredPost<'a>> = Vec::with_capacity(self.posts.len());

        for &post in &self.posts {
            let entry = ScoredPost {
                post,
                score: self.score(post),
            };
            match positions.get(post.slug.as_str()) {
                Some(&index) => scored[index] = entry,
                None => {
                    positions.insert(post.slug.as_str(), scored.len());
                    scored.push(entry);
                }
            }
        }

        scored
    }

    /// The best `max_recommendations` candidates, highest score first
    #[must_use]
    pub fn recommend(&self) -> Vec<ScoredPost<'a>> {
        let mut scored = self.scores();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.max_recommendations);

        tracing::debug!(
            candidates = self.posts.len(),
            returned = scored.len(),
            "ranked similar posts"
        );

        scored
    }
}

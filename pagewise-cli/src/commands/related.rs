use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagewise::config::Config;
use pagewise::listing::{neighbours, Neighbours};
use pagewise::related::{Post, ScoredPost, SimilarPosts};

use crate::utils::{self, format};

#[derive(Args, Debug)]
pub struct RelatedArgs {
    /// JSON file holding an array of posts ({"slug", "category", "tags"})
    #[arg(short, long, value_name = "FILE")]
    pub posts: PathBuf,

    /// Slug of the post to find neighbours for
    #[arg(short, long)]
    pub slug: String,

    /// How many posts to recommend; defaults to related.max_recommendations
    #[arg(short, long)]
    pub max: Option<usize>,

    /// Print the recommendations as JSON
    #[arg(long)]
    pub json: bool,
}

/// Read a JSON array of posts
pub fn read_posts(path: &Path) -> Result<Vec<Post>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read posts from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse posts in {}", path.display()))
}

/// Rank `posts` against the one with `slug`
pub fn recommend<'a>(
    config: &Config,
    posts: &'a [Post],
    slug: &str,
    max: Option<usize>,
) -> Result<Vec<ScoredPost<'a>>> {
    let mut ranker = SimilarPosts::for_slug(posts, slug)?.with_config(&config.related);
    if let Some(max) = max {
        ranker = ranker.with_max_recommendations(max);
    }
    Ok(ranker.recommend())
}

pub fn execute(config: &Config, args: RelatedArgs) -> Result<()> {
    let posts = read_posts(&args.posts)?;
    let picks = recommend(config, &posts, &args.slug, args.max)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&picks)?);
        return Ok(());
    }

    utils::section(&format!("Around {}", args.slug));
    print_neighbours(&neighbours(&posts, &args.slug)?);

    if picks.is_empty() {
        utils::warning(&format!("No other posts to compare '{}' with", args.slug));
        return Ok(());
    }

    utils::section(&format!("You might also like ({})", args.slug));
    for (rank, pick) in picks.iter().enumerate() {
        println!(
            "  {}. {} {}",
            rank + 1,
            pick.post.slug.bold(),
            format::score(pick.score).dimmed()
        );
    }

    Ok(())
}

fn print_neighbours(around: &Neighbours<'_>) {
    println!(
        "  {} previous: {}   next: {}",
        "→".blue(),
        slug_or_dash(around.previous),
        slug_or_dash(around.next)
    );
}

fn slug_or_dash(post: Option<&Post>) -> &str {
    post.map_or("-", |post| post.slug.as_str())
}

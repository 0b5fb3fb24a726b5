//! List posts

use anyhow::Result;

use crate::Site;

/// Print every post, newest first
pub fn run(site: &Site) -> Result<()> {
    let posts = site.repository().list_posts(None)?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = match post.date {
            Some(_) => post.short_date(),
            None => "undated   ".to_string(),
        };
        println!("  {} - {} [{}]", date, post.title, post.slug);
    }

    Ok(())
}

//! Pure steps of the "comments on the last post" pipeline.

use std::path::{Path, PathBuf};

use crate::types::Post;

/// The post with the highest id, or `None` for an empty slice.
///
/// With duplicate maximum ids any of them may be returned; callers only use
/// the id.
pub fn latest_post(posts: &[Post]) -> Option<&Post> {
    posts.iter().max_by_key(|post| post.id)
}

/// Whether `user_id` can appear in an output file name without naming a
/// different directory.
pub fn is_file_name_safe(user_id: &str) -> bool {
    !user_id.is_empty()
        && user_id != "."
        && user_id != ".."
        && !user_id.contains(['/', '\\', '\0'])
}

pub fn comments_file_name(user_id: &str, post_id: u64) -> String {
    format!("user-{user_id}-post-{post_id}-comments.json")
}

pub fn comments_file_path(output_dir: &Path, user_id: &str, post_id: u64) -> PathBuf {
    output_dir.join(comments_file_name(user_id, post_id))
}

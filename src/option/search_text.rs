//! Denormalized search-text construction

use ahash::AHashSet;

use crate::model::PersonalDetail;

/// Build the searchable blob for one option
///
/// Direct conversations index each participant's display name and dotless
/// login. Room-like conversations exclude member identity (rooms are found
/// by name) and instead index the display name and room subtitle split into
/// individual characters and comma-separated segments, giving a coarse,
/// order-independent corpus. Duplicate terms keep their first occurrence.
pub fn build_search_text(
    details: &[PersonalDetail],
    display_text: &str,
    subtitle: &str,
    is_room_like: bool,
) -> String {
    let mut terms: Vec<String> = Vec::new();

    if is_room_like {
        for source in [display_text, subtitle] {
            terms.extend(source.chars().map(String::from));
            terms.extend(source.split(',').map(str::to_string));
        }
    } else {
        for detail in details {
            terms.push(detail.display_name_or_login().to_string());
            terms.push(detail.login.replace('.', ""));
        }
    }

    let mut seen = AHashSet::new();
    let mut unique = Vec::new();
    for term in terms {
        if seen.insert(term.clone()) {
            unique.push(term);
        }
    }
    unique.join(" ")
}

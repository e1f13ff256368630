use medialist_core::{MediaListView, MediaType};

use crate::platform::effects::Chrome;

/// Text frame for the listing: heading, category bar, items, status footer.
pub fn render(view: &MediaListView, chrome: &Chrome, notifications: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.items.len() + 6);

    let heading = view
        .heading
        .or(chrome.app_state.map(MediaType::heading))
        .unwrap_or("Media");
    lines.push(format!("== {heading} =="));
    lines.push(category_bar(view));

    if chrome.global_loading {
        lines.push("Loading...".to_string());
    }

    if view.items.is_empty() && !view.is_loading_initial {
        lines.push("  (nothing to show)".to_string());
    }
    for (position, item) in view.items.iter().enumerate() {
        lines.push(format!("{:>4}. {}", position + 1, item.display_title()));
    }

    lines.push(footer(view));
    for message in notifications {
        lines.push(format!("! {message}"));
    }
    lines
}

fn category_bar(view: &MediaListView) -> String {
    view.categories
        .iter()
        .map(|category| {
            let number = category.index + 1;
            if category.index == view.selected_category {
                format!("[{number} {}]", category.label)
            } else {
                format!(" {number} {} ", category.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn footer(view: &MediaListView) -> String {
    let pages = match view.total_pages {
        Some(total) => format!("page {} of {}", view.page, total),
        None => format!("page {}", view.page),
    };
    if view.is_loading_more {
        format!("{pages} | loading more...")
    } else if view.is_loading_initial {
        pages
    } else if view.has_more {
        format!("{pages} | `more` loads the next page")
    } else {
        format!("{pages} | end of list")
    }
}

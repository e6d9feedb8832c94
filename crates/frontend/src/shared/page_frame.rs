//! PageFrame: root wrapper for every screen.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a004_sms--list" category=PAGE_CAT_LIST>
//!         <PageHeader title="SMS">...</PageHeader>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id`, `data-page-category` and the BEM modifier class:
/// - `list`    → `page`
/// - `usecase` → `page page--usecase`
/// - `monitor` → `page page--monitor`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_USECASE => "page page--usecase",
        PAGE_CAT_MONITOR => "page page--monitor",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

mod assign;
mod browse;
mod delete;
mod open;
mod search;

pub use assign::assign;
pub use browse::browse;
pub use delete::delete;
pub use open::open;
pub use search::{search, types};

use browser::RecordBrowser;

/// Runs the session guard alone. On denial, waits for the login hint to be
/// printed.
pub(crate) async fn guard(browser: &mut RecordBrowser) -> bool {
    if browser.can_enter() {
        return true;
    }

    browser.wait_redirect().await;

    false
}

/// Runs the session guard and the first load. On denial, waits for the
/// login hint to be printed.
pub(crate) async fn enter(browser: &mut RecordBrowser) -> bool {
    if browser.enter().await {
        return true;
    }

    browser.wait_redirect().await;

    false
}

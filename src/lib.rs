//! Portal core for the studio's marketing site and role-gated
//! dashboard: session, role policy, domain registers, notification
//! log, and per-panel services. Rendering is someone else's job; this
//! crate owns the state and the rules.

pub mod auth;
pub mod contact;
pub mod error;
pub mod notifications;
pub mod packages;
pub mod policy;
pub mod routes;
pub mod services;
pub mod state;
pub mod types;
pub mod util;

use state::PortalState;
use types::Role;

/// Boot a headless demo session: open the state directory, seed the
/// demo project book, sign in as the super admin, and log the
/// overview.
pub fn run() {
    env_logger::init();

    let state_dir = state::default_state_dir();
    let state = PortalState::open(&state_dir);
    state.install_demo_data();

    let session = auth::demo_login(&state, Role::SuperAdmin);
    let overview = services::overview::build(&session, &state);

    log::info!("{}", overview.greeting);
    for tile in &overview.stats {
        log::info!("{}: {} ({})", tile.title, tile.value, tile.change);
    }
    for panel in policy::visible_nav_items(session.role) {
        log::info!("panel available: {}", panel.label());
    }
    log::info!(
        "{} visible project(s), {} notification(s)",
        overview.recent_projects.len(),
        state.notifications.count()
    );
}

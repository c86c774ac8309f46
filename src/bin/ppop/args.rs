//! Command-line argument parsing.

use profile_popup::StartupAction;

/// Parse command-line arguments and determine the startup action.
///
/// Usage: `ppop [user-id]`. With no argument the configured default user
/// is shown.
pub fn parse_args() -> StartupAction {
    let mut args = std::env::args().skip(1);

    let Some(user_id) = args.next() else {
        return StartupAction::Default;
    };

    if args.next().is_some() {
        log::warn!("Ignoring extra arguments");
    }

    if user_id.is_empty() {
        log::warn!("Empty user id argument, using the configured default");
        return StartupAction::Default;
    }

    StartupAction::ShowUser(user_id)
}

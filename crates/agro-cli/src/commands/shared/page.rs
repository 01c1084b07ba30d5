use agro_app::{LoadState, PageController, render_controller};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Print a loaded page. A page whose load failed still prints its state
/// and public message, then the command fails.
pub fn emit<C, V>(controller: &C, view: Option<V>, flags: &GlobalFlags) -> anyhow::Result<()>
where
    C: PageController,
    V: Serialize,
{
    let rendered = render_controller(controller, view)?;
    output(&rendered, flags.format)?;
    match controller.state() {
        LoadState::Ready(_) => Ok(()),
        state => anyhow::bail!("{} page is {}", C::PAGE, state.name()),
    }
}

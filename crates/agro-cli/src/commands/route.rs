use agro_app::resolve;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RouteArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RouteOutput<'a> {
    page: &'a str,
    url: String,
}

/// Handle `agro route`.
pub fn handle(args: &RouteArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let url = resolve(&args.page, args.params.iter().map(|(k, v)| (k, v)));
    output(
        &RouteOutput {
            page: &args.page,
            url,
        },
        flags.format,
    )
}
